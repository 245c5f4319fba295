use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A short grammar guideline shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GrammarTip {
    pub title: String,
    pub description: String,
    pub category: String,
}
