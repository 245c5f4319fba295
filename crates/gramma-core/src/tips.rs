//! Built-in grammar tips shown alongside the dashboard.

use crate::entities::GrammarTip;

const TIPS: &[(&str, &str, &str)] = &[
    (
        "Subject-Verb Agreement",
        "Ensure subjects and verbs agree in number (singular or plural).",
        "Basic Grammar",
    ),
    (
        "Comma Usage",
        "Use commas to separate items in a series and before conjunctions.",
        "Punctuation",
    ),
    (
        "Pronoun Clarity",
        "Make sure pronouns clearly refer to their antecedents.",
        "Clarity",
    ),
    (
        "Active vs Passive Voice",
        "Prefer active voice for clearer, more direct writing.",
        "Style",
    ),
];

/// The tips catalog, in display order.
#[must_use]
pub fn catalog() -> Vec<GrammarTip> {
    TIPS.iter()
        .map(|(title, description, category)| GrammarTip {
            title: (*title).to_string(),
            description: (*description).to_string(),
            category: (*category).to_string(),
        })
        .collect()
}
