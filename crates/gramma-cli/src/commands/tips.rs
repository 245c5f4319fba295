use gramma_core::tips::catalog;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `gramma tips`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&catalog(), flags.format)
}
