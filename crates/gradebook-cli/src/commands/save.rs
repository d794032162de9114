//! The `gradebook save` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::LoadOutcome;

use super::Session;

/// Load and write back the data file, re-deriving every student's aggregates.
pub fn execute(data_file: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let (session, outcome) = Session::open(data_file, config)?;
    if outcome == LoadOutcome::FileAbsent {
        println!(
            "No data file found at '{}'.",
            session.data_file.display()
        );
    }
    session.save(&mut std::io::stdout().lock())
}
