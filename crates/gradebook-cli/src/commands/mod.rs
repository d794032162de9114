//! Subcommand implementations and the session they share.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradebook_core::config::load_config_from;
use gradebook_core::{GradeBook, LoadOutcome, Student};

pub mod add;
pub mod init;
pub mod menu;
pub mod register;
pub mod report;
pub mod save;

/// A grade book loaded from its data file, plus where to save it.
pub struct Session {
    pub book: GradeBook,
    pub data_file: PathBuf,
    pub autosave: bool,
}

impl Session {
    /// Load config, then the data file it points at.
    pub fn open(
        data_file: Option<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> Result<(Self, LoadOutcome)> {
        let config = load_config_from(config_path.as_deref())?;
        let data_file = data_file.unwrap_or(config.data_file);

        let mut book = GradeBook::new();
        let outcome = book.load_data(&data_file)?;

        Ok((
            Self {
                book,
                data_file,
                autosave: config.autosave,
            },
            outcome,
        ))
    }

    /// Write the book to the data file and say so.
    pub fn save(&self, out: &mut impl Write) -> Result<()> {
        self.book.save_data(&self.data_file)?;
        writeln!(
            out,
            "Data saved successfully to '{}'.",
            self.data_file.display()
        )?;
        Ok(())
    }

    /// Save only when autosave is on.
    pub fn persist(&self, out: &mut impl Write) -> Result<()> {
        if self.autosave {
            self.save(out)?;
        } else {
            tracing::debug!("autosave disabled, not writing data file");
        }
        Ok(())
    }
}

/// Parse a finite number. NaN and infinities are refused.
pub fn parse_finite(raw: &str) -> Result<f64, String> {
    let n: f64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("'{raw}' is not a number: {e}"))?;
    if n.is_finite() {
        Ok(n)
    } else {
        Err(format!("'{raw}' is not a finite number"))
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Ranking as a table: position, name, email, total marks, GPA.
pub fn ranking_table(ranking: &[&Student]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Name", "Email", "Total Marks", "GPA"]);
    for (i, s) in ranking.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&s.names),
            Cell::new(&s.email),
            Cell::new(format!("{:.2}", s.total_marks())),
            Cell::new(format!("{:.1}", s.gpa())),
        ]);
    }
    table
}

/// Search hits as a table of names and emails.
pub fn students_table(students: &[&Student]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Email"]);
    for s in students {
        table.add_row(vec![Cell::new(&s.names), Cell::new(&s.email)]);
    }
    table
}
