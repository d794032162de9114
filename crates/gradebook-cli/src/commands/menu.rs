//! The `gradebook menu` command: a numbered prompt loop on stdin.
//!
//! Changes made here stay in memory until option 8 or 9 saves them.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::LoadOutcome;

use super::{add, parse_finite, register, report, Session};

const BANNER: &str = ">>>>>>>>>>>>>>>>>>>>>>>>>>>>>>";

pub fn execute(data_file: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let (mut session, outcome) = Session::open(data_file, config)?;
    let stdin = std::io::stdin();
    let mut out = std::io::stdout().lock();

    writeln!(out, "Welcome to the Grade Book!")?;
    write_load_outcome(&mut out, &session, outcome)?;
    run(&mut session, stdin.lock(), out)
}

fn write_load_outcome(out: &mut impl Write, session: &Session, outcome: LoadOutcome) -> Result<()> {
    match outcome {
        LoadOutcome::Loaded { .. } => writeln!(
            out,
            "Data loaded successfully from '{}'.",
            session.data_file.display()
        )?,
        LoadOutcome::FileAbsent => writeln!(
            out,
            "No data file found at '{}'.",
            session.data_file.display()
        )?,
    }
    Ok(())
}

fn write_menu(out: &mut impl Write) -> Result<()> {
    writeln!(out, "\n{BANNER}")?;
    writeln!(out, "        Grade Book Menu        ")?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "1. Add Student")?;
    writeln!(out, "2. Add Course")?;
    writeln!(out, "3. Register Student for Course")?;
    writeln!(out, "4. Calculate Ranking")?;
    writeln!(out, "5. Search by Grade")?;
    writeln!(out, "6. Generate Transcript")?;
    writeln!(out, "7. Show All Students")?;
    writeln!(out, "8. Save Data")?;
    writeln!(out, "9. Exit")?;
    writeln!(out, "{BANNER}")?;
    Ok(())
}

/// Print `label` and read one line. `None` at end of input.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(|c| c == '\n' || c == '\r').to_string()))
}

/// Prompt until the answer is a finite number. `None` at end of input.
fn prompt_number(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> Result<Option<f64>> {
    while let Some(raw) = prompt(input, out, label)? {
        match parse_finite(&raw) {
            Ok(n) => return Ok(Some(n)),
            Err(_) => writeln!(out, "Invalid number: '{raw}'. Please try again.")?,
        }
    }
    Ok(None)
}

/// Drive the menu until option 9 or end of input.
pub fn run(session: &mut Session, mut input: impl BufRead, mut out: impl Write) -> Result<()> {
    macro_rules! ask {
        ($prompt:ident, $label:expr) => {
            match $prompt(&mut input, &mut out, $label)? {
                Some(answer) => answer,
                None => break,
            }
        };
        ($label:expr) => {
            ask!(prompt, $label)
        };
    }

    loop {
        write_menu(&mut out)?;
        let choice = ask!("Enter your choice: ");

        match choice.trim() {
            "1" => {
                let email = ask!("Enter student's email: ");
                let names = ask!("Enter student's name: ");
                let gender = ask!("Enter student's gender (Male/Female): ");
                add::add_student(&mut session.book, &mut out, &email, &names, &gender)?;
            }
            "2" => {
                let name = ask!("Enter course name: ");
                let trimester = ask!("Enter trimester: ");
                let credits = ask!(prompt_number, "Enter credits: ");
                add::add_course(&mut session.book, &mut out, &name, &trimester, credits)?;
            }
            "3" => {
                let email = ask!("Enter student's email: ");
                let course = ask!("Enter course name: ");
                let marks = ask!(prompt_number, "Enter marks: ");
                register::register(&mut session.book, &mut out, &email, &course, marks)?;
            }
            "4" => report::write_ranking(&session.book, &mut out)?,
            "5" => {
                let grade = ask!("Enter grade to search for: ");
                report::write_search(&session.book, &mut out, &grade)?;
            }
            "6" => {
                let email = ask!("Enter student's email: ");
                report::write_transcript(&session.book, &mut out, &email)?;
            }
            "7" => write!(out, "{}", session.book.show_all_students())?,
            "8" => session.save(&mut out)?,
            "9" => {
                session.save(&mut out)?;
                writeln!(out, "Thank you for using the Grade Book.")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }

    tracing::info!("input closed; leaving menu without saving");
    Ok(())
}
