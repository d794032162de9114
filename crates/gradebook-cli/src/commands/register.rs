//! The `gradebook register` command.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::GradeBook;

use super::Session;

/// Register and report the outcome. Returns whether the book changed.
///
/// A missing student or course is reported, not treated as a failure.
pub fn register(
    book: &mut GradeBook,
    out: &mut impl Write,
    email: &str,
    course: &str,
    marks: f64,
) -> Result<bool> {
    match book.register_student_for_course(email, course, marks) {
        Ok(()) => {
            writeln!(out, "The student has been registered successfully.")?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "{e}")?;
            Ok(false)
        }
    }
}

pub fn execute(
    data_file: Option<PathBuf>,
    config: Option<PathBuf>,
    email: String,
    course: String,
    marks: f64,
) -> Result<()> {
    let (mut session, _) = Session::open(data_file, config)?;
    let mut out = std::io::stdout().lock();
    if register(&mut session.book, &mut out, &email, &course, marks)? {
        session.persist(&mut out)?;
    }
    Ok(())
}
