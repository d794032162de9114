//! The `gradebook add-student` and `gradebook add-course` commands.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::{Course, GradeBook, Student};

use super::{capitalize, Session};

/// Add a student; gender is normalized to "Female"/"Male" casing.
pub fn add_student(
    book: &mut GradeBook,
    out: &mut impl Write,
    email: &str,
    names: &str,
    gender: &str,
) -> Result<()> {
    book.add_student(Student::new(email, names, capitalize(gender)));
    writeln!(out, "The student has been added successfully.")?;
    Ok(())
}

pub fn add_course(
    book: &mut GradeBook,
    out: &mut impl Write,
    name: &str,
    trimester: &str,
    credits: f64,
) -> Result<()> {
    book.add_course(Course::new(name, trimester, credits));
    writeln!(out, "The course has been added successfully.")?;
    Ok(())
}

pub fn student(
    data_file: Option<PathBuf>,
    config: Option<PathBuf>,
    email: String,
    names: String,
    gender: String,
) -> Result<()> {
    let (mut session, _) = Session::open(data_file, config)?;
    let mut out = std::io::stdout().lock();
    add_student(&mut session.book, &mut out, &email, &names, &gender)?;
    session.persist(&mut out)
}

pub fn course(
    data_file: Option<PathBuf>,
    config: Option<PathBuf>,
    name: String,
    trimester: String,
    credits: f64,
) -> Result<()> {
    if credits <= 0.0 {
        tracing::warn!(course = %name, credits, "non-positive credits will not weigh any marks");
    }
    let (mut session, _) = Session::open(data_file, config)?;
    let mut out = std::io::stdout().lock();
    add_course(&mut session.book, &mut out, &name, &trimester, credits)?;
    session.persist(&mut out)
}
