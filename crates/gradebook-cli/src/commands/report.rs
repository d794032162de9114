//! Read-only commands: `rank`, `search`, `transcript`, and `list`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::GradeBook;

use super::{ranking_table, students_table, Session};

pub fn write_ranking(book: &GradeBook, out: &mut impl Write) -> Result<()> {
    let ranking = book.calculate_ranking();
    writeln!(out, "Student Rankings by Total Marks:")?;
    if !ranking.is_empty() {
        writeln!(out, "{}", ranking_table(&ranking))?;
    }
    Ok(())
}

pub fn write_search(book: &GradeBook, out: &mut impl Write, grade: &str) -> Result<()> {
    let hits = book.search_by_grade(grade);
    writeln!(out, "Students with the specified grade:")?;
    if !hits.is_empty() {
        writeln!(out, "{}", students_table(&hits))?;
    }
    Ok(())
}

pub fn write_transcript(book: &GradeBook, out: &mut impl Write, email: &str) -> Result<()> {
    match book.generate_transcript(email) {
        Ok(text) => write!(out, "{text}")?,
        Err(e) => writeln!(out, "{e}")?,
    }
    Ok(())
}

pub fn rank(data_file: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let (session, _) = Session::open(data_file, config)?;
    write_ranking(&session.book, &mut std::io::stdout().lock())
}

pub fn search(data_file: Option<PathBuf>, config: Option<PathBuf>, grade: String) -> Result<()> {
    let (session, _) = Session::open(data_file, config)?;
    write_search(&session.book, &mut std::io::stdout().lock(), &grade)
}

pub fn transcript(
    data_file: Option<PathBuf>,
    config: Option<PathBuf>,
    email: String,
) -> Result<()> {
    let (session, _) = Session::open(data_file, config)?;
    write_transcript(&session.book, &mut std::io::stdout().lock(), &email)
}

pub fn list(data_file: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let (session, _) = Session::open(data_file, config)?;
    print!("{}", session.book.show_all_students());
    Ok(())
}
