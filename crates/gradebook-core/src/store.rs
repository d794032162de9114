//! JSON persistence for the grade book.
//!
//! The whole book is written as one pretty-printed document and read back
//! in one go. There is no locking; two processes sharing a file will
//! overwrite each other.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::book::GradeBook;
use crate::model::{Course, Student};

/// Data file used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "gradebook_data.json";

/// What `load_data` found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and replaced the book's contents.
    Loaded { students: usize, courses: usize },
    /// No file at the path; the book was left as it was.
    FileAbsent,
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    students: &'a [Student],
    courses: Vec<&'a Course>,
}

#[derive(Deserialize)]
struct Document {
    students: Vec<Student>,
    courses: Vec<Course>,
}

impl GradeBook {
    /// Serialize the book to a JSON string with four-space indentation.
    ///
    /// Fails if any credit, mark, or aggregate is NaN or infinite, since
    /// JSON has no encoding for them.
    pub fn to_json_pretty(&self) -> Result<String> {
        self.ensure_finite()?;
        let doc = DocumentRef {
            students: &self.students,
            courses: self.courses().collect(),
        };

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        doc.serialize(&mut ser)
            .context("failed to serialize grade book")?;
        String::from_utf8(buf).context("serialized grade book is not UTF-8")
    }

    /// Write the book to `path`, replacing any existing file.
    pub fn save_data(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create directory {}", parent.display())
                })?;
            }
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write grade book to {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            students = self.students.len(),
            courses = self.courses.len(),
            "saved grade book"
        );
        Ok(())
    }

    /// Replace the book's contents with the document at `path`.
    ///
    /// A missing file is not an error. A file that is not a valid grade
    /// book document is, and leaves the book untouched.
    pub fn load_data(&mut self, path: &Path) -> Result<LoadOutcome> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no data file found");
                return Ok(LoadOutcome::FileAbsent);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read grade book from {}", path.display()))
            }
        };

        let doc: Document = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse grade book JSON: {}", path.display()))?;

        *self = GradeBook::from_parts(doc.students, doc.courses);

        tracing::info!(
            path = %path.display(),
            students = self.students.len(),
            courses = self.courses.len(),
            "loaded grade book"
        );
        Ok(LoadOutcome::Loaded {
            students: self.students.len(),
            courses: self.courses.len(),
        })
    }

    fn ensure_finite(&self) -> Result<()> {
        for course in self.courses() {
            ensure!(
                course.credits.is_finite(),
                "course '{}' has non-finite credits: {}",
                course.name,
                course.credits
            );
        }
        for student in &self.students {
            for reg in student.registrations() {
                ensure!(
                    reg.course.credits.is_finite() && reg.marks.is_finite(),
                    "student '{}' has a non-finite registration in '{}': credits {}, marks {}",
                    student.email,
                    reg.course.name,
                    reg.course.credits,
                    reg.marks
                );
            }
            ensure!(
                student.total_marks().is_finite() && student.gpa().is_finite(),
                "student '{}' has non-finite totals",
                student.email
            );
        }
        Ok(())
    }

    /// Build a book from loaded parts.
    fn from_parts(students: Vec<Student>, courses: Vec<Course>) -> Self {
        let mut book = GradeBook::new();
        for course in courses {
            book.add_course(course);
        }
        book.students = students;
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn populated() -> GradeBook {
        let mut book = GradeBook::new();
        book.add_course(Course::new("Maths", "T1", 3.0));
        book.add_course(Course::new("Art", "T2", 1.0));
        book.add_student(Student::new("ada@alu.edu", "Ada", "Female"));
        book.add_student(Student::new("bo@alu.edu", "Bo", "Male"));
        book.register_student_for_course("ada@alu.edu", "Maths", 90.0)
            .unwrap();
        book.register_student_for_course("ada@alu.edu", "Art", 50.0)
            .unwrap();
        book.register_student_for_course("bo@alu.edu", "Art", 77.25)
            .unwrap();
        book
    }

    #[test]
    fn save_then_load_reproduces_book() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        let book = populated();
        book.save_data(&path).unwrap();

        let mut loaded = GradeBook::new();
        let outcome = loaded.load_data(&path).unwrap();
        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                students: 2,
                courses: 2
            }
        );
        assert_eq!(loaded.students(), book.students());
        assert!(loaded.courses().eq(book.courses()));
        assert_eq!(loaded.find_student("ada@alu.edu").unwrap().total_marks(), 80.0);
    }

    #[test]
    fn reloaded_registrations_are_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        populated().save_data(&path).unwrap();

        let mut loaded = GradeBook::new();
        loaded.load_data(&path).unwrap();
        let reg = &loaded.find_student("ada@alu.edu").unwrap().registrations()[0];
        assert!(!Rc::ptr_eq(&reg.course, &loaded.courses[0]));
        assert_eq!(*reg.course, *loaded.courses[0]);
    }

    #[test]
    fn document_shape_and_indentation() {
        let json = populated().to_json_pretty().unwrap();
        assert!(json.starts_with("{\n    \"students\": ["));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["courses"].as_array().unwrap().len(), 2);
        assert_eq!(value["students"][0]["GPA"], 3.7);
        assert_eq!(value["students"][0]["total_marks"], 80.0);
        assert_eq!(
            value["students"][1]["courses_registered"][0]["marks"],
            77.25
        );
    }

    #[test]
    fn non_finite_marks_are_never_written() {
        for marks in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("book.json");
            let mut book = populated();
            book.register_student_for_course("bo@alu.edu", "Maths", marks)
                .unwrap();

            let err = book.save_data(&path).unwrap_err();
            assert!(err.to_string().contains("non-finite registration"), "{err}");
            assert!(!path.exists());
        }
    }

    #[test]
    fn non_finite_credits_are_never_written() {
        for credits in [f64::NAN, f64::INFINITY] {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("book.json");
            let mut book = populated();
            book.add_course(Course::new("Void", "T9", credits));

            let err = book.save_data(&path).unwrap_err();
            assert!(err.to_string().contains("non-finite credits"), "{err}");
            assert!(!path.exists());
        }
    }

    #[test]
    fn failed_save_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        let mut book = populated();
        book.save_data(&path).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        book.register_student_for_course("ada@alu.edu", "Art", f64::NAN)
            .unwrap();
        assert!(book.save_data(&path).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);

        let mut reloaded = GradeBook::new();
        reloaded.load_data(&path).unwrap();
        assert_eq!(reloaded.students().len(), 2);
    }

    #[test]
    fn missing_file_is_reported_not_failed() {
        let dir = tempfile::tempdir().unwrap();
        let mut book = GradeBook::new();
        let outcome = book.load_data(&dir.path().join("absent.json")).unwrap();
        assert_eq!(outcome, LoadOutcome::FileAbsent);
        assert!(book.is_empty());
    }

    #[test]
    fn malformed_file_fails_and_leaves_book_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut book = populated();
        let err = book.load_data(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse grade book JSON"));
        assert_eq!(book.students().len(), 2);
    }

    #[test]
    fn missing_top_level_key_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{"students": []}"#).unwrap();
        assert!(GradeBook::new().load_data(&path).is_err());
    }

    #[test]
    fn load_replaces_existing_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        GradeBook::new().save_data(&path).unwrap();

        let mut book = populated();
        book.load_data(&path).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn save_overwrites_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/book.json");
        populated().save_data(&path).unwrap();
        GradeBook::new().save_data(&path).unwrap();

        let mut loaded = populated();
        loaded.load_data(&path).unwrap();
        assert!(loaded.is_empty());
    }
}
