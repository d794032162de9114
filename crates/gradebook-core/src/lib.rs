//! gradebook-core — Students, courses, and grade aggregation.
//!
//! This crate defines the data model, the marks→GPA and marks→letter
//! tables, the in-memory `GradeBook`, and its JSON persistence.

pub mod book;
pub mod config;
pub mod error;
pub mod grading;
pub mod model;
pub mod render;
pub mod store;

pub use book::GradeBook;
pub use error::LookupError;
pub use grading::{gpa_from_marks, grade_from_marks, LetterGrade};
pub use model::{Course, Registration, Student};
pub use store::{LoadOutcome, DEFAULT_DATA_FILE};
