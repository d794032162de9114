//! Marks→GPA and marks→letter-grade step functions.
//!
//! The two tables have their own thresholds and outputs. A value sitting
//! exactly on a threshold maps to the higher tier.

use std::fmt;

/// GPA thresholds, highest first.
const GPA_TABLE: [(f64, f64); 6] = [
    (85.0, 4.0),
    (75.0, 3.7),
    (65.0, 3.3),
    (55.0, 3.0),
    (45.0, 2.7),
    (35.0, 2.3),
];

/// GPA for marks below every threshold (and for NaN).
const GPA_FLOOR: f64 = 2.0;

/// Map a (credit-weighted) mark to a GPA.
pub fn gpa_from_marks(marks: f64) -> f64 {
    GPA_TABLE
        .iter()
        .find(|(threshold, _)| marks >= *threshold)
        .map(|(_, gpa)| *gpa)
        .unwrap_or(GPA_FLOOR)
}

/// Letter grades used by search and transcripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl LetterGrade {
    /// Map a mark to its letter grade.
    pub fn from_marks(marks: f64) -> Self {
        if marks >= 85.0 {
            LetterGrade::A
        } else if marks >= 75.0 {
            LetterGrade::B
        } else if marks >= 65.0 {
            LetterGrade::C
        } else if marks >= 55.0 {
            LetterGrade::D
        } else if marks >= 45.0 {
            LetterGrade::E
        } else {
            LetterGrade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::E => "E",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorthand for [`LetterGrade::from_marks`].
pub fn grade_from_marks(marks: f64) -> LetterGrade {
    LetterGrade::from_marks(marks)
}
