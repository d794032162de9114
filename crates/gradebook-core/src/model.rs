//! Core data model types for gradebook.
//!
//! A `Course` is plain data. A `Student` owns an append-only list of
//! registrations and keeps its credit-weighted total and GPA in step with
//! that list.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::grading::gpa_from_marks;

/// A course offered in some trimester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course name; the lookup key within a grade book.
    pub name: String,
    /// Trimester label, free-form.
    pub trimester: String,
    /// Credit weight used when averaging marks.
    pub credits: f64,
}

impl Course {
    pub fn new(name: impl Into<String>, trimester: impl Into<String>, credits: f64) -> Self {
        Self {
            name: name.into(),
            trimester: trimester.into(),
            credits,
        }
    }
}

/// One registration: a shared handle to the course plus the marks obtained.
///
/// While in memory the course is shared with the grade book's course list.
/// Once written out and read back, every registration holds its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RegistrationRecord", from = "RegistrationRecord")]
pub struct Registration {
    pub course: Rc<Course>,
    pub marks: f64,
}

/// On-disk shape of a registration: course fields inlined next to the marks.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegistrationRecord {
    name: String,
    trimester: String,
    credits: f64,
    marks: f64,
}

impl From<Registration> for RegistrationRecord {
    fn from(reg: Registration) -> Self {
        Self {
            name: reg.course.name.clone(),
            trimester: reg.course.trimester.clone(),
            credits: reg.course.credits,
            marks: reg.marks,
        }
    }
}

impl From<RegistrationRecord> for Registration {
    fn from(rec: RegistrationRecord) -> Self {
        Self {
            course: Rc::new(Course::new(rec.name, rec.trimester, rec.credits)),
            marks: rec.marks,
        }
    }
}

/// A student and their marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StudentRecord")]
pub struct Student {
    /// Email address; the lookup key within a grade book.
    pub email: String,
    /// Full name.
    pub names: String,
    pub gender: String,
    courses_registered: Vec<Registration>,
    total_marks: f64,
    #[serde(rename = "GPA")]
    gpa: f64,
}

/// On-disk shape of a student, before aggregates are re-derived.
#[derive(Debug, Deserialize)]
struct StudentRecord {
    email: String,
    names: String,
    gender: String,
    #[serde(default)]
    courses_registered: Vec<Registration>,
    #[serde(default)]
    total_marks: f64,
    #[serde(default, rename = "GPA")]
    gpa: f64,
}

impl From<StudentRecord> for Student {
    fn from(rec: StudentRecord) -> Self {
        let mut student = Student::new(rec.email, rec.names, rec.gender);
        student.courses_registered = rec.courses_registered;
        student.recompute();

        let drifted = (student.total_marks - rec.total_marks).abs() > 1e-9
            || (student.gpa - rec.gpa).abs() > 1e-9;
        if drifted {
            tracing::warn!(
                email = %student.email,
                stored_total = rec.total_marks,
                stored_gpa = rec.gpa,
                total = student.total_marks,
                gpa = student.gpa,
                "stored aggregates disagree with registrations; using recomputed values"
            );
        }
        student
    }
}

impl Student {
    /// Create a student with no registrations.
    pub fn new(
        email: impl Into<String>,
        names: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            names: names.into(),
            gender: gender.into(),
            courses_registered: Vec::new(),
            total_marks: 0.0,
            gpa: 0.0,
        }
    }

    /// Append a registration and refresh the aggregates.
    ///
    /// Registering for the same course twice is allowed; both entries count.
    pub fn register_for_course(&mut self, course: Rc<Course>, marks: f64) {
        self.courses_registered.push(Registration { course, marks });
        self.recompute();
    }

    /// Registrations in the order they were added.
    pub fn registrations(&self) -> &[Registration] {
        &self.courses_registered
    }

    /// Credit-weighted average of every mark recorded.
    pub fn total_marks(&self) -> f64 {
        self.total_marks
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    fn recompute(&mut self) {
        if self.courses_registered.is_empty() {
            self.total_marks = 0.0;
            self.gpa = 0.0;
            return;
        }

        let (points, credits) = self
            .courses_registered
            .iter()
            .fold((0.0, 0.0), |(points, credits), reg| {
                (
                    points + reg.course.credits * reg.marks,
                    credits + reg.course.credits,
                )
            });

        // Zero or negative credit totals cannot be averaged.
        self.total_marks = if credits > 0.0 { points / credits } else { 0.0 };
        self.gpa = gpa_from_marks(self.total_marks);
    }
}
