//! The in-memory grade book.
//!
//! `GradeBook` owns every student and course. Students point at the
//! book's courses through shared handles, so a registration made in this
//! session sees the very course value held in the course list.

use std::rc::Rc;

use crate::error::LookupError;
use crate::grading::grade_from_marks;
use crate::model::{Course, Student};
use crate::render;

/// Students and courses, kept in insertion order.
///
/// Neither emails nor course names are checked for uniqueness; lookups
/// return the first match.
#[derive(Debug, Clone, Default)]
pub struct GradeBook {
    pub(crate) students: Vec<Student>,
    pub(crate) courses: Vec<Rc<Course>>,
}

impl GradeBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_student(&mut self, student: Student) {
        tracing::debug!(email = %student.email, "adding student");
        self.students.push(student);
    }

    pub fn add_course(&mut self, course: Course) {
        tracing::debug!(course = %course.name, "adding course");
        self.courses.push(Rc::new(course));
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.courses.iter().map(|c| c.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.courses.is_empty()
    }

    /// First student whose email matches exactly.
    pub fn find_student(&self, email: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.email == email)
    }

    /// First course whose name matches exactly.
    pub fn find_course(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.name == name).map(|c| c.as_ref())
    }

    /// Record `marks` for the student with `email` in the course `course_name`.
    ///
    /// Nothing changes unless both the student and the course exist.
    pub fn register_student_for_course(
        &mut self,
        email: &str,
        course_name: &str,
        marks: f64,
    ) -> Result<(), LookupError> {
        let course = self.courses.iter().find(|c| c.name == course_name).cloned();
        let student = self.students.iter_mut().find(|s| s.email == email);

        match (student, course) {
            (Some(student), Some(course)) => {
                tracing::debug!(email, course = course_name, marks, "registering");
                student.register_for_course(course, marks);
                Ok(())
            }
            _ => {
                let err = LookupError::StudentOrCourseNotFound {
                    email: email.to_string(),
                    course: course_name.to_string(),
                };
                tracing::warn!(key = %err.key(), "registration lookup missed");
                Err(err)
            }
        }
    }

    /// Students ordered by total marks, highest first. Ties keep insertion order.
    pub fn calculate_ranking(&self) -> Vec<&Student> {
        let mut ranking: Vec<&Student> = self.students.iter().collect();
        ranking.sort_by(|a, b| b.total_marks().total_cmp(&a.total_marks()));
        ranking
    }

    /// Students whose overall letter grade is exactly `grade`, in insertion order.
    pub fn search_by_grade(&self, grade: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| grade_from_marks(s.total_marks()).as_str() == grade)
            .collect()
    }

    /// Render the transcript of the student with `email`.
    pub fn generate_transcript(&self, email: &str) -> Result<String, LookupError> {
        match self.find_student(email) {
            Some(student) => Ok(render::transcript(student)),
            None => {
                tracing::warn!(email, "transcript lookup missed");
                Err(LookupError::StudentNotFound(email.to_string()))
            }
        }
    }

    /// List every student, sorted by name.
    pub fn show_all_students(&self) -> String {
        let mut sorted: Vec<&Student> = self.students.iter().collect();
        sorted.sort_by(|a, b| a.names.cmp(&b.names));
        render::student_listing(&sorted)
    }
}
