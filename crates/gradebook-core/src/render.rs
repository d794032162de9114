//! Plain-text rendering of transcripts and student listings.

use std::fmt::Write;

use crate::grading::grade_from_marks;
use crate::model::Student;

/// Width that a label plus its dot leader fills.
const FIELD_WIDTH: usize = 25;

const SEPARATOR: &str = "............................................................";
const TRANSCRIPT_TITLE: &str = "                        Student's Transcript                 ";

/// `label` followed by a dot leader and the value.
///
/// For numeric rows the value counts toward the field width, so that the
/// leader shrinks as the number grows.
fn field(out: &mut String, label: &str, value: &str, value_in_width: bool) {
    let used = if value_in_width {
        label.chars().count() + value.chars().count()
    } else {
        label.chars().count()
    };
    let leader = ".".repeat(FIELD_WIDTH.saturating_sub(used));
    let _ = writeln!(out, "{label}{leader} {value}");
}

/// Render the full transcript for one student.
///
/// Each registration gets its own block; the GPA shown in every block is
/// the student's overall GPA while the letter grade is per course.
pub fn transcript(student: &Student) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(out, "{TRANSCRIPT_TITLE}");
    let _ = writeln!(out, "{SEPARATOR}");
    field(&mut out, "Student name: ", &student.names, false);
    field(&mut out, "Student email: ", &student.email, false);
    field(&mut out, "Gender: ", &student.gender, false);
    let _ = writeln!(out, "{SEPARATOR}");

    let gpa = format!("{:.2}", student.gpa());
    for reg in student.registrations() {
        let marks = format!("{:.2}", reg.marks);
        let grade = grade_from_marks(reg.marks);

        field(&mut out, "Trimester: ", &reg.course.trimester, false);
        field(&mut out, "Course name: ", &reg.course.name, false);
        field(&mut out, "Marks: ", &marks, true);
        field(&mut out, "GPA: ", &gpa, true);
        field(&mut out, "Grade: ", grade.as_str(), true);
        let _ = writeln!(out, "{SEPARATOR}");
        let _ = writeln!(
            out,
            "{} has successfully completed {}!",
            student.names, reg.course.name
        );
        let _ = writeln!(out, "{SEPARATOR}");
    }

    out
}

/// Render every student with their registrations, in the order given.
pub fn student_listing(students: &[&Student]) -> String {
    let mut out = String::from("All Students with Registrations:\n");

    for student in students {
        let _ = writeln!(out, "Student Name: {}", student.names);
        let _ = writeln!(out, "Email: {}", student.email);
        out.push_str("Courses Registered:\n");
        for reg in student.registrations() {
            let _ = writeln!(
                out,
                "- Course: {}, Marks: {:.2}, GPA: {:.2}",
                reg.course.name,
                reg.marks,
                student.gpa()
            );
        }
        let _ = writeln!(out, "{SEPARATOR}");
    }

    out
}
