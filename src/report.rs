// Report module: turns courses and the final GPA into the text shown in the
// terminal. The writers take any `io::Write`, so the UI hands them stdout
// and tests hand them a `Vec<u8>`.

use crate::course::{Course, CourseList};
use crate::grade::LetterGrade;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

/// Printed instead of a summary when the session ends with no courses.
pub const NO_COURSES: &str = "No courses entered. Exiting.";

/// Qualitative band a GPA falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    /// 3.5 and above
    DeansList,
    /// 3.0 up to 3.5
    Good,
    /// 2.0 up to 3.0
    Passing,
    /// below 2.0
    NeedsSupport,
}

impl Standing {
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa >= 3.5 {
            Standing::DeansList
        } else if gpa >= 3.0 {
            Standing::Good
        } else if gpa >= 2.0 {
            Standing::Passing
        } else {
            Standing::NeedsSupport
        }
    }

    pub fn remark(self) -> &'static str {
        match self {
            Standing::DeansList => "Excellent work! You're on the Dean's List!",
            Standing::Good => "Good job! Keep up the solid work!",
            Standing::Passing => "You're passing. Consider studying more to improve your GPA.",
            Standing::NeedsSupport => "Your GPA is below 2.0. You may need academic support.",
        }
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", rule())?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", rule())
}

/// Title, a short explanation and the grade scale table.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    header(out, "GPA CALCULATOR")?;
    writeln!(out, "\nThis program will calculate your GPA based on your courses and grades.")?;
    writeln!(out, "\nGrade Scale:")?;
    for grade in LetterGrade::ALL {
        writeln!(out, "  {} = {:.1}", grade, grade.grade_point())?;
    }
    writeln!(out, "\n{}", rule())
}

/// One-line confirmation shown right after a course is accepted.
pub fn render_added(course: &Course) -> String {
    format!(
        "Added: {} - {:?} credits - Grade: {} ({:.1} points)",
        course.name(),
        course.credits(),
        course.grade(),
        course.grade_point()
    )
}

/// Numbered course listing followed by total credits and the GPA.
pub fn write_summary<W: Write>(out: &mut W, courses: &CourseList) -> io::Result<()> {
    header(out, "SUMMARY OF COURSES")?;

    for (i, course) in courses.iter().enumerate() {
        writeln!(out, "\n{}. {}", i + 1, course.name())?;
        writeln!(out, "   Credits: {:?}", course.credits())?;
        writeln!(
            out,
            "   Grade: {} ({:.1} points)",
            course.grade(),
            course.grade_point()
        )?;
        writeln!(out, "   Quality Points: {:.2}", course.quality_points())?;
    }

    writeln!(out)?;
    header(out, "FINAL RESULTS")?;
    writeln!(out, "Total Credits: {:.1}", courses.total_credits())?;
    writeln!(out, "Your GPA: {:.2}", courses.gpa())?;
    writeln!(out, "{}", rule())
}
