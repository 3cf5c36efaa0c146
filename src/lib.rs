// Library root
// -----------
// This crate exposes a small library surface for the GPA calculator. The
// binary (`main.rs`) uses these modules to run the interactive session.
//
// Module responsibilities:
// - `grade`: the fixed letter-grade scale and symbol lookup.
// - `course`: validated course records, the course list, input checks and
//   the credit-weighted GPA computation.
// - `report`: text rendering for the banner, summary and closing remark.
// - `ui`: terminal prompts that drive the other modules.
//
// Keeping the computation free of I/O makes it easy to test without a
// terminal.
pub mod course;
pub mod grade;
pub mod report;
pub mod ui;

pub use course::{compute_gpa, Course, CourseList, EntryError};
pub use grade::{resolve, LetterGrade};
