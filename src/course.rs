// Course module: the validated course record, the session's course list
// and the weighted-average computation. Nothing here touches the terminal;
// the UI layer calls the validation helpers from its prompts.

use crate::grade::LetterGrade;
use thiserror::Error;

/// Token typed in place of a course name to finish entering courses.
pub const DONE_TOKEN: &str = "done";

/// Reasons a piece of course input is rejected. The `Display` text is what
/// the user sees before being asked again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryError {
    #[error("Course name cannot be empty. Please try again.")]
    EmptyName,
    #[error("Invalid input '{0}'. Please enter a number for credits.")]
    NotANumber(String),
    #[error("Credits must be a positive number (got {0}). Please try again.")]
    NonPositiveCredits(f64),
    #[error("Invalid grade '{0}'. Please enter A, B, C, D, or F.")]
    UnknownGrade(String),
}

/// A single course. Can only be built through [`Course::new`], so a value of
/// this type always has a non-empty name and credits greater than zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    name: String,
    credits: f64,
    grade: LetterGrade,
    grade_point: f64,
}

impl Course {
    /// Validate and build a course. The grade point is looked up once here.
    pub fn new(name: impl Into<String>, credits: f64, grade: LetterGrade) -> Result<Self, EntryError> {
        let name: String = name.into();
        let name = validate_name(&name)?.to_string();
        check_credits(credits)?;
        Ok(Course {
            name,
            credits,
            grade,
            grade_point: grade.grade_point(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> f64 {
        self.credits
    }

    pub fn grade(&self) -> LetterGrade {
        self.grade
    }

    pub fn grade_point(&self) -> f64 {
        self.grade_point
    }

    /// Credits multiplied by grade point.
    pub fn quality_points(&self) -> f64 {
        self.credits * self.grade_point
    }
}

/// Courses in the order they were entered. Owned by one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseList {
    courses: Vec<Course>,
}

impl CourseList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, course: Course) {
        self.courses.push(course);
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    pub fn as_slice(&self) -> &[Course] {
        &self.courses
    }

    pub fn total_credits(&self) -> f64 {
        self.courses.iter().map(Course::credits).sum()
    }

    pub fn total_quality_points(&self) -> f64 {
        self.courses.iter().map(Course::quality_points).sum()
    }

    /// Shorthand for [`compute_gpa`] over this list.
    pub fn gpa(&self) -> f64 {
        compute_gpa(&self.courses)
    }
}

impl<'a> IntoIterator for &'a CourseList {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Course> for CourseList {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        CourseList {
            courses: iter.into_iter().collect(),
        }
    }
}

/// Credit-weighted average of grade points.
///
/// An empty slice gives `0.0`, and so does a total credit weight of zero,
/// which `Course::new` already rules out.
pub fn compute_gpa(courses: &[Course]) -> f64 {
    if courses.is_empty() {
        return 0.0;
    }

    let mut total_points = 0.0;
    let mut total_credits = 0.0;
    for course in courses {
        total_points += course.credits * course.grade_point;
        total_credits += course.credits;
    }

    if total_credits > 0.0 {
        total_points / total_credits
    } else {
        0.0
    }
}

/// True when the text typed as a course name is the end-of-input token.
pub fn is_done(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(DONE_TOKEN)
}

/// Returns the trimmed name, or `EmptyName` if nothing is left.
pub fn validate_name(input: &str) -> Result<&str, EntryError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(EntryError::EmptyName);
    }
    Ok(name)
}

/// Parse a credit-hours answer. Must be a finite number greater than zero.
pub fn parse_credits(input: &str) -> Result<f64, EntryError> {
    let text = input.trim();
    let credits: f64 = text
        .parse()
        .map_err(|_| EntryError::NotANumber(text.to_string()))?;
    check_credits(credits)?;
    Ok(credits)
}

fn check_credits(credits: f64) -> Result<(), EntryError> {
    if !credits.is_finite() {
        return Err(EntryError::NotANumber(credits.to_string()));
    }
    if credits <= 0.0 {
        return Err(EntryError::NonPositiveCredits(credits));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn course(name: &str, credits: f64, grade: LetterGrade) -> Course {
        Course::new(name, credits, grade).unwrap()
    }

    #[test]
    fn empty_list_has_zero_gpa() {
        assert_eq!(compute_gpa(&[]), 0.0);
        assert_eq!(CourseList::new().gpa(), 0.0);
    }

    #[test]
    fn gpa_is_credit_weighted() {
        let list: CourseList = vec![
            course("Math", 3.0, LetterGrade::A),
            course("History", 4.0, LetterGrade::B),
            course("Art", 2.0, LetterGrade::D),
        ]
        .into_iter()
        .collect();

        let expected = (3.0 * 4.0 + 4.0 * 3.0 + 2.0 * 1.0) / 9.0;
        assert!((list.gpa() - expected).abs() < 1e-12);
        assert_eq!(list.total_credits(), 9.0);
        assert_eq!(list.total_quality_points(), 26.0);
    }

    #[test]
    fn gpa_is_repeatable() {
        let list: CourseList = vec![course("Chem", 3.5, LetterGrade::C), course("Bio", 1.5, LetterGrade::A)]
            .into_iter()
            .collect();
        assert_eq!(list.gpa().to_bits(), list.gpa().to_bits());
    }

    #[test]
    fn course_stores_derived_values() {
        let c = course("  Physics ", 4.0, LetterGrade::B);
        assert_eq!(c.name(), "Physics");
        assert_eq!(c.grade_point(), 3.0);
        assert_eq!(c.quality_points(), 12.0);
    }

    #[rstest]
    #[case("", 3.0, EntryError::EmptyName)]
    #[case("   ", 3.0, EntryError::EmptyName)]
    #[case("Math", 0.0, EntryError::NonPositiveCredits(0.0))]
    #[case("Math", -2.0, EntryError::NonPositiveCredits(-2.0))]
    fn course_rejects_invalid_fields(#[case] name: &str, #[case] credits: f64, #[case] expected: EntryError) {
        assert_eq!(Course::new(name, credits, LetterGrade::A), Err(expected));
    }

    #[test]
    fn course_rejects_non_finite_credits() {
        assert!(matches!(
            Course::new("Math", f64::NAN, LetterGrade::A),
            Err(EntryError::NotANumber(_))
        ));
        assert!(matches!(
            Course::new("Math", f64::INFINITY, LetterGrade::A),
            Err(EntryError::NotANumber(_))
        ));
    }

    #[rstest]
    #[case("3", 3.0)]
    #[case(" 4.5 ", 4.5)]
    #[case("0.5", 0.5)]
    fn parses_positive_credits(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_credits(input), Ok(expected));
    }

    #[rstest]
    #[case("-3", EntryError::NonPositiveCredits(-3.0))]
    #[case("0", EntryError::NonPositiveCredits(0.0))]
    #[case("three", EntryError::NotANumber("three".into()))]
    #[case("", EntryError::NotANumber("".into()))]
    fn rejects_bad_credits(#[case] input: &str, #[case] expected: EntryError) {
        assert_eq!(parse_credits(input), Err(expected));
    }

    #[test]
    fn rejects_nan_and_infinite_credits() {
        assert!(matches!(parse_credits("NaN"), Err(EntryError::NotANumber(_))));
        assert!(matches!(parse_credits("inf"), Err(EntryError::NotANumber(_))));
    }

    #[rstest]
    #[case("done", true)]
    #[case("DONE", true)]
    #[case("  Done ", true)]
    #[case("done!", false)]
    #[case("Math", false)]
    #[case("", false)]
    fn recognises_done_token(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_done(input), expected);
    }

    #[test]
    fn list_keeps_insertion_order() {
        let mut list = CourseList::new();
        list.push(course("First", 1.0, LetterGrade::F));
        list.push(course("Second", 2.0, LetterGrade::A));
        let names: Vec<&str> = list.iter().map(Course::name).collect();
        assert_eq!(names, ["First", "Second"]);
        assert_eq!(list.len(), 2);
    }
}
