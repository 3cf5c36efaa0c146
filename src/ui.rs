// UI layer: the interactive session. On a terminal the questions go through
// `dialoguer` prompts; when stdin is piped or redirected the same questions
// are answered one line at a time. Both paths share the loop below, which
// re-asks until an answer parses.

use crate::course::{is_done, DONE_TOKEN, parse_credits, validate_name, Course, CourseList, EntryError};
use crate::grade::LetterGrade;
use crate::report::{render_added, write_banner, write_summary, Standing, NO_COURSES};
use anyhow::Result;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use dialoguer::Input;
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};

const NAME_PROMPT: &str = "Enter course name (or 'done' to finish)";
const CREDITS_PROMPT: &str = "Enter credit hours for this course";
const GRADE_PROMPT: &str = "Enter grade (A, B, C, D, F)";

/// Where answers come from.
pub trait Prompt {
    /// Ask one question and return the raw answer, or `None` once input has
    /// run out. `check` lets an implementation reject answers inline; the
    /// session still parses whatever comes back.
    fn ask<W: Write>(
        &mut self,
        out: &mut W,
        question: &str,
        check: &dyn Fn(&str) -> Result<(), EntryError>,
    ) -> Result<Option<String>>;

    /// Whether the closing remark should carry terminal colours.
    fn colour(&self) -> bool {
        false
    }
}

/// `dialoguer` prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask<W: Write>(
        &mut self,
        _out: &mut W,
        question: &str,
        check: &dyn Fn(&str) -> Result<(), EntryError>,
    ) -> Result<Option<String>> {
        // `validate_with` shows the error and asks again in place.
        let answer: String = Input::new()
            .with_prompt(question)
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), EntryError> {
                check(input.as_str()).map_err(rejected)
            })
            .interact_text()?;
        Ok(Some(answer))
    }

    fn colour(&self) -> bool {
        true
    }
}

/// Reads answers line by line, echoing each question to the output.
#[derive(Debug)]
pub struct LinePrompt<R> {
    input: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(input: R) -> Self {
        LinePrompt { input }
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn ask<W: Write>(
        &mut self,
        out: &mut W,
        question: &str,
        _check: &dyn Fn(&str) -> Result<(), EntryError>,
    ) -> Result<Option<String>> {
        write!(out, "{question}: ")?;
        out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string()))
    }
}

/// Answer to the course-name question.
#[derive(Debug, Clone, PartialEq)]
enum NameEntry {
    Done,
    Course(String),
}

fn parse_name(input: &str) -> Result<NameEntry, EntryError> {
    if is_done(input) {
        return Ok(NameEntry::Done);
    }
    validate_name(input).map(|name| NameEntry::Course(name.to_string()))
}

/// Run one session on the real console: print the banner, collect courses
/// until the user types `done`, then print the summary, GPA and remark.
pub fn run_session() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stdin = io::stdin();

    if stdin.is_tty() {
        run(&mut TerminalPrompt, &mut out)?;
    } else {
        run(&mut LinePrompt::new(stdin.lock()), &mut out)?;
    }
    Ok(())
}

/// The session itself, over any prompt and output. Returns the courses that
/// were entered.
pub fn run<P: Prompt, W: Write>(prompt: &mut P, out: &mut W) -> Result<CourseList> {
    write_banner(out)?;

    let courses = collect_courses(prompt, out)?;
    if courses.is_empty() {
        info!("session ended with no courses");
        writeln!(out, "\n{NO_COURSES}")?;
        return Ok(courses);
    }

    writeln!(out)?;
    write_summary(out, &courses)?;

    let gpa = courses.gpa();
    info!("session ended with {} courses, gpa {:.4}", courses.len(), gpa);
    write_remark(out, Standing::from_gpa(gpa), prompt.colour())?;
    Ok(courses)
}

/// Keep asking for courses until the `done` token is entered or input ends.
fn collect_courses<P: Prompt, W: Write>(prompt: &mut P, out: &mut W) -> Result<CourseList> {
    let mut courses = CourseList::new();
    loop {
        writeln!(out, "\n--- Enter Course Information ---")?;
        match prompt_course(prompt, out)? {
            Entry::Course(course) => {
                writeln!(out, "\n{}", render_added(&course))?;
                debug!("accepted course {:?}", course);
                courses.push(course);
            }
            Entry::Done => break,
            Entry::EndOfInput => {
                warn!("input ended before '{DONE_TOKEN}', keeping {} courses", courses.len());
                break;
            }
        }
    }
    Ok(courses)
}

enum Entry {
    Course(Course),
    Done,
    EndOfInput,
}

/// Ask for name, credits and grade, each until it parses.
fn prompt_course<P: Prompt, W: Write>(prompt: &mut P, out: &mut W) -> Result<Entry> {
    loop {
        let name = match ask_until(prompt, out, NAME_PROMPT, parse_name)? {
            Some(NameEntry::Course(name)) => name,
            Some(NameEntry::Done) => return Ok(Entry::Done),
            None => return Ok(Entry::EndOfInput),
        };
        let Some(credits) = ask_until(prompt, out, CREDITS_PROMPT, parse_credits)? else {
            return Ok(Entry::EndOfInput);
        };
        let Some(grade) = ask_until(prompt, out, GRADE_PROMPT, |s: &str| s.parse::<LetterGrade>())?
        else {
            return Ok(Entry::EndOfInput);
        };

        match Course::new(name, credits, grade) {
            Ok(course) => return Ok(Entry::Course(course)),
            Err(err) => writeln!(out, "{}", rejected(err))?,
        }
    }
}

/// Ask `question` until `parse` accepts the answer. Each rejection is
/// written to `out` and the question is asked again with no other effect.
fn ask_until<P, W, T>(
    prompt: &mut P,
    out: &mut W,
    question: &str,
    parse: impl Fn(&str) -> Result<T, EntryError>,
) -> Result<Option<T>>
where
    P: Prompt,
    W: Write,
{
    let check = |input: &str| parse(input).map(|_| ());
    loop {
        let Some(answer) = prompt.ask(out, question, &check)? else {
            return Ok(None);
        };
        match parse(&answer) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => writeln!(out, "{}", rejected(err))?,
        }
    }
}

fn rejected(err: EntryError) -> EntryError {
    debug!("rejected input: {err}");
    err
}

/// Print the closing remark, coloured by how well the GPA came out.
fn write_remark<W: Write>(out: &mut W, standing: Standing, colour: bool) -> io::Result<()> {
    let remark = standing.remark();
    if !colour {
        return writeln!(out, "\n{remark}");
    }
    let styled = match standing {
        Standing::DeansList => remark.green().bold(),
        Standing::Good => remark.green(),
        Standing::Passing => remark.yellow(),
        Standing::NeedsSupport => remark.red(),
    };
    writeln!(out, "\n{styled}")
}
