use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gpa-calculator"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn redirected_input_completes_the_session() {
    let output = run_with_stdin("Math\n3\nA\nHistory\n4\nB\ndone\n");
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Your GPA: 3.43"));
    assert!(stdout.contains("Good job! Keep up the solid work!"));
}

#[test]
fn redirected_input_recovers_from_bad_answers() {
    let output = run_with_stdin("Math\n-3\nlots\n3\nE\na\ndone\n");
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.contains("Credits must be a positive number"));
    assert!(stdout.contains("Please enter a number for credits"));
    assert!(stdout.contains("Invalid grade 'E'"));
    assert!(stdout.contains("Your GPA: 4.00"));
}

#[test]
fn redirected_done_reports_no_courses() {
    let output = run_with_stdin("done\n");
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.contains("No courses entered. Exiting."));
    assert!(!stdout.contains("Your GPA"));
}
