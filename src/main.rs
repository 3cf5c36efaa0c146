// Entrypoint for the GPA calculator.
// - Keeps `main` small: set up logging and hand off to the session loop.
// - Returns `anyhow::Result` so terminal errors surface with context.

use gpa_calculator::ui::run_session;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Fixed at compile time, like the sentinel token and the grade scale: the
/// program takes no flags and reads no environment. Only warnings (input
/// ending before `done`) reach the terminal; the per-answer `debug!` and
/// session `info!` events stay quiet so they never interleave with prompts.
const LOG_LEVEL: LevelFilter = LevelFilter::Warn;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so answers and the report on stdout stay clean.
    TermLogger::init(LOG_LEVEL, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    // Blocks until the user types `done` or input ends.
    run_session()?;
    Ok(())
}
