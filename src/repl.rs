//! Interactive read-eval-print loop

use rustyline::completion::Completer;
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Editor, Helper};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::runtime::Interpreter;

/// Net count of open `(` and `{` in `source`
///
/// Delimiters inside string literals and `;` comments are ignored. A
/// positive result means the input is still open; zero or negative means it
/// is ready to be parsed (a negative count is left for the parser to report).
pub fn unbalanced_depth(source: &str) -> i64 {
    let mut depth = 0i64;
    let mut in_string = false;
    let mut in_comment = false;

    for c in source.chars() {
        if in_comment {
            in_comment = c != '\n';
            continue;
        }
        if in_string {
            in_string = c != '"';
            continue;
        }
        match c {
            '"' => in_string = true,
            ';' => in_comment = true,
            '(' | '{' => depth += 1,
            ')' | '}' => depth -= 1,
            _ => {}
        }
    }

    depth
}

struct ReplHelper;

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = String;
}

impl Hinter for ReplHelper {
    type Hint = String;
}

impl Highlighter for ReplHelper {}

impl Validator for ReplHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        if unbalanced_depth(ctx.input()) > 0 {
            return Ok(ValidationResult::Incomplete);
        }
        Ok(ValidationResult::Valid(None))
    }
}

fn readline_error(err: ReadlineError) -> Error {
    Error::Io(err.to_string())
}

/// Runs the REPL against `interp` until end of input
pub fn run(interp: &Interpreter, config: &Config) -> Result<()> {
    let mut rl = Editor::<ReplHelper, DefaultHistory>::new().map_err(readline_error)?;
    rl.set_helper(Some(ReplHelper));
    rl.set_history_ignore_dups(true).map_err(readline_error)?;
    rl.set_history_ignore_space(true);

    if let Some(path) = &config.history {
        // A missing history file is normal on first run
        let _ = rl.load_history(path);
    }

    println!("lispy {}", crate::VERSION);
    println!("Press Ctrl+D to exit\n");

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                match interp.eval_source(&line) {
                    Ok(results) => {
                        for result in results {
                            println!("{}", result);
                        }
                    }
                    Err(err) => println!("{}", err),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(readline_error(err)),
        }
    }

    if let Some(path) = &config.history {
        if let Err(err) = rl.save_history(path) {
            tracing::warn!(path = %path.display(), error = %err, "could not save history");
        }
    }

    Ok(())
}
