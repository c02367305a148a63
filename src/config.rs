//! Command-line and environment configuration for the `lispy` binary

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Default REPL prompt
pub const DEFAULT_PROMPT: &str = "lispy> ";

/// History file name under `$HOME`
pub const HISTORY_FILE: &str = ".lispy_history";

/// Usage text printed by `--help`
pub const USAGE: &str = "\
Usage: lispy [OPTIONS] [FILE]...

Evaluates each FILE in order. With no FILE, starts the interactive REPL.

Options:
  -i, --repl      Start the REPL after loading files
      --emit-ast  Print the parsed syntax tree as JSON instead of evaluating
  -h, --help      Print this help

Environment:
  LISPY_HISTORY   REPL history file (default: $HOME/.lispy_history)
  LISPY_PROMPT    REPL prompt (default: \"lispy> \")
  LISPY_LOG       Log filter, e.g. `debug` (falls back to RUST_LOG)";

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Source files to evaluate, in order
    pub files: Vec<PathBuf>,
    /// Start the REPL (explicitly, or because no files were given)
    pub repl: bool,
    /// Print syntax trees as JSON instead of evaluating
    pub emit_ast: bool,
    /// Print usage and exit
    pub help: bool,
    /// REPL history file, if any
    pub history: Option<PathBuf>,
    /// REPL prompt
    pub prompt: String,
    /// Log filter directive
    pub log_filter: Option<String>,
}

impl Config {
    /// Builds a configuration from arguments (program name excluded) and an
    /// environment lookup
    pub fn from_args<I, S, F>(args: I, env: F) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut files = Vec::new();
        let mut repl = false;
        let mut emit_ast = false;
        let mut help = false;
        let mut positional_only = false;

        for arg in args {
            let arg = arg.into();
            if positional_only || !arg.starts_with('-') || arg == "-" {
                files.push(PathBuf::from(arg));
                continue;
            }

            match arg.as_str() {
                "--" => positional_only = true,
                "-i" | "--repl" => repl = true,
                "--emit-ast" => emit_ast = true,
                "-h" | "--help" => help = true,
                other => return Err(Error::Usage(format!("unknown option '{}'", other))),
            }
        }

        let history = env("LISPY_HISTORY")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .or_else(|| env("HOME").map(|home| PathBuf::from(home).join(HISTORY_FILE)));

        let prompt = env("LISPY_PROMPT").unwrap_or_else(|| DEFAULT_PROMPT.to_string());
        let log_filter = env("LISPY_LOG").or_else(|| env("RUST_LOG"));

        Ok(Config {
            repl: repl || files.is_empty(),
            files,
            emit_ast,
            help,
            history,
            prompt,
            log_filter,
        })
    }

    /// Builds a configuration from the process arguments and environment
    pub fn from_env() -> Result<Self> {
        Config::from_args(std::env::args().skip(1), |key| std::env::var(key).ok())
    }
}
