use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use lispy::config::{Config, USAGE};
use lispy::parser::parse_source;
use lispy::{repl, Interpreter};

fn init_tracing(config: &Config) {
    let filter = config
        .log_filter
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit_ast(config: &Config) -> Result<()> {
    for path in &config.files {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let program = parse_source(&source)
            .with_context(|| format!("parsing {}", path.display()))?;
        println!("{}", serde_json::to_string_pretty(&program)?);
    }
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    init_tracing(&config);

    if config.emit_ast {
        return emit_ast(&config);
    }

    let interp = Interpreter::new();

    for path in &config.files {
        let path = path.to_string_lossy();
        tracing::debug!(path = %path, "loading from command line");
        let result = interp.load_file(&path);
        if result.is_error() {
            println!("{}", result);
        }
    }

    if config.repl {
        repl::run(&interp, &config)?;
    }

    Ok(())
}
