mod render;

use clap::{ArgAction, Parser, Subcommand};
use pyhl_highlight::{Snapshot, Tokenizer};
use std::path::{Path, PathBuf};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pyhl")]
#[command(about = "Incremental Python highlighting lexer")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print per-line highlighting runs
    Highlight {
        /// Input .py file
        path: PathBuf,

        /// JSON file with global names and hints from semantic analysis
        #[arg(long)]
        names: Option<PathBuf>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Dump tokens and the mode each line ends in
    Tokens {
        /// Input .py file
        path: PathBuf,

        /// JSON file with global names and hints from semantic analysis
        #[arg(long)]
        names: Option<PathBuf>,
    },

    /// Report lexical errors; exits with status 1 if there are any
    Check {
        /// Input .py file
        path: PathBuf,
    },
}

/// Failure to load a names file.
#[derive(Debug, thiserror::Error)]
enum NamesError {
    #[error("cannot read names file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid names file {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Highlight { path, names, json } => cmd_highlight(&path, names.as_deref(), json),
        Command::Tokens { path, names } => cmd_tokens(&path, names.as_deref()),
        Command::Check { path } => cmd_check(&path),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn read_source(path: &Path) -> String {
    if !path.exists() {
        eprintln!("Error: file not found: {}", path.display());
        std::process::exit(1);
    }
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

fn load_snapshot(path: &Path) -> Result<Snapshot, NamesError> {
    let text = std::fs::read_to_string(path).map_err(|source| NamesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| NamesError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Tokenize `path`, applying the names file first so hints take effect.
fn tokenize(path: &Path, names: Option<&Path>) -> Tokenizer {
    let source = read_source(path);
    let mut tokenizer = Tokenizer::new();

    if let Some(names) = names {
        match load_snapshot(names) {
            Ok(snapshot) => tokenizer.apply_snapshot(snapshot),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    tokenizer.set_source_text(&source);
    debug!(path = %path.display(), lines = tokenizer.line_count(), "tokenized");
    tokenizer
}

fn cmd_highlight(path: &Path, names: Option<&Path>, json: bool) {
    let tokenizer = tokenize(path, names);
    let reports = render::reports(&tokenizer);

    if json {
        match serde_json::to_string_pretty(&reports) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error encoding JSON: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    for report in &reports {
        println!("{}", render::format_report(report));
    }
}

fn cmd_tokens(path: &Path, names: Option<&Path>) {
    let tokenizer = tokenize(path, names);

    for index in 0..tokenizer.line_count() {
        let exit = tokenizer.exit_mode(index).unwrap_or_default();
        println!("{:>4} [{exit:?}]", index + 1);
        for token in tokenizer.tokens(index).unwrap_or_default() {
            println!("       {:>3} {:?} {:?}", token.start, token.kind, token.text);
        }
    }
}

fn cmd_check(path: &Path) {
    let tokenizer = tokenize(path, None);
    let errors = tokenizer.errors();

    for error in &errors {
        eprintln!(
            "{}:{}:{}: {}",
            path.display(),
            error.line + 1,
            error.column + 1,
            error.kind
        );
    }

    if !errors.is_empty() {
        std::process::exit(1);
    }
    eprintln!("OK: {}", path.display());
}
