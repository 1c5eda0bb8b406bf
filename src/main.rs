// appcheck: accept/reject front end for the `app` language

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use appcheck::AnalysisError;
use clap::{ArgAction, Parser};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "appcheck",
    version,
    about = "Lexer, parser and type checker for `app` programs"
)]
struct Cli {
    /// Source file; read as one line from stdin when omitted
    file: Option<PathBuf>,

    /// Only run the lexer and print every lexeme
    #[arg(short, long)]
    tokens: bool,

    /// Do not print anything for an accepted program
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = match resolve_path(cli.file) {
        Ok(Some(path)) => path,
        Ok(None) => {
            eprintln!("File name not provided");
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(1);
        }
    };

    if cli.tokens {
        return print_tokens(&path);
    }

    match appcheck::check_file(&path) {
        Ok(_) => {
            if !cli.quiet {
                println!("Program accepted");
            }
            ExitCode::SUCCESS
        }
        Err(AnalysisError::Diagnostic(diagnostic)) => {
            eprintln!("{diagnostic}");
            ExitCode::from(1)
        }
        Err(AnalysisError::Source(e)) => {
            eprintln!("I/O error: {e}");
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// File name from the command line, or else one line of standard input
fn resolve_path(arg: Option<PathBuf>) -> anyhow::Result<Option<PathBuf>> {
    if let Some(path) = arg {
        return Ok((!path.as_os_str().is_empty()).then_some(path));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("File name: ");
        io::stderr().flush().context("Failed flush prompt")?;
    }

    let mut line = String::new();
    stdin
        .read_line(&mut line)
        .context("Failed read file name")?;

    let name = line.trim();
    Ok((!name.is_empty()).then(|| PathBuf::from(name)))
}

fn print_tokens(path: &Path) -> ExitCode {
    match appcheck::dump_tokens_file(path) {
        Ok(lexemes) => {
            for (line, lexeme) in lexemes {
                println!("{line:02}: {lexeme}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::from(2)
        }
    }
}
