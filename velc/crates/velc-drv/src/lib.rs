//! velc-drv - Compiler Driver
//!
//! The driver is the I/O boundary around the lexer: it parses command-line
//! arguments, loads source files into memory, runs the lexical analyzer, and
//! prints tokens or renders diagnostics. The core crates never touch the
//! filesystem or the terminal themselves.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use velc_util::Diagnostic;

/// Vel compiler driver.
///
/// Currently the pipeline stops after lexical analysis: the tokens are
/// printed one per line, or the first lexical error is rendered against the
/// offending source line.
#[derive(Parser, Debug)]
#[command(name = "velc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compiler for the Vel programming language", long_about = None)]
pub struct Cli {
    /// Input source files
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Suppress token output, only report success or failure
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long, env = "VELC_VERBOSE")]
    pub verbose: bool,
}

/// One loaded source file.
#[derive(Debug)]
pub struct Session {
    /// Path the source was loaded from.
    pub path: PathBuf,
    /// Complete file contents.
    pub source: String,
}

impl Session {
    /// Loads a source file into memory.
    pub fn new(path: PathBuf) -> Result<Self> {
        let source = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self { path, source })
    }

    /// Lexes the loaded file, printing tokens unless `quiet` is set.
    ///
    /// Returns an error after rendering the diagnostic when the file does
    /// not tokenize.
    pub fn lex(&self, quiet: bool) -> Result<()> {
        info!(path = %self.path.display(), "lexing");

        match velc_lex::tokenize(&self.source) {
            Ok(output) => {
                debug!(
                    tokens = output.tokens.len(),
                    lines = output.lines_processed,
                    "lexing finished"
                );
                if !quiet {
                    for token in &output.tokens {
                        println!("{}", token);
                    }
                }
                eprintln!(
                    "{}: {} tokens, {} lines",
                    self.path.display(),
                    output.tokens.len(),
                    output.lines_processed
                );
                Ok(())
            },
            Err(err) => {
                let diagnostic = Diagnostic::error(err.to_string(), err.span);
                eprint!("{}", diagnostic.render(&self.source));
                bail!("could not tokenize {}", self.path.display());
            },
        }
    }
}

/// Runs the driver over every input file, stopping at the first failure.
pub fn run(cli: Cli) -> Result<()> {
    for path in cli.inputs {
        let session = Session::new(path)?;
        session.lex(cli.quiet)?;
    }
    Ok(())
}
