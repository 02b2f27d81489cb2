//! `enwrap`: generate delegating envelope types from a type-model
//! document.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use enwrap_driver::{BatchDocument, Driver, MemorySink, SinkError, SourceSink};
use enwrap_emit::SourceUnit;

#[derive(Parser)]
#[command(name = "enwrap", about = "Generate delegating envelope types from a type-model document")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate envelope sources from a model document
    Generate {
        /// Model document (JSON)
        #[arg(short, long)]
        model: PathBuf,
        /// Output directory for generated sources
        #[arg(short, long)]
        out: PathBuf,
        /// Parameterize every envelope over the wrapped subtype
        #[arg(long)]
        generic: bool,
        /// Override the name suffix for every envelope
        #[arg(long)]
        suffix: Option<String>,
    },
    /// Validate a model document without writing anything
    Check {
        /// Model document (JSON)
        #[arg(short, long)]
        model: PathBuf,
    },
}

/// Writes each unit under the output root, one directory per
/// namespace segment.
struct FsSink {
    root: PathBuf,
}

impl SourceSink for FsSink {
    fn accept(&mut self, unit: SourceUnit) -> Result<(), SinkError> {
        let path = self.root.join(unit.relative_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SinkError(e.to_string()))?;
        }
        debug!(path = %path.display(), "writing generated source");
        fs::write(&path, &unit.content).map_err(|e| SinkError(e.to_string()))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            model,
            out,
            generic,
            suffix,
        } => {
            let document = load(&model)?;
            let (model, mut requests) =
                document.into_parts().context("invalid model document")?;
            for request in &mut requests {
                if generic {
                    request.config.generic = true;
                }
                if let Some(suffix) = &suffix {
                    request.config.suffix = suffix.clone();
                }
            }
            let mut sink = FsSink { root: out };
            let report = Driver::new(&model).process(&requests, &mut sink);
            for diagnostic in &report.diagnostics {
                eprintln!("{}", diagnostic);
            }
            println!("generated {} file(s)", report.generated);
            Ok(if report.has_errors() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Check { model } => {
            let document = load(&model)?;
            let (model, requests) =
                document.into_parts().context("invalid model document")?;
            let mut sink = MemorySink::new();
            let report = Driver::new(&model).process(&requests, &mut sink);
            for diagnostic in &report.diagnostics {
                eprintln!("{}", diagnostic);
            }
            println!(
                "{} type(s), {} request(s), {} would generate",
                model.len(),
                requests.len(),
                report.generated
            );
            Ok(if report.has_errors() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

fn load(path: &Path) -> Result<BatchDocument> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
