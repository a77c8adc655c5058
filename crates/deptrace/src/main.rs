//! Deps CLI - explore a codebase's import graph from the command line.
//!
//! Deps asks an external build-metadata command for one module's imports at a
//! time and walks the resulting graph breadth-first.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::OutputMode;

/// Deps: discover how the modules of a codebase import each other.
#[derive(Parser)]
#[command(name = "deps")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to ./.deps.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Namespace prefix a dependency must match to be followed
    #[arg(short, long, global = true)]
    namespace: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dependency tree below a module
    Tree {
        /// Module to start from
        root: String,
    },

    /// Print one shortest import path between two modules
    Path {
        /// Module to start from
        root: String,
        /// Module to reach
        target: String,
    },

    /// Print every discovered import path between two modules
    Paths {
        /// Module to start from
        root: String,
        /// Module to reach
        target: String,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let Some(command) = cli.command else {
        print!("{}", cli::USAGE);
        return ExitCode::FAILURE;
    };

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let result = cli::open_walker(cli.config.as_deref(), cli.namespace).and_then(|walker| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match command {
            Commands::Tree { root } => cli::tree::run(&walker, &root, mode, &mut out),
            Commands::Path { root, target } => {
                cli::path::run(&walker, &root, &target, mode, &mut out)
            }
            Commands::Paths { root, target } => {
                cli::paths::run(&walker, &root, &target, mode, &mut out)
            }
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
