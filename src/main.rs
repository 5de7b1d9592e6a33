//! CLI entry point for the SGPA calculator.
//!
//! Prompts for per-subject grades of a built-in term and prints the total
//! credits and the credit-weighted average. Without a subcommand it runs the
//! Semester 3 prompt straight away.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sgpa_calc::catalog::Term;
use sgpa_calc::output::{Format, write_subjects};
use sgpa_calc::session::{run_cgpa, run_sgpa};
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "sgpa_calc")]
#[command(about = "Compute a credit-weighted semester grade point average", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter grades for one term and print its SGPA
    Sgpa {
        /// Term whose subject table to prompt for
        #[arg(value_enum, default_value_t = Term::Sem3)]
        term: Term,

        /// Result format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Enter grades for several terms and print the cumulative CGPA
    Cgpa {
        /// Terms to include, in order (defaults to every term)
        #[arg(value_enum)]
        terms: Vec<Term>,

        /// Result format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List the subjects and credits of a term
    Subjects {
        #[arg(value_enum, default_value_t = Term::Sem3)]
        term: Term,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _guard = init_logging();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Sgpa {
        term: Term::Sem3,
        format: Format::Text,
    });

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Sgpa { term, format } => {
            run_sgpa(term, format, stdin, &mut stdout)?;
        }
        Commands::Cgpa { terms, format } => {
            let terms = if terms.is_empty() {
                Term::ALL.to_vec()
            } else {
                terms
            };
            run_cgpa(&terms, format, stdin, &mut stdout)?;
        }
        Commands::Subjects { term } => {
            debug!(term = term.label(), "Listing subjects");
            write_subjects(&mut stdout, term.subjects())?;
        }
    }

    Ok(())
}

/// Logging setup: stderr at `warn` unless `RUST_LOG` says otherwise, plus a
/// JSON rolling log file when `LOG_FILE_PATH` is set.
///
/// The returned guard must live until exit so the file writer flushes.
fn init_logging() -> Option<WorkerGuard> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        );

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let path = Path::new(&log_file_path);
            let log_dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let log_file_name = path.file_name().unwrap_or(OsStr::new("sgpa_calc.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::builder()
                        .with_env_var("RUST_LOG_JSON")
                        .with_default_directive(LevelFilter::DEBUG.into())
                        .from_env_lossy(),
                );
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}
