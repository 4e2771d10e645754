use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use colored::Colorize;
use normdup_core::{source, CheckOutcome, Error};
use tracing_subscriber::EnvFilter;

mod render;

use render::Output;

/// Environment variable holding the log filter
const LOG_ENV: &str = "NORMDUP_LOG";

/// normdup — find records whose values match after normalization
///
/// Values that differ only by character width, hyphen variant, whitespace
/// or letter case are reported as duplicates.
#[derive(Parser)]
#[command(name = "normdup", version, about, long_about = None)]
struct Cli {
    /// Suppress standard output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the fields that can be checked (keys of the first record)
    Keys {
        /// Path to JSON file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report duplicate values of one field
    Check {
        /// Path to JSON file
        file: PathBuf,
        /// Field to check
        #[arg(short, long, env = "NORMDUP_FIELD")]
        field: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with status 1 when duplicates are found
        #[arg(long)]
        fail_on_duplicates: bool,
    },

    /// Print the canonical key of each text
    Normalize {
        /// Texts to normalize
        #[arg(required = true)]
        texts: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pretty-print the JSON document
    Preview {
        /// Path to JSON file
        file: PathBuf,
    },

    /// Show the matching rules
    Rules,

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
    init_tracing(cli.no_color);

    let out = Output::new(cli.quiet);

    let exit_code = match run(cli.command, &out) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            2
        }
    };

    process::exit(exit_code);
}

fn init_tracing(no_color: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(command: Commands, out: &Output) -> Result<i32, Error> {
    match command {
        Commands::Keys { file, json } => {
            let records = source::load_records(&file)?;
            let fields = source::field_names(&records);
            if json {
                out.json(&serde_json::json!({
                    "record_count": records.len(),
                    "fields": fields,
                }))?;
            } else {
                render::keys(out, records.len(), &fields);
            }
            Ok(0)
        }
        Commands::Check {
            file,
            field,
            json,
            fail_on_duplicates,
        } => {
            let outcome = check_file(&file, &field)?;
            if json {
                out.json(&outcome)?;
            } else {
                render::outcome(out, &field, &outcome);
            }
            let found = outcome.report().is_some_and(|r| r.has_duplicates());
            Ok(if fail_on_duplicates && found { 1 } else { 0 })
        }
        Commands::Normalize { texts, json } => {
            if json {
                let keys: Vec<serde_json::Value> = texts
                    .iter()
                    .map(|text| {
                        serde_json::json!({
                            "input": text,
                            "key": normdup_core::normalize(text),
                        })
                    })
                    .collect();
                out.json(&keys)?;
            } else {
                for text in &texts {
                    let key = normdup_core::normalize(text);
                    tracing::trace!(input = %text, key = %key, "normalized");
                    out.line(&key);
                }
            }
            Ok(0)
        }
        Commands::Preview { file } => {
            let text = source::read_source(&file)?;
            out.line(&source::preview(&text)?);
            Ok(0)
        }
        Commands::Rules => {
            render::rules(out);
            Ok(0)
        }
        Commands::Version => {
            out.line(&format!(
                "normdup {} (normdup-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            ));
            Ok(0)
        }
    }
}

fn check_file(file: &Path, field: &str) -> Result<CheckOutcome, Error> {
    let text = source::read_source(file)?;
    normdup_core::check_json(&text, field)
}
