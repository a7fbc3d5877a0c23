use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};

use branchline_core::{analyse_data_structure, Value};

mod demos;
mod prompt;

/// Worked branching-logic examples from the command line
#[derive(Parser)]
#[command(name = "branchline")]
#[command(about = "Branchline - worked branching-logic examples", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the beginner threshold examples
    Beginner,
    /// Walk the intermediate calculator examples
    Intermediate,
    /// Walk the advanced validator examples
    Advanced,
    /// Walk the shape-matching examples
    Matchers,
    /// Run every example section in order
    All,
    /// Prompt for a temperature and classify it
    Temperature,
    /// Classify a JSON value by shape
    Analyse {
        /// JSON document to classify
        json: String,
    },
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!("branchline started with verbosity level: {}", cli.verbose);

    match cli.command {
        Commands::Beginner => demos::run_beginner_examples(),
        Commands::Intermediate => demos::run_intermediate_examples(),
        Commands::Advanced => demos::run_advanced_examples(),
        Commands::Matchers => demos::run_match_examples(),
        Commands::All => {
            demos::run_beginner_examples();
            demos::run_intermediate_examples();
            demos::run_advanced_examples();
            demos::run_match_examples();
        }
        Commands::Temperature => {
            if let Err(e) = prompt::run() {
                error!("temperature prompt failed: {e}");
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
        Commands::Analyse { json } => match serde_json::from_str::<Value>(&json) {
            Ok(value) => println!("{}", analyse_data_structure(&value)),
            Err(e) => {
                error!("rejected input: {e}");
                eprintln!("Error: invalid JSON: {e}");
                return ExitCode::from(2);
            }
        },
    }

    ExitCode::SUCCESS
}
