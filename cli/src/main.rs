//! # Campusbot CLI
//!
//! Campusbot answers university questions about courses, fees, on-campus
//! jobs, and locations from an embedded knowledge corpus, falling back to a
//! chat model for everything else.
//!
//! ## Usage
//!
//! ```bash
//! # Build the vector index
//! campusbot index
//!
//! # Ask a single question
//! campusbot ask "Which class teaches Python?"
//!
//! # Start an interactive conversation
//! campusbot chat
//! ```

use clap::{Parser, Subcommand};

use campusbot::commands;

/// Initialize logger based on verbose flag
fn init_logger(verbose: bool) {
    let mut log_builder = env_logger::Builder::from_default_env();
    if verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
}

/// Main CLI structure
#[derive(Parser)]
#[command(name = "campusbot")]
#[command(about = "Campusbot — retrieval-augmented campus assistant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Embed the knowledge corpus and upsert it into the vector index
    Index {
        /// Abort on the first record that fails instead of skipping it
        #[arg(long)]
        fail_fast: bool,
        /// Enable verbose output
        #[arg(long, short = 'v')]
        verbose: bool,
    },
    /// Answer a single question
    Ask {
        /// The question to answer
        #[arg(value_name = "QUESTION")]
        question: String,
        /// Nearest neighbors requested from the index
        #[arg(long, value_name = "COUNT", default_value = "5")]
        top_k: usize,
        /// Enable verbose output
        #[arg(long, short = 'v')]
        verbose: bool,
    },
    /// Start an interactive conversation
    Chat {
        /// Nearest neighbors requested from the index
        #[arg(long, value_name = "COUNT", default_value = "5")]
        top_k: usize,
        /// Enable verbose output
        #[arg(long, short = 'v')]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let exit_code = run_command(cli.command).await;
    std::process::exit(exit_code);
}

async fn run_command(command: Commands) -> i32 {
    use campusbot::exit_codes::*;

    match command {
        Commands::Index { fail_fast, verbose } => {
            init_logger(verbose);
            let args = commands::index::IndexArgs { fail_fast, verbose };
            match commands::index::execute(args).await {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("Index error: {}", e);
                    EXIT_ERROR
                }
            }
        }
        Commands::Ask {
            question,
            top_k,
            verbose,
        } => {
            init_logger(verbose);
            let args = commands::ask::AskArgs {
                question,
                top_k,
                verbose,
            };
            match commands::ask::execute(args).await {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("Ask error: {}", e);
                    EXIT_ERROR
                }
            }
        }
        Commands::Chat { top_k, verbose } => {
            init_logger(verbose);
            let args = commands::chat::ChatArgs { top_k, verbose };
            match commands::chat::execute(args).await {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("Chat error: {}", e);
                    EXIT_ERROR
                }
            }
        }
    }
}
