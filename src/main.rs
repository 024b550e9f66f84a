//! scribefix - Post-processing correction for transcribed text
//!
//! Entry point for the scribefix CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scribefix::cli::{Cli, Commands};
use scribefix::correction::FUZZY_THRESHOLD;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for corrected text
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let vocabulary = cli.vocabulary.as_deref();

    match cli.command {
        None => {
            scribefix::cli::commands::correct_stdin(vocabulary, FUZZY_THRESHOLD)?;
        }
        Some(Commands::Correct { threshold }) => {
            scribefix::cli::commands::correct_stdin(vocabulary, threshold)?;
        }
        Some(Commands::Vocabulary(vocabulary_cmd)) => {
            scribefix::cli::commands::vocabulary_command(vocabulary, vocabulary_cmd)?;
        }
        Some(Commands::Completions { shell }) => {
            scribefix::cli::completions::print(shell);
        }
    }

    Ok(())
}
