//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::correction::FUZZY_THRESHOLD;

/// scribefix - Correct recurring recognizer mistakes in transcribed text
///
/// With no command, reads text from stdin and prints the corrected text.
#[derive(Parser, Debug)]
#[command(name = "scribefix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Vocabulary file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub vocabulary: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Correct text read from stdin
    Correct {
        /// Minimum similarity (0.0-1.0) for fuzzy replacement
        #[arg(short, long, default_value_t = FUZZY_THRESHOLD)]
        threshold: f64,
    },

    /// Vocabulary management
    #[command(subcommand)]
    Vocabulary(VocabularyCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum VocabularyCommand {
    /// Show the loaded vocabulary
    Show,

    /// Show vocabulary file path
    Path,

    /// Check that every user correction pattern compiles
    Check,

    /// Write a starter vocabulary file
    Init {
        /// Force overwrite existing vocabulary
        #[arg(short, long)]
        force: bool,
    },
}
