//! CLI command implementations

use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::Path;

use crate::cli::args::VocabularyCommand;
use crate::config::{resolve_path, UserVocabulary};
use crate::correction::{check_rule, Corrector};

/// Read stdin, correct it and print the result
pub fn correct_stdin(vocabulary: Option<&Path>, threshold: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) {
        anyhow::bail!("Threshold must be between 0.0 and 1.0, got {}", threshold);
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read text from stdin")?;

    let text = input.trim();
    let corrected = if text.is_empty() {
        String::new()
    } else {
        Corrector::from_path(vocabulary)
            .with_threshold(threshold)
            .correct(text)
    };

    println!("{}", corrected);
    Ok(())
}

/// Handle vocabulary subcommands
pub fn vocabulary_command(vocabulary: Option<&Path>, cmd: VocabularyCommand) -> Result<()> {
    let path = resolve_path(vocabulary)?;

    match cmd {
        VocabularyCommand::Path => {
            println!("{}", path.display());
        }
        VocabularyCommand::Show => {
            let loaded = UserVocabulary::load(&path);
            eprintln!("{}: {}", loaded.path.display(), loaded.source);
            println!("{}", serde_json::to_string_pretty(&loaded.vocabulary)?);
        }
        VocabularyCommand::Check => {
            if !path.exists() {
                println!(
                    "No vocabulary file at {}, built-in corrections only",
                    path.display()
                );
                return Ok(());
            }

            let vocabulary = UserVocabulary::read_from(&path)
                .with_context(|| format!("Failed to load vocabulary: {}", path.display()))?;

            let mut invalid = 0;
            for rule in vocabulary.rules() {
                match check_rule(&rule) {
                    Ok(()) => println!("ok       {}", rule.pattern),
                    Err(e) => {
                        invalid += 1;
                        println!("invalid  {} ({})", rule.pattern, e);
                    }
                }
            }
            println!(
                "{} corrections, {} known terms",
                vocabulary.corrections.len(),
                vocabulary.known_terms.len()
            );

            if invalid > 0 {
                anyhow::bail!(
                    "{} of {} correction patterns are invalid and will be skipped",
                    invalid,
                    vocabulary.corrections.len()
                );
            }
        }
        VocabularyCommand::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Vocabulary file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            UserVocabulary::write_template(&path)?;
            println!("Vocabulary initialized at: {}", path.display());
        }
    }

    Ok(())
}
