//! User vocabulary management

use directories::BaseDirs;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::correction::CorrectionRule;
use crate::{Result, ScribefixError};

/// Environment variable that overrides the vocabulary file location
pub const VOCABULARY_ENV: &str = "SCRIBEFIX_VOCABULARY";

/// Extra corrections and known terms supplied by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserVocabulary {
    /// Pattern -> replacement rules, applied after the built-ins in file order
    #[serde(default)]
    pub corrections: IndexMap<String, String>,

    /// Terms appended after the built-in known terms
    #[serde(default)]
    pub known_terms: Vec<String>,
}

/// How the vocabulary returned by [`UserVocabulary::load`] was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularySource {
    /// The file was read and parsed
    Loaded,
    /// No file exists at the path
    Missing,
    /// The file exists but could not be read or parsed
    Invalid { reason: String },
}

impl fmt::Display for VocabularySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabularySource::Loaded => write!(f, "loaded"),
            VocabularySource::Missing => write!(f, "not found, using built-ins only"),
            VocabularySource::Invalid { reason } => {
                write!(f, "invalid ({}), using built-ins only", reason)
            }
        }
    }
}

/// Result of a lenient vocabulary load
#[derive(Debug, Clone)]
pub struct LoadedVocabulary {
    pub path: PathBuf,
    pub source: VocabularySource,
    pub vocabulary: UserVocabulary,
}

impl UserVocabulary {
    /// Load the vocabulary at `path`, falling back to an empty one on any failure.
    ///
    /// Never fails: a missing file or a read/parse error yields an empty
    /// vocabulary, and `source` records which case happened.
    pub fn load(path: &Path) -> LoadedVocabulary {
        let (source, vocabulary) = match Self::read_from(path) {
            Ok(vocabulary) => {
                tracing::debug!(
                    "Loaded {} corrections and {} known terms from {}",
                    vocabulary.corrections.len(),
                    vocabulary.known_terms.len(),
                    path.display()
                );
                (VocabularySource::Loaded, vocabulary)
            }
            Err(ScribefixError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No vocabulary file at {}", path.display());
                (VocabularySource::Missing, Self::default())
            }
            Err(e) => {
                tracing::warn!("Ignoring vocabulary file {}: {}", path.display(), e);
                (
                    VocabularySource::Invalid {
                        reason: e.to_string(),
                    },
                    Self::default(),
                )
            }
        };

        LoadedVocabulary {
            path: path.to_path_buf(),
            source,
            vocabulary,
        }
    }

    /// Read and parse the vocabulary at `path`, surfacing any error
    pub fn read_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let vocabulary = serde_json::from_str(&content)?;
        Ok(vocabulary)
    }

    /// User corrections as rules, in file order
    pub fn rules(&self) -> impl Iterator<Item = CorrectionRule> + '_ {
        self.corrections
            .iter()
            .map(|(pattern, replacement)| CorrectionRule::new(pattern, replacement))
    }

    /// Starter vocabulary written by `vocabulary init`
    pub fn template() -> Self {
        let mut corrections = IndexMap::new();
        corrections.insert(r"\bclaude\s*bot\b".to_string(), "clawdbot".to_string());
        corrections.insert(r"\bwhisper\s*cpp\b".to_string(), "whisper.cpp".to_string());

        Self {
            corrections,
            known_terms: vec!["transcript".to_string(), "vocabulary".to_string()],
        }
    }

    /// Write the starter vocabulary to a file
    pub fn write_template(path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&Self::template())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Default vocabulary location: `~/.clawdbot/config/vocabulary.json`
pub fn default_vocabulary_path() -> Result<PathBuf> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| ScribefixError::Config("Could not determine home directory".into()))?;

    Ok(dirs
        .home_dir()
        .join(".clawdbot")
        .join("config")
        .join("vocabulary.json"))
}

/// Pick the vocabulary path: an explicit path, then the env override, then the default.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(VOCABULARY_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    default_vocabulary_path()
}
