//! Configuration module for scribefix
//!
//! Handles loading the user vocabulary (extra corrections and known terms)
//! from a JSON file.

mod vocabulary;

pub use vocabulary::{
    default_vocabulary_path, resolve_path, LoadedVocabulary, UserVocabulary, VocabularySource,
    VOCABULARY_ENV,
};
