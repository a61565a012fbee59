//! Vocabulary table: forward, reverse and frequency maps over one key set.
//!
//! Ids are assigned by insertion order starting at 0, so the table always
//! covers exactly `[0, len)`. The only mutation after construction is
//! [`Vocabulary::add_custom_token`], which appends; existing ids never move.
//!
//! # Example
//!
//! ```rust
//! use smarttok::Vocabulary;
//!
//! let mut vocab = Vocabulary::new(&["Hello", " ", "world"]).unwrap();
//! assert_eq!(vocab.lookup("world"), Some(2));
//! assert_eq!(vocab.reverse_lookup(0), Some("Hello"));
//!
//! vocab.add_custom_token("!").unwrap();
//! assert_eq!(vocab.len(), 4);
//! ```

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors that can occur when building or extending a vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabError {
    #[error("Seed token list is empty")]
    EmptySeed,
    #[error("Duplicate seed token: {0:?}")]
    DuplicateSeed(String),
    #[error("Token text must not be empty")]
    EmptyToken,
}

/// Fixed, append-only token table.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    encoder: FxHashMap<String, u32>,
    decoder: FxHashMap<u32, String>,
    frequency: FxHashMap<String, u64>,
}

impl Vocabulary {
    /// Build a vocabulary assigning `id = index` to each seed token.
    pub fn new<S: AsRef<str>>(seed: &[S]) -> Result<Self, VocabError> {
        if seed.is_empty() {
            return Err(VocabError::EmptySeed);
        }

        let mut vocab = Self {
            encoder: FxHashMap::default(),
            decoder: FxHashMap::default(),
            frequency: FxHashMap::default(),
        };

        for token in seed {
            let token = token.as_ref();
            if token.is_empty() {
                return Err(VocabError::EmptyToken);
            }
            if vocab.encoder.contains_key(token) {
                return Err(VocabError::DuplicateSeed(token.to_string()));
            }
            vocab.insert(token);
        }

        Ok(vocab)
    }

    fn insert(&mut self, token: &str) -> u32 {
        let id = self.decoder.len() as u32;
        self.encoder.insert(token.to_string(), id);
        self.decoder.insert(id, token.to_string());
        self.frequency.insert(token.to_string(), 0);
        id
    }

    /// Forward lookup (text → id).
    #[inline]
    pub fn lookup(&self, text: &str) -> Option<u32> {
        self.encoder.get(text).copied()
    }

    /// Reverse lookup (id → text).
    #[inline]
    pub fn reverse_lookup(&self, id: u32) -> Option<&str> {
        self.decoder.get(&id).map(String::as_str)
    }

    /// Number of registered entries.
    ///
    /// Also the base offset for unknown-character ids, so it shifts whenever
    /// a custom token is appended.
    #[inline]
    pub fn len(&self) -> usize {
        self.decoder.len()
    }

    /// Always false for a successfully constructed vocabulary.
    pub fn is_empty(&self) -> bool {
        self.decoder.is_empty()
    }

    /// Append `text` with the next free id. Returns the id of `text` whether
    /// it was just added or already present.
    pub fn add_custom_token(&mut self, text: &str) -> Result<u32, VocabError> {
        if text.is_empty() {
            return Err(VocabError::EmptyToken);
        }
        if let Some(id) = self.lookup(text) {
            log::debug!("custom token {:?} already registered as id {}", text, id);
            return Ok(id);
        }
        let id = self.insert(text);
        log::info!("registered custom token {:?} as id {}", text, id);
        Ok(id)
    }

    /// Increment the usage counter for `text` and return the new count.
    pub fn bump_frequency(&mut self, text: &str) -> u64 {
        let count = self.frequency.entry(text.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Usage count for `text`, 0 when it has never been counted.
    pub fn frequency(&self, text: &str) -> u64 {
        self.frequency.get(text).copied().unwrap_or(0)
    }

    /// Forward map (text → id).
    pub fn encoder(&self) -> &FxHashMap<String, u32> {
        &self.encoder
    }

    /// Reverse map (id → text).
    pub fn decoder(&self) -> &FxHashMap<u32, String> {
        &self.decoder
    }
}
