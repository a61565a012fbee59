use rayon::prelude::*;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

use super::classify::{classify, TokenStats, TokenType};
use super::seed::COMMON_TOKENS;
use super::vocab::{VocabError, Vocabulary};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    #[error("Vocabulary error: {0}")]
    Vocab(#[from] VocabError),
    #[error("Invalid token id input: {0}")]
    InvalidDecodeInput(String),
    #[error("No token ids given")]
    EmptyTokenIds,
    #[error("Text is too long: {len} characters (limit {max})")]
    InputTooLong { len: usize, max: usize },
}

/// Maximum candidate length, in characters, tried at each cursor position.
pub const MAX_MATCH_LEN: usize = 20;

/// Display ids start this far above the vocabulary size.
pub const DISPLAY_ID_OFFSET: u32 = 1000;

/// One token occurrence in a tokenization result.
///
/// `id` is a per-call display id and does not decode. Use
/// [`TokenizationResult::token_ids`] for [`Tokenizer::decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub id: u32,
    /// Start offset in characters (inclusive).
    pub start: usize,
    /// End offset in characters (exclusive).
    pub end: usize,
    pub token_type: TokenType,
    pub frequency: u64,
}

impl Token {
    /// Text with whitespace made visible.
    pub fn display_text(&self) -> &str {
        match self.text.as_str() {
            " " => "␣",
            "\n" => "↵",
            "\t" => "⇥",
            other => other,
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Output of a single [`Tokenizer::tokenize`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizationResult {
    pub tokens: Vec<Token>,
    /// Vocabulary ids (or unknown-character ids), one per token.
    pub token_ids: Vec<u32>,
    /// Vocabulary size at the time of the call.
    pub vocab_size: usize,
    pub stats: TokenStats,
}

/// Greedy longest-match tokenizer over an append-only vocabulary.
///
/// The tokenizer owns its [`Vocabulary`] behind a mutex. Every call locks it
/// once for its whole duration, so frequency updates and custom-token
/// registration never interleave between threads.
///
/// # Algorithm
///
/// At each cursor position the longest substring (up to
/// [`MAX_MATCH_LEN`] characters) present in the vocabulary wins. When no
/// substring matches, the single character at the cursor becomes an unknown
/// token whose decode id is `vocab_size + code_point`.
///
/// # Example
///
/// ```rust
/// use smarttok::Tokenizer;
///
/// let tokenizer = Tokenizer::new();
/// let result = tokenizer.tokenize("Hello world!");
/// assert_eq!(result.tokens.len(), 4);
/// assert_eq!(tokenizer.decode(&result.token_ids), "Hello world!");
/// ```
pub struct Tokenizer {
    vocab: Mutex<Vocabulary>,
    max_match_len: usize,
}

impl Tokenizer {
    /// Create a tokenizer seeded with [`COMMON_TOKENS`].
    pub fn new() -> Self {
        Self {
            vocab: Mutex::new(Self::common_vocab()),
            max_match_len: MAX_MATCH_LEN,
        }
    }

    fn common_vocab() -> Vocabulary {
        match Vocabulary::new(COMMON_TOKENS) {
            Ok(vocab) => vocab,
            // COMMON_TOKENS is non-empty and duplicate free (checked in seed tests).
            Err(e) => unreachable!("built-in seed is invalid: {e}"),
        }
    }

    /// Create a tokenizer from a custom seed list.
    pub fn with_seed<S: AsRef<str>>(seed: &[S]) -> Result<Self, TokenizerError> {
        Self::with_options(seed, MAX_MATCH_LEN)
    }

    /// Create a tokenizer with full configuration options.
    ///
    /// # Arguments
    /// * `seed` - Ordered seed tokens; id = position
    /// * `max_match_len` - Longest candidate tried per position, in characters
    pub fn with_options<S: AsRef<str>>(
        seed: &[S],
        max_match_len: usize,
    ) -> Result<Self, TokenizerError> {
        let vocab = Vocabulary::new(seed)?;
        Ok(Self {
            vocab: Mutex::new(vocab),
            max_match_len: max_match_len.max(1),
        })
    }

    /// Change the match window. Values below 1 are clamped to 1.
    pub fn max_match_len(mut self, max_match_len: usize) -> Self {
        self.max_match_len = max_match_len.max(1);
        self
    }

    fn lock(&self) -> MutexGuard<'_, Vocabulary> {
        // Every mutation leaves the tables consistent, so a poisoned lock is still usable.
        self.vocab
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Split `text` into tokens.
    ///
    /// Matched tokens bump the shared frequency counter; unknown characters
    /// always report frequency 1 and leave it untouched.
    pub fn tokenize(&self, text: &str) -> TokenizationResult {
        let mut vocab = self.lock();
        tokenize_with(&mut vocab, text, self.max_match_len)
    }

    /// Tokenize several texts in order under one lock.
    ///
    /// Sequential on purpose: frequency counts depend on call order.
    pub fn tokenize_batch(&self, texts: &[String]) -> Vec<TokenizationResult> {
        let mut vocab = self.lock();
        texts
            .iter()
            .map(|text| tokenize_with(&mut vocab, text, self.max_match_len))
            .collect()
    }

    /// Map ids back to text.
    ///
    /// Ids in the vocabulary decode to their entry. Any other id decodes to
    /// the character with code point `id - vocab_size`, or U+FFFD when that
    /// is not a valid character.
    pub fn decode(&self, ids: &[u32]) -> String {
        let vocab = self.lock();
        decode_with(&vocab, ids)
    }

    /// Batch decode multiple id lists in parallel.
    pub fn decode_batch(&self, id_lists: &[Vec<u32>]) -> Vec<String> {
        let guard = self.lock();
        let vocab: &Vocabulary = &guard;
        id_lists
            .par_iter()
            .map(|ids| decode_with(vocab, ids))
            .collect()
    }

    /// Register `text` as a vocabulary entry if it is not one already.
    ///
    /// Returns the entry's id. Adding a token grows the vocabulary, which
    /// shifts the base of every later unknown-character id.
    ///
    /// An entry longer than the match window is accepted but never matched
    /// by [`tokenize`](Self::tokenize); it is only reachable through decode.
    pub fn add_custom_token(&self, text: &str) -> Result<u32, TokenizerError> {
        let len = text.chars().count();
        if len > self.max_match_len {
            log::warn!(
                "custom token {:?} is {} chars, longer than the {}-char match window; it will only decode",
                text,
                len,
                self.max_match_len
            );
        }
        Ok(self.lock().add_custom_token(text)?)
    }

    /// Get the vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.lock().len()
    }

    /// Usage count of a vocabulary entry across all calls so far.
    pub fn frequency(&self, text: &str) -> u64 {
        self.lock().frequency(text)
    }

    pub fn lookup(&self, text: &str) -> Option<u32> {
        self.lock().lookup(text)
    }

    pub fn reverse_lookup(&self, id: u32) -> Option<String> {
        self.lock().reverse_lookup(id).map(str::to_string)
    }

    /// Copy of the current vocabulary.
    pub fn vocabulary(&self) -> Vocabulary {
        self.lock().clone()
    }

    /// Configured match window in characters.
    pub fn match_window(&self) -> usize {
        self.max_match_len
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Longest vocabulary entry starting at char index `start`.
///
/// `bounds[i]` is the byte offset of char `i`, with a trailing entry for
/// `text.len()`.
fn find_longest_match(
    vocab: &Vocabulary,
    text: &str,
    bounds: &[usize],
    start: usize,
    max_match_len: usize,
) -> Option<(u32, usize)> {
    let remaining = bounds.len() - 1 - start;
    let window = max_match_len.min(remaining);

    (1..=window).rev().find_map(|len| {
        let candidate = &text[bounds[start]..bounds[start + len]];
        vocab.lookup(candidate).map(|id| (id, len))
    })
}

fn tokenize_with(vocab: &mut Vocabulary, text: &str, max_match_len: usize) -> TokenizationResult {
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = bounds.len() - 1;

    let vocab_size = vocab.len();
    let mut tokens = Vec::new();
    let mut token_ids = Vec::new();
    let mut next_display_id = vocab_size as u32 + DISPLAY_ID_OFFSET;
    let mut cursor = 0;

    while cursor < char_len {
        let matched = find_longest_match(vocab, text, &bounds, cursor, max_match_len);
        let (id, len) = matched.unwrap_or_else(|| {
            let ch = text[bounds[cursor]..].chars().next().map_or(0, u32::from);
            (vocab_size as u32 + ch, 1)
        });

        let piece = &text[bounds[cursor]..bounds[cursor + len]];
        let frequency = if matched.is_some() {
            vocab.bump_frequency(piece)
        } else {
            log::trace!("unknown character {:?} at offset {}", piece, cursor);
            1
        };

        tokens.push(Token {
            text: piece.to_string(),
            id: next_display_id,
            start: cursor,
            end: cursor + len,
            token_type: classify(piece),
            frequency,
        });
        token_ids.push(id);

        next_display_id += 1;
        cursor += len;
    }

    let stats = TokenStats::from_tokens(&tokens);
    log::debug!(
        "tokenized {} chars into {} tokens ({} unknown)",
        char_len,
        stats.total_tokens,
        stats.unknown_tokens
    );

    TokenizationResult {
        tokens,
        token_ids,
        vocab_size,
        stats,
    }
}

fn decode_with(vocab: &Vocabulary, ids: &[u32]) -> String {
    let base = vocab.len() as u32;
    let mut result = String::with_capacity(ids.len() * 4);

    for &id in ids {
        if let Some(text) = vocab.reverse_lookup(id) {
            result.push_str(text);
            continue;
        }
        match id.checked_sub(base).and_then(char::from_u32) {
            Some(ch) => result.push(ch),
            None => {
                log::warn!("token id {} does not map to a character", id);
                result.push(char::REPLACEMENT_CHARACTER);
            }
        }
    }

    result
}
