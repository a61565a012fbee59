//! Core tokenization engine for smarttok.
//!
//! # Architecture
//!
//! - [`Vocabulary`]: append-only table with forward, reverse and frequency maps
//! - [`Tokenizer`]: greedy longest-match segmenter and its inverse `decode`,
//!   owning the vocabulary behind a mutex
//! - [`classify`]: token type rules and [`TokenStats`]
//! - [`COMMON_TOKENS`]: the built-in seed list
//! - [`input`]: text length checks and id-sequence parsing for front ends
//!
//! # Ids
//!
//! Every token carries two ids. `Token::id` is a display id counted up from
//! `vocab_size + 1000` within one call. The decode id in
//! `TokenizationResult::token_ids` is the vocabulary id, or
//! `vocab_size + code_point` for a character the vocabulary does not cover.
//! Only decode ids round-trip through [`Tokenizer::decode`].

mod classify;
pub mod input;
mod seed;
mod tokenizer;
mod vocab;

pub use classify::{classify, TokenStats, TokenType};
pub use seed::COMMON_TOKENS;
pub use tokenizer::{
    Token, TokenizationResult, Tokenizer, TokenizerError, DISPLAY_ID_OFFSET, MAX_MATCH_LEN,
};
pub use vocab::{VocabError, Vocabulary};
