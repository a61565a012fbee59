pub mod core;
#[cfg(feature = "python")]
mod python;

pub use core::{
    classify, input, Token, TokenStats, TokenType, TokenizationResult, Tokenizer, TokenizerError,
    VocabError, Vocabulary, COMMON_TOKENS, DISPLAY_ID_OFFSET, MAX_MATCH_LEN,
};
