//! Token type classification and per-result statistics.

use rustc_hash::FxHashSet;
use std::fmt;

use super::tokenizer::Token;

/// Category of a token, derived purely from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Word,
    Number,
    Punctuation,
    Whitespace,
    Unknown,
}

impl TokenType {
    /// Lowercase name, as rendered by consumers.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Word => "word",
            TokenType::Number => "number",
            TokenType::Punctuation => "punctuation",
            TokenType::Whitespace => "whitespace",
            TokenType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leading characters that mark a token as punctuation.
const PUNCTUATION_LEADS: &[char] = &[
    '.', ',', ':', ';', '!', '?', '(', ')', '[', ']', '{', '}', '\'', '"',
];

/// Classify token text. Rules are checked in order: all ASCII digits,
/// punctuation lead character, single whitespace character, all ASCII
/// letters, otherwise unknown.
pub fn classify(text: &str) -> TokenType {
    let Some(first) = text.chars().next() else {
        return TokenType::Unknown;
    };

    if text.bytes().all(|b| b.is_ascii_digit()) {
        TokenType::Number
    } else if PUNCTUATION_LEADS.contains(&first) {
        TokenType::Punctuation
    } else if matches!(text, " " | "\n" | "\t") {
        TokenType::Whitespace
    } else if text.bytes().all(|b| b.is_ascii_alphabetic()) {
        TokenType::Word
    } else {
        TokenType::Unknown
    }
}

/// Aggregate counts over one tokenization result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenStats {
    pub total_tokens: usize,
    pub unique_tokens: usize,
    pub word_tokens: usize,
    pub number_tokens: usize,
    pub punctuation_tokens: usize,
    pub whitespace_tokens: usize,
    pub unknown_tokens: usize,
}

impl TokenStats {
    /// Count tokens per type and distinct token texts.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut stats = TokenStats {
            total_tokens: tokens.len(),
            ..Default::default()
        };

        let mut distinct: FxHashSet<&str> = FxHashSet::default();
        for token in tokens {
            distinct.insert(token.text.as_str());
            match token.token_type {
                TokenType::Word => stats.word_tokens += 1,
                TokenType::Number => stats.number_tokens += 1,
                TokenType::Punctuation => stats.punctuation_tokens += 1,
                TokenType::Whitespace => stats.whitespace_tokens += 1,
                TokenType::Unknown => stats.unknown_tokens += 1,
            }
        }
        stats.unique_tokens = distinct.len();

        stats
    }

    /// Count for a single type.
    pub fn count(&self, token_type: TokenType) -> usize {
        match token_type {
            TokenType::Word => self.word_tokens,
            TokenType::Number => self.number_tokens,
            TokenType::Punctuation => self.punctuation_tokens,
            TokenType::Whitespace => self.whitespace_tokens,
            TokenType::Unknown => self.unknown_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_basic() {
        assert_eq!(classify("42"), TokenType::Number);
        assert_eq!(classify("."), TokenType::Punctuation);
        assert_eq!(classify(" "), TokenType::Whitespace);
        assert_eq!(classify("Hello"), TokenType::Word);
        assert_eq!(classify("€"), TokenType::Unknown);
    }

    #[test]
    fn test_classify_precedence() {
        // Leading apostrophe wins over the trailing letter.
        assert_eq!(classify("'s"), TokenType::Punctuation);
        assert_eq!(classify("\n"), TokenType::Whitespace);
        assert_eq!(classify("\t"), TokenType::Whitespace);
        // Two spaces are not a single whitespace character.
        assert_eq!(classify("  "), TokenType::Unknown);
        assert_eq!(classify("\r"), TokenType::Unknown);
    }

    #[test]
    fn test_classify_ascii_only() {
        // Non-ASCII digits and letters do not count.
        assert_eq!(classify("٣"), TokenType::Unknown);
        assert_eq!(classify("é"), TokenType::Unknown);
        assert_eq!(classify("a1"), TokenType::Unknown);
    }

    #[test]
    fn test_classify_operators_are_unknown() {
        for op in ["-", "_", "+", "="] {
            assert_eq!(classify(op), TokenType::Unknown, "{op:?}");
        }
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify(""), TokenType::Unknown);
    }

    #[test]
    fn test_token_type_display() {
        assert_eq!(TokenType::Punctuation.to_string(), "punctuation");
        assert_eq!(TokenType::Whitespace.as_str(), "whitespace");
    }
}
