//! Built-in seed vocabulary.
//!
//! Ids are assigned by position, so the order of [`COMMON_TOKENS`] is part of
//! the public contract: `"Hello"` is always id 0, `":"` is id 46, the digit
//! `"0"` is id 64 and so on. Appending is fine; reordering breaks every id
//! sequence produced by an earlier build.
//!
//! # Groups
//!
//! - Common English words (ids 0-45)
//! - Punctuation and operator marks (ids 46-63)
//! - ASCII digits (ids 64-73)
//! - Whitespace: space, newline, tab (ids 74-76)
//! - Multi-character patterns (ids 77-79)

/// Ordered seed list used by [`Tokenizer::new`](super::Tokenizer::new).
pub const COMMON_TOKENS: &[&str] = &[
    // Common words
    "Hello", "world", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "Let", "tokenize", "this", "text", "a", "an", "is", "are", "was", "were", "be", "been", "have",
    "has", "had", "do", "does", "did", "will", "would", "could", "should", "can", "may", "might",
    "must", "shall", "ought", "Chai", "Coffee", "Price", "INR",
    // Punctuation
    ":", ".", "!", "?", ",", ";", "(", ")", "[", "]", "{", "}", "\"", "'", "-", "_", "+", "=",
    // Numbers
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    // Whitespace
    " ", "\n", "\t",
    // Common patterns
    "'s", "199", "99",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_seed_has_no_duplicates() {
        let unique: FxHashSet<&str> = COMMON_TOKENS.iter().copied().collect();
        assert_eq!(unique.len(), COMMON_TOKENS.len());
    }

    #[test]
    fn test_group_boundaries() {
        assert_eq!(COMMON_TOKENS[0], "Hello");
        assert_eq!(COMMON_TOKENS[46], ":");
        assert_eq!(COMMON_TOKENS[64], "0");
        assert_eq!(COMMON_TOKENS[74], " ");
        assert_eq!(COMMON_TOKENS[79], "99");
    }

    const _: () = {
        assert!(COMMON_TOKENS.len() == 80);
    };
}
