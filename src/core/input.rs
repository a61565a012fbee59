//! Helpers for the boundary between a front end and the tokenizer.
//!
//! The engine itself accepts any `&str` and any `&[u32]`. Front ends that
//! take raw user input use these to validate text length and to parse an id
//! sequence typed as either a JSON array or a comma-separated list.

use super::tokenizer::TokenizerError;

/// Character limit applied to text submitted for tokenization.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 10_000;

/// Reject text longer than `max` characters.
pub fn check_text_length(text: &str, max: usize) -> Result<(), TokenizerError> {
    let len = text.chars().count();
    if len > max {
        return Err(TokenizerError::InputTooLong { len, max });
    }
    Ok(())
}

/// Parse a user-supplied id sequence.
///
/// Accepts `[72, 101, 108]` or `72, 101, 108`. Every entry must be a
/// non-negative integer that fits in `u32`.
pub fn parse_token_ids(input: &str) -> Result<Vec<u32>, TokenizerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TokenizerError::EmptyTokenIds);
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str::<Vec<u32>>(trimmed)
            .map_err(|e| TokenizerError::InvalidDecodeInput(e.to_string()));
    }

    trimmed
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<u32>().map_err(|_| {
                TokenizerError::InvalidDecodeInput(format!("not a token id: {:?}", part))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_array() {
        assert_eq!(parse_token_ids("[72, 101, 108]").unwrap(), vec![72, 101, 108]);
        assert_eq!(parse_token_ids("  []  ").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_parse_comma_separated() {
        assert_eq!(parse_token_ids("72,101, 108 ").unwrap(), vec![72, 101, 108]);
        assert_eq!(parse_token_ids("5").unwrap(), vec![5]);
    }

    #[test]
    fn test_parse_rejects_bad_entries() {
        for input in ["1, x, 3", "1,,2", "-1", "1.5", "[1, \"a\"]", "[1, 2", "{\"a\": 1}"] {
            assert!(
                matches!(
                    parse_token_ids(input),
                    Err(TokenizerError::InvalidDecodeInput(_))
                ),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(parse_token_ids("4294967296").is_err());
        assert!(parse_token_ids("[4294967296]").is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_token_ids("   "), Err(TokenizerError::EmptyTokenIds));
    }

    #[test]
    fn test_check_text_length() {
        assert!(check_text_length("hello", 5).is_ok());
        assert_eq!(
            check_text_length("hello!", 5),
            Err(TokenizerError::InputTooLong { len: 6, max: 5 })
        );
        // Characters, not bytes.
        assert!(check_text_length("€€€", 3).is_ok());
    }
}
