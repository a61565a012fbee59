//! Integration tests for front-end input handling: id-sequence parsing and
//! text length limits feeding into the tokenizer.

use smarttok::input::{check_text_length, parse_token_ids, DEFAULT_MAX_INPUT_CHARS};
use smarttok::{Tokenizer, TokenizerError};

/// Test that a JSON array and a comma list decode identically.
#[test]
fn test_parse_formats_agree() {
    let tokenizer = Tokenizer::new();

    let from_json = parse_token_ids("[0, 74, 1, 48]").unwrap();
    let from_csv = parse_token_ids("0, 74, 1, 48").unwrap();

    assert_eq!(from_json, from_csv);
    assert_eq!(tokenizer.decode(&from_json), "Hello world!");
}

/// Test the sample id list decodes through the unknown-character path.
#[test]
fn test_decode_sample_ids() {
    let tokenizer = Tokenizer::new();
    let size = tokenizer.vocab_size() as u32;

    // Raw code points are not decode ids: 72 is the seed entry "8".
    let ids = parse_token_ids("[72, 101, 108, 108, 111]").unwrap();
    let decoded = tokenizer.decode(&ids);
    assert_ne!(decoded, "Hello");

    let shifted: Vec<u32> = ids.iter().map(|id| id + size).collect();
    assert_eq!(tokenizer.decode(&shifted), "Hello");
}

/// Test a tokenize → format → parse → decode cycle.
#[test]
fn test_ids_survive_text_round_trip() {
    let tokenizer = Tokenizer::new();
    let text = "Coffee: 199 INR!";
    let result = tokenizer.tokenize(text);

    let formatted = format!("{:?}", result.token_ids);
    let parsed = parse_token_ids(&formatted).unwrap();

    assert_eq!(parsed, result.token_ids);
    assert_eq!(tokenizer.decode(&parsed), text);
}

/// Test invalid id input is reported, not silently dropped.
#[test]
fn test_invalid_ids_rejected() {
    assert!(matches!(
        parse_token_ids("1, two, 3"),
        Err(TokenizerError::InvalidDecodeInput(_))
    ));
    assert!(matches!(
        parse_token_ids("[1, -2]"),
        Err(TokenizerError::InvalidDecodeInput(_))
    ));
    assert_eq!(parse_token_ids(""), Err(TokenizerError::EmptyTokenIds));
}

/// Test the default text length limit.
#[test]
fn test_default_length_limit() {
    let at_limit = "a".repeat(DEFAULT_MAX_INPUT_CHARS);
    let over_limit = "a".repeat(DEFAULT_MAX_INPUT_CHARS + 1);

    assert!(check_text_length(&at_limit, DEFAULT_MAX_INPUT_CHARS).is_ok());
    assert_eq!(
        check_text_length(&over_limit, DEFAULT_MAX_INPUT_CHARS),
        Err(TokenizerError::InputTooLong {
            len: DEFAULT_MAX_INPUT_CHARS + 1,
            max: DEFAULT_MAX_INPUT_CHARS,
        })
    );

    let tokenizer = Tokenizer::new();
    let result = tokenizer.tokenize(&at_limit);
    assert_eq!(result.tokens.len(), DEFAULT_MAX_INPUT_CHARS);
}
