//! Python bindings for the smarttok tokenizer.
//!
//! Thin PyO3 wrappers around [`Tokenizer`]. Results are copied into plain
//! Python objects so they stay valid after later calls mutate frequencies.
//!
//! # Example
//!
//! ```python
//! from smarttok import Tokenizer
//!
//! tokenizer = Tokenizer()
//! result = tokenizer.tokenize("Hello world!")
//! for token in result.tokens:
//!     print(token.text, token.type, token.start, token.end)
//!
//! text = tokenizer.decode(result.token_ids)
//! ids = Tokenizer.parse_token_ids("[72, 101, 108, 108, 111]")
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::input::{check_text_length, parse_token_ids, DEFAULT_MAX_INPUT_CHARS};
use crate::core::{
    Token, TokenStats, TokenizationResult, Tokenizer, TokenizerError, COMMON_TOKENS,
    MAX_MATCH_LEN,
};

fn to_py_err(e: TokenizerError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// One token occurrence.
#[pyclass(name = "Token", frozen)]
#[derive(Clone)]
pub struct PyToken {
    #[pyo3(get)]
    text: String,
    #[pyo3(get)]
    id: u32,
    #[pyo3(get)]
    start: usize,
    #[pyo3(get)]
    end: usize,
    #[pyo3(get, name = "type")]
    token_type: String,
    #[pyo3(get)]
    frequency: u64,
    #[pyo3(get)]
    display_text: String,
}

impl From<&Token> for PyToken {
    fn from(token: &Token) -> Self {
        Self {
            text: token.text.clone(),
            id: token.id,
            start: token.start,
            end: token.end,
            token_type: token.token_type.to_string(),
            frequency: token.frequency,
            display_text: token.display_text().to_string(),
        }
    }
}

#[pymethods]
impl PyToken {
    fn __repr__(&self) -> String {
        format!(
            "Token(text={:?}, type={}, start={}, end={})",
            self.text, self.token_type, self.start, self.end
        )
    }
}

/// Aggregate counts for one tokenization.
#[pyclass(name = "TokenStats", frozen)]
#[derive(Clone)]
pub struct PyTokenStats {
    #[pyo3(get)]
    total_tokens: usize,
    #[pyo3(get)]
    unique_tokens: usize,
    #[pyo3(get)]
    word_tokens: usize,
    #[pyo3(get)]
    number_tokens: usize,
    #[pyo3(get)]
    punctuation_tokens: usize,
    #[pyo3(get)]
    whitespace_tokens: usize,
    #[pyo3(get)]
    unknown_tokens: usize,
}

impl From<&TokenStats> for PyTokenStats {
    fn from(stats: &TokenStats) -> Self {
        Self {
            total_tokens: stats.total_tokens,
            unique_tokens: stats.unique_tokens,
            word_tokens: stats.word_tokens,
            number_tokens: stats.number_tokens,
            punctuation_tokens: stats.punctuation_tokens,
            whitespace_tokens: stats.whitespace_tokens,
            unknown_tokens: stats.unknown_tokens,
        }
    }
}

/// Output of `Tokenizer.tokenize`.
#[pyclass(name = "TokenizationResult", frozen)]
pub struct PyTokenizationResult {
    #[pyo3(get)]
    tokens: Vec<PyToken>,
    #[pyo3(get)]
    token_ids: Vec<u32>,
    #[pyo3(get)]
    vocab_size: usize,
    #[pyo3(get)]
    stats: PyTokenStats,
}

impl From<TokenizationResult> for PyTokenizationResult {
    fn from(result: TokenizationResult) -> Self {
        Self {
            tokens: result.tokens.iter().map(PyToken::from).collect(),
            token_ids: result.token_ids,
            vocab_size: result.vocab_size,
            stats: PyTokenStats::from(&result.stats),
        }
    }
}

/// Python wrapper for the Rust Tokenizer.
#[pyclass(name = "Tokenizer")]
pub struct PyTokenizer {
    inner: Tokenizer,
}

#[pymethods]
impl PyTokenizer {
    /// Create a tokenizer.
    ///
    /// Args:
    ///     seed: Optional ordered list of seed tokens (defaults to the built-in list)
    ///     max_match_len: Longest candidate tried per position, in characters
    ///
    /// Raises:
    ///     ValueError: If the seed list is empty or has duplicates
    #[new]
    #[pyo3(signature = (seed=None, max_match_len=MAX_MATCH_LEN))]
    fn new(seed: Option<Vec<String>>, max_match_len: usize) -> PyResult<Self> {
        let inner = match seed {
            Some(seed) => Tokenizer::with_options(seed.as_slice(), max_match_len),
            None => Tokenizer::with_options(COMMON_TOKENS, max_match_len),
        }
        .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Split text into tokens.
    ///
    /// Args:
    ///     text: Input text
    ///
    /// Returns:
    ///     TokenizationResult with tokens, decode ids, vocab size and stats
    fn tokenize(&self, text: &str) -> PyTokenizationResult {
        self.inner.tokenize(text).into()
    }

    /// Tokenize text after enforcing a character limit.
    ///
    /// Raises:
    ///     ValueError: If text is longer than max_chars
    #[pyo3(signature = (text, max_chars=DEFAULT_MAX_INPUT_CHARS))]
    fn tokenize_checked(&self, text: &str, max_chars: usize) -> PyResult<PyTokenizationResult> {
        check_text_length(text, max_chars).map_err(to_py_err)?;
        Ok(self.inner.tokenize(text).into())
    }

    /// Decode ids back to text.
    ///
    /// Args:
    ///     token_ids: List of decode ids (not display ids)
    ///
    /// Returns:
    ///     Decoded string
    fn decode(&self, token_ids: Vec<u32>) -> String {
        self.inner.decode(&token_ids)
    }

    /// Parse a "[1, 2]" or "1, 2" string and decode it.
    ///
    /// Raises:
    ///     ValueError: If the input is blank or has a non-integer entry
    fn decode_str(&self, input: &str) -> PyResult<String> {
        let ids = parse_token_ids(input).map_err(to_py_err)?;
        Ok(self.inner.decode(&ids))
    }

    /// Batch decode multiple id lists in parallel.
    fn decode_batch(&self, id_lists: Vec<Vec<u32>>) -> Vec<String> {
        self.inner.decode_batch(&id_lists)
    }

    /// Register a custom vocabulary entry.
    ///
    /// Returns:
    ///     The id of the entry (existing id if already registered)
    fn add_custom_token(&self, text: &str) -> PyResult<u32> {
        self.inner.add_custom_token(text).map_err(to_py_err)
    }

    /// Usage count of a vocabulary entry across all calls.
    fn frequency(&self, text: &str) -> u64 {
        self.inner.frequency(text)
    }

    /// Get the vocabulary size.
    #[getter]
    fn vocab_size(&self) -> usize {
        self.inner.vocab_size()
    }

    /// Parse an id sequence from a JSON array or comma-separated string.
    #[staticmethod]
    fn parse_token_ids(input: &str) -> PyResult<Vec<u32>> {
        parse_token_ids(input).map_err(to_py_err)
    }
}
