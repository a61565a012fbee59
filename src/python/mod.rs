mod bindings;

use crate::core::{input::DEFAULT_MAX_INPUT_CHARS, DISPLAY_ID_OFFSET, MAX_MATCH_LEN};
pub use bindings::{PyToken, PyTokenStats, PyTokenizationResult, PyTokenizer};

use pyo3::prelude::*;

/// smarttok - greedy longest-match tokenizer with Python bindings
///
/// - Fixed seed vocabulary with append-only custom tokens
/// - Unknown-character fallback that decodes exactly
/// - Per-token type, offsets and running frequency
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTokenizer>()?;
    m.add_class::<PyToken>()?;
    m.add_class::<PyTokenStats>()?;
    m.add_class::<PyTokenizationResult>()?;
    m.add("MAX_MATCH_LEN", MAX_MATCH_LEN)?;
    m.add("DISPLAY_ID_OFFSET", DISPLAY_ID_OFFSET)?;
    m.add("DEFAULT_MAX_INPUT_CHARS", DEFAULT_MAX_INPUT_CHARS)?;
    Ok(())
}
