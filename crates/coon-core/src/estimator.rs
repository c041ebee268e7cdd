//! Token estimation — a coarse character-count heuristic.
//!
//! Roughly four characters per model token. This is a reporting proxy, not a
//! real tokenizer; it feeds the statistics on [`crate::CompressionResult`]
//! and is never consulted for correctness decisions.

/// Estimate the LLM token count of `text` as `char_count / 4` (floor).
///
/// `estimate_tokens("")` is 0.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4
}
