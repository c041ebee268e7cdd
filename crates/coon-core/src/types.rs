//! Strategy names and the compression result model.

use crate::error::CoonError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Named compression strategies.
///
/// Only `basic` has a distinct transform. `auto` is a deliberate default that
/// resolves to `basic` regardless of input. `aggressive`, `component_ref`,
/// and `template_ref` are declared names that run the `basic` pipeline while
/// tagging the result with the requested name — the fallback behavior of the
/// reference implementation, preserved here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Auto,
    Basic,
    Aggressive,
    ComponentRef,
    TemplateRef,
}

impl Strategy {
    /// Resolve `auto` to the concrete default; any other name keeps its tag.
    pub fn resolve(self) -> Strategy {
        match self {
            Strategy::Auto => Strategy::Basic,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Auto => "auto",
            Strategy::Basic => "basic",
            Strategy::Aggressive => "aggressive",
            Strategy::ComponentRef => "component_ref",
            Strategy::TemplateRef => "template_ref",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = CoonError;

    /// Parse a strategy name. Unknown names fail with
    /// [`CoonError::UnsupportedStrategy`] rather than silently defaulting.
    fn from_str(s: &str) -> Result<Self, CoonError> {
        match s {
            "auto" => Ok(Strategy::Auto),
            "basic" => Ok(Strategy::Basic),
            "aggressive" => Ok(Strategy::Aggressive),
            "component_ref" => Ok(Strategy::ComponentRef),
            "template_ref" => Ok(Strategy::TemplateRef),
            other => Err(CoonError::UnsupportedStrategy(other.to_string())),
        }
    }
}

/// Result of one compression call. Created per call, owned by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionResult {
    /// The COON text.
    pub compressed: String,
    /// Token estimate of the input (see [`crate::estimate_tokens`]).
    pub original_tokens: usize,
    /// Token estimate of `compressed`.
    pub compressed_tokens: usize,
    /// `1 - compressed/original`. Defined as `0.0` when the input estimated
    /// to zero tokens, so empty input never divides by zero.
    pub ratio: f64,
    /// The strategy tag, with `auto` already resolved.
    pub strategy_used: Strategy,
}

impl CompressionResult {
    /// Estimated tokens saved; 0 for empty input.
    pub fn token_savings(&self) -> usize {
        self.original_tokens.saturating_sub(self.compressed_tokens)
    }

    /// `ratio` expressed as a percentage.
    pub fn percentage_saved(&self) -> f64 {
        self.ratio * 100.0
    }
}
