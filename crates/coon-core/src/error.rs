//! Error types for COON compression operations.

use thiserror::Error;

/// Errors that can occur when driving the COON pipelines.
///
/// Note what is deliberately *not* an error: malformed or partial structural
/// patterns (e.g. a class declaration without its opening brace) simply fail
/// to match their rule and pass through unchanged, and decompression never
/// fails for arbitrary input.
#[derive(Error, Debug)]
pub enum CoonError {
    /// A strategy name outside the known set was requested.
    #[error("unsupported strategy '{0}' (known: auto, basic, aggressive, component_ref, template_ref)")]
    UnsupportedStrategy(String),
}

/// Convenience alias used throughout coon-core.
pub type Result<T> = std::result::Result<T, CoonError>;
