//! # coon-core
//!
//! Pure-Rust compressor and decompressor for **COON (Code-Oriented Object
//! Notation)** — a compact textual form of Dart/Flutter widget code designed
//! to reduce LLM token consumption when source is sent to a language model.
//!
//! Compression is an ordered pipeline of global text rewrites (whitespace
//! normalization, structural markers such as `c:Name<Base>`, widget and
//! property abbreviations, semicolon elision). Decompression applies the
//! mirrored rewrites in reverse order and is a best-effort reconstruction,
//! not an exact inverse: shared abbreviation tokens and the line-local
//! semicolon heuristic make the round trip approximate by design.
//!
//! ## Quick start
//!
//! ```rust
//! use coon_core::{compress, decompress, Strategy};
//!
//! let result = compress("Scaffold(body: Text('Hi'))", Strategy::Auto);
//! assert_eq!(result.compressed, "Scf(bd: Txt('Hi'))");
//!
//! let back = decompress(&result.compressed);
//! assert_eq!(back, "Scaffold(body: Text('Hi'));");
//! ```
//!
//! ## Modules
//!
//! - [`compressor`] — Dart/Flutter source → COON (the ordered rule pipeline)
//! - [`decompressor`] — COON → approximate Dart source (rules in reverse)
//! - [`tables`] — static abbreviation tables (keyword / widget / property)
//! - [`estimator`] — char-count token heuristic used for reported statistics
//! - [`types`] — `Strategy` names and the `CompressionResult` model
//! - [`error`] — error types (unknown strategy names)

pub mod compressor;
pub mod decompressor;
pub mod error;
pub mod estimator;
mod rules;
pub mod tables;
pub mod types;

pub use compressor::{compress, compress_named};
pub use decompressor::decompress;
pub use error::CoonError;
pub use estimator::estimate_tokens;
pub use types::{CompressionResult, Strategy};
