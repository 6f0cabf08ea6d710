//! Error types for the theory crate.

use thiserror::Error;

/// Errors raised while parsing a chord symbol or note name.
///
/// The grammar is deliberately lenient: malformed suffix fragments degrade
/// to defaults so that partially typed symbols stay usable. Only the two
/// cases below are reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordSyntaxError {
    /// The input was empty (or whitespace only).
    #[error("chord symbol is empty")]
    Empty,
    /// The input does not start with a root letter A-G.
    #[error("no root letter (A-G) at the start of '{text}'")]
    NoRootLetter { text: String },
}

/// A tone index outside the chord's computed tone count was requested.
///
/// This indicates a caller bug (the read interface hands out indices in
/// `0..tone_count`), not a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tone index {index} out of range (chord has {count} tones)")]
pub struct ToneIndexError {
    pub index: usize,
    pub count: usize,
}
