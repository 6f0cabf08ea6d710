//! Error types for the fretboard crate.

use thiserror::Error;

use chordlab_theory::ChordSyntaxError;

/// A tuning description contained a string that is not a note name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TuningError {
    #[error("string {index}: {source}")]
    InvalidNote {
        index: usize,
        #[source]
        source: ChordSyntaxError,
    },
}
