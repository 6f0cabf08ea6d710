//! Chordlab Fretboard Engine
//!
//! This crate turns a chord, an instrument tuning, and a fret window into
//! every playable fingering, exhaustively and deterministically. The model
//! is immutable-by-replacement: any input change is answered by re-running
//! the search for a brand-new [`FingeringSet`], never by mutating one in
//! place, so concurrent readers never observe a partial result.
//!
//! # Example
//!
//! ```
//! use chordlab_fretboard::{enumerate_fingerings, FretWindow, Tuning, VariationIndex};
//! use chordlab_theory::Chord;
//!
//! let chord = Chord::parse("C").unwrap();
//! let set = enumerate_fingerings(Some(&chord), &Tuning::ukulele(), FretWindow::default());
//!
//! let mut index = VariationIndex::default();
//! index.reset(&set);
//! assert_eq!(index.describe(), "7 variations found");
//! ```
//!
//! # Modules
//!
//! - [`tuning`]: Instrument tunings and per-string retuning
//! - [`search`]: The exhaustive fingering search
//! - [`variation`]: A selection cursor over a fingering set
//! - [`error`]: Error types for tuning descriptions

pub mod error;
pub mod search;
pub mod tuning;
pub mod variation;

// Re-export commonly used types at the crate root
pub use error::TuningError;
pub use search::{
    enumerate_fingerings, Fingering, FingeringSet, FretWindow, StringPress, MAX_FRET, MAX_WINDOW,
};
pub use tuning::Tuning;
pub use variation::VariationIndex;
