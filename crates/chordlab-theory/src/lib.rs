//! Chordlab Theory Core
//!
//! This crate provides the pitch arithmetic and chord model shared by the
//! rest of the workspace. Pitch classes live on the circle of fifths, so
//! transposition and enharmonic respelling are integer arithmetic, and a
//! chord is an immutable value: a root, a bass, and six interval slots
//! built by value composition rather than mutation.
//!
//! # Example
//!
//! ```
//! use chordlab_theory::{Chord, Interval, Slot};
//!
//! let chord = Chord::parse("C9").unwrap();
//! assert_eq!(chord.slot(Slot::Ninth), Interval::Ninth);
//! // A ninth in the base implies the dominant seventh.
//! assert_eq!(chord.slot(Slot::Seventh), Interval::Seventh);
//! assert_eq!(chord.offsets(), vec![0, 4, 7, 10, 14]);
//! assert_eq!(chord.symbol(), "C9");
//! ```
//!
//! # Modules
//!
//! - [`pitch`]: Circle-of-fifths arithmetic on raw indices
//! - [`note`]: Spelled pitch classes ([`NoteClass`])
//! - [`key`]: Keys with optional major/minor quality
//! - [`chord`]: The chord model and the chord-symbol grammar
//! - [`error`]: Error types for parsing and tone lookup

pub mod chord;
pub mod error;
pub mod key;
pub mod note;
pub mod pitch;

// Re-export commonly used types at the crate root
pub use chord::{Chord, Interval, Slot};
pub use error::{ChordSyntaxError, ToneIndexError};
pub use key::{Key, KeyQuality};
pub use note::NoteClass;
