//! Chordlab End-to-End Test Infrastructure
//!
//! This crate provides integration tests spanning the theory and
//! fretboard crates:
//!
//! - Grammar: chord symbol text -> Chord -> text, round trips and
//!   canonical shorthand
//! - Fretboard: tuning + chord + window -> FingeringSet, coverage and
//!   determinism
//! - Properties: proptest suites over random symbols, tunings, and
//!   windows
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p chordlab-tests
//! ```

pub mod harness;

// Re-export commonly used items
pub use harness::{chord, coverage_mask, required_mask, satisfies_coverage};
