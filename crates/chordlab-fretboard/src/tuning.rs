//! Instrument tunings.
//!
//! A [`Tuning`] holds the open-string pitch classes of a fretted
//! instrument, first (highest-pitched) string first, plus the preset it
//! was built from so single-string retunes can be undone. Retune requests
//! for a string index the instrument does not have are ignored.

use serde::{Deserialize, Serialize};

use chordlab_theory::NoteClass;

use crate::error::TuningError;

/// Open-string pitch classes of a fretted instrument.
///
/// The wire form is the open-string list alone; decoding runs through
/// [`Tuning::new`], so `open` and the preset always have one entry per
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<NoteClass>", into = "Vec<NoteClass>")]
pub struct Tuning {
    open: Vec<NoteClass>,
    preset: Vec<NoteClass>,
}

impl From<Vec<NoteClass>> for Tuning {
    fn from(open: Vec<NoteClass>) -> Self {
        Self::new(open)
    }
}

impl From<Tuning> for Vec<NoteClass> {
    fn from(tuning: Tuning) -> Self {
        tuning.open
    }
}

impl Tuning {
    /// A tuning with the given open strings, first string first.
    pub fn new(open: Vec<NoteClass>) -> Self {
        Self {
            preset: open.clone(),
            open,
        }
    }

    /// Parse a tuning from note names, e.g. `["E", "B", "G", "D", "A", "E"]`.
    pub fn from_names(names: &[&str]) -> Result<Self, TuningError> {
        let open = names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                NoteClass::parse(name).map_err(|source| TuningError::InvalidNote { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(open))
    }

    /// Standard ukulele tuning: A, E, C, G (re-entrant fourth string).
    pub fn ukulele() -> Self {
        Self::new(vec![
            NoteClass::from_co5(3), // A
            NoteClass::from_co5(4), // E
            NoteClass::from_co5(0), // C
            NoteClass::from_co5(1), // G
        ])
    }

    /// Standard guitar tuning: E, B, G, D, A, E.
    pub fn guitar() -> Self {
        Self::new(vec![
            NoteClass::from_co5(4), // E
            NoteClass::from_co5(5), // B
            NoteClass::from_co5(1), // G
            NoteClass::from_co5(2), // D
            NoteClass::from_co5(3), // A
            NoteClass::from_co5(4), // E
        ])
    }

    /// Number of strings.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// The open pitch class of one string, `None` past the last string.
    pub fn open_note(&self, string: usize) -> Option<NoteClass> {
        self.open.get(string).copied()
    }

    /// All open pitch classes, first string first.
    pub fn open_notes(&self) -> &[NoteClass] {
        &self.open
    }

    /// Retune one string by a semitone offset. Out-of-range string
    /// indices are ignored.
    pub fn transpose_string(&mut self, string: usize, semitones: i32) {
        if let Some(note) = self.open.get_mut(string) {
            *note = note.transpose(semitones);
        }
    }

    /// Put one string back on its preset pitch.
    pub fn reset_string(&mut self, string: usize) {
        if let (Some(note), Some(preset)) = (self.open.get_mut(string), self.preset.get(string)) {
            *note = *preset;
        }
    }

    /// Put every string back on its preset pitch.
    pub fn reset_all(&mut self) {
        self.open.clone_from(&self.preset);
    }
}
