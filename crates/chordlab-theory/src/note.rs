//! Pitch classes that remember their spelling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChordSyntaxError;
use crate::pitch::{mod12, reverse_co5, transpose_co5};

/// Letters of the natural notes in circle-of-fifths order, F (-1) to B (5).
const LETTERS: [char; 7] = ['F', 'C', 'G', 'D', 'A', 'E', 'B'];

/// A pitch class identified by its circle-of-fifths index.
///
/// The index preserves spelling: C# (co5 7) and Db (co5 -5) are distinct
/// values with the same semitone class. `PartialEq` distinguishes spellings;
/// use [`NoteClass::enharmonic_eq`] to compare by sound alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteClass {
    co5: i32,
}

impl NoteClass {
    /// Note class at a raw circle-of-fifths index.
    pub fn from_co5(co5: i32) -> Self {
        Self { co5 }
    }

    /// The circle-of-fifths index, unbounded.
    pub fn co5(&self) -> i32 {
        self.co5
    }

    /// Semitone pitch class in `0..=11` (C = 0).
    pub fn semitone(&self) -> u8 {
        mod12(reverse_co5(self.co5)) as u8
    }

    /// Whether `self` and `other` sound the same even if spelled differently.
    pub fn enharmonic_eq(&self, other: &NoteClass) -> bool {
        self.semitone() == other.semitone()
    }

    /// The other common spelling of this pitch class (C# <-> Db).
    pub fn toggle_enharmonic(&self) -> NoteClass {
        if self.co5 > 0 {
            Self { co5: self.co5 - 12 }
        } else {
            Self { co5: self.co5 + 12 }
        }
    }

    /// Transpose by `semitones`, respelled into the normalized range `-5..=6`.
    pub fn transpose(&self, semitones: i32) -> NoteClass {
        Self {
            co5: transpose_co5(self.co5, semitones),
        }
    }

    /// Parse a note name: a letter A-G (either case) followed by any number
    /// of accidentals (`#`, `b`, `x`).
    pub fn parse(text: &str) -> Result<NoteClass, ChordSyntaxError> {
        Self::parse_prefix(text).map(|(note, _)| note)
    }

    /// Parse a note-name prefix, returning the note and the unconsumed rest
    /// of the input. The accidental scan is greedy and stops at the first
    /// character that is not `#`, `b`, or `x`.
    pub(crate) fn parse_prefix(text: &str) -> Result<(NoteClass, &str), ChordSyntaxError> {
        let trimmed = text.trim();
        let mut chars = trimmed.char_indices();
        let Some((_, letter)) = chars.next() else {
            return Err(ChordSyntaxError::Empty);
        };
        let mut co5 = match letter.to_ascii_uppercase() {
            'F' => -1,
            'C' => 0,
            'G' => 1,
            'D' => 2,
            'A' => 3,
            'E' => 4,
            'B' => 5,
            _ => {
                return Err(ChordSyntaxError::NoRootLetter {
                    text: trimmed.to_string(),
                })
            }
        };
        let mut end = letter.len_utf8();
        for (i, c) in chars {
            match c {
                '#' => co5 += 7,
                'b' => co5 -= 7,
                'x' => co5 += 14,
                _ => return Ok((Self { co5 }, &trimmed[i..])),
            }
            end = i + c.len_utf8();
        }
        Ok((Self { co5 }, &trimmed[end..]))
    }

    /// Textual name: letter plus repeated accidentals (`F#`, `Bb`, `C##`).
    pub fn name(&self) -> String {
        let accidentals = (self.co5 + 1).div_euclid(7);
        let letter = LETTERS[(self.co5 - 7 * accidentals + 1) as usize];
        let mut name = String::new();
        name.push(letter);
        for _ in 0..accidentals.abs() {
            name.push(if accidentals > 0 { '#' } else { 'b' });
        }
        name
    }
}

impl fmt::Display for NoteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for NoteClass {
    type Err = ChordSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
