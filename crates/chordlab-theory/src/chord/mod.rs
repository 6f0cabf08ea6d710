//! Immutable chord values and the chord-symbol grammar.
//!
//! A [`Chord`] is a root, a bass, and six interval slots (third, fifth,
//! seventh, ninth, eleventh, thirteenth). Variant chords are built by value
//! composition ([`Chord::with`], [`Chord::without`], [`Chord::over`]) rather
//! than mutation, so a chord handed out to a caller never changes under it.
//!
//! The textual grammar lives in `parse` (symbol to chord) and the
//! formatters in `symbol` (chord to symbol text / English name); together
//! they form the sole wire format the theory core exposes.

mod interval;
mod parse;
mod symbol;

#[cfg(test)]
mod tests;

pub use interval::{Interval, Slot};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChordSyntaxError, ToneIndexError};
use crate::note::NoteClass;

/// An immutable chord: root, bass, and six interval slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    root: NoteClass,
    bass: NoteClass,
    slots: [Interval; 6],
}

impl Chord {
    /// Major triad on `root` (bass = root).
    pub fn major(root: NoteClass) -> Self {
        let mut slots = [Interval::Root; 6];
        slots[Slot::Third.index()] = Interval::Major3;
        slots[Slot::Fifth.index()] = Interval::Perfect5;
        Self {
            root,
            bass: root,
            slots,
        }
    }

    /// Parse a chord symbol. See the `parse` module for the grammar.
    pub fn parse(text: &str) -> Result<Self, ChordSyntaxError> {
        parse::parse_symbol(text)
    }

    pub fn root(&self) -> NoteClass {
        self.root
    }

    pub fn bass(&self) -> NoteClass {
        self.bass
    }

    /// The offset occupying `slot` (`Interval::Root` when the slot is empty).
    pub fn slot(&self, slot: Slot) -> Interval {
        self.slots[slot.index()]
    }

    /// New chord with `interval` placed in its slot. `Root` is a no-op;
    /// use [`Chord::without`] to clear a slot.
    pub fn with(&self, interval: Interval) -> Chord {
        let mut next = *self;
        if let Some(slot) = interval.slot() {
            next.slots[slot.index()] = interval;
        }
        next
    }

    /// New chord with `slot` cleared.
    pub fn without(&self, slot: Slot) -> Chord {
        let mut next = *self;
        next.slots[slot.index()] = Interval::Root;
        next
    }

    /// New chord over a different bass note (slash chord).
    pub fn over(&self, bass: NoteClass) -> Chord {
        Chord { bass, ..*self }
    }

    /// Chord tones in slot order, root first. The position of a tone in
    /// this list is its tone index, used by the fingering search and the
    /// color-mapping read interface.
    pub fn tones(&self) -> Vec<Interval> {
        let mut tones = Vec::with_capacity(1 + self.slots.len());
        tones.push(Interval::Root);
        tones.extend(self.slots.iter().copied().filter(|i| *i != Interval::Root));
        tones
    }

    /// Number of distinct chord tones (root included).
    pub fn tone_count(&self) -> usize {
        1 + self.slots.iter().filter(|i| **i != Interval::Root).count()
    }

    /// The tone at `index` in the tone list.
    pub fn tone(&self, index: usize) -> Result<Interval, ToneIndexError> {
        let tones = self.tones();
        tones.get(index).copied().ok_or(ToneIndexError {
            index,
            count: tones.len(),
        })
    }

    /// Relative semitone offsets of the chord tones, e.g. `{0, 4, 7}` for a
    /// major triad.
    pub fn offsets(&self) -> Vec<u8> {
        self.tones().iter().map(|t| t.semitones()).collect()
    }

    /// The chord tones as note classes, transposed from the root.
    pub fn notes(&self) -> Vec<NoteClass> {
        self.tones()
            .iter()
            .map(|t| self.root.transpose(t.semitones() as i32))
            .collect()
    }

    /// Equality up to spelling: root and bass compared as semitone classes,
    /// slots compared exactly (they are already spelling-free offsets).
    pub fn enharmonic_eq(&self, other: &Chord) -> bool {
        self.root.enharmonic_eq(&other.root)
            && self.bass.enharmonic_eq(&other.bass)
            && self.slots == other.slots
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol())
    }
}

impl FromStr for Chord {
    type Err = ChordSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
