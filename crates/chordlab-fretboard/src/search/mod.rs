//! Exhaustive chord-fingering search.
//!
//! The search is a pure function over `(chord, tuning, fret window)`. It
//! builds one candidate list per string (mute, plus every fret in the
//! window that sounds a chord tone), walks the full Cartesian product of
//! those lists with an explicit odometer (last string fastest), and keeps
//! the assignments whose tone coverage satisfies the omission rules:
//!
//! - every chord tone sounded, or
//! - the fifth omitted, when the chord carries a dominant seventh or has
//!   five tones, or
//! - the root omitted, only for five-tone chords and only while the third
//!   or the fifth still sounds.
//!
//! The candidate lists are captured immutably before the walk, so the
//! result is deterministic: two runs over equal inputs produce the same
//! fingerings in the same order.

mod candidates;


use serde::{Deserialize, Serialize};

use chordlab_theory::{Chord, Interval, Slot};

use crate::tuning::Tuning;

use candidates::string_candidates;

/// Highest fret the search will ever probe.
pub const MAX_FRET: u8 = 20;
/// Widest fret window a caller may request.
pub const MAX_WINDOW: u8 = 16;

/// A scrollable fret range: `length` playable frets starting at `start`.
///
/// The open string (fret 0) is always probed in addition to the window.
/// Deserialization runs through [`FretWindow::new`], so a decoded window
/// is clamped like a constructed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawWindow")]
pub struct FretWindow {
    start: u8,
    length: u8,
}

#[derive(Deserialize)]
struct RawWindow {
    start: u8,
    length: u8,
}

impl From<RawWindow> for FretWindow {
    fn from(raw: RawWindow) -> Self {
        Self::new(raw.start, raw.length)
    }
}

impl FretWindow {
    /// A window clamped to the playable fretboard: `length` in
    /// `1..=MAX_WINDOW`, `start + length` at most [`MAX_FRET`].
    pub fn new(start: u8, length: u8) -> Self {
        let length = length.clamp(1, MAX_WINDOW);
        let start = start.min(MAX_FRET - length);
        Self { start, length }
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    /// Frets probed on each string: the open string, then the window.
    pub fn frets(&self) -> impl Iterator<Item = u8> {
        std::iter::once(0).chain(self.start.max(1)..=self.start + self.length)
    }
}

impl Default for FretWindow {
    /// The open position: frets 0 through 4.
    fn default() -> Self {
        Self {
            start: 0,
            length: 4,
        }
    }
}

/// What one string does in a fingering: muted, or pressed at a fret
/// sounding the chord tone at `tone` (an index into the chord's tone list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringPress {
    Muted,
    Fretted { fret: u8, tone: usize },
}

impl StringPress {
    pub fn is_muted(self) -> bool {
        self == StringPress::Muted
    }

    pub fn fret(self) -> Option<u8> {
        match self {
            StringPress::Fretted { fret, .. } => Some(fret),
            StringPress::Muted => None,
        }
    }

    pub fn tone(self) -> Option<usize> {
        match self {
            StringPress::Fretted { tone, .. } => Some(tone),
            StringPress::Muted => None,
        }
    }
}

/// One press per string, first string first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingering {
    presses: Vec<StringPress>,
}

impl Fingering {
    pub fn presses(&self) -> &[StringPress] {
        &self.presses
    }

    pub fn press(&self, string: usize) -> Option<StringPress> {
        self.presses.get(string).copied()
    }

    /// The sounding strings as `(string, fret, tone index)` tuples.
    pub fn sounding(&self) -> impl Iterator<Item = (usize, u8, usize)> + '_ {
        self.presses
            .iter()
            .enumerate()
            .filter_map(|(string, press)| match *press {
                StringPress::Fretted { fret, tone } => Some((string, fret, tone)),
                StringPress::Muted => None,
            })
    }
}

/// Every valid fingering for one chord/tuning/window combination, in
/// discovery order, along with the chord's tone list (so a tone index on
/// a press can be mapped back to an interval).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FingeringSet {
    tones: Vec<Interval>,
    fingerings: Vec<Fingering>,
}

impl FingeringSet {
    /// The chord tones the presses' tone indices point into.
    pub fn tones(&self) -> &[Interval] {
        &self.tones
    }

    pub fn len(&self) -> usize {
        self.fingerings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerings.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Fingering> {
        self.fingerings.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fingering> {
        self.fingerings.iter()
    }
}

/// Enumerate every valid fingering for `chord` on `tuning` within `window`.
///
/// Total over its whole domain: no chord, an empty tuning, or a chord
/// unreachable within the window all yield an empty set, never an error.
///
/// # Examples
/// ```
/// use chordlab_fretboard::{enumerate_fingerings, FretWindow, Tuning};
/// use chordlab_theory::Chord;
///
/// let chord = Chord::parse("C").unwrap();
/// let set = enumerate_fingerings(Some(&chord), &Tuning::ukulele(), FretWindow::default());
/// assert!(!set.is_empty());
/// ```
pub fn enumerate_fingerings(
    chord: Option<&Chord>,
    tuning: &Tuning,
    window: FretWindow,
) -> FingeringSet {
    let Some(chord) = chord else {
        return FingeringSet::default();
    };
    if tuning.is_empty() {
        return FingeringSet::default();
    }

    let tones = chord.tones();
    let candidates: Vec<Vec<StringPress>> = tuning
        .open_notes()
        .iter()
        .map(|&open| string_candidates(open, chord.root(), &tones, window))
        .collect();

    let required = (1u32 << tones.len()) - 1;
    let root_omittable = tones.len() == 5;
    let fifth_omittable = chord.slot(Slot::Seventh) == Interval::Seventh || root_omittable;
    let fifth_bit = tones
        .iter()
        .position(|t| t.slot() == Some(Slot::Fifth))
        .map_or(0, |i| 1u32 << i);

    let accepted = |covered: u32| {
        covered == required
            || (fifth_omittable && fifth_bit != 0 && covered == required & !fifth_bit)
            || (root_omittable && {
                let rest = required & !(1 | fifth_bit);
                covered & rest == rest && covered & (1 | fifth_bit) != 0
            })
    };

    let mut fingerings = Vec::new();
    // Odometer over the candidate lists, last string fastest, so the
    // discovery order is stable across runs.
    let mut cursor = vec![0usize; candidates.len()];
    loop {
        let assignment = || {
            cursor
                .iter()
                .zip(&candidates)
                .map(|(&choice, string)| string[choice])
        };
        let covered = assignment().fold(0u32, |mask, press| match press {
            StringPress::Fretted { tone, .. } => mask | 1 << tone,
            StringPress::Muted => mask,
        });
        if accepted(covered) {
            fingerings.push(Fingering {
                presses: assignment().collect(),
            });
        }

        let mut string = candidates.len();
        loop {
            if string == 0 {
                return FingeringSet { tones, fingerings };
            }
            string -= 1;
            cursor[string] += 1;
            if cursor[string] < candidates[string].len() {
                break;
            }
            cursor[string] = 0;
        }
    }
}
