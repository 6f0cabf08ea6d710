//! Shared helpers for the integration tests.

use chordlab_fretboard::Fingering;
use chordlab_theory::{Chord, Interval, Slot};

/// Parse a chord symbol, panicking with the offending symbol on failure.
pub fn chord(symbol: &str) -> Chord {
    match Chord::parse(symbol) {
        Ok(chord) => chord,
        Err(err) => panic!("'{}' did not parse: {}", symbol, err),
    }
}

/// Tone-coverage bitmask of one fingering (bit i = tone index i sounded).
pub fn coverage_mask(fingering: &Fingering) -> u32 {
    fingering
        .sounding()
        .fold(0, |mask, (_, _, tone)| mask | 1 << tone)
}

/// Mask requiring every tone of a chord.
pub fn required_mask(chord: &Chord) -> u32 {
    (1u32 << chord.tone_count()) - 1
}

/// Independent statement of the coverage rule a valid fingering must
/// satisfy: full coverage, or the fifth dropped when the chord carries a
/// dominant seventh or has five tones, or the root dropped for a
/// five-tone chord while the third or fifth still sounds.
pub fn satisfies_coverage(chord: &Chord, mask: u32) -> bool {
    let required = required_mask(chord);
    let root_omittable = chord.tone_count() == 5;
    let fifth_omittable = chord.slot(Slot::Seventh) == Interval::Seventh || root_omittable;
    let fifth_bit = chord
        .tones()
        .iter()
        .position(|t| t.slot() == Some(Slot::Fifth))
        .map_or(0, |i| 1u32 << i);

    mask == required
        || (fifth_omittable && fifth_bit != 0 && mask == required & !fifth_bit)
        || (root_omittable && {
            let rest = required & !(1 | fifth_bit);
            mask & rest == rest && mask & (1 | fifth_bit) != 0
        })
}
