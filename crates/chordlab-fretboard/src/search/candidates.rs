//! Per-string candidate presses.

use chordlab_theory::{Interval, NoteClass};

use super::{FretWindow, StringPress};

/// Every press worth trying on one string: the mute first, then each fret
/// in the window whose sounded pitch class matches a chord tone.
///
/// Tone tagging takes the first match in the tone list. The root is listed
/// first, so a fret sounding the root's pitch class is always tagged as
/// the root, never as an extension an octave up.
pub(super) fn string_candidates(
    open: NoteClass,
    root: NoteClass,
    tones: &[Interval],
    window: FretWindow,
) -> Vec<StringPress> {
    let mut presses = vec![StringPress::Muted];
    for fret in window.frets() {
        let sounded =
            (open.semitone() as i32 + fret as i32 - root.semitone() as i32).rem_euclid(12);
        let tone = tones
            .iter()
            .position(|t| (t.semitones() % 12) as i32 == sounded);
        if let Some(tone) = tone {
            presses.push(StringPress::Fretted { fret, tone });
        }
    }
    presses
}
