//! Chord-symbol parsing.
//!
//! The grammar, in precedence order:
//!
//! 1. Split on `/` or the literal token `on` into symbol and bass; each
//!    side starts with a root letter A-G (either case) plus accidentals
//!    (`#`, `b`, `x`, repeated).
//! 2. Split the remaining suffix on parentheses into a base part and a
//!    comma-separated extension group.
//! 3. Fifth: `+5`/`aug`/`#5` gives a sharp fifth, `-5`/`dim`/`b5` a flat
//!    fifth, else perfect.
//! 4. Seventh: major-seventh forms (`M7`, `maj7`, `M9`, `maj9`) are tested
//!    before the sixth forms (`6`, `dim7`, `dim9`), which are tested before
//!    the bare `7`.
//! 5. Third: `m` not followed by `a` means minor (this also catches `dim`);
//!    otherwise `sus4`/`sus2`; otherwise major.
//! 6. A `9` in the base sets the ninth and forces a plain seventh unless
//!    the base is an `add9`/`6`/`M9`/`maj9`/`dim9` form. Without a `9` in
//!    the base, the parenthesized group is scanned for ninth, eleventh,
//!    thirteenth, and fifth alterations.
//!
//! The grammar is lenient by contract: fragments that match nothing fall
//! back to defaults so partially typed symbols keep parsing. Only an empty
//! input or a missing root letter produce an error.

use crate::error::ChordSyntaxError;
use crate::note::NoteClass;

use super::{Chord, Interval, Slot};

pub(super) fn parse_symbol(text: &str) -> Result<Chord, ChordSyntaxError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ChordSyntaxError::Empty);
    }

    let (symbol, bass_text) = split_bass(trimmed);
    let (root, suffix) = NoteClass::parse_prefix(symbol)?;
    let bass = match bass_text.map(str::trim) {
        Some(b) if !b.is_empty() => NoteClass::parse_prefix(b)?.0,
        _ => root,
    };

    let (base, extensions) = split_parens(suffix);
    let base = base.as_str();

    let mut slots = [Interval::Root; 6];

    slots[Slot::Fifth.index()] = if contains_any(base, &["+5", "aug", "#5"]) {
        Interval::Sharp5
    } else if contains_any(base, &["-5", "dim", "b5"]) {
        Interval::Flat5
    } else {
        Interval::Perfect5
    };

    // Major-seventh forms must win over the generic "contains 7" test, and
    // the sixth forms over it in turn (dim7 carries a sixth, not a seventh).
    slots[Slot::Seventh.index()] = if contains_any(base, &["M7", "maj7", "M9", "maj9"]) {
        Interval::MajorSeventh
    } else if base.contains('6') || base.contains("dim7") || base.contains("dim9") {
        Interval::Sixth
    } else if base.contains('7') {
        Interval::Seventh
    } else {
        Interval::Root
    };

    // The "ma" guard keeps "maj7" from reading as minor; "dim" and "m7"
    // both land on the minor third here.
    slots[Slot::Third.index()] = if base.contains('m') && !base.contains("ma") {
        Interval::Minor3
    } else if base.contains("sus4") {
        Interval::Sus4
    } else if base.contains("sus2") {
        Interval::Sus2
    } else {
        Interval::Major3
    };

    if base.contains('9') {
        slots[Slot::Ninth.index()] = Interval::Ninth;
        let plain_ninth_form = !(base.contains("add9")
            || base.contains('6')
            || contains_any(base, &["M9", "maj9"])
            || base.contains("dim9"));
        if plain_ninth_form {
            slots[Slot::Seventh.index()] = Interval::Seventh;
        }
    } else {
        for token in extensions.split(',') {
            match token.trim() {
                "9" => slots[Slot::Ninth.index()] = Interval::Ninth,
                "-9" | "b9" => slots[Slot::Ninth.index()] = Interval::FlatNinth,
                "+9" | "#9" => slots[Slot::Ninth.index()] = Interval::SharpNinth,
                "11" => slots[Slot::Eleventh.index()] = Interval::Eleventh,
                "+11" | "#11" => slots[Slot::Eleventh.index()] = Interval::SharpEleventh,
                "13" => slots[Slot::Thirteenth.index()] = Interval::Thirteenth,
                "-13" | "b13" => slots[Slot::Thirteenth.index()] = Interval::FlatThirteenth,
                "-5" | "b5" => slots[Slot::Fifth.index()] = Interval::Flat5,
                "+5" | "#5" => slots[Slot::Fifth.index()] = Interval::Sharp5,
                // Lenient: unknown tokens are ignored.
                _ => {}
            }
        }
    }

    Ok(Chord { root, bass, slots })
}

/// Split off a slash-chord bass: `C/E`, `C on E`, `ConE`.
fn split_bass(text: &str) -> (&str, Option<&str>) {
    if let Some((symbol, bass)) = text.split_once('/') {
        return (symbol, Some(bass));
    }
    if let Some(pos) = text.find("on") {
        return (&text[..pos], Some(&text[pos + 2..]));
    }
    (text, None)
}

/// Split a suffix into `{base, extension group}`. The base keeps whatever
/// follows the closing parenthesis.
fn split_parens(suffix: &str) -> (String, &str) {
    let Some(open) = suffix.find('(') else {
        return (suffix.to_string(), "");
    };
    let close = suffix[open..]
        .find(')')
        .map(|c| open + c)
        .unwrap_or(suffix.len());
    let mut base = String::with_capacity(suffix.len());
    base.push_str(&suffix[..open]);
    if close < suffix.len() {
        base.push_str(&suffix[close + 1..]);
    }
    (base, &suffix[open + 1..close])
}

fn contains_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}
