//! Tests for the chord model and the chord-symbol grammar.

use pretty_assertions::assert_eq;

use crate::error::ChordSyntaxError;
use crate::note::NoteClass;

use super::{Chord, Interval, Slot};

fn chord(symbol: &str) -> Chord {
    Chord::parse(symbol).unwrap()
}

#[test]
fn plain_major_triad() {
    let c = chord("C");
    assert_eq!(c.root().name(), "C");
    assert_eq!(c.bass(), c.root());
    assert_eq!(c.slot(Slot::Third), Interval::Major3);
    assert_eq!(c.slot(Slot::Fifth), Interval::Perfect5);
    assert_eq!(c.slot(Slot::Seventh), Interval::Root);
    assert_eq!(c.offsets(), vec![0, 4, 7]);
    assert_eq!(c, Chord::major(NoteClass::parse("C").unwrap()));
}

#[test]
fn minor_and_sus_thirds() {
    assert_eq!(chord("Cm").slot(Slot::Third), Interval::Minor3);
    assert_eq!(chord("Csus4").slot(Slot::Third), Interval::Sus4);
    assert_eq!(chord("Csus2").slot(Slot::Third), Interval::Sus2);
    // "ma" guard: maj7 is not minor.
    assert_eq!(chord("Cmaj7").slot(Slot::Third), Interval::Major3);
    assert_eq!(chord("CM7").slot(Slot::Third), Interval::Major3);
}

#[test]
fn fifth_alterations() {
    assert_eq!(chord("Caug").slot(Slot::Fifth), Interval::Sharp5);
    assert_eq!(chord("C+5").slot(Slot::Fifth), Interval::Sharp5);
    assert_eq!(chord("Cdim").slot(Slot::Fifth), Interval::Flat5);
    assert_eq!(chord("C-5").slot(Slot::Fifth), Interval::Flat5);
    assert_eq!(chord("Cm7b5").slot(Slot::Fifth), Interval::Flat5);
    assert_eq!(chord("Cm(b5)").slot(Slot::Fifth), Interval::Flat5);
    // The accidental scan is greedy: "C#5" reads as C-sharp plus "5".
    assert_eq!(chord("C#5").root().name(), "C#");
    assert_eq!(chord("C#5").slot(Slot::Fifth), Interval::Perfect5);
}

#[test]
fn seventh_precedence() {
    assert_eq!(chord("CM7").slot(Slot::Seventh), Interval::MajorSeventh);
    assert_eq!(chord("Cmaj7").slot(Slot::Seventh), Interval::MajorSeventh);
    assert_eq!(chord("C7").slot(Slot::Seventh), Interval::Seventh);
    assert_eq!(chord("C6").slot(Slot::Seventh), Interval::Sixth);
    // dim7 carries a sixth, not a seventh.
    assert_eq!(chord("Cdim7").slot(Slot::Seventh), Interval::Sixth);
    assert_eq!(chord("Cdim7").slot(Slot::Fifth), Interval::Flat5);
    assert_eq!(chord("Cdim7").slot(Slot::Third), Interval::Minor3);
}

#[test]
fn ninth_in_base_forces_plain_seventh() {
    let c9 = chord("C9");
    assert_eq!(c9.slot(Slot::Ninth), Interval::Ninth);
    assert_eq!(c9.slot(Slot::Seventh), Interval::Seventh);
    assert_eq!(c9.symbol(), "C9");
}

#[test]
fn ninth_forms_that_do_not_imply_a_seventh() {
    assert_eq!(chord("Cadd9").slot(Slot::Seventh), Interval::Root);
    assert_eq!(chord("Cadd9").slot(Slot::Ninth), Interval::Ninth);
    assert_eq!(chord("CM9").slot(Slot::Seventh), Interval::MajorSeventh);
    assert_eq!(chord("Cmaj9").slot(Slot::Seventh), Interval::MajorSeventh);
    assert_eq!(chord("Cdim9").slot(Slot::Seventh), Interval::Sixth);
    // 6/9 voicing: the sixth survives.
    let c69 = chord("C6(9)");
    assert_eq!(c69.slot(Slot::Seventh), Interval::Sixth);
    assert_eq!(c69.slot(Slot::Ninth), Interval::Ninth);
}

#[test]
fn parenthesized_extensions() {
    let c = chord("C7(-9,+11,13)");
    assert_eq!(c.slot(Slot::Seventh), Interval::Seventh);
    assert_eq!(c.slot(Slot::Ninth), Interval::FlatNinth);
    assert_eq!(c.slot(Slot::Eleventh), Interval::SharpEleventh);
    assert_eq!(c.slot(Slot::Thirteenth), Interval::Thirteenth);

    assert_eq!(chord("C(b9)").slot(Slot::Ninth), Interval::FlatNinth);
    assert_eq!(chord("C(#9)").slot(Slot::Ninth), Interval::SharpNinth);
    assert_eq!(chord("C(11)").slot(Slot::Eleventh), Interval::Eleventh);
    assert_eq!(chord("C(-13)").slot(Slot::Thirteenth), Interval::FlatThirteenth);
    // Fifth alterations are honored from inside parentheses too.
    assert_eq!(chord("C7(+5)").slot(Slot::Fifth), Interval::Sharp5);
}

#[test]
fn slash_chords() {
    let c_over_e = chord("C/E");
    assert_eq!(c_over_e.root().name(), "C");
    assert_eq!(c_over_e.bass().name(), "E");
    assert_eq!(c_over_e.symbol(), "C/E");

    assert_eq!(chord("C on E"), c_over_e);
    assert_eq!(chord("ConE"), c_over_e);
    assert_eq!(chord("Am7/G").bass().name(), "G");
}

#[test]
fn empty_bass_degrades_to_root() {
    let c = chord("C/");
    assert_eq!(c.bass(), c.root());
}

#[test]
fn parse_errors() {
    assert_eq!(Chord::parse(""), Err(ChordSyntaxError::Empty));
    assert_eq!(Chord::parse("  "), Err(ChordSyntaxError::Empty));
    assert!(matches!(
        Chord::parse("X7"),
        Err(ChordSyntaxError::NoRootLetter { .. })
    ));
    assert!(matches!(
        Chord::parse("C/X"),
        Err(ChordSyntaxError::NoRootLetter { .. })
    ));
}

#[test]
fn lenient_suffix_fragments() {
    // Unknown fragments default silently; only the root matters.
    let c = chord("Cqqq");
    assert_eq!(c.slot(Slot::Third), Interval::Major3);
    assert_eq!(c.slot(Slot::Fifth), Interval::Perfect5);
    // Unknown parenthesized tokens are skipped.
    assert_eq!(chord("C(banana)"), chord("C"));
}

#[test]
fn shorthand_compression_table() {
    let cases = [
        ("Cm(b5)", "Cdim"),
        ("C+5", "Caug"),
        ("Cdim7", "Cdim7"),
        ("C(9)", "Cadd9"),
        ("C7(9)", "C9"),
        ("CM7(9)", "CM9"),
        ("C7+5", "Caug7"),
        ("Cdim9", "Cdim9"),
        // No shorthand covers a half-diminished seventh: not Cdim.
        ("Cm7-5", "Cm7-5"),
    ];
    for (input, formatted) in cases {
        assert_eq!(chord(input).symbol(), formatted, "input {}", input);
    }
}

#[test]
fn symbol_round_trips_to_equal_chord() {
    let symbols = [
        "C", "Cm", "C7", "CM7", "C6", "C9", "CM9", "Cadd9", "Cdim", "Cdim7", "Cdim9", "Caug",
        "Caug7", "Cm7-5", "C7sus4", "Csus2", "C6(9)", "C7(-9)", "C7(+11)", "C7(13)",
        "Cm(9)", "C7(-9,+11,13)", "Cm7(9,11)", "F#m7", "Bbadd9", "Eb7(+5)", "C/E", "Am7/G",
        "DbM7",
    ];
    for symbol in symbols {
        let parsed = chord(symbol);
        let reparsed = chord(&parsed.symbol());
        assert_eq!(reparsed, parsed, "symbol {}", symbol);
    }
}

#[test]
fn format_is_idempotent_on_reachable_chords() {
    // Every reachable slot combination formats to a symbol that parses back
    // to the identical chord value.
    let thirds = ["", "m", "sus4", "sus2"];
    let fifths = ["", "-5", "+5"];
    let sevenths = ["", "6", "7", "M7"];
    let ninths = ["", "(9)", "(-9)", "(+9)"];
    for third in thirds {
        for fifth in fifths {
            for seventh in sevenths {
                for ninth in ninths {
                    // Compose in the formatter's order: m, seventh, fifth, sus.
                    let (pre, sus) = match third {
                        "m" => ("m", ""),
                        other => ("", other),
                    };
                    let symbol = format!("C{}{}{}{}{}", pre, seventh, fifth, sus, ninth);
                    let parsed = chord(&symbol);
                    let reparsed = chord(&parsed.symbol());
                    assert_eq!(reparsed, parsed, "symbol {}", symbol);
                }
            }
        }
    }
}

#[test]
fn equality_distinguishes_enharmonic_spellings() {
    let c_sharp = chord("C#");
    let d_flat = chord("Db");
    assert_ne!(c_sharp, d_flat);
    assert!(c_sharp.enharmonic_eq(&d_flat));
    assert!(!c_sharp.enharmonic_eq(&chord("C#m")));
}

#[test]
fn value_composition() {
    let c = chord("C");
    let c7 = c.with(Interval::Seventh);
    assert_eq!(c7, chord("C7"));
    // The original is untouched.
    assert_eq!(c.slot(Slot::Seventh), Interval::Root);
    assert_eq!(c7.without(Slot::Seventh), c);
    assert_eq!(c.over(NoteClass::parse("G").unwrap()), chord("C/G"));
    // Root placement is a no-op.
    assert_eq!(c.with(Interval::Root), c);
}

#[test]
fn tones_and_tone_indices() {
    let c7 = chord("C7");
    assert_eq!(
        c7.tones(),
        vec![Interval::Root, Interval::Major3, Interval::Perfect5, Interval::Seventh]
    );
    assert_eq!(c7.tone_count(), 4);
    assert_eq!(c7.tone(0), Ok(Interval::Root));
    assert_eq!(c7.tone(3), Ok(Interval::Seventh));
    let err = c7.tone(4).unwrap_err();
    assert_eq!(err.index, 4);
    assert_eq!(err.count, 4);
}

#[test]
fn notes_transpose_from_the_root() {
    let names: Vec<String> = chord("G7").notes().iter().map(|n| n.name()).collect();
    assert_eq!(names, vec!["G", "B", "D", "F"]);
}

#[test]
fn english_names() {
    assert_eq!(chord("C").name(), "C");
    assert_eq!(chord("Cm").name(), "C minor");
    assert_eq!(chord("C#m7").name(), "C sharp minor seventh");
    assert_eq!(chord("Cdim").name(), "C diminished");
    assert_eq!(chord("C9").name(), "C ninth");
    assert_eq!(chord("Cadd9").name(), "C added ninth");
    assert_eq!(chord("Bb7sus4").name(), "B flat seventh suspended fourth");
    assert_eq!(chord("C/E").name(), "C on E");
}

#[test]
fn serde_round_trip() {
    let c = chord("F#m7-5/A");
    let json = serde_json::to_string(&c).unwrap();
    let back: Chord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}
