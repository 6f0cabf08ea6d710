//! Chord-symbol and English-name formatting.
//!
//! The symbol formatter composes a suffix from the slots (third, then
//! seventh, then fifth, then sus, then the parenthesized extensions) and
//! rewrites it through a fixed shorthand table, so `m-5` prints as `dim`
//! and `7(9)` as `9`. The English formatter mirrors the same table with
//! prose interval names.

use super::{Chord, Interval, Slot};

/// Canonical shorthand rewrites, matched against the whole composed suffix.
const SHORTHANDS: &[(&str, &str)] = &[
    ("m-5", "dim"),
    ("+5", "aug"),
    ("m6-5", "dim7"),
    ("(9)", "add9"),
    ("7(9)", "9"),
    ("M7(9)", "M9"),
    ("7+5", "aug7"),
    ("m6-5(9)", "dim9"),
];

/// Prose names for the shorthand forms, same table order.
const SHORTHAND_NAMES: &[(&str, &str)] = &[
    ("m-5", "diminished"),
    ("+5", "augmented"),
    ("m6-5", "diminished seventh"),
    ("(9)", "added ninth"),
    ("7(9)", "ninth"),
    ("M7(9)", "major ninth"),
    ("7+5", "augmented seventh"),
    ("m6-5(9)", "diminished ninth"),
];

impl Chord {
    /// The exact chord symbol, parseable back to an equal chord.
    ///
    /// # Examples
    /// ```
    /// use chordlab_theory::Chord;
    ///
    /// let chord = Chord::parse("Cm(b5)").unwrap();
    /// assert_eq!(chord.symbol(), "Cdim");
    /// ```
    pub fn symbol(&self) -> String {
        let suffix = self.compose_suffix();
        let suffix = lookup(SHORTHANDS, &suffix).unwrap_or(suffix.as_str());
        let mut symbol = self.root().name();
        symbol.push_str(suffix);
        if self.bass() != self.root() {
            symbol.push('/');
            symbol.push_str(&self.bass().name());
        }
        symbol
    }

    /// Human-readable English name, e.g. `"C sharp minor seventh"`.
    pub fn name(&self) -> String {
        let suffix = self.compose_suffix();
        let mut name = spell_out(&self.root().name());
        if let Some(short) = lookup(SHORTHAND_NAMES, &suffix) {
            name.push(' ');
            name.push_str(short);
        } else {
            for part in self.prose_parts() {
                name.push(' ');
                name.push_str(part);
            }
        }
        if self.bass() != self.root() {
            name.push_str(" on ");
            name.push_str(&spell_out(&self.bass().name()));
        }
        name
    }

    /// Compose the uncompressed suffix from the slots.
    fn compose_suffix(&self) -> String {
        let mut base = String::new();
        if self.slot(Slot::Third) == Interval::Minor3 {
            base.push('m');
        }
        base.push_str(match self.slot(Slot::Seventh) {
            Interval::Sixth => "6",
            Interval::Seventh => "7",
            Interval::MajorSeventh => "M7",
            _ => "",
        });
        base.push_str(match self.slot(Slot::Fifth) {
            Interval::Flat5 => "-5",
            Interval::Sharp5 => "+5",
            _ => "",
        });
        base.push_str(match self.slot(Slot::Third) {
            Interval::Sus4 => "sus4",
            Interval::Sus2 => "sus2",
            _ => "",
        });

        let mut extensions: Vec<&str> = Vec::new();
        match self.slot(Slot::Ninth) {
            Interval::FlatNinth => extensions.push("-9"),
            Interval::Ninth => extensions.push("9"),
            Interval::SharpNinth => extensions.push("+9"),
            _ => {}
        }
        match self.slot(Slot::Eleventh) {
            Interval::Eleventh => extensions.push("11"),
            Interval::SharpEleventh => extensions.push("+11"),
            _ => {}
        }
        match self.slot(Slot::Thirteenth) {
            Interval::Thirteenth => extensions.push("13"),
            Interval::FlatThirteenth => extensions.push("-13"),
            _ => {}
        }
        if !extensions.is_empty() {
            base.push('(');
            base.push_str(&extensions.join(","));
            base.push(')');
        }
        base
    }

    // Same part order as the symbol composition.
    fn prose_parts(&self) -> Vec<&'static str> {
        let mut parts = Vec::new();
        if self.slot(Slot::Third) == Interval::Minor3 {
            parts.push("minor");
        }
        match self.slot(Slot::Seventh) {
            Interval::Sixth => parts.push("sixth"),
            Interval::Seventh => parts.push("seventh"),
            Interval::MajorSeventh => parts.push("major seventh"),
            _ => {}
        }
        match self.slot(Slot::Fifth) {
            Interval::Flat5 => parts.push("flat five"),
            Interval::Sharp5 => parts.push("sharp five"),
            _ => {}
        }
        match self.slot(Slot::Third) {
            Interval::Sus4 => parts.push("suspended fourth"),
            Interval::Sus2 => parts.push("suspended second"),
            _ => {}
        }
        match self.slot(Slot::Ninth) {
            Interval::FlatNinth => parts.push("flat ninth"),
            Interval::Ninth => parts.push("ninth"),
            Interval::SharpNinth => parts.push("sharp ninth"),
            _ => {}
        }
        match self.slot(Slot::Eleventh) {
            Interval::Eleventh => parts.push("eleventh"),
            Interval::SharpEleventh => parts.push("sharp eleventh"),
            _ => {}
        }
        match self.slot(Slot::Thirteenth) {
            Interval::Thirteenth => parts.push("thirteenth"),
            Interval::FlatThirteenth => parts.push("flat thirteenth"),
            _ => {}
        }
        parts
    }
}

fn lookup<'t>(table: &'t [(&str, &str)], suffix: &str) -> Option<&'t str> {
    table
        .iter()
        .find(|(from, _)| *from == suffix)
        .map(|(_, to)| *to)
}

/// Spell accidental signs out for prose ("C#" -> "C sharp").
fn spell_out(note_name: &str) -> String {
    let mut out = String::new();
    for c in note_name.chars() {
        match c {
            '#' => out.push_str(" sharp"),
            'b' => out.push_str(" flat"),
            _ => out.push(c),
        }
    }
    out
}
