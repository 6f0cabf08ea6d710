//! Circle-of-fifths arithmetic.
//!
//! Every higher layer (note classes, keys, chords, fingering search) is
//! built on these five functions, so they must be bit-exact: chord and key
//! equality, enharmonic spelling, and scale membership all reduce to this
//! arithmetic.
//!
//! A circle-of-fifths index (`co5`) counts sharps (positive) or flats
//! (negative): C = 0, G = 1, F = -1, F# = 6, Db = -5, and so on. The same
//! numbering encodes individual note identity before octave reduction.

/// Reduce `n` to a pitch class in `0..=11`. Always non-negative.
///
/// # Examples
/// ```
/// use chordlab_theory::pitch::mod12;
///
/// assert_eq!(mod12(13), 1);
/// assert_eq!(mod12(-1), 11);
/// ```
pub fn mod12(n: i32) -> i32 {
    n.rem_euclid(12)
}

/// Swap the sharp-side and flat-side numbering by adding six to odd inputs.
///
/// This maps between a co5 index and its semitone index: for any co5 `n`,
/// `mod12(reverse_co5(n))` is the pitch class, and applying the function
/// twice returns to the original value modulo twelve.
pub fn reverse_co5(n: i32) -> i32 {
    if n.rem_euclid(2) == 1 {
        n + 6
    } else {
        n
    }
}

/// Transpose a co5 index by a number of semitones, folded into `-5..=6`.
///
/// # Examples
/// ```
/// use chordlab_theory::pitch::transpose_co5;
///
/// // C up one semitone is Db (five flats), not C# (seven sharps).
/// assert_eq!(transpose_co5(0, 1), -5);
/// // C up two semitones is D.
/// assert_eq!(transpose_co5(0, 2), 2);
/// ```
pub fn transpose_co5(co5: i32, semitones: i32) -> i32 {
    let folded = mod12(co5 + reverse_co5(semitones));
    if folded > 6 {
        folded - 12
    } else {
        folded
    }
}

/// Reflect a co5 index across the circle (tritone away).
pub fn opposite_co5(co5: i32) -> i32 {
    if co5 > 0 {
        co5 - 6
    } else {
        co5 + 6
    }
}

/// Whether the pitch class `note_class` lies on the major scale whose key
/// signature sits at `key_co5`.
pub fn is_on_scale(note_class: i32, key_co5: i32) -> bool {
    mod12(reverse_co5(note_class) - key_co5 + 1) < 7
}
