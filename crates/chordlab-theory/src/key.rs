//! Keys on the circle of fifths.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::note::NoteClass;
use crate::pitch::{is_on_scale, mod12, transpose_co5};

/// Major/minor tag for a key. `Unspecified` keeps only the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyQuality {
    Major,
    Minor,
    Unspecified,
}

/// A key: a circle-of-fifths signature index plus a quality tag.
///
/// The stored co5 index is the key signature (sharp count positive, flat
/// count negative), shared by a major key and its relative minor. Values are
/// kept inside `-7..=7`; anything further out is folded back by
/// [`Key::normalize`] on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    co5: i32,
    quality: KeyQuality,
}

impl Key {
    pub fn new(co5: i32, quality: KeyQuality) -> Self {
        Self { co5, quality }.normalize()
    }

    /// Fold a co5 outside `-7..=7` back into range.
    pub fn normalize(self) -> Self {
        if (-7..=7).contains(&self.co5) {
            return self;
        }
        let mut co5 = mod12(self.co5);
        if co5 > 6 {
            co5 -= 12;
        }
        Self { co5, ..self }
    }

    pub fn co5(&self) -> i32 {
        self.co5
    }

    pub fn quality(&self) -> KeyQuality {
        self.quality
    }

    /// The tonic note class (relative-minor tonic sits three fifths up).
    pub fn tonic(&self) -> NoteClass {
        match self.quality {
            KeyQuality::Minor => NoteClass::from_co5(self.co5 + 3),
            _ => NoteClass::from_co5(self.co5),
        }
    }

    /// Transpose the key signature by `semitones`.
    pub fn transpose(&self, semitones: i32) -> Key {
        Self {
            co5: transpose_co5(self.co5, semitones),
            quality: self.quality,
        }
    }

    /// The other common spelling of this key (C# major <-> Db major).
    pub fn toggle_enharmonic(&self) -> Key {
        let co5 = if self.co5 > 0 {
            self.co5 - 12
        } else {
            self.co5 + 12
        };
        Self { co5, ..*self }.normalize()
    }

    /// Relative major/minor: same signature, opposite quality.
    pub fn relative(&self) -> Key {
        let quality = match self.quality {
            KeyQuality::Major => KeyQuality::Minor,
            KeyQuality::Minor => KeyQuality::Major,
            KeyQuality::Unspecified => KeyQuality::Unspecified,
        };
        Self { quality, ..*self }
    }

    /// Parallel major/minor: same tonic, signature three fifths apart.
    pub fn parallel(&self) -> Key {
        match self.quality {
            KeyQuality::Major => Key::new(self.co5 - 3, KeyQuality::Minor),
            KeyQuality::Minor => Key::new(self.co5 + 3, KeyQuality::Major),
            KeyQuality::Unspecified => *self,
        }
    }

    /// Whether `note` lies on this key's scale (major scale of the
    /// signature; a minor key shares its relative major's notes).
    pub fn contains(&self, note: NoteClass) -> bool {
        is_on_scale(note.semitone() as i32, self.co5)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quality {
            KeyQuality::Major => write!(f, "{}", self.tonic().name()),
            KeyQuality::Minor => write!(f, "{}m", self.tonic().name()),
            KeyQuality::Unspecified => {
                let major = Self { quality: KeyQuality::Major, ..*self };
                let minor = Self { quality: KeyQuality::Minor, ..*self };
                write!(f, "{} / {}m", major.tonic().name(), minor.tonic().name())
            }
        }
    }
}
