//! Interval offsets and the chord slots they occupy.

use serde::{Deserialize, Serialize};

/// The six interval slots of a chord, in symbol order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Third,
    Fifth,
    Seventh,
    Ninth,
    Eleventh,
    Thirteenth,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Third,
        Slot::Fifth,
        Slot::Seventh,
        Slot::Ninth,
        Slot::Eleventh,
        Slot::Thirteenth,
    ];

    /// Position of this slot in [`Slot::ALL`] and in the chord array.
    pub fn index(self) -> usize {
        match self {
            Slot::Third => 0,
            Slot::Fifth => 1,
            Slot::Seventh => 2,
            Slot::Ninth => 3,
            Slot::Eleventh => 4,
            Slot::Thirteenth => 5,
        }
    }
}

/// A semitone offset from the chord root.
///
/// `Root` (offset 0) doubles as the "slot empty" marker: a slot holding
/// `Root` contributes no tone of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    Root,
    Sus2,
    Minor3,
    Major3,
    Sus4,
    Flat5,
    Perfect5,
    Sharp5,
    Sixth,
    Seventh,
    MajorSeventh,
    FlatNinth,
    Ninth,
    SharpNinth,
    Eleventh,
    SharpEleventh,
    FlatThirteenth,
    Thirteenth,
}

impl Interval {
    /// Semitone distance from the root.
    pub fn semitones(self) -> u8 {
        match self {
            Interval::Root => 0,
            Interval::Sus2 => 2,
            Interval::Minor3 => 3,
            Interval::Major3 => 4,
            Interval::Sus4 => 5,
            Interval::Flat5 => 6,
            Interval::Perfect5 => 7,
            Interval::Sharp5 => 8,
            Interval::Sixth => 9,
            Interval::Seventh => 10,
            Interval::MajorSeventh => 11,
            Interval::FlatNinth => 13,
            Interval::Ninth => 14,
            Interval::SharpNinth => 15,
            Interval::Eleventh => 17,
            Interval::SharpEleventh => 18,
            Interval::FlatThirteenth => 20,
            Interval::Thirteenth => 21,
        }
    }

    /// The slot this offset may occupy (`None` for `Root`).
    pub fn slot(self) -> Option<Slot> {
        match self {
            Interval::Root => None,
            Interval::Sus2 | Interval::Minor3 | Interval::Major3 | Interval::Sus4 => {
                Some(Slot::Third)
            }
            Interval::Flat5 | Interval::Perfect5 | Interval::Sharp5 => Some(Slot::Fifth),
            Interval::Sixth | Interval::Seventh | Interval::MajorSeventh => Some(Slot::Seventh),
            Interval::FlatNinth | Interval::Ninth | Interval::SharpNinth => Some(Slot::Ninth),
            Interval::Eleventh | Interval::SharpEleventh => Some(Slot::Eleventh),
            Interval::FlatThirteenth | Interval::Thirteenth => Some(Slot::Thirteenth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Interval; 18] = [
        Interval::Root,
        Interval::Sus2,
        Interval::Minor3,
        Interval::Major3,
        Interval::Sus4,
        Interval::Flat5,
        Interval::Perfect5,
        Interval::Sharp5,
        Interval::Sixth,
        Interval::Seventh,
        Interval::MajorSeventh,
        Interval::FlatNinth,
        Interval::Ninth,
        Interval::SharpNinth,
        Interval::Eleventh,
        Interval::SharpEleventh,
        Interval::FlatThirteenth,
        Interval::Thirteenth,
    ];

    #[test]
    fn semitones_are_distinct_and_ascending() {
        let mut last = None;
        for interval in ALL {
            let s = interval.semitones();
            if let Some(prev) = last {
                assert!(s > prev, "{:?}", interval);
            }
            last = Some(s);
        }
    }

    #[test]
    fn slots_partition_the_non_root_offsets() {
        assert_eq!(Interval::Root.slot(), None);
        for interval in ALL.iter().skip(1) {
            assert!(interval.slot().is_some(), "{:?}", interval);
        }
        assert_eq!(Interval::Sus2.slot(), Some(Slot::Third));
        assert_eq!(Interval::Sharp5.slot(), Some(Slot::Fifth));
        assert_eq!(Interval::Sixth.slot(), Some(Slot::Seventh));
        assert_eq!(Interval::SharpNinth.slot(), Some(Slot::Ninth));
        assert_eq!(Interval::SharpEleventh.slot(), Some(Slot::Eleventh));
        assert_eq!(Interval::FlatThirteenth.slot(), Some(Slot::Thirteenth));
    }

    #[test]
    fn slot_indices_match_all_order() {
        for (i, slot) in Slot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }
}
