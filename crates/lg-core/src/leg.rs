//! Travel legs of the rectangular loop.

use std::fmt;

/// The straight segment an agent is currently traversing.
///
/// Loop agents cycle `Right → Down → Left → Up → Right`.  `StraightDown` is
/// used only by agents crossing the field transversally; it has no successor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelLeg {
    Right,
    Down,
    Left,
    Up,
    StraightDown,
}

impl TravelLeg {
    /// Next leg after reaching this leg's corner.  `StraightDown` never turns.
    #[inline]
    pub fn next(self) -> TravelLeg {
        match self {
            TravelLeg::Right        => TravelLeg::Down,
            TravelLeg::Down         => TravelLeg::Left,
            TravelLeg::Left         => TravelLeg::Up,
            TravelLeg::Up           => TravelLeg::Right,
            TravelLeg::StraightDown => TravelLeg::StraightDown,
        }
    }

    /// `true` for the four legs that make up the loop.
    #[inline]
    pub fn is_loop(self) -> bool {
        !matches!(self, TravelLeg::StraightDown)
    }
}

impl fmt::Display for TravelLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TravelLeg::Right        => "right",
            TravelLeg::Down         => "down",
            TravelLeg::Left         => "left",
            TravelLeg::Up           => "up",
            TravelLeg::StraightDown => "straight-down",
        };
        f.write_str(s)
    }
}
