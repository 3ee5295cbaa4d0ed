// Snake-draft turn order.
//
// Forward: 1 -> 2 -> 3 -> 4, then slot 4 picks again and the direction flips.
// Backward: 4 -> 3 -> 2 -> 1, then slot 1 picks again and the direction flips.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of participants in a draft.
pub const PARTICIPANT_COUNT: usize = 4;

/// A participant slot, 1-based. Only values in `1..=PARTICIPANT_COUNT` exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Slot(u8);

impl Slot {
    pub const FIRST: Slot = Slot(1);
    pub const LAST: Slot = Slot(PARTICIPANT_COUNT as u8);

    /// Build a slot from its 1-based number.
    pub fn new(number: u8) -> Option<Self> {
        if (1..=PARTICIPANT_COUNT as u8).contains(&number) {
            Some(Slot(number))
        } else {
            None
        }
    }

    /// All slots in draft order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (1..=PARTICIPANT_COUNT as u8).map(Slot)
    }

    /// 1-based slot number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// 0-based index into per-participant sequences.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u8> for Slot {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Slot::new(value).ok_or_else(|| format!("participant slot out of range: {value}"))
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> u8 {
        slot.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which way the turn is travelling through the slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Compute the slot and direction for the pick after the one `slot` just made.
///
/// At either end the same slot keeps the pick and only the direction flips,
/// so slot 4 and slot 1 each pick twice in a row at their turnaround.
pub fn advance_turn(slot: Slot, direction: Direction) -> (Slot, Direction) {
    match direction {
        Direction::Forward if slot == Slot::LAST => (slot, direction.flipped()),
        Direction::Forward => (Slot(slot.0 + 1), Direction::Forward),
        Direction::Backward if slot == Slot::FIRST => (slot, direction.flipped()),
        Direction::Backward => (Slot(slot.0 - 1), Direction::Backward),
    }
}

/// The first `picks` slots of a draft that starts at slot 1 going forward.
pub fn turn_order(picks: usize) -> Vec<Slot> {
    let mut order = Vec::with_capacity(picks);
    let mut slot = Slot::FIRST;
    let mut direction = Direction::Forward;
    for _ in 0..picks {
        order.push(slot);
        (slot, direction) = advance_turn(slot, direction);
    }
    order
}

/// 1-based round of a 1-based pick number. Pick 0 (nothing drafted) is round 1.
pub fn round_of(pick_number: u32) -> u32 {
    pick_number.saturating_sub(1) / PARTICIPANT_COUNT as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(n: u8) -> Slot {
        Slot::new(n).unwrap()
    }

    #[test]
    fn slot_range_is_enforced() {
        assert!(Slot::new(0).is_none());
        assert!(Slot::new(5).is_none());
        assert_eq!(Slot::new(1), Some(Slot::FIRST));
        assert_eq!(Slot::new(4), Some(Slot::LAST));
    }

    #[test]
    fn slot_index_and_number() {
        let s = slot(3);
        assert_eq!(s.number(), 3);
        assert_eq!(s.index(), 2);
        assert_eq!(s.to_string(), "3");
        assert_eq!(Slot::all().count(), PARTICIPANT_COUNT);
    }

    #[test]
    fn forward_advances_one_slot() {
        assert_eq!(advance_turn(slot(1), Direction::Forward), (slot(2), Direction::Forward));
        assert_eq!(advance_turn(slot(2), Direction::Forward), (slot(3), Direction::Forward));
        assert_eq!(advance_turn(slot(3), Direction::Forward), (slot(4), Direction::Forward));
    }

    #[test]
    fn forward_turnaround_keeps_slot_four() {
        assert_eq!(advance_turn(slot(4), Direction::Forward), (slot(4), Direction::Backward));
    }

    #[test]
    fn backward_retreats_one_slot() {
        assert_eq!(advance_turn(slot(4), Direction::Backward), (slot(3), Direction::Backward));
        assert_eq!(advance_turn(slot(3), Direction::Backward), (slot(2), Direction::Backward));
        assert_eq!(advance_turn(slot(2), Direction::Backward), (slot(1), Direction::Backward));
    }

    #[test]
    fn backward_turnaround_keeps_slot_one() {
        assert_eq!(advance_turn(slot(1), Direction::Backward), (slot(1), Direction::Forward));
    }

    #[test]
    fn snake_order_first_thirteen_picks() {
        let order: Vec<u8> = turn_order(13).into_iter().map(Slot::number).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 4, 3, 2, 1, 1, 2, 3, 4, 4]);
    }

    #[test]
    fn every_slot_picks_equally_per_two_rounds() {
        let order = turn_order(40);
        for s in Slot::all() {
            assert_eq!(order.iter().filter(|&&o| o == s).count(), 10);
        }
    }

    #[test]
    fn round_of_pick_numbers() {
        assert_eq!(round_of(0), 1);
        assert_eq!(round_of(1), 1);
        assert_eq!(round_of(4), 1);
        assert_eq!(round_of(5), 2);
        assert_eq!(round_of(40), 10);
    }

    #[test]
    fn slot_deserialize_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<Slot>("2").unwrap(), slot(2));
        assert!(serde_json::from_str::<Slot>("9").is_err());
    }
}
