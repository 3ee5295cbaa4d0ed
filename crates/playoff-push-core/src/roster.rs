// Drafted rosters, one per participant slot.

use serde::{Deserialize, Serialize};

use crate::player::{Player, Position};
use crate::turn::Slot;

/// One participant's drafted players, in pick order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// Drafted players in pick order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Number of drafted players at `position`.
    pub fn count(&self, position: Position) -> usize {
        self.players.iter().filter(|p| p.position == position).count()
    }

    /// Players at `position`, in pick order.
    pub fn at_position(&self, position: Position) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.position == position)
    }

    /// Players grouped by position (QB, RB, WR, TE order). Empty groups are kept.
    pub fn grouped_by_position(&self) -> Vec<(Position, Vec<&Player>)> {
        Position::ALL
            .iter()
            .map(|&pos| (pos, self.at_position(pos).collect()))
            .collect()
    }

    fn push(&mut self, player: Player) {
        self.players.push(player);
    }
}

/// The rosters of every participant, keyed by slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rosters {
    by_slot: Vec<Roster>,
}

impl Default for Rosters {
    fn default() -> Self {
        Rosters {
            by_slot: Slot::all().map(|_| Roster::new()).collect(),
        }
    }
}

impl Rosters {
    pub fn new() -> Self {
        Rosters::default()
    }

    pub fn get(&self, slot: Slot) -> &Roster {
        &self.by_slot[slot.index()]
    }

    /// Append `player` to the roster for `slot`.
    pub fn add(&mut self, slot: Slot, player: Player) {
        self.by_slot[slot.index()].push(player);
    }

    /// (slot, roster) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Roster)> {
        Slot::all().zip(self.by_slot.iter())
    }

    /// Total number of drafted players across all rosters.
    pub fn total(&self) -> usize {
        self.by_slot.iter().map(Roster::len).sum()
    }
}
