// Positional eligibility: how many of each position one roster may hold.

use crate::player::Position;
use crate::roster::Roster;

/// Maximum number of players at `position` a single roster may hold.
pub const fn position_cap(position: Position) -> usize {
    match position {
        Position::Quarterback => 2,
        Position::TightEnd => 2,
        Position::WideReceiver => 3,
        Position::RunningBack => 3,
    }
}

/// Largest possible roster: the sum of every position cap.
pub const MAX_ROSTER_SIZE: usize = position_cap(Position::Quarterback)
    + position_cap(Position::RunningBack)
    + position_cap(Position::WideReceiver)
    + position_cap(Position::TightEnd);

/// Whether a roster may draft another player at `position`.
pub fn is_eligible(roster: &Roster, position: Position) -> bool {
    roster.count(position) < position_cap(position)
}

/// How many more players at `position` the roster may take.
pub fn remaining(roster: &Roster, position: Position) -> usize {
    position_cap(position).saturating_sub(roster.count(position))
}
