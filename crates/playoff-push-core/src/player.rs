// Player and position types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Football positions a player can be drafted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "TE")]
    TightEnd,
}

impl Position {
    /// All positions in display order.
    pub const ALL: [Position; 4] = [
        Position::Quarterback,
        Position::RunningBack,
        Position::WideReceiver,
        Position::TightEnd,
    ];

    /// Parse a position abbreviation ("QB", "rb", ...). Case-insensitive.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// A draftable player.
///
/// `rank` is the pre-draft pool ranking while the player is available and is
/// overwritten with the pick number once drafted. Equality is structural over
/// every field, rank included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    /// Team abbreviation (e.g. "MIN").
    pub team: String,
    pub rank: u32,
}

impl Player {
    pub fn new(first_name: &str, last_name: &str, position: Position, team: &str, rank: u32) -> Self {
        Player {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            position,
            team: team.to_string(),
            rank,
        }
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// A copy of this player with `rank` replaced.
    pub fn with_rank(&self, rank: u32) -> Self {
        Player {
            rank,
            ..self.clone()
        }
    }

    /// Same player regardless of rank. Used to match a drafted player back to
    /// its pool entry.
    pub fn same_player(&self, other: &Player) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.position == other.position
            && self.team == other.team
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_pos_standard_positions() {
        assert_eq!(Position::from_str_pos("QB"), Some(Position::Quarterback));
        assert_eq!(Position::from_str_pos("RB"), Some(Position::RunningBack));
        assert_eq!(Position::from_str_pos("WR"), Some(Position::WideReceiver));
        assert_eq!(Position::from_str_pos("TE"), Some(Position::TightEnd));
    }

    #[test]
    fn from_str_pos_case_insensitive_and_trimmed() {
        assert_eq!(Position::from_str_pos("qb"), Some(Position::Quarterback));
        assert_eq!(Position::from_str_pos(" Te "), Some(Position::TightEnd));
    }

    #[test]
    fn from_str_pos_invalid() {
        assert_eq!(Position::from_str_pos("K"), None);
        assert_eq!(Position::from_str_pos("DST"), None);
        assert_eq!(Position::from_str_pos(""), None);
    }

    #[test]
    fn display_matches_abbreviation() {
        for pos in Position::ALL {
            assert_eq!(Position::from_str_pos(&pos.to_string()), Some(pos));
        }
    }

    #[test]
    fn with_rank_only_changes_rank() {
        let p = Player::new("Josh", "Allen", Position::Quarterback, "BUF", 5);
        let stamped = p.with_rank(1);
        assert_eq!(stamped.rank, 1);
        assert_ne!(p, stamped);
        assert!(p.same_player(&stamped));
        assert_eq!(stamped.full_name(), "Josh Allen");
    }

    #[test]
    fn position_serializes_as_abbreviation() {
        let json = serde_json::to_string(&Position::WideReceiver).unwrap();
        assert_eq!(json, "\"WR\"");
    }
}
