// Player pool: the built-in draft board and CSV loading.
//
// CSV format: first_name,last_name,position,team,rank (header row required,
// extra columns ignored).

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::player::{Player, Position};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Built-in pool
// ---------------------------------------------------------------------------

const DEFAULT_POOL: &[(&str, &str, Position, &str)] = &[
    ("Justin", "Jefferson", Position::WideReceiver, "MIN"),
    ("Ja'Marr", "Chase", Position::WideReceiver, "CIN"),
    ("CeeDee", "Lamb", Position::WideReceiver, "DAL"),
    ("Bijan", "Robinson", Position::RunningBack, "ATL"),
    ("Josh", "Allen", Position::Quarterback, "BUF"),
    ("Saquon", "Barkley", Position::RunningBack, "PHI"),
    ("Amon-Ra", "St. Brown", Position::WideReceiver, "DET"),
    ("Jahmyr", "Gibbs", Position::RunningBack, "DET"),
    ("Patrick", "Mahomes", Position::Quarterback, "KC"),
    ("Puka", "Nacua", Position::WideReceiver, "LAR"),
    ("AJ", "Brown", Position::WideReceiver, "PHI"),
    ("Lamar", "Jackson", Position::Quarterback, "BAL"),
    ("Nico", "Collins", Position::WideReceiver, "HOU"),
    ("Jalen", "Hurts", Position::Quarterback, "PHI"),
    ("Justin", "Herbert", Position::Quarterback, "LAC"),
    ("C.J.", "Stroud", Position::Quarterback, "HOU"),
    ("Travis", "Kelce", Position::TightEnd, "KC"),
    ("Sam", "LaPorta", Position::TightEnd, "DET"),
    ("Josh", "Jacobs", Position::RunningBack, "GB"),
    ("Joe", "Mixon", Position::RunningBack, "HOU"),
    ("Cooper", "Kupp", Position::WideReceiver, "LAR"),
    ("T.J.", "Hockenson", Position::TightEnd, "MIN"),
    ("Derrick", "Henry", Position::RunningBack, "BAL"),
    ("Tee", "Higgins", Position::WideReceiver, "CIN"),
    ("George", "Pickens", Position::WideReceiver, "PIT"),
    ("Terry", "McLaurin", Position::WideReceiver, "WAS"),
    ("Mike", "Evans", Position::WideReceiver, "TB"),
    ("Jordan", "Love", Position::Quarterback, "GB"),
    ("Zay", "Flowers", Position::WideReceiver, "BAL"),
    ("Jared", "Goff", Position::Quarterback, "DET"),
    ("Joe", "Burrow", Position::Quarterback, "CIN"),
    ("Jordan", "Addison", Position::WideReceiver, "MIN"),
    ("Kyren", "Williams", Position::RunningBack, "LAR"),
    ("James", "Cook", Position::RunningBack, "BUF"),
    ("Christian", "Watson", Position::WideReceiver, "GB"),
    ("Jameson", "Williams", Position::WideReceiver, "DET"),
    ("Dallas", "Goedert", Position::TightEnd, "PHI"),
    ("Matthew", "Stafford", Position::Quarterback, "LAR"),
    ("Xavier", "Worthy", Position::WideReceiver, "KC"),
    ("Jayden", "Daniels", Position::Quarterback, "WAS"),
    ("Baker", "Mayfield", Position::Quarterback, "TB"),
    ("Chase", "Brown", Position::RunningBack, "CIN"),
    ("Khalil", "Shakir", Position::WideReceiver, "BUF"),
    ("Ladd", "McConkey", Position::WideReceiver, "LAC"),
    ("Sam", "Darnold", Position::Quarterback, "MIN"),
    ("Bucky", "Irving", Position::RunningBack, "TB"),
];

/// The built-in player pool, ranked 1..=46 in board order.
pub fn default_pool() -> Vec<Player> {
    DEFAULT_POOL
        .iter()
        .enumerate()
        .map(|(i, &(first, last, pos, team))| Player::new(first, last, pos, team, i as u32 + 1))
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loading
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawPlayer {
    first_name: String,
    last_name: String,
    position: String,
    #[serde(default)]
    team: String,
    rank: u32,
    /// Absorb any extra columns.
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

fn load_pool_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut players = Vec::new();
    for result in reader.deserialize::<RawPlayer>() {
        match result {
            Ok(raw) => {
                let Some(position) = Position::from_str_pos(&raw.position) else {
                    warn!(
                        "skipping player '{} {}': unknown position '{}'",
                        raw.first_name.trim(),
                        raw.last_name.trim(),
                        raw.position
                    );
                    continue;
                };
                players.push(Player::new(
                    raw.first_name.trim(),
                    raw.last_name.trim(),
                    position,
                    raw.team.trim(),
                    raw.rank,
                ));
            }
            Err(e) => {
                warn!("skipping malformed player row: {}", e);
            }
        }
    }
    Ok(players)
}

/// Load a player pool from a CSV file.
///
/// Rows are kept in file order. Fails if the file cannot be read, yields no
/// players, or lists the same player twice.
pub fn load_pool(path: &Path) -> Result<Vec<Player>, PoolError> {
    let path_str = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|e| PoolError::Io {
        path: path_str.clone(),
        source: e,
    })?;
    let players = load_pool_from_reader(file).map_err(|e| PoolError::Csv {
        path: path_str.clone(),
        source: e,
    })?;
    validate_pool(&players)?;
    info!("Loaded {} players from {}", players.len(), path_str);
    Ok(players)
}

/// Reject empty pools and duplicate players (same name, position and team).
pub fn validate_pool(players: &[Player]) -> Result<(), PoolError> {
    if players.is_empty() {
        return Err(PoolError::Validation("player pool is empty".into()));
    }
    let mut seen = HashSet::new();
    for p in players {
        let key = (&p.first_name, &p.last_name, p.position, &p.team);
        if !seen.insert(key) {
            return Err(PoolError::Validation(format!(
                "duplicate player in pool: {} ({}, {})",
                p.full_name(),
                p.position,
                p.team
            )));
        }
    }
    Ok(())
}
