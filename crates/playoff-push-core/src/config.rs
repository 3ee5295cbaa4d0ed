// Configuration loading and parsing (league.toml).

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::eligibility::MAX_ROSTER_SIZE;
use crate::player::Player;
use crate::pool::{self, PoolError};
use crate::state::{DraftState, DEFAULT_PICK_CAP};
use crate::turn::PARTICIPANT_COUNT;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },

    #[error("failed to load player pool: {0}")]
    Pool(#[from] PoolError),
}

// ---------------------------------------------------------------------------
// league.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub league: LeagueConfig,
    #[serde(default)]
    pub draft: DraftConfig,
    #[serde(default)]
    pub pool: PoolConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    /// One name per draft slot, slot 1 first.
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DraftConfig {
    #[serde(default = "default_pick_cap")]
    pub pick_cap: u32,
}

impl Default for DraftConfig {
    fn default() -> Self {
        DraftConfig {
            pick_cap: DEFAULT_PICK_CAP,
        }
    }
}

fn default_pick_cap() -> u32 {
    DEFAULT_PICK_CAP
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PoolConfig {
    /// CSV file replacing the built-in pool. Relative paths resolve against
    /// the base directory (the one holding `config/`), not `config/` itself.
    #[serde(default)]
    pub csv: Option<PathBuf>,
}

impl Config {
    /// Participant names as one entry per slot. Only valid after `validate`.
    pub fn participant_names(&self) -> Result<[String; PARTICIPANT_COUNT], ConfigError> {
        self.league
            .participants
            .clone()
            .try_into()
            .map_err(|names: Vec<String>| ConfigError::ValidationError {
                field: "league.participants".into(),
                message: format!("expected {PARTICIPANT_COUNT} names, got {}", names.len()),
            })
    }

    /// The player pool: the configured CSV if any, the built-in board otherwise.
    pub fn load_pool(&self, base_dir: &Path) -> Result<Vec<Player>, ConfigError> {
        match &self.pool.csv {
            Some(path) => Ok(pool::load_pool(&base_dir.join(path))?),
            None => Ok(pool::default_pool()),
        }
    }

    /// Build the opening draft snapshot described by this config.
    pub fn initial_state(&self, base_dir: &Path) -> Result<DraftState, ConfigError> {
        let names = self.participant_names()?;
        let players = self.load_pool(base_dir)?;
        Ok(DraftState::new(names, players, self.draft.pick_cap))
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/league.toml` relative to
/// `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let league_path = base_dir.join("config").join("league.toml");
    let text = read_file(&league_path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: league_path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Returns the list of files that were copied. Skips `.example` files.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    let mut copied = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }
        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Load config relative to the current working directory, copying defaults
/// first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let names = &config.league.participants;
    if names.len() != PARTICIPANT_COUNT {
        return Err(ConfigError::ValidationError {
            field: "league.participants".into(),
            message: format!("expected {PARTICIPANT_COUNT} names, got {}", names.len()),
        });
    }

    let mut seen = HashSet::new();
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::ValidationError {
                field: "league.participants".into(),
                message: "names must not be empty".into(),
            });
        }
        if !seen.insert(trimmed) {
            return Err(ConfigError::ValidationError {
                field: "league.participants".into(),
                message: format!("duplicate name `{trimmed}`"),
            });
        }
    }

    let max_picks = (PARTICIPANT_COUNT * MAX_ROSTER_SIZE) as u32;
    let cap = config.draft.pick_cap;
    if !(1..=max_picks).contains(&cap) {
        return Err(ConfigError::ValidationError {
            field: "draft.pick_cap".into(),
            message: format!("must be between 1 and {max_picks}, got {cap}"),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
