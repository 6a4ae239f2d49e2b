use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Player, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION};

/// Largest board edge the terminal front-end will lay out.
pub const MAX_DIMENSION: usize = 16;

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Name and piece color for one seat.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: String,
}

impl PlayerConfig {
    fn seat(name: &str, color: &str) -> Self {
        PlayerConfig {
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    pub fn player_one() -> Self {
        PlayerConfig::seat("Player 1", "red")
    }

    pub fn player_two() -> Self {
        PlayerConfig::seat("Player 2", "yellow")
    }

    pub fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.color.clone())
    }
}

/// A `[player_*]` table as written; absent keys keep the seat's defaults.
#[derive(serde::Deserialize)]
struct SeatTable {
    name: Option<String>,
    color: Option<String>,
}

impl SeatTable {
    fn over(self, seat: PlayerConfig) -> PlayerConfig {
        PlayerConfig {
            name: self.name.unwrap_or(seat.name),
            color: self.color.unwrap_or(seat.color),
        }
    }
}

fn player_one_seat<'de, D>(deserializer: D) -> Result<PlayerConfig, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let table: SeatTable = serde::Deserialize::deserialize(deserializer)?;
    Ok(table.over(PlayerConfig::player_one()))
}

fn player_two_seat<'de, D>(deserializer: D) -> Result<PlayerConfig, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let table: SeatTable = serde::Deserialize::deserialize(deserializer)?;
    Ok(table.over(PlayerConfig::player_two()))
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    #[serde(deserialize_with = "player_one_seat")]
    pub player_one: PlayerConfig,
    #[serde(deserialize_with = "player_two_seat")]
    pub player_two: PlayerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            player_one: PlayerConfig::player_one(),
            player_two: PlayerConfig::player_two(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let BoardConfig { rows, cols } = self.board;
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(ConfigError::InvalidDimensions {
                rows,
                cols,
                min: MIN_DIMENSION,
            });
        }
        if rows > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows must be <= {MAX_DIMENSION}"
            )));
        }
        if cols > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.cols must be <= {MAX_DIMENSION}"
            )));
        }

        for (key, seat) in [("player_one", &self.player_one), ("player_two", &self.player_two)] {
            if seat.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{key}.name must not be empty"
                )));
            }
            if seat.color.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{key}.color must not be empty"
                )));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
