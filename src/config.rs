use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::ai::AgentKind;
use crate::error::ConfigError;
use crate::game::{BoardConfig, Player};

/// Raw board parameters as written in the config file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardSection {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
    pub gravity: bool,
}

impl Default for BoardSection {
    fn default() -> Self {
        let c4 = BoardConfig::connect_four();
        BoardSection {
            rows: c4.rows(),
            cols: c4.cols(),
            win_length: c4.win_length(),
            gravity: c4.gravity(),
        }
    }
}

/// Who plays, who starts, and how long each move may take.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchSection {
    pub first_player: Player,
    pub move_deadline_ms: u64,
    pub agent_a: AgentKind,
    pub agent_b: AgentKind,
    pub seed: Option<u64>,
}

impl Default for MatchSection {
    fn default() -> Self {
        MatchSection {
            first_player: Player::A,
            move_deadline_ms: 1_000,
            agent_a: AgentKind::FirstFree,
            agent_b: AgentKind::Random,
            seed: None,
        }
    }
}

impl MatchSection {
    pub fn move_deadline(&self) -> Duration {
        Duration::from_millis(self.move_deadline_ms)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardSection,
    #[serde(rename = "match")]
    pub game: MatchSection,
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

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board_config()?;
        if self.game.move_deadline_ms == 0 {
            return Err(ConfigError::Validation(
                "match.move_deadline_ms must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Build the validated board parameters.
    pub fn board_config(&self) -> Result<BoardConfig, ConfigError> {
        let b = &self.board;
        Ok(BoardConfig::new(b.rows, b.cols, b.win_length, b.gravity)?)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
