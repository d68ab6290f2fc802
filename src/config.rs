//! Converter configuration.

use crate::coords::{BoardSize, CoordError, CoordFormat};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable that overrides the configured board size.
pub const BOARD_SIZE_ENV: &str = "STRICTLY_COORDS_BOARD_SIZE";

/// Configuration for coordinate conversion.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Board side length.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Format assumed for input when none is given.
    #[serde(default = "default_from")]
    default_from: CoordFormat,

    /// Format produced when none is given.
    #[serde(default = "default_to")]
    default_to: CoordFormat,
}

#[instrument]
fn default_board_size() -> usize {
    BoardSize::STANDARD.get()
}

#[instrument]
fn default_from() -> CoordFormat {
    CoordFormat::Kgs
}

#[instrument]
fn default_to() -> CoordFormat {
    CoordFormat::Sgf
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new(default_board_size())
    }
}

impl ConverterConfig {
    /// Creates a configuration for the given board size with default formats.
    #[instrument]
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            default_from: default_from(),
            default_to: default_to(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read(e.to_string())))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies overrides from the process environment.
    #[instrument(skip(self))]
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_board_size_var(std::env::var(BOARD_SIZE_ENV))
    }

    /// Applies the result of looking up [`BOARD_SIZE_ENV`].
    ///
    /// An unset variable leaves the board size alone; one that is not
    /// valid Unicode is an error, like any other unparsable value.
    #[instrument(skip(self))]
    pub fn with_board_size_var(self, var: Result<String, VarError>) -> Result<Self, ConfigError> {
        match var {
            Ok(value) => self.with_board_size_text(&value),
            Err(VarError::NotPresent) => Ok(self),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::new(ConfigErrorKind::BoardSize(
                raw.to_string_lossy().into_owned(),
            ))),
        }
    }

    /// Overrides the board size from its textual form.
    #[instrument(skip(self))]
    pub fn with_board_size_text(mut self, value: &str) -> Result<Self, ConfigError> {
        self.board_size = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::new(ConfigErrorKind::BoardSize(value.to_string())))?;
        debug!(board_size = self.board_size, "Board size overridden");
        Ok(self)
    }

    /// Replaces the board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Returns the validated board size.
    #[instrument(skip(self), fields(board_size = self.board_size))]
    pub fn size(&self) -> Result<BoardSize, ConfigError> {
        BoardSize::new(self.board_size).map_err(|e| ConfigError::new(ConfigErrorKind::Coord(e)))
    }
}

/// Reason a configuration could not be loaded.
#[derive(Debug, Clone, Display)]
pub enum ConfigErrorKind {
    /// The config file could not be read.
    #[display("Failed to read config file: {}", _0)]
    Read(String),

    /// The config file is not valid TOML for [`ConverterConfig`].
    #[display("Failed to parse config: {}", _0)]
    Parse(String),

    /// The board size override is not a number.
    #[display("Invalid board size override: {:?}", _0)]
    BoardSize(String),

    /// The board size is out of range.
    #[display("{}", _0)]
    Coord(CoordError),
}

/// Configuration error, tracked to where it was raised like [`CoordError`].
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What went wrong.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}
