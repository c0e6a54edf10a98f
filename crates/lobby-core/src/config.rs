//! Lobby configuration.
//!
//! Settings come from an optional TOML file (`lobby.toml` by default):
//!
//! ```toml
//! data_dir = "saves"
//! sort_mode = "scores-only"   # or "records"
//! stats_file = "separate"     # or "shared"
//! encoding = "windows-1251"
//! password_file = "admin_password.txt"
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use strum::{Display, EnumString, IntoStaticStr};
use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "lobby.toml";
pub const DEFAULT_PASSWORD_FILE: &str = "admin_password.txt";
pub const DEFAULT_ENCODING: &str = "utf-8";

/// How sorting by score rearranges the lobby.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, EnumString, IntoStaticStr, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortMode {
    /// Selection sort that exchanges score values between positions.
    /// Names and unique ids stay where they were.
    #[default]
    ScoresOnly,
    /// Stable sort that moves whole player records.
    Records,
}

/// Where lobby statistics are written.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, EnumString, IntoStaticStr, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StatsFileMode {
    /// `<owner>.stats`, next to the player list.
    #[default]
    Separate,
    /// `<owner>.txt`, the same file as the player list. Saving statistics
    /// overwrites the saved lobby and vice versa.
    Shared,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LobbyConfig {
    /// Directory holding lobby, statistics and password files
    pub data_dir: PathBuf,
    pub sort_mode: SortMode,
    pub stats_file: StatsFileMode,
    /// Encoding label understood by `encoding_rs` (e.g. "utf-8", "windows-1251")
    pub encoding: String,
    /// Password file name, relative to `data_dir`
    pub password_file: PathBuf,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            sort_mode: SortMode::default(),
            stats_file: StatsFileMode::default(),
            encoding: DEFAULT_ENCODING.to_string(),
            password_file: PathBuf::from(DEFAULT_PASSWORD_FILE),
        }
    }
}

impl LobbyConfig {
    pub fn builder() -> LobbyConfigBuilder {
        LobbyConfigBuilder::default()
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::parse(&content)?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would only fail later, at the first file access.
    pub fn validate(&self) -> Result<()> {
        if encoding_rs::Encoding::for_label(self.encoding.as_bytes()).is_none() {
            return Err(Error::Encoding(self.encoding.clone()));
        }
        if self.password_file.as_os_str().is_empty() {
            return Err(Error::Config("password_file must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn password_path(&self) -> PathBuf {
        self.data_dir.join(&self.password_file)
    }
}

/// Builder for LobbyConfig
#[derive(Debug, Clone, Default)]
pub struct LobbyConfigBuilder {
    data_dir: Option<PathBuf>,
    sort_mode: Option<SortMode>,
    stats_file: Option<StatsFileMode>,
    encoding: Option<String>,
    password_file: Option<PathBuf>,
}

impl LobbyConfigBuilder {
    pub fn data_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.into());
        self
    }

    pub fn sort_mode(mut self, mode: SortMode) -> Self {
        self.sort_mode = Some(mode);
        self
    }

    pub fn stats_file(mut self, mode: StatsFileMode) -> Self {
        self.stats_file = Some(mode);
        self
    }

    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    pub fn password_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.password_file = Some(path.into());
        self
    }

    /// Overlay the values set on this builder onto `base`.
    pub fn apply(self, base: LobbyConfig) -> LobbyConfig {
        LobbyConfig {
            data_dir: self.data_dir.unwrap_or(base.data_dir),
            sort_mode: self.sort_mode.unwrap_or(base.sort_mode),
            stats_file: self.stats_file.unwrap_or(base.stats_file),
            encoding: self.encoding.unwrap_or(base.encoding),
            password_file: self.password_file.unwrap_or(base.password_file),
        }
    }

    pub fn build(self) -> LobbyConfig {
        self.apply(LobbyConfig::default())
    }
}
