use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lobby_core::{DEFAULT_CONFIG_FILE, LobbyConfig, SortMode, StatsFileMode};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "lobby")]
#[command(version, about = "Game waiting lobby", long_about = None)]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory holding lobby, statistics and password files
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// How sorting rearranges the lobby: scores-only or records
    #[arg(long)]
    pub sort_mode: Option<SortMode>,

    /// Statistics file naming: separate or shared
    #[arg(long)]
    pub stats_file: Option<StatsFileMode>,

    /// Text encoding of lobby files (e.g. utf-8, windows-1251)
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Log level for diagnostics written to stderr
    #[arg(long, env = "LOBBY_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Load the config file (defaults if it is missing or unreadable), apply
    /// overrides and validate the result.
    pub fn load_config(&self) -> Result<LobbyConfig> {
        let config = match LobbyConfig::load(&self.config) {
            Ok(c) => {
                info!("Loaded config from {:?}", self.config);
                c
            }
            Err(e) if e.is_not_found() => LobbyConfig::default(),
            Err(e) => {
                warn!("Failed to load config: {}, using defaults", e);
                LobbyConfig::default()
            }
        };
        let config = self.apply(config);
        config.validate().context("Invalid lobby settings")?;
        Ok(config)
    }

    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply(&self, base: LobbyConfig) -> LobbyConfig {
        let mut builder = LobbyConfig::builder();
        if let Some(dir) = &self.data_dir {
            builder = builder.data_dir(dir);
        }
        if let Some(mode) = self.sort_mode {
            builder = builder.sort_mode(mode);
        }
        if let Some(mode) = self.stats_file {
            builder = builder.stats_file(mode);
        }
        if let Some(encoding) = &self.encoding {
            builder = builder.encoding(encoding);
        }
        builder.apply(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lobby"]);
        assert_eq!(args.config, PathBuf::from("lobby.toml"));
        assert!(args.data_dir.is_none());
        assert_eq!(args.apply(LobbyConfig::default()), LobbyConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "lobby",
            "--data-dir",
            "saves",
            "--sort-mode",
            "records",
            "--stats-file",
            "shared",
            "-e",
            "windows-1251",
        ]);
        let config = args.apply(LobbyConfig::default());
        assert_eq!(config.data_dir, PathBuf::from("saves"));
        assert_eq!(config.sort_mode, SortMode::Records);
        assert_eq!(config.stats_file, StatsFileMode::Shared);
        assert_eq!(config.encoding, "windows-1251");
    }

    #[test]
    fn test_invalid_settings_name_the_setting() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("lobby.toml");
        let args = Args::parse_from([
            "lobby",
            "--config",
            config.to_str().unwrap(),
            "--data-dir",
            "saves",
            "-e",
            "klingon",
        ]);

        let err = args.load_config().unwrap_err();
        assert_eq!(err.to_string(), "Invalid lobby settings");
        let full = format!("{:#}", err);
        assert!(full.contains("Unknown text encoding: klingon"));
        assert!(!full.contains("saves"));
    }

    #[test]
    fn test_load_config_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("missing.toml");
        let args = Args::parse_from(["lobby", "--config", config.to_str().unwrap()]);
        assert_eq!(args.load_config().unwrap(), LobbyConfig::default());
    }

    #[test]
    fn test_rejects_unknown_sort_mode() {
        assert!(Args::try_parse_from(["lobby", "--sort-mode", "bubble"]).is_err());
    }
}
