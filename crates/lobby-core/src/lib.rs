//! # lobby-core
//!
//! Core library for the waiting lobby.
//!
//! This crate provides:
//! - The player record and the ordered player queue
//! - Plain-text persistence of the queue (`name score` per line)
//! - Lobby statistics and their four-line summary file
//! - The flat-file admin password check
//! - The [`Lobby`] facade that ties these together and reports through an
//!   injected [`OutputSink`]

pub mod admin;
pub mod config;
pub mod error;
pub mod lobby;
pub mod player;
pub mod sink;
pub mod stats;
pub mod storage;
pub mod store;

pub use admin::{AdminGate, DEFAULT_ADMIN_PASSWORD};
pub use config::{DEFAULT_CONFIG_FILE, LobbyConfig, LobbyConfigBuilder, SortMode, StatsFileMode};
pub use error::{Error, Result};
pub use lobby::Lobby;
pub use player::Player;
pub use sink::{BufferSink, OutputSink};
pub use stats::{LobbySummary, stats_file_path};
pub use storage::{TextCodec, format_records, load_lobby, lobby_file_path, parse_records, save_lobby};
pub use store::PlayerStore;
