//! The waiting lobby.
//!
//! `Lobby` ties one [`PlayerStore`] to its owner's files and reports every
//! outcome through an [`OutputSink`]. Nothing here fails outward: missing
//! players, an empty queue and file errors all become notices, and the
//! lobby keeps whatever state it had.
//!
//! ## Example
//!
//! ```ignore
//! use lobby_core::{BufferSink, Lobby, LobbyConfig};
//!
//! let config = LobbyConfig::builder().data_dir("saves").build();
//! let mut lobby = Lobby::open("alice", config, BufferSink::new());
//! lobby.append_player("bob");
//! lobby.add_score("bob", 50);
//! // saves/alice.txt is written when `lobby` is dropped
//! ```

use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use crate::config::LobbyConfig;
use crate::error::{Error, Result};
use crate::player::Player;
use crate::sink::OutputSink;
use crate::stats::{LobbySummary, stats_file_path};
use crate::storage::{TextCodec, load_lobby, lobby_file_path, save_lobby};
use crate::store::PlayerStore;

pub struct Lobby<S: OutputSink> {
    owner: String,
    config: LobbyConfig,
    codec: TextCodec,
    store: PlayerStore,
    /// Last statistics read back from disk
    summary: LobbySummary,
    /// Cleared when the owner file exists but could not be read, so the
    /// save on drop does not overwrite it
    save_on_drop: bool,
    sink: S,
}

impl<S: OutputSink> Lobby<S> {
    /// Open the lobby for `owner`, loading `<owner>.txt` if it exists.
    pub fn open(owner: impl Into<String>, config: LobbyConfig, sink: S) -> Self {
        let codec = TextCodec::for_label(&config.encoding).unwrap_or_else(|e| {
            warn!("{}, falling back to UTF-8", e);
            TextCodec::default()
        });

        let mut lobby = Self {
            owner: owner.into(),
            config,
            codec,
            store: PlayerStore::new(),
            summary: LobbySummary::default(),
            save_on_drop: true,
            sink,
        };
        lobby.load_named();
        lobby
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn config(&self) -> &LobbyConfig {
        &self.config
    }

    pub fn store(&self) -> &PlayerStore {
        &self.store
    }

    /// Statistics from the last successful reload
    pub fn summary(&self) -> &LobbySummary {
        &self.summary
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn owner_file(&self) -> PathBuf {
        lobby_file_path(&self.config.data_dir, &self.owner)
    }

    pub fn stats_file(&self) -> PathBuf {
        stats_file_path(&self.config.data_dir, &self.owner, self.config.stats_file)
    }

    /// Write the queue to the sink, one `name - score` line per player.
    pub fn display_players(&mut self) {
        self.sink.write_line("");
        self.sink.write_line("Currently in the lobby:");
        if self.store.is_empty() {
            self.sink.write_line("Nobody is in the lobby");
            return;
        }
        for player in self.store.iter() {
            self.sink
                .write_line(&format!("{} - {}", player.name(), player.score()));
        }
    }

    pub fn append_player(&mut self, name: &str) -> u64 {
        let id = self.store.append(name);
        info!("{} joined the lobby", name);
        id
    }

    /// Send the player at the front of the queue into the game.
    pub fn remove_head(&mut self) -> Option<Player> {
        let removed = self.store.remove_head();
        let player = self.report(removed)?;
        info!("{} left the lobby for the game", player.name());
        Some(player)
    }

    pub fn remove_by_name(&mut self, name: &str) -> Option<Player> {
        let removed = self.store.remove_by_name(name);
        let player = self.report(removed)?;
        info!("{} removed from the lobby", player.name());
        Some(player)
    }

    pub fn find_by_name(&mut self, name: &str) -> bool {
        let found = self.store.contains(name);
        if found {
            self.sink.write_line(&format!("Player {} found!", name));
        } else {
            self.sink.write_notice(&format!("Player {} not found", name));
        }
        found
    }

    pub fn add_score(&mut self, name: &str, delta: i64) -> bool {
        let updated = self.store.add_score(name, delta);
        match self.report(updated) {
            Some(score) => {
                self.sink
                    .write_line(&format!("Score of {} updated to {}", name, score));
                true
            }
            None => false,
        }
    }

    pub fn sort_by_score(&mut self) {
        self.store.sort_by_score(self.config.sort_mode);
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.store.clear();
        debug!("Cleared {} players", removed);
        removed
    }

    /// Save to an arbitrary `<file_name>.txt` in the data directory.
    pub fn save_to_file(&mut self, file_name: &str) -> bool {
        let path = lobby_file_path(&self.config.data_dir, file_name);
        match save_lobby(&self.store, &path, &self.codec) {
            Ok(_) => {
                self.sink
                    .write_line(&format!("Lobby saved to {}.txt", file_name));
                true
            }
            Err(e) => {
                error!("Failed to save lobby: {}", e);
                self.sink.write_notice("Failed to save the lobby to file");
                false
            }
        }
    }

    /// Replace the queue with the contents of `<file_name>.txt`.
    ///
    /// The queue is cleared first, so a failed load leaves it empty.
    pub fn load_from_file(&mut self, file_name: &str) -> bool {
        self.store.clear();
        let path = lobby_file_path(&self.config.data_dir, file_name);
        match load_lobby(&mut self.store, &path, &self.codec) {
            Ok(_) => {
                self.sink
                    .write_line(&format!("Lobby loaded from {}.txt", file_name));
                true
            }
            Err(e) => {
                warn!("Failed to load lobby: {}", e);
                self.sink.write_notice("Failed to load the lobby from file");
                false
            }
        }
    }

    /// Save the queue to the owner's file.
    pub fn save_named(&mut self) -> bool {
        let path = self.owner_file();
        match save_lobby(&self.store, &path, &self.codec) {
            Ok(_) => true,
            Err(e) => {
                error!("Failed to save lobby for {}: {}", self.owner, e);
                self.sink.write_notice("Error: unable to save data");
                false
            }
        }
    }

    fn load_named(&mut self) -> bool {
        let path = self.owner_file();
        match load_lobby(&mut self.store, &path, &self.codec) {
            Ok(_) => true,
            Err(e) if e.is_not_found() => {
                info!("No saved lobby for {}, starting a new one", self.owner);
                self.sink.write_notice(&format!(
                    "No saved lobby for {}, creating a new one",
                    self.owner
                ));
                false
            }
            Err(e) => {
                error!("Failed to load lobby for {}: {}", self.owner, e);
                self.save_on_drop = false;
                self.sink.write_notice(&format!(
                    "Error: unable to load data ({}). {} will not be overwritten on exit",
                    e,
                    path.display()
                ));
                false
            }
        }
    }

    /// Fold the current queue into a statistics summary.
    pub fn compute_statistics(&self) -> LobbySummary {
        LobbySummary::compute(self.store.iter())
    }

    /// Compute, display and save statistics, then read them back.
    pub fn show_statistics(&mut self) -> LobbySummary {
        let summary = self.compute_statistics();

        self.sink.write_line("");
        self.sink.write_line("Lobby statistics:");
        self.sink
            .write_line(&format!("Players: {}", summary.num_players));
        self.sink
            .write_line(&format!("Total score: {}", summary.total_score()));
        self.sink.write_line(&format!("Wins: {}", summary.total_wins));
        self.sink
            .write_line(&format!("Losses: {}", summary.total_losses));
        self.sink
            .write_line(&format!("Errors: {}", summary.total_errors));

        if self.persist_statistics(&summary) {
            self.reload_statistics();
        }
        summary
    }

    pub fn persist_statistics(&mut self, summary: &LobbySummary) -> bool {
        let path = self.stats_file();
        match summary.save(&path, &self.codec) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to save statistics: {}", e);
                self.sink
                    .write_notice("Error: unable to open file for saving statistics");
                false
            }
        }
    }

    /// Read the statistics file into [`Lobby::summary`]. Invalid data leaves
    /// the current summary untouched.
    pub fn reload_statistics(&mut self) -> bool {
        let path = self.stats_file();
        match LobbySummary::load(&path, &self.codec) {
            Ok(summary) => {
                self.summary = summary;
                true
            }
            Err(e @ Error::InvalidPersistedData(_)) => {
                debug!("{}", e);
                self.sink.write_notice("Error: invalid statistics data");
                false
            }
            Err(e) => {
                error!("Failed to load statistics: {}", e);
                self.sink
                    .write_notice("Error: unable to open file for loading statistics");
                false
            }
        }
    }

    // Turn empty-lobby and not-found outcomes into notices.
    fn report<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(Error::EmptyLobby) => {
                self.sink.write_notice("The lobby is empty!");
                None
            }
            Err(Error::NotFound(name)) => {
                self.sink
                    .write_notice(&format!("Player {} not found", name));
                None
            }
            Err(e) => {
                warn!("{}", e);
                self.sink.write_notice(&e.to_string());
                None
            }
        }
    }
}

impl<S: OutputSink> Drop for Lobby<S> {
    fn drop(&mut self) {
        if self.save_on_drop {
            self.save_named();
        } else {
            warn!(
                "Not saving {}: it could not be loaded",
                self.owner_file().display()
            );
        }
    }
}
