//! Lobby statistics.
//!
//! A summary is folded from the current queue and written as four lines:
//! players, wins, losses, errors. It is a snapshot; later changes to the
//! lobby do not update a summary already computed or saved.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::StatsFileMode;
use crate::error::{Error, Result};
use crate::player::Player;
use crate::storage::{TextCodec, lobby_file_path};

pub const WIN_POINTS: u64 = 1000;
pub const LOSS_POINTS: u64 = 500;
pub const ERROR_POINTS: u64 = 10;

/// Extension of a separate statistics file. It is never the player-list
/// extension, so no owner's lobby file can share a statistics file's path.
pub const STATS_FILE_EXTENSION: &str = "stats";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LobbySummary {
    pub num_players: u64,
    pub total_wins: u64,
    pub total_losses: u64,
    pub total_errors: u64,
}

impl LobbySummary {
    pub fn compute<'a>(players: impl IntoIterator<Item = &'a Player>) -> Self {
        players
            .into_iter()
            .fold(Self::default(), |mut summary, player| {
                summary.num_players += 1;
                summary.total_wins += u64::from(player.wins());
                summary.total_losses += u64::from(player.losses());
                summary.total_errors += u64::from(player.errors());
                summary
            })
    }

    /// Composite ranking score: wins*1000 + losses*500 + errors*10
    pub fn total_score(&self) -> u64 {
        self.total_wins
            .saturating_mul(WIN_POINTS)
            .saturating_add(self.total_losses.saturating_mul(LOSS_POINTS))
            .saturating_add(self.total_errors.saturating_mul(ERROR_POINTS))
    }

    pub fn to_file_content(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n",
            self.num_players, self.total_wins, self.total_losses, self.total_errors
        )
    }

    /// Parse the four-value statistics format. Negative, missing or
    /// non-integer values are rejected.
    pub fn parse(content: &str) -> Result<Self> {
        let mut values = [0u64; 4];
        let mut tokens = content.split_whitespace();
        for (slot, label) in values
            .iter_mut()
            .zip(["players", "wins", "losses", "errors"])
        {
            let token = tokens.next().ok_or_else(|| {
                Error::InvalidPersistedData(format!("missing {} count", label))
            })?;
            let value: i64 = token.parse().map_err(|_| {
                Error::InvalidPersistedData(format!("{} count is not an integer: {}", label, token))
            })?;
            *slot = u64::try_from(value).map_err(|_| {
                Error::InvalidPersistedData(format!("{} count is negative: {}", label, value))
            })?;
        }

        let [num_players, total_wins, total_losses, total_errors] = values;
        Ok(Self {
            num_players,
            total_wins,
            total_losses,
            total_errors,
        })
    }

    pub fn save<P: AsRef<Path>>(&self, path: P, codec: &TextCodec) -> Result<()> {
        let path = path.as_ref();
        codec.write(path, &self.to_file_content())?;
        debug!("Saved statistics to {}", path.display());
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P, codec: &TextCodec) -> Result<Self> {
        let path = path.as_ref();
        let content = codec.read(path)?;
        Self::parse(&content).inspect_err(|e| warn!("Rejected {}: {}", path.display(), e))
    }
}

/// Statistics file for `owner`, following the configured naming mode.
pub fn stats_file_path<P: AsRef<Path>>(dir: P, owner: &str, mode: StatsFileMode) -> PathBuf {
    match mode {
        StatsFileMode::Separate => dir
            .as_ref()
            .join(format!("{}.{}", owner, STATS_FILE_EXTENSION)),
        StatsFileMode::Shared => lobby_file_path(dir, owner),
    }
}
