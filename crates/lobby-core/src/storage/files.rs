use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::codec::TextCodec;
use super::format::{format_records, parse_records};
use crate::error::Result;
use crate::store::PlayerStore;

pub const LOBBY_FILE_EXTENSION: &str = "txt";

/// `<dir>/<base>.txt`. The extension is always appended, even if `base`
/// already ends in `.txt`.
pub fn lobby_file_path<P: AsRef<Path>>(dir: P, base: &str) -> PathBuf {
    dir.as_ref()
        .join(format!("{}.{}", base, LOBBY_FILE_EXTENSION))
}

/// Append every record in `path` to `store`. Returns the number of players loaded.
pub fn load_lobby<P: AsRef<Path>>(
    store: &mut PlayerStore,
    path: P,
    codec: &TextCodec,
) -> Result<usize> {
    let path = path.as_ref();
    let content = codec.read(path)?;
    let records = parse_records(&content);

    for (name, score) in &records {
        store.append(name.as_str());
        if let Some(player) = store.last_mut() {
            player.set_score(*score);
        }
    }

    info!("Loaded {} players from {}", records.len(), path.display());
    Ok(records.len())
}

/// Overwrite `path` with the current queue. Returns the number of players saved.
pub fn save_lobby<P: AsRef<Path>>(store: &PlayerStore, path: P, codec: &TextCodec) -> Result<usize> {
    let path = path.as_ref();
    codec.write(path, &format_records(store.iter()))?;
    debug!("Saved {} players to {}", store.len(), path.display());
    Ok(store.len())
}
