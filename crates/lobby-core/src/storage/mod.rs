//! Lobby persistence.
//!
//! This module handles the plain-text files a lobby is stored in:
//!
//! - **Record format**: one `name score` pair per line
//! - **Text codec**: decoding/encoding files in a configured character set
//! - **Lobby files**: loading a store from and saving it to `<name>.txt`
//!
//! ## File Names
//!
//! Every file lives in the configured data directory. The owner's lobby is
//! `<owner>.txt`; lobbies saved on request use whatever base name the caller
//! picks, always with `.txt` appended.

mod codec;
mod files;
mod format;

pub use codec::TextCodec;
pub use files::{LOBBY_FILE_EXTENSION, load_lobby, lobby_file_path, save_lobby};
pub use format::{format_records, parse_records};
