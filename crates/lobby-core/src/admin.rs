//! Shared-secret admin check backed by a plaintext password file.
//!
//! The file holds the password on its first line. It is created with
//! [`DEFAULT_ADMIN_PASSWORD`] the first time it is needed.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Result;
use crate::storage::TextCodec;

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

#[derive(Debug, Clone)]
pub struct AdminGate {
    path: PathBuf,
    codec: TextCodec,
}

impl AdminGate {
    pub fn new<P: Into<PathBuf>>(path: P, codec: TextCodec) -> Self {
        Self {
            path: path.into(),
            codec,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current password, creating the file with the default if it is missing.
    pub fn password(&self) -> Result<String> {
        match self.codec.read(&self.path) {
            Ok(content) => Ok(content.lines().next().unwrap_or_default().to_string()),
            Err(e) if e.is_not_found() => {
                info!(
                    "No password file at {}, creating one with the default password",
                    self.path.display()
                );
                self.codec.write(&self.path, DEFAULT_ADMIN_PASSWORD)?;
                Ok(DEFAULT_ADMIN_PASSWORD.to_string())
            }
            Err(e) => Err(e),
        }
    }

    /// Compare `input` with the stored password.
    ///
    /// If the file can be neither read nor created, the default password is
    /// checked instead so the session can still start.
    pub fn verify(&self, input: &str) -> bool {
        let expected = self.password().unwrap_or_else(|e| {
            warn!("Failed to read admin password: {}", e);
            DEFAULT_ADMIN_PASSWORD.to_string()
        });
        input == expected
    }

    /// Replace the stored password.
    pub fn change_password(&self, new_password: &str) -> Result<()> {
        self.codec.write(&self.path, new_password)?;
        info!("Admin password changed");
        Ok(())
    }
}
