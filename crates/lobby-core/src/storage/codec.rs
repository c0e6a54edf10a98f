use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use tracing::warn;

use crate::error::{Error, Result};

/// Reads and writes whole text files in a fixed character encoding.
#[derive(Debug, Clone, Copy)]
pub struct TextCodec {
    encoding: &'static Encoding,
}

impl Default for TextCodec {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
        }
    }
}

impl TextCodec {
    /// Look up a codec by WHATWG label ("utf-8", "windows-1251", "cp1251", ...)
    pub fn for_label(label: &str) -> Result<Self> {
        Encoding::for_label(label.trim().as_bytes())
            .map(|encoding| Self { encoding })
            .ok_or_else(|| Error::Encoding(label.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode `bytes`, rejecting any sequence that is malformed in this
    /// encoding rather than replacing it.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        let (text, _, had_errors) = self.encoding.decode(bytes);
        if had_errors {
            return Err(Error::InvalidPersistedData(format!(
                "text is not valid {}",
                self.name()
            )));
        }
        Ok(text.into_owned())
    }

    pub fn encode(&self, text: &str) -> Vec<u8> {
        let (bytes, _, unmappable) = self.encoding.encode(text);
        if unmappable {
            warn!("Characters not representable in {} were replaced", self.name());
        }
        bytes.into_owned()
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        self.decode(&bytes).map_err(|_| {
            Error::InvalidPersistedData(format!(
                "{} is not valid {} text",
                path.display(),
                self.name()
            ))
        })
    }

    /// Overwrite `path` with `text`.
    pub fn write<P: AsRef<Path>>(&self, path: P, text: &str) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.encode(text)).map_err(|e| Error::io(path, e))
    }
}
