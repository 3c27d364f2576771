//! Dictionary file loading.
//!
//! Reads `.aff` and `.dic` files from disk for [`crate::SpellHandle`]
//! construction. Loading is all-or-nothing: any failure leaves no partial
//! state behind, and the error is surfaced to the host unchanged.

use std::io;
use std::path::{Path, PathBuf};

/// Magic prefix of Hunspell's `hzip` compressed dictionary container
/// (optionally encrypted with a key). The embedded engine reads plain-text
/// files only, so these are rejected at load time.
const HZIP_MAGIC: &[u8] = b"hz";

/// Error type for dictionary loading failures.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The affix or dictionary file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid UTF-8 text.
    #[error("{} is not valid UTF-8 text", path.display())]
    Encoding { path: PathBuf },

    /// The file is an `hzip` compressed container, which the embedded
    /// engine cannot unlock with or without a key.
    #[error("{} is a compressed dictionary container; plain-text .aff/.dic files are required", path.display())]
    Encrypted { path: PathBuf },

    /// The engine rejected the affix or dictionary contents.
    #[error("failed to parse dictionary data: {0}")]
    Parse(String),
}

/// Read a dictionary-related file into a string.
///
/// `key` is the optional decryption key hosts pass for encrypted
/// dictionaries. Compressed containers are rejected regardless of the key
/// (see [`LoadError::Encrypted`]); the parameter is accepted so callers
/// that supply one keep working against plain-text files.
pub(crate) fn read_dictionary_file(path: &Path, _key: Option<&str>) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.starts_with(HZIP_MAGIC) {
        return Err(LoadError::Encrypted { path: path.to_path_buf() });
    }
    String::from_utf8(bytes).map_err(|_| LoadError::Encoding { path: path.to_path_buf() })
}
