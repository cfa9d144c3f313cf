//! File-backed storage.
//!
//! One file per entry under a root directory, the desktop analogue of the
//! browser client's per-key `localStorage` entries.
//!
//! # Environment Variables
//!
//! - `HCG_DATA_DIR` - Root directory for persisted entries (default: `.hcg`)

use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Environment variable naming the storage root directory.
pub const DATA_DIR_ENV: &str = "HCG_DATA_DIR";

const DEFAULT_DATA_DIR: &str = ".hcg";

/// Durable storage writing each entry to `<root>/<key>`.
///
/// Keys are simple names like `hcg-cart`; they are used verbatim as file
/// names. The root directory is created lazily on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store rooted at the directory named by `HCG_DATA_DIR`.
    ///
    /// Loads a `.env` file if present, the same way server configuration is
    /// read. Falls back to `.hcg` in the working directory when the variable
    /// is unset.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        let root =
            std::env::var(DATA_DIR_ENV).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_owned());
        Self::new(root)
    }

    /// The root directory entries are written under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.entry_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
