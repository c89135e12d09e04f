//! Bearer token persistence
//!
//! The session token is a single opaque string kept in durable storage under
//! the fixed key [`TOKEN_KEY`]. Its presence is the only signal used to decide
//! whether a stored session should be rehydrated at startup.
//!
//! Three backends implement [`TokenStore`]:
//!
//! - [`KeyringTokenStore`] -- the operating system's credential store
//!   (Keychain on macOS, Secret Service on Linux, Windows Credential Manager
//!   on Windows)
//! - [`FileTokenStore`] -- a plain file under the user's config directory
//! - [`MemoryTokenStore`] -- process memory, for tests and embedding
//!
//! The store is a shared mutable cell. The session manager is the only
//! intended writer; the API client only reads.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::config::{SessionConfig, TokenStoreKind};
use crate::error::{GradpathError, Result};

/// Fixed key the token is stored under
pub const TOKEN_KEY: &str = "token";

/// Keyring service name
const KEYRING_SERVICE: &str = "gradpath";

/// Durable storage for the bearer token.
pub trait TokenStore: Send + Sync {
    /// Returns the stored token, or `None` when logged out.
    fn load(&self) -> Result<Option<String>>;

    /// Replaces the stored token.
    fn save(&self, token: &str) -> Result<()>;

    /// Deletes the stored token. Clearing an empty store is a no-op.
    fn clear(&self) -> Result<()>;
}

/// Builds the token store selected by configuration.
///
/// # Errors
///
/// Returns [`GradpathError::Storage`] when the `file` backend is selected
/// without an explicit path and no platform config directory exists.
pub fn from_config(config: &SessionConfig) -> Result<Arc<dyn TokenStore>> {
    let store: Arc<dyn TokenStore> = match config.token_store {
        TokenStoreKind::Keyring => Arc::new(KeyringTokenStore),
        TokenStoreKind::Memory => Arc::new(MemoryTokenStore::default()),
        TokenStoreKind::File => {
            let path = match &config.token_file {
                Some(path) => path.clone(),
                None => FileTokenStore::default_path()?,
            };
            Arc::new(FileTokenStore::new(path))
        }
    };
    tracing::debug!(backend = ?config.token_store, "Token store selected");
    Ok(store)
}

// ---------------------------------------------------------------------------
// KeyringTokenStore
// ---------------------------------------------------------------------------

/// Stateless accessor for the OS native keyring.
///
/// # Examples
///
/// ```no_run
/// use gradpath::auth::token_store::{KeyringTokenStore, TokenStore};
///
/// let store = KeyringTokenStore;
/// store.save("tok123").unwrap();
/// assert_eq!(store.load().unwrap().as_deref(), Some("tok123"));
/// ```
pub struct KeyringTokenStore;

impl KeyringTokenStore {
    fn entry() -> Result<keyring::Entry> {
        keyring::Entry::new(KEYRING_SERVICE, TOKEN_KEY).map_err(|e| GradpathError::Keyring(e).into())
    }
}

impl TokenStore for KeyringTokenStore {
    fn load(&self) -> Result<Option<String>> {
        match Self::entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(GradpathError::Keyring(e).into()),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        Self::entry()?
            .set_password(token)
            .map_err(GradpathError::Keyring)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match Self::entry()?.delete_password() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(GradpathError::Keyring(e).into()),
        }
    }
}

// ---------------------------------------------------------------------------
// FileTokenStore
// ---------------------------------------------------------------------------

/// Token kept as the sole contents of a file.
///
/// An empty or whitespace-only file reads as no token.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store backed by `path`. Nothing is touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/gradpath/token` for the current platform.
    ///
    /// # Errors
    ///
    /// Returns [`GradpathError::Storage`] when the home directory cannot be
    /// determined.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "gradpath").ok_or_else(|| {
            GradpathError::Storage("could not determine a config directory".to_string())
        })?;
        Ok(dirs.config_dir().join(TOKEN_KEY))
    }

    /// Location of the token file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(GradpathError::Io(e).into()),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(GradpathError::Io(e).into()),
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryTokenStore
// ---------------------------------------------------------------------------

/// In-process token cell.
///
/// # Examples
///
/// ```
/// use gradpath::auth::token_store::{MemoryTokenStore, TokenStore};
///
/// let store = MemoryTokenStore::with_token("tok123");
/// assert_eq!(store.load().unwrap().as_deref(), Some("tok123"));
/// store.clear().unwrap();
/// assert!(store.load().unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates a store already holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let guard = self
            .token
            .read()
            .map_err(|_| GradpathError::Storage("token lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| GradpathError::Storage("token lock poisoned".to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| GradpathError::Storage("token lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_starts_empty() {
        let store = MemoryTokenStore::default();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_save_replaces_token() {
        let store = MemoryTokenStore::with_token("old");
        store.save("new").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_memory_store_clear_is_idempotent() {
        let store = MemoryTokenStore::default();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_roundtrip_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("token"));

        store.save("tok123").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("tok123"));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_blank_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "  \n").unwrap();
        assert!(FileTokenStore::new(path).load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_clear_missing_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        store.clear().expect("clearing a missing file must succeed");
    }

    #[test]
    fn test_from_config_file_uses_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tok");
        let config = SessionConfig {
            token_store: TokenStoreKind::File,
            token_file: Some(path.clone()),
        };
        let store = from_config(&config).unwrap();
        store.save("abc").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "abc");
    }

    #[test]
    fn test_from_config_memory() {
        let config = SessionConfig {
            token_store: TokenStoreKind::Memory,
            token_file: None,
        };
        let store = from_config(&config).unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    #[ignore = "requires system keyring"]
    fn test_keyring_store_roundtrip() {
        let store = KeyringTokenStore;
        store.save("integration_token").expect("save");
        assert_eq!(store.load().expect("load").as_deref(), Some("integration_token"));
        store.clear().expect("clear");
        assert!(store.load().expect("load after clear").is_none());
        store.clear().expect("second clear is no-op");
    }
}
