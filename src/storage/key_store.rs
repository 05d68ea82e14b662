use crate::error::BingoError;
use crate::storage::prefs::Prefs;

const API_KEY: &str = "bingo.openai.key";

/// Injected capability for holding the shortening provider's API key.
/// Production code uses [`FileKeyStore`]; tests and the demo substitute
/// [`MemoryKeyStore`].
pub trait KeyStore {
    /// Store a trimmed key. An empty key after trimming is a no-op.
    fn save(&mut self, key: &str) -> Result<(), BingoError>;

    /// The currently stored key, if any.
    fn current_key(&self) -> Option<String>;

    fn has_saved_key(&self) -> bool {
        self.current_key().is_some_and(|key| !key.is_empty())
    }
}

/// Key store backed by the prefs directory.
#[derive(Debug, Clone)]
pub struct FileKeyStore {
    prefs: Prefs,
}

impl FileKeyStore {
    pub fn new(prefs: Prefs) -> Self {
        Self { prefs }
    }
}

impl KeyStore for FileKeyStore {
    fn save(&mut self, key: &str) -> Result<(), BingoError> {
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        self.prefs.write(API_KEY, trimmed);
        match self.prefs.read(API_KEY) {
            Some(stored) if stored == trimmed => Ok(()),
            _ => Err(BingoError::StoreUnavailable(
                "key could not be written".to_string(),
            )),
        }
    }

    fn current_key(&self) -> Option<String> {
        self.prefs.read(API_KEY)
    }
}

/// In-memory key store for tests and the demo binary.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyStore {
    key: Option<String>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: &str) -> Self {
        Self {
            key: Some(key.trim().to_string()),
        }
    }
}

impl KeyStore for MemoryKeyStore {
    fn save(&mut self, key: &str) -> Result<(), BingoError> {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            self.key = Some(trimmed.to_string());
        }
        Ok(())
    }

    fn current_key(&self) -> Option<String> {
        self.key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_and_trims() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileKeyStore::new(Prefs::at(dir.path()));

        assert!(!store.has_saved_key());
        store.save("  sk-test-123  ").unwrap();
        assert_eq!(store.current_key().as_deref(), Some("sk-test-123"));
        assert!(store.has_saved_key());
    }

    #[test]
    fn empty_key_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileKeyStore::new(Prefs::at(dir.path()));

        store.save("   ").unwrap();
        assert!(store.current_key().is_none());
    }

    #[test]
    fn memory_store_behaves_like_the_file_store() {
        let mut store = MemoryKeyStore::new();
        assert!(!store.has_saved_key());

        store.save("   ").unwrap();
        assert!(store.current_key().is_none());

        store.save(" sk-abc ").unwrap();
        assert_eq!(store.current_key().as_deref(), Some("sk-abc"));
    }
}
