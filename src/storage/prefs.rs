use std::fs;
use std::path::PathBuf;

/// File-per-key preference store rooted in the user's config directory.
/// The stand-in for a platform key-value preference store: reads that fail
/// for any reason act as missing data, failed writes are logged and dropped.
#[derive(Debug, Clone)]
pub struct Prefs {
    dir: PathBuf,
}

impl Prefs {
    pub fn open_default() -> Self {
        let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.push("party-bingo");
        Self { dir }
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    pub fn write(&self, key: &str, contents: &str) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            log::error!("failed to create prefs directory {:?}: {err}", self.dir);
            return;
        }
        if let Err(err) = fs::write(self.path(key), contents) {
            log::error!("failed to write pref '{key}': {err}");
        }
    }

    pub fn remove(&self, key: &str) {
        let path = self.path(key);
        if path.exists() {
            if let Err(err) = fs::remove_file(&path) {
                log::error!("failed to remove pref '{key}': {err}");
            }
        }
    }
}
