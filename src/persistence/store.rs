//! String key-value stores the snapshot is written to.

use super::error::{Result, StorageError};
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the save directory.
pub const DATA_DIR_ENV: &str = "HUGOLAND_DATA_DIR";

const ENOSPC: i32 = 28;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    fn keys(&self) -> Result<Vec<String>>;
}

/// In-process store. A byte quota and an unavailable switch let tests
/// exercise the failure paths.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the summed length of all keys and values.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    fn ensure_available(&self) -> Result<()> {
        if self.unavailable {
            Err(StorageError::Unavailable("memory store switched off".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.ensure_available()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_available()?;
        if let Some(quota) = self.quota_bytes {
            let replaced = self.entries.get(key).map_or(0, |v| key.len() + v.len());
            if self.used_bytes() - replaced + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.ensure_available()?;
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        self.ensure_available()?;
        Ok(self.entries.keys().cloned().collect())
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// `$HUGOLAND_DATA_DIR` if set, otherwise the platform data directory.
    pub fn default_location() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let dirs = ProjectDirs::from("", "", "hugoland").ok_or_else(|| {
            StorageError::Unavailable("could not determine a data directory".to_string())
        })?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn open_default() -> Result<Self> {
        Self::new(Self::default_location()?)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

fn map_write_error(key: &str, err: std::io::Error) -> StorageError {
    if err.raw_os_error() == Some(ENOSPC) {
        StorageError::QuotaExceeded {
            key: key.to_string(),
        }
    } else {
        StorageError::Io(err)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path)?;
        tracing::debug!("Read {} ({} bytes)", path.display(), value.len());
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value).map_err(|e| map_write_error(key, e))?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Wrote {} ({} bytes)", path.display(), value.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Removed {}", path.display());
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if let Some(key) = path
                .file_name()
                .and_then(|s| s.to_str())
                .and_then(|s| s.strip_suffix(".json"))
            {
                keys.push(key.to_string());
            }
        }
        keys.sort_unstable();
        Ok(keys)
    }
}
