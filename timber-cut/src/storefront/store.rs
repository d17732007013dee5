use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Persistent string storage, keyed by name.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// Store that lives as long as the process
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk, rewritten on every `set`.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self> {
        let entries = match path.exists() {
            false => BTreeMap::new(),
            true => {
                let file = File::open(path)
                    .with_context(|| format!("could not open store: {}", path.display()))?;
                serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("could not parse store: {}", path.display()))?
            }
        };
        Ok(JsonFileStore {
            path: path.to_path_buf(),
            entries,
        })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)
            .with_context(|| format!("could not write store: {}", self.path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.entries)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }
}
