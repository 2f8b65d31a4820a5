//! Process-wide registry of named gear configurations and its on-disk format.
//!
//! The store is constructed once at startup with [`GearConfigStore::load`] and
//! passed by reference to whoever needs it. Mutations only touch memory;
//! persistence happens when [`GearConfigStore::save`] is called explicitly
//! (the editor does this on final exit).
//!
//! ## File format
//!
//! ```json
//! {
//!   "list": [
//!     { "key": "main",
//!       "val": {
//!         "wielded":  { "damage_types": [{"name": "slashing"}], "materials": [...] },
//!         "equipped": { "armor_types": [{"name": "light"}], ... } } }
//!   ]
//! }
//! ```
//!
//! Absent list fields decode as empty vocabularies.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::gear::errors::GearError;
use crate::gear::tree::{Category, ConfigTree, Namespace};

/// Key of the configuration the game and the editor use by default.
pub const DEFAULT_CONFIG_KEY: &str = "main";

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedGearFile {
    #[serde(default)]
    list: Vec<PersistedEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedEntry {
    key: String,
    #[serde(default)]
    val: ConfigTree,
}

/// Registry mapping configuration keys to [`ConfigTree`]s, backed by one JSON file.
#[derive(Debug, Clone)]
pub struct GearConfigStore {
    path: PathBuf,
    configs: BTreeMap<String, ConfigTree>,
}

impl GearConfigStore {
    /// An empty store bound to `path`. Nothing is read or written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            configs: BTreeMap::new(),
        }
    }

    /// Load the store from `path`. Never fails: a missing file is replaced by the
    /// default configuration (and written out), a corrupt file is ignored in favour
    /// of defaults held in memory.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::new(path);
        match Self::read_file(&store.path) {
            Ok(Some(configs)) if !configs.is_empty() => {
                info!(
                    "Loaded {} gear configuration(s) from {}",
                    configs.len(),
                    store.path.display()
                );
                store.configs = configs;
            }
            Ok(Some(_)) => {
                warn!(
                    "Gear config file {} has no entries; using defaults",
                    store.path.display()
                );
                store.install_defaults();
            }
            Ok(None) => {
                info!(
                    "No gear config at {}; creating default configuration",
                    store.path.display()
                );
                store.install_defaults();
                if let Err(e) = store.save() {
                    warn!(
                        "Failed to persist default gear config to {}: {}",
                        store.path.display(),
                        e
                    );
                }
            }
            Err(e) => {
                warn!(
                    "Unreadable gear config {} ({}); using defaults until next save",
                    store.path.display(),
                    e
                );
                store.install_defaults();
            }
        }
        store
    }

    fn install_defaults(&mut self) {
        self.configs
            .insert(DEFAULT_CONFIG_KEY.to_string(), ConfigTree::with_defaults());
    }

    fn read_file(path: &Path) -> Result<Option<BTreeMap<String, ConfigTree>>, GearError> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let file: PersistedGearFile = serde_json::from_str(data.trim_start_matches('\0'))?;
        let mut configs = BTreeMap::new();
        for entry in file.list {
            if configs.insert(entry.key.clone(), entry.val).is_some() {
                debug!("Duplicate gear config key '{}'; last entry wins", entry.key);
            }
        }
        Ok(Some(configs))
    }

    /// Serialize every configuration to pretty JSON in key order.
    pub fn to_json(&self) -> Result<String, GearError> {
        let file = PersistedGearFile {
            list: self
                .configs
                .iter()
                .map(|(key, val)| PersistedEntry {
                    key: key.clone(),
                    val: val.clone(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Rewrite the persisted file in full. The file is replaced atomically so a
    /// concurrent reader sees either the previous or the new contents.
    pub fn save(&self) -> Result<(), GearError> {
        let content = self.to_json()?;
        write_file_locked(&self.path, &content)?;
        info!(
            "Saved {} gear configuration(s) to {}",
            self.configs.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Live tree for `key`. Callers mutate it directly; nothing is saved automatically.
    pub fn get(&self, key: &str) -> Option<&ConfigTree> {
        self.configs.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ConfigTree> {
        self.configs.get_mut(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, tree: ConfigTree) -> Option<ConfigTree> {
        self.configs.insert(key.into(), tree)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigTree)> {
        self.configs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn main(&self) -> Option<&ConfigTree> {
        self.get(DEFAULT_CONFIG_KEY)
    }

    /// True iff `value` is a current member of the vocabulary in the "main" configuration.
    pub fn is_valid(&self, namespace: Namespace, category: Category, value: &str) -> bool {
        self.is_valid_in(DEFAULT_CONFIG_KEY, namespace, category, value)
    }

    pub fn is_valid_in(
        &self,
        key: &str,
        namespace: Namespace,
        category: Category,
        value: &str,
    ) -> bool {
        self.get(key)
            .map(|tree| tree.is_valid(namespace, category, value))
            .unwrap_or(false)
    }

    /// Snapshot of a "main" vocabulary; empty when there is no "main" configuration.
    pub fn items(&self, namespace: Namespace, category: Category) -> Vec<String> {
        self.main()
            .and_then(|tree| tree.list(namespace, category))
            .map(|list| list.items().to_vec())
            .unwrap_or_default()
    }

    /// Add to a "main" vocabulary. A no-op returning false when "main" is absent.
    pub fn add_entry(&mut self, namespace: Namespace, category: Category, value: &str) -> bool {
        self.get_mut(DEFAULT_CONFIG_KEY)
            .and_then(|tree| tree.list_mut(namespace, category))
            .map(|list| list.add(value))
            .unwrap_or(false)
    }

    /// Remove from a "main" vocabulary. A no-op returning false when "main" is absent.
    pub fn remove_entry(&mut self, namespace: Namespace, category: Category, value: &str) -> bool {
        self.get_mut(DEFAULT_CONFIG_KEY)
            .and_then(|tree| tree.list_mut(namespace, category))
            .map(|list| list.remove(value))
            .unwrap_or(false)
    }
}

/// Write `content` to `path` through a temp file and rename, holding an exclusive
/// lock on a sidecar `.lock` file so two savers never interleave.
fn write_file_locked(path: &Path, content: &str) -> Result<(), GearError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("gear-config.json");

    let lock_file = OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .open(dir.join(format!(".{}.lock", base)))?;
    lock_file.lock_exclusive()?;

    let mut counter = 0u32;
    let tmp_path = loop {
        let candidate = dir.join(format!(".{}.tmp-{}-{}", base, std::process::id(), counter));
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(mut tmp) => {
                discard_on_error(&candidate, tmp.write_all(content.as_bytes()))?;
                discard_on_error(&candidate, tmp.flush())?;
                let _ = tmp.sync_all();
                break candidate;
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                counter = counter.saturating_add(1);
                continue;
            }
            Err(e) => return Err(e.into()),
        }
    };

    discard_on_error(&tmp_path, fs::rename(&tmp_path, path))?;

    // Persist the rename itself (best-effort)
    if let Ok(dir_file) = File::open(dir) {
        let _ = dir_file.sync_all();
    }

    drop(lock_file);
    Ok(())
}

/// Delete the temp file at `tmp_path` when `result` is an error.
fn discard_on_error<T>(tmp_path: &Path, result: std::io::Result<T>) -> std::io::Result<T> {
    if result.is_err() {
        let _ = fs::remove_file(tmp_path);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_without_file_creates_and_persists_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("misc").join("gear-config.json");
        let store = GearConfigStore::load(&path);
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["main"]);
        assert_eq!(store.main(), Some(&ConfigTree::with_defaults()));
        assert!(path.exists(), "defaults are written immediately");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("gear.json");
        let mut store = GearConfigStore::new(&path);
        let mut sparse = ConfigTree::default();
        sparse.equipped.armor_types.add("tower");
        store.insert("main", ConfigTree::with_defaults());
        store.insert("arena", sparse);
        store.save().expect("save");

        let reloaded = GearConfigStore::load(&path);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("main"), store.get("main"));
        assert_eq!(reloaded.get("arena"), store.get("arena"));
    }

    #[test]
    fn corrupt_file_falls_back_without_overwriting() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("gear.json");
        fs::write(&path, "{ not json").unwrap();
        let store = GearConfigStore::load(&path);
        assert_eq!(store.main(), Some(&ConfigTree::with_defaults()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn main_helpers_are_noops_without_main() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = GearConfigStore::new(dir.path().join("gear.json"));
        assert!(!store.add_entry(Namespace::Wielded, Category::Materials, "obsidian"));
        assert!(!store.remove_entry(Namespace::Wielded, Category::Materials, "steel"));
        assert!(store.items(Namespace::Wielded, Category::Materials).is_empty());
        assert!(!store.is_valid(Namespace::Wielded, Category::Materials, "steel"));
        assert!(store.get("main").is_none());
    }

    #[test]
    fn save_leaves_no_temp_files_behind() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("gear.json");
        let store = GearConfigStore::load(&path);
        store.save().expect("second save");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp-"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn failed_temp_write_removes_temp_file() {
        let dir = TempDir::new().expect("tempdir");
        let tmp = dir.path().join(".gear.json.tmp-1-0");
        fs::write(&tmp, "partial").unwrap();

        let failed: std::io::Result<()> =
            Err(std::io::Error::new(ErrorKind::Other, "disk full"));
        assert!(discard_on_error(&tmp, failed).is_err());
        assert!(!tmp.exists());

        fs::write(&tmp, "complete").unwrap();
        assert!(discard_on_error(&tmp, Ok(())).is_ok());
        assert!(tmp.exists());
    }
}
