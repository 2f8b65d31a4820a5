use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use sled::IVec;

use crate::gear::accessors::GearCarrier;
use crate::gear::attributes::{EquippedAttributes, WieldedAttributes};
use crate::gear::errors::GearError;

pub const GEAR_ITEM_SCHEMA_VERSION: u8 = 1;

const TREE_ITEMS: &str = "gear_items";

/// A game object that may carry wielded and/or equipped attribute records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearItem {
    pub id: String,
    pub name: String,
    pub wielded: Option<WieldedAttributes>,
    pub equipped: Option<EquippedAttributes>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub schema_version: u8,
}

impl GearItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            wielded: None,
            equipped: None,
            created_at: now,
            updated_at: now,
            schema_version: GEAR_ITEM_SCHEMA_VERSION,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Attach a default wielded record unless one is already present.
    pub fn tag_wielded(&mut self) -> bool {
        if self.wielded.is_some() {
            return false;
        }
        self.wielded = Some(WieldedAttributes::default());
        true
    }

    /// Attach a default equipped record unless one is already present.
    pub fn tag_equipped(&mut self) -> bool {
        if self.equipped.is_some() {
            return false;
        }
        self.equipped = Some(EquippedAttributes::default());
        true
    }

    /// Copy of this item under `new_id`, with every attribute record carried over.
    pub fn duplicate_as(&self, new_id: impl Into<String>) -> Self {
        let mut copy = GearItem::new(new_id, self.name.clone());
        if let Some(src) = &self.wielded {
            let mut dst = WieldedAttributes::default();
            src.copy_to(&mut dst);
            copy.wielded = Some(dst);
        }
        if let Some(src) = &self.equipped {
            let mut dst = EquippedAttributes::default();
            src.copy_to(&mut dst);
            copy.equipped = Some(dst);
        }
        copy
    }
}

impl GearCarrier for GearItem {
    fn wielded(&self) -> Option<&WieldedAttributes> {
        self.wielded.as_ref()
    }

    fn wielded_mut(&mut self) -> Option<&mut WieldedAttributes> {
        self.wielded.as_mut()
    }

    fn equipped(&self) -> Option<&EquippedAttributes> {
        self.equipped.as_ref()
    }

    fn equipped_mut(&mut self) -> Option<&mut EquippedAttributes> {
        self.equipped.as_mut()
    }
}

/// Helper builder so tests can create throwaway stores with custom paths.
pub struct GearItemStoreBuilder {
    path: PathBuf,
    temporary: bool,
}

impl GearItemStoreBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            temporary: false,
        }
    }

    /// Remove the database when the store is dropped.
    pub fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }

    pub fn open(self) -> Result<GearItemStore, GearError> {
        GearItemStore::open_with_options(self.path, self.temporary)
    }
}

/// Sled-backed persistence for [`GearItem`]s, keyed by item id.
pub struct GearItemStore {
    _db: sled::Db,
    items: sled::Tree,
}

impl GearItemStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GearError> {
        Self::open_with_options(path, false)
    }

    fn open_with_options<P: AsRef<Path>>(path: P, temporary: bool) -> Result<Self, GearError> {
        let path_ref = path.as_ref();
        std::fs::create_dir_all(path_ref)?;
        let db = sled::Config::new()
            .path(path_ref)
            .temporary(temporary)
            .open()?;
        let items = db.open_tree(TREE_ITEMS)?;
        debug!("Opened gear item store at {}", path_ref.display());
        Ok(Self { _db: db, items })
    }

    fn item_key(id: &str) -> Vec<u8> {
        format!("items:{}", id).into_bytes()
    }

    fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, GearError> {
        Ok(bincode::serialize(value)?)
    }

    fn deserialize<T: serde::de::DeserializeOwned>(bytes: IVec) -> Result<T, GearError> {
        Ok(bincode::deserialize::<T>(&bytes)?)
    }

    /// Insert or update an item.
    pub fn put_item(&self, mut item: GearItem) -> Result<(), GearError> {
        item.schema_version = GEAR_ITEM_SCHEMA_VERSION;
        item.touch();
        let bytes = Self::serialize(&item)?;
        self.items.insert(Self::item_key(&item.id), bytes)?;
        self.items.flush()?;
        Ok(())
    }

    pub fn get_item(&self, id: &str) -> Result<GearItem, GearError> {
        let Some(bytes) = self.items.get(Self::item_key(id))? else {
            return Err(GearError::NotFound(format!("item: {}", id)));
        };
        let record: GearItem = Self::deserialize(bytes)?;
        if record.schema_version != GEAR_ITEM_SCHEMA_VERSION {
            return Err(GearError::SchemaMismatch {
                entity: "gear item",
                expected: GEAR_ITEM_SCHEMA_VERSION,
                found: record.schema_version,
            });
        }
        Ok(record)
    }

    /// Fetch `id`, or a fresh untagged item when it does not exist yet.
    pub fn get_or_new(&self, id: &str) -> Result<GearItem, GearError> {
        match self.get_item(id) {
            Ok(item) => Ok(item),
            Err(GearError::NotFound(_)) => Ok(GearItem::new(id, id)),
            Err(e) => Err(e),
        }
    }

    pub fn list_item_ids(&self) -> Result<Vec<String>, GearError> {
        let mut ids = Vec::new();
        for entry in self.items.scan_prefix(b"items:") {
            let (key, _) = entry?;
            let text = String::from_utf8_lossy(&key);
            if let Some(id) = text.strip_prefix("items:") {
                ids.push(id.to_string());
            }
        }
        Ok(ids)
    }

    pub fn delete_item(&self, id: &str) -> Result<(), GearError> {
        if self.items.remove(Self::item_key(id))?.is_none() {
            return Err(GearError::NotFound(format!("item: {}", id)));
        }
        self.items.flush()?;
        Ok(())
    }

    /// Tag an item as wielded, creating the item if needed. Returns whether a
    /// record was attached.
    pub fn tag_wielded(&self, id: &str) -> Result<bool, GearError> {
        let mut item = self.get_or_new(id)?;
        let changed = item.tag_wielded();
        self.put_item(item)?;
        Ok(changed)
    }

    pub fn tag_equipped(&self, id: &str) -> Result<bool, GearError> {
        let mut item = self.get_or_new(id)?;
        let changed = item.tag_equipped();
        self.put_item(item)?;
        Ok(changed)
    }

    /// Store a copy of `id` under a freshly generated id and return the copy.
    pub fn duplicate(&self, id: &str) -> Result<GearItem, GearError> {
        let source = self.get_item(id)?;
        let copy = source.duplicate_as(uuid::Uuid::new_v4().to_string());
        self.put_item(copy.clone())?;
        debug!("Duplicated gear item {} as {}", id, copy.id);
        Ok(copy)
    }
}
