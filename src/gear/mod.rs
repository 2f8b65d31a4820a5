//! Gear vocabularies and per-item gear attributes.
//!
//! * [`store::GearConfigStore`] holds named [`tree::ConfigTree`]s, each a pair
//!   of namespaces (`wielded`, `equipped`) with ordered, duplicate-free
//!   [`category::CategoryList`]s, persisted to a single JSON file.
//! * [`attributes`] defines the fixed-schema records attached to items and the
//!   clamping rules for their numeric fields.
//! * [`accessors`] exposes those records to a host item system through the
//!   [`accessors::GearCarrier`] trait.
//! * [`item_store`] persists tagged items in sled for the command line tools.

pub mod accessors;
pub mod attributes;
pub mod category;
pub mod errors;
pub mod item_store;
pub mod store;
pub mod tree;

pub use accessors::GearCarrier;
pub use attributes::{AttrValue, EquippedAttributes, EquippedField, GearField, WieldedAttributes, WieldedField};
pub use category::CategoryList;
pub use errors::GearError;
pub use item_store::{GearItem, GearItemStore, GearItemStoreBuilder};
pub use store::{GearConfigStore, DEFAULT_CONFIG_KEY};
pub use tree::{Category, ConfigTree, Namespace};
