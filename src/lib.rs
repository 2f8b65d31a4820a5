//! # gearconf - Gear Vocabularies and Online Editor for MUD Servers
//!
//! gearconf manages the vocabularies that describe gear in a text game
//! (damage types, weapon categories, materials, armor types, ...) and the
//! per-item attribute records that draw on them.
//!
//! ## Features
//!
//! - **Gear Configuration Store**: named configurations of ordered, duplicate-free
//!   category lists, persisted to one JSON file with atomic replace.
//! - **Online Editor**: a menu state machine with an explicit return stack,
//!   driven one line of operator input at a time.
//! - **Attribute Records**: fixed-schema wielded/equipped records with silent
//!   clamping of durability, reach and weapon speed.
//! - **Item Database**: sled-backed storage of tagged items for the CLI tools.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gearconf::gear::{Category, GearConfigStore, Namespace};
//! use gearconf::olc::{GearMenus, TranscriptSession};
//!
//! let mut store = GearConfigStore::load("misc/gear-config.json");
//! store.add_entry(Namespace::Wielded, Category::Materials, "obsidian");
//!
//! let mut session = TranscriptSession::new();
//! let mut editor = GearMenus::default()
//!     .into_engine()
//!     .on_exit(|store: &mut GearConfigStore| {
//!         if let Err(e) = store.save() {
//!             log::error!("save failed: {}", e);
//!         }
//!     });
//! editor.start(&store, &mut session);
//! editor.handle_input(&mut store, &mut session, "Q");
//! ```
//!
//! ## Module Organization
//!
//! - [`gear`] - configuration store, category lists, attribute records, item database
//! - [`olc`] - menu engine, sessions and the gear editor menus
//! - [`config`] - application configuration (TOML)
//! - [`validation`] - operator input checks
//! - [`logutil`] - single-line log escaping

pub mod config;
pub mod gear;
pub mod logutil;
pub mod olc;
pub mod validation;
