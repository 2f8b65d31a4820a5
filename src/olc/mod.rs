//! Online configuration editor (OLC).
//!
//! [`engine::OlcEngine`] is a small menu state machine fed one line of
//! operator input at a time. [`gear_menus::GearMenus`] is the menu tree for
//! editing a [`crate::gear::GearConfigStore`].

pub mod engine;
pub mod gear_menus;
pub mod session;

pub use engine::{Choice, MenuSet, OlcEngine, OlcState};
pub use gear_menus::{format_tabular_list, GearMenuId, GearMenus};
pub use session::{OlcSession, TranscriptSession, WriterSession};
