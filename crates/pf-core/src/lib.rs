//! Page behaviours for the portfolio front end, free of any DOM access.
//!
//! Each module owns the state machine for one interactive feature. The wasm
//! crate reads the page, feeds events in here and writes the answers back.

pub mod contact;
pub mod filter;
pub mod nav;
pub mod pacing;
pub mod reveal;
pub mod scroll;
pub mod sidebar;
pub mod store;
pub mod theme;
pub mod typing;

pub use store::{MemoryStore, PreferenceStore};
