//! Roster Store
//!
//! Persistence and state for the staffing dashboard.
//!
//! # Architecture
//!
//! ```text
//! Editor op → Dashboard::commit → RosterStore::save → StorageSlot
//!                    │
//!                    └→ summary::compute → watch::Sender<Snapshot>
//! ```
//!
//! # Example
//!
//! ```rust
//! use roster_core::RecordDraft;
//! use roster_store::{Dashboard, MemorySlot, RosterStore};
//!
//! let mut dashboard = Dashboard::open(RosterStore::new(MemorySlot::new()));
//! dashboard.add(RecordDraft::new("صيدلانية", 12, 3)).unwrap();
//!
//! assert_eq!(dashboard.summary().total_positions, 1704);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod dashboard;
pub mod slot;
pub mod store;

// Re-exports for convenience
pub use dashboard::{
    remove_prompt, AutoConfirm, Confirm, Confirmation, Dashboard, Snapshot, RESET_PROMPT,
};
pub use slot::{FileSlot, MemorySlot, StorageSlot, DEFAULT_SLOT_KEY};
pub use store::RosterStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
