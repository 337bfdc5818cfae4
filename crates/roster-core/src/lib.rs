//! Roster Core - workforce records and the rules around them
//!
//! The logic-bearing part of the staffing dashboard:
//! - Workforce records with derived totals and vacancy rates
//! - Summary statistics recomputed from a collection
//! - Record editor (add / update / remove) producing new collections
//! - Substring categorizer feeding the staff-mix chart
//! - Chart inputs and the page selector
//!
//! # Example
//!
//! ```rust
//! use roster_core::{default_collection, editor, summary, RecordDraft};
//!
//! let records = default_collection();
//! let records = editor::add(&records, RecordDraft::new("صيدلانية", 12, 3)).unwrap();
//! let stats = summary::compute(&records);
//!
//! assert_eq!(stats.total_positions, 1704);
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod categorize;
pub mod chart;
pub mod defaults;
pub mod editor;
pub mod error;
pub mod summary;
pub mod types;
pub mod view;

// Re-exports for convenience
pub use categorize::{
    categorize, Categorizer, Category, CategoryBreakdown, DonutSlice, ADMINISTRATIVE_MARKER,
    MEDICAL_MARKER,
};
pub use chart::{overview_bars, stacked_bars, StackedBar, OVERVIEW_BAR_LIMIT};
pub use defaults::default_collection;
pub use error::{RosterError, StorageError};
pub use summary::{compute, largest_need};
pub use types::{
    coerce_count, rate, RecordDraft, SummaryStats, WorkforceCollection, WorkforceRecord,
    DEFAULT_COLOR, MAX_COUNT,
};
pub use view::{UnknownView, ViewKind};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Roster Core
    pub use crate::{
        categorize, compute, default_collection, editor, CategoryBreakdown, RecordDraft,
        RosterError, SummaryStats, ViewKind, WorkforceCollection, WorkforceRecord,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
