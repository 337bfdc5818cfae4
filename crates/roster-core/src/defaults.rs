//! Built-in roster used when no saved collection exists

use crate::types::{WorkforceCollection, WorkforceRecord};

/// (name, occupied, vacant, color) for the ten default categories
const DEFAULT_ROWS: [(&str, u64, u64, &str); 10] = [
    ("طبية مساعدة", 755, 90, "#0ea5e9"),
    ("طبية", 296, 137, "#f43f5e"),
    ("إدارية مساعدة", 74, 43, "#8b5cf6"),
    ("إدارية", 35, 34, "#f59e0b"),
    ("مهنية علمية", 40, 25, "#10b981"),
    ("فنية مساعدة", 47, 3, "#6366f1"),
    ("خدمية", 31, 11, "#64748b"),
    ("تشغيلية", 33, 1, "#2dd4bf"),
    ("فنية", 33, 0, "#ec4899"),
    ("قيادية", 0, 1, "#000000"),
];

/// Fresh copy of the default ten-category roster
#[must_use]
pub fn default_collection() -> WorkforceCollection {
    DEFAULT_ROWS
        .iter()
        .map(|&(name, occupied, vacant, color)| WorkforceRecord::new(name, occupied, vacant, color))
        .collect()
}
