//! Error types for Roster Core
//!
//! Covers the failures an edit can produce:
//! - Duplicate category names
//! - References to categories that no longer exist
//! - Missing required draft fields
//! - Storage slot read/write failures

/// Main roster error type
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// A record with this name already exists
    #[error("duplicate name: {0}")]
    DuplicateName(String),

    /// No record with this name exists
    #[error("record not found: {0}")]
    NotFound(String),

    /// Draft failed validation
    #[error("validation failed: {0}")]
    Validation(String),

    /// Persisting the collection failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl RosterError {
    /// Check if the error should be shown to the user as a blocking message
    ///
    /// `NotFound` only happens when a caller edits a name it did not read
    /// from the current collection, so it is not user-facing.
    #[inline]
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::DuplicateName(_) | Self::Validation(_))
    }
}

/// Storage slot errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying I/O failed
    #[error("i/o failed on slot {slot}: {source}")]
    Io {
        /// Slot key
        slot: String,
        /// Source error
        #[source]
        source: std::io::Error,
    },

    /// Collection could not be serialized or parsed
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StorageError {
    /// Wrap an I/O error for the given slot
    #[inline]
    pub fn io(slot: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            slot: slot.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_error_display() {
        let err = RosterError::DuplicateName("طبية".to_string());
        assert!(err.to_string().contains("duplicate name"));
        assert!(err.to_string().contains("طبية"));
    }

    #[test]
    fn roster_error_user_facing() {
        assert!(RosterError::DuplicateName("x".into()).is_user_facing());
        assert!(RosterError::Validation("x".into()).is_user_facing());
        assert!(!RosterError::NotFound("x".into()).is_user_facing());
    }

    #[test]
    fn storage_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RosterError = StorageError::io("slot", io).into();
        assert!(matches!(err, RosterError::Storage(StorageError::Io { .. })));
        assert!(err.to_string().contains("slot"));
    }
}
