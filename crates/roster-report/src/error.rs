//! Error types for report generation

/// Errors from the text-generation service and the requester
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// No API key configured
    #[error("missing API credential")]
    MissingCredential,

    /// Client could not be built from the configuration
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Connection to the service failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Service returned an error status
    #[error("server error: {status} - {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// Another report request is still outstanding
    #[error("a report request is already in flight")]
    InFlight,
}

impl ReportError {
    /// Failure of the service call itself, as opposed to the local guard
    #[inline]
    #[must_use]
    pub fn is_service_failure(&self) -> bool {
        !matches!(self, Self::InFlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_error_display() {
        let err = ReportError::Server {
            status: 403,
            message: "forbidden".into(),
        };
        assert_eq!(err.to_string(), "server error: 403 - forbidden");
    }

    #[test]
    fn in_flight_is_not_a_service_failure() {
        assert!(!ReportError::InFlight.is_service_failure());
        assert!(ReportError::Timeout(5).is_service_failure());
    }
}
