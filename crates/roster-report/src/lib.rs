//! Roster Report
//!
//! Requests a free-text strategic report for the current roster from an
//! external text-generation service.
//!
//! # Example
//!
//! ```rust,ignore
//! use roster_report::{GeminiClient, GeminiConfig, ReportRequester};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(GeminiConfig::new().with_api_key("key"))?;
//! let requester = ReportRequester::new(client);
//!
//! let records = roster_core::default_collection();
//! let summary = roster_core::compute(&records);
//! let text = requester.request_report(&records, &summary).await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod requester;
pub mod service;

// Re-exports for convenience
pub use error::ReportError;
pub use gemini::{parse_response, GeminiClient, GeminiConfig};
pub use prompt::{build_prompt, ReportMetadata};
pub use requester::{ReportRequester, EMPTY_REPORT_FALLBACK, SERVICE_ERROR_FALLBACK};
pub use service::ReportService;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
