//! Text-generation service boundary
//!
//! The core only depends on "prompt in, text out or failure".

use crate::error::ReportError;
use async_trait::async_trait;

/// External text-generation service
///
/// Implementations must be thread-safe (Send + Sync).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportService: Send + Sync {
    /// Produce text for a prompt with a single call, no retry
    async fn generate(&self, prompt: &str) -> Result<String, ReportError>;
}

#[async_trait]
impl<T: ReportService + ?Sized> ReportService for std::sync::Arc<T> {
    async fn generate(&self, prompt: &str) -> Result<String, ReportError> {
        (**self).generate(prompt).await
    }
}
