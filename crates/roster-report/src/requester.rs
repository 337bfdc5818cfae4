//! Report requester
//!
//! Wraps a [`ReportService`] with the dashboard's contract: one request
//! at a time, service failures replaced by a fixed message, no
//! cancellation.

use crate::error::ReportError;
use crate::prompt::{build_prompt, ReportMetadata};
use crate::service::ReportService;
use roster_core::{SummaryStats, WorkforceRecord};
use std::sync::atomic::{AtomicBool, Ordering};

/// Shown when the service answers with no text
pub const EMPTY_REPORT_FALLBACK: &str = "عذراً، لم يتم إنشاء التقرير بشكل صحيح.";

/// Shown when the service call fails for any reason
pub const SERVICE_ERROR_FALLBACK: &str =
    "حدث خطأ أثناء الاتصال بالذكاء الاصطناعي. يرجى التأكد من صلاحية المفتاح والمحاولة مرة أخرى.";

/// Clears the busy flag when the request finishes, however it finishes
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Single-flight report requester
#[derive(Debug)]
pub struct ReportRequester<S> {
    service: S,
    metadata: ReportMetadata,
    busy: AtomicBool,
}

impl<S: ReportService> ReportRequester<S> {
    /// Create requester over a service
    #[inline]
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            service,
            metadata: ReportMetadata::default(),
            busy: AtomicBool::new(false),
        }
    }

    /// With report metadata
    #[inline]
    #[must_use]
    pub fn with_metadata(mut self, metadata: ReportMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Request a strategic report for a roster snapshot
    ///
    /// Resolves to the service's text, [`EMPTY_REPORT_FALLBACK`] if that
    /// text is blank, or [`SERVICE_ERROR_FALLBACK`] if the call failed.
    ///
    /// # Errors
    /// Only `ReportError::InFlight`, when another request is outstanding
    pub async fn request_report(
        &self,
        records: &[WorkforceRecord],
        summary: &SummaryStats,
    ) -> Result<String, ReportError> {
        let _guard = BusyGuard::acquire(&self.busy).ok_or_else(|| {
            tracing::debug!("report request ignored, one already in flight");
            ReportError::InFlight
        })?;

        let prompt = match build_prompt(records, summary, &self.metadata) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::error!(error = %e, "failed to build report prompt");
                return Ok(SERVICE_ERROR_FALLBACK.to_string());
            }
        };

        tracing::info!(categories = records.len(), "requesting strategic report");

        match self.service.generate(&prompt).await {
            Ok(text) if text.trim().is_empty() => {
                tracing::warn!("service returned an empty report");
                Ok(EMPTY_REPORT_FALLBACK.to_string())
            }
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::error!(error = %e, "report generation failed");
                Ok(SERVICE_ERROR_FALLBACK.to_string())
            }
        }
    }

    /// Whether a request is outstanding
    #[inline]
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Report metadata
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &ReportMetadata {
        &self.metadata
    }

    /// Underlying service
    #[inline]
    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockReportService;
    use async_trait::async_trait;
    use mockall::predicate::function;
    use roster_core::{compute, default_collection};
    use std::sync::Arc;
    use tokio::sync::Notify;

    fn roster() -> (Vec<WorkforceRecord>, SummaryStats) {
        let records = default_collection();
        let summary = compute(&records);
        (records, summary)
    }

    #[tokio::test]
    async fn returns_service_text_verbatim() {
        let mut service = MockReportService::new();
        service
            .expect_generate()
            .with(function(|p: &str| p.contains("1689")))
            .times(1)
            .returning(|_| Ok("  # تقرير\n".to_string()));

        let requester = ReportRequester::new(service);
        let (records, summary) = roster();
        let text = requester.request_report(&records, &summary).await.unwrap();

        assert_eq!(text, "  # تقرير\n");
        assert!(!requester.is_busy());
    }

    #[tokio::test]
    async fn blank_text_becomes_fallback() {
        let mut service = MockReportService::new();
        service.expect_generate().returning(|_| Ok("   ".to_string()));

        let requester = ReportRequester::new(service);
        let (records, summary) = roster();
        assert_eq!(
            requester.request_report(&records, &summary).await.unwrap(),
            EMPTY_REPORT_FALLBACK
        );
    }

    #[tokio::test]
    async fn network_error_becomes_fallback() {
        let mut service = MockReportService::new();
        service
            .expect_generate()
            .returning(|_| Err(ReportError::Connection("connection refused".into())));

        let requester = ReportRequester::new(service);
        let (records, summary) = roster();
        assert_eq!(
            requester.request_report(&records, &summary).await.unwrap(),
            SERVICE_ERROR_FALLBACK
        );
        assert!(!requester.is_busy());
    }

    #[tokio::test]
    async fn metadata_reaches_prompt() {
        let mut service = MockReportService::new();
        service
            .expect_generate()
            .with(function(|p: &str| p.contains("Test General")))
            .returning(|_| Ok("ok".to_string()));

        let metadata = ReportMetadata {
            hospital: "Test General".into(),
            ..ReportMetadata::default()
        };
        let requester = ReportRequester::new(service).with_metadata(metadata);
        let (records, summary) = roster();
        assert_eq!(requester.request_report(&records, &summary).await.unwrap(), "ok");
    }

    /// Service that blocks until released
    struct GatedService {
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl ReportService for GatedService {
        async fn generate(&self, _prompt: &str) -> Result<String, ReportError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok("done".to_string())
        }
    }

    #[tokio::test]
    async fn second_request_while_busy_is_rejected() {
        let service = Arc::new(GatedService {
            entered: Notify::new(),
            release: Notify::new(),
        });
        let requester = Arc::new(ReportRequester::new(Arc::clone(&service)));
        let (records, summary) = roster();

        let first = {
            let requester = Arc::clone(&requester);
            let records = records.clone();
            tokio::spawn(async move { requester.request_report(&records, &summary).await })
        };

        service.entered.notified().await;
        assert!(requester.is_busy());
        assert_eq!(
            requester.request_report(&records, &summary).await,
            Err(ReportError::InFlight)
        );

        service.release.notify_one();
        assert_eq!(first.await.unwrap().unwrap(), "done");
        assert!(!requester.is_busy());

        service.release.notify_one();
        assert_eq!(requester.request_report(&records, &summary).await.unwrap(), "done");
    }

    #[tokio::test]
    async fn overlapping_requests_reach_service_once() {
        let requester = ReportRequester::new(GatedService {
            entered: Notify::new(),
            release: Notify::new(),
        });
        let (records, summary) = roster();

        let (first, second) = futures::future::join(
            requester.request_report(&records, &summary),
            async {
                requester.service().entered.notified().await;
                let rejected = requester.request_report(&records, &summary).await;
                requester.service().release.notify_one();
                rejected
            },
        )
        .await;

        assert_eq!(first.unwrap(), "done");
        assert_eq!(second, Err(ReportError::InFlight));
        assert!(!requester.is_busy());
    }
}
