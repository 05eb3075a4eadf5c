use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::db::FeedbackStore;

/// Read-through lookup of the feedback-form link.
///
/// Storage failures are logged and reported as "no link": the feedback
/// endpoint degrades to 404 instead of 500.
#[derive(Clone)]
pub struct FeedbackService {
    store: Arc<dyn FeedbackStore>,
    timeout: Duration,
}

impl FeedbackService {
    pub fn new(store: Arc<dyn FeedbackStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_feedback_form_url(&self) -> Option<String> {
        match tokio::time::timeout(self.timeout, self.store.first_feedback_link()).await {
            Ok(Ok(link)) => link.map(|l| l.link),
            Ok(Err(e)) => {
                warn!(error = %e, "Feedback link lookup failed");
                None
            }
            Err(_) => {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "Feedback link lookup timed out");
                None
            }
        }
    }
}
