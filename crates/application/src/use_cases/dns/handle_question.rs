use crate::ports::RecordStore;
use futures::FutureExt;
use redis_dns_domain::{Answer, Question};
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, debug_span, error, warn, Instrument};

/// Resolves one inbound question against the record store.
///
/// Never fails: an unreachable, slow or misbehaving store produces an empty
/// answer set, which the transport sends like any other "no such record".
pub struct HandleQuestionUseCase {
    store: Arc<dyn RecordStore>,
    timeout: Duration,
    max_cname_depth: usize,
    next_request_id: AtomicU64,
}

impl HandleQuestionUseCase {
    pub fn new(store: Arc<dyn RecordStore>, timeout: Duration, max_cname_depth: usize) -> Self {
        Self {
            store,
            timeout,
            max_cname_depth,
            next_request_id: AtomicU64::new(1),
        }
    }

    pub async fn execute(&self, question: &Question) -> Vec<Answer> {
        let request_id = self.next_request_id();
        let span = debug_span!(
            "dns_request",
            request_id = %request_id,
            name = %question.name,
            record_type = %question.record_type,
        );

        self.resolve(question).instrument(span).await
    }

    /// Correlation id for logs; carries no meaning for resolution.
    pub fn next_request_id(&self) -> String {
        format!("req_{}", self.next_request_id.fetch_add(1, Ordering::Relaxed))
    }

    async fn resolve(&self, question: &Question) -> Vec<Answer> {
        let start = Instant::now();
        debug!("Request received");

        let lookup = AssertUnwindSafe(self.store.lookup(question, self.max_cname_depth))
            .catch_unwind();

        let answers = match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(Ok(answers))) => answers,
            Ok(Ok(Err(e))) => {
                warn!(error = %e, "Error processing request");
                Vec::new()
            }
            Ok(Err(_)) => {
                error!("Record store lookup panicked");
                Vec::new()
            }
            Err(_) => {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "Record store lookup timed out");
                Vec::new()
            }
        };

        debug!(
            answers = answers.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Responding"
        );
        answers
    }
}
