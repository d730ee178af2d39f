//! Submission boundary
//!
//! The engine hands a fully-resolved record to an out-of-scope collaborator
//! (persistence, transport). The collaborator's retry and partial-failure
//! handling is its own concern; the engine guarantees the in-progress record
//! survives a failed submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Acknowledgment returned by a submission collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: String,
    pub accepted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            accepted_at: Utc::now(),
        }
    }
}

/// Failure reported by a submission collaborator
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct SubmissionError(pub String);

/// Contract for the collaborator that accepts a submitted record
pub trait SubmissionSink {
    /// Accept a plain, fully-resolved record (all nested rows inlined)
    fn submit(&mut self, payload: &serde_json::Value)
        -> Result<SubmissionReceipt, SubmissionError>;
}

/// The stub this repository ships: logs the record and acknowledges.
/// Every "submit" action is a local no-op beyond that.
#[derive(Debug, Default)]
pub struct LoggingSink;

impl SubmissionSink for LoggingSink {
    fn submit(
        &mut self,
        payload: &serde_json::Value,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let receipt = SubmissionReceipt::new(Uuid::new_v4().to_string());
        tracing::info!(reference = %receipt.reference, %payload, "form submitted");
        Ok(receipt)
    }
}
