use crate::modules::scheduling::core::activity::ActivityRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivityLogError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Append-only store of clock events. Records are never updated or removed.
#[async_trait]
pub trait ActivityLog: Send + Sync {
    async fn record(&self, record: ActivityRecord) -> Result<(), ActivityLogError>;

    async fn list_by_business(
        &self,
        business_code: &str,
    ) -> Result<Vec<ActivityRecord>, ActivityLogError>;
}
