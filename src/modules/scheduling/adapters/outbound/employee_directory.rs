// Account lookup the scheduling core depends on.
//
// Only the display name is needed: it is copied onto shifts when an
// assignment changes.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn find_employee_name(&self, employee_id: &str)
    -> Result<Option<String>, DirectoryError>;
}
