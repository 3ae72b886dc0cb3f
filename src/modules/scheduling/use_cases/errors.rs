use crate::modules::scheduling::adapters::outbound::activity_log::ActivityLogError;
use crate::modules::scheduling::adapters::outbound::employee_directory::DirectoryError;
use crate::modules::scheduling::adapters::outbound::schedule_store::ScheduleStoreError;
use crate::modules::scheduling::use_cases::log_activity::decision::ClockRejection;
use crate::modules::scheduling::use_cases::manage_shifts::decide::ShiftValidationError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    State(#[from] ClockRejection),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl ApplicationError {
    pub fn not_found(what: impl Into<String>) -> Self {
        ApplicationError::NotFound(what.into())
    }
}

impl From<ScheduleStoreError> for ApplicationError {
    fn from(error: ScheduleStoreError) -> Self {
        match error {
            ScheduleStoreError::Duplicate { .. } => ApplicationError::Conflict(error.to_string()),
            ScheduleStoreError::Backend(message) => ApplicationError::StoreUnavailable(message),
        }
    }
}

impl From<ShiftValidationError> for ApplicationError {
    fn from(error: ShiftValidationError) -> Self {
        ApplicationError::Validation(error.to_string())
    }
}

impl From<ActivityLogError> for ApplicationError {
    fn from(error: ActivityLogError) -> Self {
        match error {
            ActivityLogError::Backend(message) => ApplicationError::StoreUnavailable(message),
        }
    }
}

impl From<DirectoryError> for ApplicationError {
    fn from(error: DirectoryError) -> Self {
        match error {
            DirectoryError::Backend(message) => ApplicationError::StoreUnavailable(message),
        }
    }
}
