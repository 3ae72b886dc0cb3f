use crate::modules::scheduling::core::shift_update::ShiftPrecondition;
use crate::modules::scheduling::use_cases::manage_shifts::command::{ShiftDraft, ShiftPatch};
use chrono::{DateTime, Utc};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ShiftValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("end time must be after start time")]
    InvalidInterval,

    #[error("shift id {actual} does not match target {expected}")]
    IdMismatch { expected: String, actual: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidShift {
    pub employee_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

pub fn validate_draft(draft: &ShiftDraft) -> Result<ValidShift, ShiftValidationError> {
    validate_fields(draft.employee_id.as_deref(), draft.start, draft.end)
}

pub fn validate_patch(shift_id: &str, patch: &ShiftPatch) -> Result<ValidShift, ShiftValidationError> {
    if let Some(id) = patch.id.as_deref().filter(|id| *id != shift_id) {
        return Err(ShiftValidationError::IdMismatch {
            expected: shift_id.to_string(),
            actual: id.to_string(),
        });
    }
    validate_fields(patch.employee_id.as_deref(), patch.start, patch.end)
}

fn validate_fields(
    employee_id: Option<&str>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<ValidShift, ShiftValidationError> {
    let employee_id = employee_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(ShiftValidationError::MissingField("employee_id"))?;
    let start = start.ok_or(ShiftValidationError::MissingField("start"))?;
    let end = end.ok_or(ShiftValidationError::MissingField("end"))?;
    if end <= start {
        return Err(ShiftValidationError::InvalidInterval);
    }
    Ok(ValidShift {
        employee_id: employee_id.to_string(),
        start,
        end,
    })
}

/// A shift can be released only before anyone clocked in on it, and only once.
pub fn postable(owner: Option<&str>) -> ShiftPrecondition {
    let precondition = ShiftPrecondition::any()
        .posted(false)
        .clocked_in(false)
        .completed(false);
    match owner {
        Some(employee_id) => precondition.employee_id(employee_id),
        None => precondition,
    }
}

/// Only a scheduled shift that nobody has released can be reassigned or moved.
pub fn editable() -> ShiftPrecondition {
    ShiftPrecondition::any()
        .posted(false)
        .clocked_in(false)
        .completed(false)
}

/// The first claimant flips `posted` back to false, so later claims no longer match.
pub fn takeable() -> ShiftPrecondition {
    ShiftPrecondition::any().posted(true)
}
