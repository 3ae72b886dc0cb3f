use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Caller-supplied shift fields. Every field is optional on the wire and
/// checked by `decide`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShiftDraft {
    pub employee_id: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Replacement fields for an existing shift. `id`, when given, must name the
/// shift being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShiftPatch {
    pub id: Option<String>,
    pub employee_id: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddShift {
    pub business_code: String,
    pub schedule_id: String,
    pub draft: ShiftDraft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditShift {
    pub business_code: String,
    pub schedule_id: String,
    pub shift_id: String,
    pub patch: ShiftPatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteShift {
    pub business_code: String,
    pub schedule_id: String,
    pub shift_id: String,
}

/// `owner` restricts posting to the shift's current assignee; managers post
/// on anyone's behalf with `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostShift {
    pub business_code: String,
    pub shift_id: String,
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakeShift {
    pub business_code: String,
    pub shift_id: String,
    pub employee_id: String,
}
