use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shift embedded in a schedule document.
///
/// `employee_id` is only empty while the shift is posted and waiting to be
/// claimed. `employee_name` is a copy taken when the assignment changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: String,
    pub employee_id: Option<String>,
    pub employee_name: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub clocked_in: bool,
    pub clocked_in_at: Option<DateTime<Utc>>,
    pub clocked_out_at: Option<DateTime<Utc>>,
    pub completed: bool,
    pub posted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftState {
    Scheduled,
    Active,
    Done,
}

impl Shift {
    pub fn assigned(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: Some(employee_id.into()),
            employee_name: Some(employee_name.into()),
            start,
            end,
            clocked_in: false,
            clocked_in_at: None,
            clocked_out_at: None,
            completed: false,
            posted: false,
        }
    }

    pub fn state(&self) -> ShiftState {
        if self.completed {
            ShiftState::Done
        } else if self.clocked_in {
            ShiftState::Active
        } else {
            ShiftState::Scheduled
        }
    }

    pub fn is_owned_by(&self, employee_id: &str) -> bool {
        self.employee_id.as_deref() == Some(employee_id)
    }

    /// Future, untouched and assigned to `employee_id`.
    pub fn is_upcoming_for(&self, employee_id: &str, now: DateTime<Utc>) -> bool {
        self.is_owned_by(employee_id)
            && self.state() == ShiftState::Scheduled
            && self.start >= now
    }
}
