// Element-level mutations of an embedded shift.
//
// Purpose
// - Describe one atomic update of one shift inside a schedule document, the
//   way a document store expresses `$set` on a matched array element.
//
// Responsibilities
// - ShiftPrecondition: what the element must still look like at write time.
// - ShiftUpdate: which fields are set when the precondition holds.
//
// Stores apply both under a single document write; callers never write the
// shift array back themselves.

use crate::modules::scheduling::core::shift::Shift;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftPrecondition {
    pub employee_id: Option<String>,
    pub posted: Option<bool>,
    pub clocked_in: Option<bool>,
    pub completed: Option<bool>,
    pub window: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

impl ShiftPrecondition {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn employee_id(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }

    pub fn posted(mut self, posted: bool) -> Self {
        self.posted = Some(posted);
        self
    }

    pub fn clocked_in(mut self, clocked_in: bool) -> Self {
        self.clocked_in = Some(clocked_in);
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Expect the shift to still span exactly `start..end`.
    pub fn window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.window = Some((start, end));
        self
    }

    pub fn matches(&self, shift: &Shift) -> bool {
        self.employee_id
            .as_deref()
            .is_none_or(|employee_id| shift.is_owned_by(employee_id))
            && self.posted.is_none_or(|posted| shift.posted == posted)
            && self
                .clocked_in
                .is_none_or(|clocked_in| shift.clocked_in == clocked_in)
            && self
                .completed
                .is_none_or(|completed| shift.completed == completed)
            && self
                .window
                .is_none_or(|(start, end)| shift.start == start && shift.end == end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftUpdate {
    Edit {
        employee_id: String,
        employee_name: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    Post,
    Take {
        employee_id: String,
        employee_name: String,
    },
    ClockIn {
        at: DateTime<Utc>,
    },
    ClockOut {
        at: DateTime<Utc>,
    },
}

impl ShiftUpdate {
    /// Apply the update in place. Returns whether any field actually changed.
    /// The shift `id` is never touched.
    pub fn apply(&self, shift: &mut Shift) -> bool {
        let before = shift.clone();
        match self {
            ShiftUpdate::Edit {
                employee_id,
                employee_name,
                start,
                end,
            } => {
                shift.employee_id = Some(employee_id.clone());
                shift.employee_name = Some(employee_name.clone());
                shift.start = *start;
                shift.end = *end;
            }
            ShiftUpdate::Post => {
                shift.posted = true;
                shift.employee_id = None;
                shift.employee_name = None;
            }
            ShiftUpdate::Take {
                employee_id,
                employee_name,
            } => {
                shift.posted = false;
                shift.employee_id = Some(employee_id.clone());
                shift.employee_name = Some(employee_name.clone());
            }
            ShiftUpdate::ClockIn { at } => {
                shift.clocked_in = true;
                shift.clocked_in_at = Some(*at);
            }
            ShiftUpdate::ClockOut { at } => {
                shift.clocked_in = false;
                shift.completed = true;
                shift.clocked_out_at = Some(*at);
            }
        }
        *shift != before
    }
}
