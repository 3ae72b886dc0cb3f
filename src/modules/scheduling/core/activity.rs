use crate::modules::scheduling::core::shift::Shift;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable audit entry written for every accepted clock transition.
///
/// It copies the shift window and the assignee at the time of the event so it
/// stays meaningful after the shift is edited, traded or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    pub shift_id: String,
    pub shift_start: DateTime<Utc>,
    pub shift_end: DateTime<Utc>,
    pub business_code: String,
    pub employee_id: String,
    pub employee_name: String,
    pub clock_in: bool,
    pub timestamp: DateTime<Utc>,
}

impl ActivityRecord {
    pub fn for_transition(
        id: impl Into<String>,
        shift: &Shift,
        business_code: impl Into<String>,
        employee_id: impl Into<String>,
        clock_in: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            shift_id: shift.id.clone(),
            shift_start: shift.start,
            shift_end: shift.end,
            business_code: business_code.into(),
            employee_id: employee_id.into(),
            employee_name: shift.employee_name.clone().unwrap_or_default(),
            clock_in,
            timestamp,
        }
    }
}

#[cfg(test)]
mod activity_record_tests {
    use super::*;
    use crate::tests::fixtures::shift::{ShiftBuilder, june_10_at};
    use rstest::rstest;

    #[rstest]
    fn it_should_copy_the_shift_window_and_assignee() {
        let shift = ShiftBuilder::new().id("sh-1").build();
        let record =
            ActivityRecord::for_transition("a-1", &shift, "ACME1", "E1", true, june_10_at(8, 35));

        assert_eq!(record.shift_id, "sh-1");
        assert_eq!(record.shift_start, shift.start);
        assert_eq!(record.shift_end, shift.end);
        assert_eq!(record.employee_name, "Alice");
        assert!(record.clock_in);
        assert_eq!(record.timestamp, june_10_at(8, 35));
    }
}
