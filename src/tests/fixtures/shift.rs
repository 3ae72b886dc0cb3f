// Shared shift fixtures.
//
// Defaults describe the reference shift: employee E1 (Alice) working
// 2025-06-10 from 09:00 to 17:00 UTC.

use crate::modules::scheduling::core::schedule::Schedule;
use crate::modules::scheduling::core::shift::Shift;
use chrono::{DateTime, TimeZone, Utc};

pub fn june_10_at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 10, hour, minute, 0)
        .single()
        .expect("valid fixture instant")
}

pub struct ShiftBuilder {
    inner: Shift,
}

impl Default for ShiftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ShiftBuilder {
    pub fn new() -> Self {
        Self {
            inner: Shift::assigned(
                "sh-fixed-0001",
                "E1",
                "Alice",
                june_10_at(9, 0),
                june_10_at(17, 0),
            ),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn employee(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.inner.employee_id = Some(id.into());
        self.inner.employee_name = Some(name.into());
        self
    }

    pub fn start(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start = v;
        self
    }

    pub fn end(mut self, v: DateTime<Utc>) -> Self {
        self.inner.end = v;
        self
    }

    pub fn posted(mut self) -> Self {
        self.inner.posted = true;
        self.inner.employee_id = None;
        self.inner.employee_name = None;
        self
    }

    pub fn clocked_in(mut self, at: DateTime<Utc>) -> Self {
        self.inner.clocked_in = true;
        self.inner.clocked_in_at = Some(at);
        self
    }

    pub fn completed(mut self, at: DateTime<Utc>) -> Self {
        self.inner.clocked_in = false;
        self.inner.completed = true;
        self.inner.clocked_out_at = Some(at);
        self
    }

    pub fn build(self) -> Shift {
        self.inner
    }
}

pub fn june_schedule(id: &str, business_code: &str) -> Schedule {
    Schedule::new(id, business_code, 2025, 6, "M1", june_10_at(0, 0))
        .expect("valid fixture period")
}

#[cfg(test)]
mod shift_builder_tests {
    use super::*;
    use crate::modules::scheduling::core::shift::ShiftState;
    use rstest::rstest;

    #[rstest]
    fn default_builds_the_reference_shift() {
        let shift = ShiftBuilder::default().build();
        assert_eq!(shift.id, "sh-fixed-0001");
        assert_eq!(shift.employee_id.as_deref(), Some("E1"));
        assert_eq!(shift.start, june_10_at(9, 0));
        assert_eq!(shift.end, june_10_at(17, 0));
        assert_eq!(shift.state(), ShiftState::Scheduled);
    }

    #[rstest]
    fn setters_override_fields() {
        let shift = ShiftBuilder::new()
            .id("sh-2")
            .employee("E2", "Bob")
            .start(june_10_at(12, 0))
            .end(june_10_at(20, 0))
            .clocked_in(june_10_at(12, 5))
            .build();
        assert_eq!(shift.id, "sh-2");
        assert!(shift.is_owned_by("E2"));
        assert_eq!(shift.state(), ShiftState::Active);

        let posted = ShiftBuilder::new().posted().build();
        assert!(posted.posted);
        assert_eq!(posted.employee_id, None);
    }
}
