// Shared test fixture for the AddShift command, backed by a JSON document.

use crate::modules::scheduling::use_cases::manage_shifts::command::{AddShift, ShiftDraft};
use chrono::{DateTime, Utc};
use serde::Deserialize;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct AddShiftDto {
    pub business_code: String,
    pub schedule_id: String,
    pub shift: ShiftDraft,
}

pub struct AddShiftBuilder {
    inner: AddShift,
}

impl Default for AddShiftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddShiftBuilder {
    pub fn new() -> Self {
        let dto: AddShiftDto = serde_json::from_str(include_str!("json/add_shift.json"))
            .expect("add_shift.json fixture must parse");

        Self {
            inner: AddShift {
                business_code: dto.business_code,
                schedule_id: dto.schedule_id,
                draft: dto.shift,
            },
        }
    }

    pub fn business_code(mut self, v: impl Into<String>) -> Self {
        self.inner.business_code = v.into();
        self
    }

    pub fn schedule_id(mut self, v: impl Into<String>) -> Self {
        self.inner.schedule_id = v.into();
        self
    }

    pub fn employee_id(mut self, v: Option<&str>) -> Self {
        self.inner.draft.employee_id = v.map(str::to_string);
        self
    }

    pub fn start(mut self, v: Option<DateTime<Utc>>) -> Self {
        self.inner.draft.start = v;
        self
    }

    pub fn end(mut self, v: Option<DateTime<Utc>>) -> Self {
        self.inner.draft.end = v;
        self
    }

    pub fn build(self) -> AddShift {
        self.inner
    }
}

#[cfg(test)]
mod add_shift_builder_tests {
    use super::*;
    use crate::tests::fixtures::shift::june_10_at;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = AddShiftBuilder::default().build();
        assert_eq!(built.business_code, "ACME1");
        assert_eq!(built.schedule_id, "sched-fixed-0001");
        assert_eq!(built.draft.employee_id.as_deref(), Some("E1"));
        assert_eq!(built.draft.start, Some(june_10_at(9, 0)));
        assert_eq!(built.draft.end, Some(june_10_at(17, 0)));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = AddShiftBuilder::new()
            .business_code("OTHER")
            .schedule_id("s-2")
            .employee_id(None)
            .start(Some(june_10_at(10, 0)))
            .end(None)
            .build();
        assert_eq!(custom.business_code, "OTHER");
        assert_eq!(custom.schedule_id, "s-2");
        assert_eq!(custom.draft.employee_id, None);
        assert_eq!(custom.draft.start, Some(june_10_at(10, 0)));
        assert_eq!(custom.draft.end, None);
    }
}
