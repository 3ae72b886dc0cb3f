// Schedule document store port.
//
// Purpose
// - Persist one schedule document per (business_code, year, month) with its
//   embedded shift array.
// - Offer element-level primitives that mutate exactly one shift inside one
//   document atomically, conditioned on the shift's current values.
//
// Boundaries
// - Every lookup is scoped by business code.
// - Update results mirror a document store: `matched` documents whose target
//   element satisfied the selector, `modified` documents that actually changed.

use crate::modules::scheduling::core::schedule::Schedule;
use crate::modules::scheduling::core::shift::Shift;
use crate::modules::scheduling::core::shift_update::{ShiftPrecondition, ShiftUpdate};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleStoreError {
    #[error("schedule already exists for {business_code} {year}-{month:02}")]
    Duplicate {
        business_code: String,
        year: i32,
        month: u32,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

impl UpdateOutcome {
    pub const NONE: UpdateOutcome = UpdateOutcome {
        matched: 0,
        modified: 0,
    };

    pub fn is_modified(&self) -> bool {
        self.modified > 0
    }

    pub fn is_matched(&self) -> bool {
        self.matched > 0
    }
}

/// Addresses one shift element. `schedule_id` narrows the search to a single
/// document; without it the shift id alone is used, which is unique across
/// schedules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftSelector {
    pub business_code: String,
    pub schedule_id: Option<String>,
    pub shift_id: String,
    pub precondition: ShiftPrecondition,
}

impl ShiftSelector {
    pub fn by_id(business_code: impl Into<String>, shift_id: impl Into<String>) -> Self {
        Self {
            business_code: business_code.into(),
            schedule_id: None,
            shift_id: shift_id.into(),
            precondition: ShiftPrecondition::any(),
        }
    }

    pub fn in_schedule(mut self, schedule_id: impl Into<String>) -> Self {
        self.schedule_id = Some(schedule_id.into());
        self
    }

    pub fn expecting(mut self, precondition: ShiftPrecondition) -> Self {
        self.precondition = precondition;
        self
    }

    pub fn selects_document(&self, schedule: &Schedule) -> bool {
        schedule.business_code == self.business_code
            && self
                .schedule_id
                .as_deref()
                .is_none_or(|schedule_id| schedule.id == schedule_id)
    }

    pub fn selects_shift(&self, shift: &Shift) -> bool {
        shift.id == self.shift_id && self.precondition.matches(shift)
    }
}

#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn insert_schedule(&self, schedule: Schedule) -> Result<(), ScheduleStoreError>;

    async fn find_by_business(
        &self,
        business_code: &str,
    ) -> Result<Vec<Schedule>, ScheduleStoreError>;

    async fn find_for_month(
        &self,
        business_code: &str,
        year: i32,
        month: u32,
    ) -> Result<Option<Schedule>, ScheduleStoreError>;

    async fn find_by_id(
        &self,
        business_code: &str,
        schedule_id: &str,
    ) -> Result<Option<Schedule>, ScheduleStoreError>;

    async fn find_by_shift_id(
        &self,
        business_code: &str,
        shift_id: &str,
    ) -> Result<Option<Schedule>, ScheduleStoreError>;

    /// Append a shift to the document named by `business_code`/`schedule_id`.
    async fn push_shift(
        &self,
        business_code: &str,
        schedule_id: &str,
        shift: Shift,
    ) -> Result<UpdateOutcome, ScheduleStoreError>;

    async fn update_shift(
        &self,
        selector: &ShiftSelector,
        update: &ShiftUpdate,
    ) -> Result<UpdateOutcome, ScheduleStoreError>;

    async fn pull_shift(&self, selector: &ShiftSelector)
    -> Result<UpdateOutcome, ScheduleStoreError>;
}
