// In memory implementation of the ScheduleStore port.
//
// Purpose
// - Support handler tests and local development without a document database.
//
// Responsibilities
// - Keep schedule documents in a map keyed by schedule id.
// - Enforce the (business_code, year, month) uniqueness under the write lock.
// - Apply element-level updates in place while holding the write lock, so two
//   writers touching different shifts of one document never lose each other's
//   changes and two writers racing on one shift see each other's result.

use crate::modules::scheduling::adapters::outbound::schedule_store::{
    ScheduleStore, ScheduleStoreError, ShiftSelector, UpdateOutcome,
};
use crate::modules::scheduling::core::schedule::Schedule;
use crate::modules::scheduling::core::shift::Shift;
use crate::modules::scheduling::core::shift_update::ShiftUpdate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryScheduleStore {
    documents: RwLock<HashMap<String, Schedule>>,
    is_offline: bool,
    delay_update_ms: AtomicU64,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleep before every write so concurrent callers finish their reads first.
    pub fn set_delay_update_ms(&self, ms: u64) {
        self.delay_update_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), ScheduleStoreError> {
        if self.is_offline {
            return Err(ScheduleStoreError::Backend("Schedule store offline".into()));
        }
        Ok(())
    }

    async fn delay_update(&self) {
        let ms = self.delay_update_ms.load(Ordering::SeqCst);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

#[async_trait::async_trait]
impl ScheduleStore for InMemoryScheduleStore {
    async fn insert_schedule(&self, schedule: Schedule) -> Result<(), ScheduleStoreError> {
        self.ensure_online()?;
        let mut guard = self.documents.write().await;
        if guard
            .values()
            .any(|existing| existing.is_period(&schedule.business_code, schedule.year, schedule.month))
        {
            return Err(ScheduleStoreError::Duplicate {
                business_code: schedule.business_code,
                year: schedule.year,
                month: schedule.month,
            });
        }
        guard.insert(schedule.id.clone(), schedule);
        Ok(())
    }

    async fn find_by_business(
        &self,
        business_code: &str,
    ) -> Result<Vec<Schedule>, ScheduleStoreError> {
        self.ensure_online()?;
        let guard = self.documents.read().await;
        let mut schedules: Vec<Schedule> = guard
            .values()
            .filter(|schedule| schedule.business_code == business_code)
            .cloned()
            .collect();
        schedules.sort_by_key(|schedule| (schedule.year, schedule.month));
        Ok(schedules)
    }

    async fn find_for_month(
        &self,
        business_code: &str,
        year: i32,
        month: u32,
    ) -> Result<Option<Schedule>, ScheduleStoreError> {
        self.ensure_online()?;
        let guard = self.documents.read().await;
        Ok(guard
            .values()
            .find(|schedule| schedule.is_period(business_code, year, month))
            .cloned())
    }

    async fn find_by_id(
        &self,
        business_code: &str,
        schedule_id: &str,
    ) -> Result<Option<Schedule>, ScheduleStoreError> {
        self.ensure_online()?;
        let guard = self.documents.read().await;
        Ok(guard
            .get(schedule_id)
            .filter(|schedule| schedule.business_code == business_code)
            .cloned())
    }

    async fn find_by_shift_id(
        &self,
        business_code: &str,
        shift_id: &str,
    ) -> Result<Option<Schedule>, ScheduleStoreError> {
        self.ensure_online()?;
        let guard = self.documents.read().await;
        Ok(guard
            .values()
            .find(|schedule| {
                schedule.business_code == business_code && schedule.shift(shift_id).is_some()
            })
            .cloned())
    }

    async fn push_shift(
        &self,
        business_code: &str,
        schedule_id: &str,
        shift: Shift,
    ) -> Result<UpdateOutcome, ScheduleStoreError> {
        self.ensure_online()?;
        self.delay_update().await;
        let mut guard = self.documents.write().await;
        match guard
            .get_mut(schedule_id)
            .filter(|schedule| schedule.business_code == business_code)
        {
            Some(schedule) => {
                schedule.shifts.push(shift);
                Ok(UpdateOutcome {
                    matched: 1,
                    modified: 1,
                })
            }
            None => Ok(UpdateOutcome::NONE),
        }
    }

    async fn update_shift(
        &self,
        selector: &ShiftSelector,
        update: &ShiftUpdate,
    ) -> Result<UpdateOutcome, ScheduleStoreError> {
        self.ensure_online()?;
        self.delay_update().await;
        let mut guard = self.documents.write().await;
        let target = guard
            .values_mut()
            .filter(|schedule| selector.selects_document(schedule))
            .find_map(|schedule| {
                schedule
                    .shifts
                    .iter_mut()
                    .find(|shift| selector.selects_shift(shift))
            });
        match target {
            Some(shift) => {
                let changed = update.apply(shift);
                Ok(UpdateOutcome {
                    matched: 1,
                    modified: u64::from(changed),
                })
            }
            None => Ok(UpdateOutcome::NONE),
        }
    }

    async fn pull_shift(
        &self,
        selector: &ShiftSelector,
    ) -> Result<UpdateOutcome, ScheduleStoreError> {
        self.ensure_online()?;
        self.delay_update().await;
        let mut guard = self.documents.write().await;
        for schedule in guard
            .values_mut()
            .filter(|schedule| selector.selects_document(schedule))
        {
            let before = schedule.shifts.len();
            schedule.shifts.retain(|shift| !selector.selects_shift(shift));
            if schedule.shifts.len() != before {
                return Ok(UpdateOutcome {
                    matched: 1,
                    modified: 1,
                });
            }
        }
        Ok(UpdateOutcome::NONE)
    }
}
