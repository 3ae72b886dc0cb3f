use crate::modules::scheduling::adapters::outbound::activity_log::ActivityLog;
use crate::modules::scheduling::adapters::outbound::schedule_store::{
    ScheduleStore, ShiftSelector,
};
use crate::modules::scheduling::core::activity::ActivityRecord;
use crate::modules::scheduling::core::clock_window::ClockWindow;
use crate::modules::scheduling::core::shift::Shift;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::modules::scheduling::use_cases::log_activity::command::LogActivity;
use crate::modules::scheduling::use_cases::log_activity::decide::decide_clock;
use crate::modules::scheduling::use_cases::log_activity::decision::{ClockDecision, ClockRejection};
use crate::shared::core::clock::Clock;
use std::sync::Arc;
use uuid::Uuid;

pub struct ClockHandler<TStore, TLog>
where
    TStore: ScheduleStore + Send + Sync + 'static,
    TLog: ActivityLog + Send + Sync + 'static,
{
    store: Arc<TStore>,
    activity_log: Arc<TLog>,
    clock: Arc<dyn Clock>,
    window: ClockWindow,
}

impl<TStore, TLog> ClockHandler<TStore, TLog>
where
    TStore: ScheduleStore + Send + Sync + 'static,
    TLog: ActivityLog + Send + Sync + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        activity_log: Arc<TLog>,
        clock: Arc<dyn Clock>,
        window: ClockWindow,
    ) -> Self {
        Self {
            store,
            activity_log,
            clock,
            window,
        }
    }

    /// Apply a clock-in or clock-out and append the matching activity record.
    ///
    /// The shift update is conditional on the state the decision was taken
    /// against. A concurrent transition that lands first leaves nothing to
    /// modify, and no record is written.
    pub async fn log_activity(&self, command: LogActivity) -> Result<ActivityRecord, ApplicationError> {
        let schedule = self
            .store
            .find_by_shift_id(&command.business_code, &command.shift_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("shift {}", command.shift_id)))?;
        let shift = schedule
            .shift(&command.shift_id)
            .ok_or_else(|| ApplicationError::not_found(format!("shift {}", command.shift_id)))?;

        let now = self.clock.now();
        let (precondition, update) =
            match decide_clock(shift, &command.employee_id, command.clock_in, now, self.window) {
                ClockDecision::Accepted {
                    precondition,
                    update,
                } => (precondition, update),
                ClockDecision::Rejected { reason } => {
                    tracing::warn!(shift_id = %command.shift_id, employee_id = %command.employee_id, %reason, "clock rejected");
                    return Err(reason.into());
                }
            };

        let selector = ShiftSelector::by_id(&command.business_code, &command.shift_id)
            .in_schedule(&schedule.id)
            .expecting(precondition);
        let outcome = self.store.update_shift(&selector, &update).await?;
        if !outcome.is_modified() {
            tracing::warn!(shift_id = %command.shift_id, employee_id = %command.employee_id, "shift changed before clock update");
            return Err(ClockRejection::ShiftChanged.into());
        }

        let record = ActivityRecord::for_transition(
            Uuid::now_v7().to_string(),
            shift,
            &command.business_code,
            &command.employee_id,
            command.clock_in,
            now,
        );
        self.activity_log.record(record.clone()).await?;
        tracing::info!(
            shift_id = %record.shift_id,
            employee_id = %record.employee_id,
            clock_in = record.clock_in,
            "activity logged"
        );
        Ok(record)
    }

    /// The employee's next scheduled shift that has not started yet.
    pub async fn upcoming_shift(
        &self,
        business_code: &str,
        employee_id: &str,
    ) -> Result<Option<Shift>, ApplicationError> {
        let now = self.clock.now();
        let schedules = self.store.find_by_business(business_code).await?;
        Ok(schedules
            .into_iter()
            .flat_map(|schedule| schedule.shifts)
            .filter(|shift| shift.is_upcoming_for(employee_id, now))
            .min_by_key(|shift| shift.start))
    }

    pub async fn activities(
        &self,
        business_code: &str,
    ) -> Result<Vec<ActivityRecord>, ApplicationError> {
        Ok(self.activity_log.list_by_business(business_code).await?)
    }
}
