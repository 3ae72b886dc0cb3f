use crate::modules::scheduling::adapters::outbound::schedule_store::ScheduleStore;
use crate::modules::scheduling::core::schedule::Schedule;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::modules::scheduling::use_cases::manage_schedules::command::CreateSchedule;
use crate::shared::core::clock::Clock;
use std::sync::Arc;
use uuid::Uuid;

pub struct ScheduleHandler<TStore>
where
    TStore: ScheduleStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
}

impl<TStore> ScheduleHandler<TStore>
where
    TStore: ScheduleStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn create_schedule(&self, command: CreateSchedule) -> Result<String, ApplicationError> {
        let schedule = Schedule::new(
            Uuid::now_v7().to_string(),
            command.business_code,
            command.year,
            command.month,
            command.created_by,
            self.clock.now(),
        )
        .map_err(|e| ApplicationError::Validation(e.to_string()))?;
        let schedule_id = schedule.id.clone();
        let (business_code, year, month) = (schedule.business_code.clone(), schedule.year, schedule.month);

        self.store.insert_schedule(schedule).await?;
        tracing::info!(%schedule_id, %business_code, year, month, "schedule created");
        Ok(schedule_id)
    }

    pub async fn list_schedules(
        &self,
        business_code: &str,
    ) -> Result<Vec<Schedule>, ApplicationError> {
        Ok(self.store.find_by_business(business_code).await?)
    }

    pub async fn schedule_for_month(
        &self,
        business_code: &str,
        year: i32,
        month: u32,
    ) -> Result<Schedule, ApplicationError> {
        self.store
            .find_for_month(business_code, year, month)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!("schedule {business_code} {year}-{month:02}"))
            })
    }
}
