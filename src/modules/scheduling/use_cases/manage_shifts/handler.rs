use crate::modules::scheduling::adapters::outbound::employee_directory::EmployeeDirectory;
use crate::modules::scheduling::adapters::outbound::schedule_store::{
    ScheduleStore, ShiftSelector,
};
use crate::modules::scheduling::core::shift::Shift;
use crate::modules::scheduling::core::shift_update::ShiftUpdate;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::modules::scheduling::use_cases::manage_shifts::command::{
    AddShift, DeleteShift, EditShift, PostShift, TakeShift,
};
use crate::modules::scheduling::use_cases::manage_shifts::decide::{
    editable, postable, takeable, validate_draft, validate_patch,
};
use std::sync::Arc;
use uuid::Uuid;

pub struct ShiftLifecycleHandler<TStore, TDirectory>
where
    TStore: ScheduleStore + Send + Sync + 'static,
    TDirectory: EmployeeDirectory + Send + Sync + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
}

impl<TStore, TDirectory> ShiftLifecycleHandler<TStore, TDirectory>
where
    TStore: ScheduleStore + Send + Sync + 'static,
    TDirectory: EmployeeDirectory + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, directory: Arc<TDirectory>) -> Self {
        Self { store, directory }
    }

    pub async fn add_shift(&self, command: AddShift) -> Result<String, ApplicationError> {
        let valid = validate_draft(&command.draft)?;
        let employee_name = self.employee_name(&valid.employee_id).await?;
        let shift = Shift::assigned(
            Uuid::now_v7().to_string(),
            valid.employee_id,
            employee_name,
            valid.start,
            valid.end,
        );
        let shift_id = shift.id.clone();

        let outcome = self
            .store
            .push_shift(&command.business_code, &command.schedule_id, shift)
            .await?;
        if !outcome.is_modified() {
            return Err(ApplicationError::not_found(format!(
                "schedule {}",
                command.schedule_id
            )));
        }
        tracing::info!(%shift_id, schedule_id = %command.schedule_id, "shift added");
        Ok(shift_id)
    }

    pub async fn edit_shift(&self, command: EditShift) -> Result<(), ApplicationError> {
        let valid = validate_patch(&command.shift_id, &command.patch)?;
        let employee_name = self.employee_name(&valid.employee_id).await?;
        let selector = ShiftSelector::by_id(&command.business_code, &command.shift_id)
            .in_schedule(&command.schedule_id)
            .expecting(editable());
        let update = ShiftUpdate::Edit {
            employee_id: valid.employee_id,
            employee_name,
            start: valid.start,
            end: valid.end,
        };

        let outcome = self.store.update_shift(&selector, &update).await?;
        if !outcome.is_matched() {
            return Err(ApplicationError::not_found(format!(
                "editable shift {}",
                command.shift_id
            )));
        }
        tracing::info!(shift_id = %command.shift_id, modified = outcome.is_modified(), "shift edited");
        Ok(())
    }

    pub async fn delete_shift(&self, command: DeleteShift) -> Result<(), ApplicationError> {
        let selector = ShiftSelector::by_id(&command.business_code, &command.shift_id)
            .in_schedule(&command.schedule_id);
        let outcome = self.store.pull_shift(&selector).await?;
        if !outcome.is_modified() {
            return Err(ApplicationError::not_found(format!(
                "shift {}",
                command.shift_id
            )));
        }
        tracing::info!(shift_id = %command.shift_id, "shift deleted");
        Ok(())
    }

    pub async fn post_shift(&self, command: PostShift) -> Result<(), ApplicationError> {
        let selector = ShiftSelector::by_id(&command.business_code, &command.shift_id)
            .expecting(postable(command.owner.as_deref()));
        let outcome = self.store.update_shift(&selector, &ShiftUpdate::Post).await?;
        if !outcome.is_modified() {
            return Err(ApplicationError::not_found(format!(
                "postable shift {}",
                command.shift_id
            )));
        }
        tracing::info!(shift_id = %command.shift_id, business_code = %command.business_code, "shift posted");
        Ok(())
    }

    pub async fn take_shift(&self, command: TakeShift) -> Result<(), ApplicationError> {
        let employee_name = self.employee_name(&command.employee_id).await?;
        let selector = ShiftSelector::by_id(&command.business_code, &command.shift_id)
            .expecting(takeable());
        let update = ShiftUpdate::Take {
            employee_id: command.employee_id.clone(),
            employee_name,
        };

        let outcome = self.store.update_shift(&selector, &update).await?;
        if !outcome.is_modified() {
            tracing::warn!(shift_id = %command.shift_id, employee_id = %command.employee_id, "shift no longer posted");
            return Err(ApplicationError::not_found(format!(
                "posted shift {}",
                command.shift_id
            )));
        }
        tracing::info!(shift_id = %command.shift_id, employee_id = %command.employee_id, "shift taken");
        Ok(())
    }

    pub async fn posted_shifts(&self, business_code: &str) -> Result<Vec<Shift>, ApplicationError> {
        let schedules = self.store.find_by_business(business_code).await?;
        Ok(schedules
            .into_iter()
            .flat_map(|schedule| schedule.shifts)
            .filter(|shift| shift.posted)
            .collect())
    }

    pub async fn employee_shifts(
        &self,
        business_code: &str,
        employee_id: &str,
    ) -> Result<Vec<Shift>, ApplicationError> {
        let schedules = self.store.find_by_business(business_code).await?;
        let mut shifts: Vec<Shift> = schedules
            .into_iter()
            .flat_map(|schedule| schedule.shifts)
            .filter(|shift| shift.is_owned_by(employee_id))
            .collect();
        shifts.sort_by_key(|shift| shift.start);
        Ok(shifts)
    }

    async fn employee_name(&self, employee_id: &str) -> Result<String, ApplicationError> {
        self.directory
            .find_employee_name(employee_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("employee {employee_id}")))
    }
}
