use crate::modules::scheduling::adapters::outbound::activity_log_in_memory::InMemoryActivityLog;
use crate::modules::scheduling::adapters::outbound::employee_directory_in_memory::InMemoryEmployeeDirectory;
use crate::modules::scheduling::adapters::outbound::schedule_store_in_memory::InMemoryScheduleStore;
use crate::modules::scheduling::core::clock_window::ClockWindow;
use crate::modules::scheduling::use_cases::log_activity::handler::ClockHandler;
use crate::modules::scheduling::use_cases::manage_schedules::handler::ScheduleHandler;
use crate::modules::scheduling::use_cases::manage_shifts::handler::ShiftLifecycleHandler;
use crate::shared::core::clock::Clock;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub schedule_handler: Arc<ScheduleHandler<InMemoryScheduleStore>>,
    pub shift_handler: Arc<ShiftLifecycleHandler<InMemoryScheduleStore, InMemoryEmployeeDirectory>>,
    pub clock_handler: Arc<ClockHandler<InMemoryScheduleStore, InMemoryActivityLog>>,
}

impl AppState {
    pub fn new(
        store: Arc<InMemoryScheduleStore>,
        activity_log: Arc<InMemoryActivityLog>,
        directory: Arc<InMemoryEmployeeDirectory>,
        clock: Arc<dyn Clock>,
        window: ClockWindow,
    ) -> Self {
        Self {
            schedule_handler: Arc::new(ScheduleHandler::new(store.clone(), clock.clone())),
            shift_handler: Arc::new(ShiftLifecycleHandler::new(store.clone(), directory)),
            clock_handler: Arc::new(ClockHandler::new(store, activity_log, clock, window)),
        }
    }
}
