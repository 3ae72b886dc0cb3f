use crate::modules::scheduling::adapters::outbound::activity_log_in_memory::InMemoryActivityLog;
use crate::modules::scheduling::adapters::outbound::employee_directory_in_memory::InMemoryEmployeeDirectory;
use crate::modules::scheduling::adapters::outbound::schedule_store::ScheduleStore;
use crate::modules::scheduling::adapters::outbound::schedule_store_in_memory::InMemoryScheduleStore;
use crate::modules::scheduling::core::clock_window::ClockWindow;
use crate::modules::scheduling::core::shift::Shift;
use crate::shared::core::clock::FixedClock;
use crate::shell::state::AppState;
use crate::tests::fixtures::shift::{june_10_at, june_schedule};
use std::sync::Arc;

pub const SCHEDULE_ID: &str = "sched-fixed-0001";

/// In-memory application wired around a fixed clock at 2025-06-10 08:50Z,
/// with E1 Alice, E2 Bob, E3 Carol in the directory and an empty June
/// schedule for ACME1.
pub struct TestApp {
    pub state: AppState,
    pub store: Arc<InMemoryScheduleStore>,
    pub activity_log: Arc<InMemoryActivityLog>,
    pub clock: Arc<FixedClock>,
}

pub struct TestAppBuilder {
    store: InMemoryScheduleStore,
    activity_log: InMemoryActivityLog,
    shifts: Vec<Shift>,
    with_schedule: bool,
    store_offline: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            store: InMemoryScheduleStore::new(),
            activity_log: InMemoryActivityLog::new(),
            shifts: Vec::new(),
            with_schedule: true,
            store_offline: false,
        }
    }

    pub fn shift(mut self, shift: Shift) -> Self {
        self.shifts.push(shift);
        self
    }

    pub fn without_schedule(mut self) -> Self {
        self.with_schedule = false;
        self
    }

    pub fn store_offline(mut self) -> Self {
        self.store_offline = true;
        self
    }

    pub async fn build(mut self) -> TestApp {
        if self.with_schedule {
            let mut schedule = june_schedule(SCHEDULE_ID, "ACME1");
            schedule.shifts = self.shifts;
            self.store
                .insert_schedule(schedule)
                .await
                .expect("store should accept the fixture schedule");
        }
        if self.store_offline {
            self.store.toggle_offline();
        }
        let store = Arc::new(self.store);
        let activity_log = Arc::new(self.activity_log);
        let directory = Arc::new(InMemoryEmployeeDirectory::with_employees([
            ("E1", "Alice"),
            ("E2", "Bob"),
            ("E3", "Carol"),
        ]));
        let clock = Arc::new(FixedClock::new(june_10_at(8, 50)));
        let state = AppState::new(
            store.clone(),
            activity_log.clone(),
            directory,
            clock.clone(),
            ClockWindow::default(),
        );
        TestApp {
            state,
            store,
            activity_log,
            clock,
        }
    }
}
