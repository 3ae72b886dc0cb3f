use crate::modules::scheduling::adapters::outbound::activity_log_in_memory::InMemoryActivityLog;
use crate::modules::scheduling::adapters::outbound::employee_directory_in_memory::InMemoryEmployeeDirectory;
use crate::modules::scheduling::adapters::outbound::schedule_store::ScheduleStore;
use crate::modules::scheduling::adapters::outbound::schedule_store_in_memory::InMemoryScheduleStore;
use crate::modules::scheduling::core::clock_window::ClockWindow;
use crate::modules::scheduling::core::shift::ShiftState;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::modules::scheduling::use_cases::log_activity::command::LogActivity;
use crate::modules::scheduling::use_cases::log_activity::decide::decide_clock;
use crate::modules::scheduling::use_cases::log_activity::decision::{ClockDecision, ClockRejection};
use crate::modules::scheduling::use_cases::log_activity::handler::ClockHandler;
use crate::modules::scheduling::use_cases::manage_schedules::command::CreateSchedule;
use crate::modules::scheduling::use_cases::manage_schedules::handler::ScheduleHandler;
use crate::modules::scheduling::use_cases::manage_shifts::handler::ShiftLifecycleHandler;
use crate::shared::core::clock::FixedClock;
use crate::tests::fixtures::commands::add_shift::AddShiftBuilder;
use crate::tests::fixtures::shift::june_10_at;
use std::sync::Arc;

async fn shift_state(store: &InMemoryScheduleStore, schedule_id: &str, shift_id: &str) -> ShiftState {
    store
        .find_by_id("ACME1", schedule_id)
        .await
        .unwrap()
        .and_then(|schedule| schedule.shift(shift_id).map(|shift| shift.state()))
        .expect("shift should be stored")
}

#[tokio::test]
async fn clocks_a_shift_through_its_whole_day() {
    let store = Arc::new(InMemoryScheduleStore::new());
    let activity_log = Arc::new(InMemoryActivityLog::new());
    let directory = Arc::new(InMemoryEmployeeDirectory::with_employees([("E1", "Alice")]));
    let clock = Arc::new(FixedClock::new(june_10_at(7, 0)));

    let schedules = ScheduleHandler::new(store.clone(), clock.clone());
    let shifts = ShiftLifecycleHandler::new(store.clone(), directory);
    let clocking = ClockHandler::new(
        store.clone(),
        activity_log.clone(),
        clock.clone(),
        ClockWindow::default(),
    );

    let schedule_id = schedules
        .create_schedule(CreateSchedule {
            business_code: "ACME1".into(),
            year: 2025,
            month: 6,
            created_by: "M1".into(),
        })
        .await
        .unwrap();
    let shift_id = shifts
        .add_shift(AddShiftBuilder::new().schedule_id(&schedule_id).build())
        .await
        .unwrap();
    let log = |clock_in: bool| LogActivity {
        business_code: "ACME1".into(),
        employee_id: "E1".into(),
        shift_id: shift_id.clone(),
        clock_in,
    };

    clock.set(june_10_at(8, 35));
    clocking.log_activity(log(true)).await.expect("clock-in at 08:35");
    assert_eq!(shift_state(&store, &schedule_id, &shift_id).await, ShiftState::Active);

    clock.set(june_10_at(8, 40));
    assert_eq!(
        clocking.log_activity(log(true)).await,
        Err(ApplicationError::State(ClockRejection::AlreadyClockedIn))
    );

    clock.set(june_10_at(16, 20));
    assert_eq!(
        clocking.log_activity(log(false)).await,
        Err(ApplicationError::State(ClockRejection::OutsideClockOutWindow {
            earliest: june_10_at(16, 30),
            latest: june_10_at(17, 30),
        }))
    );
    assert_eq!(shift_state(&store, &schedule_id, &shift_id).await, ShiftState::Active);

    let active = store
        .find_by_id("ACME1", &schedule_id)
        .await
        .unwrap()
        .and_then(|schedule| schedule.shift(&shift_id).cloned())
        .unwrap();
    assert!(matches!(
        decide_clock(&active, "E1", false, june_10_at(16, 40), ClockWindow::default()),
        ClockDecision::Accepted { .. }
    ));

    clock.set(june_10_at(17, 10));
    clocking.log_activity(log(false)).await.expect("clock-out at 17:10");
    assert_eq!(shift_state(&store, &schedule_id, &shift_id).await, ShiftState::Done);

    assert_eq!(activity_log.count_for_shift(&shift_id).await, 2);
    let records = clocking.activities("ACME1").await.unwrap();
    assert_eq!(
        records.iter().map(|r| r.clock_in).collect::<Vec<_>>(),
        vec![true, false]
    );
    assert!(records.iter().all(|r| r.employee_name == "Alice"));

    clock.set(june_10_at(17, 15));
    assert_eq!(
        clocking.log_activity(log(false)).await,
        Err(ApplicationError::State(ClockRejection::AlreadyCompleted))
    );
    assert_eq!(activity_log.count_for_shift(&shift_id).await, 2);
}

#[tokio::test]
async fn keeps_sibling_clock_ins_in_one_schedule_apart() {
    let store = Arc::new(InMemoryScheduleStore::new());
    let activity_log = Arc::new(InMemoryActivityLog::new());
    let directory = Arc::new(InMemoryEmployeeDirectory::with_employees([
        ("E1", "Alice"),
        ("E2", "Bob"),
    ]));
    let clock = Arc::new(FixedClock::new(june_10_at(8, 55)));

    let schedules = ScheduleHandler::new(store.clone(), clock.clone());
    let shifts = ShiftLifecycleHandler::new(store.clone(), directory);
    let clocking = ClockHandler::new(
        store.clone(),
        activity_log.clone(),
        clock.clone(),
        ClockWindow::default(),
    );
    let schedule_id = schedules
        .create_schedule(CreateSchedule {
            business_code: "ACME1".into(),
            year: 2025,
            month: 6,
            created_by: "M1".into(),
        })
        .await
        .unwrap();
    let alice = shifts
        .add_shift(AddShiftBuilder::new().schedule_id(&schedule_id).build())
        .await
        .unwrap();
    let bob = shifts
        .add_shift(
            AddShiftBuilder::new()
                .schedule_id(&schedule_id)
                .employee_id(Some("E2"))
                .build(),
        )
        .await
        .unwrap();
    store.set_delay_update_ms(10);

    let clock_in = |employee_id: &str, shift_id: &str| LogActivity {
        business_code: "ACME1".into(),
        employee_id: employee_id.into(),
        shift_id: shift_id.into(),
        clock_in: true,
    };
    let (first, second) = tokio::join!(
        clocking.log_activity(clock_in("E1", &alice)),
        clocking.log_activity(clock_in("E2", &bob))
    );
    first.expect("alice clocks in");
    second.expect("bob clocks in");

    let schedule = store.find_by_id("ACME1", &schedule_id).await.unwrap().unwrap();
    assert!(schedule.shifts.iter().all(|s| s.state() == ShiftState::Active));
    assert_eq!(clocking.activities("ACME1").await.unwrap().len(), 2);
}
