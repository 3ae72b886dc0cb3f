use crate::modules::scheduling::core::clock_window::ClockWindow;
use crate::modules::scheduling::core::shift::{Shift, ShiftState};
use crate::modules::scheduling::core::shift_update::{ShiftPrecondition, ShiftUpdate};
use crate::modules::scheduling::use_cases::log_activity::decision::{ClockDecision, ClockRejection};
use chrono::{DateTime, Utc};

/// Decide a clock transition against the shift as last read.
///
/// The accepted precondition restates every check that depends on mutable
/// shift fields, so the store re-verifies them at write time.
pub fn decide_clock(
    shift: &Shift,
    employee_id: &str,
    clock_in: bool,
    now: DateTime<Utc>,
    window: ClockWindow,
) -> ClockDecision {
    match check_clock(shift, employee_id, clock_in, now, window) {
        Ok(()) if clock_in => ClockDecision::Accepted {
            precondition: ShiftPrecondition::any()
                .employee_id(employee_id)
                .posted(false)
                .clocked_in(false)
                .completed(false)
                .window(shift.start, shift.end),
            update: ShiftUpdate::ClockIn { at: now },
        },
        Ok(()) => ClockDecision::Accepted {
            precondition: ShiftPrecondition::any()
                .employee_id(employee_id)
                .clocked_in(true)
                .completed(false)
                .window(shift.start, shift.end),
            update: ShiftUpdate::ClockOut { at: now },
        },
        Err(reason) => ClockDecision::Rejected { reason },
    }
}

fn check_clock(
    shift: &Shift,
    employee_id: &str,
    clock_in: bool,
    now: DateTime<Utc>,
    window: ClockWindow,
) -> Result<(), ClockRejection> {
    if shift.posted {
        return Err(ClockRejection::ShiftPosted);
    }
    if !shift.is_owned_by(employee_id) {
        return Err(ClockRejection::NotShiftOwner);
    }
    let anchor = match (shift.state(), clock_in) {
        (ShiftState::Done, _) => return Err(ClockRejection::AlreadyCompleted),
        (ShiftState::Active, true) => return Err(ClockRejection::AlreadyClockedIn),
        (ShiftState::Scheduled, false) => return Err(ClockRejection::NotClockedIn),
        (ShiftState::Scheduled, true) => shift.start,
        (ShiftState::Active, false) => shift.end,
    };
    if window.contains(anchor, now) {
        return Ok(());
    }
    let (earliest, latest) = window.bounds(anchor);
    Err(if clock_in {
        ClockRejection::OutsideClockInWindow { earliest, latest }
    } else {
        ClockRejection::OutsideClockOutWindow { earliest, latest }
    })
}
