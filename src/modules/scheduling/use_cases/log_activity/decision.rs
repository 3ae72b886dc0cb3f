use crate::modules::scheduling::core::shift_update::{ShiftPrecondition, ShiftUpdate};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ClockRejection {
    #[error("already clocked in")]
    AlreadyClockedIn,

    #[error("shift already completed")]
    AlreadyCompleted,

    #[error("not clocked in")]
    NotClockedIn,

    #[error("shift is posted for trade")]
    ShiftPosted,

    #[error("shift is assigned to another employee")]
    NotShiftOwner,

    #[error("clock-in allowed between {earliest} and {latest}")]
    OutsideClockInWindow {
        earliest: DateTime<Utc>,
        latest: DateTime<Utc>,
    },

    #[error("clock-out allowed between {earliest} and {latest}")]
    OutsideClockOutWindow {
        earliest: DateTime<Utc>,
        latest: DateTime<Utc>,
    },

    #[error("shift changed concurrently")]
    ShiftChanged,
}

pub enum ClockDecision {
    Accepted {
        precondition: ShiftPrecondition,
        update: ShiftUpdate,
    },
    Rejected {
        reason: ClockRejection,
    },
}
