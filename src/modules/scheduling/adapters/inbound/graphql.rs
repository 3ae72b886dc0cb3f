use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::scheduling::adapters::inbound::http_error::require_role;
use crate::modules::scheduling::core::activity::ActivityRecord;
use crate::modules::scheduling::core::schedule::Schedule;
use crate::modules::scheduling::core::shift::{Shift, ShiftState};
use crate::shared::core::identity::{Identity, Role};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlShift {
    pub id: String,
    pub employee_id: Option<String>,
    pub employee_name: Option<String>,
    pub start: String,
    pub end: String,
    pub state: String,
    pub posted: bool,
    pub clocked_in_at: Option<String>,
    pub clocked_out_at: Option<String>,
}

impl From<Shift> for GqlShift {
    fn from(s: Shift) -> Self {
        let state = match s.state() {
            ShiftState::Scheduled => "SCHEDULED",
            ShiftState::Active => "ACTIVE",
            ShiftState::Done => "DONE",
        };
        Self {
            state: state.to_string(),
            id: s.id,
            employee_id: s.employee_id,
            employee_name: s.employee_name,
            start: s.start.to_rfc3339(),
            end: s.end.to_rfc3339(),
            posted: s.posted,
            clocked_in_at: s.clocked_in_at.map(|t| t.to_rfc3339()),
            clocked_out_at: s.clocked_out_at.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlSchedule {
    pub id: String,
    pub year: i32,
    pub month: u32,
    pub created_at: String,
    pub created_by: String,
    pub shifts: Vec<GqlShift>,
}

impl From<Schedule> for GqlSchedule {
    fn from(s: Schedule) -> Self {
        Self {
            id: s.id,
            year: s.year,
            month: s.month,
            created_at: s.created_at.to_rfc3339(),
            created_by: s.created_by,
            shifts: s.shifts.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlActivity {
    pub id: String,
    pub shift_id: String,
    pub shift_start: String,
    pub shift_end: String,
    pub employee_id: String,
    pub employee_name: String,
    pub clock_in: bool,
    pub timestamp: String,
}

impl From<ActivityRecord> for GqlActivity {
    fn from(r: ActivityRecord) -> Self {
        Self {
            id: r.id,
            shift_id: r.shift_id,
            shift_start: r.shift_start.to_rfc3339(),
            shift_end: r.shift_end.to_rfc3339(),
            employee_id: r.employee_id,
            employee_name: r.employee_name,
            clock_in: r.clock_in,
            timestamp: r.timestamp.to_rfc3339(),
        }
    }
}

fn identity<'a>(context: &'a Context<'_>) -> GqlResult<&'a Identity> {
    context
        .data::<Identity>()
        .map_err(|_| async_graphql::Error::new("missing caller identity"))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn schedules(&self, context: &Context<'_>) -> GqlResult<Vec<GqlSchedule>> {
        let identity = identity(context)?;
        require_role(identity, &[Role::Manager])?;
        let state = context.data_unchecked::<AppState>();
        let schedules = state
            .schedule_handler
            .list_schedules(&identity.business_code)
            .await?;
        Ok(schedules.into_iter().map(Into::into).collect())
    }

    async fn posted_shifts(&self, context: &Context<'_>) -> GqlResult<Vec<GqlShift>> {
        let identity = identity(context)?;
        let state = context.data_unchecked::<AppState>();
        let shifts = state
            .shift_handler
            .posted_shifts(&identity.business_code)
            .await?;
        Ok(shifts.into_iter().map(Into::into).collect())
    }

    async fn upcoming_shift(&self, context: &Context<'_>) -> GqlResult<Option<GqlShift>> {
        let identity = identity(context)?;
        require_role(identity, &[Role::Employee])?;
        let state = context.data_unchecked::<AppState>();
        let shift = state
            .clock_handler
            .upcoming_shift(&identity.business_code, &identity.employee_id)
            .await?;
        Ok(shift.map(Into::into))
    }

    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let identity = identity(context)?;
        require_role(identity, &[Role::Manager])?;
        let state = context.data_unchecked::<AppState>();
        let records = state
            .clock_handler
            .activities(&identity.business_code)
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
