use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::scheduling::adapters::inbound::http_error::{require_role, unprocessable};
use crate::modules::scheduling::use_cases::manage_schedules::command::CreateSchedule;
use crate::shared::core::identity::{Identity, Role};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateScheduleBody {
    pub year: i32,
    pub month: u32,
}

#[derive(Serialize)]
pub struct CreateScheduleResponse {
    pub schedule_id: String,
}

pub async fn create(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<CreateScheduleBody>, JsonRejection>,
) -> Response {
    if let Err(error) = require_role(&identity, &[Role::Manager]) {
        return error.into_response();
    }
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return unprocessable(),
    };

    let command = CreateSchedule {
        business_code: identity.business_code,
        year: body.year,
        month: body.month,
        created_by: identity.employee_id,
    };
    match state.schedule_handler.create_schedule(command).await {
        Ok(schedule_id) => (
            StatusCode::CREATED,
            Json(CreateScheduleResponse { schedule_id }),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn list(State(state): State<AppState>, identity: Identity) -> Response {
    if let Err(error) = require_role(&identity, &[Role::Manager]) {
        return error.into_response();
    }
    match state
        .schedule_handler
        .list_schedules(&identity.business_code)
        .await
    {
        Ok(schedules) => Json(schedules).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn for_month(
    State(state): State<AppState>,
    identity: Identity,
    Path((year, month)): Path<(i32, u32)>,
) -> Response {
    if let Err(error) = require_role(&identity, &[Role::Manager]) {
        return error.into_response();
    }
    match state
        .schedule_handler
        .schedule_for_month(&identity.business_code, year, month)
        .await
    {
        Ok(schedule) => Json(schedule).into_response(),
        Err(error) => error.into_response(),
    }
}
