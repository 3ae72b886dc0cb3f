use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::scheduling::adapters::inbound::http_error::{require_role, unprocessable};
use crate::modules::scheduling::core::shift::Shift;
use crate::modules::scheduling::use_cases::log_activity::command::LogActivity;
use crate::shared::core::identity::{Identity, Role};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LogActivityBody {
    pub shift_id: String,
    pub clock_in: bool,
}

#[derive(Serialize)]
pub struct UpcomingShiftResponse {
    pub shift: Option<Shift>,
}

pub async fn log(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<LogActivityBody>, JsonRejection>,
) -> Response {
    if let Err(error) = require_role(&identity, &[Role::Employee]) {
        return error.into_response();
    }
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return unprocessable(),
    };

    let command = LogActivity {
        business_code: identity.business_code,
        employee_id: identity.employee_id,
        shift_id: body.shift_id,
        clock_in: body.clock_in,
    };
    match state.clock_handler.log_activity(command).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn upcoming(State(state): State<AppState>, identity: Identity) -> Response {
    if let Err(error) = require_role(&identity, &[Role::Employee]) {
        return error.into_response();
    }
    match state
        .clock_handler
        .upcoming_shift(&identity.business_code, &identity.employee_id)
        .await
    {
        Ok(shift) => Json(UpcomingShiftResponse { shift }).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn activities(State(state): State<AppState>, identity: Identity) -> Response {
    if let Err(error) = require_role(&identity, &[Role::Manager]) {
        return error.into_response();
    }
    match state
        .clock_handler
        .activities(&identity.business_code)
        .await
    {
        Ok(records) => Json(records).into_response(),
        Err(error) => error.into_response(),
    }
}
