use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::scheduling::adapters::inbound::http_error::{require_role, unprocessable};
use crate::modules::scheduling::use_cases::manage_shifts::command::{
    AddShift, DeleteShift, EditShift, PostShift, ShiftDraft, ShiftPatch, TakeShift,
};
use crate::shared::core::identity::{Identity, Role};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddShiftBody {
    pub schedule_id: String,
    pub shift: ShiftDraft,
}

#[derive(Serialize)]
pub struct AddShiftResponse {
    pub shift_id: String,
}

#[derive(Deserialize)]
pub struct EditShiftBody {
    pub schedule_id: String,
    pub shift_id: String,
    pub shift: ShiftPatch,
}

#[derive(Deserialize)]
pub struct DeleteShiftBody {
    pub schedule_id: String,
    pub shift_id: String,
}

#[derive(Deserialize)]
pub struct ShiftRefBody {
    pub shift_id: String,
}

pub async fn add(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<AddShiftBody>, JsonRejection>,
) -> Response {
    if let Err(error) = require_role(&identity, &[Role::Manager]) {
        return error.into_response();
    }
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return unprocessable(),
    };

    let command = AddShift {
        business_code: identity.business_code,
        schedule_id: body.schedule_id,
        draft: body.shift,
    };
    match state.shift_handler.add_shift(command).await {
        Ok(shift_id) => {
            (StatusCode::CREATED, Json(AddShiftResponse { shift_id })).into_response()
        }
        Err(error) => error.into_response(),
    }
}

pub async fn edit(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<EditShiftBody>, JsonRejection>,
) -> Response {
    if let Err(error) = require_role(&identity, &[Role::Manager]) {
        return error.into_response();
    }
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return unprocessable(),
    };

    let command = EditShift {
        business_code: identity.business_code,
        schedule_id: body.schedule_id,
        shift_id: body.shift_id,
        patch: body.shift,
    };
    no_content(state.shift_handler.edit_shift(command).await)
}

pub async fn delete(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<DeleteShiftBody>, JsonRejection>,
) -> Response {
    if let Err(error) = require_role(&identity, &[Role::Manager]) {
        return error.into_response();
    }
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return unprocessable(),
    };

    let command = DeleteShift {
        business_code: identity.business_code,
        schedule_id: body.schedule_id,
        shift_id: body.shift_id,
    };
    no_content(state.shift_handler.delete_shift(command).await)
}

/// Employees may only release their own shifts; managers release any.
pub async fn post(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<ShiftRefBody>, JsonRejection>,
) -> Response {
    if let Err(error) = require_role(&identity, &[Role::Employee, Role::Manager]) {
        return error.into_response();
    }
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return unprocessable(),
    };

    let owner = match identity.role {
        Role::Employee => Some(identity.employee_id),
        Role::Manager => None,
    };
    let command = PostShift {
        business_code: identity.business_code,
        shift_id: body.shift_id,
        owner,
    };
    no_content(state.shift_handler.post_shift(command).await)
}

pub async fn take(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<ShiftRefBody>, JsonRejection>,
) -> Response {
    if let Err(error) = require_role(&identity, &[Role::Employee]) {
        return error.into_response();
    }
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return unprocessable(),
    };

    let command = TakeShift {
        business_code: identity.business_code,
        shift_id: body.shift_id,
        employee_id: identity.employee_id,
    };
    no_content(state.shift_handler.take_shift(command).await)
}

pub async fn posted(State(state): State<AppState>, identity: Identity) -> Response {
    match state
        .shift_handler
        .posted_shifts(&identity.business_code)
        .await
    {
        Ok(shifts) => Json(shifts).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn mine(State(state): State<AppState>, identity: Identity) -> Response {
    if let Err(error) = require_role(&identity, &[Role::Employee]) {
        return error.into_response();
    }
    match state
        .shift_handler
        .employee_shifts(&identity.business_code, &identity.employee_id)
        .await
    {
        Ok(shifts) => Json(shifts).into_response(),
        Err(error) => error.into_response(),
    }
}

fn no_content<E: IntoResponse>(result: Result<(), E>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_response(),
    }
}
