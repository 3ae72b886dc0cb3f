use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::shared::core::identity::{Identity, Role};

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Conflict(_) | ApplicationError::State(_) => StatusCode::CONFLICT,
            ApplicationError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApplicationError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            tracing::error!(error = %self, "backend unavailable");
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

pub fn require_role(identity: &Identity, roles: &[Role]) -> Result<(), ApplicationError> {
    if identity.has_any_role(roles) {
        return Ok(());
    }
    Err(ApplicationError::Forbidden(format!(
        "role {} may not perform this operation",
        identity.role
    )))
}

pub fn unprocessable() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "message": "malformed request body" })),
    )
        .into_response()
}
