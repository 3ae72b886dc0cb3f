// Caller identity as forwarded by the authenticating gateway.
//
// The gateway verifies the token and sets three headers; this extractor only
// parses them. A request without a complete identity is rejected with 401.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::shared::core::identity::{Identity, Role};

pub const EMPLOYEE_ID_HEADER: &str = "x-employee-id";
pub const BUSINESS_CODE_HEADER: &str = "x-business-code";
pub const ROLE_HEADER: &str = "x-role";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdentityRejection {
    #[error("missing header {0}")]
    MissingHeader(&'static str),

    #[error("unknown role {0}")]
    UnknownRole(String),
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": self.to_string() })),
        )
            .into_response()
    }
}

pub fn identity_from_headers(headers: &HeaderMap) -> Result<Identity, IdentityRejection> {
    let employee_id = header(headers, EMPLOYEE_ID_HEADER)?;
    let business_code = header(headers, BUSINESS_CODE_HEADER)?;
    let role = header(headers, ROLE_HEADER)?;
    let role: Role = role
        .parse()
        .map_err(|_| IdentityRejection::UnknownRole(role.to_string()))?;
    Ok(Identity::new(employee_id, business_code, role))
}

fn header<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<&'a str, IdentityRejection> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(IdentityRejection::MissingHeader(name))
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        identity_from_headers(&parts.headers)
    }
}
