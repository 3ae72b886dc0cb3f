use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::scheduling::use_cases::log_activity::inbound::http as clock_http;
use crate::modules::scheduling::use_cases::manage_schedules::inbound::http as schedule_http;
use crate::modules::scheduling::use_cases::manage_shifts::inbound::http as shift_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/manager/schedules/new", post(schedule_http::create))
        .route("/api/manager/schedules", get(schedule_http::list))
        .route(
            "/api/manager/schedules/{year}/{month}",
            get(schedule_http::for_month),
        )
        .route("/api/manager/schedules/add_shift", post(shift_http::add))
        .route("/api/manager/schedules/edit_shift", post(shift_http::edit))
        .route("/api/manager/schedules/delete_shift", post(shift_http::delete))
        .route("/api/employee/post_shift", post(shift_http::post))
        .route("/api/employee/take_shift", post(shift_http::take))
        .route("/api/posted_shifts", get(shift_http::posted))
        .route("/api/employee/shifts", get(shift_http::mine))
        .route("/api/log_activity", post(clock_http::log))
        .route("/api/activity", get(clock_http::upcoming))
        .route("/api/manager/activities", get(clock_http::activities))
        .with_state(state)
}
