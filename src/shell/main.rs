use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, http::HeaderMap, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use shift_scheduling::modules::scheduling::adapters::inbound::identity::identity_from_headers;
use shift_scheduling::modules::scheduling::adapters::outbound::activity_log_in_memory::InMemoryActivityLog;
use shift_scheduling::modules::scheduling::adapters::outbound::employee_directory_in_memory::InMemoryEmployeeDirectory;
use shift_scheduling::modules::scheduling::adapters::outbound::schedule_store_in_memory::InMemoryScheduleStore;
use shift_scheduling::modules::scheduling::core::clock_window::ClockWindow;
use shift_scheduling::shared::core::clock::SystemClock;
use shift_scheduling::shell::config::AppConfig;
use shift_scheduling::shell::graphql::{AppSchema, build_schema};
use shift_scheduling::shell::http::router;
use shift_scheduling::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let store = Arc::new(InMemoryScheduleStore::new());
    let activity_log = Arc::new(InMemoryActivityLog::new());
    let directory = Arc::new(InMemoryEmployeeDirectory::with_employees(
        config.employees.iter().cloned(),
    ));
    tracing::info!(employees = config.employees.len(), "employee directory seeded");

    let state = AppState::new(
        store,
        activity_log,
        directory,
        Arc::new(SystemClock),
        ClockWindow::minutes(config.clock_window_minutes),
    );
    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("HTTP API: http://{}/api", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    match identity_from_headers(&headers) {
        Ok(identity) => request = request.data(identity),
        Err(rejection) => tracing::debug!(%rejection, "graphql request without identity"),
    }
    schema.execute(request).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
