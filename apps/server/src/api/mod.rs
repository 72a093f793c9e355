use std::sync::Arc;

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use budgetify_core::Error as CoreError;
use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod budgets;
mod expenses;
mod pages;

pub async fn healthz() -> &'static str {
    "ok"
}

/// Row ids arrive as raw path segments. Anything that is not an `i32` cannot
/// name a stored row, so it is reported as not found.
pub(crate) fn parse_row_id(raw: &str, entity: &str) -> ApiResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| CoreError::not_found(format!("{} {}", entity, raw)).into())
}

async fn api_not_found() -> ApiError {
    CoreError::not_found("no such API route").into()
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {:?}", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .merge(expenses::router())
        .merge(budgets::router())
        .fallback(api_not_found);

    Router::new()
        .merge(pages::router())
        .nest("/api", api)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
