use std::sync::Arc;

use super::parse_row_id;
use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Ack, BudgetEnvelope},
};
use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};

async fn get_latest_budget(State(state): State<Arc<AppState>>) -> ApiResult<Json<BudgetEnvelope>> {
    let budget = state.budget_service.get_current_budget()?;
    Ok(Json(BudgetEnvelope {
        ok: true,
        budget: budget.as_ref().map(|b| b.to_representation()),
    }))
}

async fn delete_budget(
    Path(raw_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Ack>> {
    let id = parse_row_id(&raw_id, "budget")?;
    state.budget_service.delete_budget(id).await?;
    Ok(Json(Ack { ok: true }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budget/latest", get(get_latest_budget))
        .route("/budget/{id}", delete(delete_budget))
}
