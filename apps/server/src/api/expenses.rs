use std::sync::Arc;

use super::parse_row_id;
use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{DeletedExpense, ExpenseEnvelope, ExpensePayload},
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};

async fn create_expense(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<ExpenseEnvelope>)> {
    let new_expense = ExpensePayload::from_body(&body).into_new_expense()?;
    let created = state.expense_service.create_expense(new_expense).await?;
    Ok((
        StatusCode::CREATED,
        Json(ExpenseEnvelope {
            ok: true,
            expense: created.to_representation(),
        }),
    ))
}

async fn update_expense(
    Path(raw_id): Path<String>,
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ExpenseEnvelope>> {
    let id = parse_row_id(&raw_id, "expense")?;
    // Unknown ids are reported before the body is looked at.
    state.expense_service.get_expense(id)?;
    let update = ExpensePayload::from_body(&body).into_update()?;
    let updated = state.expense_service.update_expense(id, update).await?;
    Ok(Json(ExpenseEnvelope {
        ok: true,
        expense: updated.to_representation(),
    }))
}

async fn delete_expense(
    Path(raw_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DeletedExpense>> {
    let id = parse_row_id(&raw_id, "expense")?;
    state.expense_service.delete_expense(id).await?;
    Ok(Json(DeletedExpense { ok: true, id }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", post(create_expense))
        .route("/expenses/{id}", put(update_expense).delete(delete_expense))
}
