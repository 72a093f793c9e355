//! Server-rendered pages and the two HTML forms.

use std::sync::Arc;

use crate::{
    error::PageResult,
    main_lib::AppState,
    models::{BudgetForm, ExpenseForm},
    views,
};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use budgetify_core::budgets::BudgetRepresentation;
use budgetify_core::expenses::{Expense, ExpenseRepresentation};
use budgetify_core::utils::current_month_label;
use tera::Context;

fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

fn representations(expenses: &[Expense]) -> Vec<ExpenseRepresentation> {
    expenses.iter().map(Expense::to_representation).collect()
}

async fn dashboard(State(state): State<Arc<AppState>>) -> PageResult<Html<String>> {
    let month_label = current_month_label();
    let summary = state.dashboard_service.get_summary_for_month(&month_label)?;

    let mut ctx = Context::new();
    ctx.insert("month_label", &month_label);
    ctx.insert("expenses", &representations(&summary.expenses));
    ctx.insert(
        "budget",
        &summary.budget.as_ref().map(BudgetRepresentation::from),
    );
    ctx.insert("categories", &summary.categories);
    ctx.insert("amounts", &summary.amounts);
    ctx.insert("total_spent", &summary.total_spent);
    ctx.insert("usage_pct", &summary.usage_pct);
    ctx.insert("category_totals", &summary.category_totals);
    Ok(state.views.render(views::DASHBOARD, &ctx)?)
}

async fn add_expense_form(State(state): State<Arc<AppState>>) -> PageResult<Html<String>> {
    Ok(state.views.render(views::ADD_EXPENSE, &Context::new())?)
}

async fn add_expense(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ExpenseForm>,
) -> PageResult<Response> {
    let new_expense = form.validate()?;
    state.expense_service.create_expense(new_expense).await?;
    Ok(redirect_home())
}

async fn set_budget_form(State(state): State<Arc<AppState>>) -> PageResult<Html<String>> {
    let mut ctx = Context::new();
    ctx.insert("month_label", &current_month_label());
    Ok(state.views.render(views::SET_BUDGET, &ctx)?)
}

async fn set_budget(
    State(state): State<Arc<AppState>>,
    Form(form): Form<BudgetForm>,
) -> PageResult<Response> {
    let new_budget = form.validate()?;
    state.budget_service.create_budget(new_budget).await?;
    Ok(redirect_home())
}

async fn reports(State(state): State<Arc<AppState>>) -> PageResult<Html<String>> {
    let expenses = state.expense_service.get_expenses()?;
    let mut ctx = Context::new();
    ctx.insert("expenses", &representations(&expenses));
    Ok(state.views.render(views::REPORTS, &ctx)?)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(dashboard))
        .route("/add-expense", get(add_expense_form).post(add_expense))
        .route("/set-budget", get(set_budget_form).post(set_budget))
        .route("/reports", get(reports))
}
