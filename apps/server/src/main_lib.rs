use std::sync::Arc;

use crate::{config::Config, views::Views};
use budgetify_core::{
    budgets::{BudgetService, BudgetServiceTrait},
    dashboard::DashboardService,
    expenses::{ExpenseService, ExpenseServiceTrait},
};
use budgetify_storage_sqlite::{
    budgets::BudgetRepository,
    db::{self, spawn_writer},
    expenses::ExpenseRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Shared per-process state handed to every handler.
pub struct AppState {
    pub expense_service: Arc<dyn ExpenseServiceTrait + Send + Sync>,
    pub budget_service: Arc<dyn BudgetServiceTrait + Send + Sync>,
    pub dashboard_service: Arc<DashboardService>,
    pub views: Arc<Views>,
}

pub fn init_tracing() {
    let log_format =
        std::env::var("BUDGETIFY_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone())?;

    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let expense_service = Arc::new(ExpenseService::new(expense_repository));

    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let budget_service = Arc::new(BudgetService::new(budget_repository));

    let dashboard_service = Arc::new(DashboardService::new(
        expense_service.clone(),
        budget_service.clone(),
    ));

    let views = Arc::new(Views::new()?);

    Ok(Arc::new(AppState {
        expense_service,
        budget_service,
        dashboard_service,
        views,
    }))
}
