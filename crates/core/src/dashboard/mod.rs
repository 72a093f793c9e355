//! Dashboard aggregation: total spend against the budget in effect.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::{usage_percentage, CategoryTotal, DashboardSummary};
pub use dashboard_service::DashboardService;
