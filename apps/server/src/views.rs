//! HTML rendering with Tera. Templates are compiled into the binary.

use axum::response::Html;
use tera::{Context, Tera};

pub const DASHBOARD: &str = "index.html";
pub const ADD_EXPENSE: &str = "add_expense.html";
pub const SET_BUDGET: &str = "set_budget.html";
pub const REPORTS: &str = "reports.html";

pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            (DASHBOARD, include_str!("../templates/index.html")),
            (ADD_EXPENSE, include_str!("../templates/add_expense.html")),
            (SET_BUDGET, include_str!("../templates/set_budget.html")),
            (REPORTS, include_str!("../templates/reports.html")),
        ])?;
        Ok(Views { tera })
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<Html<String>, tera::Error> {
        self.tera.render(template, context).map(Html)
    }
}
