mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::spawn_app;

const FAIL_EXPENSE_INSERT: &str = "CREATE TRIGGER fail_expense_insert AFTER INSERT ON expense \
     BEGIN SELECT RAISE(ABORT, 'disk full'); END;";
const FAIL_EXPENSE_UPDATE: &str = "CREATE TRIGGER fail_expense_update BEFORE UPDATE ON expense \
     BEGIN SELECT RAISE(ABORT, 'disk full'); END;";
const FAIL_EXPENSE_DELETE: &str = "CREATE TRIGGER fail_expense_delete BEFORE DELETE ON expense \
     BEGIN SELECT RAISE(ABORT, 'disk full'); END;";
const FAIL_BUDGET_INSERT: &str = "CREATE TRIGGER fail_budget_insert AFTER INSERT ON budget \
     BEGIN SELECT RAISE(ABORT, 'disk full'); END;";

#[tokio::test]
async fn failed_json_create_is_a_500_and_leaves_no_row() {
    let app = spawn_app().await;
    app.execute_sql(FAIL_EXPENSE_INSERT);

    let res = app
        .send_json(
            Method::POST,
            "/api/expenses",
            json!({ "category": "Food", "amount": 12 }),
        )
        .await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json(), json!({ "ok": false, "error": "DB error" }));

    app.execute_sql("DROP TRIGGER fail_expense_insert;");
    assert!(app.state.expense_service.get_expenses().unwrap().is_empty());

    // The writer is still usable once the store recovers.
    let res = app
        .send_json(
            Method::POST,
            "/api/expenses",
            json!({ "category": "Food", "amount": 12 }),
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
}

#[tokio::test]
async fn failed_form_create_is_a_plain_text_500() {
    let app = spawn_app().await;
    app.execute_sql(FAIL_EXPENSE_INSERT);

    let res = app
        .post_form("/add-expense", "category=Food&amount=12")
        .await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body, "DB error");

    app.execute_sql("DROP TRIGGER fail_expense_insert;");
    assert!(app.state.expense_service.get_expenses().unwrap().is_empty());
}

#[tokio::test]
async fn failed_update_keeps_the_stored_row() {
    let app = spawn_app().await;
    let created = app
        .send_json(
            Method::POST,
            "/api/expenses",
            json!({ "category": "Food", "amount": 10 }),
        )
        .await
        .json();
    let id = created["expense"]["id"].as_i64().unwrap();
    app.execute_sql(FAIL_EXPENSE_UPDATE);

    let res = app
        .send_json(
            Method::PUT,
            &format!("/api/expenses/{id}"),
            json!({ "category": "Travel", "amount": 99 }),
        )
        .await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json(), json!({ "ok": false, "error": "DB error" }));

    let stored = app.state.expense_service.get_expense(id as i32).unwrap();
    assert_eq!(stored.category, "Food");
    assert_eq!(stored.amount, 10.0);
}

#[tokio::test]
async fn failed_delete_keeps_the_row() {
    let app = spawn_app().await;
    let created = app
        .send_json(
            Method::POST,
            "/api/expenses",
            json!({ "category": "Food", "amount": 10 }),
        )
        .await
        .json();
    let id = created["expense"]["id"].as_i64().unwrap();
    app.execute_sql(FAIL_EXPENSE_DELETE);

    let res = app.delete(&format!("/api/expenses/{id}")).await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json()["error"], "DB error");
    assert!(app.state.expense_service.get_expense(id as i32).is_ok());
}

#[tokio::test]
async fn failed_budget_form_is_a_plain_text_500() {
    let app = spawn_app().await;
    app.execute_sql(FAIL_BUDGET_INSERT);

    let res = app.post_form("/set-budget", "amount=250").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body, "DB error");

    app.execute_sql("DROP TRIGGER fail_budget_insert;");
    assert!(app.state.budget_service.get_current_budget().unwrap().is_none());
}
