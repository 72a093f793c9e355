#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use budgetify_server::{api::app_router, build_state, config::Config, AppState};
use diesel::connection::SimpleConnection;
use diesel::{Connection, SqliteConnection};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub db_path: String,
    // Holds the database directory for the lifetime of the test.
    _dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::from_env().unwrap();
    config.db_path = dir
        .path()
        .join("database")
        .join("budgetify.db")
        .to_string_lossy()
        .into_owned();
    let state = build_state(&config).await.unwrap();
    let router = app_router(state.clone(), &config);
    TestApp {
        router,
        state,
        db_path: config.db_path,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: impl Into<Body>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let response = self
            .router
            .clone()
            .oneshot(builder.body(body.into()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    /// Runs raw SQL on a side connection to the app's database file.
    pub fn execute_sql(&self, sql: &str) {
        let mut conn = SqliteConnection::establish(&self.db_path).unwrap();
        conn.batch_execute(sql).unwrap();
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None, Body::empty()).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None, Body::empty()).await
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: Value) -> TestResponse {
        self.request(method, uri, Some("application/json"), body.to_string())
            .await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        self.request(
            Method::POST,
            uri,
            Some("application/x-www-form-urlencoded"),
            body.to_string(),
        )
        .await
    }
}
