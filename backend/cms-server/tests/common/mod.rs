#![allow(dead_code)]

//! Test infrastructure for cms-server API tests

use cms_auth::{Assignment, Claims, JwtValidator, RoleRef};
use cms_core::BusinessUnit;
use cms_db::BusinessUnitRepository;
use cms_server::{AppState, build_router};

use axum::{Router, body::Body};
use http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-at-least-32-characters";
pub const ADMIN_ROLE: &str = "Admin";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    cms_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState over a fresh database seeded with business units `bu1` and `bu2`
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    for id in ["bu1", "bu2"] {
        create_test_business_unit(&pool, id).await;
    }

    AppState::new(
        pool,
        JwtValidator::with_hs256(TEST_JWT_SECRET.as_bytes()),
        ADMIN_ROLE,
    )
}

pub fn test_router(state: AppState) -> Router {
    build_router(state, &[])
}

pub async fn create_test_business_unit(pool: &SqlitePool, id: &str) {
    let mut unit = BusinessUnit::new(format!("unit-{}", id), format!("Unit {}", id));
    unit.id = id.to_string();
    BusinessUnitRepository::new(pool.clone())
        .create(&unit)
        .await
        .expect("Failed to create test business unit");
}

/// Signed session token holding one assignment per `(business unit, role)` pair
pub fn token_for(assignments: &[(&str, &str)]) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "user-1".to_string(),
        exp: now + 3600,
        iat: now,
        assignments: assignments
            .iter()
            .map(|(unit, role)| Assignment {
                business_unit_id: unit.to_string(),
                role: RoleRef {
                    id: format!("role-{}", role.to_lowercase()),
                    name: role.to_string(),
                    display_name: role.to_string(),
                },
            })
            .collect(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to sign test token")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Fluent request builder for the handful of shapes these tests need
pub struct TestRequest {
    method: &'static str,
    uri: String,
    token: Option<String>,
    tenant_header: Option<String>,
    headers: Vec<(&'static str, String)>,
    body: Option<serde_json::Value>,
}

impl TestRequest {
    pub fn new(method: &'static str, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            token: None,
            tenant_header: None,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(uri: impl Into<String>) -> Self {
        Self::new("GET", uri)
    }

    pub fn post(uri: impl Into<String>) -> Self {
        Self::new("POST", uri)
    }

    pub fn patch(uri: impl Into<String>) -> Self {
        Self::new("PATCH", uri)
    }

    pub fn delete(uri: impl Into<String>) -> Self {
        Self::new("DELETE", uri)
    }

    pub fn token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    pub fn tenant(mut self, business_unit_id: &str) -> Self {
        self.tenant_header = Some(business_unit_id.to_string());
        self
    }

    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Request<Body> {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        if let Some(token) = self.token {
            builder = builder.header("Authorization", bearer(&token));
        }
        if let Some(tenant) = self.tenant_header {
            builder = builder.header("x-business-unit-id", tenant);
        }
        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }
        let body = match self.body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        builder.body(body).expect("Failed to build request")
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not UTF-8")
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }
}

pub async fn send(app: &Router, request: TestRequest) -> TestResponse {
    let response = app
        .clone()
        .oneshot(request.build())
        .await
        .expect("Request failed");
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}
