mod common;

use crate::common::{TestRequest, create_test_app_state, send, test_router};

use http::StatusCode;

#[tokio::test]
async fn given_running_server_when_probed_then_live_and_ready() {
    let app = test_router(create_test_app_state().await);

    let live = send(&app, TestRequest::get("/live")).await;
    let ready = send(&app, TestRequest::get("/ready")).await;

    assert_eq!(live.status, StatusCode::OK);
    assert_eq!(ready.status, StatusCode::OK);
    assert_eq!(ready.text(), "Ready");
}

#[tokio::test]
async fn given_closed_pool_when_ready_probed_then_503() {
    let state = create_test_app_state().await;
    state.pool.close().await;
    let app = test_router(state);

    let response = send(&app, TestRequest::get("/ready")).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn given_healthy_database_when_health_checked_then_reports_components() {
    let app = test_router(create_test_app_state().await);

    let response = send(&app, TestRequest::get("/health")).await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["database"], "operational");
    assert_eq!(json["components"]["auth"], "HS256");
}
