//! Integration tests for usage and utilization reporting.

mod helpers;

use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn stats_report_utilization() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let event = app
        .create_test_event("Quarterly Demo", Utc::now() + Duration::days(1), "Hall L", 4)
        .await;

    for i in 0..3 {
        let user = app.create_test_user(&format!("attendee-{i}")).await;
        let response = app
            .request(
                "POST",
                &format!("/api/events/{event}/register"),
                Some(json!({ "user_id": user })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app
        .request("GET", &format!("/api/events/{event}/stats"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["title"].as_str(), Some("Quarterly Demo"));
    assert_eq!(data["total_registrations"].as_i64(), Some(3));
    assert_eq!(data["remaining_capacity"].as_i64(), Some(1));
    assert_eq!(data["percentage_used"].as_str(), Some("75.00%"));
}

#[tokio::test]
async fn usage_reflects_registrations() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let event = app
        .create_test_event("Usage Check", Utc::now() + Duration::days(1), "Hall M", 10)
        .await;
    let user = app.create_test_user("counter").await;
    app.seed_registration(event, user).await;

    let response = app
        .request("GET", &format!("/api/events/{event}/usage"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["registered"].as_i64(), Some(1));
    assert_eq!(response.body["data"]["capacity"].as_i64(), Some(10));
}

#[tokio::test]
async fn stats_for_unknown_event_are_not_found() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let response = app
        .request("GET", &format!("/api/events/{}/stats", Uuid::new_v4()), None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_endpoints_respond() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let health = app.request("GET", "/api/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["data"]["status"].as_str(), Some("ok"));

    let detailed = app.request("GET", "/api/health/detailed", None).await;
    assert_eq!(detailed.status, StatusCode::OK);
    assert_eq!(
        detailed.body["data"]["database"].as_str(),
        Some("connected")
    );
}
