//! Integration tests for the system smoke test, run against mock tier
//! servers bound to ephemeral ports.
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use soil_system_tools::console::logger::Logger;
use soil_system_tools::console::smoke::checks::api;
use soil_system_tools::console::smoke::config::{test_payload, ApiTier, Endpoints, HTTP_TIMEOUT};
use soil_system_tools::console::smoke::service::{Service, TierResult};
use url::Url;

/// Serves the router on an ephemeral port and returns the base URL.
async fn spawn_mock_tier(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("an ephemeral port should be bindable");
    let addr = listener.local_addr().expect("the listener should have a local address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("the mock tier should serve");
    });

    Url::parse(&format!("http://{addr}/")).expect("the bound address should form a valid URL")
}

/// A URL that nothing listens on (the listener is bound and dropped).
fn unreachable_url(path: &str) -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("an ephemeral port should be bindable");
    let addr = listener.local_addr().expect("the listener should have a local address");
    drop(listener);

    Url::parse(&format!("http://{addr}{path}")).expect("the bound address should form a valid URL")
}

fn endpoints(ml: Url, backend: Url, frontend: Url) -> Endpoints {
    Endpoints {
        api_tiers: vec![
            ApiTier::new("ML API", "ML API (Port 5001)", ml),
            ApiTier::new("Backend", "Backend API (Port 5000)", backend),
        ],
        frontend,
        frontend_heading: "Frontend (Port 5000)".to_string(),
    }
}

mod api_checks {
    use super::{api, json, post, spawn_mock_tier, test_payload, Json, Router, StatusCode, Value};

    #[tokio::test]
    async fn it_should_decode_the_prediction_returned_by_a_healthy_tier() {
        let router = Router::new().route("/predict", post(|| async { Json(json!({"crop": "rice"})) }));
        let base = spawn_mock_tier(router).await;
        let url = base.join("predict").expect("the mock path should join");

        let response = api::post_json(&url, &test_payload(), super::HTTP_TIMEOUT)
            .await
            .expect("the mock tier should answer 200");

        assert_eq!(response, json!({"crop": "rice"}));
    }

    #[tokio::test]
    async fn it_should_echo_the_posted_payload_back_through_the_mock() {
        let router = Router::new().route("/predict", post(|Json(body): Json<Value>| async move { Json(body) }));
        let base = spawn_mock_tier(router).await;
        let url = base.join("predict").expect("the mock path should join");

        let response = api::post_json(&url, &test_payload(), super::HTTP_TIMEOUT)
            .await
            .expect("the mock tier should answer 200");

        assert_eq!(response, test_payload());
    }

    #[tokio::test]
    async fn it_should_report_the_status_and_a_truncated_body_for_a_failing_tier() {
        let long_body = "x".repeat(500);
        let router = Router::new().route(
            "/predict",
            post(move || async move { (StatusCode::INTERNAL_SERVER_ERROR, long_body) }),
        );
        let base = spawn_mock_tier(router).await;
        let url = base.join("predict").expect("the mock path should join");

        let err = api::post_json(&url, &test_payload(), super::HTTP_TIMEOUT)
            .await
            .expect_err("a 500 should be an error");

        match err {
            api::Error::UnsuccessfulResponse { code, body } => {
                assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body.len(), api::BODY_SNIPPET_LIMIT);
            }
            other => panic!("expected UnsuccessfulResponse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn it_should_report_a_transport_error_for_an_unreachable_tier() {
        let url = super::unreachable_url("/predict");

        let err = api::post_json(&url, &test_payload(), super::HTTP_TIMEOUT)
            .await
            .expect_err("connection refused should be an error");

        assert!(matches!(err, api::Error::Response { .. }));
    }
}

mod full_runs {
    use super::{
        endpoints, get, json, post, spawn_mock_tier, unreachable_url, Json, Logger, Router, Service, TierResult,
    };

    #[tokio::test]
    async fn it_should_print_the_prediction_of_a_healthy_deployment() {
        let ml = spawn_mock_tier(Router::new().route("/predict", post(|| async { Json(json!({"crop": "rice"})) }))).await;
        let backend = spawn_mock_tier(Router::new().route(
            "/api/crop-recommendation",
            post(|| async { Json(json!({"recommendation": "rice"})) }),
        ))
        .await;
        let frontend = spawn_mock_tier(Router::new().route("/", get(|| async { "<html></html>" }))).await;

        let mut service = Service::new(Logger::new());
        service.endpoints = endpoints(
            ml.join("predict").expect("join"),
            backend.join("api/crop-recommendation").expect("join"),
            frontend,
        );

        let results = service.run_checks().await;

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(TierResult::is_ok));

        let log = service.printer.log();
        assert!(log.contains("\"crop\": \"rice\""));
        assert!(log.contains("ML API Working!"));
        assert!(log.contains("Backend Working!"));
        assert!(log.contains("Frontend Available!"));
    }

    #[tokio::test]
    async fn it_should_still_check_the_frontend_when_the_backend_is_unreachable() {
        let ml = spawn_mock_tier(Router::new().route("/predict", post(|| async { Json(json!({"crop": "rice"})) }))).await;
        let frontend = spawn_mock_tier(Router::new().route("/", get(|| async { "<html></html>" }))).await;

        let mut service = Service::new(Logger::new());
        service.endpoints = endpoints(
            ml.join("predict").expect("join"),
            unreachable_url("/api/crop-recommendation"),
            frontend,
        );

        let results = service.run_checks().await;

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(!results[1].is_ok());
        assert!(results[2].is_ok(), "the frontend check should still have run");
    }

    #[tokio::test]
    async fn it_should_report_three_errors_and_still_print_the_footer_when_every_tier_is_absent() {
        let mut service = Service::new(Logger::new());
        service.endpoints = endpoints(
            unreachable_url("/predict"),
            unreachable_url("/api/crop-recommendation"),
            unreachable_url("/"),
        );

        let results = service.run_checks().await;

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|result| !result.is_ok()));

        let log = service.printer.log();
        assert!(log.contains("ML API Error"));
        assert!(log.contains("Backend Error"));
        assert!(log.contains("Frontend Error"));
        assert!(log.contains("SYSTEM TEST COMPLETE"));
        assert!(
            log.trim_end().ends_with("5. See crop suggestion from ML model!"),
            "the instructions footer should be printed last"
        );
    }
}
