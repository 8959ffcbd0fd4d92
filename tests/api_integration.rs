use axum::body::Body;
use axum::http::{Request, StatusCode};
use league_simulator_rust::api::create_router;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
    let app = create_router();
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: Value = serde_json::from_slice(&bytes).unwrap();
    (status, parsed)
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = create_router();
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body.get("version").is_some());
    assert!(body.get("performance").is_some());
}

#[tokio::test]
async fn simulate_endpoint_single_match_deterministic() {
    let body = json!({
        "schedule": [{"team_home": 0, "team_away": 1, "goals_home": 2, "goals_away": 1}],
        "elo_values": [1500.0, 1500.0],
        "team_names": ["Home", "Away"],
        "iterations": 1,
        "mod_factor": 20.0,
        "home_advantage": 0.0
    });

    let (status, response) = post_json("/simulate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["simulations_performed"], 1);
    assert_eq!(response["probability_matrix"], json!([[1.0, 0.0], [0.0, 1.0]]));
    assert_eq!(response["team_names"], json!(["Home", "Away"]));
}

#[tokio::test]
async fn simulate_endpoint_rejects_mismatched_lengths_with_422() {
    let body = json!({
        "schedule": [],
        "elo_values": [1500.0, 1500.0],
        "team_names": ["Only one"],
        "iterations": 10,
        "mod_factor": 20.0,
        "home_advantage": 65.0
    });

    let (status, response) = post_json("/simulate", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error = response["error"].as_str().unwrap();
    assert!(error.contains("team_names"), "error should name the offending field: {error}");
}

#[tokio::test]
async fn simulate_endpoint_rejects_zero_iterations() {
    let body = json!({
        "schedule": [],
        "elo_values": [1500.0],
        "team_names": ["Solo"],
        "iterations": 0,
        "mod_factor": 20.0,
        "home_advantage": 0.0
    });

    let (status, response) = post_json("/simulate", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response["error"].as_str().unwrap().contains("iterations"));
}

#[tokio::test]
async fn batch_endpoint_reports_per_league_results() {
    let good = json!({
        "schedule": [{"team_home": 0, "team_away": 1, "goals_home": 1, "goals_away": 0}],
        "elo_values": [1500.0, 1500.0],
        "team_names": ["A", "B"],
        "iterations": 5,
        "mod_factor": 20.0,
        "home_advantage": 0.0
    });
    let bad = json!({
        "schedule": [],
        "elo_values": [1500.0],
        "team_names": ["Only one", "extra"],
        "iterations": 5,
        "mod_factor": 20.0,
        "home_advantage": 0.0
    });

    let body = json!({
        "leagues": [
            {"name": "Liga A", "request": good},
            {"name": "Liga B", "request": bad},
        ]
    });

    let (status, response) = post_json("/simulate/batch", body).await;

    assert_eq!(status, StatusCode::OK);
    let results = response["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);

    let liga_a = results.iter().find(|r| r["name"] == "Liga A").unwrap();
    assert!(liga_a.get("response").is_some());
    assert!(liga_a.get("error").is_none());

    let liga_b = results.iter().find(|r| r["name"] == "Liga B").unwrap();
    assert!(liga_b.get("error").is_some(), "malformed league should carry a per-entry error");
    assert!(response.get("total_time_ms").is_some());
}
