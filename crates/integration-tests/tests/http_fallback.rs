//! Fetch-with-fallback over real HTTP
//!
//! Every test stands up its own backend so response shapes stay isolated.

mod common;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use common::{job_json, repo_for, spawn_backend, unreachable_repo};
use fieldsync_core::domain::fallback_jobs;
use serde_json::{json, Value};

fn ids(jobs: &[fieldsync_core::domain::Job]) -> Vec<&str> {
    jobs.iter().map(|j| j.id.as_str()).collect()
}

#[tokio::test]
async fn test_bare_array_is_returned_unchanged() {
    let router = Router::new().route(
        "/api/jobs",
        get(|| async {
            Json(json!([
                job_json("c", "Carol"),
                job_json("a", "Alan"),
                job_json("b", "Bea")
            ]))
        }),
    );
    let base = spawn_backend(router).await;

    let jobs = repo_for(&base).fetch_jobs().await;
    assert_eq!(ids(&jobs), vec!["c", "a", "b"]);
    assert_eq!(jobs[1].customer, "Alan");
}

#[tokio::test]
async fn test_envelope_is_unwrapped() {
    let router = Router::new().route(
        "/api/jobs",
        get(|| async { Json(json!({ "jobs": [job_json("x", "Xena")], "page": 1 })) }),
    );
    let base = spawn_backend(router).await;

    let jobs = repo_for(&base).fetch_jobs().await;
    assert_eq!(ids(&jobs), vec!["x"]);
}

#[tokio::test]
async fn test_other_success_shape_is_empty() {
    let router = Router::new().route(
        "/api/jobs",
        get(|| async { Json(json!({ "status": "ok" })) }),
    );
    let base = spawn_backend(router).await;

    assert!(repo_for(&base).fetch_jobs().await.is_empty());
}

#[tokio::test]
async fn test_falsy_jobs_field_is_empty() {
    for body in [json!({ "jobs": false }), json!({ "jobs": 0 }), json!({ "jobs": "" })] {
        let router = Router::new().route(
            "/api/jobs",
            get(move || {
                let body = body.clone();
                async move { Json(body) }
            }),
        );
        let base = spawn_backend(router).await;

        assert!(repo_for(&base).fetch_jobs().await.is_empty());
    }
}

#[tokio::test]
async fn test_server_error_serves_fallback() {
    let router = Router::new().route("/api/jobs", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let base = spawn_backend(router).await;

    let jobs = repo_for(&base).fetch_jobs().await;
    assert_eq!(ids(&jobs), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_malformed_body_serves_fallback() {
    let router = Router::new().route("/api/jobs", get(|| async { "<html>oops</html>" }));
    let base = spawn_backend(router).await;

    assert_eq!(repo_for(&base).fetch_jobs().await, fallback_jobs());
}

#[tokio::test]
async fn test_missing_route_serves_fallback() {
    // No /api/jobs route at all: 404
    let base = spawn_backend(Router::new()).await;
    assert_eq!(repo_for(&base).fetch_jobs().await, fallback_jobs());
}

#[tokio::test]
async fn test_unreachable_backend_serves_fallback() {
    let repo = unreachable_repo();
    assert_eq!(ids(&repo.fetch_jobs().await), vec!["1", "2", "3"]);
    assert_eq!(repo.fetch_job_by_id("2").await.unwrap().customer, "Bob Johnson");
    assert!(repo.fetch_job_by_id("999").await.is_none());
}

#[tokio::test]
async fn test_record_is_fetched_by_id() {
    let router = Router::new().route(
        "/api/jobs/:id",
        get(|Path(id): Path<String>| async move { Json(job_json(&id, "Live Customer")) }),
    );
    let base = spawn_backend(router).await;

    let job = repo_for(&base).fetch_job_by_id("2").await.unwrap();
    assert_eq!(job.id, "2");
    assert_eq!(job.customer, "Live Customer");
}

#[tokio::test]
async fn test_record_not_found_uses_fallback_lookup() {
    let router = Router::new().route(
        "/api/jobs/:id",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "detail": "not found" }))) }),
    );
    let base = spawn_backend(router).await;
    let repo = repo_for(&base);

    assert_eq!(repo.fetch_job_by_id("3").await.unwrap().customer, "Maria Garcia");
    assert!(repo.fetch_job_by_id("42").await.is_none());
}

#[tokio::test]
async fn test_record_with_bad_shape_uses_fallback_lookup() {
    let router = Router::new().route(
        "/api/jobs/:id",
        get(|| async { Json(Value::Array(vec![])) }),
    );
    let base = spawn_backend(router).await;

    let job = repo_for(&base).fetch_job_by_id("1").await.unwrap();
    assert_eq!(job.customer, "Jane Smith");
}
