//! Shared helpers: a throwaway backend on an ephemeral port

#![allow(dead_code)]

use axum::Router;
use fieldsync_core::application::JobRepository;
use fieldsync_infra_http::{HttpConfig, HttpJobSource};
use serde_json::{json, Value};
use std::sync::Arc;

/// Serve `router` on 127.0.0.1 and return its base URL
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn repo_for(base_url: &str) -> JobRepository {
    let source = HttpJobSource::new(HttpConfig::new(base_url).unwrap());
    JobRepository::new(Arc::new(source))
}

/// Nothing listens on the discard port
pub fn unreachable_repo() -> JobRepository {
    repo_for("http://127.0.0.1:9")
}

pub fn job_json(id: &str, customer: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Live job {}", id),
        "customer": customer,
        "address": "1 Live St",
        "status": "scheduled",
        "scheduledAt": "2025-05-05T08:00:00Z",
        "modelUrl": format!("https://cdn.example.com/{}.glb", id)
    })
}
