//! In-process fake metrics API shared by the integration tests.
#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use metricdash::config::Config;
use serde_json::json;

pub const KEY: &str = "secret";

#[derive(Clone, Default)]
pub struct Fake {
    pub hits: Arc<AtomicUsize>,
    pub fail: Arc<AtomicBool>,
    pub garbage: Arc<AtomicBool>,
}

impl Fake {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn set_fail(&self, on: bool) {
        self.fail.store(on, Ordering::SeqCst);
    }

    pub fn set_garbage(&self, on: bool) {
        self.garbage.store(on, Ordering::SeqCst);
    }
}

pub fn sample_body(host: &str) -> serde_json::Value {
    json!({
        "data": {
            "id": 1,
            "hostname": host,
            "cpu_load": 42.5,
            "memory_used": 2147483648u64,
            "memory_total": 4294967296u64,
            "disk_used": 10737418240u64,
            "disk_total": 107374182400u64,
            "net_rx": 1048576,
            "net_tx": 2097152,
            "timestamp": "2024-05-01T12:00:00Z"
        }
    })
}

async fn metrics(State(fake): State<Fake>, Path(host): Path<String>, headers: HeaderMap) -> Response {
    fake.hits.fetch_add(1, Ordering::SeqCst);
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if auth != format!("Bearer {KEY}") {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if fake.fail.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    if fake.garbage.load(Ordering::SeqCst) {
        return (StatusCode::OK, "{not json").into_response();
    }
    Json(sample_body(&host)).into_response()
}

/// Starts the fake API on an ephemeral port.
pub async fn serve() -> (SocketAddr, Fake) {
    let fake = Fake::default();
    let app = Router::new()
        .route("/api/metrics/:host", get(metrics))
        .with_state(fake.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, fake)
}

pub fn config(addr: SocketAddr, key: Option<&str>) -> Config {
    let base = format!("http://{addr}");
    let key = key.map(String::from);
    let mut cfg = Config::from_lookup(move |k| match k {
        "METRICDASH_API_URL" => Some(base.clone()),
        "METRICDASH_HOSTNAME" => Some("h1".into()),
        "METRICDASH_API_KEY" => key.clone(),
        _ => None,
    })
    .unwrap();
    cfg.interval = Duration::from_millis(50);
    cfg
}
