//! In-process stand-in for the fare backend.

#![allow(dead_code)]

use amadeus_analytics::models::{SearchParams, TripType};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::Redirect,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct StubBackend {
    pub url: String,
    /// Answers with a temporary redirect to `url`.
    pub moved_url: String,
    reply: Arc<Mutex<(StatusCode, String)>>,
    seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl StubBackend {
    pub async fn start(status: StatusCode, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub backend");
        let addr = listener.local_addr().unwrap();
        let stub = StubBackend {
            url: format!("http://{addr}/fares"),
            moved_url: format!("http://{addr}/moved"),
            reply: Arc::new(Mutex::new((status, body.to_string()))),
            seen: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route("/fares", get(reply))
            .route("/moved", get(|| async { Redirect::temporary("/fares") }))
            .with_state(stub.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub backend stopped");
        });

        stub
    }

    pub async fn set_reply(&self, status: StatusCode, body: &str) {
        *self.reply.lock().await = (status, body.to_string());
    }

    pub async fn requests(&self) -> Vec<HashMap<String, String>> {
        self.seen.lock().await.clone()
    }
}

async fn reply(
    State(stub): State<StubBackend>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    stub.seen.lock().await.push(query);
    let (status, body) = stub.reply.lock().await.clone();
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

/// A local URL nothing listens on.
pub fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/fares")
}

pub fn paris_lisbon() -> SearchParams {
    SearchParams {
        origin: "PAR".to_string(),
        destination: "LIS".to_string(),
        trip_type: TripType::RoundTrip,
        date_min: NaiveDate::from_ymd_opt(2020, 11, 17).unwrap(),
        date_max: NaiveDate::from_ymd_opt(2025, 11, 17).unwrap(),
    }
}

pub const PARIS_LISBON_FARES: &str = r#"[
    {"airline": "AF", "advance_purchase": 10, "price": 120},
    {"airline": "TP", "advance_purchase": 10, "price": 95},
    {"airline": "AF", "advance_purchase": 5, "price": 150}
]"#;
