//! In-process stand-in for the upstream API: serves the roster index and
//! per-name detail records over real HTTP on an ephemeral port.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Clone, Default)]
pub struct MockApi {
    /// Index order; also the expected row order of every roster test.
    pub names: Vec<String>,
    /// Detail payload per name. Absent names answer 404.
    pub records: HashMap<String, Value>,
    /// Artificial response delay per name, to force out-of-order
    /// completion of the fan-out.
    pub delays_ms: HashMap<String, u64>,
    /// Names that answer with a bare error status instead of a body.
    pub broken: HashMap<String, u16>,
    /// When set, the index endpoint answers with this status.
    pub index_status: Option<u16>,
}

impl MockApi {
    pub fn with_records(records: Vec<(&str, Value)>) -> Self {
        let names = records.iter().map(|(n, _)| n.to_string()).collect();
        let records = records
            .into_iter()
            .map(|(n, v)| (n.to_string(), v))
            .collect();
        Self {
            names,
            records,
            ..Self::default()
        }
    }
}

/// Minimal but shape-complete detail record, the way the real API sends
/// it: nullable shiny sprites, six stats, one regular ability.
pub fn record(id: u32, name: &str, types: &[&str]) -> Value {
    let type_slots: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({"slot": i + 1, "type": {"name": t, "url": ""}}))
        .collect();
    let stats: Vec<Value> = [
        ("hp", 45),
        ("attack", 49),
        ("defense", 49),
        ("special-attack", 65),
        ("special-defense", 65),
        ("speed", 45),
    ]
    .iter()
    .map(|(stat, base)| json!({"base_stat": base, "effort": 0, "stat": {"name": stat, "url": ""}}))
    .collect();
    json!({
        "id": id,
        "name": name,
        "base_experience": 64,
        "height": 7,
        "weight": 69,
        "order": id,
        "is_default": true,
        "types": type_slots,
        "stats": stats,
        "abilities": [
            {"ability": {"name": "overgrow", "url": ""}, "is_hidden": false, "slot": 1}
        ],
        "sprites": {
            "front_default": format!("https://sprites.example/{id}.png"),
            "back_default": format!("https://sprites.example/back/{id}.png"),
            "front_shiny": null,
            "back_shiny": null
        },
        "species": {"name": name, "url": format!("https://api.example/pokemon-species/{id}/")},
        "held_items": []
    })
}

/// Start the mock and return a base URL for `PokeClient::with_base_url`.
pub async fn serve(api: MockApi) -> String {
    let app = Router::new()
        .route("/pokemon", get(index_handler))
        .route("/pokemon/:name", get(detail_handler))
        .with_state(Arc::new(api));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });
    format!("http://{}", addr)
}

async fn index_handler(
    State(api): State<Arc<MockApi>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(status) = api.index_status {
        return StatusCode::from_u16(status).unwrap().into_response();
    }
    let limit = params
        .get("limit")
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(api.names.len());
    let results: Vec<Value> = api
        .names
        .iter()
        .take(limit)
        .map(|name| json!({"name": name, "url": format!("https://api.example/pokemon/{name}/")}))
        .collect();
    Json(json!({ "results": results })).into_response()
}

async fn detail_handler(
    State(api): State<Arc<MockApi>>,
    Path(name): Path<String>,
) -> Response {
    if let Some(delay) = api.delays_ms.get(&name) {
        tokio::time::sleep(Duration::from_millis(*delay)).await;
    }
    if let Some(status) = api.broken.get(&name) {
        return StatusCode::from_u16(*status).unwrap().into_response();
    }
    match api.records.get(&name) {
        Some(body) => Json(body.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
