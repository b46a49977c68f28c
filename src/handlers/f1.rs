use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::models::envelope::{Envelope, Pagination};
use crate::models::error::GatewayError;
use crate::models::resource::{ResourceKind, Shape};
use crate::utils::state::AppState;
use crate::utils::ttl;

/// Cache-or-fetch for a single resource. A hit returns the cached value
/// untouched; a miss performs exactly one upstream call, extracts the
/// resource table and caches it under the year-derived TTL. A missing race
/// is reported without caching anything.
pub async fn fetch_resource(
    state: &AppState,
    kind: ResourceKind,
    year: Option<&str>,
    round: Option<&str>,
) -> Result<Value, GatewayError> {
    let key = kind.cache_key(year, round);
    if let Some(hit) = state.cache.get(&key) {
        return Ok(hit);
    }

    let body = state
        .upstream
        .get_json(&kind.upstream_path(year, round))
        .await?;
    let data = match kind.shape() {
        Shape::List => kind.extract(&body).unwrap_or_else(|| json!([])),
        Shape::Race => kind.extract(&body).ok_or(GatewayError::RaceNotFound)?,
    };

    let ttl_seconds = match kind {
        ResourceKind::Seasons => ttl::WEEK_SECS,
        _ => ttl::cache_timeout(year.unwrap_or_default()),
    };
    state.cache.set(&key, data.clone(), ttl_seconds);
    Ok(data)
}

fn respond(kind: ResourceKind, result: Result<Value, GatewayError>) -> Response {
    match result {
        Ok(data) => (StatusCode::OK, Json(Envelope::ok(data))).into_response(),
        Err(GatewayError::RaceNotFound) => (
            StatusCode::NOT_FOUND,
            Json(Envelope::fail("race not found", json!({}))),
        )
            .into_response(),
        Err(err) => {
            warn!("{:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Envelope::fail(&err.to_string(), kind.shape().empty())),
            )
                .into_response()
        }
    }
}

pub async fn driver_standings(
    State(state): State<Arc<AppState>>,
    Path(year): Path<String>,
) -> Response {
    let kind = ResourceKind::DriverStandings;
    respond(kind, fetch_resource(&state, kind, Some(&year), None).await)
}

pub async fn constructor_standings(
    State(state): State<Arc<AppState>>,
    Path(year): Path<String>,
) -> Response {
    let kind = ResourceKind::ConstructorStandings;
    respond(kind, fetch_resource(&state, kind, Some(&year), None).await)
}

pub async fn drivers(State(state): State<Arc<AppState>>, Path(year): Path<String>) -> Response {
    let kind = ResourceKind::Drivers;
    respond(kind, fetch_resource(&state, kind, Some(&year), None).await)
}

pub async fn constructors(
    State(state): State<Arc<AppState>>,
    Path(year): Path<String>,
) -> Response {
    let kind = ResourceKind::Constructors;
    respond(kind, fetch_resource(&state, kind, Some(&year), None).await)
}

pub async fn circuits(State(state): State<Arc<AppState>>, Path(year): Path<String>) -> Response {
    let kind = ResourceKind::Circuits;
    respond(kind, fetch_resource(&state, kind, Some(&year), None).await)
}

pub async fn results(State(state): State<Arc<AppState>>, Path(year): Path<String>) -> Response {
    let kind = ResourceKind::Results;
    respond(kind, fetch_resource(&state, kind, Some(&year), None).await)
}

pub async fn results_by_round(
    State(state): State<Arc<AppState>>,
    Path((year, round)): Path<(String, String)>,
) -> Response {
    let kind = ResourceKind::ResultsRound;
    respond(
        kind,
        fetch_resource(&state, kind, Some(&year), Some(&round)).await,
    )
}

pub async fn qualifying(
    State(state): State<Arc<AppState>>,
    Path((year, round)): Path<(String, String)>,
) -> Response {
    let kind = ResourceKind::Qualifying;
    respond(
        kind,
        fetch_resource(&state, kind, Some(&year), Some(&round)).await,
    )
}

pub async fn schedule(State(state): State<Arc<AppState>>, Path(year): Path<String>) -> Response {
    let kind = ResourceKind::Schedule;
    respond(kind, fetch_resource(&state, kind, Some(&year), None).await)
}

#[derive(Deserialize)]
pub struct SeasonsQuery {
    page: Option<u32>,
    per_page: Option<u32>,
}

/// Seasons listing. The full list is cached under one shared key; pagination
/// is applied in memory after retrieval, newest season first.
pub async fn seasons(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SeasonsQuery>,
) -> Response {
    let page = params.page.unwrap_or(1).max(1);
    let per_page = params.per_page.unwrap_or(30).max(1);

    let kind = ResourceKind::Seasons;
    match fetch_resource(&state, kind, None, None).await {
        Ok(data) => {
            let mut all: Vec<Value> = data.as_array().cloned().unwrap_or_default();
            all.sort_by_key(|season| {
                std::cmp::Reverse(
                    season["season"]
                        .as_str()
                        .and_then(|year| year.parse::<i32>().ok())
                        .unwrap_or(0),
                )
            });

            let total = all.len() as u32;
            let total_pages = total.div_ceil(per_page);
            let slice: Vec<Value> = all
                .into_iter()
                .skip((page as usize - 1) * per_page as usize)
                .take(per_page as usize)
                .collect();

            let pagination = Pagination {
                page,
                per_page,
                total,
                total_pages,
            };
            (
                StatusCode::OK,
                Json(Envelope::paginated(Value::Array(slice), pagination)),
            )
                .into_response()
        }
        Err(err) => respond(kind, Err(err)),
    }
}
