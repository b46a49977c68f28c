use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{admin, f1};
use crate::utils::state::AppState;

pub fn f1_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/driver_standings/{year}", get(f1::driver_standings))
        .route("/constructor_standings/{year}", get(f1::constructor_standings))
        .route("/drivers/{year}", get(f1::drivers))
        .route("/constructors/{year}", get(f1::constructors))
        .route("/circuits/{year}", get(f1::circuits))
        .route("/seasons", get(f1::seasons))
        .route("/results/{year}", get(f1::results))
        .route("/results/{year}/{round}", get(f1::results_by_round))
        .route("/qualifying/{year}/{round}", get(f1::qualifying))
        .route("/schedule/{year}", get(f1::schedule))
        .route("/cache/clear", post(admin::clear_cache))
        .route("/health", get(admin::health))
}
