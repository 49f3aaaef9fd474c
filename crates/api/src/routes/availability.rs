use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/restaurants/:id/dates",
            get(handlers::availability::get_available_dates),
        )
        .route(
            "/api/restaurants/:id/slots",
            get(handlers::availability::get_time_slots),
        )
}
