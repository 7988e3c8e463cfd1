// --- File: crates/artistry_booking/src/routes.rs ---

use crate::handlers::{book_appointment_handler, BookingState};
use axum::{routing::post, Router};
use std::sync::Arc;

/// Creates a router containing the booking route.
pub fn routes(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/booking", post(book_appointment_handler))
        .with_state(state)
}
