// --- File: crates/artistry_booking/src/lib.rs ---

pub mod doc;
pub mod handlers; // Axum handler for POST /booking
pub mod logic; // Validation, catalog lookup, event and email composition
pub mod routes;

pub use handlers::BookingState;
pub use routes::routes;
