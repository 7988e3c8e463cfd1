// --- File: crates/artistry_booking/src/doc.rs ---

#![cfg(feature = "openapi")]

use utoipa::OpenApi;

use crate::handlers::__path_book_appointment_handler;
use crate::logic::{BookingRequest, BookingResponse};

#[derive(OpenApi)]
#[openapi(
    paths(book_appointment_handler),
    components(schemas(BookingRequest, BookingResponse)),
    tags(
        (name = "Booking", description = "Appointment booking")
    )
)]
pub struct BookingApiDoc;
