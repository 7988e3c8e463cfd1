// File: crates/artistry_gcal/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{__path_get_artist_slots_handler, __path_get_time_slots_handler};
use crate::logic::{ArtistSlotsQuery, TimeSlotsQuery, TimeSlotsResponse};

#[derive(OpenApi)]
#[openapi(
    paths(get_time_slots_handler, get_artist_slots_handler),
    components(schemas(TimeSlotsQuery, ArtistSlotsQuery, TimeSlotsResponse)),
    tags(
        (name = "Calendar", description = "Free appointment slots from artist calendars")
    )
)]
pub struct GcalApiDoc;
