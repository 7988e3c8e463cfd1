// --- File: crates/artistry_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{ArtistryError, HttpStatusCode};

// Include the client module
pub mod client;

/// Renders an `ArtistryError` as `{"error": {"message", "code"}}` with the mapped status.
impl IntoResponse for ArtistryError {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
            }
        }));

        (status_code, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::conflict;

    #[tokio::test]
    async fn error_renders_json_body_with_status() {
        let response = conflict("slot taken").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], 409);
        assert_eq!(body["error"]["message"], "Conflict: slot taken");
    }
}
