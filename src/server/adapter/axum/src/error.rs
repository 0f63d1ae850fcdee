/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use vitrine_server::{ErrorCode, VitrineError};

/// Wrapper giving core errors an HTTP response shape. "Not found" stays
/// distinguishable from a generic failure; validation mistakes are the
/// caller's fault; everything else is a server-side 500.
pub(crate) struct AxumError(pub(crate) VitrineError);

impl From<VitrineError> for AxumError {
  fn from(err: VitrineError) -> Self {
    Self(err)
  }
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let status = match self.0.code {
      ErrorCode::NotFound => StatusCode::NOT_FOUND,
      ErrorCode::Validation => StatusCode::BAD_REQUEST,
      ErrorCode::Upstream | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
      log::error!("page request failed: {}", self.0);
    }
    let body = axum::Json(serde_json::json!({ "ok": false, "error": self.0 }));
    (status, body).into_response()
  }
}
