/* src/server/core/rust/src/errors.rs */

use serde::Serialize;

/// Error taxonomy for one page request.
///
/// `NotFound` and `Validation` describe caller mistakes; `Upstream` covers a
/// failed data-source call; `Internal` covers everything that should never
/// happen (task panics, missing required upstream data). Adapters map codes
/// to response statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
  NotFound,
  Validation,
  Upstream,
  Internal,
}

#[derive(Debug, Clone, Serialize)]
pub struct VitrineError {
  pub code: ErrorCode,
  pub message: String,
  /// Whether a retry by the caller could plausibly succeed.
  pub transient: bool,
}

impl VitrineError {
  pub fn not_found(message: impl Into<String>) -> Self {
    Self { code: ErrorCode::NotFound, message: message.into(), transient: false }
  }

  pub fn validation(message: impl Into<String>) -> Self {
    Self { code: ErrorCode::Validation, message: message.into(), transient: false }
  }

  pub fn upstream(message: impl Into<String>) -> Self {
    Self { code: ErrorCode::Upstream, message: message.into(), transient: true }
  }

  pub fn internal(message: impl Into<String>) -> Self {
    Self { code: ErrorCode::Internal, message: message.into(), transient: false }
  }

  pub fn is_not_found(&self) -> bool {
    self.code == ErrorCode::NotFound
  }
}

impl std::fmt::Display for VitrineError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?}: {}", self.code, self.message)
  }
}

impl std::error::Error for VitrineError {}
