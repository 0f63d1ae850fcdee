/* src/server/core/rust/src/request.rs */

/// Read-only descriptor of one incoming page navigation. Built once by the
/// adapter from the framework request and never mutated during orchestration.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
  /// HTTP-style method of the triggering action. `None` for a plain
  /// navigation with no action attached.
  pub method: Option<String>,
  /// Path plus query of the requested page.
  pub url: String,
  /// Locale segment extracted from the URL path by the router, when the
  /// url-prefix strategy is routed (e.g. "/fr-ca/cart" yields "fr-ca").
  pub path_locale: Option<String>,
  /// Raw Cookie header, if present.
  pub cookie_header: Option<String>,
  /// Raw Accept-Language header, if present.
  pub accept_language: Option<String>,
}

impl PageRequest {
  /// Plain GET navigation to `url` with no locale context.
  pub fn get(url: impl Into<String>) -> Self {
    Self { method: Some("GET".to_string()), url: url.into(), ..Self::default() }
  }
}
