/* src/server/core/rust/src/resolve.rs */

use crate::locale::Locale;

/// Request-derived inputs a strategy may consult. Borrowed from the
/// [`PageRequest`](crate::request::PageRequest) by the orchestrator.
pub struct ResolveData<'a> {
  /// Path plus query of the requested page.
  pub url: &'a str,
  /// Locale path segment already split off by the router, if any.
  pub path_locale: Option<&'a str>,
  /// Raw Cookie header.
  pub cookie_header: Option<&'a str>,
  /// Raw Accept-Language header.
  pub accept_language: Option<&'a str>,
  /// Locales the storefront actually serves. Empty means "accept anything".
  pub supported: &'a [Locale],
  pub default_locale: &'a Locale,
}

/// One way of extracting a locale candidate from a request. Strategies are
/// chained in caller-chosen order; the first candidate that validates against
/// the supported set wins.
pub trait ResolveStrategy: Send + Sync {
  fn kind(&self) -> &'static str;
  fn resolve(&self, data: &ResolveData) -> Option<Locale>;
}

struct UrlPrefix;

impl ResolveStrategy for UrlPrefix {
  fn kind(&self) -> &'static str {
    "url_prefix"
  }

  fn resolve(&self, data: &ResolveData) -> Option<Locale> {
    data.path_locale.and_then(Locale::parse)
  }
}

struct UrlQuery {
  param: String,
}

impl ResolveStrategy for UrlQuery {
  fn kind(&self) -> &'static str {
    "url_query"
  }

  fn resolve(&self, data: &ResolveData) -> Option<Locale> {
    let (_, query) = data.url.split_once('?')?;
    query
      .split('&')
      .filter_map(|pair| pair.split_once('='))
      .find(|(key, _)| *key == self.param)
      .and_then(|(_, value)| Locale::parse(value))
  }
}

struct Cookie {
  name: String,
}

impl ResolveStrategy for Cookie {
  fn kind(&self) -> &'static str {
    "cookie"
  }

  fn resolve(&self, data: &ResolveData) -> Option<Locale> {
    let header = data.cookie_header?;
    header
      .split(';')
      .filter_map(|pair| pair.trim().split_once('='))
      .find(|(key, _)| *key == self.name)
      .and_then(|(_, value)| Locale::parse(value))
  }
}

struct AcceptLanguage;

impl ResolveStrategy for AcceptLanguage {
  fn kind(&self) -> &'static str {
    "accept_language"
  }

  fn resolve(&self, data: &ResolveData) -> Option<Locale> {
    // First listed tag only; q-weights are not re-ordered here.
    let header = data.accept_language?;
    let first = header.split(',').next()?;
    let tag = first.split(';').next()?.trim();
    if tag == "*" {
      return None;
    }
    Locale::parse(tag)
  }
}

pub fn from_url_prefix() -> Box<dyn ResolveStrategy> {
  Box::new(UrlPrefix)
}

pub fn from_url_query(param: &str) -> Box<dyn ResolveStrategy> {
  Box::new(UrlQuery { param: param.to_string() })
}

pub fn from_cookie(name: &str) -> Box<dyn ResolveStrategy> {
  Box::new(Cookie { name: name.to_string() })
}

pub fn from_accept_language() -> Box<dyn ResolveStrategy> {
  Box::new(AcceptLanguage)
}

/// Chain used when the application configures nothing.
pub fn default_strategies() -> Vec<Box<dyn ResolveStrategy>> {
  vec![from_url_query("locale"), from_cookie("locale"), from_accept_language()]
}

/// Validate a candidate against the supported set. Exact match first, then a
/// language-only match adopting the supported variant's country.
fn validate(candidate: Locale, supported: &[Locale]) -> Option<Locale> {
  if supported.is_empty() {
    return Some(candidate);
  }
  if let Some(exact) = supported.iter().find(|s| **s == candidate) {
    return Some(exact.clone());
  }
  supported.iter().find(|s| s.matches_language(&candidate)).cloned()
}

/// Walk the strategy chain; fall back to the default locale when no strategy
/// produces a supported candidate.
pub fn resolve_chain(strategies: &[Box<dyn ResolveStrategy>], data: &ResolveData) -> Locale {
  for strategy in strategies {
    if let Some(candidate) = strategy.resolve(data)
      && let Some(locale) = validate(candidate, data.supported)
    {
      return locale;
    }
  }
  data.default_locale.clone()
}
