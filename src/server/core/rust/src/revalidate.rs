/* src/server/core/rust/src/revalidate.rs */

/// One navigation transition as seen by the routing layer.
#[derive(Debug, Clone)]
pub struct NavigationEvent {
  /// Method of the action that triggered the navigation. `None` when the
  /// navigation has no action attached.
  pub method: Option<String>,
  pub from_url: String,
  pub to_url: String,
  /// Caller-signalled refresh intent. Routers honor it by re-entering the
  /// current URL, which rule 2 below catches; the decision itself does not
  /// read this flag.
  pub explicit_refresh: bool,
}

fn is_read_method(method: &str) -> bool {
  method.eq_ignore_ascii_case("GET") || method.eq_ignore_ascii_case("HEAD")
}

/// Decide whether cached page data must be refreshed for this navigation.
///
/// First match wins: a mutating action always revalidates; re-entering the
/// same URL always revalidates; every other read navigation reuses the data
/// already loaded. Pure: nothing outside `event` is consulted.
pub fn should_revalidate(event: &NavigationEvent) -> bool {
  if let Some(method) = &event.method
    && !is_read_method(method)
  {
    return true;
  }
  if event.from_url == event.to_url {
    return true;
  }
  false
}
