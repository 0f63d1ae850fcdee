/* src/server/core/rust/src/server.rs */

use crate::env::PublicEnv;
use crate::fetch::FetcherDef;
use crate::locale::Locale;
use crate::orchestrate::PageContext;
use crate::resolve::{ResolveStrategy, default_strategies};

/// Builder wiring one storefront's data sources and locale machinery.
/// Adapter crates consume the finished [`PageContext`] to serve pages.
pub struct Storefront {
  critical: Vec<FetcherDef>,
  deferred: Vec<FetcherDef>,
  env: PublicEnv,
  strategies: Vec<Box<dyn ResolveStrategy>>,
  supported_locales: Vec<Locale>,
}

impl Storefront {
  pub fn new() -> Self {
    Self {
      critical: Vec::new(),
      deferred: Vec::new(),
      env: PublicEnv::default(),
      strategies: Vec::new(),
      supported_locales: Vec::new(),
    }
  }

  /// Register a blocking fetch: the page cannot render without this slot.
  pub fn critical(mut self, fetcher: FetcherDef) -> Self {
    self.critical.push(fetcher);
    self
  }

  /// Register a background fetch: this slot degrades to absent on failure.
  pub fn deferred(mut self, fetcher: FetcherDef) -> Self {
    self.deferred.push(fetcher);
    self
  }

  pub fn env(mut self, env: PublicEnv) -> Self {
    self.env = env;
    self
  }

  pub fn resolve_strategies(mut self, strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
    self.strategies = strategies;
    self
  }

  pub fn supported_locales(mut self, locales: Vec<Locale>) -> Self {
    self.supported_locales = locales;
    self
  }

  /// Consume the builder. Uses the default strategy chain when none was
  /// configured.
  pub fn into_context(self) -> PageContext {
    let strategies =
      if self.strategies.is_empty() { default_strategies() } else { self.strategies };
    PageContext {
      critical: self.critical,
      deferred: self.deferred,
      env: self.env,
      strategies,
      supported_locales: self.supported_locales,
    }
  }
}

impl Default for Storefront {
  fn default() -> Self {
    Self::new()
  }
}
