/* src/server/core/rust/src/page.rs */

use serde_json::{Map, Value};

use crate::deferred::DeferredBundle;
use crate::env::PublicEnv;
use crate::locale::Locale;

/// Slot holding the raw layout/shop-metadata query result. Required on every
/// page; its absence is a programming error, not a recoverable condition.
pub const SLOT_LAYOUT: &str = "layout";
/// Slot derived from `layout`: the shop metadata object itself.
pub const SLOT_SHOP: &str = "shop";
/// Slot derived from `shop` + request URL: the root SEO payload.
pub const SLOT_SEO: &str = "seo";

/// Everything the rendering layer needs for one page. Critical slots are
/// fully resolved by the time this value exists; deferred slots are pending
/// handles that settle independently and in any order. Assembled fresh per
/// request and discarded once the response is fully sent.
#[derive(Debug)]
pub struct PageData {
  pub critical: Map<String, Value>,
  pub deferred: DeferredBundle,
  pub selected_locale: Locale,
  pub env: PublicEnv,
}

impl PageData {
  fn slot(&self, name: &str) -> &Value {
    self.critical.get(name).unwrap_or(&Value::Null)
  }

  pub fn layout(&self) -> &Value {
    self.slot(SLOT_LAYOUT)
  }

  pub fn shop(&self) -> &Value {
    self.slot(SLOT_SHOP)
  }

  pub fn seo(&self) -> &Value {
    self.slot(SLOT_SEO)
  }
}
