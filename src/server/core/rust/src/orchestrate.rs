/* src/server/core/rust/src/orchestrate.rs */

use serde_json::{Map, Value};
use tokio::task::JoinSet;

use crate::deferred::{Deferred, DeferredBundle};
use crate::env::PublicEnv;
use crate::errors::VitrineError;
use crate::fetch::{FetchContext, FetcherDef};
use crate::locale::Locale;
use crate::page::{PageData, SLOT_LAYOUT, SLOT_SEO, SLOT_SHOP};
use crate::request::PageRequest;
use crate::resolve::{ResolveData, ResolveStrategy, resolve_chain};
use crate::seo;

/// Capability handles for one storefront: the critical and deferred data
/// sources, the locale machinery, and the env values passed through to the
/// client. Built once via [`Storefront`](crate::server::Storefront) and
/// shared across requests; all per-request state lives in [`PageData`].
pub struct PageContext {
  pub critical: Vec<FetcherDef>,
  pub deferred: Vec<FetcherDef>,
  pub env: PublicEnv,
  pub strategies: Vec<Box<dyn ResolveStrategy>>,
  pub supported_locales: Vec<Locale>,
}

fn resolve_locale(request: &PageRequest, context: &PageContext) -> Locale {
  let default_locale = Locale::default();
  let data = ResolveData {
    url: &request.url,
    path_locale: request.path_locale.as_deref(),
    cookie_header: request.cookie_header.as_deref(),
    accept_language: request.accept_language.as_deref(),
    supported: &context.supported_locales,
    default_locale: &default_locale,
  };
  resolve_chain(&context.strategies, &data)
}

/// Run the critical fetchers concurrently and join them all. Any failure,
/// including a task panic, fails the whole set; no partial result escapes.
async fn join_critical(
  fetchers: &[FetcherDef],
  ctx: &FetchContext,
) -> Result<Map<String, Value>, VitrineError> {
  let mut join_set = JoinSet::new();

  for fetcher in fetchers {
    let slot = fetcher.slot.clone();
    let handler = fetcher.handler.clone();
    let ctx = ctx.clone();
    join_set.spawn(async move {
      let value = handler(ctx).await?;
      Ok::<(String, Value), VitrineError>((slot, value))
    });
  }

  let mut critical = Map::new();
  while let Some(result) = join_set.join_next().await {
    let (slot, value) = result
      .map_err(|e| VitrineError::internal(e.to_string()))? // JoinError -> Internal (task panic)
      ?; // fetch errors propagate unchanged
    critical.insert(slot, value);
  }
  Ok(critical)
}

/// Build the full data payload for one page request.
///
/// Deferred fetches are issued first so they overlap the critical join and
/// the response transmission that follows; each one converts its own failure
/// to an absent value at issue time. The critical set is then joined
/// all-or-nothing, and the `shop`/`seo` slots are derived from the layout
/// result before anything is returned.
pub async fn build_page_data(
  request: &PageRequest,
  context: &PageContext,
) -> Result<PageData, VitrineError> {
  let selected_locale = resolve_locale(request, context);
  let fetch_ctx = FetchContext { locale: selected_locale.clone(), url: request.url.clone() };

  let mut deferred = DeferredBundle::default();
  for fetcher in &context.deferred {
    let fut = (fetcher.handler)(fetch_ctx.clone());
    deferred.insert(Deferred::spawn(fetcher.slot.clone(), fut));
  }

  let mut critical = join_critical(&context.critical, &fetch_ctx).await?;

  // Derived critical slots. The layout query not producing a shop object is
  // an assertion failure per the error taxonomy, surfaced as Internal.
  let layout = critical.get(SLOT_LAYOUT).cloned().unwrap_or(Value::Null);
  if layout.is_null() {
    return Err(VitrineError::internal("layout query returned no data"));
  }
  let shop = layout.get("shop").cloned().unwrap_or(Value::Null);
  if shop.is_null() {
    return Err(VitrineError::internal("layout query returned no shop"));
  }

  let seo_payload = seo::root(&shop, &request.url);
  let seo_value =
    serde_json::to_value(seo_payload).map_err(|e| VitrineError::internal(e.to_string()))?;
  critical.insert(SLOT_SHOP.to_string(), shop);
  critical.insert(SLOT_SEO.to_string(), seo_value);

  Ok(PageData { critical, deferred, selected_locale, env: context.env.clone() })
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::time::Duration;

  use super::*;
  use crate::fetch::fetcher;
  use crate::resolve::default_strategies;

  fn layout_fetcher() -> FetcherDef {
    fetcher(SLOT_LAYOUT, |_ctx| async {
      Ok(serde_json::json!({"shop": {"name": "Snow Devil", "description": "Alpine gear"}}))
    })
  }

  fn context(critical: Vec<FetcherDef>, deferred: Vec<FetcherDef>) -> PageContext {
    PageContext {
      critical,
      deferred,
      env: PublicEnv::default(),
      strategies: default_strategies(),
      supported_locales: vec![Locale::new("en", "US"), Locale::new("fr", "CA")],
    }
  }

  #[tokio::test]
  async fn critical_slots_are_resolved_and_derived() {
    let ctx = context(
      vec![
        layout_fetcher(),
        fetcher("consent", |_| async { Ok(serde_json::json!({"banner": true})) }),
      ],
      vec![],
    );
    let data = build_page_data(&PageRequest::get("/"), &ctx).await.unwrap();

    assert_eq!(data.shop()["name"], "Snow Devil");
    assert_eq!(data.seo()["title"], "Snow Devil");
    assert_eq!(data.critical["consent"], serde_json::json!({"banner": true}));
    assert_eq!(data.selected_locale, Locale::default());
  }

  #[tokio::test]
  async fn any_critical_failure_fails_the_whole_request() {
    let ctx = context(
      vec![
        layout_fetcher(),
        fetcher("consent", |_| async { Err(VitrineError::upstream("consent api down")) }),
      ],
      vec![],
    );
    let err = build_page_data(&PageRequest::get("/"), &ctx).await.unwrap_err();
    assert_eq!(err.code, crate::errors::ErrorCode::Upstream);
  }

  #[tokio::test]
  async fn critical_not_found_is_preserved() {
    let ctx = context(
      vec![fetcher(SLOT_LAYOUT, |_| async { Err(VitrineError::not_found("no such shop")) })],
      vec![],
    );
    let err = build_page_data(&PageRequest::get("/"), &ctx).await.unwrap_err();
    assert!(err.is_not_found());
  }

  #[tokio::test]
  async fn missing_shop_is_a_programming_error() {
    let ctx =
      context(vec![fetcher(SLOT_LAYOUT, |_| async { Ok(serde_json::json!({})) })], vec![]);
    let err = build_page_data(&PageRequest::get("/"), &ctx).await.unwrap_err();
    assert_eq!(err.code, crate::errors::ErrorCode::Internal);
  }

  #[tokio::test]
  async fn never_returns_before_all_critical_fetches_settle() {
    let settled = Arc::new(AtomicUsize::new(0));
    let (a, b) = (settled.clone(), settled.clone());
    let ctx = context(
      vec![
        layout_fetcher(),
        fetcher("consent", move |_| {
          let settled = a.clone();
          async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            settled.fetch_add(1, Ordering::SeqCst);
            Ok(Value::Bool(true))
          }
        }),
        fetcher("reviews_bootstrap", move |_| {
          let settled = b.clone();
          async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            settled.fetch_add(1, Ordering::SeqCst);
            Ok(Value::Bool(true))
          }
        }),
      ],
      vec![],
    );

    let data = build_page_data(&PageRequest::get("/"), &ctx).await.unwrap();
    assert_eq!(settled.load(Ordering::SeqCst), 2);
    assert_eq!(data.critical.len(), 5); // layout, consent, reviews_bootstrap + derived shop, seo
  }

  #[tokio::test]
  async fn deferred_failure_degrades_without_touching_the_rest() {
    let ctx = context(
      vec![layout_fetcher()],
      vec![
        fetcher("cart", |_| async { Err(VitrineError::upstream("cart down")) }),
        fetcher("header", |_| async { Ok(serde_json::json!({"menu": ["Home", "Sale"]})) }),
      ],
    );
    let mut data = build_page_data(&PageRequest::get("/"), &ctx).await.unwrap();

    assert_eq!(data.deferred.len(), 2);
    let cart = data.deferred.take("cart").unwrap().resolve().await;
    let header = data.deferred.take("header").unwrap().resolve().await;
    assert_eq!(cart, Value::Null);
    assert_eq!(header["menu"][1], "Sale");
    assert_eq!(data.shop()["name"], "Snow Devil");
  }

  #[tokio::test]
  async fn locale_defaults_when_context_has_none() {
    let ctx = context(vec![layout_fetcher()], vec![]);
    let data = build_page_data(&PageRequest::get("/products/a"), &ctx).await.unwrap();
    assert_eq!(data.selected_locale, Locale::new("en", "US"));
  }

  #[tokio::test]
  async fn locale_flows_from_cookie_into_fetch_context() {
    let ctx = context(
      vec![fetcher(SLOT_LAYOUT, |fctx: FetchContext| async move {
        Ok(serde_json::json!({"shop": {"name": format!("shop-{}", fctx.locale)}}))
      })],
      vec![],
    );
    let request = PageRequest {
      cookie_header: Some("locale=fr-CA".to_string()),
      ..PageRequest::get("/")
    };
    let data = build_page_data(&request, &ctx).await.unwrap();
    assert_eq!(data.selected_locale, Locale::new("fr", "CA"));
    assert_eq!(data.shop()["name"], "shop-fr-CA");
  }
}
