/* demos/storefront/src/main.rs */

mod fetchers;

use std::env;

use vitrine_server::{
  Locale, PublicEnv, Storefront, from_accept_language, from_cookie, from_url_prefix,
  from_url_query,
};
use vitrine_server_axum::IntoAxumRouter;

use fetchers::{cart, consent, footer_menu, header_menu, layout, login_status, reviews_bootstrap};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::init();

  let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
  let addr = format!("0.0.0.0:{port}");

  // "prefix" routes locales as /fr-CA/...; "hidden" keeps them out of the URL
  let mode = env::var("LOCALE_MODE").unwrap_or_else(|_| "hidden".to_string());
  log::info!("locale mode: {mode}");

  let mut storefront = Storefront::new()
    .env(PublicEnv::from_env())
    .supported_locales(vec![
      Locale::new("en", "US"),
      Locale::new("en", "CA"),
      Locale::new("fr", "CA"),
      Locale::new("ja", "JP"),
    ])
    .critical(layout())
    .critical(consent())
    .critical(reviews_bootstrap())
    .deferred(header_menu())
    .deferred(footer_menu())
    .deferred(cart())
    .deferred(login_status());

  storefront = match mode.as_str() {
    "prefix" => storefront.resolve_strategies(vec![
      from_url_prefix(),
      from_cookie("locale"),
      from_accept_language(),
    ]),
    _ => storefront.resolve_strategies(vec![
      from_url_query("locale"),
      from_cookie("locale"),
      from_accept_language(),
    ]),
  };

  storefront.serve(&addr).await
}
