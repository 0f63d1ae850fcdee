/* src/server/core/rust/src/env.rs */

use std::env;

use serde::Serialize;

/// Environment values passed through to the rendering layer. Everything here
/// is public by construction (it ends up embedded in the page payload), so
/// secrets must never be added to this struct.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicEnv {
  pub public_store_domain: String,
  pub public_storefront_api_token: String,
  pub public_checkout_domain: String,
}

impl PublicEnv {
  /// Read from process env vars, falling back to local-dev placeholders.
  pub fn from_env() -> Self {
    Self {
      public_store_domain: var_or("PUBLIC_STORE_DOMAIN", "shop.example.com"),
      public_storefront_api_token: var_or("PUBLIC_STOREFRONT_API_TOKEN", "dev-token"),
      public_checkout_domain: var_or("PUBLIC_CHECKOUT_DOMAIN", "checkout.example.com"),
    }
  }
}

impl Default for PublicEnv {
  fn default() -> Self {
    Self {
      public_store_domain: "shop.example.com".to_string(),
      public_storefront_api_token: "dev-token".to_string(),
      public_checkout_domain: "checkout.example.com".to_string(),
    }
  }
}

fn var_or(name: &str, fallback: &str) -> String {
  env::var(name).unwrap_or_else(|_| fallback.to_string())
}
