/* src/server/core/rust/src/seo.rs */

use serde::Serialize;
use serde_json::Value;

/// Root SEO payload, derived from shop metadata once the critical join has
/// completed. Pure data; the adapter turns it into head markup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoPayload {
  pub title: String,
  pub title_template: String,
  pub description: String,
  pub url: String,
  pub robots: Robots,
  pub json_ld: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Robots {
  pub no_index: bool,
  pub no_follow: bool,
}

/// Build the root payload from the shop object of the layout query.
pub fn root(shop: &Value, url: &str) -> SeoPayload {
  let name = shop.get("name").and_then(Value::as_str).unwrap_or("Storefront");
  let description = shop
    .get("description")
    .and_then(Value::as_str)
    .unwrap_or("")
    .to_string();

  SeoPayload {
    title: name.to_string(),
    title_template: format!("%s | {name}"),
    description,
    url: url.to_string(),
    robots: Robots { no_index: false, no_follow: false },
    json_ld: serde_json::json!({
      "@context": "https://schema.org",
      "@type": "Organization",
      "name": name,
      "url": url,
    }),
  }
}
