/* demos/storefront/src/fetchers.rs */

use vitrine_server::{FetchContext, FetcherDef, fetcher};

// -- critical slots --

pub fn layout() -> FetcherDef {
  fetcher("layout", |ctx: FetchContext| async move {
    Ok(serde_json::json!({
      "shop": {
        "name": "Snow Devil",
        "description": "Alpine gear for people who hate being warm",
        "primaryDomain": "https://shop.example.com",
      },
      "locale": ctx.locale.to_string(),
    }))
  })
}

pub fn consent() -> FetcherDef {
  fetcher("consent", |_ctx| async {
    Ok(serde_json::json!({
      "checkoutDomain": "checkout.example.com",
      "storefrontAccessToken": "dev-token",
      "withPrivacyBanner": true,
    }))
  })
}

pub fn reviews_bootstrap() -> FetcherDef {
  fetcher("reviews_bootstrap", |_ctx| async {
    Ok(serde_json::json!({
      "provider": "acme-reviews",
      "siteId": "demo-site",
    }))
  })
}

// -- deferred slots --

fn menu_label(locale: &vitrine_server::Locale, en: &str, fr: &str) -> String {
  if locale.language == "fr" { fr.to_string() } else { en.to_string() }
}

pub fn header_menu() -> FetcherDef {
  fetcher("header", |ctx: FetchContext| async move {
    Ok(serde_json::json!({
      "items": [
        {"title": menu_label(&ctx.locale, "Collections", "Collections"), "url": "/collections"},
        {"title": menu_label(&ctx.locale, "Blog", "Journal"), "url": "/blogs/journal"},
        {"title": menu_label(&ctx.locale, "About", "\u{00c0} propos"), "url": "/pages/about"},
      ],
    }))
  })
}

pub fn footer_menu() -> FetcherDef {
  fetcher("footer", |ctx: FetchContext| async move {
    Ok(serde_json::json!({
      "items": [
        {"title": menu_label(&ctx.locale, "Privacy Policy", "Confidentialit\u{00e9}"), "url": "/policies/privacy-policy"},
        {"title": menu_label(&ctx.locale, "Refund Policy", "Remboursements"), "url": "/policies/refund-policy"},
      ],
    }))
  })
}

pub fn cart() -> FetcherDef {
  fetcher("cart", |_ctx| async {
    Ok(serde_json::json!({
      "id": null,
      "totalQuantity": 0,
      "lines": [],
    }))
  })
}

pub fn login_status() -> FetcherDef {
  fetcher("is_logged_in", |_ctx| async { Ok(serde_json::json!(false)) })
}
