/* src/server/adapter/axum/src/document.rs */

use serde_json::Value;
use vitrine_server::{PageData, ascii_escape_json};

/// Script ID for the embedded critical-data JSON.
pub(crate) const DATA_SCRIPT_ID: &str = "__page_data";

pub(crate) fn escape_html(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for c in input.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
  out
}

/// Everything the client needs up front: resolved critical slots, the locale,
/// env passthrough, and the names of the slots still pending.
fn script_payload(data: &PageData, pending: &[String]) -> Value {
  serde_json::json!({
    "critical": Value::Object(data.critical.clone()),
    "selectedLocale": data.selected_locale,
    "env": data.env,
    "pending": pending,
  })
}

/// Placeholder markup a pending slot occupies until its payload streams in.
fn skeleton(slot: &str) -> String {
  format!(
    r#"<div class="skeleton" data-slot="{}" aria-busy="true" aria-hidden="true"></div>"#,
    escape_html(slot)
  )
}

/// Render the critical shell: head derived from the SEO payload, skeleton
/// placeholders for every pending slot, and the critical-data script. The
/// document is left open; deferred chunks and [`close_document`] follow on
/// the same response stream.
pub(crate) fn render_shell(data: &PageData, pending: &[String]) -> String {
  let seo = data.seo();
  let title = seo.get("title").and_then(Value::as_str).unwrap_or("Storefront");
  let description = seo.get("description").and_then(Value::as_str).unwrap_or("");

  let mut html = String::with_capacity(1024);
  html.push_str("<!doctype html>\n");
  html.push_str(&format!("<html lang=\"{}\">\n", data.selected_locale));
  html.push_str("<head>\n<meta charset=\"utf-8\">\n");
  html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
  html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
  if !description.is_empty() {
    html.push_str(&format!("<meta name=\"description\" content=\"{}\">\n", escape_html(description)));
  }
  html.push_str("</head>\n<body>\n<div id=\"app\">\n");
  for slot in pending {
    html.push_str(&skeleton(slot));
    html.push('\n');
  }
  html.push_str("</div>\n");

  let json = serde_json::to_string(&script_payload(data, pending)).unwrap_or_default();
  html.push_str(&format!(
    r#"<script id="{DATA_SCRIPT_ID}" type="application/json">{}</script>"#,
    ascii_escape_json(&json)
  ));
  html.push('\n');
  html
}

/// One streamed chunk carrying a settled deferred slot. A degraded slot
/// streams as `null`; the consumer replaces the matching skeleton either way.
pub(crate) fn deferred_chunk(slot: &str, value: &Value) -> String {
  let json = serde_json::to_string(value).unwrap_or_else(|_| "null".to_string());
  format!(
    "<script data-slot=\"{}\" type=\"application/json\">{}</script>\n",
    escape_html(slot),
    ascii_escape_json(&json)
  )
}

pub(crate) fn close_document() -> String {
  "</body>\n</html>\n".to_string()
}
