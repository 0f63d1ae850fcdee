/* src/server/adapter/axum/src/handler/page.rs */

use std::convert::Infallible;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use futures_util::StreamExt;
use tokio_stream::wrappers::ReceiverStream;
use vitrine_server::{
  Locale, NavigationEvent, PageRequest, build_page_data, should_revalidate,
};

use super::AppState;
use crate::document;
use crate::error::AxumError;

/// Set by the client router on subsequent-navigation requests: the URL the
/// navigation originated from. Lets the server answer 304 instead of
/// re-running loaders when revalidation is unnecessary.
const NAVIGATE_FROM: &str = "x-navigate-from";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
  headers.get(name).and_then(|v| v.to_str().ok())
}

/// When the leading path segment is a supported locale, it belongs to the
/// url-prefix strategy, not to the route.
fn split_path_locale(path: &str, supported: &[Locale]) -> Option<String> {
  let segment = path.trim_start_matches('/').split('/').next()?;
  let candidate = Locale::parse(segment)?;
  supported.iter().any(|s| *s == candidate).then(|| segment.to_string())
}

fn page_request(uri: &Uri, headers: &HeaderMap, supported: &[Locale]) -> PageRequest {
  let url = uri.path_and_query().map_or("/", |pq| pq.as_str()).to_string();
  PageRequest {
    method: Some("GET".to_string()),
    path_locale: split_path_locale(uri.path(), supported),
    cookie_header: header_str(headers, header::COOKIE.as_str()).map(String::from),
    accept_language: header_str(headers, header::ACCEPT_LANGUAGE.as_str()).map(String::from),
    url,
  }
}

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  uri: Uri,
  headers: HeaderMap,
) -> Result<Response, AxumError> {
  let request = page_request(&uri, &headers, &state.context.supported_locales);

  // Client-side navigation: reuse previously loaded data when the decision
  // allows it. A GET navigation carries no triggering action method.
  if let Some(from) = header_str(&headers, NAVIGATE_FROM) {
    let event = NavigationEvent {
      method: None,
      from_url: from.to_string(),
      to_url: request.url.clone(),
      explicit_refresh: false,
    };
    if !should_revalidate(&event) {
      return Ok(StatusCode::NOT_MODIFIED.into_response());
    }
  }

  let mut data = build_page_data(&request, &state.context).await?;

  let pending: Vec<String> = data.deferred.slot_names().map(String::from).collect();
  let deferred = std::mem::take(&mut data.deferred);
  let shell = document::render_shell(&data, &pending);

  // Deferred chunks flow onto the response stream in settle order. If the
  // client disconnects, sends fail and the remaining slots are abandoned.
  let (tx, rx) = tokio::sync::mpsc::channel::<String>(8);
  tokio::spawn(async move {
    let mut settled = deferred.into_settled();
    while let Some((slot, value)) = settled.next().await {
      if tx.send(document::deferred_chunk(&slot, &value)).await.is_err() {
        return;
      }
    }
    let _ = tx.send(document::close_document()).await;
  });

  let body = Body::from_stream(
    tokio_stream::once(shell).chain(ReceiverStream::new(rx)).map(Ok::<String, Infallible>),
  );
  Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], body).into_response())
}
