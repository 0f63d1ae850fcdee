/* src/server/adapter/axum/src/handler/mod.rs */

mod page;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use vitrine_server::PageContext;

pub(crate) struct AppState {
  pub context: PageContext,
}

pub(crate) fn build_router(context: PageContext) -> Router {
  let state = Arc::new(AppState { context });

  // Every GET path is a page: the orchestrator supplies root-level data
  // (layout, seo, deferred slots) for whatever route the client rendering
  // layer mounts. Applications claim specific paths by nesting this router.
  Router::new().route("/", get(page::handle_page)).fallback(get(page::handle_page)).with_state(state)
}
