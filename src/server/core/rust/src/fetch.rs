/* src/server/core/rust/src/fetch.rs */

use std::pin::Pin;
use std::sync::Arc;

use futures_core::Stream;
use serde_json::Value;

use crate::errors::VitrineError;
use crate::locale::Locale;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;
pub type BoxStream<T> = Pin<Box<dyn Stream<Item = T> + Send + 'static>>;

/// Inputs every fetch sees: which locale variant to load and the URL of the
/// page being assembled.
#[derive(Debug, Clone)]
pub struct FetchContext {
  pub locale: Locale,
  pub url: String,
}

pub type FetchFn = Arc<dyn Fn(FetchContext) -> BoxFuture<Result<Value, VitrineError>> + Send + Sync>;

/// A named slot backed by "a thing that can be asked for data asynchronously".
/// The orchestrator never knows what is behind the handler.
pub struct FetcherDef {
  pub slot: String,
  pub handler: FetchFn,
}

/// Wrap an async closure as a [`FetcherDef`].
pub fn fetcher<F, Fut>(slot: &str, f: F) -> FetcherDef
where
  F: Fn(FetchContext) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<Value, VitrineError>> + Send + 'static,
{
  FetcherDef { slot: slot.to_string(), handler: Arc::new(move |ctx| Box::pin(f(ctx))) }
}
