/* src/server/core/rust/src/lib.rs */

pub mod deferred;
pub mod env;
pub mod errors;
pub mod escape;
pub mod fetch;
pub mod locale;
pub mod modal;
pub mod orchestrate;
pub mod page;
pub mod request;
pub mod resolve;
pub mod revalidate;
pub mod seo;
pub mod server;

// Re-exports for ergonomic use
pub use deferred::{Deferred, DeferredBundle};
pub use env::PublicEnv;
pub use errors::{ErrorCode, VitrineError};
pub use escape::ascii_escape_json;
pub use fetch::{BoxFuture, BoxStream, FetchContext, FetchFn, FetcherDef, fetcher};
pub use locale::Locale;
pub use modal::Modal;
pub use orchestrate::{PageContext, build_page_data};
pub use page::{PageData, SLOT_LAYOUT, SLOT_SEO, SLOT_SHOP};
pub use request::PageRequest;
pub use resolve::{
  ResolveData, ResolveStrategy, default_strategies, from_accept_language, from_cookie,
  from_url_prefix, from_url_query, resolve_chain,
};
pub use revalidate::{NavigationEvent, should_revalidate};
pub use seo::SeoPayload;
pub use server::Storefront;
