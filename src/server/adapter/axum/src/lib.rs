/* src/server/adapter/axum/src/lib.rs */

mod document;
mod error;
mod handler;

use vitrine_server::Storefront;

/// Re-export vitrine-server core for convenience
pub use vitrine_server;

/// Extension trait that converts a `Storefront` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for Storefront {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self.into_context())
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    log::info!("storefront listening on http://localhost:{}", local_addr.port());
    axum::serve(listener, router).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn into_axum_router_builds_without_panic() {
    let storefront = Storefront::new();
    let _router = storefront.into_axum_router();
  }
}
