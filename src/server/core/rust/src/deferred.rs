/* src/server/core/rust/src/deferred.rs */

use std::collections::BTreeMap;

use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::errors::VitrineError;
use crate::fetch::{BoxFuture, BoxStream};

/// Handle to one in-flight deferred slot. The underlying task starts the
/// moment the handle is created and keeps running whether or not anyone ever
/// awaits it; dropping the handle abandons the result without cancelling the
/// work.
pub struct Deferred {
  slot: String,
  handle: JoinHandle<Value>,
}

impl std::fmt::Debug for Deferred {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Deferred").field("slot", &self.slot).finish()
  }
}

impl Deferred {
  /// Start a deferred fetch. Failure is converted to `Value::Null` here, at
  /// issue time. A deferred slot can degrade but can never fail the page.
  pub fn spawn(slot: impl Into<String>, fut: BoxFuture<Result<Value, VitrineError>>) -> Self {
    let slot = slot.into();
    let name = slot.clone();
    let handle = tokio::spawn(async move {
      match fut.await {
        Ok(value) => value,
        Err(err) => {
          log::warn!("deferred slot '{name}' unavailable: {err}");
          Value::Null
        }
      }
    });
    Self { slot, handle }
  }

  pub fn slot(&self) -> &str {
    &self.slot
  }

  /// Wait for the slot to settle. A panicked or aborted task also degrades to
  /// `Value::Null` rather than surfacing an error.
  pub async fn resolve(self) -> Value {
    match self.handle.await {
      Ok(value) => value,
      Err(err) => {
        log::warn!("deferred slot '{}' task died: {err}", self.slot);
        Value::Null
      }
    }
  }
}

/// Pending slots of one page, keyed by slot name. Per-request only; never
/// shared or cached across requests.
#[derive(Default, Debug)]
pub struct DeferredBundle {
  slots: BTreeMap<String, Deferred>,
}

impl DeferredBundle {
  pub fn insert(&mut self, deferred: Deferred) {
    self.slots.insert(deferred.slot().to_string(), deferred);
  }

  /// Detach one slot for individual consumption.
  pub fn take(&mut self, slot: &str) -> Option<Deferred> {
    self.slots.remove(slot)
  }

  pub fn slot_names(&self) -> impl Iterator<Item = &str> {
    self.slots.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.slots.len()
  }

  pub fn is_empty(&self) -> bool {
    self.slots.is_empty()
  }

  /// Stream of `(slot, value)` pairs in settle order, not registration order.
  /// Awaiting one slot never blocks another.
  pub fn into_settled(self) -> BoxStream<(String, Value)> {
    let unordered: FuturesUnordered<_> = self
      .slots
      .into_values()
      .map(|deferred| async move {
        let slot = deferred.slot().to_string();
        (slot, deferred.resolve().await)
      })
      .collect();
    unordered.boxed()
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use super::*;

  fn ok_after(ms: u64, value: Value) -> BoxFuture<Result<Value, VitrineError>> {
    Box::pin(async move {
      tokio::time::sleep(Duration::from_millis(ms)).await;
      Ok(value)
    })
  }

  fn failing() -> BoxFuture<Result<Value, VitrineError>> {
    Box::pin(async { Err(VitrineError::upstream("cart service down")) })
  }

  #[tokio::test]
  async fn failure_resolves_to_null_instead_of_erroring() {
    let deferred = Deferred::spawn("cart", failing());
    assert_eq!(deferred.resolve().await, Value::Null);
  }

  #[tokio::test]
  async fn sibling_slots_are_unaffected_by_a_failure() {
    let mut bundle = DeferredBundle::default();
    bundle.insert(Deferred::spawn("cart", failing()));
    bundle.insert(Deferred::spawn("header", ok_after(0, serde_json::json!({"items": 3}))));

    let cart = bundle.take("cart").unwrap().resolve().await;
    let header = bundle.take("header").unwrap().resolve().await;
    assert_eq!(cart, Value::Null);
    assert_eq!(header, serde_json::json!({"items": 3}));
  }

  #[tokio::test]
  async fn panicking_task_degrades_to_null() {
    let deferred =
      Deferred::spawn("footer", Box::pin(async { panic!("fetch bug") }));
    assert_eq!(deferred.resolve().await, Value::Null);
  }

  #[tokio::test]
  async fn settle_stream_yields_in_completion_order() {
    let mut bundle = DeferredBundle::default();
    bundle.insert(Deferred::spawn("slow", ok_after(50, serde_json::json!("slow"))));
    bundle.insert(Deferred::spawn("fast", ok_after(1, serde_json::json!("fast"))));

    let settled: Vec<(String, Value)> = bundle.into_settled().collect().await;
    assert_eq!(settled.len(), 2);
    assert_eq!(settled[0].0, "fast");
    assert_eq!(settled[1].0, "slow");
  }

  #[tokio::test]
  async fn tasks_run_without_being_awaited() {
    let (tx, rx) = tokio::sync::oneshot::channel();
    let deferred = Deferred::spawn(
      "login_status",
      Box::pin(async move {
        let _ = tx.send(());
        Ok(Value::Bool(false))
      }),
    );
    // The spawned task signals before anyone resolves the handle.
    rx.await.unwrap();
    assert_eq!(deferred.resolve().await, Value::Bool(false));
  }
}
