/* src/server/core/rust/src/modal.rs */

/// Open/closed state for a dialog. Internally controlled by default; once a
/// caller supplies an explicit value via [`Modal::controlled`] or
/// [`Modal::set_controlled`], internal toggling is disabled and only the
/// external value governs visibility.
///
/// The modal renders caller-supplied trigger and content markup through
/// closures and has no knowledge of what it displays.
#[derive(Debug, Default)]
pub struct Modal {
  open: bool,
  controlled: Option<bool>,
}

impl Modal {
  pub fn new() -> Self {
    Self::default()
  }

  /// Externally controlled from the start.
  pub fn controlled(value: bool) -> Self {
    Self { open: false, controlled: Some(value) }
  }

  /// Hand control to an external controller (or update its value).
  pub fn set_controlled(&mut self, value: bool) {
    self.controlled = Some(value);
  }

  pub fn is_open(&self) -> bool {
    self.controlled.unwrap_or(self.open)
  }

  pub fn open(&mut self) {
    if self.controlled.is_none() {
      self.open = true;
    }
  }

  pub fn close(&mut self) {
    if self.controlled.is_none() {
      self.open = false;
    }
  }

  pub fn toggle(&mut self) {
    if self.controlled.is_none() {
      self.open = !self.open;
    }
  }

  /// Render the trigger plus, when open, the dialog wrapping the supplied
  /// content.
  pub fn render<T, C>(&self, trigger: T, content: C) -> String
  where
    T: Fn() -> String,
    C: Fn() -> String,
  {
    let mut out = trigger();
    if self.is_open() {
      out.push_str("<dialog open aria-modal=\"true\">");
      out.push_str(&content());
      out.push_str("</dialog>");
    }
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn internal_state_toggles() {
    let mut modal = Modal::new();
    assert!(!modal.is_open());
    modal.open();
    assert!(modal.is_open());
    modal.toggle();
    assert!(!modal.is_open());
  }

  #[test]
  fn external_controller_overrides_internal_toggling() {
    let mut modal = Modal::controlled(false);
    modal.open();
    modal.toggle();
    assert!(!modal.is_open());
    modal.set_controlled(true);
    assert!(modal.is_open());
    modal.close();
    assert!(modal.is_open());
  }

  #[test]
  fn render_delegates_markup_to_the_caller() {
    let mut modal = Modal::new();
    let html = modal.render(|| "<button>Cart</button>".to_string(), || "contents".to_string());
    assert_eq!(html, "<button>Cart</button>");

    modal.open();
    let html = modal.render(|| "<button>Cart</button>".to_string(), || "contents".to_string());
    assert!(html.contains("<dialog open"));
    assert!(html.contains("contents"));
  }
}
