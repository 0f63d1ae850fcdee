/* src/server/core/rust/src/locale.rs */

use serde::{Deserialize, Serialize};

/// Language + country pair selecting which variant of storefront data is
/// fetched. Every request resolves to exactly one locale; when nothing in the
/// request context yields one, [`Locale::default`] (`en-US`) applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
  /// Lowercase ISO 639-1 code, e.g. "en".
  pub language: String,
  /// Uppercase ISO 3166-1 code, e.g. "US". Empty when the source tag carried
  /// no region ("en" in an Accept-Language header).
  pub country: String,
}

impl Locale {
  pub fn new(language: &str, country: &str) -> Self {
    Self { language: language.to_ascii_lowercase(), country: country.to_ascii_uppercase() }
  }

  /// Parse "ll" or "ll-CC" (also accepts "ll_CC"). Returns `None` for tags
  /// that do not look like a language code at all.
  pub fn parse(tag: &str) -> Option<Self> {
    let tag = tag.trim();
    let (language, country) = match tag.split_once(['-', '_']) {
      Some((l, c)) => (l, c),
      None => (tag, ""),
    };
    if language.len() < 2 || language.len() > 3 || !language.chars().all(|c| c.is_ascii_alphabetic())
    {
      return None;
    }
    if !country.is_empty() && (country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()))
    {
      return None;
    }
    Some(Self::new(language, country))
  }

  /// Language-only match, used when a source supplies "en" and the supported
  /// set carries "en-US".
  pub fn matches_language(&self, other: &Locale) -> bool {
    self.language == other.language
  }
}

impl Default for Locale {
  fn default() -> Self {
    Self::new("en", "US")
  }
}

impl std::fmt::Display for Locale {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if self.country.is_empty() {
      write!(f, "{}", self.language)
    } else {
      write!(f, "{}-{}", self.language, self.country)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_language_and_country() {
    assert_eq!(Locale::parse("fr-CA"), Some(Locale::new("fr", "CA")));
    assert_eq!(Locale::parse("FR_ca"), Some(Locale::new("fr", "CA")));
    assert_eq!(Locale::parse("de"), Some(Locale { language: "de".into(), country: String::new() }));
  }

  #[test]
  fn rejects_garbage() {
    assert_eq!(Locale::parse(""), None);
    assert_eq!(Locale::parse("x"), None);
    assert_eq!(Locale::parse("en-USA"), None);
    assert_eq!(Locale::parse("12-34"), None);
  }

  #[test]
  fn default_is_en_us() {
    assert_eq!(Locale::default(), Locale::new("en", "US"));
    assert_eq!(Locale::default().to_string(), "en-US");
  }

  #[test]
  fn display_omits_empty_country() {
    assert_eq!(Locale::parse("ja").unwrap().to_string(), "ja");
  }
}
