/* src/server/core/rust/src/escape.rs */

use std::fmt::Write;

/// Escape serialized JSON for embedding inside a `<script>` element.
///
/// Every non-ASCII character and the HTML-significant ASCII characters
/// (`<`, `>`, `&`) become `\uXXXX` escapes. JSON structural characters are
/// plain ASCII, so anything rewritten here can only occur inside string
/// literals, where the escape form is valid JSON. This also covers U+2028 and
/// U+2029, which are legal in JSON strings but terminate script parsing.
pub fn ascii_escape_json(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for c in input.chars() {
    match c {
      '<' | '>' | '&' => {
        let _ = write!(out, "\\u{:04x}", c as u32);
      }
      c if c.is_ascii() => out.push(c),
      c => {
        let mut buf = [0u16; 2];
        for unit in c.encode_utf16(&mut buf) {
          let _ = write!(out, "\\u{unit:04x}");
        }
      }
    }
  }
  out
}
