use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'`, leaving the text inert both as element
/// content and inside a quoted attribute value.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}
