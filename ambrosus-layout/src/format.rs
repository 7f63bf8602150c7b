//! Field value formatting.

use serde_json::Value;

/// A value that may have a human-readable description.
pub trait Describe {
    /// Returns the description, or `None` if the value has none.
    fn describe(&self) -> Option<String>;
}

impl Describe for Value {
    /// `null` has no description. Strings describe as themselves; numbers,
    /// booleans, arrays and objects as their compact JSON text.
    fn describe(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl Describe for str {
    fn describe(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl Describe for String {
    fn describe(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe(&self) -> Option<String> {
        self.as_ref().and_then(Describe::describe)
    }
}

/// Produces the display text for a field value.
///
/// Newlines are stripped. Returns `None` when the value has no description;
/// callers drop such fields.
#[must_use]
pub fn format_value<T: Describe + ?Sized>(value: &T) -> Option<String> {
    let mut text = value.describe()?;
    text.retain(|c| c != '\n' && c != '\r');
    Some(text)
}
