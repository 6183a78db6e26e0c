use chrono::{DateTime, Utc};
use std::fmt;

/// A scalar attribute value as it appeared in the source document.
///
/// No coercion happens here: an attribute that should be numeric but was
/// stored as text stays text, and is rendered verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// Wide enough for both the signed and the unsigned 64-bit range.
    Integer(i128),
    Real(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
}

impl FieldValue {
    /// Whether this is a text value with no characters.
    #[must_use]
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => f.write_str(&format_real(*value)),
            Self::Boolean(true) => f.write_str("True"),
            Self::Boolean(false) => f.write_str("False"),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Shortest round-trip form, always with a fractional part or an exponent.
///
/// Magnitudes in `[1e-4, 1e16)` are written positionally (`120.0`, `0.0001`);
/// anything else uses a signed two-digit exponent (`1e+16`, `1.5e-07`).
fn format_real(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let text = value.to_string();
        if text.contains('.') {
            text
        } else {
            format!("{text}.0")
        }
    } else {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => text,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::Integer(i128::from(value))
    }
}
