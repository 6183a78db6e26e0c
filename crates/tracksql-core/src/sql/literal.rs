use std::borrow::Cow;

use crate::model::FieldValue;

/// The unquoted SQL null token.
pub const NULL: &str = "NULL";

/// Double every single quote so the text can sit inside a quoted literal.
///
/// Nothing else is escaped; backslashes and control characters pass through
/// untouched.
#[must_use]
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if text.contains('\'') {
        Cow::Owned(text.replace('\'', "''"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Render a text attribute as a quoted literal. Absent text becomes `''`.
#[must_use]
pub fn text_literal(text: Option<&str>) -> String {
    format!("'{}'", escape_text(text.unwrap_or_default()))
}

/// Render a numeric attribute, unquoted.
///
/// Absent values and empty text both become `NULL`. Everything else is
/// written verbatim without any validation, so non-numeric text yields
/// invalid SQL.
#[must_use]
pub fn numeric_literal(value: Option<&FieldValue>) -> String {
    match value {
        None => NULL.to_owned(),
        Some(value) if value.is_empty_text() => NULL.to_owned(),
        Some(value) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_doubles_single_quotes() {
        assert_eq!(escape_text("O'Brien"), "O''Brien");
        assert_eq!(escape_text("''"), "''''");
        assert_eq!(escape_text("it's 'quoted'"), "it''s ''quoted''");
    }

    #[test]
    fn test_escape_borrows_without_quotes() {
        assert!(matches!(escape_text("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_escape_leaves_other_characters() {
        assert_eq!(escape_text(r#"back\slash "double""#), r#"back\slash "double""#);
    }

    #[test]
    fn test_text_literal() {
        assert_eq!(text_literal(Some("O'Brien")), "'O''Brien'");
        assert_eq!(text_literal(Some("")), "''");
        assert_eq!(text_literal(None), "''");
    }

    #[test]
    fn test_numeric_literal_absent_is_null() {
        assert_eq!(numeric_literal(None), "NULL");
    }

    #[test]
    fn test_numeric_literal_empty_text_is_null() {
        assert_eq!(numeric_literal(Some(&FieldValue::from(""))), "NULL");
    }

    #[test]
    fn test_numeric_literal_is_verbatim() {
        assert_eq!(numeric_literal(Some(&FieldValue::from(120_i64))), "120");
        assert_eq!(numeric_literal(Some(&FieldValue::from("128"))), "128");
        assert_eq!(numeric_literal(Some(&FieldValue::from("fast"))), "fast");
        assert_eq!(numeric_literal(Some(&FieldValue::from(" "))), " ");
    }
}
