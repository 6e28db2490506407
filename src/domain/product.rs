//! Product name values read back from the inventory table.

use std::fmt;

use serde::Serialize;

/// A `nome_produto` value. The column is nullable, so `NULL` is kept
/// distinct from an empty name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProductName(Option<String>);

impl ProductName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    #[must_use]
    pub const fn null() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Option<String>> for ProductName {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(name) => write!(f, "{name:?}"),
            None => f.write_str("NULL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_names_and_marks_null() {
        assert_eq!(ProductName::new("Parafuso").to_string(), "\"Parafuso\"");
        assert_eq!(ProductName::null().to_string(), "NULL");
        assert_eq!(ProductName::new("").to_string(), "\"\"");
    }

    #[test]
    fn null_serializes_as_json_null() {
        assert_eq!(serde_json::to_string(&ProductName::null()).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&ProductName::new("Cabo")).unwrap(),
            "\"Cabo\""
        );
    }
}
