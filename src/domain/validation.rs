// src/domain/validation.rs
//
// Field-level validation results
//
// An empty `ValidationErrors` means "valid". Each offending field carries
// exactly one message: the first rule that failed for it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Editable fields of a product form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Description,
    Price,
    Category,
    ReleaseDate,
    Stock,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Description,
        Field::Price,
        Field::Category,
        Field::ReleaseDate,
        Field::Stock,
    ];

    /// Key used in persisted and UI-facing error maps
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Price => "price",
            Field::Category => "category",
            Field::ReleaseDate => "releaseDate",
            Field::Stock => "stock",
        }
    }

    pub fn parse(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.as_str() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping field -> message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field` unless one is already present
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Stock, "Stock must be numeric.");
        errors.insert(Field::Stock, "Stock minimum 0.");
        assert_eq!(errors.get(Field::Stock), Some("Stock must be numeric."));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_serializes_as_field_keyed_map() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::ReleaseDate, "Invalid date format.");
        errors.insert(Field::Name, "Minimum 3 characters.");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["releaseDate"], "Invalid date format.");
        assert_eq!(json["name"], "Minimum 3 characters.");
    }

    #[test]
    fn test_field_parse_matches_keys() {
        for field in Field::ALL {
            assert_eq!(Field::parse(field.as_str()), Some(field));
        }
        assert_eq!(Field::parse("active"), None);
    }

    #[test]
    fn test_display_lists_fields_in_order() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Price, "Price is required.");
        errors.insert(Field::Name, "Product name is required.");
        assert_eq!(
            errors.to_string(),
            "name: Product name is required.; price: Price is required."
        );
    }
}
