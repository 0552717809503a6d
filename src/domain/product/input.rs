use serde::{Deserialize, Serialize};

use super::entity::ProductRecord;
use crate::domain::Field;

/// Raw form values for a product, not yet validated
///
/// Everything numeric or date-like stays a string until validation, so a
/// rejected submission can be handed back to the form exactly as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub release_date: String,
    pub stock: String,
    pub active: bool,
}

impl Default for ProductInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: String::new(),
            release_date: String::new(),
            stock: "0".to_string(),
            active: true,
        }
    }
}

impl ProductInput {
    /// Populate form values from a stored record
    pub fn from_record(record: &ProductRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price.to_string(),
            category: record.category.label().to_string(),
            release_date: record
                .release_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            stock: record.stock.to_string(),
            active: record.active,
        }
    }

    /// Raw value of a text field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Price => &self.price,
            Field::Category => &self.category,
            Field::ReleaseDate => &self.release_date,
            Field::Stock => &self.stock,
        }
    }

    /// Replace the raw value of a text field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Description => self.description = value,
            Field::Price => self.price = value,
            Field::Category => self.category = value,
            Field::ReleaseDate => self.release_date = value,
            Field::Stock => self.stock = value,
        }
    }
}
