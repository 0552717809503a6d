use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single product entry in the catalog
///
/// This is the persisted shape: records are stored as a JSON array under
/// the records slot, field names in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Allocated once, never reused after deletion
    pub id: u64,

    /// Trimmed display name, unique case-insensitively
    pub name: String,

    /// Trimmed free text; empty when not provided
    #[serde(default)]
    pub description: String,

    /// Unit price, never negative
    pub price: f64,

    pub category: Category,

    /// Calendar date; never in the future at write time
    #[serde(default)]
    pub release_date: Option<NaiveDate>,

    /// Units on hand, at most 1,000,000
    #[serde(default)]
    pub stock: u32,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Fixed set of main categories
///
/// Labels are persisted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Elektronik,
    Pakaian,
    Makanan,
    Minuman,
    #[serde(rename = "Rumah Tangga")]
    RumahTangga,
    Lainnya,
}

impl Category {
    /// Options in the order the form presents them
    pub const ALL: [Category; 6] = [
        Category::Elektronik,
        Category::Pakaian,
        Category::Makanan,
        Category::Minuman,
        Category::RumahTangga,
        Category::Lainnya,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Elektronik => "Elektronik",
            Category::Pakaian => "Pakaian",
            Category::Makanan => "Makanan",
            Category::Minuman => "Minuman",
            Category::RumahTangga => "Rumah Tangga",
            Category::Lainnya => "Lainnya",
        }
    }

    /// Exact label match, as submitted by the category select
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl ProductRecord {
    /// Whether `name` collides with this record's name, ignoring case
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Records used to initialize an empty store
pub fn seed_products() -> Vec<ProductRecord> {
    vec![
        ProductRecord {
            id: 1,
            name: "Makanan".to_string(),
            description: "Produk makanan siap saji".to_string(),
            price: 10000.0,
            category: Category::Makanan,
            release_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            stock: 10,
            active: true,
        },
        ProductRecord {
            id: 2,
            name: "Minuman".to_string(),
            description: "Aneka minuman dingin & hangat".to_string(),
            price: 8000.0,
            category: Category::Minuman,
            release_date: NaiveDate::from_ymd_opt(2024, 2, 1),
            stock: 20,
            active: true,
        },
    ]
}
