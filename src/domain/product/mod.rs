pub mod entity;
pub mod input;
pub mod invariants;

pub use entity::{seed_products, Category, ProductRecord};
pub use input::ProductInput;
pub use invariants::{normalize_product, validate_product, DESCRIPTION_MAX_LEN};
