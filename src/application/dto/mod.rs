// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain state only (never TO)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Category, ProductInput, ProductRecord, ValidationErrors, DESCRIPTION_MAX_LEN};
use crate::services::{EditMode, FormState};

// ============================================================================
// LISTING
// ============================================================================

/// One row of the product table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRowDto {
    /// 1-based position in the listing
    pub number: usize,
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub release_date: String,
    pub stock: u32,
    pub status: String,
}

impl ProductRowDto {
    pub fn from_record(position: usize, record: &ProductRecord) -> Self {
        Self {
            number: position + 1,
            id: record.id,
            name: record.name.clone(),
            description: dash_if_empty(&record.description),
            price: format_price(record.price),
            category: record.category.to_string(),
            release_date: record
                .release_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            stock: record.stock,
            status: if record.active { "Aktif" } else { "Tidak aktif" }.to_string(),
        }
    }
}

/// Rows for the whole listing, in display order
pub fn product_rows(records: &[ProductRecord]) -> Vec<ProductRowDto> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| ProductRowDto::from_record(idx, record))
        .collect()
}

fn dash_if_empty(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Price as shown in the table, e.g. "Rp 10,000" or "Rp 1,234.5"
///
/// Formatted from the decimal rendering of the `f64`, so large prices keep
/// every digit.
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.2}", price.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let cents = cents.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 { "-" } else { "" };
    if cents.is_empty() {
        format!("Rp {}{}", sign, grouped)
    } else {
        format!("Rp {}{}.{}", sign, grouped, cents)
    }
}

/// Confirmation question shown before a delete
pub fn delete_prompt(record: &ProductRecord) -> String {
    format!("Hapus Produk \"{}\"?", record.name)
}

// ============================================================================
// FORM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormViewDto {
    pub title: String,
    pub submit_label: String,
    pub submit_variant: String,
    /// Cancel is offered only while editing
    pub can_cancel: bool,
    pub editing_id: Option<u64>,
    pub description_counter: String,
    pub values: ProductInput,
    pub errors: ValidationErrors,
    pub category_options: Vec<String>,
    /// Latest selectable release date
    pub max_release_date: String,
}

impl FormViewDto {
    pub fn from_state(form: &FormState, today: NaiveDate) -> Self {
        let editing_id = match form.mode {
            EditMode::Creating => None,
            EditMode::Editing(id) => Some(id),
        };
        let editing = editing_id.is_some();

        Self {
            title: if editing { "Edit Produk" } else { "Tambah Produk" }.to_string(),
            submit_label: if editing { "Simpan Perubahan" } else { "Tambah Produk" }.to_string(),
            submit_variant: if editing { "primary" } else { "success" }.to_string(),
            can_cancel: editing,
            editing_id,
            description_counter: format!(
                "{}/{}",
                form.input.description.chars().count(),
                DESCRIPTION_MAX_LEN
            ),
            values: form.input.clone(),
            errors: form.errors.clone(),
            category_options: Category::ALL.iter().map(|c| c.to_string()).collect(),
            max_release_date: today.format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed_products;

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(0.0), "Rp 0");
        assert_eq!(format_price(8000.0), "Rp 8,000");
        assert_eq!(format_price(1234567.0), "Rp 1,234,567");
        assert_eq!(format_price(1234.5), "Rp 1,234.5");
        assert_eq!(format_price(99.25), "Rp 99.25");
    }

    #[test]
    fn test_format_price_beyond_u64_range() {
        assert_eq!(format_price(1e20), "Rp 100,000,000,000,000,000,000");
        assert_eq!(format_price(1e25), "Rp 10,000,000,000,000,000,905,969,664");
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let rows = product_rows(&seed_products());
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[1].number, 2);
        assert_eq!(rows[0].price, "Rp 10,000");
        assert_eq!(rows[0].status, "Aktif");
        assert_eq!(rows[1].release_date, "2024-02-01");
    }

    #[test]
    fn test_row_placeholders() {
        let mut record = seed_products()[0].clone();
        record.description.clear();
        record.release_date = None;
        record.active = false;

        let row = ProductRowDto::from_record(0, &record);
        assert_eq!(row.description, "-");
        assert_eq!(row.release_date, "-");
        assert_eq!(row.status, "Tidak aktif");
    }

    #[test]
    fn test_form_view_by_mode() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        let creating = FormViewDto::from_state(&FormState::default(), today);
        assert_eq!(creating.title, "Tambah Produk");
        assert!(!creating.can_cancel);
        assert_eq!(creating.description_counter, "0/1000");
        assert_eq!(creating.max_release_date, "2025-06-15");
        assert_eq!(creating.category_options.len(), 6);

        let record = &seed_products()[1];
        let editing_state = FormState {
            input: ProductInput::from_record(record),
            errors: ValidationErrors::new(),
            mode: EditMode::Editing(record.id),
        };
        let editing = FormViewDto::from_state(&editing_state, today);
        assert_eq!(editing.title, "Edit Produk");
        assert_eq!(editing.submit_label, "Simpan Perubahan");
        assert!(editing.can_cancel);
        assert_eq!(editing.editing_id, Some(2));
        assert_eq!(editing.description_counter, "29/1000");
    }

    #[test]
    fn test_delete_prompt_names_product() {
        assert_eq!(delete_prompt(&seed_products()[1]), "Hapus Produk \"Minuman\"?");
    }
}
