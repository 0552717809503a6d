use chrono::NaiveDate;

use super::entity::{Category, ProductRecord};
use super::input::ProductInput;
use crate::domain::{DomainError, DomainResult, Field, ValidationErrors};

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MIN_LEN: usize = 20;
pub const DESCRIPTION_MAX_LEN: usize = 1000;
pub const STOCK_MAX: f64 = 1_000_000.0;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates a candidate product against every field rule
///
/// `existing` is the live record set; the record identified by `exclude_id`
/// is ignored for the duplicate-name check so an edit can keep its own name.
/// `today` is the calendar date release dates are compared against.
///
/// Pure: the returned map is empty when the candidate is valid.
pub fn validate_product(
    input: &ProductInput,
    existing: &[ProductRecord],
    exclude_id: Option<u64>,
    today: NaiveDate,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let checks = [
        (Field::Name, validate_name(&input.name, existing, exclude_id)),
        (Field::Description, validate_description(&input.description)),
        (Field::Price, validate_price(&input.price).map(|_| ())),
        (Field::Category, validate_category(&input.category).map(|_| ())),
        (Field::ReleaseDate, validate_release_date(&input.release_date, today).map(|_| ())),
        (Field::Stock, validate_stock(&input.stock).map(|_| ())),
    ];

    for (field, result) in checks {
        if let Err(message) = result {
            errors.insert(field, message);
        }
    }

    errors
}

/// Builds the stored form of a candidate that already passed validation
///
/// Strings are trimmed, numbers coerced and an empty release date becomes `None`.
pub fn normalize_product(id: u64, input: &ProductInput) -> DomainResult<ProductRecord> {
    let invalid = |field: Field, message: &str| {
        DomainError::InvariantViolation(format!("{} was not validated: {}", field, message))
    };

    let price = validate_price(&input.price).map_err(|m| invalid(Field::Price, m))?;
    let category = validate_category(&input.category).map_err(|m| invalid(Field::Category, m))?;
    let release_date = parse_release_date(&input.release_date)
        .map_err(|m| invalid(Field::ReleaseDate, m))?;
    let stock = validate_stock(&input.stock).map_err(|m| invalid(Field::Stock, m))?;

    Ok(ProductRecord {
        id,
        name: input.name.trim().to_string(),
        description: input.description.trim().to_string(),
        price,
        category,
        release_date,
        stock,
        active: input.active,
    })
}

/// Required, 3..=100 characters after trimming, unique ignoring case
fn validate_name(
    name: &str,
    existing: &[ProductRecord],
    exclude_id: Option<u64>,
) -> Result<(), &'static str> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();

    if trimmed.is_empty() {
        return Err("Product name is required.");
    }
    if len < NAME_MIN_LEN {
        return Err("Minimum 3 characters.");
    }
    if len > NAME_MAX_LEN {
        return Err("Maximum 100 characters.");
    }

    let duplicate = existing
        .iter()
        .any(|record| Some(record.id) != exclude_id && record.has_name(trimmed));
    if duplicate {
        return Err("Product name already exists.");
    }

    Ok(())
}

/// Optional; when given, 20..=1000 characters after trimming
fn validate_description(description: &str) -> Result<(), &'static str> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    let len = trimmed.chars().count();
    if len < DESCRIPTION_MIN_LEN {
        return Err("Description must be at least 20 characters.");
    }
    if len > DESCRIPTION_MAX_LEN {
        return Err("Description is too long.");
    }
    Ok(())
}

fn validate_price(raw: &str) -> Result<f64, &'static str> {
    if raw.trim().is_empty() {
        return Err("Price is required.");
    }
    let price = parse_number(raw).ok_or("Price must be numeric.")?;
    if price < 0.0 {
        return Err("Price minimum 0.");
    }
    Ok(price)
}

fn validate_category(raw: &str) -> Result<Category, &'static str> {
    if raw.trim().is_empty() {
        return Err("Main category is required.");
    }
    Category::from_label(raw.trim()).ok_or("Unknown category.")
}

/// Optional; a real calendar date not after `today`
fn validate_release_date(raw: &str, today: NaiveDate) -> Result<Option<NaiveDate>, &'static str> {
    let date = parse_release_date(raw)?;
    if let Some(date) = date {
        if date > today {
            return Err("Release date cannot be in the future.");
        }
    }
    Ok(date)
}

fn parse_release_date(raw: &str) -> Result<Option<NaiveDate>, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| "Invalid date format.")
}

/// Empty input counts as zero stock
fn validate_stock(raw: &str) -> Result<u32, &'static str> {
    let stock = if raw.trim().is_empty() {
        0.0
    } else {
        parse_number(raw).ok_or("Stock must be numeric.")?
    };

    if stock < 0.0 {
        return Err("Stock minimum 0.");
    }
    if stock > STOCK_MAX {
        return Err("Stock is too large.");
    }
    if stock.fract() != 0.0 {
        return Err("Stock must be a whole number.");
    }
    Ok(stock as u32)
}

/// Finite decimal number, surrounding whitespace ignored
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// Invariants that must hold for every stored ProductRecord:
//
// 1. id is unique and never reused
// 2. name is 3..=100 characters and unique ignoring case
// 3. description is empty or 20..=1000 characters
// 4. price >= 0
// 5. category is one of the fixed labels
// 6. release date, if any, was not in the future when written
// 7. stock is a whole number in 0..=1,000,000
