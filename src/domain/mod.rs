// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod product;
pub mod validation;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Product Domain
pub use product::{
    normalize_product, seed_products, validate_product, Category, ProductInput, ProductRecord,
    DESCRIPTION_MAX_LEN,
};

// Field-level validation results
pub use validation::{Field, ValidationErrors};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    /// A candidate record failed one or more field rules
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
