// src/services/catalog_service.rs
//
// Catalog Controller - Orchestration of the product lifecycle
//
// RULES:
// - Every write goes through validation first
// - The record store is only mutated here
// - Outcomes are announced on the event bus, never pushed to the UI directly
//
// Mode machine:
//   Creating --begin_edit--> Editing(id)
//   Editing  --begin_edit--> Editing(other id)
//   Editing  --reset_form | successful update | delete of that id--> Creating
//   any      --successful add--> Creating

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{
    normalize_product, validate_product, DomainError, Field, ProductInput, ProductRecord,
    ValidationErrors,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, ProductCreated, ProductDeleted, ProductUpdated, SubmissionRejected};
use crate::infrastructure::Clock;
use crate::repositories::{IdAllocator, ProductRepository};

/// Whether the form targets a new record or an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum EditMode {
    #[default]
    Creating,
    Editing(u64),
}

/// Everything the product form shows
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormState {
    pub input: ProductInput,
    pub errors: ValidationErrors,
    pub mode: EditMode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(ProductRecord),
    /// The user declined the confirmation
    Cancelled,
}

pub struct CatalogService {
    repo: ProductRepository,
    allocator: IdAllocator,
    event_bus: Arc<EventBus>,
    clock: Arc<dyn Clock>,
    form: FormState,
}

impl CatalogService {
    pub fn new(
        repo: ProductRepository,
        allocator: IdAllocator,
        event_bus: Arc<EventBus>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            allocator,
            event_bus,
            clock,
            form: FormState::default(),
        }
    }

    /// Records in display order, newest first
    pub fn list_products(&self) -> &[ProductRecord] {
        self.repo.list_all()
    }

    pub fn get_product(&self, id: u64) -> Option<&ProductRecord> {
        self.repo.get_by_id(id)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn mode(&self) -> EditMode {
        self.form.mode
    }

    pub fn editing_id(&self) -> Option<u64> {
        match self.form.mode {
            EditMode::Creating => None,
            EditMode::Editing(id) => Some(id),
        }
    }

    /// Run the validator against the live record set without mutating anything
    pub fn validate(&self, input: &ProductInput, exclude_id: Option<u64>) -> ValidationErrors {
        validate_product(input, self.repo.list_all(), exclude_id, self.clock.today())
    }

    // ========================================================================
    // FORM EDITING
    // ========================================================================

    /// Change one raw form value; clears that field's error
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.input.set(field, value);
        self.form.errors.remove(field);
    }

    pub fn set_active(&mut self, active: bool) {
        self.form.input.active = active;
    }

    /// Load a record into the form and target it for update
    pub fn begin_edit(&mut self, record: &ProductRecord) {
        self.form = FormState {
            input: ProductInput::from_record(record),
            errors: ValidationErrors::new(),
            mode: EditMode::Editing(record.id),
        };
    }

    /// `begin_edit` for a stored record
    pub fn begin_edit_by_id(&mut self, id: u64) -> AppResult<()> {
        let record = self.repo.get_by_id(id).cloned().ok_or(AppError::NotFound)?;
        self.begin_edit(&record);
        Ok(())
    }

    /// Back to an empty form in Creating mode
    pub fn reset_form(&mut self) {
        self.form = FormState::default();
    }

    /// Add or update from the current form, depending on the mode
    pub fn submit(&mut self) -> AppResult<ProductRecord> {
        let input = self.form.input.clone();
        match self.form.mode {
            EditMode::Creating => self.add(input),
            EditMode::Editing(id) => self.update(id, input),
        }
    }

    // ========================================================================
    // LIFECYCLE OPERATIONS
    // ========================================================================

    /// Validate and store a new record at the front of the listing
    pub fn add(&mut self, input: ProductInput) -> AppResult<ProductRecord> {
        let errors = self.validate(&input, None);
        if !errors.is_empty() {
            return Err(self.reject(input, None, errors));
        }

        let id = self.allocator.next_id(self.repo.max_id());
        let record = normalize_product(id, &input)?;

        let mut records = Vec::with_capacity(self.repo.len() + 1);
        records.push(record.clone());
        records.extend(self.repo.list_all().iter().cloned());
        self.repo.replace_all(records);

        self.reset_form();
        log::info!("Product {} '{}' created", record.id, record.name);
        self.event_bus
            .emit(ProductCreated::new(record.id, record.name.clone()));

        Ok(record)
    }

    /// Validate and replace record `id` in place, keeping its position
    ///
    /// An unknown `id` is reported as `NotFound` with no mutation and no
    /// notification.
    pub fn update(&mut self, id: u64, input: ProductInput) -> AppResult<ProductRecord> {
        if !self.repo.exists(id) {
            log::warn!("Update of unknown product {} ignored", id);
            return Err(AppError::NotFound);
        }

        let errors = self.validate(&input, Some(id));
        if !errors.is_empty() {
            return Err(self.reject(input, Some(id), errors));
        }

        let record = normalize_product(id, &input)?;
        let records = self
            .repo
            .list_all()
            .iter()
            .map(|r| if r.id == id { record.clone() } else { r.clone() })
            .collect();
        self.repo.replace_all(records);

        self.reset_form();
        log::info!("Product {} '{}' updated", record.id, record.name);
        self.event_bus
            .emit(ProductUpdated::new(record.id, record.name.clone()));

        Ok(record)
    }

    /// Remove record `id` once `confirm` agrees
    ///
    /// `confirm` sees the target record and answers yes/no. Declining leaves
    /// everything untouched and emits nothing.
    pub fn delete<F>(&mut self, id: u64, confirm: F) -> AppResult<DeleteOutcome>
    where
        F: FnOnce(&ProductRecord) -> bool,
    {
        let target = match self.repo.get_by_id(id) {
            Some(record) => record.clone(),
            None => {
                log::warn!("Delete of unknown product {} ignored", id);
                return Err(AppError::NotFound);
            }
        };

        if !confirm(&target) {
            log::debug!("Delete of product {} cancelled", id);
            return Ok(DeleteOutcome::Cancelled);
        }

        let records = self
            .repo
            .list_all()
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        self.repo.replace_all(records);

        if self.editing_id() == Some(id) {
            self.reset_form();
        }

        log::info!("Product {} '{}' deleted", target.id, target.name);
        self.event_bus
            .emit(ProductDeleted::new(target.id, target.name.clone()));

        Ok(DeleteOutcome::Deleted(target))
    }

    /// Keep the rejected values in the form for correction
    ///
    /// The form is retargeted at the refused operation: Creating for an add,
    /// Editing(id) for an update.
    fn reject(&mut self, input: ProductInput, id: Option<u64>, errors: ValidationErrors) -> AppError {
        log::debug!("Submission for {:?} rejected: {}", id, errors);

        self.form = FormState {
            input,
            errors: errors.clone(),
            mode: id.map_or(EditMode::Creating, EditMode::Editing),
        };

        let fields = errors.fields().iter().map(|f| f.as_str().to_string()).collect();
        self.event_bus.emit(SubmissionRejected::new(id, fields));

        AppError::Domain(DomainError::Validation(errors))
    }
}
