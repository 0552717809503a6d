// src/application/commands/product_commands.rs
//
// Product Command Handlers
//
// RULES:
// - Accept raw UI values
// - Call the catalog service
// - Return DTOs

use crate::application::dto::*;
use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::application::state::AppState;
use crate::domain::{Field, ProductRecord};
use crate::services::{DeleteOutcome, Notification};

/// Product table rows, newest first
pub fn list_products(state: &AppState) -> Vec<ProductRowDto> {
    product_rows(state.catalog.list_products())
}

/// Current form view
pub fn get_form(state: &AppState) -> FormViewDto {
    FormViewDto::from_state(state.catalog.form(), state.clock.today())
}

/// Change one text field of the form by its key (`name`, `releaseDate`, ...)
pub fn update_form_field(state: &mut AppState, field: &str, value: String) -> Result<FormViewDto, String> {
    let field = Field::parse(field)
        .ok_or_else(|| ErrorResponse::validation(format!("Unknown field: {}", field)).to_json())?;

    state.catalog.set_field(field, value);
    Ok(get_form(state))
}

pub fn set_form_active(state: &mut AppState, active: bool) -> FormViewDto {
    state.catalog.set_active(active);
    get_form(state)
}

/// Add or save the form, depending on the mode
pub fn submit_form(state: &mut AppState) -> Result<ProductRecord, String> {
    state.catalog.submit().to_error_response()
}

/// Load a product into the form for editing
pub fn edit_product(state: &mut AppState, id: u64) -> Result<FormViewDto, String> {
    state.catalog.begin_edit_by_id(id).to_error_response()?;
    Ok(get_form(state))
}

pub fn cancel_edit(state: &mut AppState) -> FormViewDto {
    state.catalog.reset_form();
    get_form(state)
}

/// Delete after asking `confirm` with the prompt text
///
/// Returns whether the product was removed.
pub fn delete_product<F>(state: &mut AppState, id: u64, confirm: F) -> Result<bool, String>
where
    F: FnOnce(&str) -> bool,
{
    let outcome = state
        .catalog
        .delete(id, |record| confirm(&delete_prompt(record)))
        .to_error_response()?;

    Ok(matches!(outcome, DeleteOutcome::Deleted(_)))
}

pub fn current_notification(state: &AppState) -> Option<Notification> {
    state.notifications.current()
}

pub fn dismiss_notification(state: &AppState) {
    state.notifications.dismiss();
}
