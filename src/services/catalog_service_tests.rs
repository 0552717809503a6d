// src/services/catalog_service_tests.rs
//
// Catalog controller scenarios against an in-memory store and a fixed clock.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;

    use crate::domain::{Field, ProductInput, ProductRecord};
    use crate::error::AppError;
    use crate::events::EventBus;
    use crate::infrastructure::{FixedClock, InMemoryKeyValueStore, KeyValueStore, MockKeyValueStore};
    use crate::repositories::{IdAllocator, ProductRepository};
    use crate::services::notification_service::{
        MSG_CHECK_INPUT, MSG_PRODUCT_ADDED, MSG_PRODUCT_DELETED, MSG_PRODUCT_UPDATED,
    };
    use crate::services::{
        CatalogService, DeleteOutcome, EditMode, FormState, NotificationService, NotificationVariant,
    };

    const RECORDS_KEY: &str = "pos_categories_v1";
    const NEXT_ID_KEY: &str = "pos_next_id_v1";

    // ========================================================================
    // TEST HELPERS
    // ========================================================================

    struct Harness {
        catalog: CatalogService,
        notifications: NotificationService,
        store: Arc<dyn KeyValueStore>,
    }

    fn harness_with(store: Arc<dyn KeyValueStore>) -> Harness {
        let bus = Arc::new(EventBus::new());
        let clock = Arc::new(FixedClock::at_date(2025, 6, 15));

        let notifications =
            NotificationService::new(bus.clone(), clock.clone(), Duration::milliseconds(3000));
        notifications.register_event_handlers();

        let repo = ProductRepository::hydrate(store.clone(), RECORDS_KEY);
        let allocator = IdAllocator::new(store.clone(), NEXT_ID_KEY);
        let catalog = CatalogService::new(repo, allocator, bus, clock);

        Harness {
            catalog,
            notifications,
            store,
        }
    }

    fn harness() -> Harness {
        harness_with(Arc::new(InMemoryKeyValueStore::new()))
    }

    fn snack_bar() -> ProductInput {
        ProductInput {
            name: "Snack Bar".to_string(),
            price: "5000".to_string(),
            category: "Makanan".to_string(),
            stock: "10".to_string(),
            ..ProductInput::default()
        }
    }

    fn ids(catalog: &CatalogService) -> Vec<u64> {
        catalog.list_products().iter().map(|r| r.id).collect()
    }

    fn persisted(store: &Arc<dyn KeyValueStore>) -> Vec<ProductRecord> {
        let raw = store.get(RECORDS_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    // ========================================================================
    // HYDRATION & ALLOCATION
    // ========================================================================

    #[test]
    fn test_empty_store_seeds_and_next_id_is_three() {
        let h = harness();
        assert_eq!(ids(&h.catalog), vec![1, 2]);

        let allocator = IdAllocator::new(h.store.clone(), NEXT_ID_KEY);
        let repo = ProductRepository::hydrate(h.store.clone(), RECORDS_KEY);
        assert_eq!(allocator.next_id(repo.max_id()), 3);
    }

    #[test]
    fn test_state_survives_restart() {
        let mut h = harness();
        h.catalog.add(snack_bar()).unwrap();

        let restarted = harness_with(h.store.clone());
        assert_eq!(restarted.catalog.list_products(), h.catalog.list_products());
        assert_eq!(h.store.get(NEXT_ID_KEY).unwrap().as_deref(), Some("4"));
    }

    // ========================================================================
    // ADD
    // ========================================================================

    #[test]
    fn test_add_snack_bar() {
        let mut h = harness();
        let record = h.catalog.add(snack_bar()).unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(ids(&h.catalog), vec![3, 1, 2]);
        assert_eq!(record.price, 5000.0);
        assert_eq!(record.stock, 10);
        assert_eq!(record.release_date, None);
        assert!(record.active);

        let note = h.notifications.current().unwrap();
        assert_eq!(note.variant, NotificationVariant::Success);
        assert_eq!(note.message, MSG_PRODUCT_ADDED);

        assert_eq!(persisted(&h.store), h.catalog.list_products());
        assert_eq!(*h.catalog.form(), FormState::default());
    }

    #[test]
    fn test_add_duplicate_of_seed_fails() {
        let mut h = harness();
        let before = h.catalog.list_products().to_vec();

        let mut input = snack_bar();
        input.name = "Makanan".to_string();
        let err = h.catalog.add(input.clone()).unwrap_err();

        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.get(Field::Name), Some("Product name already exists."));
        assert_eq!(h.catalog.list_products(), before.as_slice());

        // entered values stay in the form
        assert_eq!(h.catalog.form().input, input);
        assert!(h.catalog.form().errors.contains(Field::Name));

        let note = h.notifications.current().unwrap();
        assert_eq!(note.variant, NotificationVariant::Danger);
        assert_eq!(note.message, MSG_CHECK_INPUT);
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let mut h = harness();
        let first = h.catalog.add(snack_bar()).unwrap();
        h.catalog.delete(first.id, |_| true).unwrap();

        let second = h.catalog.add(snack_bar()).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_write_failure_keeps_session_state() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get().returning(|_| Ok(None));
        mock.expect_set()
            .returning(|_, _| Err(AppError::Storage("quota exceeded".to_string())));

        let mut h = harness_with(Arc::new(mock));
        let record = h.catalog.add(snack_bar()).unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(ids(&h.catalog), vec![3, 1, 2]);
        assert_eq!(
            h.notifications.current().unwrap().variant,
            NotificationVariant::Success
        );
    }

    // ========================================================================
    // EDIT / UPDATE
    // ========================================================================

    #[test]
    fn test_edit_with_negative_price_fails() {
        let mut h = harness();
        let original = h.catalog.get_product(1).cloned().unwrap();

        h.catalog.begin_edit(&original);
        h.catalog.set_field(Field::Price, "-5");
        let err = h.catalog.submit().unwrap_err();

        assert_eq!(
            err.validation_errors().unwrap().get(Field::Price),
            Some("Price minimum 0.")
        );
        assert_eq!(h.catalog.get_product(1), Some(&original));
        assert_eq!(h.catalog.form().input.price, "-5");
        assert_eq!(h.catalog.mode(), EditMode::Editing(1));
    }

    #[test]
    fn test_update_keeps_position_and_id() {
        let mut h = harness();
        h.catalog.begin_edit_by_id(2).unwrap();
        h.catalog.set_field(Field::Name, "Minuman Segar");
        h.catalog.set_field(Field::Stock, "25");
        h.catalog.set_active(false);

        let record = h.catalog.submit().unwrap();
        assert_eq!(record.id, 2);
        assert_eq!(ids(&h.catalog), vec![1, 2]);

        let stored = h.catalog.get_product(2).unwrap();
        assert_eq!(stored.name, "Minuman Segar");
        assert_eq!(stored.stock, 25);
        assert!(!stored.active);

        assert_eq!(h.catalog.mode(), EditMode::Creating);
        assert_eq!(h.notifications.current().unwrap().message, MSG_PRODUCT_UPDATED);
        assert_eq!(persisted(&h.store), h.catalog.list_products());
    }

    #[test]
    fn test_edit_may_keep_own_name() {
        let mut h = harness();
        h.catalog.begin_edit_by_id(1).unwrap();
        assert!(h.catalog.submit().is_ok());
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut h = harness();
        let before = h.catalog.list_products().to_vec();

        let err = h.catalog.update(99, snack_bar()).unwrap_err();
        assert!(matches!(err, AppError::NotFound));
        assert_eq!(h.catalog.list_products(), before.as_slice());
        assert!(h.notifications.history().is_empty());
    }

    #[test]
    fn test_begin_edit_retargets_and_clears_errors() {
        let mut h = harness();
        h.catalog.set_field(Field::Name, "x");
        let _ = h.catalog.submit();
        assert!(!h.catalog.form().errors.is_empty());

        h.catalog.begin_edit_by_id(1).unwrap();
        assert!(h.catalog.form().errors.is_empty());
        assert_eq!(h.catalog.form().input.name, "Makanan");

        h.catalog.begin_edit_by_id(2).unwrap();
        assert_eq!(h.catalog.mode(), EditMode::Editing(2));
        assert_eq!(h.catalog.form().input.name, "Minuman");
    }

    #[test]
    fn test_rejected_add_while_editing_switches_to_creating() {
        let mut h = harness();
        h.catalog.begin_edit_by_id(1).unwrap();

        let mut input = snack_bar();
        input.price = "-1".to_string();
        assert!(h.catalog.add(input.clone()).is_err());

        assert_eq!(h.catalog.mode(), EditMode::Creating);
        assert_eq!(h.catalog.form().input, input);
        assert!(h.catalog.form().errors.contains(Field::Price));
    }

    #[test]
    fn test_rejected_update_targets_that_record() {
        let mut h = harness();

        let mut input = ProductInput::from_record(h.catalog.get_product(2).unwrap());
        input.stock = "-3".to_string();
        assert!(h.catalog.update(2, input).is_err());

        assert_eq!(h.catalog.mode(), EditMode::Editing(2));
        assert!(h.catalog.form().errors.contains(Field::Stock));
    }

    #[test]
    fn test_set_field_clears_only_that_error() {
        let mut h = harness();
        h.catalog.set_field(Field::Price, "-1");
        h.catalog.set_field(Field::Name, "ab");
        let _ = h.catalog.submit();
        assert!(h.catalog.form().errors.contains(Field::Price));
        assert!(h.catalog.form().errors.contains(Field::Name));

        h.catalog.set_field(Field::Price, "100");
        assert!(!h.catalog.form().errors.contains(Field::Price));
        assert!(h.catalog.form().errors.contains(Field::Name));
    }

    // ========================================================================
    // DELETE
    // ========================================================================

    #[test]
    fn test_delete_declined_changes_nothing() {
        let mut h = harness();
        let outcome = h.catalog.delete(2, |_| false).unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(ids(&h.catalog), vec![1, 2]);
        assert!(h.notifications.current().is_none());
        assert!(h.notifications.history().is_empty());
    }

    #[test]
    fn test_delete_confirmed_while_editing_resets_form() {
        let mut h = harness();
        h.catalog.begin_edit_by_id(2).unwrap();

        let mut prompted = None;
        let outcome = h
            .catalog
            .delete(2, |record| {
                prompted = Some(record.name.clone());
                true
            })
            .unwrap();

        assert!(matches!(outcome, DeleteOutcome::Deleted(ref r) if r.id == 2));
        assert_eq!(prompted.as_deref(), Some("Minuman"));
        assert_eq!(ids(&h.catalog), vec![1]);
        assert_eq!(h.catalog.mode(), EditMode::Creating);

        let note = h.notifications.current().unwrap();
        assert_eq!(note.variant, NotificationVariant::Success);
        assert_eq!(note.message, MSG_PRODUCT_DELETED);
        assert_eq!(persisted(&h.store), h.catalog.list_products());
    }

    #[test]
    fn test_delete_other_record_keeps_edit_target() {
        let mut h = harness();
        h.catalog.begin_edit_by_id(1).unwrap();
        h.catalog.delete(2, |_| true).unwrap();
        assert_eq!(h.catalog.mode(), EditMode::Editing(1));
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let mut h = harness();
        let err = h.catalog.delete(42, |_| true).unwrap_err();
        assert!(matches!(err, AppError::NotFound));
        assert!(h.notifications.history().is_empty());
    }

    // ========================================================================
    // FORM RESET
    // ========================================================================

    #[test]
    fn test_reset_form_is_idempotent() {
        let mut h = harness();
        h.catalog.begin_edit_by_id(1).unwrap();

        h.catalog.reset_form();
        let once = h.catalog.form().clone();
        h.catalog.reset_form();

        assert_eq!(*h.catalog.form(), once);
        assert_eq!(once, FormState::default());
        assert_eq!(h.catalog.mode(), EditMode::Creating);
    }

    #[test]
    fn test_future_release_date_rejected() {
        let mut h = harness();
        let mut input = snack_bar();
        input.release_date = "2025-06-16".to_string();
        let err = h.catalog.add(input).unwrap_err();
        assert!(err.validation_errors().unwrap().contains(Field::ReleaseDate));

        let mut input = snack_bar();
        input.release_date = "2025-06-15".to_string();
        assert!(h.catalog.add(input).is_ok());
    }
}
