//! The synchronous state machine behind the coordinator actor.
//!
//! [`Coordinator::handle`] applies one [`UiEvent`] to the inventory and the UI state. It never
//! sleeps or spawns: the actor reads [`Coordinator::alert_generation`] after each event and
//! schedules the auto-hide timer itself.

use super::error::CoordinatorError;
use super::state::{Alert, AlertKind, AlertState, DeleteConfirmation, FormState, ViewState};
use crate::inventory::InventoryStore;
use crate::model::{Product, ProductDraft, ProductId};
use tracing::{debug, info};

pub const PRODUCT_ADDED_MESSAGE: &str = "Product added successfully!";
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

/// Message shown after a confirmed delete.
pub fn product_deleted_message(name: &str) -> String {
    format!("Product \"{name}\" has been deleted successfully.")
}

/// UI actions consumed by the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    AddClicked,
    EditClicked(Product),
    DeleteClicked(ProductId),
    FormSubmit(ProductDraft),
    FormCancel,
    ConfirmDelete,
    CancelDelete,
    AlertDismiss,
}

/// The inventory plus the transient UI state.
pub struct Coordinator {
    store: InventoryStore,
    form: FormState,
    confirmation: DeleteConfirmation,
    alert: AlertState,
    alert_generation: u64,
}

impl Coordinator {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            store,
            form: FormState::Closed,
            confirmation: DeleteConfirmation::Hidden,
            alert: AlertState::Hidden,
            alert_generation: 0,
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            form: self.form.clone(),
            delete_confirmation: self.confirmation.clone(),
            alert: self.alert.clone(),
        }
    }

    /// Incremented every time an alert is shown.
    pub fn alert_generation(&self) -> u64 {
        self.alert_generation
    }

    /// Applies one UI event. On error nothing changes.
    pub fn handle(&mut self, event: UiEvent) -> Result<(), CoordinatorError> {
        debug!(?event, "UI event");
        match event {
            UiEvent::AddClicked => {
                self.form = FormState::Create;
            }
            UiEvent::EditClicked(product) => {
                self.form = FormState::Edit(product);
            }
            UiEvent::FormSubmit(draft) => self.submit(draft)?,
            UiEvent::FormCancel => {
                self.form = FormState::Closed;
            }
            UiEvent::DeleteClicked(product_id) => {
                let product_name = self
                    .store
                    .get(&product_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_string());
                self.confirmation = DeleteConfirmation::Pending {
                    product_id,
                    product_name,
                };
            }
            UiEvent::ConfirmDelete => self.confirm_delete(),
            UiEvent::CancelDelete => {
                self.confirmation = DeleteConfirmation::Hidden;
            }
            UiEvent::AlertDismiss => {
                self.alert = AlertState::Hidden;
            }
        }
        Ok(())
    }

    /// Hides the alert if it is still the one shown at `generation`. Returns whether it did.
    pub fn expire_alert(&mut self, generation: u64) -> bool {
        if generation != self.alert_generation || self.alert.alert().is_none() {
            debug!(generation, current = self.alert_generation, "Stale alert timer");
            return false;
        }
        self.alert = AlertState::Hidden;
        true
    }

    fn submit(&mut self, draft: ProductDraft) -> Result<(), CoordinatorError> {
        match &self.form {
            FormState::Closed => Err(CoordinatorError::FormNotOpen),
            FormState::Create => {
                let product = self.store.create(draft)?;
                info!(id = %product.id, "Product added");
                self.form = FormState::Closed;
                self.show_alert(AlertKind::Success, PRODUCT_ADDED_MESSAGE.to_string(), false);
                Ok(())
            }
            FormState::Edit(editing) => {
                let updated = Product::new(editing.id.clone(), draft);
                let id = updated.id.clone();
                self.store.update(updated)?;
                info!(%id, "Product edited");
                self.form = FormState::Closed;
                Ok(())
            }
        }
    }

    fn confirm_delete(&mut self) {
        let pending = std::mem::take(&mut self.confirmation);
        if let DeleteConfirmation::Pending {
            product_id,
            product_name,
        } = pending
        {
            self.store.remove(&product_id);
            info!(id = %product_id, "Product deleted");
            self.show_alert(AlertKind::Success, product_deleted_message(&product_name), true);
        }
    }

    fn show_alert(&mut self, kind: AlertKind, message: String, expires: bool) {
        self.alert_generation += 1;
        self.alert = AlertState::Visible(Alert {
            kind,
            message,
            expires,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{sample_products, InventoryError};
    use std::sync::Arc;
    use store_framework::{InMemoryKeyValueStore, PersistenceAdapter};

    fn coordinator() -> Coordinator {
        let adapter = PersistenceAdapter::new(Arc::new(InMemoryKeyValueStore::new()), "products");
        Coordinator::new(InventoryStore::new(sample_products(), adapter))
    }

    fn lamp() -> ProductDraft {
        ProductDraft::new("Desk Lamp", 19.99, "Home", 5, true)
    }

    #[test]
    fn test_create_flow_shows_non_expiring_alert() {
        let mut c = coordinator();
        c.handle(UiEvent::AddClicked).unwrap();
        assert_eq!(c.view_state().form, FormState::Create);

        c.handle(UiEvent::FormSubmit(lamp())).unwrap();
        let state = c.view_state();
        assert_eq!(state.form, FormState::Closed);
        assert_eq!(
            state.alert.alert(),
            Some(&Alert {
                kind: AlertKind::Success,
                message: PRODUCT_ADDED_MESSAGE.into(),
                expires: false,
            })
        );
        assert_eq!(c.store().len(), 11);
    }

    #[test]
    fn test_edit_flow_updates_without_alert() {
        let mut c = coordinator();
        let laptop = c.store().list()[0].clone();

        c.handle(UiEvent::EditClicked(laptop.clone())).unwrap();
        assert_eq!(c.view_state().form.editing(), Some(&laptop));

        let mut draft = laptop.to_draft();
        draft.price = 899.99;
        c.handle(UiEvent::FormSubmit(draft)).unwrap();

        assert_eq!(c.view_state(), ViewState::default());
        assert_eq!(c.store().list()[0].price, 899.99);
        assert_eq!(c.store().list()[0].id, laptop.id);
        assert_eq!(c.alert_generation(), 0);
    }

    #[test]
    fn test_invalid_submit_keeps_form_open() {
        let mut c = coordinator();
        c.handle(UiEvent::AddClicked).unwrap();

        let err = c
            .handle(UiEvent::FormSubmit(ProductDraft::new("", 1.0, "Home", 1, true)))
            .unwrap_err();
        assert!(matches!(err, CoordinatorError::Inventory(InventoryError::Validation(_))));
        assert_eq!(c.view_state().form, FormState::Create);
        assert_eq!(c.store().len(), 10);
    }

    #[test]
    fn test_submit_without_open_form_is_rejected() {
        let mut c = coordinator();
        assert_eq!(
            c.handle(UiEvent::FormSubmit(lamp())),
            Err(CoordinatorError::FormNotOpen)
        );
        assert_eq!(c.store().len(), 10);
    }

    #[test]
    fn test_cancel_form_clears_editing() {
        let mut c = coordinator();
        let laptop = c.store().list()[0].clone();
        c.handle(UiEvent::EditClicked(laptop)).unwrap();
        c.handle(UiEvent::FormCancel).unwrap();

        assert_eq!(c.view_state().form, FormState::Closed);
        assert_eq!(c.store().list(), sample_products().as_slice());
    }

    #[test]
    fn test_delete_then_cancel_changes_nothing() {
        let mut c = coordinator();
        c.handle(UiEvent::DeleteClicked("prod_2".into())).unwrap();
        assert_eq!(
            c.view_state().delete_confirmation,
            DeleteConfirmation::Pending {
                product_id: "prod_2".into(),
                product_name: "T-Shirt".into(),
            }
        );

        c.handle(UiEvent::CancelDelete).unwrap();
        assert_eq!(c.view_state().delete_confirmation, DeleteConfirmation::Hidden);
        assert_eq!(c.store().list(), sample_products().as_slice());
    }

    #[test]
    fn test_confirm_delete_removes_and_shows_expiring_alert() {
        let mut c = coordinator();
        c.handle(UiEvent::DeleteClicked("prod_2".into())).unwrap();
        c.handle(UiEvent::ConfirmDelete).unwrap();

        let state = c.view_state();
        assert!(!state.delete_confirmation.is_pending());
        let alert = state.alert.alert().unwrap();
        assert_eq!(alert.message, "Product \"T-Shirt\" has been deleted successfully.");
        assert!(alert.expires);
        assert!(c.store().get(&"prod_2".into()).is_none());

        assert!(c.expire_alert(c.alert_generation()));
        assert_eq!(c.view_state().alert, AlertState::Hidden);
    }

    #[test]
    fn test_unknown_product_name_in_confirmation() {
        let mut c = coordinator();
        c.handle(UiEvent::DeleteClicked("prod_missing".into())).unwrap();
        assert_eq!(
            c.view_state().delete_confirmation.prompt().unwrap(),
            "Are you sure you want to delete \"Unknown Product\"? This action cannot be undone."
        );

        c.handle(UiEvent::ConfirmDelete).unwrap();
        assert_eq!(c.store().len(), 10);
    }

    #[test]
    fn test_confirm_without_pending_is_noop() {
        let mut c = coordinator();
        c.handle(UiEvent::ConfirmDelete).unwrap();
        assert_eq!(c.view_state(), ViewState::default());
        assert_eq!(c.store().len(), 10);
    }

    #[test]
    fn test_stale_generation_does_not_clear_newer_alert() {
        let mut c = coordinator();
        c.handle(UiEvent::DeleteClicked("prod_1".into())).unwrap();
        c.handle(UiEvent::ConfirmDelete).unwrap();
        let first = c.alert_generation();

        c.handle(UiEvent::AddClicked).unwrap();
        c.handle(UiEvent::FormSubmit(lamp())).unwrap();

        assert!(!c.expire_alert(first));
        assert_eq!(
            c.view_state().alert.alert().map(|a| a.message.as_str()),
            Some(PRODUCT_ADDED_MESSAGE)
        );
    }

    #[test]
    fn test_dismiss_hides_alert() {
        let mut c = coordinator();
        c.handle(UiEvent::AddClicked).unwrap();
        c.handle(UiEvent::FormSubmit(lamp())).unwrap();
        c.handle(UiEvent::AlertDismiss).unwrap();
        assert_eq!(c.view_state().alert, AlertState::Hidden);
        assert!(!c.expire_alert(c.alert_generation()));
    }
}
