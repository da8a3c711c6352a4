//! Transient UI state owned by the coordinator. None of it is persisted.

use crate::model::{Product, ProductId};

/// Visibility of the product form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Closed,
    /// Open with empty fields; submit creates a product.
    Create,
    /// Open pre-filled with this product; submit replaces it.
    Edit(Product),
}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Closed)
    }

    /// The product being edited, if any.
    pub fn editing(&self) -> Option<&Product> {
        match self {
            FormState::Edit(product) => Some(product),
            _ => None,
        }
    }
}

/// The delete confirmation modal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeleteConfirmation {
    #[default]
    Hidden,
    /// Waiting for the user to confirm. The name is captured when the modal opens.
    Pending {
        product_id: ProductId,
        product_name: String,
    },
}

impl DeleteConfirmation {
    pub fn is_pending(&self) -> bool {
        matches!(self, DeleteConfirmation::Pending { .. })
    }

    /// The question shown in the modal.
    pub fn prompt(&self) -> Option<String> {
        match self {
            DeleteConfirmation::Pending { product_name, .. } => Some(format!(
                "Are you sure you want to delete \"{product_name}\"? This action cannot be undone."
            )),
            DeleteConfirmation::Hidden => None,
        }
    }
}

/// Banner styling. Every alert the coordinator raises reports a completed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
}

/// A banner message.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    /// Whether the banner hides itself after the alert TTL.
    pub expires: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AlertState {
    #[default]
    Hidden,
    Visible(Alert),
}

impl AlertState {
    pub fn alert(&self) -> Option<&Alert> {
        match self {
            AlertState::Visible(alert) => Some(alert),
            AlertState::Hidden => None,
        }
    }
}

/// Snapshot of the three independent UI states.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub form: FormState,
    pub delete_confirmation: DeleteConfirmation,
    pub alert: AlertState,
}
