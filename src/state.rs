//! View State
//!
//! Actions each view can dispatch, the failure record shown in the error
//! banner, and the small pure decisions the views make before calling
//! the backend.

use crate::api::ApiError;
use crate::models::{EntityId, ListDetail};

/// Something a view can dispatch, and re-dispatch on retry
pub trait Action: Clone + Send + Sync + 'static {
    /// Lower-case phrase completing "Could not ..."
    fn describe(&self) -> String;
}

/// Actions of the root (overview) view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListsAction {
    Reload,
    Create { name: String },
    Delete { id: EntityId },
}

impl Action for ListsAction {
    fn describe(&self) -> String {
        match self {
            ListsAction::Reload => "load the to-do lists".to_string(),
            ListsAction::Create { name } => format!("create the list \"{}\"", name),
            ListsAction::Delete { .. } => "delete the list".to_string(),
        }
    }
}

/// Actions of the detail view, always scoped to its current list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailAction {
    Load,
    CreateItem { label: String },
    DeleteItem { item_id: EntityId },
    /// Target state, not a flip: re-sending it is idempotent
    SetChecked { item_id: EntityId, checked: bool },
}

impl Action for DetailAction {
    fn describe(&self) -> String {
        match self {
            DetailAction::Load => "load the to-do list".to_string(),
            DetailAction::CreateItem { label } => format!("add \"{}\"", label),
            DetailAction::DeleteItem { .. } => "delete the item".to_string(),
            DetailAction::SetChecked { checked: true, .. } => "check the item".to_string(),
            DetailAction::SetChecked { checked: false, .. } => "uncheck the item".to_string(),
        }
    }
}

/// A failed action and why it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure<A> {
    pub action: A,
    pub message: String,
}

impl<A: Action> Failure<A> {
    pub fn new(action: A, err: &ApiError) -> Self {
        Self {
            action,
            message: err.to_string(),
        }
    }

    pub fn headline(&self) -> String {
        format!("Could not {}.", self.action.describe())
    }
}

/// Trimmed text of a name/label field, `None` when nothing was typed
pub fn normalize_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The check-state change a click on `item_id` asks for: the negation of
/// the item's current state as last returned by the backend.
pub fn toggle_action(detail: &ListDetail, item_id: &EntityId) -> Option<DetailAction> {
    detail.item(item_id).map(|item| DetailAction::SetChecked {
        item_id: item.id.clone(),
        checked: !item.checked,
    })
}
