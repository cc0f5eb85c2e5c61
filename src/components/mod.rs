//! UI Components
//!
//! Leptos components for the overview and detail screens.

mod error_banner;
mod list_summaries;
mod new_entry_form;
mod todo_item_row;
mod todo_list;

pub use error_banner::ErrorBanner;
pub use list_summaries::ListSummaries;
pub use new_entry_form::NewEntryForm;
pub use todo_item_row::TodoItemRow;
pub use todo_list::TodoList;
