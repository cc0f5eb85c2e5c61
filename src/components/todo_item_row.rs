//! Todo Item Row Component
//!
//! One item of the detail view.

use leptos::prelude::*;

use crate::models::{EntityId, Item};

/// Clicking the row toggles the item; the trash control deletes it
/// without also toggling.
#[component]
pub fn TodoItemRow(
    item: Item,
    #[prop(into)] on_toggle: Callback<EntityId>,
    #[prop(into)] on_delete: Callback<EntityId>,
) -> impl IntoView {
    let toggle_id = item.id.clone();
    let delete_id = item.id.clone();
    let checked = item.checked;

    view! {
        <div
            class=if checked { "item checked" } else { "item" }
            on:click=move |_| on_toggle.run(toggle_id.clone())
        >
            <span class="check">{if checked { "✅ " } else { "⬜️ " }}</span>
            <span class="label">{item.label}</span>
            <span
                class="trash"
                title="Delete item"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(delete_id.clone());
                }
            >
                "🗑"
            </span>
        </div>
    }
}
