//! List Summaries Component
//!
//! Overview screen: all lists, a form for new lists, select and delete.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::NewEntryForm;
use crate::models::{EntityId, ListSummary};

fn item_count_text(count: u32) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

fn delete_prompt(name: &str) -> String {
    format!("Delete \"{}\"?", name)
}

/// A single list in the overview. The trash control asks for
/// confirmation in place; while asking, the row does not select.
#[component]
fn SummaryRow(
    summary: ListSummary,
    on_select: Callback<EntityId>,
    on_delete: Callback<EntityId>,
) -> impl IntoView {
    let confirming = RwSignal::new(false);
    let select_id = summary.id.clone();
    let delete_id = summary.id.clone();
    let prompt = delete_prompt(&summary.name);

    view! {
        <li
            class=move || if confirming.get() { "summary confirming" } else { "summary" }
            on:click=move |_| {
                if !confirming.get_untracked() {
                    on_select.run(select_id.clone());
                }
            }
        >
            <span class="name">{summary.name}</span>
            {summary.item_count.map(|count| view! {
                <span class="count">{item_count_text(count)}</span>
            })}
            {move || if confirming.get() {
                let delete_id = delete_id.clone();
                view! {
                    <span class="delete-confirm" on:click=|ev: MouseEvent| ev.stop_propagation()>
                        <span class="delete-confirm-text">{prompt.clone()}</span>
                        <button
                            class="confirm-btn"
                            on:click=move |_| {
                                confirming.set(false);
                                on_delete.run(delete_id.clone());
                            }
                        >
                            "Delete"
                        </button>
                        <button class="cancel-btn" on:click=move |_| confirming.set(false)>
                            "Keep"
                        </button>
                    </span>
                }
                .into_any()
            } else {
                view! {
                    <button
                        class="trash"
                        title="Delete list"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            confirming.set(true);
                        }
                    >
                        "🗑"
                    </button>
                }
                .into_any()
            }}
        </li>
    }
}

/// Overview of all lists. Renders exactly the summaries it is given;
/// `None` means they have not been loaded yet. `new_name` belongs to the
/// caller, which clears it once the list has been created.
#[component]
pub fn ListSummaries(
    #[prop(into)] summaries: Signal<Option<Vec<ListSummary>>>,
    new_name: RwSignal<String>,
    #[prop(into)] on_select: Callback<EntityId>,
    #[prop(into)] on_create: Callback<String>,
    #[prop(into)] on_delete: Callback<EntityId>,
) -> impl IntoView {
    view! {
        <div class="list-summaries">
            <h1>"All To-Do Lists"</h1>
            <NewEntryForm
                value=new_name
                placeholder="New to-do list name"
                button_label="New List"
                on_submit=on_create
            />
            {move || match summaries.get() {
                None => view! { <p class="loading">"Loading to-do lists..."</p> }.into_any(),
                Some(lists) if lists.is_empty() => {
                    view! { <p class="empty">"There are no to-do lists!"</p> }.into_any()
                }
                Some(lists) => view! {
                    <ul class="summary-list">
                        {lists.into_iter().map(|summary| view! {
                            <SummaryRow summary=summary on_select=on_select on_delete=on_delete />
                        }).collect_view()}
                    </ul>
                }.into_any(),
            }}
        </div>
    }
}
