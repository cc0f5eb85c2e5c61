//! Todo List Component
//!
//! Detail view of one list: add, check and delete items. Every mutation
//! replaces the local copy with the list the backend sends back.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorBanner, NewEntryForm, TodoItemRow};
use crate::context::use_app_context;
use crate::dispatch::{run_detail_action, toggle_item, DetailOutcome};
use crate::guard::RequestGuard;
use crate::models::{EntityId, Item, ListDetail};
use crate::state::{DetailAction, Failure};

#[component]
pub fn TodoList(
    #[prop(into)] list_id: Signal<EntityId>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let guard = RequestGuard::new();

    // None until the current list id has loaded
    let detail = RwSignal::new(None::<ListDetail>);
    let failure = RwSignal::new(None::<Failure<DetailAction>>);
    let new_label = RwSignal::new(String::new());

    let apply = move |outcome: DetailOutcome| match outcome {
        DetailOutcome::Loaded { detail: loaded, clear_input } => {
            if clear_input {
                new_label.set(String::new());
            }
            detail.set(Some(loaded));
        }
        DetailOutcome::Failed(f) => failure.set(Some(f)),
        DetailOutcome::Skipped | DetailOutcome::Stale => {}
    };

    let dispatch = {
        let ctx = ctx.clone();
        let guard = guard.clone();
        Callback::new(move |action: DetailAction| {
            let api = ctx.api();
            let guard = guard.clone();
            let list_id = list_id.get_untracked();
            failure.set(None);

            spawn_local(async move {
                apply(run_detail_action(&api, &guard, &list_id, action).await);
            });
        })
    };

    let toggle_checked = {
        let guard = guard.clone();
        Callback::new(move |item_id: EntityId| {
            let api = ctx.api();
            let guard = guard.clone();
            let list_id = list_id.get_untracked();
            let current = detail.get_untracked();
            failure.set(None);

            spawn_local(async move {
                apply(toggle_item(&api, &guard, &list_id, current.as_ref(), &item_id).await);
            });
        })
    };

    // Reset and load whenever the list id changes
    {
        let guard = guard.clone();
        Effect::new(move |_| {
            let id = list_id.get();
            guard.invalidate();
            detail.set(None);
            failure.set(None);
            new_label.set(String::new());
            log::info!("[DETAIL] Loading list {}", id);
            dispatch.run(DetailAction::Load);
        });
    }

    on_cleanup(move || guard.invalidate());

    let create_item = move |label: String| dispatch.run(DetailAction::CreateItem { label });
    let delete_item = move |item_id: EntityId| dispatch.run(DetailAction::DeleteItem { item_id });

    let list_name = move || detail.with(|d| d.as_ref().map(|d| d.name.clone()).unwrap_or_default());
    let items = move || detail.with(|d| d.as_ref().map(|d| d.items.clone()).unwrap_or_default());
    let has_items = move || detail.with(|d| d.as_ref().is_some_and(|d| !d.items.is_empty()));

    view! {
        <div class=move || if detail.with(Option::is_none) { "todo-list loading" } else { "todo-list" }>
            <button class="back" on:click=move |_| on_back.run(())>"Back"</button>

            {move || failure.get().map(|f| {
                let retry = f.action.clone();
                view! {
                    <ErrorBanner
                        headline=f.headline()
                        message=f.message.clone()
                        on_retry=Callback::new(move |_: ()| dispatch.run(retry.clone()))
                        on_dismiss=Callback::new(move |_: ()| failure.set(None))
                    />
                }
            })}

            <Show
                when=move || detail.with(Option::is_some)
                fallback=|| view! { <span class="loading-text">"Loading to-do list..."</span> }
            >
                <h1>"List: " {list_name}</h1>
                <NewEntryForm
                    value=new_label
                    placeholder="Add new item"
                    button_label="Add Item"
                    on_submit=create_item
                />
                <Show
                    when=has_items
                    fallback=|| view! { <div class="no-items">"There are currently no items."</div> }
                >
                    <For
                        each=items
                        key=|item: &Item| (item.id.clone(), item.label.clone(), item.checked)
                        children=move |item: Item| view! {
                            <TodoItemRow item=item on_toggle=toggle_checked on_delete=delete_item />
                        }
                    />
                </Show>
            </Show>
        </div>
    }
}
