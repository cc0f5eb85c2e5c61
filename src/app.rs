//! To-Do Lists App
//!
//! Root component: owns the list summaries and the selected list, and
//! switches between the overview and the detail view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{ErrorBanner, ListSummaries, TodoList};
use crate::config::ApiConfig;
use crate::context::{use_app_context, AppContext};
use crate::dispatch::run_lists_action;
use crate::guard::RequestGuard;
use crate::models::{EntityId, ListSummary};
use crate::state::{Failure, ListsAction};

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    provide_context(AppContext::new(ApiClient::new(config)));
    let ctx = use_app_context();

    // State
    let summaries = RwSignal::new(None::<Vec<ListSummary>>);
    let selected = RwSignal::new(None::<EntityId>);
    let failure = RwSignal::new(None::<Failure<ListsAction>>);
    let new_name = RwSignal::new(String::new());
    let guard = RequestGuard::new();

    let dispatch = Callback::new(move |action: ListsAction| {
        let api = ctx.api();
        let guard = guard.clone();
        failure.set(None);

        spawn_local(async move {
            let outcome = run_lists_action(&api, &guard, action).await;
            if outcome.created {
                new_name.set(String::new());
            }
            if let Some(loaded) = outcome.summaries {
                summaries.set(Some(loaded));
            }
            // On failure whatever was shown before stays
            if let Some(f) = outcome.failure {
                failure.set(Some(f));
            }
        });
    });

    // Load summaries on mount
    Effect::new(move |_| dispatch.run(ListsAction::Reload));

    let create = move |name: String| dispatch.run(ListsAction::Create { name });
    let delete = move |id: EntityId| dispatch.run(ListsAction::Delete { id });

    let select = move |id: EntityId| {
        log::info!("[APP] Selected list {}", id);
        failure.set(None);
        selected.set(Some(id));
    };

    let back = Callback::new(move |_: ()| {
        selected.set(None);
        dispatch.run(ListsAction::Reload);
    });

    // Holds the last selected id so the detail view never sees an empty id
    // while it is being torn down.
    let current_list = Memo::new(move |prev: Option<&EntityId>| {
        selected.get().or_else(|| prev.cloned()).unwrap_or_default()
    });

    view! {
        <div class="app">
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
                when=move || selected.with(Option::is_some)
                fallback=move || view! {
                    <ListSummaries
                        summaries=summaries
                        new_name=new_name
                        on_select=select
                        on_create=create
                        on_delete=delete
                    />
                }
            >
                <TodoList list_id=current_list on_back=back />
            </Show>
        </div>
    }
}
