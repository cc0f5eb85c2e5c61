//! New Entry Form Component
//!
//! Text input plus submit button, used for new lists and new items.

use leptos::prelude::*;

/// Single-field form. The field contents live in `value`, owned by the
/// parent view, so the parent decides when to clear it.
#[component]
pub fn NewEntryForm(
    value: RwSignal<String>,
    placeholder: &'static str,
    button_label: &'static str,
    #[prop(into)] on_submit: Callback<String>,
) -> impl IntoView {
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(value.get_untracked());
    };

    view! {
        <form class="box new-entry-form" on:submit=submit>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button type="submit">{button_label}</button>
        </form>
    }
}
