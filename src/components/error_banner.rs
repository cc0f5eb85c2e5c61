//! Error Banner Component
//!
//! Inline notice for a failed request with manual retry.

use leptos::prelude::*;

/// Number of recent warning/error log lines offered under "Details"
const DETAIL_LINES: usize = 5;

#[component]
pub fn ErrorBanner(
    headline: String,
    message: String,
    #[prop(into)] on_retry: Callback<()>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    let details = rolling_logger::recent_problems(DETAIL_LINES)
        .into_iter()
        .map(|record| record.line())
        .collect::<Vec<_>>();

    view! {
        <div class="error-banner" role="alert">
            <div class="error-text">
                <strong>{headline}</strong>
                <span class="error-message">{message}</span>
            </div>
            <div class="error-actions">
                <button class="retry-btn" on:click=move |_| on_retry.run(())>"Retry"</button>
                <button class="dismiss-btn" on:click=move |_| on_dismiss.run(())>"Dismiss"</button>
            </div>
            {(!details.is_empty()).then(|| view! {
                <details class="error-details">
                    <summary>"Details"</summary>
                    <pre>{details.join("\n")}</pre>
                </details>
            })}
        </div>
    }
}
