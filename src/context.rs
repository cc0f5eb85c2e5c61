//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    api: ApiClient,
}

impl AppContext {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Backend client for the current page
    pub fn api(&self) -> ApiClient {
        self.api.clone()
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
