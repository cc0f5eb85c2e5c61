//! Backend Trait
//!
//! The calls the views make, abstracted so the action flows in
//! `crate::dispatch` run against the REST client or a test double.

use super::{ApiClient, ApiError};
use crate::models::{EntityId, ListDetail, ListSummary, NewListResponse};

/// To-do backend as seen by the views. Futures are not `Send`; they run
/// on the browser's single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait TodoBackend {
    async fn list_summaries(&self) -> Result<Vec<ListSummary>, ApiError>;
    async fn create_list(&self, name: &str) -> Result<Option<NewListResponse>, ApiError>;
    async fn delete_list(&self, id: &EntityId) -> Result<(), ApiError>;
    async fn get_list(&self, id: &EntityId) -> Result<ListDetail, ApiError>;
    async fn create_item(&self, list_id: &EntityId, label: &str) -> Result<ListDetail, ApiError>;
    async fn delete_item(&self, list_id: &EntityId, item_id: &EntityId) -> Result<ListDetail, ApiError>;
    async fn set_checked_state(
        &self,
        list_id: &EntityId,
        item_id: &EntityId,
        checked_state: bool,
    ) -> Result<ListDetail, ApiError>;
}

impl TodoBackend for ApiClient {
    async fn list_summaries(&self) -> Result<Vec<ListSummary>, ApiError> {
        ApiClient::list_summaries(self).await
    }

    async fn create_list(&self, name: &str) -> Result<Option<NewListResponse>, ApiError> {
        ApiClient::create_list(self, name).await
    }

    async fn delete_list(&self, id: &EntityId) -> Result<(), ApiError> {
        ApiClient::delete_list(self, id).await
    }

    async fn get_list(&self, id: &EntityId) -> Result<ListDetail, ApiError> {
        ApiClient::get_list(self, id).await
    }

    async fn create_item(&self, list_id: &EntityId, label: &str) -> Result<ListDetail, ApiError> {
        ApiClient::create_item(self, list_id, label).await
    }

    async fn delete_item(&self, list_id: &EntityId, item_id: &EntityId) -> Result<ListDetail, ApiError> {
        ApiClient::delete_item(self, list_id, item_id).await
    }

    async fn set_checked_state(
        &self,
        list_id: &EntityId,
        item_id: &EntityId,
        checked_state: bool,
    ) -> Result<ListDetail, ApiError> {
        ApiClient::set_checked_state(self, list_id, item_id, checked_state).await
    }
}
