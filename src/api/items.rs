//! Item Endpoints
//!
//! Every item mutation answers with the whole list.

use super::{ApiClient, ApiError, Endpoint};
use crate::models::{CheckedStateUpdate, EntityId, ListDetail, NewItem};

impl ApiClient {
    /// `POST /lists/{id}/items/`
    pub async fn create_item(&self, list_id: &EntityId, label: &str) -> Result<ListDetail, ApiError> {
        let url = self.url(Endpoint::Items(list_id));
        log::debug!("[API] POST {} label={:?}", url, label);
        self.send_json(self.http().post(&url).json(&NewItem { label }), &url).await
    }

    /// `DELETE /lists/{id}/items/{item_id}`
    pub async fn delete_item(&self, list_id: &EntityId, item_id: &EntityId) -> Result<ListDetail, ApiError> {
        let url = self.url(Endpoint::Item { list_id, item_id });
        log::debug!("[API] DELETE {}", url);
        self.send_json(self.http().delete(&url), &url).await
    }

    /// `PATCH /lists/{id}/checked_state`
    pub async fn set_checked_state(&self, list_id: &EntityId, item_id: &EntityId, checked_state: bool) -> Result<ListDetail, ApiError> {
        let url = self.url(Endpoint::CheckedState(list_id));
        log::debug!("[API] PATCH {} item={} checked={}", url, item_id, checked_state);
        let body = CheckedStateUpdate { item_id, checked_state };
        self.send_json(self.http().patch(&url).json(&body), &url).await
    }
}
