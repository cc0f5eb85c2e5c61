//! List Endpoints

use super::{ApiClient, ApiError, Endpoint};
use crate::models::{EntityId, ListDetail, ListSummary, NewList, NewListResponse};

impl ApiClient {
    /// `GET /lists`
    pub async fn list_summaries(&self) -> Result<Vec<ListSummary>, ApiError> {
        let url = self.url(Endpoint::Lists);
        log::debug!("[API] GET {}", url);
        self.send_json(self.http().get(&url), &url).await
    }

    /// `POST /lists`. The created list is only used for logging, so an
    /// unreadable body is not treated as a failure.
    pub async fn create_list(&self, name: &str) -> Result<Option<NewListResponse>, ApiError> {
        let url = self.url(Endpoint::Lists);
        log::debug!("[API] POST {} name={:?}", url, name);
        let response = self.send(self.http().post(&url).json(&NewList { name }), &url).await?;
        match response.json::<NewListResponse>().await {
            Ok(created) => Ok(Some(created)),
            Err(e) => {
                log::warn!("[API] create list: ignoring unreadable body: {}", e);
                Ok(None)
            }
        }
    }

    /// `DELETE /lists/{id}`
    pub async fn delete_list(&self, id: &EntityId) -> Result<(), ApiError> {
        let url = self.url(Endpoint::List(id));
        log::debug!("[API] DELETE {}", url);
        self.send(self.http().delete(&url), &url).await?;
        Ok(())
    }

    /// `GET /lists/{id}`
    pub async fn get_list(&self, id: &EntityId) -> Result<ListDetail, ApiError> {
        let url = self.url(Endpoint::List(id));
        log::debug!("[API] GET {}", url);
        self.send_json(self.http().get(&url), &url).await
    }
}
