//! REST API Bindings
//!
//! Frontend bindings to the to-do backend, organized by resource.

mod backend;
mod error;
mod items;
mod lists;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::models::EntityId;

pub use backend::TodoBackend;
pub use error::ApiError;

/// Characters escaped inside a single path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(id: &EntityId) -> String {
    utf8_percent_encode(id.as_str(), SEGMENT_ENCODE_SET).to_string()
}

/// REST resources, relative to the API base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `/lists`
    Lists,
    /// `/lists/{id}`
    List(&'a EntityId),
    /// `/lists/{id}/items/` (the trailing slash is part of the route)
    Items(&'a EntityId),
    /// `/lists/{id}/items/{item_id}`
    Item { list_id: &'a EntityId, item_id: &'a EntityId },
    /// `/lists/{id}/checked_state`
    CheckedState(&'a EntityId),
}

impl Endpoint<'_> {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Lists => "/lists".to_string(),
            Endpoint::List(id) => format!("/lists/{}", segment(id)),
            Endpoint::Items(id) => format!("/lists/{}/items/", segment(id)),
            Endpoint::Item { list_id, item_id } => {
                format!("/lists/{}/items/{}", segment(list_id), segment(item_id))
            }
            Endpoint::CheckedState(id) => format!("/lists/{}/checked_state", segment(id)),
        }
    }
}

/// Handle to the backend, shared with views through context
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self, endpoint: Endpoint<'_>) -> String {
        self.config.url(&endpoint.path())
    }

    fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Send a request and fail on non-2xx statuses
    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("[API] {} answered {}", url, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    /// Send a request and decode its JSON body
    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder, url: &str) -> Result<T, ApiError> {
        let response = self.send(request, url).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(ApiConfig::new("http://localhost:3001/api"))
    }

    #[test]
    fn test_endpoint_paths() {
        let list = EntityId::from("3");
        let item = EntityId::from("9");
        assert_eq!(Endpoint::Lists.path(), "/lists");
        assert_eq!(Endpoint::List(&list).path(), "/lists/3");
        assert_eq!(Endpoint::Items(&list).path(), "/lists/3/items/");
        assert_eq!(Endpoint::Item { list_id: &list, item_id: &item }.path(), "/lists/3/items/9");
        assert_eq!(Endpoint::CheckedState(&list).path(), "/lists/3/checked_state");
    }

    #[test]
    fn test_selected_list_url() {
        assert_eq!(
            client().url(Endpoint::List(&EntityId::from(3u64))),
            "http://localhost:3001/api/lists/3"
        );
    }

    #[test]
    fn test_segments_are_escaped() {
        assert_eq!(Endpoint::List(&"a/b c".into()).path(), "/lists/a%2Fb%20c");
        assert_eq!(Endpoint::List(&"65a1f0c2e4b0".into()).path(), "/lists/65a1f0c2e4b0");
        assert_eq!(
            Endpoint::Item { list_id: &"l?1".into(), item_id: &"i#2".into() }.path(),
            "/lists/l%3F1/items/i%232"
        );
    }
}
