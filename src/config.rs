//! API Configuration
//!
//! Resolves where the REST backend lives.

/// Build-time override for the API base URL
const API_BASE_OVERRIDE: Option<&str> = option_env!("TODO_API_BASE");

/// Path prefix of the REST API on the serving origin
const API_PREFIX: &str = "/api";

/// Location of the REST backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a config from an absolute base URL such as `http://localhost:3001/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Resolve from the build-time override, else the page origin + `/api`.
    ///
    /// Returns `None` outside a browser when no override is set.
    pub fn resolve() -> Option<Self> {
        if let Some(base) = API_BASE_OVERRIDE.filter(|b| !b.trim().is_empty()) {
            return Some(Self::new(base));
        }
        Self::from_origin(&page_origin()?)
    }

    /// `{origin}/api`
    pub fn from_origin(origin: &str) -> Option<Self> {
        let origin = origin.trim_end_matches('/');
        if origin.is_empty() || origin == "null" {
            return None;
        }
        Some(Self::new(format!("{}{}", origin, API_PREFIX)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an API path (leading `/` expected) onto the base
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ApiConfig::new("http://localhost:3001/api/");
        assert_eq!(config.base_url(), "http://localhost:3001/api");
    }

    #[test]
    fn test_from_origin_appends_prefix() {
        let config = ApiConfig::from_origin("https://todo.example.com").unwrap();
        assert_eq!(config.url("/lists"), "https://todo.example.com/api/lists");
    }

    #[test]
    fn test_from_origin_rejects_opaque_origin() {
        assert!(ApiConfig::from_origin("null").is_none());
        assert!(ApiConfig::from_origin("").is_none());
    }

    #[test]
    fn test_url_joins_relative_path() {
        let config = ApiConfig::new("http://h/api");
        assert_eq!(config.url("lists"), "http://h/api/lists");
        assert_eq!(config.url("/lists/3/items/"), "http://h/api/lists/3/items/");
    }
}
