//! Remote user directory client.
//!
//! Fetches one page of user records from the directory endpoint. Each call
//! is a single attempt with no retry: any failure means "no data available"
//! to the caller, and a partial or garbled page is never returned.

use std::time::Duration;

use reqwest::Client;

use crate::error::ApiError;
use crate::models::{User, UsersPage};

/// Default base URL for the directory API.
pub const DIRECTORY_BASE_URL: &str = "https://reqres.in/api";

/// The fixed page of users the client displays.
pub const DEFAULT_PAGE: u32 = 2;

/// Per-request timeout so a hung endpoint cannot wedge an activation.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for the remote user directory.
pub struct DirectoryClient {
    /// Base URL for the directory API
    pub base_url: String,
    /// Page requested by `fetch_users`
    page: u32,
    /// Reusable HTTP client
    client: Client,
}

impl DirectoryClient {
    /// Create a client pointed at the default directory endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DIRECTORY_BASE_URL)
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page: DEFAULT_PAGE,
            client: Client::new(),
        }
    }

    /// Override the page requested by `fetch_users`.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Fetch the configured page of users.
    ///
    /// # Returns
    /// The user records on the page, or the `ApiError` describing why the
    /// fetch produced no data.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let url = format!("{}/users?page={}", self.base_url, self.page);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let page: UsersPage = serde_json::from_slice(&body)?;
        Ok(page.data)
    }
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_endpoint() {
        let client = DirectoryClient::new();
        assert_eq!(client.base_url, DIRECTORY_BASE_URL);
        assert_eq!(client.page, DEFAULT_PAGE);
    }

    #[test]
    fn test_with_base_url() {
        let client = DirectoryClient::with_base_url("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_with_page() {
        let client = DirectoryClient::new().with_page(1);
        assert_eq!(client.page, 1);
    }

    #[tokio::test]
    async fn test_fetch_users_connection_refused() {
        // Port unlikely to be in use
        let client = DirectoryClient::with_base_url("http://127.0.0.1:59999");
        let result = client.fetch_users().await;
        assert!(matches!(result, Err(ApiError::Http(_))));
    }
}
