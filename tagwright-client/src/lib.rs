//! Tag Manager HTTP Client
//!
//! A simple, type-safe HTTP client for the Google Tag Manager v2 management API.
//!
//! This crate provides the narrow capability surface the provisioning flow
//! depends on ([`TagManagerApi`]) together with its production implementation
//! ([`TagManagerClient`]) and service-account authentication.
//!
//! # Example
//!
//! ```no_run
//! use tagwright_client::TagManagerClient;
//! use tagwright_core::domain::scope::ContainerScope;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = TagManagerClient::from_service_account("service-account.json").await?;
//!
//!     let scope = ContainerScope::new("6002", "32871");
//!     for workspace in client.list_workspaces(&scope).await? {
//!         println!("{}: {}", workspace.workspace_id, workspace.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod error;
mod tags;
mod triggers;
mod workspaces;

// Re-export commonly used types
pub use api::TagManagerApi;
pub use auth::ServiceAccountKey;
pub use error::{ClientError, Result};

use std::path::Path;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Production endpoint of the Tag Manager v2 API
pub const DEFAULT_BASE_URL: &str = "https://tagmanager.googleapis.com/tagmanager/v2";

/// HTTP client for the Tag Manager v2 management API
///
/// This client provides methods for the endpoints the provisioning flow
/// touches, organized into logical groups:
/// - Workspaces (list)
/// - Tags (list, create, update, delete)
/// - Triggers (list, create)
#[derive(Debug, Clone)]
pub struct TagManagerClient {
    /// Base URL of the management API
    base_url: String,
    /// Bearer token attached to every request
    access_token: String,
    /// HTTP client instance
    client: Client,
}

impl TagManagerClient {
    /// Create a client for the production endpoint
    ///
    /// # Arguments
    /// * `access_token` - An OAuth access token scoped for container editing
    ///
    /// # Example
    /// ```
    /// use tagwright_client::TagManagerClient;
    ///
    /// let client = TagManagerClient::new("ya29.token");
    /// ```
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, access_token)
    }

    /// Create a client against a custom endpoint
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the management API
    /// * `access_token` - An OAuth access token
    pub fn with_base_url(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            client: Client::new(),
        }
    }

    /// Create a client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the management API
    /// * `access_token` - An OAuth access token
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use tagwright_client::{DEFAULT_BASE_URL, TagManagerClient};
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = TagManagerClient::with_client(DEFAULT_BASE_URL, "ya29.token", http_client);
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            client,
        }
    }

    /// Create a client by exchanging a service-account key for an access token
    ///
    /// Loads the key file at `path` and performs the JWT-bearer grant with
    /// the container editing scope. The resulting token is valid for an hour
    /// and is not refreshed; build a new client for longer-lived work.
    ///
    /// # Arguments
    /// * `path` - Path to the service-account key JSON file
    ///
    /// # Returns
    /// A client authenticated against the production endpoint
    pub async fn from_service_account(path: impl AsRef<Path>) -> Result<Self> {
        let key = ServiceAccountKey::from_file(path.as_ref())?;
        let client = Client::new();
        let access_token =
            auth::fetch_access_token(&client, &key, auth::TAGMANAGER_EDIT_SCOPE).await?;

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token,
            client,
        })
    }

    /// Get the base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Builders
    // =============================================================================

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).bearer_auth(&self.access_token)
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.post(url).bearer_auth(&self.access_token)
    }

    fn put(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.put(url).bearer_auth(&self.access_token)
    }

    fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.delete(url).bearer_auth(&self.access_token)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is ignored (e.g., DELETE operations)
    ///
    /// This method checks the status code and returns an error if the request failed.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
