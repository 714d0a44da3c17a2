// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the photo-listing API.
//!
//! The client wraps a single `reqwest::Client` configured with an explicit
//! redirect policy and user agent. All methods are `async` and return
//! [`ApiError`] so callers can map failures onto localized messages.
//!
//! Page fetches are issued strictly one at a time by the gallery state; this
//! module does not enforce that ordering itself. Image byte fetches (the
//! native equivalent of the browser loading `<img>` sources) are independent
//! of the page sequence.

pub mod types;

pub use types::{Author, PhotoDetail, PhotoSummary, PhotoUrls};

use crate::config::defaults::{DEFAULT_BASE_URL, DEFAULT_PER_PAGE};
use crate::config::ApiConfig;
use crate::error::ApiError;
use reqwest::StatusCode;

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "UNSPLASH_BASE_URL";
/// Environment variable overriding the API access key.
pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// Resolved API endpoint and credential.
///
/// Precedence for each part: CLI flag, then environment variable, then the
/// `[api]` section of `settings.toml`. The base URL falls back to the public
/// Unsplash endpoint; the access key has no fallback and stays `None` when
/// nothing provides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub base_url: String,
    pub access_key: Option<String>,
}

impl Credentials {
    /// Resolves credentials from CLI flags, process environment, and config.
    pub fn resolve(
        cli_base_url: Option<String>,
        cli_access_key: Option<String>,
        config: &ApiConfig,
    ) -> Self {
        Self::resolve_parts(
            cli_base_url,
            std::env::var(BASE_URL_ENV).ok(),
            config.base_url.clone(),
            cli_access_key,
            std::env::var(ACCESS_KEY_ENV).ok(),
            config.access_key.clone(),
        )
    }

    fn resolve_parts(
        cli_base_url: Option<String>,
        env_base_url: Option<String>,
        config_base_url: Option<String>,
        cli_access_key: Option<String>,
        env_access_key: Option<String>,
        config_access_key: Option<String>,
    ) -> Self {
        let base_url = cli_base_url
            .or(env_base_url)
            .or(config_base_url)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let access_key = cli_access_key
            .or(env_access_key)
            .or(config_access_key)
            .filter(|key| !key.trim().is_empty());

        Self {
            base_url,
            access_key,
        }
    }
}

/// Maps an HTTP status onto the API error taxonomy.
///
/// 401 and 403 both signal an invalid or missing credential; the original
/// service answers 403 for bad keys and 401 for absent ones.
fn classify_status(status: StatusCode) -> Option<ApiError> {
    if status.is_success() {
        return None;
    }
    Some(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::AccessDenied,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        other => ApiError::Status(other.as_u16()),
    })
}

/// Client for the photo listing and detail endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl ApiClient {
    /// Creates a client from resolved credentials.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingCredential` when no access key was
    /// configured, and `ApiError::Transport` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(credentials: &Credentials) -> Result<Self, ApiError> {
        let access_key = credentials
            .access_key
            .clone()
            .ok_or(ApiError::MissingCredential)?;

        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: credentials.base_url.trim_end_matches('/').to_string(),
            access_key,
        })
    }

    /// Joins a path onto the configured base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetches one page of the photo listing.
    ///
    /// An empty vector means the listing is exhausted.
    ///
    /// # Errors
    ///
    /// `ApiError::AccessDenied` on 401/403, `ApiError::Status` on other
    /// non-success codes, `ApiError::Transport` on connection failures and
    /// `ApiError::Decode` when the body is not a photo array.
    pub async fn list_photos(&self, page: u32) -> Result<Vec<PhotoSummary>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("photos"))
            .query(&[
                ("page", page.to_string()),
                ("per_page", DEFAULT_PER_PAGE.to_string()),
                ("client_id", self.access_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if let Some(err) = classify_status(response.status()) {
            return Err(err);
        }

        response
            .json::<Vec<PhotoSummary>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetches the full metadata of a single photo.
    ///
    /// # Errors
    ///
    /// `ApiError::NotFound` on 404, otherwise as [`Self::list_photos`].
    pub async fn get_photo(&self, id: &str) -> Result<PhotoDetail, ApiError> {
        let response = self
            .http
            .get(self.endpoint(&format!("photos/{id}")))
            .query(&[("client_id", self.access_key.clone())])
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if let Some(err) = classify_status(response.status()) {
            return Err(err);
        }

        response
            .json::<PhotoDetail>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Downloads raw image bytes from an URL found in an API payload.
    ///
    /// Image URLs carry their own signing parameters, so no credential is
    /// attached.
    ///
    /// # Errors
    ///
    /// `ApiError::Transport` on connection failures and the status-derived
    /// variants for non-success responses.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if let Some(err) = classify_status(response.status()) {
            return Err(err);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
