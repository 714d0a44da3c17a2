// SPDX-License-Identifier: MPL-2.0
//! Wire types for the photo-listing API.
//!
//! These mirror the JSON shapes returned by the Unsplash-compatible
//! endpoints. Fields the views never read are simply omitted; serde
//! ignores unknown fields by default.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry of the paginated `/photos` listing.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PhotoSummary {
    pub id: String,
    #[serde(default)]
    pub alt_description: Option<String>,
    pub urls: PhotoUrls,
    pub user: Author,
}

/// Full metadata for a single photo from `/photos/{id}`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PhotoDetail {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub urls: PhotoUrls,
    pub user: Author,
}

/// Image variants the API exposes for a photo.
///
/// Only the sizes the views render are kept: `thumb` for grid cards and
/// `full` for the detail screen.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PhotoUrls {
    pub thumb: String,
    pub full: String,
}

/// The photographer attached to a photo.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Author {
    pub name: String,
}

impl PhotoDetail {
    /// The text shown as the photo caption, falling back to the alt text.
    ///
    /// Returns `None` when the API provided neither, in which case the
    /// view substitutes the localized "no description" placeholder.
    pub fn caption(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or(self.alt_description.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}
