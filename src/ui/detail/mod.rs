// SPDX-License-Identifier: MPL-2.0
//! Detail screen for a single photo.
//!
//! Entering the screen fetches the photo's metadata; while pending the
//! screen shows a loading indicator. Any failure, including a 404 from the
//! API, renders the "not found" state. There is no retry; the only way out
//! is navigating back to the gallery.

mod view;

pub use view::{view, ViewContext};

use crate::api::PhotoDetail;
use crate::error::ApiError;
use iced::widget::image;

/// Lifecycle of one detail-screen visit.
#[derive(Debug, Clone)]
pub enum Phase {
    /// Metadata fetch in flight.
    Loading,
    /// Metadata arrived; the full-size image may still be downloading.
    Loaded {
        photo: PhotoDetail,
        image: Option<image::Handle>,
    },
    /// The fetch failed or the photo does not exist. Terminal for this id.
    NotFound,
}

/// Messages for the detail screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// The metadata fetch completed.
    PhotoLoaded {
        id: String,
        result: Result<PhotoDetail, ApiError>,
    },
    /// The full-size image download completed.
    ImageLoaded {
        id: String,
        result: Result<image::Handle, ApiError>,
    },
    /// The back button was pressed.
    BackPressed,
}

/// Effects propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Download the full-size image for the loaded photo.
    FetchImage { id: String, url: String },
    /// Leave the detail screen.
    Close,
}

/// Detail screen state for one photo identifier.
#[derive(Debug, Clone)]
pub struct State {
    id: String,
    phase: Phase,
}

impl State {
    /// Creates the state for a fresh visit; the caller starts the metadata
    /// fetch for [`State::id`].
    #[must_use]
    pub fn new(id: String) -> Self {
        Self {
            id,
            phase: Phase::Loading,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Handles a detail message and returns the effect for the parent.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::PhotoLoaded { id, result } => {
                if id != self.id {
                    // Completion for a previously shown photo.
                    return Effect::None;
                }
                match result {
                    Ok(photo) => {
                        let url = photo.urls.full.clone();
                        self.phase = Phase::Loaded { photo, image: None };
                        Effect::FetchImage { id, url }
                    }
                    Err(_) => {
                        self.phase = Phase::NotFound;
                        Effect::None
                    }
                }
            }
            Message::ImageLoaded { id, result } => {
                if id == self.id {
                    if let (Phase::Loaded { image, .. }, Ok(handle)) = (&mut self.phase, result) {
                        *image = Some(handle);
                    }
                    // A failed image download keeps the metadata visible.
                }
                Effect::None
            }
            Message::BackPressed => Effect::Close,
        }
    }
}
