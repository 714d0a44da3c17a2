// SPDX-License-Identifier: MPL-2.0
//! Gallery screen state and pagination loop.
//!
//! The gallery accumulates pages of photo summaries and requests the next
//! page when the scroll position nears the bottom of the grid. The
//! pagination contract:
//!
//! - at most one page fetch in flight at a time;
//! - the page counter advances only after a non-empty successful response;
//! - an empty page marks the listing exhausted;
//! - an authorization failure stops pagination permanently;
//! - any other failure is shown but does not stop pagination.
//!
//! Every in-flight fetch carries the state's generation counter. Responses
//! from a previous generation (e.g. after navigating to the detail screen
//! and back) are discarded instead of being appended into a view that no
//! longer expects them.

mod view;

pub use view::{view, ViewContext};

use crate::api::PhotoSummary;
use crate::error::ApiError;
use iced::widget::image;

/// Scroll distance from the bottom (in pixels) that triggers the next fetch.
const BOTTOM_THRESHOLD: f32 = 1.0;

/// One rendered grid cell: the photo summary plus its downloaded thumbnail.
#[derive(Debug, Clone)]
pub struct Card {
    pub summary: PhotoSummary,
    pub thumbnail: Option<image::Handle>,
}

/// Raw scroll geometry reported by the scrollable widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset_y: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

/// A thumbnail download the orchestrator should start.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailRequest {
    pub id: String,
    pub url: String,
}

/// Messages for the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// The grid was scrolled.
    Scrolled(ScrollMetrics),
    /// A thumbnail card was clicked.
    PhotoPressed(String),
    /// A page fetch completed.
    PageLoaded {
        generation: u64,
        result: Result<Vec<PhotoSummary>, ApiError>,
    },
    /// A thumbnail download completed.
    ThumbnailLoaded {
        generation: u64,
        id: String,
        result: Result<image::Handle, ApiError>,
    },
}

/// Effects propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Fetch the given listing page, tagged with the current generation.
    FetchPage { generation: u64, page: u32 },
    /// Download thumbnails for freshly appended cards.
    FetchThumbnails {
        generation: u64,
        requests: Vec<ThumbnailRequest>,
    },
    /// Open the detail screen for a photo.
    OpenPhoto(String),
}

/// Gallery state: accumulated cards plus the pagination cursor.
#[derive(Debug)]
pub struct State {
    cards: Vec<Card>,
    /// Next page to request, 1-based. Advances only on non-empty success.
    next_page: u32,
    loading: bool,
    exhausted: bool,
    error: Option<ApiError>,
    generation: u64,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            next_page: 1,
            loading: false,
            exhausted: false,
            error: None,
            generation: 0,
        }
    }

    /// Requests the next page unless a fetch is in flight, the listing is
    /// exhausted, or a terminal error occurred. Clears any transient error
    /// so the banner disappears while retrying.
    pub fn request_next_page(&mut self) -> Effect {
        if self.loading || self.exhausted {
            return Effect::None;
        }
        if matches!(&self.error, Some(err) if err.is_terminal()) {
            return Effect::None;
        }

        self.loading = true;
        self.error = None;
        Effect::FetchPage {
            generation: self.generation,
            page: self.next_page,
        }
    }

    /// Puts the gallery into an error state without a fetch having run.
    /// Used at startup when no API credential is configured.
    pub fn fail(&mut self, error: ApiError) {
        if error.is_terminal() {
            self.exhausted = true;
        }
        self.loading = false;
        self.error = Some(error);
    }

    /// Invalidates all in-flight fetches. Completions tagged with an older
    /// generation are discarded by [`State::handle`].
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    /// Discards accumulated photos and rewinds the pagination cursor, as a
    /// full reload of the view would. The generation keeps growing so that
    /// responses from before the reset can never be appended.
    pub fn reset(&mut self) {
        self.invalidate();
        self.cards.clear();
        self.next_page = 1;
        self.exhausted = false;
        self.error = None;
    }

    /// Handles a gallery message and returns the effect for the parent.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Scrolled(metrics) => {
                if near_bottom(metrics) {
                    self.request_next_page()
                } else {
                    Effect::None
                }
            }
            Message::PhotoPressed(id) => Effect::OpenPhoto(id),
            Message::PageLoaded { generation, result } => {
                if generation != self.generation {
                    // Late completion from before an invalidation.
                    return Effect::None;
                }
                self.loading = false;
                match result {
                    Ok(batch) if batch.is_empty() => {
                        self.exhausted = true;
                        Effect::None
                    }
                    Ok(batch) => {
                        self.next_page += 1;
                        let requests = batch
                            .iter()
                            .map(|photo| ThumbnailRequest {
                                id: photo.id.clone(),
                                url: photo.urls.thumb.clone(),
                            })
                            .collect();
                        self.cards.extend(batch.into_iter().map(|summary| Card {
                            summary,
                            thumbnail: None,
                        }));
                        Effect::FetchThumbnails {
                            generation: self.generation,
                            requests,
                        }
                    }
                    Err(error) => {
                        if error.is_terminal() {
                            self.exhausted = true;
                        }
                        self.error = Some(error);
                        Effect::None
                    }
                }
            }
            Message::ThumbnailLoaded {
                generation,
                id,
                result,
            } => {
                if generation == self.generation {
                    if let Ok(handle) = result {
                        if let Some(card) =
                            self.cards.iter_mut().find(|card| card.summary.id == id)
                        {
                            card.thumbnail = Some(handle);
                        }
                    }
                    // A failed thumbnail keeps its placeholder; the grid
                    // itself is not an error condition.
                }
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Whether the viewport bottom is within [`BOTTOM_THRESHOLD`] pixels of the
/// end of the content.
fn near_bottom(metrics: ScrollMetrics) -> bool {
    metrics.offset_y + metrics.viewport_height >= metrics.content_height - BOTTOM_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Author, PhotoUrls};

    fn photo(id: &str) -> PhotoSummary {
        PhotoSummary {
            id: id.to_string(),
            alt_description: Some(format!("photo {id}")),
            urls: PhotoUrls {
                thumb: format!("https://images.example.com/thumb/{id}"),
                full: format!("https://images.example.com/full/{id}"),
            },
            user: Author {
                name: "Jane Doe".to_string(),
            },
        }
    }

    fn page_of(ids: &[&str]) -> Vec<PhotoSummary> {
        ids.iter().map(|id| photo(id)).collect()
    }

    fn bottom_scroll() -> Message {
        Message::Scrolled(ScrollMetrics {
            offset_y: 900.0,
            viewport_height: 600.0,
            content_height: 1500.0,
        })
    }

    fn deliver_page(state: &mut State, result: Result<Vec<PhotoSummary>, ApiError>) -> Effect {
        let generation = state.generation();
        state.handle(Message::PageLoaded { generation, result })
    }

    #[test]
    fn initial_request_fetches_page_one() {
        let mut state = State::new();
        match state.request_next_page() {
            Effect::FetchPage { page, .. } => assert_eq!(page, 1),
            other => panic!("expected FetchPage, got {other:?}"),
        }
        assert!(state.is_loading());
    }

    #[test]
    fn scroll_far_from_bottom_does_not_fetch() {
        let mut state = State::new();
        let effect = state.handle(Message::Scrolled(ScrollMetrics {
            offset_y: 0.0,
            viewport_height: 600.0,
            content_height: 1500.0,
        }));
        assert!(matches!(effect, Effect::None));
        assert!(!state.is_loading());
    }

    #[test]
    fn scroll_within_one_pixel_of_bottom_fetches() {
        assert!(near_bottom(ScrollMetrics {
            offset_y: 899.0,
            viewport_height: 600.0,
            content_height: 1500.0,
        }));
        assert!(!near_bottom(ScrollMetrics {
            offset_y: 897.0,
            viewport_height: 600.0,
            content_height: 1500.0,
        }));
    }

    #[test]
    fn fetch_in_flight_suppresses_scroll_trigger() {
        let mut state = State::new();
        state.request_next_page();
        let effect = state.handle(bottom_scroll());
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn non_empty_page_appends_and_advances_counter() {
        let mut state = State::new();
        state.request_next_page();

        let effect = deliver_page(&mut state, Ok(page_of(&["a", "b", "c"])));

        assert_eq!(state.cards().len(), 3);
        assert_eq!(state.next_page(), 2);
        assert!(!state.is_loading());
        match effect {
            Effect::FetchThumbnails { requests, .. } => {
                assert_eq!(requests.len(), 3);
                assert_eq!(requests[0].id, "a");
                assert_eq!(requests[0].url, "https://images.example.com/thumb/a");
            }
            other => panic!("expected FetchThumbnails, got {other:?}"),
        }
    }

    #[test]
    fn pages_concatenate_in_fetch_order() {
        let mut state = State::new();
        state.request_next_page();
        deliver_page(&mut state, Ok(page_of(&["a", "b"])));
        state.handle(bottom_scroll());
        deliver_page(&mut state, Ok(page_of(&["c", "d"])));

        let ids: Vec<&str> = state
            .cards()
            .iter()
            .map(|card| card.summary.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        assert_eq!(state.next_page(), 3);
    }

    #[test]
    fn empty_page_marks_exhausted_and_stops_fetching() {
        let mut state = State::new();
        state.request_next_page();
        deliver_page(&mut state, Ok(vec![]));

        assert!(state.is_exhausted());
        assert_eq!(state.next_page(), 1);

        // Subsequent scrolls never fetch again.
        let effect = state.handle(bottom_scroll());
        assert!(matches!(effect, Effect::None));
        assert!(!state.is_loading());
    }

    #[test]
    fn access_denied_is_terminal_and_list_stays_empty() {
        let mut state = State::new();
        state.request_next_page();
        deliver_page(&mut state, Err(ApiError::AccessDenied));

        assert!(state.cards().is_empty());
        assert_eq!(state.error(), Some(&ApiError::AccessDenied));

        let effect = state.handle(bottom_scroll());
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn transient_error_allows_retry_on_next_scroll() {
        let mut state = State::new();
        state.request_next_page();
        deliver_page(&mut state, Err(ApiError::Transport("reset".into())));

        assert!(state.error().is_some());

        match state.handle(bottom_scroll()) {
            Effect::FetchPage { page, .. } => assert_eq!(page, 1),
            other => panic!("expected retry FetchPage, got {other:?}"),
        }
        // The banner clears while the retry is in flight.
        assert!(state.error().is_none());
    }

    #[test]
    fn stale_page_completion_is_discarded() {
        let mut state = State::new();
        state.request_next_page();
        let stale_generation = state.generation();
        state.invalidate();

        let effect = state.handle(Message::PageLoaded {
            generation: stale_generation,
            result: Ok(page_of(&["ghost"])),
        });

        assert!(matches!(effect, Effect::None));
        assert!(state.cards().is_empty());
        assert_eq!(state.next_page(), 1);
    }

    #[test]
    fn thumbnail_attaches_to_matching_card() {
        let mut state = State::new();
        state.request_next_page();
        deliver_page(&mut state, Ok(page_of(&["a", "b"])));

        let generation = state.generation();
        state.handle(Message::ThumbnailLoaded {
            generation,
            id: "b".to_string(),
            result: Ok(image::Handle::from_bytes(vec![0u8; 4])),
        });

        assert!(state.cards()[0].thumbnail.is_none());
        assert!(state.cards()[1].thumbnail.is_some());
    }

    #[test]
    fn stale_thumbnail_completion_is_discarded() {
        let mut state = State::new();
        state.request_next_page();
        deliver_page(&mut state, Ok(page_of(&["a"])));

        let stale_generation = state.generation();
        state.invalidate();
        state.handle(Message::ThumbnailLoaded {
            generation: stale_generation,
            id: "a".to_string(),
            result: Ok(image::Handle::from_bytes(vec![0u8; 4])),
        });

        assert!(state.cards()[0].thumbnail.is_none());
    }

    #[test]
    fn failed_thumbnail_keeps_placeholder() {
        let mut state = State::new();
        state.request_next_page();
        deliver_page(&mut state, Ok(page_of(&["a"])));

        let generation = state.generation();
        state.handle(Message::ThumbnailLoaded {
            generation,
            id: "a".to_string(),
            result: Err(ApiError::Transport("reset".into())),
        });

        assert!(state.cards()[0].thumbnail.is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn reset_discards_cards_and_outlives_stale_responses() {
        let mut state = State::new();
        state.request_next_page();
        let stale_generation = state.generation();
        deliver_page(&mut state, Ok(page_of(&["a", "b"])));

        state.reset();
        assert!(state.cards().is_empty());
        assert_eq!(state.next_page(), 1);

        // A late response from before the reset is discarded even though a
        // fresh fetch has not started yet.
        let effect = state.handle(Message::PageLoaded {
            generation: stale_generation,
            result: Ok(page_of(&["ghost"])),
        });
        assert!(matches!(effect, Effect::None));
        assert!(state.cards().is_empty());

        // And the next request uses the post-reset generation.
        match state.request_next_page() {
            Effect::FetchPage { generation, page } => {
                assert_eq!(page, 1);
                assert!(generation > stale_generation);
            }
            other => panic!("expected FetchPage, got {other:?}"),
        }
    }

    #[test]
    fn missing_credential_failure_is_terminal() {
        let mut state = State::new();
        state.fail(ApiError::MissingCredential);

        assert!(state.is_exhausted());
        let effect = state.handle(bottom_scroll());
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn photo_press_opens_detail() {
        let mut state = State::new();
        match state.handle(Message::PhotoPressed("abc".to_string())) {
            Effect::OpenPhoto(id) => assert_eq!(id, "abc"),
            other => panic!("expected OpenPhoto, got {other:?}"),
        }
    }
}
