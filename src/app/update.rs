// SPDX-License-Identifier: MPL-2.0
//! Update logic and effect handling for the application.
//!
//! Component states return [`Effect`](crate::ui::gallery::Effect) values;
//! this module turns them into `iced::Task` side effects. Page fetches are
//! serialized by the gallery state itself (it refuses to start a fetch
//! while one is in flight); thumbnail and full-image downloads run
//! independently, like a browser loading `<img>` sources.

use super::{App, Message, Screen};
use crate::ui::detail;
use crate::ui::gallery;
use crate::ui::navbar;
use iced::widget::image;
use iced::Task;

/// Handles a top-level message by delegating to the owning component and
/// running the resulting effect.
pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(msg) => {
            let effect = app.gallery.handle(msg);
            gallery_effect(app, effect)
        }
        Message::Detail(msg) => match app.detail.as_mut() {
            Some(state) => {
                let effect = state.handle(msg);
                detail_effect(app, effect)
            }
            // Late completion after the screen was closed.
            None => Task::none(),
        },
        Message::Navbar(navbar::Message::Back) => close_detail(app),
    }
}

/// Runs a gallery effect. Also used by `App::new` for the initial fetch.
pub(super) fn gallery_effect(app: &mut App, effect: gallery::Effect) -> Task<Message> {
    match effect {
        gallery::Effect::None => Task::none(),
        gallery::Effect::FetchPage { generation, page } => {
            let Some(api) = app.api.clone() else {
                return Task::none();
            };
            Task::perform(
                async move { api.list_photos(page).await },
                move |result| Message::Gallery(gallery::Message::PageLoaded { generation, result }),
            )
        }
        gallery::Effect::FetchThumbnails {
            generation,
            requests,
        } => {
            let Some(api) = app.api.clone() else {
                return Task::none();
            };
            Task::batch(requests.into_iter().map(|request| {
                let api = api.clone();
                let url = request.url;
                let id = request.id;
                Task::perform(
                    async move {
                        api.fetch_image(&url)
                            .await
                            .map(|bytes| image::Handle::from_bytes(bytes))
                    },
                    move |result| {
                        Message::Gallery(gallery::Message::ThumbnailLoaded {
                            generation,
                            id: id.clone(),
                            result,
                        })
                    },
                )
            }))
        }
        gallery::Effect::OpenPhoto(id) => open_detail(app, id),
    }
}

fn detail_effect(app: &mut App, effect: detail::Effect) -> Task<Message> {
    match effect {
        detail::Effect::None => Task::none(),
        detail::Effect::FetchImage { id, url } => {
            let Some(api) = app.api.clone() else {
                return Task::none();
            };
            Task::perform(
                async move {
                    api.fetch_image(&url)
                        .await
                        .map(|bytes| image::Handle::from_bytes(bytes))
                },
                move |result| {
                    Message::Detail(detail::Message::ImageLoaded {
                        id: id.clone(),
                        result,
                    })
                },
            )
        }
        detail::Effect::Close => close_detail(app),
    }
}

/// Opens the detail screen for a photo and starts its metadata fetch.
///
/// Grid state is discarded on the way out, like the original full-page
/// navigation did; the reset also guarantees any in-flight page fetch is
/// dropped when it completes.
fn open_detail(app: &mut App, id: String) -> Task<Message> {
    app.gallery.reset();
    app.detail = Some(detail::State::new(id.clone()));
    app.screen = Screen::Detail;

    let Some(api) = app.api.clone() else {
        return Task::none();
    };
    let fetch_id = id.clone();
    Task::perform(
        async move { api.get_photo(&fetch_id).await },
        move |result| {
            Message::Detail(detail::Message::PhotoLoaded {
                id: id.clone(),
                result,
            })
        },
    )
}

/// Returns to the gallery and reloads it from the first page.
fn close_detail(app: &mut App) -> Task<Message> {
    app.detail = None;
    app.screen = Screen::Gallery;
    let effect = app.gallery.request_next_page();
    gallery_effect(app, effect)
}
