// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::detail;
use crate::ui::gallery;
use crate::ui::navbar;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub gallery: &'a gallery::State,
    pub detail: Option<&'a detail::State>,
}

/// Renders the navbar plus the currently active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        can_go_back: ctx.screen == Screen::Detail,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Gallery => gallery::view(gallery::ViewContext {
            i18n: ctx.i18n,
            state: ctx.gallery,
        })
        .map(Message::Gallery),
        Screen::Detail => view_detail(ctx.detail, ctx.i18n),
    };

    Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_detail<'a>(state: Option<&'a detail::State>, i18n: &'a I18n) -> Element<'a, Message> {
    if let Some(state) = state {
        detail::view(detail::ViewContext { i18n, state }).map(Message::Detail)
    } else {
        // Fallback if detail state is missing
        Container::new(Text::new(i18n.tr("detail-not-found")))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
