// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above both screens.
//!
//! The bar carries the application title and, on the detail screen, a back
//! button that returns to the gallery.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Row};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether the back button is shown (detail screen only).
    pub can_go_back: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(Alignment::Center)
        .width(Length::Fill);

    if ctx.can_go_back {
        row = row.push(
            button(text(ctx.i18n.tr("navbar-back")).size(typography::BODY))
                .style(styles::button::link)
                .on_press(Message::Back),
        );
    }

    row = row.push(text(ctx.i18n.tr("app-title")).size(typography::TITLE));

    container(row)
        .style(styles::container::navbar)
        .padding([spacing::SM, spacing::MD])
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .into()
}
