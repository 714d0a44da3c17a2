// SPDX-License-Identifier: MPL-2.0
//! Grid rendering for the gallery screen.

use super::{Card, Message, ScrollMetrics, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{Alignment, ContentFit, Element, Length};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Renders the photo grid inside a scrollable that reports its position.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Alignment::Center);

    if let Some(error) = ctx.state.error() {
        content = content.push(
            container(text(ctx.i18n.tr(error.i18n_key())).size(typography::BODY))
                .style(styles::container::error_banner)
                .padding(spacing::MD),
        );
    }

    content = content.push(grid(ctx.state.cards()));

    if ctx.state.is_loading() {
        content = content.push(text(ctx.i18n.tr("gallery-loading")).size(typography::CAPTION));
    } else if ctx.state.is_exhausted() && ctx.state.error().is_none() {
        content = content.push(text(ctx.i18n.tr("gallery-end-of-list")).size(typography::CAPTION));
    } else if ctx.state.cards().is_empty() && ctx.state.error().is_none() {
        content = content.push(text(ctx.i18n.tr("gallery-empty")).size(typography::CAPTION));
    }

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport| {
            Message::Scrolled(ScrollMetrics {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
                content_height: viewport.content_bounds().height,
            })
        })
        .into()
}

fn grid(cards: &[Card]) -> Element<'_, Message> {
    let mut rows = Column::new()
        .spacing(spacing::SM)
        .align_x(Alignment::Center);

    for chunk in cards.chunks(sizing::GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::SM);
        for card in chunk {
            row = row.push(card_view(card));
        }
        rows = rows.push(row);
    }

    rows.into()
}

fn card_view(card: &Card) -> Element<'_, Message> {
    let thumbnail: Element<'_, Message> = match &card.thumbnail {
        Some(handle) => Image::new(handle.clone())
            .width(sizing::THUMBNAIL_SIZE)
            .height(sizing::THUMBNAIL_SIZE)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(
            Space::new()
                .width(sizing::THUMBNAIL_SIZE)
                .height(sizing::THUMBNAIL_SIZE),
        )
            .style(styles::container::thumbnail_placeholder)
            .into(),
    };

    let caption = text(card.summary.user.name.as_str()).size(typography::CAPTION);

    button(
        Column::new()
            .push(thumbnail)
            .push(caption)
            .spacing(spacing::XS)
            .align_x(Alignment::Center),
    )
    .style(styles::button::card)
    .padding(spacing::XS)
    .on_press(Message::PhotoPressed(card.summary.id.clone()))
    .into()
}
