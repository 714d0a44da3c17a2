// SPDX-License-Identifier: MPL-2.0
//! Rendering for the detail screen.

use super::{Message, Phase, State};
use crate::api::PhotoDetail;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use fluent_bundle::FluentArgs;
use iced::widget::image::{self, Image};
use iced::widget::{container, scrollable, text, Column};
use iced::{Alignment, ContentFit, Element, Length};

/// Contextual data needed to render the detail screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.state.phase() {
        Phase::Loading => centered_message(ctx.i18n.tr("detail-loading")),
        Phase::NotFound => centered_message(ctx.i18n.tr("detail-not-found")),
        Phase::Loaded { photo, image } => loaded(ctx.i18n, photo, image.as_ref()),
    }
}

fn centered_message<'a>(message: String) -> Element<'a, Message> {
    container(text(message).size(typography::TITLE))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn loaded<'a>(
    i18n: &'a I18n,
    photo: &'a PhotoDetail,
    handle: Option<&'a image::Handle>,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match handle {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(sizing::DETAIL_IMAGE_MAX_WIDTH))
            .content_fit(ContentFit::Contain)
            .into(),
        None => text(i18n.tr("detail-image-loading"))
            .size(typography::BODY)
            .into(),
    };

    let caption = match photo.caption() {
        Some(caption) => caption.to_string(),
        None => i18n.tr("detail-no-description"),
    };

    let mut author_args = FluentArgs::new();
    author_args.set("name", photo.user.name.as_str());
    let author_line = i18n.tr_args("detail-author", &author_args);

    let mut content = Column::new()
        .push(picture)
        .push(text(caption).size(typography::HEADLINE))
        .push(text(author_line).size(typography::BODY))
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    if let Some(created_at) = photo.created_at {
        let mut date_args = FluentArgs::new();
        date_args.set("date", created_at.format("%Y-%m-%d").to_string());
        content = content.push(
            text(i18n.tr_args("detail-published", &date_args)).size(typography::CAPTION),
        );
    }

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
