// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, with_opacity};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Bar surface used for the top navigation bar.
///
/// The color is derived from the active Iced `Theme` background with a
/// slight opacity, so the bar stays readable in both light and dark modes
/// without hard-coding colors.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        ..Default::default()
    }
}

/// Banner surface for user-visible error messages.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_opacity(
            palette::ERROR_500,
            opacity::OVERLAY_SUBTLE,
        ))),
        text_color: Some(palette::ERROR_500),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette::ERROR_500,
        },
        ..Default::default()
    }
}

/// Neutral placeholder surface shown while a thumbnail is downloading.
pub fn thumbnail_placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
