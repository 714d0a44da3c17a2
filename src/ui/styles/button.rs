// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use iced::widget::button;
use iced::{Background, Border, Color, Theme};

use crate::ui::design_tokens::radius;

/// Invisible button wrapping a grid card; hover adds a subtle highlight.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette.background.weak.color))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Plain text-like button used for navigation (e.g. "Back").
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        button::Status::Disabled => Color {
            a: 0.4,
            ..palette.background.base.text
        },
        button::Status::Active => palette.primary.base.color,
    };

    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}
