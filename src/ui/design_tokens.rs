// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens (colors, spacing, sizing).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const SURFACE: f32 = 0.95;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_STRONG: f32 = 0.7;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Height of the top navigation bar.
    pub const NAVBAR_HEIGHT: f32 = 48.0;

    /// Edge length of a square grid thumbnail.
    pub const THUMBNAIL_SIZE: f32 = 200.0;

    /// Number of thumbnail columns in the gallery grid.
    pub const GRID_COLUMNS: usize = 3;

    /// Maximum rendered width of the detail view image.
    pub const DETAIL_IMAGE_MAX_WIDTH: f32 = 900.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const BODY: f32 = 16.0;
    pub const CAPTION: f32 = 13.0;
    pub const TITLE: f32 = 22.0;
    pub const HEADLINE: f32 = 28.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

/// Returns a color with the given alpha applied.
#[must_use]
pub fn with_opacity(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}
