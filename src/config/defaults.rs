// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

use crate::ui::theming::ThemeMode;

// ==========================================================================
// API Defaults
// ==========================================================================

/// Public Unsplash API endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Photos requested per listing page.
pub const DEFAULT_PER_PAGE: u32 = 10;

// ==========================================================================
// Theme Defaults
// ==========================================================================

pub(crate) fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}
