// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Infinite-scrolling photo grid with pagination
//! - [`detail`] - Full-size view of a single photo
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Top bar with title and back navigation
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod detail;
pub mod gallery;
pub mod navbar;
pub mod styles;
pub mod theming;
