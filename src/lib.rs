// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an infinite-scrolling photo stream browser built with
//! the Iced GUI framework.
//!
//! It renders a paginated grid of photos from an Unsplash-compatible API
//! and a detail view for a single photo, and demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
