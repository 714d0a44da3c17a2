// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::detail;
use crate::ui::gallery;
use crate::ui::navbar;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Detail(detail::Message),
    Navbar(navbar::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional photo API base URL override.
    /// Takes precedence over `UNSPLASH_BASE_URL` and the config file.
    pub base_url: Option<String>,
    /// Optional API access key override.
    /// Takes precedence over `UNSPLASH_ACCESS_KEY` and the config file.
    pub access_key: Option<String>,
}
