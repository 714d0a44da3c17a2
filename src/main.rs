// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        base_url: args.opt_value_from_str("--base-url").unwrap_or(None),
        access_key: args.opt_value_from_str("--access-key").unwrap_or(None),
    };

    app::run(flags)
}
