// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::footer;
use crate::ui::navbar;
use crate::ui::sections;
use iced::widget::scrollable;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Footer(footer::Message),
    Page(sections::Message),
    /// The page scrollable moved; drives the navbar hide-on-scroll rule.
    PageScrolled(scrollable::Viewport),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (`ar`, `en`, or `tr`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `RATE_BOARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
