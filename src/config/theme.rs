//! `[theme]` section configuration.
//!
//! Brand colors for the generated page. The primary color seeds the
//! whole palette (ten shades emitted as CSS custom properties); the
//! accent is derived from it when not given explicitly.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[theme]` section in folio.toml.
///
/// # Example
/// ```toml
/// [theme]
/// primary_color = "#2b689c"
/// accent_color = "#9c2b68"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Main brand color (hex). Shade 6 of the generated palette.
    #[serde(default = "defaults::theme::primary_color")]
    #[educe(Default = defaults::theme::primary_color())]
    pub primary_color: String,

    /// Optional accent color (hex). Derived from the primary if absent.
    #[serde(default = "defaults::theme::accent_color")]
    #[educe(Default = defaults::theme::accent_color())]
    pub accent_color: Option<String>,
}
