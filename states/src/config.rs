//! The active QR configuration.

use egui::Color32;

use crate::logo::LogoImage;

/// Target URL rendered before the user generates their first code.
pub const DEFAULT_TARGET: &str = "https://example.com/";

/// Everything that determines one rendered code: the encoded URL, the two
/// styling colors and an optional centered logo.
///
/// A configuration is only ever replaced wholesale (see
/// `ConfigDraft::submit`); there is no partial-field mutation, which keeps
/// half-updated styling states unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct QrConfig {
    /// The URL encoded in the QR matrix.
    pub target: String,
    /// Background color of the rendered code. Defaults to white.
    pub background: Color32,
    /// Foreground (module) color of the rendered code. Defaults to black.
    pub foreground: Color32,
    /// Optional logo overlaid at the center of the code.
    pub logo: Option<LogoImage>,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_owned(),
            background: Color32::WHITE,
            foreground: Color32::BLACK,
            logo: None,
        }
    }
}

impl QrConfig {
    /// Build a configuration from validated form values.
    ///
    /// Unset colors fall back to the white-on-black defaults; the staged
    /// logo moves into the new configuration.
    pub fn new(
        target: String,
        background: Option<Color32>,
        foreground: Option<Color32>,
        logo: Option<LogoImage>,
    ) -> Self {
        Self {
            target,
            background: background.unwrap_or(Color32::WHITE),
            foreground: foreground.unwrap_or(Color32::BLACK),
            logo,
        }
    }
}
