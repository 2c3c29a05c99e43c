//! Presentation mode toggle.

use egui::{Response, Ui};
use qrstudio_states::ThemeMode;

/// Button flipping between dark and light chrome.
///
/// Purely presentational: the QR configuration is not touched.
pub fn theme_toggle(mode: &mut ThemeMode, ui: &mut Ui) -> Response {
    let label = if mode.is_dark() {
        "☀ Light mode"
    } else {
        "🌙 Dark mode"
    };

    let response = ui.button(label);
    if response.clicked() {
        mode.toggle();
        log::debug!("Switched theme to {mode:?}");
    }
    response
}
