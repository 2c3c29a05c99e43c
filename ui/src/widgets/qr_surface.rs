//! The rendering surface for the active configuration.

use egui::{Color32, Response, TextureOptions, Ui};

use crate::state::State;
use crate::utils::qr_image::{RENDER_SIZE, render_qr};

/// Renders the active configuration as a QR code.
///
/// The raster is cached as a texture; `State::replace_config` drops the
/// cache, so the surface re-renders exactly when the configuration changes.
pub fn qr_surface(state: &mut State, ui: &mut Ui) -> Response {
    if state.qr_texture().is_none()
        && let Some(qr_image) = render_qr(state.config(), RENDER_SIZE)
    {
        state.set_qr_texture(ui.ctx().load_texture(
            "qr_surface",
            qr_image,
            TextureOptions::NEAREST,
        ));
    }

    egui::Frame::NONE
        .fill(state.config().background)
        .inner_margin(egui::Margin::same(8))
        .corner_radius(4.0)
        .show(ui, |ui| {
            if let Some(texture) = state.qr_texture() {
                ui.image(texture);
            } else {
                // Valid URLs can still exceed the QR capacity.
                ui.colored_label(Color32::GRAY, "This URL is too long to encode");
            }
        })
        .response
}

#[cfg(test)]
mod qr_surface_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use crate::state::State;
    use qrstudio_states::QrConfig;

    #[test]
    fn test_surface_caches_texture() {
        let mut harness = Harness::new_ui_state(
            |ui, state| {
                super::qr_surface(state, ui);
            },
            State::default(),
        );

        harness.step();
        assert!(harness.state().qr_texture().is_some());
    }

    #[test]
    fn test_replacing_config_rebuilds_texture() {
        let mut harness = Harness::new_ui_state(
            |ui, state| {
                super::qr_surface(state, ui);
            },
            State::default(),
        );

        harness.step();
        let first = harness.state().qr_texture().map(|t| t.id());

        harness.state_mut().replace_config(QrConfig {
            target: "https://docs.rs/".to_owned(),
            ..QrConfig::default()
        });
        harness.step();
        let second = harness.state().qr_texture().map(|t| t.id());

        assert!(second.is_some());
        assert_ne!(first, second);
    }

    #[test]
    fn test_unencodable_target_shows_fallback_label() {
        let mut state = State::default();
        state.replace_config(QrConfig {
            target: "a".repeat(4000),
            ..QrConfig::default()
        });

        let mut harness = Harness::new_ui_state(
            |ui, state| {
                super::qr_surface(state, ui);
            },
            state,
        );

        harness.step();
        assert!(harness.query_by_label_contains("too long").is_some());
        assert!(harness.state().qr_texture().is_none());
    }
}
