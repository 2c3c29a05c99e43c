//! The configuration form modal.
//!
//! Collects the target URL, the two optional styling colors and an optional
//! logo. A valid submission replaces the active configuration wholesale and
//! closes the modal; an invalid URL keeps the modal open with the error
//! shown inline and leaves the active configuration untouched. Cancel and
//! window close both discard the draft, releasing any staged logo.

use egui::{Color32, Ui, Window};

use crate::state::State;
use crate::utils::colors::COLOR_RED;
use crate::utils::file_picker::LogoPickerHandler;

/// Shows the configuration modal while `state.modal_open` is set.
pub fn show_config_modal(state: &mut State, picker: &dyn LogoPickerHandler, ui: &mut Ui) {
    if !state.modal_open {
        return;
    }

    let mut open = true;
    let mut should_submit = false;

    Window::new("Customize QR Code")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                ui.label("URL:");
                let url_response = ui.text_edit_singleline(&mut state.draft.url_input);

                // Check for Enter key press
                if url_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    should_submit = true;
                }
            });

            if let Some(error) = &state.draft.error {
                ui.colored_label(COLOR_RED, error.to_string());
            }

            ui.add_space(8.0);

            color_row(ui, "Background color", &mut state.draft.background, Color32::WHITE);
            color_row(ui, "Foreground color", &mut state.draft.foreground, Color32::BLACK);

            ui.add_space(8.0);

            logo_row(state, picker, ui);

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button("Generate").clicked() {
                    should_submit = true;
                }

                if ui.button("Cancel").clicked() {
                    state.close_form();
                }
            });
        });

    if should_submit {
        state.submit_draft();
    }

    if !open {
        state.close_form();
    }
}

/// Checkbox-gated color picker: unchecked means "use the default".
fn color_row(ui: &mut Ui, label: &str, slot: &mut Option<Color32>, default: Color32) {
    ui.horizontal(|ui| {
        let mut custom = slot.is_some();
        ui.checkbox(&mut custom, label);
        if custom {
            let mut color = slot.unwrap_or(default);
            ui.color_edit_button_srgba(&mut color);
            *slot = Some(color);
        } else {
            *slot = None;
        }
    });
}

/// Picker button, staged-logo preview and clear button.
fn logo_row(state: &mut State, picker: &dyn LogoPickerHandler, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label("Logo:");

        if ui.button("Choose…").clicked()
            && let Some(logo) = picker.pick_logo()
        {
            let ctx = ui.ctx().clone();
            state.stage_logo(&ctx, logo);
        }

        if state.draft.logo.is_some() && ui.button("Clear").clicked() {
            state.clear_staged_logo();
        }
    });

    let dimensions = state.draft.logo.as_ref().map(|l| (l.width, l.height));
    if let Some((width, height)) = dimensions {
        ui.horizontal(|ui| {
            if let Some(texture) = state.logo_preview() {
                // Thumbnail, constrained to a 48px box with the aspect kept.
                let aspect = width as f32 / height as f32;
                let (thumb_w, thumb_h) = if aspect > 1.0 {
                    (48.0, 48.0 / aspect)
                } else {
                    (48.0 * aspect, 48.0)
                };
                ui.image(egui::load::SizedTexture::new(texture.id(), [thumb_w, thumb_h]));
            }
            ui.label(format!("{width}×{height}"));
        });
    }
}
