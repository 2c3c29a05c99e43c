use std::path::Path;

use egui::{Align, Layout, RichText, Visuals};

use crate::state::State;
use crate::utils::colors::COLOR_GREEN;
use crate::utils::file_picker::{LogoPickerHandler, SystemLogoPicker};
use crate::widgets;

/// The QR Studio application.
pub struct QrStudioApp {
    pub state: State,
    logo_picker: Box<dyn LogoPickerHandler>,
}

impl Default for QrStudioApp {
    fn default() -> Self {
        Self::new(State::default())
    }
}

impl QrStudioApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            logo_picker: Box::new(SystemLogoPicker),
        }
    }

    /// Build the app with a custom logo picker (used by tests).
    pub fn with_picker(state: State, logo_picker: Box<dyn LogoPickerHandler>) -> Self {
        Self { state, logo_picker }
    }
}

impl eframe::App for QrStudioApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.state.theme.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.label(concat!("v", env!("CARGO_PKG_VERSION")));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    widgets::theme_toggle(&mut self.state.theme, ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading("QR Studio");
                ui.label("Scannable codes for your links.");
                ui.add_space(12.0);

                widgets::qr_surface(&mut self.state, ui);

                ui.add_space(4.0);
                ui.label(
                    RichText::new(&self.state.config().target)
                        .monospace()
                        .small(),
                );
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() / 2.0 - 100.0).max(0.0));

                    if ui.button("Customize").clicked() {
                        self.state.open_form();
                    }

                    if ui.button("Download PNG").clicked() {
                        self.state.export_current(Path::new("."));
                    }
                });

                if let Some(path) = &self.state.last_export {
                    ui.add_space(8.0);
                    ui.colored_label(COLOR_GREEN, format!("Saved {}", path.display()));
                }
            });

            widgets::show_config_modal(&mut self.state, self.logo_picker.as_ref(), ui);

            powered_by_egui_and_eframe(ui);
        });
    }
}

fn powered_by_egui_and_eframe(ui: &mut egui::Ui) {
    ui.with_layout(Layout::bottom_up(Align::LEFT), |ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label("Powered by ");
            ui.hyperlink_to("egui", "https://github.com/emilk/egui");
            ui.label(" and ");
            ui.hyperlink_to(
                "eframe",
                "https://github.com/emilk/egui/tree/master/crates/eframe",
            );
            ui.label(".");
        });
    });
}
