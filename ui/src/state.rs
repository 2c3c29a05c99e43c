//! The application state: one active configuration plus UI bookkeeping.

use std::path::{Path, PathBuf};

use egui::{Context, TextureHandle, TextureOptions};
use qrstudio_states::{ConfigDraft, LogoImage, QrConfig, ThemeMode};

use crate::utils::export;

/// Exclusively-owned state of the single app instance.
///
/// The active `QrConfig` is only replaced wholesale via [`State::replace_config`],
/// which also drops the cached QR texture so the surface re-renders on the
/// next frame. The draft and its staged logo are cleared on every form exit
/// path (submit, cancel, close, completed export).
pub struct State {
    config: QrConfig,
    /// Staged form fields, bound by the configuration modal.
    pub draft: ConfigDraft,
    /// Whether the configuration modal is currently presented.
    pub modal_open: bool,
    /// Presentation mode of the app chrome.
    pub theme: ThemeMode,
    /// Where the last successful export landed, for on-screen feedback.
    pub last_export: Option<PathBuf>,
    qr_texture: Option<TextureHandle>,
    logo_preview: Option<TextureHandle>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            config: QrConfig::default(),
            draft: ConfigDraft::default(),
            modal_open: false,
            theme: ThemeMode::Dark,
            last_export: None,
            qr_texture: None,
            logo_preview: None,
        }
    }
}

impl State {
    /// The active configuration.
    pub fn config(&self) -> &QrConfig {
        &self.config
    }

    /// Atomically swap in a new configuration and invalidate the cached
    /// QR texture.
    pub fn replace_config(&mut self, config: QrConfig) {
        self.config = config;
        self.qr_texture = None;
    }

    pub fn qr_texture(&self) -> Option<&TextureHandle> {
        self.qr_texture.as_ref()
    }

    pub fn set_qr_texture(&mut self, texture: TextureHandle) {
        self.qr_texture = Some(texture);
    }

    /// Preview texture of the logo currently staged on the draft.
    pub fn logo_preview(&self) -> Option<&TextureHandle> {
        self.logo_preview.as_ref()
    }

    /// Stage a picked logo on the draft and cache its preview texture.
    pub fn stage_logo(&mut self, ctx: &Context, logo: LogoImage) {
        let preview = ctx.load_texture("logo_preview", logo.to_color_image(), TextureOptions::LINEAR);
        self.logo_preview = Some(preview);
        self.draft.stage_logo(logo);
    }

    /// Drop the staged logo and its preview texture.
    pub fn clear_staged_logo(&mut self) {
        self.draft.logo = None;
        self.logo_preview = None;
    }

    /// Present the configuration modal.
    pub fn open_form(&mut self) {
        self.modal_open = true;
    }

    /// Dismiss the modal, discarding the draft and releasing any staged logo.
    ///
    /// The active configuration is left untouched.
    pub fn close_form(&mut self) {
        self.draft.reset();
        self.logo_preview = None;
        self.modal_open = false;
    }

    /// Try to turn the draft into the next active configuration.
    ///
    /// On success the configuration is replaced, the draft is cleared and
    /// the modal closes. On a validation error the modal stays open with the
    /// error shown inline and the active configuration is untouched.
    pub fn submit_draft(&mut self) -> bool {
        match self.draft.submit() {
            Ok(config) => {
                self.replace_config(config);
                self.logo_preview = None;
                self.modal_open = false;
                true
            }
            Err(err) => {
                log::debug!("Rejected submission: {err}");
                false
            }
        }
    }

    /// Export the active configuration as `qrcode.png` inside `dir`.
    ///
    /// A completed export also resets the form session: draft cleared,
    /// staged logo released, modal closed. Failures are logged and leave all
    /// state untouched.
    pub fn export_current(&mut self, dir: &Path) -> Option<PathBuf> {
        match export::export_qr(&self.config, export::EXPORT_SIZE, dir) {
            Ok(path) => {
                log::info!("Exported QR code to {}", path.display());
                self.close_form();
                self.last_export = Some(path.clone());
                Some(path)
            }
            Err(err) => {
                log::warn!("Export failed: {err}");
                None
            }
        }
    }
}
