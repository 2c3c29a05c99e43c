//! Staging state for the configuration form.

use egui::Color32;
use url::Url;

use crate::config::QrConfig;
use crate::error::DraftError;
use crate::logo::LogoImage;

/// The form's staging area: everything the user has typed or picked but not
/// yet submitted.
///
/// The draft outlives individual modal openings (the widget binds to it each
/// frame) but is cleared on every exit path (successful submit, cancel,
/// window close, completed export), which also drops any staged logo.
#[derive(Debug, Default)]
pub struct ConfigDraft {
    /// Raw URL field contents.
    pub url_input: String,
    /// Custom background color, `None` while the user left it unset.
    pub background: Option<Color32>,
    /// Custom foreground color, `None` while the user left it unset.
    pub foreground: Option<Color32>,
    /// Logo staged from the file picker.
    pub logo: Option<LogoImage>,
    /// Validation error shown inline under the URL field.
    pub error: Option<DraftError>,
}

impl ConfigDraft {
    /// Validate the staged fields and produce the next configuration.
    ///
    /// On success the draft is cleared (staged logo moves into the returned
    /// configuration). On failure the error is recorded for inline display
    /// and all staged fields are kept so the user can correct the URL.
    pub fn submit(&mut self) -> Result<QrConfig, DraftError> {
        let target = match self.validate_url() {
            Ok(target) => target,
            Err(err) => {
                self.error = Some(err.clone());
                return Err(err);
            }
        };

        log::info!("Accepted configuration for {target}");

        let config = QrConfig::new(
            target,
            self.background.take(),
            self.foreground.take(),
            self.logo.take(),
        );
        self.reset();
        Ok(config)
    }

    /// Clear every staged field, dropping any staged logo.
    pub fn reset(&mut self) {
        if self.logo.take().is_some() {
            log::debug!("Released staged logo");
        }
        self.url_input.clear();
        self.background = None;
        self.foreground = None;
        self.error = None;
    }

    /// Stage a logo picked by the user, replacing any previous one.
    pub fn stage_logo(&mut self, logo: LogoImage) {
        log::debug!("Staged logo {}x{}", logo.width, logo.height);
        self.logo = Some(logo);
    }

    fn validate_url(&self) -> Result<String, DraftError> {
        let input = self.url_input.trim();
        if input.is_empty() {
            return Err(DraftError::MissingUrl);
        }
        match Url::parse(input) {
            Ok(_) => Ok(input.to_owned()),
            Err(_) => Err(DraftError::InvalidUrl),
        }
    }
}
