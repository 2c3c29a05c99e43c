//! Domain state for QR Studio.
//!
//! This crate holds everything the UI binds to that is not rendering:
//! the active QR configuration, the staged form draft with its validation,
//! the decoded logo image, and the presentation theme. It owns no GUI loop
//! and performs no I/O.

mod config;
mod draft;
mod error;
mod logo;
mod mode;

pub use config::{DEFAULT_TARGET, QrConfig};
pub use draft::ConfigDraft;
pub use error::DraftError;
pub use logo::LogoImage;
pub use mode::ThemeMode;
