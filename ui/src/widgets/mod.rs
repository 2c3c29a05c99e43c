mod config_modal;
mod qr_surface;
mod theme_toggle;

pub use config_modal::show_config_modal;
pub use qr_surface::qr_surface;
pub use theme_toggle::theme_toggle;
