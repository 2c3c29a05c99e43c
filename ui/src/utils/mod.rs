pub mod colors;
pub mod export;
pub mod file_picker;
pub mod qr_image;
