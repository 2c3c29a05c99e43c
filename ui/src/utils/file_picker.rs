//! Logo picker backed by the native file dialog.
//!
//! # Platform Support
//!
//! - **Native (Windows, macOS, Linux)**: Full support via `rfd` crate using native dialogs.
//! - **Web (WASM)**: Not supported (stub implementation).

use qrstudio_states::LogoImage;

/// Trait for picking a logo image, enabling mock implementations for testing
/// without relying on system dialogs.
pub trait LogoPickerHandler {
    /// Open the picker and return the decoded logo, if the user selected a
    /// readable image file.
    fn pick_logo(&self) -> Option<LogoImage>;
}

/// Default picker using the system file dialog.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
pub struct SystemLogoPicker;

#[cfg(not(target_arch = "wasm32"))]
impl LogoPickerHandler for SystemLogoPicker {
    fn pick_logo(&self) -> Option<LogoImage> {
        let file_path = rfd::FileDialog::new()
            .add_filter(
                "Image",
                &[
                    "png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "tiff", "tif",
                ],
            )
            .set_title("Select a logo image")
            .pick_file()?;

        log::info!("User selected file: {:?}", file_path);

        load_logo_from_path(&file_path)
    }
}

/// Loads and decodes a logo image from a file path.
///
/// Returns `None` (with a warn log) if the file cannot be read or decoded.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_logo_from_path(path: &std::path::Path) -> Option<LogoImage> {
    use image::GenericImageView;

    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            log::warn!("Failed to read file {:?}: {e}", path);
            return None;
        }
    };

    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => {
            log::warn!("Failed to decode image from file {:?}: {e}", path);
            return None;
        }
    };

    let (width, height) = img.dimensions();
    let rgba = img.to_rgba8().into_raw();

    log::debug!("Loaded logo {}x{}, {} bytes", width, height, rgba.len());

    LogoImage::from_rgba(width as usize, height as usize, rgba)
}

/// Stub picker for WASM builds.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct SystemLogoPicker;

#[cfg(target_arch = "wasm32")]
impl LogoPickerHandler for SystemLogoPicker {
    fn pick_logo(&self) -> Option<LogoImage> {
        // Native dialogs are unavailable on the web target.
        log::warn!("Logo picking is not supported on web builds");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock picker that never returns a file.
    struct MockPickerEmpty;

    impl LogoPickerHandler for MockPickerEmpty {
        fn pick_logo(&self) -> Option<LogoImage> {
            None
        }
    }

    /// Mock picker that returns a predefined logo.
    struct MockPickerWithLogo {
        logo: LogoImage,
    }

    impl LogoPickerHandler for MockPickerWithLogo {
        fn pick_logo(&self) -> Option<LogoImage> {
            Some(self.logo.clone())
        }
    }

    #[test]
    fn test_mock_picker_empty() {
        let picker = MockPickerEmpty;
        assert!(picker.pick_logo().is_none());
    }

    #[test]
    fn test_mock_picker_with_logo() {
        let picker = MockPickerWithLogo {
            logo: LogoImage::from_rgba(10, 10, vec![255u8; 10 * 10 * 4]).unwrap(),
        };
        let logo = picker.pick_logo().unwrap();
        assert_eq!(logo.width, 10);
        assert_eq!(logo.height, 10);
    }

    #[test]
    fn test_picker_handler_trait_is_object_safe() {
        fn _accept_picker(_picker: &dyn LogoPickerHandler) {}
        _accept_picker(&MockPickerEmpty);
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod native_tests {
        use super::*;

        #[test]
        fn test_load_logo_from_missing_path() {
            let invalid_path = std::path::Path::new("/non/existent/path/logo.png");
            assert!(load_logo_from_path(invalid_path).is_none());
        }

        #[test]
        fn test_load_logo_from_non_image_file() {
            use std::io::Write;

            let mut temp_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
            temp_file.write_all(b"definitely not an image").unwrap();
            assert!(load_logo_from_path(temp_file.path()).is_none());
        }

        #[test]
        fn test_load_logo_from_valid_png() {
            use image::ImageEncoder;
            use image::codecs::png::PngEncoder;
            use std::io::Write;

            let mut temp_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");

            // A minimal 1x1 red PNG image.
            let mut png_data = Vec::new();
            let encoder = PngEncoder::new(&mut png_data);
            let pixel: [u8; 4] = [255, 0, 0, 255];
            encoder
                .write_image(&pixel, 1, 1, image::ColorType::Rgba8.into())
                .expect("Failed to encode test PNG");

            temp_file.write_all(&png_data).unwrap();

            let logo = load_logo_from_path(temp_file.path()).expect("Should decode valid PNG");
            assert_eq!(logo.width, 1);
            assert_eq!(logo.height, 1);
            assert_eq!(logo.bytes, vec![255, 0, 0, 255]);
        }
    }
}
