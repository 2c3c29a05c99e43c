//! PNG export of the rendered code.

use std::path::{Path, PathBuf};

use qrstudio_states::QrConfig;
use thiserror::Error;

use super::qr_image::{RENDER_SIZE, render_qr};

/// Fixed name of the exported artifact.
pub const EXPORT_FILE_NAME: &str = "qrcode.png";

/// Side length the export is rendered at, matching the on-screen surface.
pub const EXPORT_SIZE: usize = RENDER_SIZE;

/// Errors from [`export_qr`]. None of these abort the app; callers log and
/// carry on with the state untouched.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("the current configuration cannot be rendered")]
    NothingToCapture,
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
    #[cfg(target_arch = "wasm32")]
    #[error("export is not supported on web builds")]
    Unsupported,
}

/// Rasterize `config` and write it as `qrcode.png` inside `dir`.
///
/// The raster is produced by the same routine as the on-screen surface, so
/// the file matches the display pixel for pixel. Returns the written path.
#[cfg(not(target_arch = "wasm32"))]
pub fn export_qr(config: &QrConfig, size: usize, dir: &Path) -> Result<PathBuf, ExportError> {
    let image = render_qr(config, size).ok_or(ExportError::NothingToCapture)?;

    let side = image.width() as u32;
    let bytes: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|p| p.to_srgba_unmultiplied())
        .collect();
    // from_raw only fails on a length mismatch, which the raster rules out.
    let raster = image::RgbaImage::from_raw(side, side, bytes)
        .ok_or(ExportError::NothingToCapture)?;

    let path = dir.join(EXPORT_FILE_NAME);
    raster.save(&path).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Stub for WASM builds: there is no filesystem to save into.
#[cfg(target_arch = "wasm32")]
pub fn export_qr(_config: &QrConfig, _size: usize, _dir: &Path) -> Result<PathBuf, ExportError> {
    Err(ExportError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;
    use qrstudio_states::LogoImage;

    #[test]
    fn test_export_writes_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let config = QrConfig {
            target: "https://example.com/".to_owned(),
            ..QrConfig::default()
        };

        let path = export_qr(&config, EXPORT_SIZE, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);

        let decoded = image::open(&path).unwrap().to_rgba8();
        let expected = render_qr(&config, EXPORT_SIZE).unwrap();
        assert_eq!(decoded.width() as usize, expected.width());
        assert_eq!(decoded.height() as usize, expected.height());
        // Corner pixel is quiet-zone white.
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_export_preserves_styling() {
        let dir = tempfile::tempdir().unwrap();
        let logo = LogoImage::from_rgba(2, 2, vec![255, 0, 0, 255].repeat(4)).unwrap();
        let config = QrConfig {
            target: "https://example.com/".to_owned(),
            background: Color32::from_rgb(240, 240, 200),
            foreground: Color32::from_rgb(20, 20, 60),
            logo: Some(logo),
        };

        let path = export_qr(&config, EXPORT_SIZE, dir.path()).unwrap();
        let decoded = image::open(&path).unwrap().to_rgba8();

        let side = decoded.width();
        assert_eq!(decoded.get_pixel(0, 0).0, [240, 240, 200, 255]);
        assert_eq!(decoded.get_pixel(side / 2, side / 2).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_export_unencodable_target_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let config = QrConfig {
            target: "a".repeat(4000),
            ..QrConfig::default()
        };

        let result = export_qr(&config, EXPORT_SIZE, dir.path());
        assert!(matches!(result, Err(ExportError::NothingToCapture)));
        assert!(!dir.path().join(EXPORT_FILE_NAME).exists());
    }

    #[test]
    fn test_export_to_missing_directory_is_an_io_error() {
        let config = QrConfig::default();
        let result = export_qr(&config, EXPORT_SIZE, Path::new("/nonexistent/dir"));
        assert!(matches!(result, Err(ExportError::Write { .. })));
    }
}
