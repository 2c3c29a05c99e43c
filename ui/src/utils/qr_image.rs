//! QR rasterization.
//!
//! Turns a [`QrConfig`] into an `egui::ColorImage`: the `qrcode` crate
//! produces the module matrix, which is scaled up, framed with a quiet zone
//! and painted with the configured colors; the logo, when present, is scaled
//! and alpha-blended over the center. The same routine backs both the
//! on-screen surface and the PNG export, so the exported file is
//! pixel-identical to what is displayed.

use egui::{Color32, ColorImage};
use qrstudio_states::{LogoImage, QrConfig};

/// Side length the surface and the export are rendered at.
pub const RENDER_SIZE: usize = 250;

/// Quiet-zone width in modules on each side of the code.
const QUIET_ZONE: usize = 4;

/// Fraction of the rendered side length covered by the logo box.
const LOGO_FRACTION: usize = 4;

/// Rasterize a configuration into a square `ColorImage` no larger than
/// `size` pixels per side (minimum one pixel per module).
///
/// Returns `None` when the target does not fit in any QR version, which the
/// callers treat as "nothing to draw".
pub fn render_qr(config: &QrConfig, size: usize) -> Option<ColorImage> {
    let code = match qrcode::QrCode::new(config.target.as_bytes()) {
        Ok(code) => code,
        Err(err) => {
            log::warn!("QR encoding failed for {:?}: {err}", config.target);
            return None;
        }
    };
    let qr_width = code.width();
    let total_width = qr_width + 2 * QUIET_ZONE;

    // Calculate scale factor to fit the desired size (minimum scale of 1)
    let scale = (size / total_width).max(1);
    let actual_size = total_width * scale;

    // Quiet zone and light modules share the background color.
    let mut pixels = vec![config.background; actual_size * actual_size];

    for (y, row) in code.to_colors().chunks(qr_width).enumerate() {
        for (x, color) in row.iter().enumerate() {
            if *color != qrcode::Color::Dark {
                continue;
            }

            // Fill scaled pixels, offset past the quiet zone
            for dy in 0..scale {
                for dx in 0..scale {
                    let px = (x + QUIET_ZONE) * scale + dx;
                    let py = (y + QUIET_ZONE) * scale + dy;
                    pixels[py * actual_size + px] = config.foreground;
                }
            }
        }
    }

    let mut image = ColorImage::new([actual_size, actual_size], pixels);
    if let Some(logo) = &config.logo {
        overlay_logo(&mut image, logo);
    }

    Some(image)
}

/// Scale the logo to fit the center box and alpha-blend it over the code.
///
/// Nearest-neighbor sampling keeps the routine deterministic and free of
/// filtering dependencies; QR error correction tolerates the occlusion.
fn overlay_logo(image: &mut ColorImage, logo: &LogoImage) {
    let side = image.width();
    let box_side = (side / LOGO_FRACTION).max(1);

    // Fit the logo into the box, preserving aspect ratio.
    let longest = logo.width.max(logo.height);
    let out_w = (logo.width * box_side / longest).max(1);
    let out_h = (logo.height * box_side / longest).max(1);
    let x0 = (side - out_w) / 2;
    let y0 = (side - out_h) / 2;

    for dy in 0..out_h {
        for dx in 0..out_w {
            let src_x = (dx * logo.width / out_w).min(logo.width - 1);
            let src_y = (dy * logo.height / out_h).min(logo.height - 1);
            let src = logo.pixel(src_x, src_y);

            let i = (y0 + dy) * side + (x0 + dx);
            image.pixels[i] = blend_over(src, image.pixels[i]);
        }
    }
}

/// `src` over an opaque `dst`. `Color32` is premultiplied, so the source
/// channels are added as-is and the destination is attenuated by the
/// remaining coverage.
fn blend_over(src: Color32, dst: Color32) -> Color32 {
    let a = u32::from(src.a());
    let blend = |s: u8, d: u8| {
        (u32::from(s) + u32::from(d) * (255 - a) / 255).min(255) as u8
    };
    Color32::from_rgb(
        blend(src.r(), dst.r()),
        blend(src.g(), dst.g()),
        blend(src.b(), dst.b()),
    )
}
