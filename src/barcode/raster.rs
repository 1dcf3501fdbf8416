//! Module sequences to monochrome PNG buffers

use std::io::Cursor;

use image::{DynamicImage, ImageBuffer, ImageFormat, Luma};

use super::RenderError;

/// Horizontal pixels per module.
const MODULE_WIDTH: u32 = 2;
/// Bar height in pixels.
const BAR_HEIGHT: u32 = 60;
/// Quiet zone on each side, in modules.
const QUIET_ZONE: u32 = 9;

const BLACK: Luma<u8> = Luma([0u8]);
const WHITE: Luma<u8> = Luma([255u8]);

/// Rasterize a module sequence (1 = bar, 0 = space) into an in-memory PNG
pub fn modules_to_png(modules: &[u8]) -> Result<Vec<u8>, RenderError> {
    if modules.is_empty() {
        return Err(RenderError::Empty);
    }

    let width = (modules.len() as u32 + 2 * QUIET_ZONE) * MODULE_WIDTH;
    let mut img = ImageBuffer::from_pixel(width, BAR_HEIGHT, WHITE);

    for (i, &module) in modules.iter().enumerate() {
        if module == 0 {
            continue;
        }
        let x0 = (QUIET_ZONE + i as u32) * MODULE_WIDTH;
        for x in x0..x0 + MODULE_WIDTH {
            for y in 0..BAR_HEIGHT {
                img.put_pixel(x, y, BLACK);
            }
        }
    }

    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| RenderError::Png(e.to_string()))?;

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_dimensions() {
        let png = modules_to_png(&[1, 0, 1]).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), (3 + 2 * QUIET_ZONE) * MODULE_WIDTH);
        assert_eq!(img.height(), BAR_HEIGHT);
    }

    #[test]
    fn test_bars_are_black_spaces_white() {
        let png = modules_to_png(&[1, 0]).unwrap();
        let img = image::load_from_memory(&png).unwrap().to_luma8();
        let bar_x = QUIET_ZONE * MODULE_WIDTH;
        let space_x = (QUIET_ZONE + 1) * MODULE_WIDTH;
        assert_eq!(img.get_pixel(bar_x, 0), &BLACK);
        assert_eq!(img.get_pixel(space_x, 0), &WHITE);
        // quiet zone stays white
        assert_eq!(img.get_pixel(0, 0), &WHITE);
    }

    #[test]
    fn test_empty_sequence_rejected() {
        assert!(matches!(modules_to_png(&[]), Err(RenderError::Empty)));
    }
}
