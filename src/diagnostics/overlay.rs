use crate::grid::GridGeometry;
use crate::image::GrayImageU8;
use image::{Rgb, RgbImage};

pub const COLUMN_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
pub const ROW_COLOR: Rgb<u8> = Rgb([0, 0, 255]);

/// Content mask in RGB with one-pixel column (green) and row (blue) lines.
pub fn render_overlay(content: &GrayImageU8, geometry: &GridGeometry) -> RgbImage {
    let (w, h) = (content.width() as u32, content.height() as u32);
    let mut vis = RgbImage::from_fn(w, h, |x, y| {
        let v = content.get(x as usize, y as usize);
        Rgb([v, v, v])
    });
    for &x in &geometry.column_bounds {
        if (x as u32) < w {
            for y in 0..h {
                vis.put_pixel(x as u32, y, COLUMN_COLOR);
            }
        }
    }
    for &y in &geometry.row_bounds {
        if (y as u32) < h {
            for x in 0..w {
                vis.put_pixel(x, y as u32, ROW_COLOR);
            }
        }
    }
    vis
}
