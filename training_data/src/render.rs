// glyphs as grayscale images, and back to binary grids at the network input size

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use imageproc::contrast::otsu_level;

use cistercian::Canvas;

use crate::error::Result;

const INK: u8 = 255;

// set pixels are white; `invert` gives black strokes on white, for showing a glyph
pub fn to_gray_image(canvas: &Canvas, invert: bool) -> GrayImage {
    GrayImage::from_fn(canvas.width() as u32, canvas.height() as u32, |x, y| {
        let set = canvas.get(y as usize, x as usize);
        Luma([if set != invert { INK } else { 0 }])
    })
}

/// Otsu's threshold: pixels above the returned level are foreground. A uniform image
/// returns its only level, so nothing is above it.
pub fn threshold_otsu(image: &GrayImage) -> u8 {
    let mut levels = image.pixels().map(|pixel| pixel.0[0]);
    let Some(first) = levels.next() else {
        return 0;
    };
    if levels.all(|level| level == first) {
        return first;
    }
    otsu_level(image)
}

/// Resizes a glyph to `size` x `size` and converts it back to binary with Otsu's threshold.
pub fn resize_binarized(canvas: &Canvas, size: u32) -> Result<Canvas> {
    let resized = imageops::resize(&to_gray_image(canvas, false), size, size, FilterType::Triangle);
    let threshold = threshold_otsu(&resized);
    let rows: Vec<Vec<u8>> = (0..size)
        .map(|y| (0..size).map(|x| (resized.get_pixel(x, y).0[0] > threshold) as u8).collect())
        .collect();
    Ok(Canvas::from_matrix(&rows)?)
}

// row-major 0.0 / 1.0 values, for building tensors
pub fn to_f32(canvas: &Canvas) -> Vec<f32> {
    (0..canvas.height())
        .flat_map(|row| (0..canvas.width()).map(move |col| (row, col)))
        .map(|(row, col)| if canvas.get(row, col) { 1.0 } else { 0.0 })
        .collect()
}
