use crate::alpha::{
    from_premultiplied_f32, to_premultiplied_f32, unpremultiply, AlphaMode,
};
use crate::rendered::RenderedImage;
use crate::size::TargetSize;
use crate::source::SourceImage;
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgba};

//===========================================================================//

// Bicubic, for both shrinking and enlarging.
const FILTER: FilterType = FilterType::CatmullRom;

//===========================================================================//

/// Where the scaled source lands on a square canvas.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Placement {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Placement {
    /// Fits a `src_width` x `src_height` image inside a `size` x `size`
    /// canvas, scaling uniformly and centering it.
    pub(crate) fn fit(src_width: u32, src_height: u32, size: u32) -> Placement {
        debug_assert!(src_width > 0 && src_height > 0 && size > 0);
        let scale = f64::min(
            size as f64 / src_width as f64,
            size as f64 / src_height as f64,
        );
        let scaled = |length: u32| -> u32 {
            ((length as f64 * scale).round() as u32).clamp(1, size)
        };
        let width = scaled(src_width);
        let height = scaled(src_height);
        let (x, y) = ((size - width) / 2, (size - height) / 2);
        Placement { x, y, width, height }
    }
}

//===========================================================================//

/// Scales `source` to fit inside a `size` x `size` canvas, preserving its
/// aspect ratio and centering it, with fully transparent padding.  The
/// result always has straight alpha.
pub fn resample(source: &SourceImage, size: TargetSize) -> RenderedImage {
    let canvas_size = size.pixels();
    let placement =
        Placement::fit(source.width(), source.height(), canvas_size);

    let scaled = if placement.width == source.width()
        && placement.height == source.height()
    {
        let mut rgba = source.rgba_data().to_vec();
        if source.alpha_mode() == AlphaMode::Premultiplied {
            unpremultiply(&mut rgba);
        }
        rgba
    } else {
        resize_premultiplied(source, placement.width, placement.height)
    };

    let mut canvas = vec![0u8; (canvas_size * canvas_size * 4) as usize];
    copy_into_canvas(&scaled, &mut canvas, canvas_size, placement);
    log::debug!(
        "resampled {}x{} source to {}x{} at ({}, {}) on {}x{} canvas",
        source.width(),
        source.height(),
        placement.width,
        placement.height,
        placement.x,
        placement.y,
        canvas_size,
        canvas_size
    );
    RenderedImage::from_rgba_data(canvas_size, canvas_size, canvas)
}

/// Resizes `source` to `width` x `height`, returning straight 8-bit RGBA.
///
/// Filtering happens on premultiplied floats so that the color of
/// transparent pixels doesn't bleed into the edges of opaque ones, and so
/// that low-alpha colors survive with a single rounding at the end.
fn resize_premultiplied(
    source: &SourceImage,
    width: u32,
    height: u32,
) -> Vec<u8> {
    let mut floats = Vec::with_capacity(source.rgba_data().len());
    for pixel in source.rgba_data().chunks_exact(4) {
        floats.extend_from_slice(&to_premultiplied_f32(
            pixel,
            source.alpha_mode(),
        ));
    }
    let buffer = ImageBuffer::<Rgba<f32>, Vec<f32>>::from_raw(
        source.width(),
        source.height(),
        floats,
    )
    .expect("source buffer length was validated on construction");
    let resized = imageops::resize(&buffer, width, height, FILTER);
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for pixel in resized.pixels() {
        rgba.extend_from_slice(&from_premultiplied_f32(pixel.0));
    }
    rgba
}

/// Copies the rows of `scaled` into the rectangle of `canvas` described by
/// `placement`.
fn copy_into_canvas(
    scaled: &[u8],
    canvas: &mut [u8],
    canvas_size: u32,
    placement: Placement,
) {
    let row_len = placement.width as usize * 4;
    let canvas_row_len = canvas_size as usize * 4;
    assert_eq!(scaled.len(), row_len * placement.height as usize);
    assert!(placement.x + placement.width <= canvas_size);
    assert!(placement.y + placement.height <= canvas_size);
    for (row, src_row) in scaled.chunks_exact(row_len).enumerate() {
        let start = (placement.y as usize + row) * canvas_row_len
            + placement.x as usize * 4;
        canvas[start..start + row_len].copy_from_slice(src_row);
    }
}

//===========================================================================//


//===========================================================================//
