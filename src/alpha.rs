#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

//===========================================================================//

/// How the color channels of an RGBA buffer relate to its alpha channel.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum AlphaMode {
    /// Color channels are independent of alpha.
    Straight,
    /// Color channels have already been multiplied by alpha / 255.
    Premultiplied,
}

//===========================================================================//

/// Converts premultiplied RGBA pixels back to straight alpha, in place.
/// Pixels with an alpha of 0 or 255 are left untouched.
pub(crate) fn unpremultiply(rgba: &mut [u8]) {
    debug_assert_eq!(rgba.len() % 4, 0);
    for pixel in rgba.chunks_exact_mut(4) {
        let alpha = pixel[3] as u32;
        if alpha == 0 || alpha == u8::MAX as u32 {
            continue;
        }
        for channel in pixel[..3].iter_mut() {
            let value = (*channel as u32 * 255 + alpha / 2) / alpha;
            *channel = value.min(u8::MAX as u32) as u8;
        }
    }
}

/// Widens one 8-bit RGBA pixel to premultiplied floats in `[0, 1]`.
pub(crate) fn to_premultiplied_f32(pixel: &[u8], mode: AlphaMode) -> [f32; 4] {
    let alpha = pixel[3] as f32 / 255.0;
    let factor = match mode {
        AlphaMode::Straight => alpha,
        AlphaMode::Premultiplied => 1.0,
    };
    [
        pixel[0] as f32 / 255.0 * factor,
        pixel[1] as f32 / 255.0 * factor,
        pixel[2] as f32 / 255.0 * factor,
        alpha,
    ]
}

/// Narrows one premultiplied float pixel back to straight 8-bit RGBA.  A
/// pixel whose alpha rounds to zero becomes fully transparent black.
pub(crate) fn from_premultiplied_f32(pixel: [f32; 4]) -> [u8; 4] {
    let alpha = pixel[3].clamp(0.0, 1.0);
    let alpha_byte = (alpha * 255.0).round() as u8;
    if alpha_byte == 0 {
        return [0; 4];
    }
    let channel = |value: f32| {
        ((value / alpha).clamp(0.0, 1.0) * 255.0).round() as u8
    };
    [channel(pixel[0]), channel(pixel[1]), channel(pixel[2]), alpha_byte]
}

//===========================================================================//


//===========================================================================//
