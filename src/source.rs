use crate::alpha::AlphaMode;
use crate::error::{Error, Result};
use image::DynamicImage;
use std::path::Path;

//===========================================================================//

/// The image an ICO file is made from.  Never modified once constructed.
#[derive(Clone)]
pub struct SourceImage {
    width: u32,
    height: u32,
    alpha_mode: AlphaMode,
    rgba_data: Vec<u8>,
}

impl SourceImage {
    /// Creates a source image from raw RGBA data, in row-major order from top
    /// to bottom.  Returns an error if either dimension is zero or if
    /// `rgba_data` isn't exactly `4 * width * height` bytes long.
    pub fn from_rgba_data(
        width: u32,
        height: u32,
        rgba_data: Vec<u8>,
        alpha_mode: AlphaMode,
    ) -> Result<SourceImage> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions(format!(
                "{}x{} image has no pixels",
                width, height
            )));
        }
        let expected_data_len = (width as u64) * (height as u64) * 4;
        if (rgba_data.len() as u64) != expected_data_len {
            return Err(Error::InvalidDimensions(format!(
                "data length was {}, but must be {} for {}x{} image",
                rgba_data.len(),
                expected_data_len,
                width,
                height
            )));
        }
        Ok(SourceImage { width, height, alpha_mode, rgba_data })
    }

    /// Decodes a PNG or JPEG file held in memory.
    pub fn decode(bytes: &[u8]) -> Result<SourceImage> {
        let decoded = image::load_from_memory(bytes).map_err(Error::Decode)?;
        SourceImage::from_dynamic(decoded)
    }

    /// Reads and decodes a PNG or JPEG file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
        let decoded = image::open(path.as_ref()).map_err(Error::Decode)?;
        SourceImage::from_dynamic(decoded)
    }

    fn from_dynamic(decoded: DynamicImage) -> Result<SourceImage> {
        // Decoders always hand back straight alpha.
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::debug!("decoded {}x{} source image", width, height);
        SourceImage::from_rgba_data(
            width,
            height,
            rgba.into_raw(),
            AlphaMode::Straight,
        )
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns whether the color channels are premultiplied by alpha.
    pub fn alpha_mode(&self) -> AlphaMode {
        self.alpha_mode
    }

    /// Returns the RGBA data for this image, in row-major order from top to
    /// bottom.
    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba_data
    }
}

//===========================================================================//


//===========================================================================//
