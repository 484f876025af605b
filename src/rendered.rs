use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

//===========================================================================//

// The size of a BITMAPINFOHEADER struct, in bytes.
pub(crate) const BMP_HEADER_LEN: u32 = 40;

// Every image is stored with 8 bits for each of blue, green, red and alpha.
pub(crate) const BITS_PER_PIXEL: u16 = 32;

//===========================================================================//

/// A square-canvas image produced by resampling, with straight
/// (non-premultiplied) alpha.
#[derive(Clone)]
pub struct RenderedImage {
    width: u32,
    height: u32,
    rgba_data: Vec<u8>,
}

impl RenderedImage {
    /// Creates a new image with the given dimensions and RGBA data.  The
    /// `width` and `height` must be nonzero, and `rgba_data` must have `4 *
    /// width * height` bytes and be in row-major order from top to bottom.
    /// Panics if the dimensions are out of range or if `rgba_data` is the
    /// wrong length.
    pub fn from_rgba_data(
        width: u32,
        height: u32,
        rgba_data: Vec<u8>,
    ) -> RenderedImage {
        if width == 0 || height == 0 {
            panic!("Invalid dimensions ({}x{} has no pixels)", width, height);
        }
        let expected_data_len = (width as u64) * (height as u64) * 4;
        if (rgba_data.len() as u64) != expected_data_len {
            panic!(
                "Invalid data length (was {}, but must be {} for {}x{} image)",
                rgba_data.len(),
                expected_data_len,
                width,
                height
            );
        }
        RenderedImage { width, height, rgba_data }
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the RGBA data for this image, in row-major order from top to
    /// bottom.
    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba_data
    }

    /// Encodes the image as a complete 8-bit RGBA PNG file.
    pub(crate) fn write_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        let mut data = Vec::new();
        {
            let mut encoder =
                png::Encoder::new(&mut data, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.rgba_data)?;
        }
        Ok(data)
    }

    /// Encodes the image as a 32 bpp ICO-style BMP: a BITMAPINFOHEADER with
    /// doubled height, the BGRA rows from the bottom up, and then an AND
    /// mask with every bit clear.
    pub(crate) fn write_bmp(&self) -> io::Result<Vec<u8>> {
        let width = self.width as usize;
        let height = self.height as usize;
        let color_row_size = width * 4;
        let color_size = color_row_size * height;
        // Each mask row is 1 bit per pixel, padded to a multiple of 4 bytes.
        let mask_row_size = ((width + 31) / 32) * 4;
        let data_size =
            BMP_HEADER_LEN as usize + color_size + mask_row_size * height;
        let mut data = Vec::<u8>::with_capacity(data_size);

        // Write the BITMAPINFOHEADER struct:
        data.write_u32::<LittleEndian>(BMP_HEADER_LEN)?;
        data.write_i32::<LittleEndian>(self.width as i32)?;
        data.write_i32::<LittleEndian>(2 * self.height as i32)?;
        data.write_u16::<LittleEndian>(1)?; // planes
        data.write_u16::<LittleEndian>(BITS_PER_PIXEL)?;
        data.write_u32::<LittleEndian>(0)?; // compression
        data.write_u32::<LittleEndian>(color_size as u32)?;
        data.write_i32::<LittleEndian>(0)?; // horz ppm
        data.write_i32::<LittleEndian>(0)?; // vert ppm
        data.write_u32::<LittleEndian>(0)?; // colors used
        data.write_u32::<LittleEndian>(0)?; // colors important
        debug_assert_eq!(data.len(), BMP_HEADER_LEN as usize);

        // Write the color data, starting from the *bottom* row:
        for row in self.rgba_data.chunks_exact(color_row_size).rev() {
            for pixel in row.chunks_exact(4) {
                data.write_u8(pixel[2])?; // blue
                data.write_u8(pixel[1])?; // green
                data.write_u8(pixel[0])?; // red
                data.write_u8(pixel[3])?; // alpha
            }
        }

        // Alpha lives in the color data, so the mask marks nothing as
        // transparent.  It is still required by older ICO readers.
        let mask_row = vec![0u8; mask_row_size];
        for _ in 0..height {
            data.write_all(&mask_row)?;
        }

        debug_assert_eq!(data.len(), data_size);
        Ok(data)
    }
}

//===========================================================================//


//===========================================================================//
