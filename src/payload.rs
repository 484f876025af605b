use crate::error::Result;
use crate::rendered::RenderedImage;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

//===========================================================================//

// The signature that all PNG files start with.
pub(crate) const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

// Images exactly this large (in both dimensions) are stored as PNG.
const PNG_SIZE: u32 = 256;

//===========================================================================//

/// How an image is encoded inside an ICO file.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum PayloadKind {
    /// A 32 bpp BITMAPINFOHEADER-based BMP followed by a 1 bpp AND mask.
    Bitmap,
    /// A complete PNG file.
    Png,
}

//===========================================================================//

/// The encoded bytes of one image, ready to be placed in an ICO file.
#[derive(Clone, Debug)]
pub struct ImagePayload {
    kind: PayloadKind,
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImagePayload {
    /// Returns how the image is encoded.
    pub fn kind(&self) -> PayloadKind {
        self.kind
    }

    /// Returns the width of the encoded image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the encoded image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the encoded bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of encoded bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if there are no encoded bytes (never the case for a
    /// payload produced by [`build_payload`]).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

//===========================================================================//

/// Encodes a rendered image for an ICO file.  256x256 images become PNGs,
/// which every ICO reader since Windows Vista expects at that size; smaller
/// images become 32 bpp BMPs for compatibility with older readers.
pub fn build_payload(image: &RenderedImage) -> Result<ImagePayload> {
    let (width, height) = (image.width(), image.height());
    assert_eq!(
        image.rgba_data().len() as u64,
        (width as u64) * (height as u64) * 4,
        "RGBA data doesn't match {}x{} image",
        width,
        height
    );
    let (kind, data) = if width == PNG_SIZE && height == PNG_SIZE {
        (PayloadKind::Png, image.write_png()?)
    } else {
        (PayloadKind::Bitmap, image.write_bmp()?)
    };
    debug_assert_eq!(
        kind == PayloadKind::Png,
        data.starts_with(PNG_SIGNATURE)
    );
    log::debug!(
        "encoded {}x{} image as {:?} ({} bytes)",
        width,
        height,
        kind,
        data.len()
    );
    Ok(ImagePayload { kind, width, height, data })
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{build_payload, PayloadKind, PNG_SIGNATURE};
    use crate::rendered::RenderedImage;
    use byteorder::{LittleEndian, ReadBytesExt};

    fn transparent(size: u32) -> RenderedImage {
        RenderedImage::from_rgba_data(
            size,
            size,
            vec![0u8; (size * size * 4) as usize],
        )
    }

    #[test]
    fn small_sizes_are_bitmaps() {
        for &size in [16u32, 32, 48, 64, 128].iter() {
            let payload = build_payload(&transparent(size)).unwrap();
            assert_eq!(payload.kind(), PayloadKind::Bitmap);
            let mut header = payload.data();
            assert_eq!(header.read_u32::<LittleEndian>().unwrap(), 40);
            let width = header.read_i32::<LittleEndian>().unwrap();
            assert_eq!(width, size as i32);
            assert_eq!(
                header.read_i32::<LittleEndian>().unwrap(),
                2 * size as i32
            );
            let mask_row_size = ((size + 31) / 32) * 4;
            let expected_len = 40 + size * size * 4 + mask_row_size * size;
            assert_eq!(payload.len(), expected_len as usize);
        }
    }

    #[test]
    fn largest_size_is_png() {
        let payload = build_payload(&transparent(256)).unwrap();
        assert_eq!(payload.kind(), PayloadKind::Png);
        assert!(payload.data().starts_with(PNG_SIGNATURE));
        assert_eq!((payload.width(), payload.height()), (256, 256));
    }

    #[test]
    fn non_square_uses_bitmap() {
        let image = RenderedImage::from_rgba_data(
            256,
            16,
            vec![0u8; 256 * 16 * 4],
        );
        let payload = build_payload(&image).unwrap();
        assert_eq!(payload.kind(), PayloadKind::Bitmap);
    }

    #[test]
    fn size_64_mask_rows_are_8_bytes() {
        let payload = build_payload(&transparent(64)).unwrap();
        let color_end = 40 + 64 * 64 * 4;
        assert_eq!(payload.len() - color_end, 64 * 8);
    }
}

//===========================================================================//
