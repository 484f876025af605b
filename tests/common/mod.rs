#![allow(dead_code)]

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

//===========================================================================//

pub const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// One ICONDIRENTRY, as stored on disk.
#[derive(Debug)]
pub struct RawEntry {
    pub width: u8,
    pub height: u8,
    pub num_colors: u8,
    pub reserved: u8,
    pub color_planes: u16,
    pub bits_per_pixel: u16,
    pub data_size: u32,
    pub data_offset: u32,
}

impl RawEntry {
    pub fn data<'a>(&self, ico: &'a [u8]) -> &'a [u8] {
        let start = self.data_offset as usize;
        &ico[start..start + self.data_size as usize]
    }
}

/// Parses the ICONDIR header and directory of an ICO file.
pub fn read_directory(ico: &[u8]) -> Vec<RawEntry> {
    let mut reader = ico;
    assert_eq!(reader.read_u16::<LittleEndian>().unwrap(), 0);
    assert_eq!(reader.read_u16::<LittleEndian>().unwrap(), 1);
    let num_entries = reader.read_u16::<LittleEndian>().unwrap();
    (0..num_entries)
        .map(|_| RawEntry {
            width: reader.read_u8().unwrap(),
            height: reader.read_u8().unwrap(),
            num_colors: reader.read_u8().unwrap(),
            reserved: reader.read_u8().unwrap(),
            color_planes: reader.read_u16::<LittleEndian>().unwrap(),
            bits_per_pixel: reader.read_u16::<LittleEndian>().unwrap(),
            data_size: reader.read_u32::<LittleEndian>().unwrap(),
            data_offset: reader.read_u32::<LittleEndian>().unwrap(),
        })
        .collect()
}

/// Encodes an opaque, solid-color RGB PNG.
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer
            .write_image_data(&rgb.repeat((width * height) as usize))
            .unwrap();
    }
    png_data
}

/// Decodes an RGBA PNG, returning its width, height and pixel data.
pub fn decode_png(data: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(Cursor::new(data));
    let mut reader = decoder.read_info().unwrap();
    let mut buffer = vec![0u8; reader.output_buffer_size()];
    reader.next_frame(&mut buffer).unwrap();
    assert_eq!(reader.info().color_type, png::ColorType::Rgba);
    (reader.info().width, reader.info().height, buffer)
}

/// Splits a 32 bpp ICO bitmap into its header fields, its color rows (in
/// file order, i.e. bottom row first) and its mask rows.
pub struct Bitmap<'a> {
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub color_rows: Vec<&'a [u8]>,
    pub mask_rows: Vec<&'a [u8]>,
}

pub fn split_bitmap(data: &[u8]) -> Bitmap<'_> {
    let mut reader = data;
    let header_size = reader.read_u32::<LittleEndian>().unwrap();
    let width = reader.read_i32::<LittleEndian>().unwrap();
    let height = reader.read_i32::<LittleEndian>().unwrap();
    let planes = reader.read_u16::<LittleEndian>().unwrap();
    let bits_per_pixel = reader.read_u16::<LittleEndian>().unwrap();
    let compression = reader.read_u32::<LittleEndian>().unwrap();
    let image_size = reader.read_u32::<LittleEndian>().unwrap();
    let rows = (height / 2) as usize;
    let color_row_len = width as usize * 4;
    let mask_row_len = ((width as usize + 31) / 32) * 4;
    let color_start = header_size as usize;
    let mask_start = color_start + rows * color_row_len;
    assert_eq!(data.len(), mask_start + rows * mask_row_len);
    Bitmap {
        header_size,
        width,
        height,
        planes,
        bits_per_pixel,
        compression,
        image_size,
        color_rows: data[color_start..mask_start]
            .chunks_exact(color_row_len)
            .collect(),
        mask_rows: data[mask_start..].chunks_exact(mask_row_len).collect(),
    }
}

//===========================================================================//
