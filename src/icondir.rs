use crate::payload::{ImagePayload, PayloadKind};
use crate::rendered::BITS_PER_PIXEL;
use crate::size::TargetSize;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

//===========================================================================//

// The size of the ICONDIR header, in bytes.
pub(crate) const ICONDIR_LEN: u32 = 6;

// The size of each ICONDIRENTRY struct, in bytes.
pub(crate) const ICONDIRENTRY_LEN: u32 = 16;

// The ICONDIR resource type for icons (as opposed to cursors).
const RESOURCE_TYPE_ICON: u16 = 1;

//===========================================================================//

/// The images making up one ICO file, in directory order.
#[derive(Clone, Debug, Default)]
pub struct IconDir {
    entries: Vec<IconDirEntry>,
}

impl IconDir {
    /// Creates a new, empty collection of icons.
    pub fn new() -> IconDir {
        IconDir { entries: Vec::new() }
    }

    /// Returns the entries in this collection.
    pub fn entries(&self) -> &[IconDirEntry] {
        &self.entries
    }

    /// Appends an entry; entries are written in the order they were added.
    pub fn add_entry(&mut self, entry: IconDirEntry) {
        self.entries.push(entry);
    }

    /// Returns the byte offset at which each entry's payload will be written.
    pub fn offsets(&self) -> Vec<u64> {
        let mut offset = self.header_len();
        self.entries
            .iter()
            .map(|entry| {
                let start = offset;
                offset += entry.payload.len() as u64;
                start
            })
            .collect()
    }

    /// Returns the total size of the ICO file this collection encodes to.
    pub fn encoded_len(&self) -> u64 {
        self.header_len()
            + self
                .entries
                .iter()
                .map(|entry| entry.payload.len() as u64)
                .sum::<u64>()
    }

    fn header_len(&self) -> u64 {
        let num_entries = self.entries.len() as u64;
        ICONDIR_LEN as u64 + ICONDIRENTRY_LEN as u64 * num_entries
    }

    /// Writes an ICO file out to disk.
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        if self.entries.len() > (u16::MAX as usize) {
            invalid_input!(
                "Too many entries in IconDir (was {}, but max is {})",
                self.entries.len(),
                u16::MAX
            );
        }
        if self.encoded_len() > (u32::MAX as u64) {
            invalid_input!(
                "ICO file too large (was {} bytes, but max is {})",
                self.encoded_len(),
                u32::MAX
            );
        }
        writer.write_u16::<LittleEndian>(0)?; // reserved
        writer.write_u16::<LittleEndian>(RESOURCE_TYPE_ICON)?;
        writer.write_u16::<LittleEndian>(self.entries.len() as u16)?;
        for (entry, offset) in self.entries.iter().zip(self.offsets()) {
            writer.write_u8(entry.size.dir_byte())?; // width
            writer.write_u8(entry.size.dir_byte())?; // height
            writer.write_u8(0)?; // num colors
            writer.write_u8(0)?; // reserved
            writer.write_u16::<LittleEndian>(1)?; // color planes
            writer.write_u16::<LittleEndian>(BITS_PER_PIXEL)?;
            writer.write_u32::<LittleEndian>(entry.payload.len() as u32)?;
            writer.write_u32::<LittleEndian>(offset as u32)?;
        }
        for entry in self.entries.iter() {
            writer.write_all(entry.payload.data())?;
        }
        Ok(())
    }
}

//===========================================================================//

/// One entry in an ICO file; a single encoded image.
#[derive(Clone, Debug)]
pub struct IconDirEntry {
    size: TargetSize,
    payload: ImagePayload,
}

impl IconDirEntry {
    /// Creates an entry for `payload`.  Panics if the payload's dimensions
    /// aren't those of `size`.
    pub fn new(size: TargetSize, payload: ImagePayload) -> IconDirEntry {
        let pixels = size.pixels();
        if payload.width() != pixels || payload.height() != pixels {
            panic!(
                "Can't add {}x{} payload as a {}x{} entry",
                payload.width(),
                payload.height(),
                pixels,
                pixels
            );
        }
        IconDirEntry { size, payload }
    }

    /// Returns the size of the image.
    pub fn size(&self) -> TargetSize {
        self.size
    }

    /// Returns true if the image is encoded as a PNG, or false if it is
    /// encoded as a BMP.
    pub fn is_png(&self) -> bool {
        self.payload.kind() == PayloadKind::Png
    }

    /// Returns the encoded image.
    pub fn payload(&self) -> &ImagePayload {
        &self.payload
    }
}

//===========================================================================//

/// Lays out `payloads` as a complete ICO file: header, directory, then the
/// payloads back to back, all in the given order.
pub fn serialize(
    payloads: Vec<(TargetSize, ImagePayload)>,
) -> io::Result<Vec<u8>> {
    let mut icondir = IconDir::new();
    for (size, payload) in payloads {
        icondir.add_entry(IconDirEntry::new(size, payload));
    }
    let mut output = Vec::<u8>::with_capacity(icondir.encoded_len() as usize);
    icondir.write(&mut output)?;
    debug_assert_eq!(output.len() as u64, icondir.encoded_len());
    Ok(output)
}

//===========================================================================//


//===========================================================================//
