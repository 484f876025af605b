//! A library for turning a single raster image into a multi-resolution ICO
//! file.
//!
//! The source is scaled (preserving its aspect ratio, centered on a
//! transparent square canvas) to each size in [`TargetSize::ALL`].  The
//! 256x256 image is stored as an embedded PNG; every smaller image is stored
//! as a 32 bpp BMP with an all-clear AND mask.
//!
//! # Example
//!
//! ```no_run
//! let ico_bytes = icoconv::convert_path("logo.png").unwrap();
//! icoconv::write_icon_file("logo.ico", &ico_bytes).unwrap();
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

mod alpha;
mod convert;
mod error;
mod icondir;
mod payload;
mod rendered;
mod resample;
mod size;
mod source;

pub use crate::alpha::AlphaMode;
pub use crate::convert::{
    convert, convert_bytes, convert_file, convert_path, default_output_path,
    render_payloads, write_icon_file,
};
pub use crate::error::{Error, Result};
pub use crate::icondir::{serialize, IconDir, IconDirEntry};
pub use crate::payload::{build_payload, ImagePayload, PayloadKind};
pub use crate::rendered::RenderedImage;
pub use crate::resample::resample;
pub use crate::size::TargetSize;
pub use crate::source::SourceImage;
