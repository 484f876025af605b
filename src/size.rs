#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

//===========================================================================//

/// One of the square image sizes written into every ICO file.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum TargetSize {
    /// 16x16 pixels
    Sixteen,
    /// 32x32 pixels
    ThirtyTwo,
    /// 48x48 pixels
    FortyEight,
    /// 64x64 pixels
    SixtyFour,
    /// 128x128 pixels
    OneTwentyEight,
    /// 256x256 pixels
    TwoFiftySix,
}

impl TargetSize {
    /// All sizes, in the order their entries appear in the ICO directory.
    pub const ALL: [TargetSize; 6] = [
        TargetSize::Sixteen,
        TargetSize::ThirtyTwo,
        TargetSize::FortyEight,
        TargetSize::SixtyFour,
        TargetSize::OneTwentyEight,
        TargetSize::TwoFiftySix,
    ];

    /// Returns the size whose edge is `pixels` long, if it is in the catalog.
    pub fn from_pixels(pixels: u32) -> Option<TargetSize> {
        match pixels {
            16 => Some(TargetSize::Sixteen),
            32 => Some(TargetSize::ThirtyTwo),
            48 => Some(TargetSize::FortyEight),
            64 => Some(TargetSize::SixtyFour),
            128 => Some(TargetSize::OneTwentyEight),
            256 => Some(TargetSize::TwoFiftySix),
            _ => None,
        }
    }

    /// Returns the width (and height) of this size, in pixels.
    pub fn pixels(&self) -> u32 {
        match *self {
            TargetSize::Sixteen => 16,
            TargetSize::ThirtyTwo => 32,
            TargetSize::FortyEight => 48,
            TargetSize::SixtyFour => 64,
            TargetSize::OneTwentyEight => 128,
            TargetSize::TwoFiftySix => 256,
        }
    }

    /// The value stored in the one-byte width/height fields of an
    /// ICONDIRENTRY, where zero stands for 256 or more.
    pub(crate) fn dir_byte(&self) -> u8 {
        let pixels = self.pixels();
        if pixels > 255 {
            0
        } else {
            pixels as u8
        }
    }
}

//===========================================================================//


//===========================================================================//
