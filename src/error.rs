use std::io;

//===========================================================================//

/// Everything that can go wrong while converting an image into an ICO file.
/// None of these are retryable; each one ends the current conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source image couldn't be read or decoded into pixels.
    #[error("failed to decode source image: {0}")]
    Decode(#[source] image::ImageError),

    /// The source image has a zero or otherwise unusable size.
    #[error("invalid source dimensions: {0}")]
    InvalidDimensions(String),

    /// The PNG encoder failed while producing a 256x256 entry.
    #[error("failed to encode PNG image: {0}")]
    Encode(#[from] png::EncodingError),

    /// The output couldn't be written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A `Result` whose error type is this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::Error;
    use std::io;

    #[test]
    fn io_errors_convert() {
        let error: Error =
            io::Error::new(io::ErrorKind::InvalidInput, "too many entries")
                .into();
        assert!(matches!(error, Error::Io(_)));
        assert_eq!(error.to_string(), "I/O error: too many entries");
    }

    #[test]
    fn invalid_dimensions_message() {
        let error = Error::InvalidDimensions("width is zero".to_string());
        assert_eq!(
            error.to_string(),
            "invalid source dimensions: width is zero"
        );
    }
}

//===========================================================================//
