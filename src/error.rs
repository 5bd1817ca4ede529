/// The main error type for the pixeldither crate
#[derive(Debug, thiserror::Error)]
pub enum DitherError {
    /// A pixel buffer with zero width or height was requested
    #[error("Empty pixel buffer: {width}x{height}")]
    EmptyBuffer { width: u32, height: u32 },

    /// Raw RGBA data does not match the declared dimensions
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Downsample factor is not a finite number >= 1
    #[error("Invalid pixel size: {0} (must be a finite number >= 1)")]
    InvalidPixelSize(f32),

    /// A custom palette was declared without any colors
    #[error("Palette {0:?} has no colors")]
    EmptyPalette(String),

    /// Strict algorithm parsing failed (forgiving lookups fall back to `none`)
    #[error("Unsupported dithering algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid hex color: {0:?}")]
    InvalidHexColor(String),

    /// Error occurred while reading or decoding an image
    #[error("Image decode error: {0}")]
    ImageDecode(#[source] image::ImageError),

    /// Error occurred while writing or encoding an image
    #[error("Image encode error: {0}")]
    ImageEncode(#[source] image::ImageError),

    /// Error occurred during I/O operations (file read/write)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed or serialized
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<image::ImageError> for DitherError {
    fn from(err: image::ImageError) -> Self {
        // Distinguish between decode and encode errors based on the error kind
        match &err {
            image::ImageError::Encoding(_) => DitherError::ImageEncode(err),
            _ => DitherError::ImageDecode(err),
        }
    }
}

// Convenience type alias for Results using DitherError
pub type Result<T = ()> = std::result::Result<T, DitherError>;
