use std::path::PathBuf;

/// Any failure while building, encoding or persisting a placeholder image.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("invalid dimensions {width}x{height}: width and height must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("image {width}x{height} exceeds the {limit}-byte allocation limit")]
    TooLarge { width: u32, height: u32, limit: u64 },

    #[error("cannot infer an image format from {}: {source}", .path.display())]
    UnsupportedFormat {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
