use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use tracing::debug;

use crate::{Color, GenerationError, PlaceholderConfig};

const BYTES_PER_PIXEL: u64 = 3;

/// Largest raster we are willing to allocate, in bytes.
///
/// Same ceiling the `image` crate applies to decoders by default (512 MiB).
pub fn max_raster_bytes() -> u64 {
    image::Limits::default().max_alloc.unwrap_or(u64::MAX)
}

/// Build a `width` x `height` RGB raster with every pixel set to `color`.
pub fn render_placeholder(
    width: u32,
    height: u32,
    color: Color,
) -> Result<RgbImage, GenerationError> {
    if width == 0 || height == 0 {
        return Err(GenerationError::InvalidDimensions { width, height });
    }

    let limit = max_raster_bytes();
    let bytes = u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|px| px.checked_mul(BYTES_PER_PIXEL));
    match bytes {
        Some(n) if n <= limit => {}
        _ => {
            return Err(GenerationError::TooLarge {
                width,
                height,
                limit,
            })
        }
    }

    debug!(width, height, ?color, "rendering solid raster");
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(width, height, color.into());
    Ok(img)
}

/// Render the configured placeholder and encode it in memory.
///
/// The format comes from the extension of `config.output`; nothing touches the
/// filesystem here.
pub fn encode_placeholder(
    config: &PlaceholderConfig,
) -> Result<(ImageFormat, Vec<u8>), GenerationError> {
    let format = ImageFormat::from_path(&config.output).map_err(|source| {
        GenerationError::UnsupportedFormat {
            path: config.output.clone(),
            source,
        }
    })?;

    let img = render_placeholder(config.width, config.height, config.color)?;

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).map_err(GenerationError::Encode)?;

    let out = out.into_inner();
    debug!(?format, bytes = out.len(), "encoded placeholder");
    Ok((format, out))
}
