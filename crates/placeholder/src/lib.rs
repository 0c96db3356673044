//! Solid-color placeholder images.
//!
//! [`create_placeholder_image`] is the one-shot entry: render, encode by file
//! extension, write, and print a single status line. The lower-level pieces
//! are public for callers that want the bytes or the raster instead.

mod color;
mod config;
mod error;
mod output;
mod solid;

use std::path::PathBuf;

use tracing::warn;

pub use color::Color;
pub use config::{PlaceholderConfig, DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_WIDTH};
pub use error::GenerationError;
pub use output::write_placeholder;
pub use solid::{encode_placeholder, max_raster_bytes, render_placeholder};

/// Write the placeholder described by `config` and print one line to stdout.
///
/// Failures are printed as `Error: ...` and returned; this never panics on bad
/// input.
pub fn create_placeholder_image(config: &PlaceholderConfig) -> Result<PathBuf, GenerationError> {
    let outcome = write_placeholder(config);
    if let Err(e) = &outcome {
        warn!(path = %config.output.display(), error = %e, "placeholder generation failed");
    }
    println!("{}", report_line(&outcome));
    outcome
}

/// The console line for an outcome of [`write_placeholder`].
///
/// Always a single line; multi-line error text is joined with spaces.
pub fn report_line(outcome: &Result<PathBuf, GenerationError>) -> String {
    match outcome {
        Ok(path) => format!("Successfully created {}", path.display()),
        Err(e) => format!("Error: {}", single_line(&e.to_string())),
    }
}

fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_line_names_the_file() {
        let line = report_line(&Ok(PathBuf::from("t1.png")));
        assert_eq!(line, "Successfully created t1.png");
    }

    #[test]
    fn error_line_carries_the_description() {
        let err = GenerationError::InvalidDimensions {
            width: 0,
            height: 0,
        };
        let line = report_line(&Err(err));
        assert_eq!(
            line,
            "Error: invalid dimensions 0x0: width and height must be non-zero"
        );
    }

    #[test]
    fn encoder_errors_stay_on_one_line() {
        // Too wide for the JPEG encoder, well under the raster limit.
        let config = PlaceholderConfig::new("wide.jpg", 70_000, 1, Color::BLACK);
        let err = encode_placeholder(&config).unwrap_err();
        assert!(matches!(err, GenerationError::Encode(_)), "{err:?}");

        let line = report_line(&Err(err));
        assert!(line.starts_with("Error: failed to encode image: "), "{line}");
        assert_eq!(line.lines().count(), 1, "{line}");
    }

    #[test]
    fn multi_line_text_is_joined() {
        assert_eq!(single_line("first:\n  second\n\nthird"), "first: second third");
    }
}
