use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Color;

pub const DEFAULT_OUTPUT: &str = "vercel_featured.png";
pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;

/// Parameters for one placeholder image.
///
/// The output format is inferred from the extension of `output`.
/// Missing fields fall back to the defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub color: Color,
}

impl PlaceholderConfig {
    pub fn new(
        output: impl Into<PathBuf>,
        width: u32,
        height: u32,
        color: impl Into<Color>,
    ) -> Self {
        Self {
            output: output.into(),
            width,
            height,
            color: color.into(),
        }
    }
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT, DEFAULT_WIDTH, DEFAULT_HEIGHT, Color::INDIGO)
    }
}
