use std::path::Path;

use placeholder::Color;

/// Decode `path` and assert it is `width` x `height` with every pixel `color`.
pub fn assert_uniform(path: &Path, width: u32, height: u32, color: Color) {
    let img = image::open(path)
        .unwrap_or_else(|e| panic!("failed to decode {}: {e}", path.display()))
        .to_rgb8();
    assert_eq!(img.dimensions(), (width, height), "{}", path.display());
    if let Some((x, y, px)) = img.enumerate_pixels().find(|(_, _, p)| p.0 != color.to_array()) {
        panic!("pixel ({x}, {y}) is {:?}, expected {:?}", px.0, color.to_array());
    }
}

/// Color constants for tests
pub const TEST_RED: Color = Color { r: 255, g: 0, b: 0 };
pub const TEST_BLUE: Color = Color { r: 0, g: 0, b: 255 };
