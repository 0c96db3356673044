use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{encode_placeholder, GenerationError, PlaceholderConfig};

/// Render, encode and write the placeholder to `config.output`.
///
/// An existing file at the path is replaced. Encoding happens before the file
/// is opened, so a failed encode leaves the filesystem untouched. A file that
/// was created but could not be fully written is removed (best-effort).
pub fn write_placeholder(config: &PlaceholderConfig) -> Result<PathBuf, GenerationError> {
    let (format, bytes) = encode_placeholder(config)?;
    let path = config.output.as_path();

    let mut file = File::create(path).map_err(|e| io_error(path, e))?;
    if let Err(e) = file.write_all(&bytes).and_then(|()| file.sync_all()) {
        drop(file);
        if let Err(cleanup) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %cleanup, "failed to remove partial image");
        }
        return Err(io_error(path, e));
    }

    info!(
        path = %path.display(),
        ?format,
        width = config.width,
        height = config.height,
        bytes = bytes.len(),
        "wrote placeholder image"
    );
    Ok(path.to_path_buf())
}

fn io_error(path: &Path, source: std::io::Error) -> GenerationError {
    GenerationError::Io {
        path: path.to_path_buf(),
        source,
    }
}
