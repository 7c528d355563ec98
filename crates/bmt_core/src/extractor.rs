use std::fs;
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::markers::MarkerScanner;
use crate::types::Extraction;

/// Copies the first embedded JPEG of `source` into `destination`.
///
/// The whole source is read into memory. `destination` is created or
/// truncated, and is only touched once both markers have been found.
pub fn extract_jpeg(source: &Path, destination: &Path) -> Result<Extraction> {
    let data = fs::read(source).map_err(|e| CoreError::io(source, e))?;
    tracing::debug!(path = %source.display(), size = data.len(), "read source");

    let span = MarkerScanner::new().locate(&data)?;
    tracing::debug!(start = span.start, end = span.end, "located embedded JPEG");

    let image = &data[span.range()];
    fs::write(destination, image).map_err(|e| CoreError::io(destination, e))?;

    Ok(Extraction {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        span,
        bytes_written: image.len() as u64,
        dimensions: crate::image_dimensions(image),
    })
}

/// Runs [`extract_jpeg`] and reports the outcome through the log.
///
/// Returns `true` once the image has been written. Missing markers and I/O
/// failures are logged and turned into `false`.
pub fn extract(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> bool {
    let source = source.as_ref();
    let destination = destination.as_ref();

    match extract_jpeg(source, destination) {
        Ok(extraction) => {
            tracing::info!(
                bytes = extraction.bytes_written,
                source = %extraction.source.display(),
                "Successfully extracted image to {}",
                extraction.destination.display()
            );
            true
        }
        Err(CoreError::StartMarkerNotFound) => {
            tracing::warn!("No JPEG start marker found in {}", source.display());
            false
        }
        Err(CoreError::EndMarkerNotFound { start }) => {
            tracing::warn!(
                start,
                "No JPEG end marker found in {}",
                source.display()
            );
            false
        }
        Err(e) => {
            tracing::error!("Error processing {}: {}", source.display(), e);
            false
        }
    }
}
