mod error;
pub mod extractor;
pub mod markers;
pub mod strings;
mod types;

pub use error::{CoreError, Result};
pub use extractor::{extract, extract_jpeg};
pub use markers::{JPEG_EOI, JPEG_SOI, MARKER_LEN, MarkerScanner, locate_jpeg};
pub use types::{Extraction, JpegSpan};

/// Width and height from the frame header, when one can be parsed.
pub fn image_dimensions(data: &[u8]) -> Option<(usize, usize)> {
    imagesize::blob_size(data)
        .ok()
        .map(|size| (size.width, size.height))
}
