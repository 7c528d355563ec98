use crate::error::{CoreError, Result};
use crate::types::JpegSpan;
use memchr::memmem::Finder;

pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];
pub const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];
pub const MARKER_LEN: usize = 2;

/// Searches a buffer for the first SOI marker and the first EOI marker
/// that follows it.
///
/// Only the first EOI after the SOI is considered. When a file carries a
/// thumbnail with its own SOI/EOI pair, the span may stop at the
/// thumbnail's EOI instead of the main image's.
#[derive(Debug, Clone)]
pub struct MarkerScanner {
    start_finder: Finder<'static>,
    end_finder: Finder<'static>,
}

impl Default for MarkerScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerScanner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_finder: Finder::new(&JPEG_SOI),
            end_finder: Finder::new(&JPEG_EOI),
        }
    }

    #[inline]
    #[must_use]
    pub fn find_start(&self, buffer: &[u8]) -> Option<usize> {
        self.start_finder.find(buffer)
    }

    /// First EOI at or after `from`, as an absolute offset.
    #[inline]
    #[must_use]
    pub fn find_end(&self, buffer: &[u8], from: usize) -> Option<usize> {
        let tail = buffer.get(from..)?;
        self.end_finder.find(tail).map(|pos| from + pos)
    }

    pub fn locate(&self, buffer: &[u8]) -> Result<JpegSpan> {
        let start = self
            .find_start(buffer)
            .ok_or(CoreError::StartMarkerNotFound)?;

        // The EOI search starts on the SOI itself, not after it.
        let end = self
            .find_end(buffer, start)
            .ok_or(CoreError::EndMarkerNotFound { start })?;

        Ok(JpegSpan::new(start, end))
    }
}

/// Locates the first embedded JPEG in `buffer`.
pub fn locate_jpeg(buffer: &[u8]) -> Result<JpegSpan> {
    MarkerScanner::new().locate(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_start_single_match() {
        let scanner = MarkerScanner::new();

        let buffer: Vec<u8> = [
            &[0x00, 0x11, 0x22, 0x33, 0x44][..],
            &[0xFF, 0xD8][..],
            &[0xAA, 0xBB][..],
        ]
        .concat();

        assert_eq!(scanner.find_start(&buffer), Some(5));
    }

    #[test]
    fn find_end_respects_offset() {
        let scanner = MarkerScanner::new();
        let buffer = [0xFF, 0xD9, 0x00, 0xFF, 0xD9];

        assert_eq!(scanner.find_end(&buffer, 0), Some(0));
        assert_eq!(scanner.find_end(&buffer, 1), Some(3));
        assert_eq!(scanner.find_end(&buffer, 4), None);
        assert_eq!(scanner.find_end(&buffer, 5), None);
        assert_eq!(scanner.find_end(&buffer, 99), None);
    }

    #[test]
    fn locate_scenario() {
        let buffer = [0x00, 0xFF, 0xD8, 0x12, 0x34, 0xFF, 0xD9, 0x00];
        let span = locate_jpeg(&buffer).unwrap();

        assert_eq!(span, JpegSpan::new(1, 5));
        assert_eq!(
            span.slice(&buffer).unwrap(),
            &[0xFF, 0xD8, 0x12, 0x34, 0xFF, 0xD9]
        );
    }

    #[test]
    fn locate_minimal_image() {
        let buffer = [0xFF, 0xD8, 0xFF, 0xD9];
        let span = locate_jpeg(&buffer).unwrap();
        assert_eq!(span.slice(&buffer).unwrap(), &buffer[..]);
    }

    #[test]
    fn locate_ignores_eoi_before_soi() {
        let buffer = [0xFF, 0xD9, 0x00, 0xFF, 0xD8, 0x01, 0xFF, 0xD9];
        assert_eq!(locate_jpeg(&buffer).unwrap(), JpegSpan::new(3, 6));
    }

    #[test]
    fn locate_stops_at_first_eoi() {
        // Thumbnail EOI at 6 ends the span, the trailing one is ignored.
        let buffer = [
            0xFF, 0xD8, 0xFF, 0xD8, 0x00, 0x00, 0xFF, 0xD9, 0x11, 0xFF, 0xD9,
        ];
        assert_eq!(locate_jpeg(&buffer).unwrap(), JpegSpan::new(0, 6));
    }

    #[test]
    fn locate_missing_start() {
        let err = locate_jpeg(&[0x00, 0xFF, 0xD9, 0xFF]).unwrap_err();
        assert!(matches!(err, CoreError::StartMarkerNotFound));
    }

    #[test]
    fn locate_missing_end() {
        let err = locate_jpeg(&[0xFF, 0xD9, 0x00, 0xFF, 0xD8, 0x00]).unwrap_err();
        assert!(matches!(err, CoreError::EndMarkerNotFound { start: 3 }));
        assert!(err.is_not_found());
    }

    #[test]
    fn locate_empty_buffer() {
        assert!(matches!(
            locate_jpeg(&[]),
            Err(CoreError::StartMarkerNotFound)
        ));
    }
}
