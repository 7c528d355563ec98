use serde::Serialize;
use std::ops::Range;
use std::path::PathBuf;

use crate::markers::MARKER_LEN;

/// Location of an embedded JPEG inside a source buffer.
///
/// `end` is the offset of the EOI marker itself, so the image occupies
/// `start..end + MARKER_LEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct JpegSpan {
    pub start: usize,
    pub end: usize,
}

impl JpegSpan {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end + MARKER_LEN
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end + MARKER_LEN - self.start
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the image bytes, or `None` if the span does not fit `buf`.
    #[must_use]
    pub fn slice<'a>(&self, buf: &'a [u8]) -> Option<&'a [u8]> {
        buf.get(self.range())
    }
}

impl std::fmt::Display for JpegSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}..{:#x}", self.start, self.end + MARKER_LEN)
    }
}

/// Outcome of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub span: JpegSpan,
    pub bytes_written: u64,
    pub dimensions: Option<(usize, usize)>,
}
