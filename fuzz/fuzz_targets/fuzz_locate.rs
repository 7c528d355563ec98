#![no_main]

use bmt_core::{JPEG_EOI, JPEG_SOI, locate_jpeg};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(span) = locate_jpeg(data) {
        let image = span.slice(data).expect("span must fit the buffer");
        assert_eq!(image[..2], JPEG_SOI);
        assert_eq!(image[image.len() - 2..], JPEG_EOI);
    }
});
