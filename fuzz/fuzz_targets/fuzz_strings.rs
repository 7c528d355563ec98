#![no_main]

use bmt_core::strings::printable_strings;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for s in printable_strings(data, 1) {
        assert_eq!(&data[s.offset..s.offset + s.text.len()], s.text.as_bytes());
    }
});
