//! Printable-string scanning for unknown container data.
//!
//! BMT files keep their sensor metadata next to the image. Dumping the
//! printable runs is usually the quickest way to see what a given camera
//! firmware stores there.

use serde::Serialize;

pub const DEFAULT_MIN_LEN: usize = 4;
pub const DEFAULT_KEYWORDS: &[&str] = &["Temp", "Emissivity", "deg", "Date", "Time", "Testo"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintableString {
    pub offset: usize,
    pub text: String,
}

#[inline]
fn is_printable(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

/// Collects maximal runs of printable ASCII at least `min_len` bytes long.
#[must_use]
pub fn printable_strings(data: &[u8], min_len: usize) -> Vec<PrintableString> {
    let min_len = min_len.max(1);
    let mut found = Vec::new();
    let mut run_start = None;

    for (i, &byte) in data.iter().enumerate() {
        match (is_printable(byte), run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                push_run(data, start, i, min_len, &mut found);
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        push_run(data, start, data.len(), min_len, &mut found);
    }

    found
}

fn push_run(data: &[u8], start: usize, end: usize, min_len: usize, out: &mut Vec<PrintableString>) {
    if end - start < min_len {
        return;
    }
    // Printable ASCII is always valid UTF-8.
    let text = String::from_utf8_lossy(&data[start..end]).into_owned();
    out.push(PrintableString {
        offset: start,
        text,
    });
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordHits<'a> {
    pub keyword: String,
    pub matches: Vec<&'a PrintableString>,
}

/// Groups strings by the keywords they contain. Keywords without a match
/// are left out.
#[must_use]
pub fn keyword_hits<'a, K: AsRef<str>>(
    strings: &'a [PrintableString],
    keywords: &[K],
) -> Vec<KeywordHits<'a>> {
    keywords
        .iter()
        .filter_map(|kw| {
            let kw = kw.as_ref();
            let matches: Vec<_> = strings.iter().filter(|s| s.text.contains(kw)).collect();
            (!matches.is_empty()).then(|| KeywordHits {
                keyword: kw.to_string(),
                matches,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_runs_with_offsets() {
        let data = b"\x00\x01ToFo\xFFab\x00Emissivity";
        let strings = printable_strings(data, 4);

        assert_eq!(
            strings,
            vec![
                PrintableString {
                    offset: 2,
                    text: "ToFo".into()
                },
                PrintableString {
                    offset: 10,
                    text: "Emissivity".into()
                },
            ]
        );
    }

    #[test]
    fn zero_min_len_behaves_like_one() {
        let strings = printable_strings(b"a\x00b", 0);
        assert_eq!(strings.len(), 2);
    }

    #[test]
    fn empty_input() {
        assert!(printable_strings(&[], 4).is_empty());
    }

    #[test]
    fn keyword_hits_skip_missing_keywords() {
        let strings = printable_strings(b"TempMax\x00TempMin\x00DateTime\x00", 4);
        let hits = keyword_hits(&strings, DEFAULT_KEYWORDS);

        let keywords: Vec<_> = hits.iter().map(|h| h.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["Temp", "Date", "Time"]);
        assert_eq!(hits[0].matches.len(), 2);
        assert_eq!(hits[2].matches[0].text, "DateTime");
    }
}
