use anyhow::{Context, Result};
use bmt_core::strings::{self, KeywordHits, PrintableString};
use bmt_core::{CoreError, JpegSpan, MarkerScanner};
use console::style;
use humansize::{DECIMAL, format_size};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct InspectOptions {
    pub min_len: usize,
    pub limit: usize,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    path: String,
    size: usize,
    start_marker: Option<usize>,
    end_marker: Option<usize>,
    span: Option<JpegSpan>,
    image_len: Option<usize>,
    dimensions: Option<(usize, usize)>,
    strings_total: usize,
    strings: &'a [PrintableString],
    keywords: Vec<KeywordHits<'a>>,
}

pub fn run(path: &Path, options: &InspectOptions) -> Result<()> {
    let data = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let scanner = MarkerScanner::new();
    let located = scanner.locate(&data);
    let (start_marker, end_marker, span) = match &located {
        Ok(span) => (Some(span.start), Some(span.end), Some(*span)),
        Err(CoreError::EndMarkerNotFound { start }) => (Some(*start), None, None),
        Err(_) => (None, None, None),
    };
    let dimensions = span
        .and_then(|s| s.slice(&data))
        .and_then(bmt_core::image_dimensions);

    let found = strings::printable_strings(&data, options.min_len);
    let shown = &found[..found.len().min(options.limit)];
    let keywords = strings::keyword_hits(&found, strings::DEFAULT_KEYWORDS);

    let report = InspectReport {
        path: path.display().to_string(),
        size: data.len(),
        start_marker,
        end_marker,
        span,
        image_len: span.map(|s| s.len()),
        dimensions,
        strings_total: found.len(),
        strings: shown,
        keywords,
    };

    if options.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &InspectReport<'_>) {
    println!("{}", style(&report.path).cyan().bold());
    println!("Size:         {}", format_size(report.size as u64, DECIMAL));

    match report.start_marker {
        Some(offset) => println!("Start marker: {offset:#x}"),
        None => println!("Start marker: {}", style("not found").yellow()),
    }
    match (report.start_marker, report.end_marker) {
        (_, Some(offset)) => println!("End marker:   {offset:#x}"),
        (Some(_), None) => println!("End marker:   {}", style("not found").yellow()),
        (None, None) => {}
    }

    if let (Some(span), Some(len)) = (report.span, report.image_len) {
        println!(
            "Image:        {} ({})",
            span,
            format_size(len as u64, DECIMAL)
        );
    }
    if let Some((width, height)) = report.dimensions {
        println!("Dimensions:   {width}x{height}");
    }

    println!();
    println!(
        "{} ({} of {})",
        style("Printable strings").green().bold(),
        report.strings.len(),
        report.strings_total
    );
    for s in report.strings {
        println!("{:>8x}  {}", s.offset, s.text);
    }

    if !report.keywords.is_empty() {
        println!();
        println!("{}", style("Keyword matches").green().bold());
        for hit in &report.keywords {
            let texts: Vec<&str> = hit.matches.iter().map(|s| s.text.as_str()).collect();
            println!("{:<12} {}", hit.keyword, texts.join(", "));
        }
    }
}
