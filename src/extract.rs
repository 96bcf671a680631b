use anyhow::Context;
use std::path::Path;

/// Read a report PDF and return its text, one page after another.
pub fn extract_report_text(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read report {}", path.display()))?;
    extract_report_text_from_mem(&bytes)
        .with_context(|| format!("failed to extract text from {}", path.display()))
}

pub fn extract_report_text_from_mem(bytes: &[u8]) -> anyhow::Result<String> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)?;
    tracing::debug!(pages = pages.len(), "extracted report pages");
    Ok(join_pages(&pages))
}

/// Each page's text followed by a newline, in page order. Pages without
/// text still contribute their separator.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(page.as_ref());
        text.push('\n');
    }
    text
}
