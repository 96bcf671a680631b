//! Numeric extraction helpers for loosely formatted report lines.
//!
//! All helpers drop thousands separators before matching and never fail:
//! a missing number yields zero (or `None` for the composition helpers).
use regex::Regex;
use std::sync::LazyLock;

static INT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

// A run of digits and dots that holds at least one digit, so a stray
// "approx." never shadows the number that follows it.
static FLOAT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9.]*[0-9][0-9.]*").unwrap());

static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9.]*[0-9][0-9.]*)%").unwrap());

static STANDALONE_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b([0-9]+)\b").unwrap());

/// Remove thousands separators, e.g. `"6,561"` -> `"6561"`.
pub fn remove_commas(s: &str) -> String {
    s.replace(',', "")
}

/// First run of digits in `s`, or 0.
pub fn extract_int(s: &str) -> u64 {
    let cleaned = remove_commas(s);
    INT_RUN
        .find(&cleaned)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// First run of digits and dots in `s` read as a decimal, or 0.0.
///
/// A run with several dots (`"1.2.3"`) is read up to its second dot.
pub fn extract_float(s: &str) -> f64 {
    let cleaned = remove_commas(s);
    FLOAT_RUN
        .find(&cleaned)
        .map(|m| leading_decimal(m.as_str()))
        .unwrap_or(0.0)
}

/// Value of the first `NN.N%` token, as written in the report.
pub fn extract_percent(s: &str) -> Option<f64> {
    let cleaned = remove_commas(s);
    let caps = PERCENT.captures(&cleaned)?;
    Some(leading_decimal(caps.get(1)?.as_str()))
}

/// First word-bounded integer in `s` once every percentage token is removed.
///
/// `"82.3% 4,500"` yields 4500; the digits of the percentage are never
/// mistaken for the count.
pub fn extract_count(s: &str) -> Option<u64> {
    let cleaned = remove_commas(s);
    let without_percent = PERCENT.replace_all(&cleaned, " ");
    let caps = STANDALONE_INT.captures(&without_percent)?;
    caps.get(1)?.as_str().parse().ok()
}

// Extra leading dots are dropped (`"..5"` reads as `.5`), then the run is cut
// at its second dot.
fn leading_decimal(run: &str) -> f64 {
    let first_digit = run.find(|c: char| c.is_ascii_digit()).unwrap_or(0);
    let run = &run[first_digit.saturating_sub(1)..];
    let end = run
        .match_indices('.')
        .nth(1)
        .map_or(run.len(), |(idx, _)| idx);
    run[..end].trim_end_matches('.').parse().unwrap_or(0.0)
}
