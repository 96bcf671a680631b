//! Line classifier for executive summary report text.
//!
//! The report text is split into trimmed, non-empty lines. The first line
//! that holds a `"Feb 26, 2025 to Mar 1, 2025"` style range becomes the
//! report period; every line is then run through [`RULES`] and handled by the
//! first rule that claims it.
use crate::metrics::ReportMetrics;
use crate::numbers::{extract_count, extract_float, extract_int, extract_percent};
use regex::Regex;
use std::sync::LazyLock;

static DATE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+ \d{1,2}, \d{4} to \w+ \d{1,2}, \d{4}").unwrap());

static DIGITS_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9,]+$").unwrap());

/// Parser variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Collect bare numeric lines into `daily_totals`.
    pub daily_totals: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { daily_totals: true }
    }
}

enum Matcher {
    /// Line starts with the text; the rest of the line is handed on.
    Prefix(&'static str),
    /// Lowercased line contains any of the words; the whole line is handed on.
    Keywords(&'static [&'static str]),
    /// Line is nothing but digits and commas.
    DigitsOnly,
}

struct Rule {
    name: &'static str,
    matcher: Matcher,
    apply: fn(&mut ReportMetrics, &str),
}

/// Classification order. Prefix rules come before keyword rules so that a
/// `"Print:"` line mentioning "hours" still lands on `print_count`.
const RULES: &[Rule] = &[
    Rule {
        name: "days_in_period",
        matcher: Matcher::Prefix("Days in period:"),
        apply: |m, s| m.days_in_period = extract_int(s),
    },
    Rule {
        name: "active_users",
        matcher: Matcher::Prefix("Active Users:"),
        apply: |m, s| m.active_users = extract_int(s),
    },
    Rule {
        name: "active_printers",
        matcher: Matcher::Prefix("Active Printers:"),
        apply: |m, s| m.active_printers = extract_int(s),
    },
    Rule {
        name: "total_pages",
        matcher: Matcher::Prefix("Total Printed Pages:"),
        apply: |m, s| m.total_pages = extract_int(s),
    },
    Rule {
        name: "total_sheets",
        matcher: Matcher::Prefix("Total Printed Sheets:"),
        apply: |m, s| m.total_sheets = extract_int(s),
    },
    Rule {
        name: "total_jobs",
        matcher: Matcher::Prefix("Total Jobs:"),
        apply: |m, s| m.total_jobs = extract_int(s),
    },
    Rule {
        name: "pages_per_day",
        matcher: Matcher::Prefix("Pages per day:"),
        apply: |m, s| m.pages_per_day = extract_int(s),
    },
    Rule {
        name: "sheets_per_day",
        matcher: Matcher::Prefix("Sheets per day:"),
        apply: |m, s| m.sheets_per_day = extract_int(s),
    },
    Rule {
        name: "scan_count",
        matcher: Matcher::Prefix("Scan:"),
        apply: |m, s| m.scan_count = extract_int(s),
    },
    Rule {
        name: "copy_count",
        matcher: Matcher::Prefix("Copy:"),
        apply: |m, s| m.copy_count = extract_int(s),
    },
    Rule {
        name: "print_count",
        matcher: Matcher::Prefix("Print:"),
        apply: |m, s| m.print_count = extract_int(s),
    },
    Rule {
        name: "fax_count",
        matcher: Matcher::Prefix("Fax:"),
        apply: |m, s| m.fax_count = extract_int(s),
    },
    Rule {
        name: "grayscale",
        matcher: Matcher::Prefix("Grayscale:"),
        apply: |m, s| {
            if let Some(pct) = extract_percent(s) {
                m.grayscale_pct = pct;
            }
            if let Some(count) = extract_count(s) {
                m.grayscale_count = count;
            }
        },
    },
    Rule {
        name: "color",
        matcher: Matcher::Prefix("Color:"),
        apply: |m, s| {
            if let Some(pct) = extract_percent(s) {
                m.color_pct = pct;
            }
            if let Some(count) = extract_count(s) {
                m.color_count = count;
            }
        },
    },
    Rule {
        name: "duplex_pct",
        matcher: Matcher::Prefix("Duplex:"),
        apply: |m, s| {
            if let Some(pct) = extract_percent(s) {
                m.duplex_pct = pct;
            }
        },
    },
    Rule {
        name: "simplex_pct",
        matcher: Matcher::Prefix("Simplex:"),
        apply: |m, s| {
            if let Some(pct) = extract_percent(s) {
                m.simplex_pct = pct;
            }
        },
    },
    Rule {
        name: "trees_consumed",
        matcher: Matcher::Keywords(&["trees"]),
        apply: |m, s| m.trees_consumed = extract_float(s),
    },
    Rule {
        name: "co2_produced",
        matcher: Matcher::Keywords(&["grams", "kg"]),
        apply: |m, s| m.co2_produced = extract_float(s),
    },
    Rule {
        name: "env_bulb_hours",
        matcher: Matcher::Keywords(&["hours"]),
        apply: |m, s| m.env_bulb_hours = extract_float(s),
    },
    Rule {
        name: "daily_totals",
        matcher: Matcher::DigitsOnly,
        apply: |m, s| {
            let value = extract_int(s);
            if value > 0 {
                m.daily_totals.push(value);
            }
        },
    },
];

impl Rule {
    /// Returns the slice of `line` the rule extracts from, if it claims it.
    fn claim<'a>(&self, line: &'a str, lower: &str) -> Option<&'a str> {
        match self.matcher {
            Matcher::Prefix(prefix) => line.strip_prefix(prefix).map(str::trim),
            Matcher::Keywords(words) => words.iter().any(|w| lower.contains(w)).then_some(line),
            Matcher::DigitsOnly => DIGITS_ONLY.is_match(line).then_some(line),
        }
    }
}

/// Turns report text into [`ReportMetrics`]. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportParser {
    options: ParserOptions,
}

impl ReportParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Parse the full report text. Unrecognized lines are skipped.
    pub fn parse(&self, text: &str) -> ReportMetrics {
        let mut metrics = ReportMetrics::default();
        let lines = report_lines(text);

        if let Some(period) = find_report_period(&lines) {
            metrics.report_period = period.to_string();
        }

        let mut recognized = 0usize;
        for line in &lines {
            let lower = line.to_lowercase();
            for rule in RULES {
                if matches!(rule.matcher, Matcher::DigitsOnly) && !self.options.daily_totals {
                    continue;
                }
                if let Some(rest) = rule.claim(line, &lower) {
                    tracing::trace!(rule = rule.name, line = %line, "classified report line");
                    (rule.apply)(&mut metrics, rest);
                    recognized += 1;
                    break;
                }
            }
        }

        tracing::debug!(
            lines = lines.len(),
            recognized,
            period = %metrics.report_period,
            "parsed report text"
        );
        metrics
    }
}

/// Parse with the default options (daily totals collected).
pub fn parse_report(text: &str) -> ReportMetrics {
    ReportParser::default().parse(text)
}

fn report_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn find_report_period<'a>(lines: &[&'a str]) -> Option<&'a str> {
    lines.iter().copied().find(|line| DATE_RANGE.is_match(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_period() {
        let metrics = parse_report("Days in period: 30");
        assert_eq!(metrics.days_in_period, 30);
    }

    #[test]
    fn test_prefix_fields_with_commas() {
        let text = "\
Active Users: 412
Active Printers: 37
Total Printed Pages: 6,561
Total Printed Sheets: 4,902
Total Jobs: 1,208
Pages per day: 218
Sheets per day: 163";
        let metrics = parse_report(text);
        assert_eq!(metrics.active_users, 412);
        assert_eq!(metrics.active_printers, 37);
        assert_eq!(metrics.total_pages, 6561);
        assert_eq!(metrics.total_sheets, 4902);
        assert_eq!(metrics.total_jobs, 1208);
        assert_eq!(metrics.pages_per_day, 218);
        assert_eq!(metrics.sheets_per_day, 163);
    }

    #[test]
    fn test_grayscale_percentage_and_count() {
        let metrics = parse_report("Grayscale: 82.3% 4500");
        assert_eq!(metrics.grayscale_pct, 82.3);
        assert_eq!(metrics.grayscale_count, 4500);
    }

    #[test]
    fn test_color_percentage_without_count() {
        let metrics = parse_report("Color: 17.7%");
        assert_eq!(metrics.color_pct, 17.7);
        assert_eq!(metrics.color_count, 0);
    }

    #[test]
    fn test_color_count_without_percentage() {
        let metrics = parse_report("Color: 966 pages");
        assert_eq!(metrics.color_pct, 0.0);
        assert_eq!(metrics.color_count, 966);
    }

    #[test]
    fn test_duplex_only_sets_percentage() {
        let metrics = parse_report("Duplex: 61.2% 3000\nSimplex: 38.8% 1902");
        assert_eq!(metrics.duplex_pct, 61.2);
        assert_eq!(metrics.simplex_pct, 38.8);
        assert_eq!(metrics.grayscale_count, 0);
        assert_eq!(metrics.color_count, 0);
    }

    #[test]
    fn test_job_type_counts() {
        let metrics = parse_report("Scan: 45\nCopy: 120\nPrint: 1,020\nFax: 3");
        assert_eq!(metrics.scan_count, 45);
        assert_eq!(metrics.copy_count, 120);
        assert_eq!(metrics.print_count, 1020);
        assert_eq!(metrics.fax_count, 3);
    }

    #[test]
    fn test_environmental_keywords() {
        let text = "\
0.59 trees consumed
12.5 kg of CO2
Equivalent to 1,250.5 hours of a 60W bulb";
        let metrics = parse_report(text);
        assert_eq!(metrics.trees_consumed, 0.59);
        assert_eq!(metrics.co2_produced, 12.5);
        assert_eq!(metrics.env_bulb_hours, 1250.5);
    }

    #[test]
    fn test_co2_label_digit_is_read_first() {
        let metrics = parse_report("CO2 produced: 12.5 kg");
        assert_eq!(metrics.co2_produced, 2.0);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let metrics = parse_report("TREES: 2.5\n830 GRAMS of CO2\nBulb HOURS 40");
        assert_eq!(metrics.trees_consumed, 2.5);
        assert_eq!(metrics.co2_produced, 830.0);
        assert_eq!(metrics.env_bulb_hours, 40.0);
    }

    #[test]
    fn test_prefix_rules_win_over_keywords() {
        let metrics = parse_report("Print: 40 jobs over 8 hours");
        assert_eq!(metrics.print_count, 40);
        assert_eq!(metrics.env_bulb_hours, 0.0);
    }

    #[test]
    fn test_first_keyword_rule_wins() {
        let metrics = parse_report("3 trees and 12 kg");
        assert_eq!(metrics.trees_consumed, 3.0);
        assert_eq!(metrics.co2_produced, 0.0);
    }

    #[test]
    fn test_report_period_first_match_wins() {
        let text = "\
Executive Summary
Feb 26, 2025 to Mar 1, 2025
Days in period: 4
Jan 1, 2024 to Jan 2, 2024";
        let metrics = parse_report(text);
        assert_eq!(metrics.report_period, "Feb 26, 2025 to Mar 1, 2025");
    }

    #[test]
    fn test_report_period_keeps_whole_line() {
        let metrics = parse_report("   Report period: Feb 26, 2025 to Feb 26, 2025.  ");
        assert_eq!(
            metrics.report_period,
            "Report period: Feb 26, 2025 to Feb 26, 2025."
        );
    }

    #[test]
    fn test_daily_totals_skip_zero() {
        let metrics = parse_report("120\n0\n45");
        assert_eq!(metrics.daily_totals, vec![120, 45]);
    }

    #[test]
    fn test_daily_totals_with_commas() {
        let metrics = parse_report("1,204\n,\n98");
        assert_eq!(metrics.daily_totals, vec![1204, 98]);
    }

    #[test]
    fn test_daily_totals_disabled() {
        let parser = ReportParser::new(ParserOptions {
            daily_totals: false,
        });
        assert!(!parser.options().daily_totals);
        assert!(ReportParser::default().options().daily_totals);
        let metrics = parser.parse("120\n45\nDays in period: 2");
        assert!(metrics.daily_totals.is_empty());
        assert_eq!(metrics.days_in_period, 2);
    }

    #[test]
    fn test_unrecognized_text_is_default() {
        let metrics = parse_report("Lorem ipsum\n\n   dolor sit amet\nPage 1 of 3: summary");
        assert_eq!(metrics, ReportMetrics::default());
    }

    #[test]
    fn test_empty_text_is_default() {
        assert!(parse_report("").is_empty());
        assert!(parse_report("\n\n   \n").is_empty());
    }

    #[test]
    fn test_prefix_without_number_is_zero() {
        let metrics = parse_report("Active Users: n/a");
        assert_eq!(metrics.active_users, 0);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "Feb 26, 2025 to Feb 26, 2025\nTotal Jobs: 9\nGrayscale: 50% 10\n7";
        let parser = ReportParser::default();
        assert_eq!(parser.parse(text), parser.parse(text));
    }

    #[test]
    fn test_lines_are_trimmed() {
        let metrics = parse_report("\t  Total Jobs:   77   \r\n");
        assert_eq!(metrics.total_jobs, 77);
    }
}
