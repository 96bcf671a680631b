use chrono::{Month, NaiveDate};

/// Calendar bounds of a report period line such as
/// `"Feb 26, 2025 to Mar 1, 2025"`.
pub fn period_bounds(text: &str) -> Option<(NaiveDate, NaiveDate)> {
    // Handles variants such as:
    // - "Feb 26, 2025 to Feb 26, 2025"
    // - "Report period: February 1, 2025 to February 28, 2025."
    let re = regex::Regex::new(
        r"(\w+)\s+(\d{1,2}),\s*(\d{4})\s+to\s+(\w+)\s+(\d{1,2}),\s*(\d{4})",
    )
    .ok()?;
    let caps = re.captures(text)?;

    let start = date_from_parts(
        caps.get(1)?.as_str(),
        caps.get(2)?.as_str(),
        caps.get(3)?.as_str(),
    )?;
    let end = date_from_parts(
        caps.get(4)?.as_str(),
        caps.get(5)?.as_str(),
        caps.get(6)?.as_str(),
    )?;
    Some((start, end))
}

fn date_from_parts(month_str: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let day = day.parse::<u32>().ok()?;
    let year = year.parse::<i32>().ok()?;

    let month: u32 = match month_str.to_lowercase().as_str() {
        "jan" | "january" => Month::January,
        "feb" | "february" => Month::February,
        "mar" | "march" => Month::March,
        "apr" | "april" => Month::April,
        "may" => Month::May,
        "jun" | "june" => Month::June,
        "jul" | "july" => Month::July,
        "aug" | "august" => Month::August,
        "sep" | "sept" | "september" => Month::September,
        "oct" | "october" => Month::October,
        "nov" | "november" => Month::November,
        "dec" | "december" => Month::December,
        _ => return None,
    }
    .number_from_month();

    NaiveDate::from_ymd_opt(year, month, day)
}
