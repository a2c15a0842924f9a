use chrono::NaiveDate;

/// `01 Jan 2024`
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// `1 record`, `3 records`
pub fn record_count(n: usize) -> String {
    format!("{n} record{}", if n == 1 { "" } else { "s" })
}
