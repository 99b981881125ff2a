use chrono::{Local, NaiveDate};

/// Current calendar date in the local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date the way certificates print it (DD/MM/YYYY)
pub fn format_certificate_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Local timestamp used in log lines
pub fn log_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
