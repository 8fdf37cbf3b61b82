//! Date and time utility functions
//!
//! This module provides functions for date parsing and human-readable
//! formatting of event dates relative to "today" (e.g. "yesterday", "today",
//! "tomorrow").

use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Standard date format used by forms and the configuration file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)
}

/// Parse the date field of a form. Empty or malformed input is accepted and
/// simply yields no date.
pub fn parse_form_date(input: &str) -> Option<NaiveDate> {
    parse_date(input).ok()
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format an optional date with a strftime pattern, "No date" when absent
pub fn format_optional(date: Option<NaiveDate>, format: &str) -> String {
    match date {
        Some(d) => d.format(format).to_string(),
        None => "No date".to_string(),
    }
}

/// Human-readable label for `date` as seen from `today`
///
/// # Arguments
/// * `date` - The date to describe
/// * `today` - The reference date
///
/// # Returns
/// * `String` - "today", "next Monday", "in 12 days", "Jan 15", ...
pub fn format_relative_date(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
