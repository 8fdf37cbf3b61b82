use chrono::NaiveDate;
use school_planner::utils::datetime;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_date() {
    assert_eq!(datetime::parse_date("2024-03-15").unwrap(), date(2024, 3, 15));
    assert_eq!(datetime::parse_date(" 2024-03-15 ").unwrap(), date(2024, 3, 15));
    assert!(datetime::parse_date("15/03/2024").is_err());
}

#[test]
fn test_parse_form_date_accepts_garbage_as_none() {
    assert_eq!(datetime::parse_form_date("2024-01-02"), Some(date(2024, 1, 2)));
    assert_eq!(datetime::parse_form_date(""), None);
    assert_eq!(datetime::parse_form_date("tomorrow"), None);
}

#[test]
fn test_format_ymd() {
    assert_eq!(datetime::format_ymd(date(2024, 1, 5)), "2024-01-05");
}

#[test]
fn test_format_optional() {
    assert_eq!(datetime::format_optional(Some(date(2024, 1, 5)), "%d/%m/%Y"), "05/01/2024");
    assert_eq!(datetime::format_optional(None, "%d/%m/%Y"), "No date");
}

#[test]
fn test_format_relative_date() {
    let today = date(2024, 3, 15);
    assert_eq!(datetime::format_relative_date(today, today), "today");
    assert_eq!(datetime::format_relative_date(date(2024, 3, 16), today), "tomorrow");
    assert_eq!(datetime::format_relative_date(date(2024, 3, 14), today), "yesterday");
    assert_eq!(datetime::format_relative_date(date(2024, 3, 30), today), "in 15 days");
    assert_eq!(datetime::format_relative_date(date(2024, 1, 2), today), "Jan 02");
}
