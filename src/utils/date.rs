use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, TimeZone};

/// Parse a start date as sent by the API.
///
/// Accepts RFC 3339 timestamps (offset kept as-is) and bare `YYYY-MM-DD`
/// dates, which are read as midnight UTC.
pub fn parse_start_date(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let utc = FixedOffset::east_opt(0)?;
    utc.from_local_datetime(&d.and_time(NaiveTime::MIN)).single()
}

/// Calendar-day addition in the date's own offset.
///
/// Saturates at the input when the result would overflow chrono's range.
pub fn add_days(start: DateTime<FixedOffset>, days: u32) -> DateTime<FixedOffset> {
    start
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(start)
}

/// `dd/mm/yyyy`, as shown in the table.
pub fn format_dmy(d: &DateTime<FixedOffset>) -> String {
    d.format("%d/%m/%Y").to_string()
}
