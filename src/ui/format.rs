//! Display helpers for the subscription section.
//!
//! Every helper here is total: malformed input produces a neutral value
//! ("0", an empty string, zero days) instead of an error.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use num_format::ToFormattedString;
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Days before expiry at which the section starts warning
pub const EXPIRING_SOON_DAYS: i64 = 7;

/// Number and date conventions used for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "uz-UZ")]
    UzUz,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "ru-RU")]
    RuRu,
}

impl Locale {
    fn number_locale(&self) -> num_format::Locale {
        match self {
            Self::UzUz => num_format::Locale::uz,
            Self::EnUs => num_format::Locale::en,
            Self::RuRu => num_format::Locale::ru,
        }
    }

    pub fn group_separator(&self) -> &'static str {
        self.number_locale().separator()
    }

    fn date_pattern(&self) -> &'static str {
        match self {
            Self::UzUz => "%d/%m/%Y",
            Self::EnUs => "%-m/%-d/%Y",
            Self::RuRu => "%d.%m.%Y",
        }
    }
}

/// Format a price with thousands grouping and no decimals.
pub fn format_price(price: f64, locale: Locale) -> String {
    if !price.is_finite() {
        return "0".to_string();
    }

    let rounded = price.round();
    if rounded == 0.0 {
        return "0".to_string();
    }

    (rounded as i64).to_formatted_string(&locale.number_locale())
}

/// An expiry date as the caller wrote it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParsedDate {
    /// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`, midnight UTC
    Calendar(NaiveDate),
    /// Date-time with an explicit offset
    Zoned(DateTime<FixedOffset>),
    /// Date-time without an offset, in local time
    Floating(NaiveDateTime),
}

impl ParsedDate {
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Some(Self::Zoned(dt));
        }

        // Offsets on minute-precision times; `%#z` has no `Z` form
        let zoned = match input.strip_suffix(['Z', 'z']) {
            Some(rest) => format!("{rest}+00:00"),
            None => input.to_string(),
        };
        if let Ok(dt) = DateTime::parse_from_str(&zoned, "%Y-%m-%dT%H:%M%#z") {
            return Some(Self::Zoned(dt));
        }

        for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(input, pattern) {
                return Some(Self::Floating(dt));
            }
        }

        Self::parse_calendar(input).map(Self::Calendar)
    }

    /// Date-only forms, the reduced ones starting on the first day
    fn parse_calendar(input: &str) -> Option<NaiveDate> {
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

        match input.len() {
            7 => {
                let (year, month) = input.split_once('-')?;
                if year.len() != 4 || month.len() != 2 || !is_digits(year) || !is_digits(month) {
                    return None;
                }
                NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
            }
            4 if is_digits(input) => NaiveDate::from_ymd_opt(input.parse().ok()?, 1, 1),
            _ => NaiveDate::parse_from_str(input, "%Y-%m-%d").ok(),
        }
    }

    fn calendar_date(&self) -> NaiveDate {
        match self {
            Self::Calendar(date) => *date,
            Self::Zoned(dt) => dt.with_timezone(&Local).date_naive(),
            Self::Floating(dt) => dt.date(),
        }
    }

    fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Calendar(date) => Some(date.and_time(NaiveTime::MIN).and_utc()),
            Self::Zoned(dt) => Some(dt.with_timezone(&Utc)),
            // Skipped local times (DST gaps) have no instant
            Self::Floating(dt) => Local
                .from_local_datetime(dt)
                .earliest()
                .map(|local| local.with_timezone(&Utc)),
        }
    }
}

/// Format a date string as a calendar date, or "" when it cannot be parsed.
pub fn format_date(date: Option<&str>, locale: Locale) -> String {
    date.and_then(ParsedDate::parse)
        .map(|parsed| parsed.calendar_date().format(locale.date_pattern()).to_string())
        .unwrap_or_default()
}

/// Whole days until `date`, counting a partial day as a full one.
pub fn days_until_expiry(date: &str) -> i64 {
    days_until_expiry_at(date, Utc::now())
}

pub fn days_until_expiry_at(date: &str, now: DateTime<Utc>) -> i64 {
    let Some(expiry) = ParsedDate::parse(date).and_then(|parsed| parsed.instant()) else {
        return 0;
    };

    let millis = (expiry - now).num_milliseconds();
    // Integer division truncates toward zero, which is already the ceiling
    // for negative values.
    let days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

pub fn is_expiring_soon(days_until_expiry: i64) -> bool {
    days_until_expiry > 0 && days_until_expiry <= EXPIRING_SOON_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_price_grouping() {
        assert_eq!(format_price(1_234_567.0, Locale::EnUs), "1,234,567");

        let uz = Locale::UzUz.group_separator();
        assert_eq!(uz, "\u{a0}");
        assert_eq!(format_price(1_234_567.0, Locale::UzUz), format!("1{uz}234{uz}567"));

        let ru = Locale::RuRu.group_separator();
        assert_eq!(format_price(959_990.0, Locale::RuRu), format!("959{ru}990"));
        assert_eq!(format_price(999.0, Locale::EnUs), "999");
        assert_eq!(format_price(1000.0, Locale::EnUs), "1,000");
    }

    #[test]
    fn test_format_price_guards() {
        assert_eq!(format_price(0.0, Locale::UzUz), "0");
        assert_eq!(format_price(f64::NAN, Locale::UzUz), "0");
        assert_eq!(format_price(f64::INFINITY, Locale::EnUs), "0");
        assert_eq!(format_price(-0.3, Locale::EnUs), "0");
    }

    #[test]
    fn test_format_price_rounds_and_keeps_sign() {
        assert_eq!(format_price(89_997.6, Locale::EnUs), "89,998");
        assert_eq!(format_price(-1500.0, Locale::EnUs), "-1,500");
    }

    #[test]
    fn test_format_date_invalid() {
        assert_eq!(format_date(None, Locale::UzUz), "");
        assert_eq!(format_date(Some(""), Locale::UzUz), "");
        assert_eq!(format_date(Some("not-a-date"), Locale::UzUz), "");
        assert_eq!(format_date(Some("2026-02-30"), Locale::EnUs), "");
    }

    #[test]
    fn test_format_date_per_locale() {
        assert_eq!(format_date(Some("2026-01-05"), Locale::UzUz), "05/01/2026");
        assert_eq!(format_date(Some("2026-01-05"), Locale::EnUs), "1/5/2026");
        assert_eq!(format_date(Some("2026-01-05"), Locale::RuRu), "05.01.2026");
        assert_eq!(format_date(Some("2026-01-05T18:30:00"), Locale::RuRu), "05.01.2026");
    }

    #[test]
    fn test_days_until_expiry_boundaries() {
        let seven = (now() + Duration::days(7)).to_rfc3339();
        assert_eq!(days_until_expiry_at(&seven, now()), 7);
        assert!(is_expiring_soon(7));

        let eight = (now() + Duration::days(8)).to_rfc3339();
        assert_eq!(days_until_expiry_at(&eight, now()), 8);
        assert!(!is_expiring_soon(8));

        let past = (now() - Duration::days(2)).to_rfc3339();
        assert_eq!(days_until_expiry_at(&past, now()), -2);
        assert!(!is_expiring_soon(-2));
    }

    #[test]
    fn test_days_until_expiry_partial_day_rounds_up() {
        let soon = (now() + Duration::hours(1)).to_rfc3339();
        assert_eq!(days_until_expiry_at(&soon, now()), 1);

        let just_passed = (now() - Duration::hours(1)).to_rfc3339();
        assert_eq!(days_until_expiry_at(&just_passed, now()), 0);
        assert!(!is_expiring_soon(0));
    }

    #[test]
    fn test_days_until_expiry_plain_date_is_utc_midnight() {
        // 2026-03-12T00:00Z is 1.5 days after noon on the 10th
        assert_eq!(days_until_expiry_at("2026-03-12", now()), 2);
    }

    #[test]
    fn test_minute_precision_times_with_offset() {
        assert_eq!(days_until_expiry_at("2026-03-13T12:00Z", now()), 3);
        // 07:00 UTC, 2 days 19 hours away
        assert_eq!(days_until_expiry_at("2026-03-13T12:00+05:00", now()), 3);
        assert_eq!(days_until_expiry_at("2026-03-13T12:00+0500", now()), 3);

        let expected = Utc
            .with_ymd_and_hms(2026, 3, 13, 12, 0, 0)
            .unwrap()
            .with_timezone(&Local)
            .format("%d.%m.%Y")
            .to_string();
        assert_eq!(format_date(Some("2026-03-13T12:00Z"), Locale::RuRu), expected);
    }

    #[test]
    fn test_reduced_date_forms() {
        assert_eq!(format_date(Some("2026-03"), Locale::UzUz), "01/03/2026");
        assert_eq!(format_date(Some("2027"), Locale::EnUs), "1/1/2027");
        // 2026-04-01T00:00Z is 21.5 days after noon on 2026-03-10
        assert_eq!(days_until_expiry_at("2026-04", now()), 22);
        assert_eq!(days_until_expiry_at("2027", now()), 297);

        assert_eq!(format_date(Some("2026-13"), Locale::UzUz), "");
        assert_eq!(format_date(Some("26-03"), Locale::UzUz), "");
        assert_eq!(format_date(Some("2026-3-"), Locale::UzUz), "");
    }

    #[test]
    fn test_days_until_expiry_invalid() {
        assert_eq!(days_until_expiry_at("", now()), 0);
        assert_eq!(days_until_expiry_at("soon", now()), 0);
        assert_eq!(days_until_expiry(""), 0);
    }
}
