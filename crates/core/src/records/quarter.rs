//! Calendar quarters.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::RecordError;

/// One of the four 3-month periods of a calendar year.
///
/// Always within `1..=4`; out-of-range values are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Quarter(u8);

impl Quarter {
    /// January to March.
    pub const Q1: Self = Self(1);
    /// April to June.
    pub const Q2: Self = Self(2);
    /// July to September.
    pub const Q3: Self = Self(3);
    /// October to December.
    pub const Q4: Self = Self(4);

    /// Creates a quarter from its number.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::InvalidQuarter` unless `number` is 1 to 4.
    pub fn new(number: u8) -> Result<Self, RecordError> {
        Self::try_from(i64::from(number))
    }

    /// Quarter containing `date`: `floor(month0 / 3) + 1`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_date(date: NaiveDate) -> Self {
        // month0 is 0..=11, so the quotient is 0..=3
        Self((date.month0() / 3) as u8 + 1)
    }

    /// The quarter number, 1 to 4.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// First month (1-based) of the quarter.
    #[must_use]
    pub fn first_month(self) -> u32 {
        (u32::from(self.0) - 1) * 3 + 1
    }

    /// First day of the quarter in `year`.
    #[must_use]
    pub fn start_date(self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.first_month(), 1)
    }
}

impl TryFrom<i64> for Quarter {
    type Error = RecordError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(number @ 1..=4) => Ok(Self(number)),
            _ => Err(RecordError::InvalidQuarter(value)),
        }
    }
}

impl From<Quarter> for u8 {
    fn from(quarter: Quarter) -> Self {
        quarter.0
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quarter {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(['T', 't', 'Q', 'q'])
            .unwrap_or(trimmed);
        digits
            .parse::<i64>()
            .map_err(|_| RecordError::UnparsableQuarter(s.to_string()))
            .and_then(Self::try_from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2024, 1, 15), 1)]
    #[case(date(2024, 3, 31), 1)]
    #[case(date(2024, 4, 1), 2)]
    #[case(date(2024, 6, 30), 2)]
    #[case(date(2024, 9, 30), 3)]
    #[case(date(2024, 10, 1), 4)]
    #[case(date(2024, 12, 31), 4)]
    fn test_quarter_from_date(#[case] day: NaiveDate, #[case] expected: u8) {
        assert_eq!(Quarter::from_date(day).number(), expected);
    }

    #[test]
    fn test_quarter_bounds() {
        assert!(Quarter::new(0).is_err());
        assert!(Quarter::new(5).is_err());
        assert_eq!(Quarter::new(4).unwrap(), Quarter::Q4);
    }

    #[rstest]
    #[case(-1)]
    #[case(260)]
    #[case(i64::MAX)]
    fn test_quarter_rejects_values_outside_u8(#[case] value: i64) {
        assert!(matches!(
            Quarter::try_from(value),
            Err(RecordError::InvalidQuarter(v)) if v == value
        ));
    }

    #[rstest]
    #[case(Quarter::Q1, 1)]
    #[case(Quarter::Q2, 4)]
    #[case(Quarter::Q3, 7)]
    #[case(Quarter::Q4, 10)]
    fn test_quarter_first_month(#[case] quarter: Quarter, #[case] month: u32) {
        assert_eq!(quarter.first_month(), month);
        assert_eq!(Quarter::from_date(quarter.start_date(2024).unwrap()), quarter);
    }

    #[rstest]
    #[case("1", Quarter::Q1)]
    #[case(" 2 ", Quarter::Q2)]
    #[case("T3", Quarter::Q3)]
    #[case("q4", Quarter::Q4)]
    fn test_quarter_from_str(#[case] text: &str, #[case] expected: Quarter) {
        assert_eq!(text.parse::<Quarter>().unwrap(), expected);
    }

    #[test]
    fn test_quarter_from_str_errors() {
        assert!(matches!(
            "x".parse::<Quarter>(),
            Err(RecordError::UnparsableQuarter(_))
        ));
        assert!(matches!(
            "7".parse::<Quarter>(),
            Err(RecordError::InvalidQuarter(7))
        ));
    }

    #[test]
    fn test_quarter_start_date() {
        assert_eq!(Quarter::Q3.start_date(2024), Some(date(2024, 7, 1)));
        assert_eq!(Quarter::Q1.first_month(), 1);
        assert_eq!(Quarter::Q4.first_month(), 10);
    }

    #[test]
    fn test_quarter_serde_as_number() {
        assert_eq!(serde_json::to_string(&Quarter::Q2).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Quarter>("4").unwrap(), Quarter::Q4);
        assert!(serde_json::from_str::<Quarter>("0").is_err());
    }
}
