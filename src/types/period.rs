use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize)]
pub struct Year(pub i32);
impl Year {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize)]
pub struct Month(pub i32, pub u32);
impl Month {
    pub fn year(self) -> i32 {
        self.0
    }
    pub fn month(self) -> u32 {
        self.1
    }
    pub fn new(year: i32, month: u32) -> Self {
        Self(year, month)
    }

    /// The first day of this month, or `None` for an impossible month number.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, self.1, 1)
    }

    /// The month immediately after this one.
    pub fn succ(self) -> Month {
        if self.1 >= 12 {
            Month(self.0 + 1, 1)
        } else {
            Month(self.0, self.1 + 1)
        }
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0, self.1)
    }
}

/// The granularity a [`PeriodSelector`] queries at.
///
/// Views change shape with granularity: the solar pivot switches its column
/// axis, the temperature/precipitation series switches between raw readings
/// and re-aggregated buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Granularity {
    Day,
    Month,
    Year,
}

impl Display for Granularity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Granularity::Day => "day",
            Granularity::Month => "month",
            Granularity::Year => "year",
        };
        write!(f, "{}", label)
    }
}

/// Selects the period a query runs over. Exactly one variant is active.
///
/// A selector that matches nothing (an empty day, month 13, a future year)
/// is not an error; it flows through as an empty slice and the views produce
/// their documented empty forms.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use klimastation::{Granularity, Month, PeriodSelector};
///
/// let date = NaiveDate::from_ymd_opt(2021, 6, 14).unwrap();
/// let day = PeriodSelector::Day(date);
/// assert_eq!(day.granularity(), Granularity::Day);
///
/// let june = PeriodSelector::Month(Month::new(2021, 6));
/// assert!(june.matches(date.and_hms_opt(12, 0, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PeriodSelector {
    /// A single calendar date.
    Day(NaiveDate),
    /// A calendar month of a specific year.
    Month(Month),
    /// A full calendar year.
    Year(Year),
}

impl PeriodSelector {
    pub fn granularity(&self) -> Granularity {
        match self {
            PeriodSelector::Day(_) => Granularity::Day,
            PeriodSelector::Month(_) => Granularity::Month,
            PeriodSelector::Year(_) => Granularity::Year,
        }
    }

    /// Whether `timestamp` falls inside the selected period.
    pub fn matches(&self, timestamp: NaiveDateTime) -> bool {
        match *self {
            PeriodSelector::Day(date) => timestamp.date() == date,
            PeriodSelector::Month(Month(year, month)) => {
                timestamp.year() == year && timestamp.month() == month
            }
            PeriodSelector::Year(Year(year)) => timestamp.year() == year,
        }
    }
}

impl Display for PeriodSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PeriodSelector::Day(date) => write!(f, "{}", date),
            PeriodSelector::Month(month) => write!(f, "{}", month),
            PeriodSelector::Year(year) => write!(f, "{}", year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, mo: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn day_selector_matches_only_that_date() {
        let sel = PeriodSelector::Day(NaiveDate::from_ymd_opt(2021, 6, 14).unwrap());
        assert!(sel.matches(dt(2021, 6, 14, 0)));
        assert!(sel.matches(dt(2021, 6, 14, 23)));
        assert!(!sel.matches(dt(2021, 6, 15, 0)));
    }

    #[test]
    fn month_selector_matches_whole_month() {
        let sel = PeriodSelector::Month(Month::new(2021, 6));
        assert!(sel.matches(dt(2021, 6, 1, 0)));
        assert!(sel.matches(dt(2021, 6, 30, 23)));
        assert!(!sel.matches(dt(2021, 7, 1, 0)));
        assert!(!sel.matches(dt(2020, 6, 1, 0)));
    }

    #[test]
    fn year_selector_matches_whole_year() {
        let sel = PeriodSelector::Year(Year(2021));
        assert!(sel.matches(dt(2021, 1, 1, 0)));
        assert!(sel.matches(dt(2021, 12, 31, 23)));
        assert!(!sel.matches(dt(2022, 1, 1, 0)));
    }

    #[test]
    fn impossible_month_matches_nothing() {
        let sel = PeriodSelector::Month(Month::new(2021, 13));
        assert!(!sel.matches(dt(2021, 12, 31, 23)));
    }

    #[test]
    fn month_succ_rolls_over_year() {
        assert_eq!(Month::new(2021, 12).succ(), Month::new(2022, 1));
        assert_eq!(Month::new(2021, 1).succ(), Month::new(2021, 2));
    }

    #[test]
    fn formatting() {
        assert_eq!(Year(2021).to_string(), "2021");
        assert_eq!(Month::new(2021, 6).to_string(), "2021-06");
        let sel = PeriodSelector::Day(NaiveDate::from_ymd_opt(2021, 6, 4).unwrap());
        assert_eq!(sel.to_string(), "2021-06-04");
    }
}
