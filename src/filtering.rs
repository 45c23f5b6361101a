//! The engine's owned tables and their period slicing.
//!
//! Both tables are built once at load time and never mutated afterwards;
//! every query works on a copy of the matching rows, so concurrent reads
//! need no coordination and no query can disturb another.

use crate::types::hourly::HourlyAggregate;
use crate::types::period::PeriodSelector;
use crate::types::reading::Reading;
use chrono::{Datelike, NaiveDateTime};
use std::ops::RangeInclusive;

/// The normalized raw table: readings sorted by timestamp, rows without a
/// usable timestamp at the end.
#[derive(Debug, Clone, Default)]
pub struct ReadingTable {
    rows: Vec<Reading>,
}

impl ReadingTable {
    /// Wraps normalized readings, enforcing the table's sort order.
    pub fn new(mut rows: Vec<Reading>) -> Self {
        rows.sort_by_key(|r| (r.timestamp.is_none(), r.timestamp));
        Self { rows }
    }

    pub fn rows(&self) -> &[Reading] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Readings that carry a timestamp, in chronological order.
    pub fn time_indexed(&self) -> impl Iterator<Item = &Reading> {
        self.rows.iter().filter(|r| r.timestamp.is_some())
    }

    /// Rows whose timestamp falls inside the period.
    ///
    /// # Returns
    ///
    /// The matching rows, possibly empty. A selector outside the dataset is
    /// not an error.
    pub fn for_period(&self, period: PeriodSelector) -> Vec<Reading> {
        self.rows
            .iter()
            .filter(|r| matches!(r.timestamp, Some(ts) if period.matches(ts)))
            .copied()
            .collect()
    }

    /// Earliest and latest timestamp, `None` for a table without time-indexed
    /// rows. Feeds the presentation layer's date-picker bounds.
    pub fn time_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut stamps = self.time_indexed().filter_map(|r| r.timestamp);
        let first = stamps.next()?;
        let last = stamps.last().unwrap_or(first);
        Some((first, last))
    }

    /// Inclusive range of calendar years covered by the table.
    pub fn years(&self) -> Option<RangeInclusive<i32>> {
        self.time_range()
            .map(|(first, last)| first.year()..=last.year())
    }

    /// The most recent time-indexed reading.
    pub fn latest(&self) -> Option<&Reading> {
        self.time_indexed().last()
    }
}

/// The hourly table: one aggregate per non-empty hour, sorted by hour.
#[derive(Debug, Clone, Default)]
pub struct HourlyTable {
    rows: Vec<HourlyAggregate>,
}

impl HourlyTable {
    pub fn new(mut rows: Vec<HourlyAggregate>) -> Self {
        rows.sort_by_key(|r| r.hour);
        Self { rows }
    }

    pub fn rows(&self) -> &[HourlyAggregate] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Hourly rows whose hour falls inside the period.
    pub fn for_period(&self, period: PeriodSelector) -> Vec<HourlyAggregate> {
        self.rows
            .iter()
            .filter(|r| period.matches(r.hour))
            .copied()
            .collect()
    }
}
