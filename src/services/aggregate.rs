//! Record aggregation for list, calendar, and chart views
//!
//! Pure derivations over a flat record collection: date-range filtering,
//! month grouping with per-month statistics, day-keyed lookup for calendar
//! cells, and the chart's weight axis range.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::models::{Weight, WeightRecord};

/// A month bucket of records for list display
#[derive(Debug, Clone)]
pub struct MonthGroup {
    /// First day of the month this group covers
    pub month: NaiveDate,
    /// Records for the month, newest first
    pub records: Vec<WeightRecord>,
}

/// Derived statistics over a record group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightStats {
    /// Mean weight in kilograms
    pub average: f64,
    /// Lightest weight recorded
    pub min: Weight,
    /// Heaviest weight recorded
    pub max: Weight,
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .unwrap_or(date)
}

/// Number of days in the month containing `date`
fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    match next_month {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

/// Filter records to an inclusive date range
pub fn filter_by_range(
    records: &[WeightRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<WeightRecord> {
    records
        .iter()
        .filter(|r| r.date >= start && r.date <= end)
        .cloned()
        .collect()
}

/// Group records by calendar month
///
/// Groups are ordered most recent month first; records within a group are
/// sorted by date descending.
pub fn group_by_month(records: &[WeightRecord]) -> Vec<MonthGroup> {
    let mut buckets: HashMap<NaiveDate, Vec<WeightRecord>> = HashMap::new();
    for record in records {
        buckets
            .entry(first_of_month(record.date))
            .or_default()
            .push(record.clone());
    }

    let mut groups: Vec<MonthGroup> = buckets
        .into_iter()
        .map(|(month, mut records)| {
            records.sort_by(|a, b| b.date.cmp(&a.date));
            MonthGroup { month, records }
        })
        .collect();

    groups.sort_by(|a, b| b.month.cmp(&a.month));
    groups
}

/// Group records by calendar day
pub fn group_by_day(records: &[WeightRecord]) -> BTreeMap<NaiveDate, Vec<WeightRecord>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<WeightRecord>> = BTreeMap::new();
    for record in records {
        buckets.entry(record.date).or_default().push(record.clone());
    }
    buckets
}

/// The record a calendar cell shows for `date`
///
/// When multiple records share a day, the first in collection order wins;
/// the rest are not shown. Calendar cells and chart point selection both
/// rely on this tie-break.
pub fn first_record_on_day(records: &[WeightRecord], date: NaiveDate) -> Option<&WeightRecord> {
    records.iter().find(|r| r.date == date)
}

/// Compute average, minimum, and maximum weight over `records`
///
/// Returns all zeros on empty input; callers only show stats for non-empty
/// groups.
pub fn stats(records: &[WeightRecord]) -> WeightStats {
    if records.is_empty() {
        return WeightStats {
            average: 0.0,
            min: Weight::zero(),
            max: Weight::zero(),
        };
    }

    let total_tenths: i64 = records.iter().map(|r| r.weight.tenths()).sum();
    let average = total_tenths as f64 / records.len() as f64 / 10.0;
    let min = records.iter().map(|r| r.weight).min().unwrap_or_default();
    let max = records.iter().map(|r| r.weight).max().unwrap_or_default();

    WeightStats { average, min, max }
}

/// All cell slots for the month grid containing `anchor`
///
/// The month's days are padded at the front with `None` placeholders so the
/// first day lands on its weekday column. The week starts on Sunday.
pub fn month_calendar_dates(anchor: NaiveDate) -> Vec<Option<NaiveDate>> {
    let first = first_of_month(anchor);
    let padding = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; padding];
    for day in 1..=days_in_month(anchor) {
        cells.push(NaiveDate::from_ymd_opt(first.year(), first.month(), day));
    }
    cells
}

/// The chart's Y axis bounds in kilograms
///
/// One kilogram of margin on each side, rounded outward to whole numbers.
/// With no records the range falls back to 50..70 even though a target is
/// always present; the target alone never defines the range.
pub fn weight_axis_range(records: &[WeightRecord], target: f64) -> (f64, f64) {
    if records.is_empty() {
        return (50.0, 70.0);
    }

    let mut min = target;
    let mut max = target;
    for record in records {
        min = min.min(record.weight.kg());
        max = max.max(record.weight.kg());
    }

    ((min - 1.0).floor(), (max + 1.0).ceil())
}
