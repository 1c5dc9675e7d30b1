//! Free-text search and the range/category filter used for export.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::DutyLogError;
use crate::model::{DutyRecord, DutyType};

/// Records whose searchable fields contain `query`, case-insensitively.
///
/// Matches the anchor date (`YYYY-MM-DD`), train number, loco number, pilot
/// name, guard name, section and type label. A blank query returns
/// everything. Collection order is preserved.
pub fn search<'a>(records: &'a [DutyRecord], query: &str) -> Vec<&'a DutyRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|r| matches_query(r, &needle)).collect()
}

fn matches_query(record: &DutyRecord, needle: &str) -> bool {
    let contains = |field: Option<&str>| {
        field
            .map(|value| value.to_lowercase().contains(needle))
            .unwrap_or(false)
    };
    record.anchor_date().to_string().contains(needle)
        || contains(record.train_number())
        || contains(record.loco_number())
        || contains(record.pilot_name())
        || contains(record.guard_name())
        || contains(record.section())
        || record.duty_type().label().to_lowercase().contains(needle)
}

/// Inclusive calendar-day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// `from` at 00:00:00.000.
    pub fn start(&self) -> NaiveDateTime {
        self.from.and_time(NaiveTime::MIN)
    }

    /// `to` at 23:59:59.999.
    pub fn end(&self) -> NaiveDateTime {
        let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        self.to.and_time(last_milli)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let instant = date.and_time(NaiveTime::MIN);
        self.start() <= instant && instant <= self.end()
    }
}

/// Quick range choices for the export screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangePreset {
    Last7Days,
    ThisMonth,
    LastMonth,
    Custom,
}

impl RangePreset {
    /// Bounds of this preset relative to `today`. `Custom` has none.
    pub fn bounds(&self, today: NaiveDate) -> Option<DateWindow> {
        match self {
            RangePreset::Last7Days => {
                let from = today.checked_sub_days(Days::new(7)).unwrap_or(today);
                Some(DateWindow::new(from, today))
            }
            RangePreset::ThisMonth => Some(DateWindow::new(first_of_month(today), today)),
            RangePreset::LastMonth => {
                let this_month = first_of_month(today);
                let last = this_month.pred_opt().unwrap_or(this_month);
                Some(DateWindow::new(first_of_month(last), last))
            }
            RangePreset::Custom => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RangePreset::Last7Days => "Last 7 Days",
            RangePreset::ThisMonth => "This Month",
            RangePreset::LastMonth => "Last Month",
            RangePreset::Custom => "Custom",
        }
    }
}

impl fmt::Display for RangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RangePreset {
    type Err = DutyLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "last7" | "last-7" | "last-7-days" | "week" => Ok(RangePreset::Last7Days),
            "month" | "this-month" => Ok(RangePreset::ThisMonth),
            "last-month" | "lastmonth" => Ok(RangePreset::LastMonth),
            "custom" => Ok(RangePreset::Custom),
            _ => Err(DutyLogError::InvalidInput(format!(
                "Unknown range \"{}\" (use last7, month, last-month or custom)",
                s
            ))),
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Range and category selection for export.
///
/// Choosing a preset recomputes both bounds; editing either bound switches
/// the preset to [`RangePreset::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFilter {
    preset: RangePreset,
    window: DateWindow,
    types: Vec<DutyType>,
}

impl ExportFilter {
    /// Last 7 days, every duty type.
    pub fn new(today: NaiveDate) -> Self {
        let window = RangePreset::Last7Days
            .bounds(today)
            .unwrap_or(DateWindow::new(today, today));
        Self {
            preset: RangePreset::Last7Days,
            window,
            types: DutyType::ALL.to_vec(),
        }
    }

    pub fn preset(&self) -> RangePreset {
        self.preset
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// Selected types, in the canonical type order.
    pub fn types(&self) -> &[DutyType] {
        &self.types
    }

    /// Switch to `preset`. `Custom` keeps the current bounds.
    pub fn select_preset(&mut self, preset: RangePreset, today: NaiveDate) {
        if let Some(window) = preset.bounds(today) {
            self.window = window;
        }
        self.preset = preset;
    }

    pub fn set_from(&mut self, from: NaiveDate) {
        self.window.from = from;
        self.preset = RangePreset::Custom;
    }

    pub fn set_to(&mut self, to: NaiveDate) {
        self.window.to = to;
        self.preset = RangePreset::Custom;
    }

    /// Add `duty_type` if absent, remove it otherwise. Returns whether it is now selected.
    pub fn toggle_type(&mut self, duty_type: DutyType) -> bool {
        if let Some(index) = self.types.iter().position(|t| *t == duty_type) {
            self.types.remove(index);
            false
        } else {
            self.types.push(duty_type);
            self.types.sort();
            true
        }
    }

    /// Restrict the selection to exactly `types`.
    pub fn set_types(&mut self, types: &[DutyType]) {
        let mut selected: Vec<DutyType> = types.to_vec();
        selected.sort();
        selected.dedup();
        self.types = selected;
    }

    pub fn matches(&self, record: &DutyRecord) -> bool {
        self.types.contains(&record.duty_type()) && self.window.contains(record.anchor_date())
    }

    /// Matching records in collection order.
    pub fn apply<'a>(&self, records: &'a [DutyRecord]) -> Vec<&'a DutyRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DutyDetails;
    use chrono::{TimeZone, Utc};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(duty_type: DutyType, date: NaiveDate) -> DutyRecord {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
        DutyRecord::draft(duty_type, now, date)
    }

    fn working(date: NaiveDate, train: &str, pilot: &str) -> DutyRecord {
        let mut r = record(DutyType::Working, date);
        if let DutyDetails::Working(w) = &mut r.details {
            w.train_number = Some(train.into());
            w.pilot_name = Some(pilot.into());
            w.section = Some("NDLS - AGC".into());
        }
        r
    }

    #[test]
    fn test_blank_search_returns_all_in_order() {
        let records = vec![
            working(day(2024, 6, 15), "12952", "R. Sharma"),
            record(DutyType::Leave, day(2024, 6, 1)),
        ];
        let found = search(&records, "   ");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, records[0].id);
    }

    #[test]
    fn test_search_fields() {
        let records = vec![
            working(day(2024, 6, 15), "12952", "R. Sharma"),
            record(DutyType::Leave, day(2024, 5, 2)),
            record(DutyType::PeriodicRest, day(2024, 5, 20)),
        ];
        assert_eq!(search(&records, "sharma").len(), 1);
        assert_eq!(search(&records, " 1295 ").len(), 1);
        assert_eq!(search(&records, "agc").len(), 1);
        assert_eq!(search(&records, "LEAVE")[0].id, records[1].id);
        assert_eq!(search(&records, "periodic")[0].id, records[2].id);
        assert_eq!(search(&records, "2024-05").len(), 2);
        assert!(search(&records, "rajdhani").is_empty());
    }

    #[test]
    fn test_presets_for_mid_june() {
        let today = day(2024, 6, 15);
        assert_eq!(
            RangePreset::Last7Days.bounds(today),
            Some(DateWindow::new(day(2024, 6, 8), today))
        );
        assert_eq!(
            RangePreset::ThisMonth.bounds(today),
            Some(DateWindow::new(day(2024, 6, 1), today))
        );
        assert_eq!(
            RangePreset::LastMonth.bounds(today),
            Some(DateWindow::new(day(2024, 5, 1), day(2024, 5, 31)))
        );
        assert_eq!(RangePreset::Custom.bounds(today), None);
    }

    #[test]
    fn test_last_month_in_january() {
        assert_eq!(
            RangePreset::LastMonth.bounds(day(2024, 1, 10)),
            Some(DateWindow::new(day(2023, 12, 1), day(2023, 12, 31)))
        );
    }

    #[test]
    fn test_window_is_inclusive() {
        let window = DateWindow::new(day(2024, 6, 8), day(2024, 6, 15));
        assert!(window.contains(day(2024, 6, 8)));
        assert!(window.contains(day(2024, 6, 15)));
        assert!(!window.contains(day(2024, 6, 7)));
        assert!(!window.contains(day(2024, 6, 16)));
        assert_eq!(window.end().to_string(), "2024-06-15 23:59:59.999");
    }

    #[test]
    fn test_default_filter() {
        let filter = ExportFilter::new(day(2024, 6, 15));
        assert_eq!(filter.preset(), RangePreset::Last7Days);
        assert_eq!(filter.types(), &DutyType::ALL);
        assert_eq!(filter.window().from, day(2024, 6, 8));
    }

    #[test]
    fn test_manual_bounds_switch_to_custom() {
        let today = day(2024, 6, 15);
        let mut filter = ExportFilter::new(today);
        filter.select_preset(RangePreset::LastMonth, today);
        assert_eq!(filter.window().to, day(2024, 5, 31));

        filter.set_to(day(2024, 6, 2));
        assert_eq!(filter.preset(), RangePreset::Custom);
        assert_eq!(filter.window(), DateWindow::new(day(2024, 5, 1), day(2024, 6, 2)));

        filter.select_preset(RangePreset::ThisMonth, today);
        assert_eq!(filter.window(), DateWindow::new(day(2024, 6, 1), today));
    }

    #[test]
    fn test_filter_by_type_and_anchor_date() {
        let today = day(2024, 6, 15);
        let records = vec![
            record(DutyType::Working, day(2024, 6, 14)),
            record(DutyType::Leave, day(2024, 6, 10)),
            record(DutyType::PeriodicRest, day(2024, 6, 9)),
            record(DutyType::Spare, day(2024, 6, 1)),
        ];
        let mut filter = ExportFilter::new(today);
        assert_eq!(filter.apply(&records).len(), 3);

        assert!(!filter.toggle_type(DutyType::Leave));
        let ids: Vec<_> = filter.apply(&records).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![records[0].id, records[2].id]);

        assert!(filter.toggle_type(DutyType::Leave));
        assert_eq!(filter.types(), &DutyType::ALL);

        filter.set_types(&[]);
        assert!(filter.apply(&records).is_empty());
    }

    #[test]
    fn test_range_parsing() {
        assert_eq!("last7".parse::<RangePreset>().unwrap(), RangePreset::Last7Days);
        assert_eq!("Last Month".parse::<RangePreset>().unwrap(), RangePreset::LastMonth);
        assert!("quarter".parse::<RangePreset>().is_err());
    }
}
