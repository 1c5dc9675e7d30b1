//! Spreadsheet export of duty records.
//!
//! Records are flattened into rows keyed by column header. The sheet's header
//! row is the union of those keys in first-seen order, so safety columns
//! appear after the fixed set in the order their labels are first met.

mod delivery;

pub use delivery::{Delivery, DeliveryOutcome, DownloadDelivery, ExportFile, ShareDelivery};

use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use serde::Serialize;
use tracing::info;

use crate::error::{DutyLogError, Result};
use crate::model::{wire, DutyRecord};

pub const SHEET_NAME: &str = "DutyLog";

/// Columns every row carries, in order.
pub const FIXED_COLUMNS: [&str; 16] = [
    "ID",
    "Type",
    "Date",
    "Train No",
    "Loco No",
    "Call Time",
    "Sign ON",
    "Sign OFF",
    "Pilot",
    "Pilot ID",
    "Guard",
    "Guard ID",
    "Section",
    "Nature of Leave",
    "From Date",
    "To Date",
];

pub const NO_FILTERED_RECORDS: &str = "No records found for the selected filters.";
pub const NO_BACKUP_RECORDS: &str = "No records found to backup. Please add some duties first.";

/// `ALP_DutyLog_<YYYY-MM-DD>.xlsx`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("ALP_DutyLog_{}.xlsx", date.format(wire::DATE_FORMAT))
}

/// Flatten one record into `(column, value)` pairs.
pub fn flatten(record: &DutyRecord) -> Vec<(String, String)> {
    let text = |value: Option<&str>| value.unwrap_or_default().to_string();
    let date = |value: Option<NaiveDate>| {
        value
            .map(|d| d.format(wire::DATE_FORMAT).to_string())
            .unwrap_or_default()
    };
    let time = |value: Option<chrono::NaiveTime>| {
        value
            .map(|t| t.format(wire::TIME_FORMAT).to_string())
            .unwrap_or_default()
    };

    let values = [
        record.id.to_string(),
        record.duty_type().label().to_string(),
        date(record.duty_date()),
        text(record.train_number()),
        text(record.loco_number()),
        time(record.call_time()),
        time(record.sign_on_time()),
        time(record.sign_off_time()),
        text(record.pilot_name()),
        text(record.pilot_id()),
        text(record.guard_name()),
        text(record.guard_id()),
        text(record.section()),
        record
            .nature_of_leave()
            .map(|n| n.code().to_string())
            .unwrap_or_default(),
        date(record.from_date()),
        date(record.to_date()),
    ];

    let mut cells: Vec<(String, String)> = FIXED_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .zip(values)
        .collect();
    for item in record.safety_items() {
        let column = format!("Safety: {}", item.label);
        let value = item.status_text();
        match cells.iter_mut().find(|cell| cell.0 == column) {
            Some(cell) => cell.1 = value,
            None => cells.push((column, value)),
        }
    }
    cells
}

/// Rows ready for the sheet, with a shared header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a DutyRecord>,
    {
        let flattened: Vec<Vec<(String, String)>> = records.into_iter().map(flatten).collect();

        let mut headers: Vec<String> = Vec::new();
        for row in &flattened {
            for (column, _) in row {
                if !headers.contains(column) {
                    headers.push(column.clone());
                }
            }
        }

        let rows = flattened
            .into_iter()
            .map(|row| {
                headers
                    .iter()
                    .map(|h| {
                        row.iter()
                            .find(|(c, _)| c == h)
                            .map(|(_, v)| v.clone())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell under `header` in row `index`.
    pub fn cell(&self, index: usize, header: &str) -> Option<&str> {
        let column = self.headers.iter().position(|h| h == header)?;
        self.rows.get(index)?.get(column).map(String::as_str)
    }

    /// Encode as an `.xlsx` workbook with a single `DutyLog` sheet.
    pub fn to_xlsx(&self) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        {
            let sheet = workbook.add_worksheet();
            sheet.set_name(SHEET_NAME)?;
            for (col, header) in self.headers.iter().enumerate() {
                sheet.write_string(0, column_index(col)?, header)?;
            }
            for (row, values) in self.rows.iter().enumerate() {
                let row = row_index(row + 1)?;
                for (col, value) in values.iter().enumerate() {
                    if !value.is_empty() {
                        sheet.write_string(row, column_index(col)?, value)?;
                    }
                }
            }
        }
        Ok(workbook.save_to_buffer()?)
    }
}

fn column_index(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| DutyLogError::Export(format!("Too many columns ({})", col)))
}

fn row_index(row: usize) -> Result<u32> {
    u32::try_from(row).map_err(|_| DutyLogError::Export(format!("Too many rows ({})", row)))
}

/// Result of a finished export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub file_name: String,
    pub rows: usize,
    pub outcome: DeliveryOutcome,
}

/// Export the records matched by a filter, dated `today`.
pub fn export_records(
    records: &[&DutyRecord],
    today: NaiveDate,
    delivery: &dyn Delivery,
) -> Result<ExportReport> {
    if records.is_empty() {
        return Err(DutyLogError::NoRecords(NO_FILTERED_RECORDS.to_string()));
    }
    write_and_deliver(ExportTable::from_records(records.iter().copied()), today, delivery)
}

/// Export the whole collection, dated `today`.
pub fn backup(
    records: &[DutyRecord],
    today: NaiveDate,
    delivery: &dyn Delivery,
) -> Result<ExportReport> {
    if records.is_empty() {
        return Err(DutyLogError::NoRecords(NO_BACKUP_RECORDS.to_string()));
    }
    write_and_deliver(ExportTable::from_records(records), today, delivery)
}

fn write_and_deliver(
    table: ExportTable,
    today: NaiveDate,
    delivery: &dyn Delivery,
) -> Result<ExportReport> {
    let file = ExportFile {
        file_name: export_file_name(today),
        bytes: table.to_xlsx()?,
    };
    let outcome = delivery.deliver(&file)?;
    info!(rows = table.len(), file = %file.file_name, "exported duty records");
    Ok(ExportReport {
        file_name: file.file_name,
        rows: table.len(),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DutyDetails, DutyType, LeaveRecord, NatureOfLeave, SafetyItem};
    use chrono::{NaiveTime, TimeZone, Utc};
    use std::cell::RefCell;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(duty_type: DutyType) -> DutyRecord {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
        DutyRecord::draft(duty_type, now, day(2024, 6, 15))
    }

    fn working_with_safety(items: Vec<SafetyItem>) -> DutyRecord {
        let mut record = draft(DutyType::Working);
        if let DutyDetails::Working(w) = &mut record.details {
            w.train_number = Some("12952".into());
            w.loco_number = Some("30245".into());
            w.sign_on_time = NaiveTime::from_hms_opt(5, 40, 0);
            w.safety_items = items;
        }
        record
    }

    /// Records what it was asked to deliver.
    #[derive(Default)]
    struct Capture {
        files: RefCell<Vec<ExportFile>>,
    }

    impl Delivery for Capture {
        fn deliver(&self, file: &ExportFile) -> Result<DeliveryOutcome> {
            self.files.borrow_mut().push(file.clone());
            Ok(DeliveryOutcome::Shared {
                via: "capture".to_string(),
            })
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(export_file_name(day(2024, 6, 15)), "ALP_DutyLog_2024-06-15.xlsx");
    }

    #[test]
    fn test_safety_columns() {
        let record = working_with_safety(vec![
            SafetyItem::new("Head Light", true, ""),
            SafetyItem::new("VCD", false, "loose wire"),
        ]);
        let table = ExportTable::from_records([&record]);
        assert_eq!(table.cell(0, "Safety: Head Light"), Some("OK"));
        assert_eq!(table.cell(0, "Safety: VCD"), Some("NOT OK (loose wire)"));
        assert_eq!(table.cell(0, "Sign ON"), Some("05:40"));
        assert_eq!(table.cell(0, "Type"), Some("Working"));
    }

    #[test]
    fn test_header_union_in_first_seen_order() {
        let a = working_with_safety(vec![SafetyItem::new("VCD", true, "")]);
        let leave = DutyRecord {
            details: DutyDetails::Leave(LeaveRecord {
                from_date: day(2024, 6, 3),
                to_date: day(2024, 6, 4),
                nature_of_leave: NatureOfLeave::Privilege,
                total_leave_days: 2,
            }),
            ..draft(DutyType::Leave)
        };
        let b = working_with_safety(vec![
            SafetyItem::new("Head Light", false, "dim"),
            SafetyItem::new("VCD", true, ""),
        ]);
        let table = ExportTable::from_records([&a, &leave, &b]);

        let tail: Vec<&str> = table.headers()[FIXED_COLUMNS.len()..]
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(tail, vec!["Safety: VCD", "Safety: Head Light"]);
        assert_eq!(&table.headers()[..2], &["ID".to_string(), "Type".to_string()]);

        assert_eq!(table.cell(0, "Safety: Head Light"), Some(""));
        assert_eq!(table.cell(1, "Safety: VCD"), Some(""));
        assert_eq!(table.cell(1, "Date"), Some(""));
        assert_eq!(table.cell(1, "Nature of Leave"), Some("PL"));
        assert_eq!(table.cell(1, "From Date"), Some("2024-06-03"));
        assert_eq!(table.cell(2, "Safety: Head Light"), Some("NOT OK (dim)"));
    }

    #[test]
    fn test_export_is_deterministic() {
        let records = vec![
            working_with_safety(vec![SafetyItem::new("VCD", true, "")]),
            draft(DutyType::Spare),
        ];
        assert_eq!(
            ExportTable::from_records(&records),
            ExportTable::from_records(&records)
        );
    }

    #[test]
    fn test_workbook_is_a_zip() {
        let record = working_with_safety(Vec::new());
        let bytes = ExportTable::from_records([&record]).to_xlsx().unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_empty_selection_fails_before_delivery() {
        let capture = Capture::default();
        let err = export_records(&[], day(2024, 6, 15), &capture).unwrap_err();
        assert_eq!(err.to_string(), NO_FILTERED_RECORDS);

        let err = backup(&[], day(2024, 6, 15), &capture).unwrap_err();
        assert_eq!(err.to_string(), NO_BACKUP_RECORDS);
        assert!(capture.files.borrow().is_empty());
    }

    #[test]
    fn test_export_delivers_named_workbook() {
        let records = vec![draft(DutyType::Spare), draft(DutyType::Leave)];
        let selected: Vec<&DutyRecord> = records.iter().collect();
        let capture = Capture::default();
        let report = export_records(&selected, day(2024, 6, 15), &capture).unwrap();
        assert_eq!(report.rows, 2);
        assert_eq!(report.file_name, "ALP_DutyLog_2024-06-15.xlsx");
        let files = capture.files.borrow();
        assert_eq!(files.len(), 1);
        assert!(files[0].bytes.starts_with(b"PK"));
    }
}
