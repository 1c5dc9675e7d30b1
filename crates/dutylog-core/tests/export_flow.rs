use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{NaiveDate, TimeZone, Utc};
use dutylog_core::export::{self, DeliveryOutcome, DownloadDelivery, ExportTable};
use dutylog_core::store::{DutyStore, MemoryKeyValueStore};
use dutylog_core::{DutyForm, DutyType, ExportFilter, RangePreset};

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let dirname = format!("{}_{}_{}", prefix, std::process::id(), nanos);
        Self {
            path: std::env::temp_dir().join(dirname),
        }
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn seeded_store() -> DutyStore<MemoryKeyValueStore> {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap();
    let mut store = DutyStore::open(MemoryKeyValueStore::new()).expect("open");

    let mut working = DutyForm::new(DutyType::Working, Utc, now);
    working.set("date", "2024-06-14").expect("date");
    working.set("train", "12952").expect("train");
    working.set("safety", "Head Light:ok").expect("safety");
    working.set("safety", "VCD:not ok:loose wire").expect("safety");
    store.upsert(working.submit()).expect("upsert");

    let mut leave = DutyForm::new(DutyType::Leave, Utc, now);
    leave.set("from-date", "2024-05-20").expect("from");
    leave.set("to-date", "2024-05-21").expect("to");
    store.upsert(leave.submit()).expect("upsert");

    let mut spare = DutyForm::new(DutyType::Spare, Utc, now);
    spare.set("date", "2024-06-10").expect("date");
    store.upsert(spare.submit()).expect("upsert");

    store
}

#[test]
fn test_filtered_export_downloads_workbook() {
    let temp = TempDir::new("dutylog_export_flow");
    let store = seeded_store();
    let records = store.records();
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    let mut filter = ExportFilter::new(today);
    filter.toggle_type(DutyType::Spare);
    let selected = filter.apply(&records);
    assert_eq!(selected.len(), 1);

    let report = export::export_records(&selected, today, &DownloadDelivery::new(&temp.path))
        .expect("export should succeed");
    assert_eq!(report.rows, 1);
    match &report.outcome {
        DeliveryOutcome::Downloaded { path } => {
            assert!(path.ends_with("ALP_DutyLog_2024-06-15.xlsx"));
            let bytes = fs::read(path).expect("workbook on disk");
            assert!(bytes.starts_with(b"PK"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    let table = ExportTable::from_records(selected.iter().copied());
    assert_eq!(table.cell(0, "Safety: VCD"), Some("NOT OK (loose wire)"));
    assert_eq!(table.cell(0, "Date"), Some("2024-06-14"));
}

#[test]
fn test_last_month_reaches_leave_by_from_date() {
    let store = seeded_store();
    let records = store.records();
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    let mut filter = ExportFilter::new(today);
    filter.select_preset(RangePreset::LastMonth, today);
    let selected = filter.apply(&records);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].duty_type(), DutyType::Leave);
}

#[test]
fn test_empty_selection_writes_nothing() {
    let temp = TempDir::new("dutylog_export_empty");
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let err = export::export_records(&[], today, &DownloadDelivery::new(&temp.path))
        .expect_err("empty export should fail");
    assert_eq!(err.to_string(), export::NO_FILTERED_RECORDS);
    assert!(!temp.path.exists());
}
