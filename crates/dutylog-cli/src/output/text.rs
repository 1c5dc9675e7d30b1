//! Detail views and list tables for duty records.

use dutylog_core::model::{Inspection, LeaveRecord, PeriodicRest, SpareDuty, WorkingDuty};
use dutylog_core::{DutyDetails, DutyRecord};

use crate::app::Zone;
use crate::ui::format::{self, opt_date, opt_datetime, opt_number, opt_text, opt_time, EMPTY};
use crate::ui::{
    blank_line, header_with_context, hint, kv, print, section, short_id, simple_table, truncate,
    Column, OutputMode, UiContext,
};

const DETAIL_MAX: usize = 40;

pub const LIST_COLUMNS: [Column; 5] = [
    Column::new("ID"),
    Column::new("Type"),
    Column::new("Date"),
    Column::new("Train"),
    Column::new("Detail"),
];

/// One table row: short id, type, date, train and a type-specific detail.
pub fn record_row(record: &DutyRecord) -> Vec<String> {
    let date = match &record.details {
        DutyDetails::Working(w) => format::date(w.date),
        DutyDetails::Spare(s) => format::date(s.date),
        DutyDetails::PeriodicRest(r) => date_span(r.from_date, r.to_date),
        DutyDetails::Leave(l) => date_span(l.from_date, l.to_date),
    };
    let detail = match &record.details {
        DutyDetails::Working(w) => {
            let parts: Vec<&str> = [w.section.as_deref(), w.loco_number.as_deref()]
                .into_iter()
                .flatten()
                .filter(|s| !s.trim().is_empty())
                .collect();
            if parts.is_empty() {
                EMPTY.to_string()
            } else {
                parts.join(" ")
            }
        }
        DutyDetails::Spare(s) => opt_text(s.section.as_deref()),
        DutyDetails::PeriodicRest(r) => format!(
            "{}-{}",
            r.from_time.format("%H:%M"),
            r.to_time.format("%H:%M")
        ),
        DutyDetails::Leave(l) => format!(
            "{} {} day{}",
            l.nature_of_leave.code(),
            l.total_leave_days,
            if l.total_leave_days == 1 { "" } else { "s" }
        ),
    };
    vec![
        short_id(&record.id),
        record.duty_type().label().to_string(),
        date,
        opt_text(record.train_number()),
        truncate(&detail, DETAIL_MAX),
    ]
}

fn date_span(from: chrono::NaiveDate, to: chrono::NaiveDate) -> String {
    if from == to {
        format::date(from)
    } else {
        format!("{}..{}", format::date(from), format::date(to))
    }
}

/// Print a record list for `command`. Plain mode prints full ids, one record
/// per line; pretty mode a table followed by a hint.
pub fn print_record_list(
    ui_ctx: &UiContext,
    records: &[&DutyRecord],
    command: &str,
    context: Option<&str>,
    quiet: bool,
) {
    if records.is_empty() {
        if !quiet {
            match ui_ctx.mode {
                OutputMode::Pretty => {
                    print(ui_ctx, &header_with_context(ui_ctx, command, context, None));
                    blank_line(ui_ctx);
                    print(
                        ui_ctx,
                        &hint(ui_ctx, "No duties found. Log one with `dutylog add <TYPE>`."),
                    );
                }
                OutputMode::Plain | OutputMode::Json => println!("count=0"),
            }
        }
        return;
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            if !quiet {
                print(ui_ctx, &header_with_context(ui_ctx, command, context, None));
                blank_line(ui_ctx);
            }
            let rows: Vec<Vec<String>> = records.iter().map(|r| record_row(r)).collect();
            print(ui_ctx, &simple_table(ui_ctx, &LIST_COLUMNS, &rows));
            if !quiet {
                blank_line(ui_ctx);
                let first = short_id(&records[0].id);
                print(
                    ui_ctx,
                    &hint(
                        ui_ctx,
                        &format!("{} duties. dutylog show {}", records.len(), first),
                    ),
                );
            }
        }
        OutputMode::Plain | OutputMode::Json => {
            for record in records {
                let mut row = record_row(record);
                row[0] = record.id.to_string();
                row[1] = row[1].replace(' ', "_");
                println!("{}", row.join(" "));
            }
        }
    }
}

type Group = (&'static str, Vec<(&'static str, String)>);

fn working_groups(w: &WorkingDuty) -> Vec<Group> {
    let safety: Vec<(&'static str, String)> = w
        .safety_items
        .iter()
        .map(|item| ("Check", format!("{}: {}", item.label, item.status_text())))
        .collect();
    let mut groups = vec![
        (
            "Duty",
            vec![
                ("Date", format::date(w.date)),
                ("Train Number", opt_text(w.train_number.as_deref())),
                ("Train Name", opt_text(w.train_name.as_deref())),
                ("Section", opt_text(w.section.as_deref())),
                ("Stations", stations(w.from_station.as_deref(), w.to_station.as_deref())),
            ],
        ),
        (
            "Loco",
            vec![
                ("Loco Number", opt_text(w.loco_number.as_deref())),
                ("Loco Class", opt_text(w.loco_class.as_deref())),
                ("Shed", opt_text(w.shed.as_deref())),
                ("Hood", opt_text(w.hood.map(|h| h.code()))),
            ],
        ),
        (
            "Timings",
            vec![
                ("Call Time", opt_time(w.call_time)),
                ("Sign On", opt_time(w.sign_on_time)),
                ("Sign Off", opt_time(w.sign_off_time)),
                ("Departure", opt_datetime(w.departure_time)),
                ("Arrival", opt_datetime(w.arrival_time)),
            ],
        ),
        (
            "Crew",
            vec![
                ("Pilot", crew(w.pilot_name.as_deref(), w.pilot_id.as_deref())),
                ("Guard", crew(w.guard_name.as_deref(), w.guard_id.as_deref())),
            ],
        ),
        (
            "Certificates",
            vec![
                ("BPC No", opt_text(w.bpc_no.as_deref())),
                ("BPC Type", opt_text(w.bpc_type.as_deref())),
                ("Issued By", opt_text(w.issued_by.as_deref())),
                ("Issued Date", opt_date(w.issued_date)),
                ("Valid Upto", opt_date(w.valid_upto_date)),
                ("FSD No", opt_text(w.fsd_no.as_deref())),
                ("Detonator Expiry", opt_date(w.detonator_expiry)),
            ],
        ),
        (
            "Fuel",
            vec![
                ("HSD Received", opt_number(w.hsd_received)),
                ("HSD Balance", opt_number(w.hsd_balance)),
                ("HSD Consumption", opt_number(w.hsd_consumption)),
            ],
        ),
        (
            "Readings",
            vec![
                ("TE C", opt_text(w.te_c.as_deref())),
                ("TE R", opt_text(w.te_r.as_deref())),
                ("ME C", opt_text(w.me_c.as_deref())),
                ("ME R", opt_text(w.me_r.as_deref())),
                ("CON", opt_text(w.con.as_deref())),
                ("HOG 1", opt_text(w.hog1.as_deref())),
                ("HOG 2", opt_text(w.hog2.as_deref())),
                ("TC Reading", opt_text(w.tc_reading.as_deref())),
                ("MC Reading", opt_text(w.mc_reading.as_deref())),
            ],
        ),
    ];
    if !w.inspection.is_empty() {
        groups.push(("Inspection", inspection_lines(&w.inspection)));
    }
    if !safety.is_empty() {
        groups.push(("Safety", safety));
    }
    groups.push(("Remarks", vec![("Remarks", opt_text(w.remarks.as_deref()))]));
    groups
}

/// Recorded checks and counts only.
fn inspection_lines(inspection: &Inspection) -> Vec<(&'static str, String)> {
    let mut lines: Vec<(&'static str, String)> = inspection
        .checks()
        .into_iter()
        .filter_map(|(label, ok, remark)| ok.map(|ok| (label, check_status(ok, remark))))
        .collect();
    lines.extend(
        inspection
            .counts()
            .into_iter()
            .map(|(label, value)| (label, value.to_string())),
    );
    if inspection.fire_expiry_date.is_some() {
        lines.push(("Fire Expiry", opt_date(inspection.fire_expiry_date)));
    }
    lines
}

fn check_status(ok: bool, remark: Option<&str>) -> String {
    match (ok, remark.map(str::trim).filter(|r| !r.is_empty())) {
        (true, None) => "OK".to_string(),
        (true, Some(remark)) => format!("OK ({})", format::single_line(remark)),
        (false, None) => "NOT OK".to_string(),
        (false, Some(remark)) => format!("NOT OK ({})", format::single_line(remark)),
    }
}

fn stations(from: Option<&str>, to: Option<&str>) -> String {
    match (from, to) {
        (None, None) => EMPTY.to_string(),
        (from, to) => format!("{} - {}", from.unwrap_or(EMPTY), to.unwrap_or(EMPTY)),
    }
}

fn spare_groups(s: &SpareDuty) -> Vec<Group> {
    vec![
        (
            "Duty",
            vec![
                ("Date", format::date(s.date)),
                ("Train Number", opt_text(s.train_number.as_deref())),
                ("Section", opt_text(s.section.as_deref())),
                ("Stations", stations(s.from_station.as_deref(), s.to_station.as_deref())),
            ],
        ),
        (
            "Timings",
            vec![
                ("Call Time", opt_time(s.call_time)),
                ("Sign On", opt_time(s.sign_on_time)),
                ("Sign Off", opt_time(s.sign_off_time)),
            ],
        ),
        (
            "Crew",
            vec![
                ("Pilot", crew(s.pilot_name.as_deref(), s.pilot_id.as_deref())),
                ("Guard", crew(s.guard_name.as_deref(), s.guard_id.as_deref())),
            ],
        ),
    ]
}

fn rest_groups(r: &PeriodicRest, zone: &Zone) -> Vec<Group> {
    vec![(
        "Rest",
        vec![
            (
                "From",
                format!("{} {}", format::date(r.from_date), r.from_time.format("%H:%M")),
            ),
            (
                "To",
                format!("{} {}", format::date(r.to_date), r.to_time.format("%H:%M")),
            ),
            ("Train", opt_text(r.train_number.as_deref())),
            ("Rest Duration", zone.rest_duration(r).to_string()),
        ],
    )]
}

fn leave_groups(l: &LeaveRecord) -> Vec<Group> {
    vec![(
        "Leave",
        vec![
            (
                "Nature",
                format!(
                    "{} ({})",
                    l.nature_of_leave.code(),
                    l.nature_of_leave.description()
                ),
            ),
            ("From", format::date(l.from_date)),
            ("To", format::date(l.to_date)),
            ("Total Leave Days", l.total_leave_days.to_string()),
        ],
    )]
}

fn crew(name: Option<&str>, id: Option<&str>) -> String {
    match (opt_text(name), id.filter(|i| !i.trim().is_empty())) {
        (name, Some(id)) => format!("{} ({})", name, id),
        (name, None) => name,
    }
}

/// Print one record. Pretty mode groups fields under titles and hides empty
/// ones; plain mode prints every field as `key=value`.
pub fn print_record(ui_ctx: &UiContext, record: &DutyRecord, zone: &Zone, quiet: bool) {
    let groups = match &record.details {
        DutyDetails::Working(w) => working_groups(w),
        DutyDetails::Spare(s) => spare_groups(s),
        DutyDetails::PeriodicRest(r) => rest_groups(r, zone),
        DutyDetails::Leave(l) => leave_groups(l),
    };

    match ui_ctx.mode {
        OutputMode::Pretty => {
            if !quiet {
                print(
                    ui_ctx,
                    &header_with_context(ui_ctx, "show", Some(record.duty_type().label()), None),
                );
                blank_line(ui_ctx);
            }
            print(ui_ctx, &kv(ui_ctx, "ID", &record.id.to_string()));
            print(ui_ctx, &kv(ui_ctx, "Created", &zone.timestamp(&record.timestamp)));
            for (title, fields) in groups {
                let shown: Vec<&(&str, String)> =
                    fields.iter().filter(|(_, value)| value != EMPTY).collect();
                if shown.is_empty() {
                    continue;
                }
                blank_line(ui_ctx);
                print(ui_ctx, &section(ui_ctx, title));
                for (key, value) in shown {
                    print(ui_ctx, &format!("  {}", kv(ui_ctx, key, value)));
                }
            }
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("id={}", record.id);
            println!("type={}", record.duty_type().label());
            println!("created_at={}", record.timestamp.to_rfc3339());
            for (_, fields) in groups {
                for (key, value) in fields {
                    println!("{}", kv(ui_ctx, key, &value));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use dutylog_core::model::NatureOfLeave;
    use dutylog_core::DutyType;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_working_row() {
        let mut record = DutyRecord::draft(DutyType::Working, Utc::now(), day(15));
        if let DutyDetails::Working(w) = &mut record.details {
            w.train_number = Some("12952".into());
            w.section = Some("KGP-BBS".into());
            w.loco_number = Some("30281".into());
        }
        let row = record_row(&record);
        assert_eq!(row[1], "Working");
        assert_eq!(row[2], "2024-06-15");
        assert_eq!(row[3], "12952");
        assert_eq!(row[4], "KGP-BBS 30281");
    }

    #[test]
    fn test_leave_and_rest_rows() {
        let mut leave = DutyRecord::draft(DutyType::Leave, Utc::now(), day(10));
        if let DutyDetails::Leave(l) = &mut leave.details {
            l.to_date = day(12);
            l.total_leave_days = 3;
            l.nature_of_leave = NatureOfLeave::Sick;
        }
        let row = record_row(&leave);
        assert_eq!(row[2], "2024-06-10..2024-06-12");
        assert_eq!(row[3], "-");
        assert_eq!(row[4], "SICK 3 days");

        let mut rest = DutyRecord::draft(DutyType::PeriodicRest, Utc::now(), day(15));
        if let DutyDetails::PeriodicRest(r) = &mut rest.details {
            r.from_time = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
            r.to_date = day(16);
            r.to_time = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        }
        let row = record_row(&rest);
        assert_eq!(row[1], "Periodic Rest");
        assert_eq!(row[4], "22:00-08:00");
    }

    #[test]
    fn test_inspection_lines_skip_unrecorded_checks() {
        let inspection = Inspection {
            engine_oil_ok: Some(false),
            engine_oil_remark: Some("low level".into()),
            vcd_working: Some(true),
            bp_count: Some("2".into()),
            ..Inspection::default()
        };
        assert_eq!(
            inspection_lines(&inspection),
            vec![
                ("Engine Oil", "NOT OK (low level)".to_string()),
                ("VCD", "OK".to_string()),
                ("BP", "2".to_string()),
            ]
        );
        assert!(inspection_lines(&Inspection::default()).is_empty());
    }

    #[test]
    fn test_stations() {
        assert_eq!(stations(Some("HWH"), Some("KGP")), "HWH - KGP");
        assert_eq!(stations(None, Some("KGP")), "- - KGP");
        assert_eq!(stations(None, None), "-");
    }

    #[test]
    fn test_crew_formatting() {
        assert_eq!(crew(Some("R. Das"), Some("KGP123")), "R. Das (KGP123)");
        assert_eq!(crew(Some("R. Das"), None), "R. Das");
        assert_eq!(crew(None, None), "-");
    }
}
