//! Duty records: a shared envelope plus one variant per duty type.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::wire;
use crate::error::DutyLogError;

/// Category of a duty record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DutyType {
    Working,
    Spare,
    #[serde(rename = "Periodic Rest")]
    PeriodicRest,
    Leave,
}

impl DutyType {
    pub const ALL: [DutyType; 4] = [
        DutyType::Working,
        DutyType::Spare,
        DutyType::PeriodicRest,
        DutyType::Leave,
    ];

    /// Display label, also used by search and the export `Type` column.
    pub fn label(&self) -> &'static str {
        match self {
            DutyType::Working => "Working",
            DutyType::Spare => "Spare",
            DutyType::PeriodicRest => "Periodic Rest",
            DutyType::Leave => "Leave",
        }
    }
}

impl fmt::Display for DutyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DutyType {
    type Err = DutyLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "working" | "work" => Ok(DutyType::Working),
            "spare" => Ok(DutyType::Spare),
            "periodic rest" | "rest" | "pr" => Ok(DutyType::PeriodicRest),
            "leave" => Ok(DutyType::Leave),
            _ => Err(DutyLogError::InvalidInput(format!(
                "Unknown duty type \"{}\" (use working, spare, rest or leave)",
                s
            ))),
        }
    }
}

/// Loco hood position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Hood {
    Sh,
    Lh,
    Cab1,
    Cab2,
}

impl Hood {
    pub fn code(&self) -> &'static str {
        match self {
            Hood::Sh => "SH",
            Hood::Lh => "LH",
            Hood::Cab1 => "CAB1",
            Hood::Cab2 => "CAB2",
        }
    }
}

impl FromStr for Hood {
    type Err = DutyLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SH" => Ok(Hood::Sh),
            "LH" => Ok(Hood::Lh),
            "CAB1" => Ok(Hood::Cab1),
            "CAB2" => Ok(Hood::Cab2),
            _ => Err(DutyLogError::InvalidInput(format!(
                "Unknown hood \"{}\" (use SH, LH, CAB1 or CAB2)",
                s
            ))),
        }
    }
}

/// Leave category codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NatureOfLeave {
    #[default]
    #[serde(rename = "CL")]
    Casual,
    #[serde(rename = "LAP")]
    AveragePay,
    #[serde(rename = "LHAP")]
    HalfAveragePay,
    #[serde(rename = "PL")]
    Privilege,
    #[serde(rename = "SICK")]
    Sick,
    #[serde(rename = "HOD")]
    Hod,
}

impl NatureOfLeave {
    pub fn code(&self) -> &'static str {
        match self {
            NatureOfLeave::Casual => "CL",
            NatureOfLeave::AveragePay => "LAP",
            NatureOfLeave::HalfAveragePay => "LHAP",
            NatureOfLeave::Privilege => "PL",
            NatureOfLeave::Sick => "SICK",
            NatureOfLeave::Hod => "HOD",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NatureOfLeave::Casual => "Casual Leave",
            NatureOfLeave::AveragePay => "Leave Average Pay",
            NatureOfLeave::HalfAveragePay => "Leave Half Average Pay",
            NatureOfLeave::Privilege => "Privilege Leave",
            NatureOfLeave::Sick => "Medical Leave",
            NatureOfLeave::Hod => "HOD Leave",
        }
    }
}

impl FromStr for NatureOfLeave {
    type Err = DutyLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CL" => Ok(NatureOfLeave::Casual),
            "LAP" => Ok(NatureOfLeave::AveragePay),
            "LHAP" => Ok(NatureOfLeave::HalfAveragePay),
            "PL" => Ok(NatureOfLeave::Privilege),
            "SICK" => Ok(NatureOfLeave::Sick),
            "HOD" => Ok(NatureOfLeave::Hod),
            _ => Err(DutyLogError::InvalidInput(format!(
                "Unknown nature of leave \"{}\" (use CL, LAP, LHAP, PL, SICK or HOD)",
                s
            ))),
        }
    }
}

/// One inspection toggle on a working duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyItem {
    pub id: String,
    pub label: String,
    pub ok: bool,
    #[serde(default)]
    pub remark: String,
}

impl SafetyItem {
    pub fn new(label: impl Into<String>, ok: bool, remark: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: slug(&label),
            label,
            ok,
            remark: remark.into(),
        }
    }

    /// Export cell value: `OK` or `NOT OK (<remark>)`.
    pub fn status_text(&self) -> String {
        if self.ok {
            "OK".to_string()
        } else {
            format!("NOT OK ({})", self.remark)
        }
    }
}

fn slug(label: &str) -> String {
    label
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Pre-departure inspection checklist of a working duty.
///
/// Each check is a toggle with an optional remark; `None` means the check
/// was not recorded. Stored flat alongside the other working-duty fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    // Oil
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_oil_ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_oil_remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governor_oil_ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governor_oil_remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressor_oil_ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressor_oil_remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformer_oil_ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformer_oil_remark: Option<String>,

    // Lights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_light_ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_light_remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_light_ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_light_remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flasher_light_ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flasher_light_remark: Option<String>,
    #[serde(rename = "GuageLightOk", default, skip_serializing_if = "Option::is_none")]
    pub gauge_light_ok: Option<bool>,
    #[serde(rename = "GuageLightRemark", default, skip_serializing_if = "Option::is_none")]
    pub gauge_light_remark: Option<String>,

    // Control panel and safety equipment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire_extinguisher_count: Option<String>,
    #[serde(default, with = "wire::opt_date", skip_serializing_if = "Option::is_none")]
    pub fire_expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcd_working: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcd_remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pcp_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pcp_remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u_clamp_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u_clamp_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bp_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fp_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wt_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wooden_wedges_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repair_book_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_card_available: Option<bool>,

    // Machine room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp_ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp_remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sr_ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sr_remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfo_ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfo_remark: Option<String>,
}

impl Inspection {
    /// Toggle checks as `(label, ok, remark)`, in checklist order.
    pub fn checks(&self) -> Vec<(&'static str, Option<bool>, Option<&str>)> {
        vec![
            ("Engine Oil", self.engine_oil_ok, self.engine_oil_remark.as_deref()),
            ("Governor Oil", self.governor_oil_ok, self.governor_oil_remark.as_deref()),
            ("Compressor Oil", self.compressor_oil_ok, self.compressor_oil_remark.as_deref()),
            ("Transformer Oil", self.transformer_oil_ok, self.transformer_oil_remark.as_deref()),
            ("Head Light", self.head_light_ok, self.head_light_remark.as_deref()),
            ("Marker Light", self.marker_light_ok, self.marker_light_remark.as_deref()),
            ("Flasher Light", self.flasher_light_ok, self.flasher_light_remark.as_deref()),
            ("Gauge Light", self.gauge_light_ok, self.gauge_light_remark.as_deref()),
            ("VCD", self.vcd_working, self.vcd_remark.as_deref()),
            ("PCP", self.pcp_available, self.pcp_remark.as_deref()),
            ("U Clamp", self.u_clamp_available, None),
            ("Repair Book", self.repair_book_available, None),
            ("Trip Card", self.trip_card_available, None),
            ("CP", self.cp_ok, self.cp_remark.as_deref()),
            ("SR", self.sr_ok, self.sr_remark.as_deref()),
            ("TFO", self.tfo_ok, self.tfo_remark.as_deref()),
        ]
    }

    /// Equipment counts as `(label, value)`, skipping unrecorded ones.
    pub fn counts(&self) -> Vec<(&'static str, &str)> {
        [
            ("Fire Extinguishers", self.fire_extinguisher_count.as_deref()),
            ("U Clamps", self.u_clamp_count.as_deref()),
            ("BP", self.bp_count.as_deref()),
            ("FP", self.fp_count.as_deref()),
            ("WT No", self.wt_no.as_deref()),
            ("Wooden Wedges", self.wooden_wedges_count.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Inspection::default()
    }
}

/// A loco working duty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingDuty {
    pub date: NaiveDate,
    pub train_number: Option<String>,
    pub train_name: Option<String>,
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_station: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_station: Option<String>,

    pub loco_number: Option<String>,
    pub loco_class: Option<String>,
    pub shed: Option<String>,
    #[serde(default, with = "wire::opt_code")]
    pub hood: Option<Hood>,

    #[serde(default, with = "wire::opt_hhmm", skip_serializing_if = "Option::is_none")]
    pub call_time: Option<NaiveTime>,
    #[serde(default, with = "wire::opt_hhmm", skip_serializing_if = "Option::is_none")]
    pub sign_on_time: Option<NaiveTime>,
    #[serde(default, with = "wire::opt_hhmm", skip_serializing_if = "Option::is_none")]
    pub sign_off_time: Option<NaiveTime>,
    #[serde(default, with = "wire::opt_datetime", skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<NaiveDateTime>,
    #[serde(default, with = "wire::opt_datetime", skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<NaiveDateTime>,

    pub pilot_name: Option<String>,
    pub pilot_id: Option<String>,
    pub guard_name: Option<String>,
    pub guard_id: Option<String>,

    pub bpc_no: Option<String>,
    #[serde(rename = "BPCType")]
    pub bpc_type: Option<String>,
    pub issued_by: Option<String>,
    #[serde(default, with = "wire::opt_date", skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<NaiveDate>,
    #[serde(default, with = "wire::opt_date", skip_serializing_if = "Option::is_none")]
    pub valid_upto_date: Option<NaiveDate>,
    pub fsd_no: Option<String>,
    #[serde(default, with = "wire::opt_date", skip_serializing_if = "Option::is_none")]
    pub detonator_expiry: Option<NaiveDate>,

    pub hsd_received: Option<f64>,
    pub hsd_balance: Option<f64>,
    pub hsd_consumption: Option<f64>,

    pub te_c: Option<String>,
    pub te_r: Option<String>,
    pub me_c: Option<String>,
    pub me_r: Option<String>,
    pub con: Option<String>,
    pub hog1: Option<String>,
    pub hog2: Option<String>,
    pub tc_reading: Option<String>,
    pub mc_reading: Option<String>,

    #[serde(flatten)]
    pub inspection: Inspection,

    #[serde(default)]
    pub safety_items: Vec<SafetyItem>,
    pub remarks: Option<String>,
}

impl WorkingDuty {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            train_number: None,
            train_name: None,
            section: None,
            from_station: None,
            to_station: None,
            loco_number: None,
            loco_class: None,
            shed: None,
            hood: None,
            call_time: None,
            sign_on_time: None,
            sign_off_time: None,
            departure_time: None,
            arrival_time: None,
            pilot_name: None,
            pilot_id: None,
            guard_name: None,
            guard_id: None,
            bpc_no: None,
            bpc_type: None,
            issued_by: None,
            issued_date: None,
            valid_upto_date: None,
            fsd_no: None,
            detonator_expiry: None,
            hsd_received: None,
            hsd_balance: None,
            hsd_consumption: None,
            te_c: None,
            te_r: None,
            me_c: None,
            me_r: None,
            con: None,
            hog1: None,
            hog2: None,
            tc_reading: None,
            mc_reading: None,
            inspection: Inspection::default(),
            safety_items: Vec::new(),
            remarks: None,
        }
    }

    /// Copy the crew and certificate block from an earlier working duty.
    ///
    /// These tend to stay the same from one shift to the next.
    pub fn carry_over_from(&mut self, previous: &WorkingDuty) {
        self.pilot_name = previous.pilot_name.clone();
        self.pilot_id = previous.pilot_id.clone();
        self.guard_name = previous.guard_name.clone();
        self.guard_id = previous.guard_id.clone();
        self.bpc_no = previous.bpc_no.clone();
        self.issued_by = previous.issued_by.clone();
        self.issued_date = previous.issued_date;
        self.valid_upto_date = previous.valid_upto_date;
        self.fsd_no = previous.fsd_no.clone();
        self.detonator_expiry = previous.detonator_expiry;
    }
}

/// A spare (standby) duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpareDuty {
    pub date: NaiveDate,
    pub train_number: Option<String>,
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_station: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_station: Option<String>,
    #[serde(default, with = "wire::opt_hhmm", skip_serializing_if = "Option::is_none")]
    pub call_time: Option<NaiveTime>,
    #[serde(default, with = "wire::opt_hhmm", skip_serializing_if = "Option::is_none")]
    pub sign_on_time: Option<NaiveTime>,
    #[serde(default, with = "wire::opt_hhmm", skip_serializing_if = "Option::is_none")]
    pub sign_off_time: Option<NaiveTime>,
    pub pilot_name: Option<String>,
    pub pilot_id: Option<String>,
    pub guard_name: Option<String>,
    pub guard_id: Option<String>,
}

impl SpareDuty {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            train_number: None,
            section: None,
            from_station: None,
            to_station: None,
            call_time: None,
            sign_on_time: None,
            sign_off_time: None,
            pilot_name: None,
            pilot_id: None,
            guard_name: None,
            guard_id: None,
        }
    }
}

/// A periodic rest window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodicRest {
    pub from_date: NaiveDate,
    #[serde(with = "wire::hhmm")]
    pub from_time: NaiveTime,
    pub to_date: NaiveDate,
    #[serde(with = "wire::hhmm")]
    pub to_time: NaiveTime,
    /// Train name or number the rest follows.
    pub train_number: Option<String>,
}

impl PeriodicRest {
    /// Zero-length window starting and ending at midnight of `day`.
    pub fn new(day: NaiveDate) -> Self {
        Self {
            from_date: day,
            from_time: NaiveTime::MIN,
            to_date: day,
            to_time: NaiveTime::MIN,
            train_number: None,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.from_date.and_time(self.from_time)
    }

    pub fn end(&self) -> NaiveDateTime {
        self.to_date.and_time(self.to_time)
    }
}

/// A leave period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(default)]
    pub nature_of_leave: NatureOfLeave,
    /// Derived from `from_date`/`to_date`; see [`crate::derive::leave_day_count`].
    #[serde(default)]
    pub total_leave_days: u32,
}

impl LeaveRecord {
    /// One day of casual leave on `day`.
    pub fn new(day: NaiveDate) -> Self {
        Self {
            from_date: day,
            to_date: day,
            nature_of_leave: NatureOfLeave::Casual,
            total_leave_days: 1,
        }
    }
}

/// Type-specific payload of a duty record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DutyDetails {
    Working(WorkingDuty),
    Spare(SpareDuty),
    #[serde(rename = "Periodic Rest")]
    PeriodicRest(PeriodicRest),
    Leave(LeaveRecord),
}

impl DutyDetails {
    /// Seed payload for a new draft of `duty_type` anchored on `today`.
    pub fn seed(duty_type: DutyType, today: NaiveDate) -> Self {
        match duty_type {
            DutyType::Working => DutyDetails::Working(WorkingDuty::new(today)),
            DutyType::Spare => DutyDetails::Spare(SpareDuty::new(today)),
            DutyType::PeriodicRest => DutyDetails::PeriodicRest(PeriodicRest::new(today)),
            DutyType::Leave => DutyDetails::Leave(LeaveRecord::new(today)),
        }
    }

    pub fn duty_type(&self) -> DutyType {
        match self {
            DutyDetails::Working(_) => DutyType::Working,
            DutyDetails::Spare(_) => DutyType::Spare,
            DutyDetails::PeriodicRest(_) => DutyType::PeriodicRest,
            DutyDetails::Leave(_) => DutyType::Leave,
        }
    }
}

/// A persisted duty entry.
///
/// `id`, the duty type and `timestamp` are fixed at creation. Edits replace
/// the whole record under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutyRecord {
    pub id: Uuid,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub details: DutyDetails,
}

impl DutyRecord {
    /// A fresh draft with a new id, the creation instant and type defaults.
    pub fn draft(duty_type: DutyType, now: DateTime<Utc>, today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: now,
            details: DutyDetails::seed(duty_type, today),
        }
    }

    pub fn duty_type(&self) -> DutyType {
        self.details.duty_type()
    }

    /// Date used by range filtering: `date` or `fromDate`.
    pub fn anchor_date(&self) -> NaiveDate {
        match &self.details {
            DutyDetails::Working(w) => w.date,
            DutyDetails::Spare(s) => s.date,
            DutyDetails::PeriodicRest(r) => r.from_date,
            DutyDetails::Leave(l) => l.from_date,
        }
    }

    /// The `date` field for day duties; `None` for rest and leave windows.
    pub fn duty_date(&self) -> Option<NaiveDate> {
        match &self.details {
            DutyDetails::Working(w) => Some(w.date),
            DutyDetails::Spare(s) => Some(s.date),
            DutyDetails::PeriodicRest(_) | DutyDetails::Leave(_) => None,
        }
    }

    pub fn from_date(&self) -> Option<NaiveDate> {
        match &self.details {
            DutyDetails::PeriodicRest(r) => Some(r.from_date),
            DutyDetails::Leave(l) => Some(l.from_date),
            _ => None,
        }
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        match &self.details {
            DutyDetails::PeriodicRest(r) => Some(r.to_date),
            DutyDetails::Leave(l) => Some(l.to_date),
            _ => None,
        }
    }

    pub fn train_number(&self) -> Option<&str> {
        match &self.details {
            DutyDetails::Working(w) => w.train_number.as_deref(),
            DutyDetails::Spare(s) => s.train_number.as_deref(),
            DutyDetails::PeriodicRest(r) => r.train_number.as_deref(),
            DutyDetails::Leave(_) => None,
        }
    }

    pub fn loco_number(&self) -> Option<&str> {
        match &self.details {
            DutyDetails::Working(w) => w.loco_number.as_deref(),
            _ => None,
        }
    }

    pub fn section(&self) -> Option<&str> {
        match &self.details {
            DutyDetails::Working(w) => w.section.as_deref(),
            DutyDetails::Spare(s) => s.section.as_deref(),
            _ => None,
        }
    }

    pub fn pilot_name(&self) -> Option<&str> {
        match &self.details {
            DutyDetails::Working(w) => w.pilot_name.as_deref(),
            DutyDetails::Spare(s) => s.pilot_name.as_deref(),
            _ => None,
        }
    }

    pub fn pilot_id(&self) -> Option<&str> {
        match &self.details {
            DutyDetails::Working(w) => w.pilot_id.as_deref(),
            DutyDetails::Spare(s) => s.pilot_id.as_deref(),
            _ => None,
        }
    }

    pub fn guard_name(&self) -> Option<&str> {
        match &self.details {
            DutyDetails::Working(w) => w.guard_name.as_deref(),
            DutyDetails::Spare(s) => s.guard_name.as_deref(),
            _ => None,
        }
    }

    pub fn guard_id(&self) -> Option<&str> {
        match &self.details {
            DutyDetails::Working(w) => w.guard_id.as_deref(),
            DutyDetails::Spare(s) => s.guard_id.as_deref(),
            _ => None,
        }
    }

    pub fn call_time(&self) -> Option<NaiveTime> {
        match &self.details {
            DutyDetails::Working(w) => w.call_time,
            DutyDetails::Spare(s) => s.call_time,
            _ => None,
        }
    }

    pub fn sign_on_time(&self) -> Option<NaiveTime> {
        match &self.details {
            DutyDetails::Working(w) => w.sign_on_time,
            DutyDetails::Spare(s) => s.sign_on_time,
            _ => None,
        }
    }

    pub fn sign_off_time(&self) -> Option<NaiveTime> {
        match &self.details {
            DutyDetails::Working(w) => w.sign_off_time,
            DutyDetails::Spare(s) => s.sign_off_time,
            _ => None,
        }
    }

    pub fn nature_of_leave(&self) -> Option<NatureOfLeave> {
        match &self.details {
            DutyDetails::Leave(l) => Some(l.nature_of_leave),
            _ => None,
        }
    }

    pub fn safety_items(&self) -> &[SafetyItem] {
        match &self.details {
            DutyDetails::Working(w) => &w.safety_items,
            _ => &[],
        }
    }
}
