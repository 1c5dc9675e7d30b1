//! Draft controller for creating and editing duty records.
//!
//! A [`DutyForm`] owns an unsaved draft. Field edits arrive as `key=value`
//! pairs; after an edit to an input of a derived field the derivation is run
//! again and only assigned when its result differs from the stored value.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use tracing::debug;

use crate::derive::{assign_if_changed, leave_day_count, rest_duration, RestDuration};
use crate::error::{DutyLogError, Result};
use crate::model::wire;
use crate::model::{
    DutyDetails, DutyRecord, DutyType, Inspection, LeaveRecord, PeriodicRest, SafetyItem,
    SpareDuty, WorkingDuty,
};

/// Editable draft of one duty record.
#[derive(Debug, Clone)]
pub struct DutyForm<Tz: TimeZone> {
    tz: Tz,
    record: DutyRecord,
    rest_duration: RestDuration,
    editing: bool,
    derived_updates: usize,
}

impl<Tz: TimeZone> DutyForm<Tz> {
    /// Open a form for a new record of `duty_type`.
    pub fn new(duty_type: DutyType, tz: Tz, now: DateTime<Utc>) -> Self {
        let today = now.with_timezone(&tz).date_naive();
        let record = DutyRecord::draft(duty_type, now, today);
        Self::open(record, tz, false)
    }

    /// Open a form for a new record, seeding a working duty with the crew and
    /// certificate details of the most recent working duty in `history`.
    pub fn new_with_history(
        duty_type: DutyType,
        tz: Tz,
        now: DateTime<Utc>,
        history: &[DutyRecord],
    ) -> Self {
        let mut form = Self::new(duty_type, tz, now);
        if let DutyDetails::Working(draft) = &mut form.record.details {
            let previous = history.iter().find_map(|r| match &r.details {
                DutyDetails::Working(w) => Some(w),
                _ => None,
            });
            if let Some(previous) = previous {
                draft.carry_over_from(previous);
            }
        }
        form
    }

    /// Open a form over an existing record. Submitting it replaces that record.
    pub fn edit(record: DutyRecord, tz: Tz) -> Self {
        Self::open(record, tz, true)
    }

    fn open(record: DutyRecord, tz: Tz, editing: bool) -> Self {
        let mut form = Self {
            tz,
            record,
            rest_duration: RestDuration::ZERO,
            editing,
            derived_updates: 0,
        };
        form.recompute();
        form
    }

    pub fn record(&self) -> &DutyRecord {
        &self.record
    }

    pub fn duty_type(&self) -> DutyType {
        self.record.duty_type()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Current rest-duration display, for periodic rest drafts.
    pub fn rest_duration(&self) -> Option<RestDuration> {
        match self.record.details {
            DutyDetails::PeriodicRest(_) => Some(self.rest_duration),
            _ => None,
        }
    }

    /// Current leave-day count, for leave drafts.
    pub fn total_leave_days(&self) -> Option<u32> {
        match &self.record.details {
            DutyDetails::Leave(leave) => Some(leave.total_leave_days),
            _ => None,
        }
    }

    /// How many times a derived value has actually been reassigned.
    pub fn derived_updates(&self) -> usize {
        self.derived_updates
    }

    /// Whether `key` is an input of this draft's derived field.
    pub fn affects_derived(&self, key: &str) -> bool {
        let key = normalize_key(key);
        match self.record.details {
            DutyDetails::Leave(_) => matches!(key.as_str(), "fromdate" | "todate"),
            DutyDetails::PeriodicRest(_) => {
                matches!(key.as_str(), "fromdate" | "fromtime" | "todate" | "totime")
            }
            _ => false,
        }
    }

    /// Re-run the derivations for this draft. Returns whether anything changed.
    pub fn recompute(&mut self) -> bool {
        let changed = match &mut self.record.details {
            DutyDetails::Leave(leave) => {
                let days = leave_day_count(&self.tz, leave.from_date, leave.to_date);
                assign_if_changed(&mut leave.total_leave_days, days)
            }
            DutyDetails::PeriodicRest(rest) => {
                let duration = rest_duration(&self.tz, rest.start(), rest.end());
                assign_if_changed(&mut self.rest_duration, duration)
            }
            _ => false,
        };
        if changed {
            self.derived_updates += 1;
            debug!(id = %self.record.id, "derived field updated");
        }
        changed
    }

    /// Apply one field edit. Returns whether a derived field changed as a result.
    ///
    /// An empty value clears an optional field.
    pub fn set(&mut self, key: &str, value: &str) -> Result<bool> {
        let normalized = normalize_key(key);
        let applied = match &mut self.record.details {
            DutyDetails::Working(w) => set_working(w, &normalized, value)?,
            DutyDetails::Spare(s) => set_spare(s, &normalized, value)?,
            DutyDetails::PeriodicRest(r) => set_rest(r, &normalized, value)?,
            DutyDetails::Leave(l) => set_leave(l, &normalized, value)?,
        };
        if !applied {
            return Err(DutyLogError::InvalidInput(format!(
                "Unknown field \"{}\" for {} duty",
                key,
                self.duty_type()
            )));
        }
        if self.affects_derived(key) {
            Ok(self.recompute())
        } else {
            Ok(false)
        }
    }

    /// Finish editing and hand back the record for upsert.
    pub fn submit(self) -> DutyRecord {
        self.record
    }
}

/// Field names accepted by [`DutyForm::set`] for each duty type.
pub fn field_names(duty_type: DutyType) -> &'static [&'static str] {
    match duty_type {
        DutyType::Working => &[
            "date",
            "train-number",
            "train-name",
            "section",
            "from-station",
            "to-station",
            "loco-number",
            "loco-class",
            "shed",
            "hood",
            "call-time",
            "sign-on",
            "sign-off",
            "departure",
            "arrival",
            "pilot-name",
            "pilot-id",
            "guard-name",
            "guard-id",
            "bpc-no",
            "bpc-type",
            "issued-by",
            "issued-date",
            "valid-upto",
            "fsd-no",
            "detonator-expiry",
            "hsd-received",
            "hsd-balance",
            "hsd-consumption",
            "te-c",
            "te-r",
            "me-c",
            "me-r",
            "con",
            "hog1",
            "hog2",
            "tc-reading",
            "mc-reading",
            "engine-oil",
            "engine-oil-remark",
            "governor-oil",
            "governor-oil-remark",
            "compressor-oil",
            "compressor-oil-remark",
            "transformer-oil",
            "transformer-oil-remark",
            "head-light",
            "head-light-remark",
            "marker-light",
            "marker-light-remark",
            "flasher-light",
            "flasher-light-remark",
            "gauge-light",
            "gauge-light-remark",
            "fire-extinguisher-count",
            "fire-expiry-date",
            "vcd",
            "vcd-remark",
            "pcp",
            "pcp-remark",
            "u-clamp",
            "u-clamp-count",
            "bp-count",
            "fp-count",
            "wt-no",
            "wooden-wedges-count",
            "repair-book",
            "trip-card",
            "cp",
            "cp-remark",
            "sr",
            "sr-remark",
            "tfo",
            "tfo-remark",
            "safety",
            "remarks",
        ],
        DutyType::Spare => &[
            "date",
            "train-number",
            "section",
            "from-station",
            "to-station",
            "call-time",
            "sign-on",
            "sign-off",
            "pilot-name",
            "pilot-id",
            "guard-name",
            "guard-id",
        ],
        DutyType::PeriodicRest => &["from-date", "from-time", "to-date", "to-time", "train-number"],
        DutyType::Leave => &["nature", "from-date", "to-date"],
    }
}

fn normalize_key(key: &str) -> String {
    key.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

fn text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn upper_text(value: &str) -> Option<String> {
    text(value).map(|v| v.to_uppercase())
}

fn date(key: &str, value: &str) -> Result<NaiveDate> {
    wire::parse_date(value).ok_or_else(|| {
        DutyLogError::InvalidInput(format!(
            "Invalid {} \"{}\" (expected YYYY-MM-DD)",
            key, value
        ))
    })
}

fn opt_date(key: &str, value: &str) -> Result<Option<NaiveDate>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    date(key, value).map(Some)
}

fn time(key: &str, value: &str) -> Result<NaiveTime> {
    wire::parse_time(value).ok_or_else(|| {
        DutyLogError::InvalidInput(format!("Invalid {} \"{}\" (expected HH:MM)", key, value))
    })
}

fn opt_time(key: &str, value: &str) -> Result<Option<NaiveTime>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    time(key, value).map(Some)
}

fn opt_datetime(key: &str, value: &str) -> Result<Option<NaiveDateTime>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    wire::parse_datetime(value).map(Some).ok_or_else(|| {
        DutyLogError::InvalidInput(format!(
            "Invalid {} \"{}\" (expected YYYY-MM-DDTHH:MM)",
            key, value
        ))
    })
}

fn opt_number(key: &str, value: &str) -> Result<Option<f64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| DutyLogError::InvalidInput(format!("Invalid {} \"{}\"", key, value)))
}

/// Inspection toggle: `ok`/`yes` or `not ok`/`no`; empty clears it.
fn opt_flag(key: &str, value: &str) -> Result<Option<bool>> {
    match value.trim().to_lowercase().as_str() {
        "" => Ok(None),
        "ok" | "yes" | "y" | "true" => Ok(Some(true)),
        "not ok" | "notok" | "not-ok" | "no" | "n" | "false" => Ok(Some(false)),
        _ => Err(DutyLogError::InvalidInput(format!(
            "Invalid {} \"{}\" (use ok or not ok)",
            key, value
        ))),
    }
}

/// Parse `<label>:ok` or `<label>:not ok[:<remark>]`.
fn safety_item(value: &str) -> Result<SafetyItem> {
    let mut parts = value.splitn(3, ':');
    let label = parts.next().map(str::trim).unwrap_or_default();
    let status = parts.next().map(|s| s.trim().to_lowercase());
    let remark = parts.next().map(str::trim).unwrap_or_default();
    if label.is_empty() {
        return Err(DutyLogError::InvalidInput(
            "Safety item needs a label (e.g. \"Head Light:ok\")".to_string(),
        ));
    }
    let ok = match status.as_deref() {
        Some("ok") => true,
        Some("not ok") | Some("notok") | Some("not-ok") => false,
        _ => {
            return Err(DutyLogError::InvalidInput(format!(
                "Safety item \"{}\" needs a status: ok or not ok",
                value
            )))
        }
    };
    Ok(SafetyItem::new(label, ok, remark))
}

fn set_working(w: &mut WorkingDuty, key: &str, value: &str) -> Result<bool> {
    match key {
        "date" => w.date = date("date", value)?,
        "train" | "trainnumber" => w.train_number = text(value),
        "trainname" => w.train_name = text(value),
        "section" => w.section = upper_text(value),
        "fromstation" => w.from_station = upper_text(value),
        "tostation" => w.to_station = upper_text(value),
        "loco" | "loconumber" => w.loco_number = text(value),
        "lococlass" => w.loco_class = text(value),
        "shed" => w.shed = text(value),
        "hood" => {
            w.hood = match text(value) {
                Some(v) => Some(v.parse()?),
                None => None,
            }
        }
        "calltime" => w.call_time = opt_time("call time", value)?,
        "signon" | "signontime" => w.sign_on_time = opt_time("sign on", value)?,
        "signoff" | "signofftime" => w.sign_off_time = opt_time("sign off", value)?,
        "departure" | "departuretime" => w.departure_time = opt_datetime("departure", value)?,
        "arrival" | "arrivaltime" => w.arrival_time = opt_datetime("arrival", value)?,
        "pilot" | "pilotname" => w.pilot_name = text(value),
        "pilotid" => w.pilot_id = text(value),
        "guard" | "guardname" => w.guard_name = text(value),
        "guardid" => w.guard_id = text(value),
        "bpcno" => w.bpc_no = text(value),
        "bpctype" => w.bpc_type = text(value),
        "issuedby" => w.issued_by = text(value),
        "issueddate" => w.issued_date = opt_date("issued date", value)?,
        "validupto" | "validuptodate" => w.valid_upto_date = opt_date("valid upto", value)?,
        "fsdno" => w.fsd_no = text(value),
        "detonatorexpiry" => w.detonator_expiry = opt_date("detonator expiry", value)?,
        "hsdreceived" => w.hsd_received = opt_number("HSD received", value)?,
        "hsdbalance" => w.hsd_balance = opt_number("HSD balance", value)?,
        "hsdconsumption" => w.hsd_consumption = opt_number("HSD consumption", value)?,
        "tec" => w.te_c = text(value),
        "ter" => w.te_r = text(value),
        "mec" => w.me_c = text(value),
        "mer" => w.me_r = text(value),
        "con" => w.con = text(value),
        "hog1" => w.hog1 = text(value),
        "hog2" => w.hog2 = text(value),
        "tc" | "tcreading" => w.tc_reading = text(value),
        "mc" | "mcreading" => w.mc_reading = text(value),
        "remarks" => w.remarks = text(value),
        "safety" => {
            let item = safety_item(value)?;
            match w.safety_items.iter_mut().find(|i| i.label == item.label) {
                Some(existing) => *existing = item,
                None => w.safety_items.push(item),
            }
        }
        _ => return set_inspection(&mut w.inspection, key, value),
    }
    Ok(true)
}

fn set_inspection(i: &mut Inspection, key: &str, value: &str) -> Result<bool> {
    match key {
        "engineoil" | "engineoilok" => i.engine_oil_ok = opt_flag("engine oil", value)?,
        "engineoilremark" => i.engine_oil_remark = text(value),
        "governoroil" | "governoroilok" => i.governor_oil_ok = opt_flag("governor oil", value)?,
        "governoroilremark" => i.governor_oil_remark = text(value),
        "compressoroil" | "compressoroilok" => {
            i.compressor_oil_ok = opt_flag("compressor oil", value)?
        }
        "compressoroilremark" => i.compressor_oil_remark = text(value),
        "transformeroil" | "transformeroilok" => {
            i.transformer_oil_ok = opt_flag("transformer oil", value)?
        }
        "transformeroilremark" => i.transformer_oil_remark = text(value),
        "headlight" | "headlightok" => i.head_light_ok = opt_flag("head light", value)?,
        "headlightremark" => i.head_light_remark = text(value),
        "markerlight" | "markerlightok" => i.marker_light_ok = opt_flag("marker light", value)?,
        "markerlightremark" => i.marker_light_remark = text(value),
        "flasherlight" | "flasherlightok" => {
            i.flasher_light_ok = opt_flag("flasher light", value)?
        }
        "flasherlightremark" => i.flasher_light_remark = text(value),
        "gaugelight" | "gaugelightok" | "guagelight" | "guagelightok" => {
            i.gauge_light_ok = opt_flag("gauge light", value)?
        }
        "gaugelightremark" | "guagelightremark" => i.gauge_light_remark = text(value),
        "fireextinguishercount" => i.fire_extinguisher_count = text(value),
        "fireexpirydate" | "fireexpiry" => {
            i.fire_expiry_date = opt_date("fire expiry date", value)?
        }
        "vcd" | "vcdworking" => i.vcd_working = opt_flag("VCD", value)?,
        "vcdremark" => i.vcd_remark = text(value),
        "pcp" | "pcpavailable" => i.pcp_available = opt_flag("PCP", value)?,
        "pcpremark" => i.pcp_remark = text(value),
        "uclamp" | "uclampavailable" => i.u_clamp_available = opt_flag("U clamp", value)?,
        "uclampcount" => i.u_clamp_count = text(value),
        "bpcount" => i.bp_count = text(value),
        "fpcount" => i.fp_count = text(value),
        "wtno" => i.wt_no = text(value),
        "woodenwedgescount" | "woodenwedges" => i.wooden_wedges_count = text(value),
        "repairbook" | "repairbookavailable" => {
            i.repair_book_available = opt_flag("repair book", value)?
        }
        "tripcard" | "tripcardavailable" => {
            i.trip_card_available = opt_flag("trip card", value)?
        }
        "cp" | "cpok" => i.cp_ok = opt_flag("CP", value)?,
        "cpremark" => i.cp_remark = text(value),
        "sr" | "srok" => i.sr_ok = opt_flag("SR", value)?,
        "srremark" => i.sr_remark = text(value),
        "tfo" | "tfook" => i.tfo_ok = opt_flag("TFO", value)?,
        "tforemark" => i.tfo_remark = text(value),
        _ => return Ok(false),
    }
    Ok(true)
}

fn set_spare(s: &mut SpareDuty, key: &str, value: &str) -> Result<bool> {
    match key {
        "date" => s.date = date("date", value)?,
        "train" | "trainnumber" => s.train_number = text(value),
        "section" => s.section = upper_text(value),
        "fromstation" => s.from_station = upper_text(value),
        "tostation" => s.to_station = upper_text(value),
        "calltime" => s.call_time = opt_time("call time", value)?,
        "signon" | "signontime" => s.sign_on_time = opt_time("sign on", value)?,
        "signoff" | "signofftime" => s.sign_off_time = opt_time("sign off", value)?,
        "pilot" | "pilotname" => s.pilot_name = text(value),
        "pilotid" => s.pilot_id = text(value),
        "guard" | "guardname" => s.guard_name = text(value),
        "guardid" => s.guard_id = text(value),
        _ => return Ok(false),
    }
    Ok(true)
}

fn set_rest(r: &mut PeriodicRest, key: &str, value: &str) -> Result<bool> {
    match key {
        "fromdate" => r.from_date = date("from date", value)?,
        "fromtime" => r.from_time = time("from time", value)?,
        "todate" => r.to_date = date("to date", value)?,
        "totime" => r.to_time = time("to time", value)?,
        "train" | "trainnumber" => r.train_number = text(value),
        _ => return Ok(false),
    }
    Ok(true)
}

fn set_leave(l: &mut LeaveRecord, key: &str, value: &str) -> Result<bool> {
    match key {
        "nature" | "natureofleave" => l.nature_of_leave = value.parse()?,
        "fromdate" => l.from_date = date("from date", value)?,
        "todate" => l.to_date = date("to date", value)?,
        "totalleavedays" => {
            return Err(DutyLogError::InvalidInput(
                "Total leave days is calculated from the from/to dates".to_string(),
            ))
        }
        _ => return Ok(false),
    }
    Ok(true)
}
