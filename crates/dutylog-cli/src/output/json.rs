//! JSON output for duty records.

use dutylog_core::{DutyDetails, DutyRecord};

use crate::app::Zone;

/// A record in its stored wire form, plus the rest duration for periodic
/// rest records (it is derived, never stored).
pub fn record_json(record: &DutyRecord, zone: &Zone) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(record)?;
    if let (DutyDetails::PeriodicRest(rest), Some(object)) =
        (&record.details, value.as_object_mut())
    {
        object.insert(
            "restDuration".to_string(),
            serde_json::Value::String(zone.rest_duration(rest).to_string()),
        );
    }
    Ok(value)
}

pub fn records_json<'a, I>(records: I, zone: &Zone) -> anyhow::Result<serde_json::Value>
where
    I: IntoIterator<Item = &'a DutyRecord>,
{
    let values = records
        .into_iter()
        .map(|record| record_json(record, zone))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(serde_json::Value::Array(values))
}
