//! The user's time zone: a named IANA zone or the system zone.

use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;

use dutylog_core::derive::{rest_duration, RestDuration};
use dutylog_core::model::PeriodicRest;

use crate::ui::format;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Zone {
    Named(Tz),
    Local,
}

impl Zone {
    pub fn parse(name: &str) -> anyhow::Result<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        name.parse::<Tz>().map(Zone::Named).map_err(|_| {
            anyhow::anyhow!(
                "Unknown time zone \"{}\" (use an IANA name such as Asia/Kolkata)",
                name
            )
        })
    }

    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        match self {
            Zone::Named(tz) => now.with_timezone(tz).date_naive(),
            Zone::Local => now.with_timezone(&Local).date_naive(),
        }
    }

    pub fn timestamp(&self, ts: &DateTime<Utc>) -> String {
        match self {
            Zone::Named(tz) => format::timestamp(ts, tz),
            Zone::Local => format::timestamp(ts, &Local),
        }
    }

    pub fn rest_duration(&self, rest: &PeriodicRest) -> RestDuration {
        match self {
            Zone::Named(tz) => rest_duration(tz, rest.start(), rest.end()),
            Zone::Local => rest_duration(&Local, rest.start(), rest.end()),
        }
    }

    pub fn name(&self) -> String {
        match self {
            Zone::Named(tz) => tz.name().to_string(),
            Zone::Local => "local".to_string(),
        }
    }
}
