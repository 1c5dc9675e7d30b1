//! Record model: duty records, their per-type payloads and the user profile.

mod duty;
mod profile;
pub mod wire;

pub use duty::{
    DutyDetails, DutyRecord, DutyType, Hood, Inspection, LeaveRecord, NatureOfLeave, PeriodicRest,
    SafetyItem, SpareDuty, WorkingDuty,
};
pub use profile::{Designation, UserProfile};
