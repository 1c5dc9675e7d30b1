//! The crew member's profile, one per installation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DutyLogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Designation {
    #[default]
    #[serde(rename = "Assistant Loco Pilot")]
    AssistantLocoPilot,
    #[serde(rename = "Loco Pilot")]
    LocoPilot,
    #[serde(rename = "Train Manager (Guard)")]
    TrainManager,
    #[serde(rename = "CLI")]
    CrewController,
}

impl Designation {
    pub const ALL: [Designation; 4] = [
        Designation::AssistantLocoPilot,
        Designation::LocoPilot,
        Designation::TrainManager,
        Designation::CrewController,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Designation::AssistantLocoPilot => "Assistant Loco Pilot",
            Designation::LocoPilot => "Loco Pilot",
            Designation::TrainManager => "Train Manager (Guard)",
            Designation::CrewController => "CLI",
        }
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Designation {
    type Err = DutyLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if let Some(found) = Designation::ALL
            .iter()
            .find(|d| d.label().to_lowercase() == normalized)
        {
            return Ok(*found);
        }
        match normalized.as_str() {
            "alp" => Ok(Designation::AssistantLocoPilot),
            "lp" => Ok(Designation::LocoPilot),
            "guard" | "tm" | "train manager" => Ok(Designation::TrainManager),
            "cli" => Ok(Designation::CrewController),
            _ => Err(DutyLogError::InvalidInput(format!(
                "Unknown designation \"{}\" (use ALP, LP, Guard or CLI)",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub crew_id: String,
    pub designation: Designation,
    pub mobile: String,
    pub email: String,
    /// `data:` URI of the profile photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl UserProfile {
    /// First letter of the name, shown when there is no photo.
    pub fn initial(&self) -> Option<char> {
        self.name.trim().chars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_designation_parses_codes_and_labels() {
        assert_eq!(
            "ALP".parse::<Designation>().unwrap(),
            Designation::AssistantLocoPilot
        );
        assert_eq!(
            "train manager (guard)".parse::<Designation>().unwrap(),
            Designation::TrainManager
        );
        assert!("driver".parse::<Designation>().is_err());
    }

    #[test]
    fn test_profile_json_uses_labels() {
        let profile = UserProfile {
            name: "Asha Verma".into(),
            crew_id: "NDLS1234".into(),
            designation: Designation::LocoPilot,
            mobile: "9800000000".into(),
            email: "asha@example.com".into(),
            photo: None,
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["designation"], "Loco Pilot");
        assert_eq!(value["crewId"], "NDLS1234");
        assert!(value.get("photo").is_none());
        assert_eq!(profile.initial(), Some('A'));
    }
}
