use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::eligibility::EligibilityPolicy;

pub const TRIP_COST_PER_WAY: u64 = 300;
const CONFIG_FILE_NAME: &str = "config.json";
const DATA_DIR_NAME: &str = ".mototracker";

/// How a user edits a day: flipping one leg at a time, or picking a whole-day status.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StatusModel {
    PerLegToggle,
    FullDayStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Basic,
    #[default]
    Extended,
}

impl ProfileKind {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "basic" | "b" => Ok(ProfileKind::Basic),
            "extended" | "ext" | "e" => Ok(ProfileKind::Extended),
            _ => Err(anyhow!("Unknown profile: {}", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    pub kind: ProfileKind,
    pub cost_per_leg: u64,
    pub holiday_blocks_registration: bool,
    pub status_model: StatusModel,
    /// File the store is persisted to. Profiles use separate slots since their shapes diverged.
    pub storage_key: String,
}

impl Profile {
    pub fn basic() -> Self {
        Self {
            kind: ProfileKind::Basic,
            cost_per_leg: TRIP_COST_PER_WAY,
            holiday_blocks_registration: false,
            status_model: StatusModel::PerLegToggle,
            storage_key: "moto_tracker_data.json".to_string(),
        }
    }

    pub fn extended() -> Self {
        Self {
            kind: ProfileKind::Extended,
            cost_per_leg: TRIP_COST_PER_WAY,
            holiday_blocks_registration: true,
            status_model: StatusModel::FullDayStatus,
            storage_key: "moto_tracker_data_v2.json".to_string(),
        }
    }

    pub fn from_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Basic => Self::basic(),
            ProfileKind::Extended => Self::extended(),
        }
    }

    pub fn policy(&self) -> EligibilityPolicy {
        EligibilityPolicy::new(self.holiday_blocks_registration)
    }

    pub fn daily_potential(&self) -> u64 {
        self.cost_per_leg * 2
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::extended()
    }
}

/// Optional `config.json` in the data directory. Unset fields fall back to the profile preset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub profile: ProfileKind,
    pub cost_per_leg: Option<u64>,
    pub holiday_blocks_registration: Option<bool>,
}

impl AppConfig {
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))?;
        Ok(config)
    }

    pub fn resolve(&self) -> Profile {
        let mut profile = Profile::from_kind(self.profile);
        if let Some(cost) = self.cost_per_leg {
            profile.cost_per_leg = cost;
        }
        if let Some(blocks) = self.holiday_blocks_registration {
            profile.holiday_blocks_registration = blocks;
        }
        profile
    }
}

pub fn resolve_data_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    let path = match base_dir {
        Some(dir) => dir,
        None => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory"))?;
            home_dir.join(DATA_DIR_NAME)
        }
    };
    fs::create_dir_all(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let basic = Profile::basic();
        assert_eq!(basic.cost_per_leg, 300);
        assert!(!basic.holiday_blocks_registration);
        assert_eq!(basic.status_model, StatusModel::PerLegToggle);

        let extended = Profile::extended();
        assert!(extended.holiday_blocks_registration);
        assert_eq!(extended.status_model, StatusModel::FullDayStatus);
        assert_ne!(basic.storage_key, extended.storage_key);
        assert_eq!(extended.daily_potential(), 600);
    }

    #[test]
    fn test_config_overrides() {
        let config: AppConfig = serde_json::from_str(r#"{"profile":"basic","cost_per_leg":250}"#).unwrap();
        let profile = config.resolve();
        assert_eq!(profile.kind, ProfileKind::Basic);
        assert_eq!(profile.cost_per_leg, 250);
        assert!(!profile.holiday_blocks_registration);

        let config: AppConfig = serde_json::from_str(r#"{"holiday_blocks_registration":false}"#).unwrap();
        let profile = config.resolve();
        assert_eq!(profile.kind, ProfileKind::Extended);
        assert!(!profile.holiday_blocks_registration);
    }

    #[test]
    fn test_load_missing_and_present_config() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(AppConfig::load(dir.path()).unwrap(), AppConfig::default());

        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"profile":"basic"}"#).unwrap();
        assert_eq!(AppConfig::load(dir.path()).unwrap().profile, ProfileKind::Basic);

        fs::write(dir.path().join(CONFIG_FILE_NAME), "not json").unwrap();
        assert!(AppConfig::load(dir.path()).is_err());
    }

    #[test]
    fn test_parse_profile_kind() {
        assert_eq!(ProfileKind::parse("Basic").unwrap(), ProfileKind::Basic);
        assert_eq!(ProfileKind::parse("ext").unwrap(), ProfileKind::Extended);
        assert!(ProfileKind::parse("pro").is_err());
    }
}
