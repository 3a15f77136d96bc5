use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Layer
// ---------------------------------------------------------------------------

/// The twelve conceptual layers a system belongs to, in launch order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Layer {
    #[default]
    Soil,
    Seed,
    Pollination,
    Root,
    Sprout,
    Flow,
    Mycelium,
    Crop,
    Harvest,
    Regeneration,
    Canopy,
    Sanctuary,
}

impl Layer {
    pub fn all() -> &'static [Layer] {
        &[
            Layer::Soil,
            Layer::Seed,
            Layer::Pollination,
            Layer::Root,
            Layer::Sprout,
            Layer::Flow,
            Layer::Mycelium,
            Layer::Crop,
            Layer::Harvest,
            Layer::Regeneration,
            Layer::Canopy,
            Layer::Sanctuary,
        ]
    }

    /// Tag as it appears in catalog content, e.g. `SOIL`.
    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Soil => "SOIL",
            Layer::Seed => "SEED",
            Layer::Pollination => "POLLINATION",
            Layer::Root => "ROOT",
            Layer::Sprout => "SPROUT",
            Layer::Flow => "FLOW",
            Layer::Mycelium => "MYCELIUM",
            Layer::Crop => "CROP",
            Layer::Harvest => "HARVEST",
            Layer::Regeneration => "REGENERATION",
            Layer::Canopy => "CANOPY",
            Layer::Sanctuary => "SANCTUARY",
        }
    }

    /// Lowercase keyword used in asset file names, e.g. `soil`.
    pub fn keyword(self) -> &'static str {
        match self {
            Layer::Soil => "soil",
            Layer::Seed => "seed",
            Layer::Pollination => "pollination",
            Layer::Root => "root",
            Layer::Sprout => "sprout",
            Layer::Flow => "flow",
            Layer::Mycelium => "mycelium",
            Layer::Crop => "crop",
            Layer::Harvest => "harvest",
            Layer::Regeneration => "regeneration",
            Layer::Canopy => "canopy",
            Layer::Sanctuary => "sanctuary",
        }
    }

    /// Lenient parse: unknown tags resolve to the default layer.
    pub fn resolve(tag: &str) -> Layer {
        tag.parse().unwrap_or_default()
    }

    pub fn is_known(tag: &str) -> bool {
        tag.parse::<Layer>().is_ok()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Layer {
    type Err = crate::error::EatoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layer::all()
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| crate::error::EatoError::InvalidLayer(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// LaunchStatus
// ---------------------------------------------------------------------------

/// Roadmap status of a schedule entry. Open: unrecognised values round-trip verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LaunchStatus {
    #[default]
    Upcoming,
    InProgress,
    Completed,
    Other(String),
}

impl LaunchStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LaunchStatus::Upcoming => "upcoming",
            LaunchStatus::InProgress => "in_progress",
            LaunchStatus::Completed => "completed",
            LaunchStatus::Other(s) => s,
        }
    }
}

impl From<String> for LaunchStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "upcoming" => LaunchStatus::Upcoming,
            "in_progress" => LaunchStatus::InProgress,
            "completed" => LaunchStatus::Completed,
            _ => LaunchStatus::Other(s),
        }
    }
}

impl From<LaunchStatus> for String {
    fn from(s: LaunchStatus) -> Self {
        match s {
            LaunchStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LaunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// Which side of the timeline spine a card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn for_position(position: usize) -> Side {
        if position % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

// ---------------------------------------------------------------------------
// StepStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

impl StepStatus {
    /// Stepper status of step `index` while `active` is the current step.
    pub fn for_index(index: usize, active: usize) -> StepStatus {
        match index.cmp(&active) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepStatus::Completed => "completed",
            StepStatus::Active => "active",
            StepStatus::Upcoming => "upcoming",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn twelve_layers() {
        assert_eq!(Layer::all().len(), 12);
    }

    #[test]
    fn layer_roundtrip() {
        for layer in Layer::all() {
            assert_eq!(Layer::from_str(layer.as_str()).unwrap(), *layer);
        }
    }

    #[test]
    fn layer_match_is_exact() {
        assert!(Layer::from_str("soil").is_err());
        assert!(Layer::from_str("").is_err());
        assert!(!Layer::is_known("Seed"));
        assert!(Layer::is_known("SEED"));
    }

    #[test]
    fn unknown_layer_resolves_to_soil() {
        assert_eq!(Layer::resolve("BEDROCK"), Layer::Soil);
        assert_eq!(Layer::resolve("CANOPY"), Layer::Canopy);
    }

    #[test]
    fn layer_yaml_uses_upper_tags() {
        let yaml = serde_yaml::to_string(&Layer::Regeneration).unwrap();
        assert_eq!(yaml.trim(), "REGENERATION");
    }

    #[test]
    fn launch_status_is_open() {
        let parsed: LaunchStatus = serde_yaml::from_str("upcoming").unwrap();
        assert_eq!(parsed, LaunchStatus::Upcoming);

        let parsed: LaunchStatus = serde_yaml::from_str("paused").unwrap();
        assert_eq!(parsed, LaunchStatus::Other("paused".into()));
        assert_eq!(serde_yaml::to_string(&parsed).unwrap().trim(), "paused");
    }

    #[test]
    fn near_miss_status_is_kept_verbatim() {
        let parsed: LaunchStatus = serde_yaml::from_str("in-progress").unwrap();
        assert_eq!(parsed, LaunchStatus::Other("in-progress".into()));
        assert_eq!(serde_yaml::to_string(&parsed).unwrap().trim(), "in-progress");
    }

    #[test]
    fn side_alternates() {
        assert_eq!(Side::for_position(0), Side::Left);
        assert_eq!(Side::for_position(1), Side::Right);
        assert_eq!(Side::for_position(10), Side::Left);
    }

    #[test]
    fn step_status_by_index() {
        assert_eq!(StepStatus::for_index(0, 2), StepStatus::Completed);
        assert_eq!(StepStatus::for_index(2, 2), StepStatus::Active);
        assert_eq!(StepStatus::for_index(4, 2), StepStatus::Upcoming);
    }
}
