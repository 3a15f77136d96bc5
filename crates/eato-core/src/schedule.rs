use crate::error::{EatoError, Result};
use crate::paths;
use crate::types::LaunchStatus;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ScheduleEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Catalog slug this entry launches.
    pub slug: String,
    pub launch_date: String,
    pub quarter: String,
    #[serde(default)]
    pub status: LaunchStatus,
    /// Roadmap summary; distinct from the catalog description.
    #[serde(default)]
    pub description: String,
}

impl ScheduleEntry {
    /// Entry whose quarter label repeats the launch date, as the site content does.
    pub fn upcoming(
        slug: impl Into<String>,
        launch_date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let launch_date = launch_date.into();
        Self {
            slug: slug.into(),
            quarter: launch_date.clone(),
            launch_date,
            status: LaunchStatus::Upcoming,
            description: description.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// Ordered roadmap entries. The order is the display order and is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self, slug: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.slug == slug)
    }

    /// Slugs scheduled more than once, each reported once.
    pub fn duplicate_slugs(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut dups = Vec::new();
        for e in &self.entries {
            if !seen.insert(e.slug.as_str()) && !dups.contains(&e.slug) {
                dups.push(e.slug.clone());
            }
        }
        dups
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::schedule_path(root);
        if !path.exists() {
            return Err(EatoError::NotInitialized);
        }
        crate::io::read_yaml(&path)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        crate::io::write_yaml(&paths::schedule_path(root), self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
