use crate::carousel::{self, Carousel};
use crate::catalog::Catalog;
use crate::config::{Config, ConfigWarning};
use crate::error::{EatoError, IntegrityIssue, Result};
use crate::paths;
use crate::schedule::Schedule;
use crate::timeline::{self, RoadmapSummary, TimelineCard};
use crate::types::Layer;
use crate::{content, io, keyword};
use std::collections::HashSet;
use std::path::Path;

/// Everything a page needs: config plus catalog, schedule and carousels,
/// cross-checked once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Site {
    config: Config,
    catalog: Catalog,
    schedule: Schedule,
    carousels: Vec<Carousel>,
}

impl Site {
    /// Assemble a site, rejecting content that fails [`Site::integrity_issues`].
    pub fn new(
        config: Config,
        catalog: Catalog,
        schedule: Schedule,
        carousels: Vec<Carousel>,
    ) -> Result<Self> {
        let site = Self {
            config,
            catalog,
            schedule,
            carousels,
        };
        let issues = site.integrity_issues();
        if !issues.is_empty() {
            return Err(EatoError::Integrity(issues));
        }
        Ok(site)
    }

    /// The shipped EatoSystems content.
    pub fn builtin() -> Result<Self> {
        Self::new(
            content::config(),
            content::catalog(),
            content::schedule(),
            content::carousels(),
        )
    }

    pub fn load(root: &Path) -> Result<Self> {
        let config = Config::load(root)?;
        let catalog = Catalog::load(root)?;
        let schedule = Schedule::load(root)?;
        let carousels = carousel::load_all(root)?;
        Self::new(config, catalog, schedule, carousels)
    }

    /// Write this site's content under `root/.eato`, skipping files that already exist.
    /// Returns the files that were written.
    pub fn scaffold(&self, root: &Path) -> Result<Vec<String>> {
        io::ensure_dir(&paths::eato_dir(root))?;
        let files = [
            (paths::CONFIG_FILE, serde_yaml::to_string(&self.config)?),
            (paths::CATALOG_FILE, serde_yaml::to_string(self.catalog.records())?),
            (paths::SCHEDULE_FILE, serde_yaml::to_string(&self.schedule)?),
            (paths::CAROUSELS_FILE, serde_yaml::to_string(&self.carousels)?),
        ];
        let mut written = Vec::new();
        for (rel, data) in files {
            if io::write_if_missing(&root.join(rel), data.as_bytes())? {
                written.push(rel.to_string());
            }
        }
        Ok(written)
    }

    /// Write this site's content under `root/.eato`, replacing existing files.
    pub fn save(&self, root: &Path) -> Result<()> {
        io::ensure_dir(&paths::eato_dir(root))?;
        self.config.save(root)?;
        self.catalog.save(root)?;
        self.schedule.save(root)?;
        carousel::save_all(root, &self.carousels)
    }

    /// Replace the configuration. Config never affects integrity.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn carousels(&self) -> &[Carousel] {
        &self.carousels
    }

    pub fn carousel(&self, slug: &str) -> Result<&Carousel> {
        carousel::find(&self.carousels, slug)
    }

    pub fn timeline(&self) -> Result<Vec<TimelineCard>> {
        timeline::build_with(&self.schedule, &self.catalog, &self.config.assets)
    }

    pub fn summary(&self) -> Result<RoadmapSummary> {
        Ok(timeline::summary(&self.timeline()?))
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Fatal problems: dangling schedule references, duplicate keys, bad slugs
    /// and unusable carousels.
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        for r in self.catalog.records() {
            if !paths::is_valid_slug(&r.slug) {
                issues.push(IntegrityIssue::InvalidSlug(r.slug.clone()));
            }
        }
        issues.extend(
            self.catalog
                .duplicate_slugs()
                .into_iter()
                .map(IntegrityIssue::DuplicateCatalogSlug),
        );
        issues.extend(
            self.schedule
                .duplicate_slugs()
                .into_iter()
                .map(IntegrityIssue::DuplicateScheduleSlug),
        );
        issues.extend(timeline::missing_records(&self.schedule, &self.catalog));

        let mut seen = HashSet::new();
        for c in &self.carousels {
            if !paths::is_valid_slug(&c.slug) {
                issues.push(IntegrityIssue::InvalidSlug(c.slug.clone()));
            }
            if !seen.insert(c.slug.as_str()) {
                issues.push(IntegrityIssue::DuplicateCarousel(c.slug.clone()));
            }
            if c.is_empty() {
                issues.push(IntegrityIssue::EmptyCarousel(c.slug.clone()));
            }
            if c.period_ms == 0 {
                issues.push(IntegrityIssue::ZeroPeriod(c.slug.clone()));
            }
        }

        issues
    }

    /// Non-fatal findings: config warnings plus content that will render with
    /// a fallback style or image keyword.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = self.config.validate();

        for r in self.catalog.records() {
            if !Layer::is_known(&r.layer) {
                warnings.push(ConfigWarning::warning(format!(
                    "system '{}' has unknown layer '{}'; the {} style is used",
                    r.slug,
                    r.layer,
                    Layer::default()
                )));
            }
        }

        for e in self.schedule.entries() {
            if !keyword::is_mapped(&e.slug) {
                warnings.push(ConfigWarning::warning(format!(
                    "system '{}' has no image keyword; '{}' is used",
                    e.slug,
                    keyword::DEFAULT_KEYWORD
                )));
            }
        }

        let scheduled: HashSet<&str> = self
            .schedule
            .entries()
            .iter()
            .map(|e| e.slug.as_str())
            .collect();
        for r in self.catalog.records() {
            if !scheduled.contains(r.slug.as_str()) {
                warnings.push(ConfigWarning::warning(format!(
                    "system '{}' is catalogued but not on the roadmap",
                    r.slug
                )));
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
