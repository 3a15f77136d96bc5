use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EatoError {
    #[error("not initialized: run 'eato init'")]
    NotInitialized,

    #[error("system not found: {0}")]
    SystemNotFound(String),

    #[error("carousel not found: {0}")]
    CarouselNotFound(String),

    #[error("invalid slug '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidSlug(String),

    #[error("invalid layer '{0}'")]
    InvalidLayer(String),

    #[error("carousel step {index} out of range: carousel has {len} steps")]
    StepOutOfRange { index: usize, len: usize },

    #[error("invalid tab '{0}': expected overview, features or roadmap")]
    InvalidTab(String),

    #[error("site content failed integrity checks: {}", join_issues(.0))]
    Integrity(Vec<IntegrityIssue>),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EatoError>;

// ---------------------------------------------------------------------------
// IntegrityIssue
// ---------------------------------------------------------------------------

/// A single problem found while cross-checking catalog, schedule and carousels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// A schedule entry names a slug that has no catalog record.
    MissingCatalogRecord { slug: String, position: usize },
    DuplicateCatalogSlug(String),
    DuplicateScheduleSlug(String),
    InvalidSlug(String),
    DuplicateCarousel(String),
    EmptyCarousel(String),
    ZeroPeriod(String),
}

impl IntegrityIssue {
    /// The slug the issue is about.
    pub fn slug(&self) -> &str {
        match self {
            IntegrityIssue::MissingCatalogRecord { slug, .. } => slug,
            IntegrityIssue::DuplicateCatalogSlug(s)
            | IntegrityIssue::DuplicateScheduleSlug(s)
            | IntegrityIssue::InvalidSlug(s)
            | IntegrityIssue::DuplicateCarousel(s)
            | IntegrityIssue::EmptyCarousel(s)
            | IntegrityIssue::ZeroPeriod(s) => s,
        }
    }
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::MissingCatalogRecord { slug, position } => write!(
                f,
                "schedule entry #{position} references '{slug}' which is not in the catalog"
            ),
            IntegrityIssue::DuplicateCatalogSlug(s) => {
                write!(f, "catalog lists '{s}' more than once")
            }
            IntegrityIssue::DuplicateScheduleSlug(s) => {
                write!(f, "schedule lists '{s}' more than once")
            }
            IntegrityIssue::InvalidSlug(s) => write!(f, "invalid slug '{s}'"),
            IntegrityIssue::DuplicateCarousel(s) => {
                write!(f, "carousel '{s}' is defined more than once")
            }
            IntegrityIssue::EmptyCarousel(s) => write!(f, "carousel '{s}' has no steps"),
            IntegrityIssue::ZeroPeriod(s) => write!(f, "carousel '{s}' has a zero period"),
        }
    }
}

fn join_issues(issues: &[IntegrityIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrity_error_names_every_offending_slug() {
        let err = EatoError::Integrity(vec![
            IntegrityIssue::MissingCatalogRecord {
                slug: "eatoundefined".into(),
                position: 3,
            },
            IntegrityIssue::EmptyCarousel("fund-features".into()),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("schedule entry #3 references 'eatoundefined'"));
        assert!(msg.contains("carousel 'fund-features' has no steps"));
    }

    #[test]
    fn issue_slug_accessor() {
        let issue = IntegrityIssue::MissingCatalogRecord {
            slug: "ghost".into(),
            position: 0,
        };
        assert_eq!(issue.slug(), "ghost");
        assert_eq!(IntegrityIssue::ZeroPeriod("x".into()).slug(), "x");
    }
}
