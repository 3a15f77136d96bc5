use crate::error::{EatoError, Result};
use crate::paths;
use crate::selection::SelectionState;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselStep {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A rotating sequence shown on a page, advanced every `period_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    pub slug: String,
    pub period_ms: u64,
    pub steps: Vec<CarouselStep>,
}

impl Carousel {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Selection state sized for this carousel.
    pub fn selection(&self) -> SelectionState {
        SelectionState::new(self.steps.len())
    }
}

pub fn load_all(root: &Path) -> Result<Vec<Carousel>> {
    let path = paths::carousels_path(root);
    // carousels are optional content
    if !path.exists() {
        return Ok(Vec::new());
    }
    crate::io::read_yaml(&path)
}

pub fn save_all(root: &Path, carousels: &[Carousel]) -> Result<()> {
    crate::io::write_yaml(&paths::carousels_path(root), &carousels)
}

pub fn find<'a>(carousels: &'a [Carousel], slug: &str) -> Result<&'a Carousel> {
    carousels
        .iter()
        .find(|c| c.slug == slug)
        .ok_or_else(|| EatoError::CarouselNotFound(slug.to_string()))
}
