//! Per-page interactive state: one expanded card, a cyclic carousel index,
//! the open section tab and an entrance-visibility flag.
//!
//! The state itself is synchronous and single-owner. Callers that drive
//! [`SelectionState::tick`] from a timer must serialize it with user handlers.

use crate::error::{EatoError, Result};
use crate::types::StepStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PageTab
// ---------------------------------------------------------------------------

/// Section tab of a system page. Pages open on `Overview`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageTab {
    #[default]
    Overview,
    Features,
    Roadmap,
}

impl PageTab {
    pub const ALL: [PageTab; 3] = [PageTab::Overview, PageTab::Features, PageTab::Roadmap];

    pub fn as_str(self) -> &'static str {
        match self {
            PageTab::Overview => "overview",
            PageTab::Features => "features",
            PageTab::Roadmap => "roadmap",
        }
    }
}

impl fmt::Display for PageTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PageTab {
    type Err = EatoError;

    fn from_str(s: &str) -> Result<Self> {
        PageTab::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| EatoError::InvalidTab(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// SelectionState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected_slug: Option<String>,
    active_index: usize,
    tab: PageTab,
    is_visible: bool,
    /// Carousel length; zero when the page has no carousel.
    len: usize,
}

impl SelectionState {
    /// Fresh state for a page whose carousel has `len` frames.
    pub fn new(len: usize) -> Self {
        Self {
            selected_slug: None,
            active_index: 0,
            tab: PageTab::Overview,
            is_visible: false,
            len,
        }
    }

    pub fn selected_slug(&self) -> Option<&str> {
        self.selected_slug.as_deref()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn tab(&self) -> PageTab {
        self.tab
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_expanded(&self, slug: &str) -> bool {
        self.selected_slug.as_deref() == Some(slug)
    }

    /// Collapse `slug` if it is expanded, otherwise expand it (collapsing any
    /// other card). Returns the slug expanded afterwards, if any.
    pub fn toggle(&mut self, slug: &str) -> Option<&str> {
        if self.is_expanded(slug) {
            self.selected_slug = None;
        } else {
            self.selected_slug = Some(slug.to_string());
        }
        self.selected_slug.as_deref()
    }

    /// Advance the carousel one frame, wrapping at the end. No-op without a carousel.
    pub fn tick(&mut self) -> usize {
        if self.len > 0 {
            self.active_index = (self.active_index + 1) % self.len;
        }
        self.active_index
    }

    /// Jump the carousel to `index` (a click on a step). The next tick
    /// continues from there.
    pub fn select(&mut self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(EatoError::StepOutOfRange {
                index,
                len: self.len,
            });
        }
        self.active_index = index;
        Ok(index)
    }

    /// Open `tab`. Returns `true` when the tab changed.
    pub fn set_tab(&mut self, tab: PageTab) -> bool {
        let changed = self.tab != tab;
        self.tab = tab;
        changed
    }

    /// Fire the entrance transition. Returns `true` only on the first call.
    pub fn mount(&mut self) -> bool {
        let changed = !self.is_visible;
        self.is_visible = true;
        changed
    }

    /// Stepper status of every carousel frame relative to the active one.
    pub fn steps(&self) -> Vec<StepStatus> {
        (0..self.len)
            .map(|i| StepStatus::for_index(i, self.active_index))
            .collect()
    }

    /// `(active + 1) / len` as a percentage; zero without a carousel.
    pub fn progress_percent(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        (self.active_index + 1) as f64 / self.len as f64 * 100.0
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let s = SelectionState::new(5);
        assert_eq!(s.selected_slug(), None);
        assert_eq!(s.active_index(), 0);
        assert!(!s.is_visible());
    }

    #[test]
    fn toggle_twice_collapses() {
        let mut s = SelectionState::new(0);
        assert_eq!(s.toggle("eatoglobal"), Some("eatoglobal"));
        assert_eq!(s.toggle("eatoglobal"), None);
        assert_eq!(s.selected_slug(), None);
    }

    #[test]
    fn toggle_other_replaces_selection() {
        let mut s = SelectionState::new(0);
        s.toggle("eatoglobal");
        s.toggle("eatoagent");
        assert_eq!(s.selected_slug(), Some("eatoagent"));
        assert!(!s.is_expanded("eatoglobal"));
        assert!(s.is_expanded("eatoagent"));
    }

    #[test]
    fn twelve_ticks_over_five_frames() {
        let mut s = SelectionState::new(5);
        for _ in 0..12 {
            s.tick();
        }
        assert_eq!(s.active_index(), 2);
    }

    #[test]
    fn tick_period_is_exact() {
        for len in 1..=7 {
            let mut s = SelectionState::new(len);
            for n in 1..=3 * len {
                assert_eq!(s.tick(), n % len);
            }
            assert_eq!(s.active_index(), 0);
        }
    }

    #[test]
    fn tick_without_carousel_stays_at_zero() {
        let mut s = SelectionState::default();
        assert_eq!(s.tick(), 0);
        assert_eq!(s.progress_percent(), 0.0);
        assert!(s.steps().is_empty());
    }

    #[test]
    fn mount_is_one_shot() {
        let mut s = SelectionState::new(0);
        assert!(s.mount());
        assert!(!s.mount());
        assert!(s.is_visible());
    }

    #[test]
    fn tick_and_toggle_are_independent() {
        let mut s = SelectionState::new(4);
        s.toggle("eatofund");
        s.tick();
        s.tick();
        assert_eq!(s.selected_slug(), Some("eatofund"));
        assert_eq!(s.active_index(), 2);
    }

    #[test]
    fn select_then_tick_continues_from_selection() {
        let mut s = SelectionState::new(4);
        s.tick();
        assert_eq!(s.select(3).unwrap(), 3);
        assert_eq!(s.tick(), 0);
        assert_eq!(s.tick(), 1);
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut s = SelectionState::new(4);
        s.tick();
        assert!(matches!(
            s.select(4),
            Err(EatoError::StepOutOfRange { index: 4, len: 4 })
        ));
        assert_eq!(s.active_index(), 1);
        assert!(SelectionState::default().select(0).is_err());
    }

    #[test]
    fn tab_defaults_to_overview_and_switches() {
        let mut s = SelectionState::new(0);
        assert_eq!(s.tab(), PageTab::Overview);
        assert!(s.set_tab(PageTab::Roadmap));
        assert!(!s.set_tab(PageTab::Roadmap));
        assert_eq!(s.tab(), PageTab::Roadmap);
    }

    #[test]
    fn tab_parses_lowercase_names() {
        assert_eq!("features".parse::<PageTab>().unwrap(), PageTab::Features);
        assert!(matches!(
            "portfolio".parse::<PageTab>(),
            Err(EatoError::InvalidTab(_))
        ));
    }

    #[test]
    fn steps_and_progress() {
        let mut s = SelectionState::new(5);
        s.tick();
        s.tick();
        assert_eq!(
            s.steps(),
            vec![
                StepStatus::Completed,
                StepStatus::Completed,
                StepStatus::Active,
                StepStatus::Upcoming,
                StepStatus::Upcoming,
            ]
        );
        assert!((s.progress_percent() - 60.0).abs() < 1e-9);
    }
}
