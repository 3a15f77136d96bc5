//! Live page instances: one [`SelectionState`] per mounted page, optionally
//! rotated by a [`Ticker`], with every change broadcast as a snapshot.

use crate::ticker::Ticker;
use chrono::{DateTime, Utc};
use eato_core::carousel::{Carousel, CarouselStep};
use eato_core::selection::{PageTab, SelectionState};
use eato_core::types::StepStatus;
use serde::Serialize;
use std::sync::{Arc, PoisonError};
use std::time::Duration;
use tokio::sync::{broadcast, Mutex};
use tokio::time::Instant;

/// Serializable view of a page instance at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub id: String,
    pub carousel: Option<String>,
    pub selected_slug: Option<String>,
    pub active_index: usize,
    pub tab: PageTab,
    pub is_visible: bool,
    pub steps: Vec<StepStatus>,
    pub progress_percent: f64,
    pub active_step: Option<CarouselStep>,
    pub created_at: DateTime<Utc>,
}

struct Shared {
    id: String,
    carousel: Option<Carousel>,
    created_at: DateTime<Utc>,
    // ticks and user handlers both go through this lock
    state: Mutex<SelectionState>,
    tx: broadcast::Sender<PageSnapshot>,
}

impl Shared {
    fn snapshot_of(&self, state: &SelectionState) -> PageSnapshot {
        PageSnapshot {
            id: self.id.clone(),
            carousel: self.carousel.as_ref().map(|c| c.slug.clone()),
            selected_slug: state.selected_slug().map(str::to_string),
            active_index: state.active_index(),
            tab: state.tab(),
            is_visible: state.is_visible(),
            steps: state.steps(),
            progress_percent: state.progress_percent(),
            active_step: self
                .carousel
                .as_ref()
                .and_then(|c| c.steps.get(state.active_index()).cloned()),
            created_at: self.created_at,
        }
    }

    /// Apply `f` under the lock and broadcast the resulting snapshot.
    async fn update<R>(&self, f: impl FnOnce(&mut SelectionState) -> R) -> (R, PageSnapshot) {
        let mut state = self.state.lock().await;
        let out = f(&mut state);
        let snap = self.snapshot_of(&state);
        drop(state);
        // no subscribers is fine
        let _ = self.tx.send(snap.clone());
        (out, snap)
    }
}

pub struct PageSession {
    shared: Arc<Shared>,
    ticker: Option<Ticker>,
    last_seen: std::sync::Mutex<Instant>,
}

impl PageSession {
    /// Open a page in the initial state. With a carousel, its timer starts
    /// now and fires every `period_ms`.
    pub fn open(carousel: Option<Carousel>) -> Self {
        let len = carousel.as_ref().map_or(0, Carousel::len);
        let (tx, _) = broadcast::channel(64);
        let shared = Arc::new(Shared {
            id: uuid::Uuid::new_v4().to_string(),
            carousel,
            created_at: Utc::now(),
            state: Mutex::new(SelectionState::new(len)),
            tx,
        });

        let ticker = shared.carousel.as_ref().map(|c| {
            let shared = Arc::clone(&shared);
            Ticker::spawn(c.period(), move || {
                let shared = Arc::clone(&shared);
                async move {
                    let (index, _) = shared.update(SelectionState::tick).await;
                    tracing::debug!(page = %shared.id, index, "carousel tick");
                }
            })
        });

        Self {
            shared,
            ticker,
            last_seen: std::sync::Mutex::new(Instant::now()),
        }
    }

    pub fn id(&self) -> &str {
        &self.shared.id
    }

    pub fn has_timer(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Record client activity on this page.
    pub fn touch(&self) {
        *self.last_seen.lock().unwrap_or_else(PoisonError::into_inner) = Instant::now();
    }

    /// True when nothing has touched the page for `ttl` and no event
    /// stream is attached.
    pub fn is_idle(&self, ttl: Duration) -> bool {
        let last_seen = *self.last_seen.lock().unwrap_or_else(PoisonError::into_inner);
        self.shared.tx.receiver_count() == 0 && last_seen.elapsed() >= ttl
    }

    pub async fn snapshot(&self) -> PageSnapshot {
        let state = self.shared.state.lock().await;
        self.shared.snapshot_of(&state)
    }

    pub async fn toggle(&self, slug: &str) -> PageSnapshot {
        self.shared
            .update(|s| {
                s.toggle(slug);
            })
            .await
            .1
    }

    /// Jump the carousel to `index`; out of range leaves the page unchanged.
    pub async fn select(&self, index: usize) -> eato_core::Result<PageSnapshot> {
        let (result, snap) = self.shared.update(|s| s.select(index)).await;
        result.map(|_| snap)
    }

    pub async fn set_tab(&self, tab: PageTab) -> PageSnapshot {
        self.shared
            .update(|s| {
                s.set_tab(tab);
            })
            .await
            .1
    }

    pub async fn mount(&self) -> PageSnapshot {
        self.shared.update(SelectionState::mount).await.1
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PageSnapshot> {
        self.shared.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn framework_steps() -> Carousel {
        eato_core::carousel::find(&eato_core::content::carousels(), "framework-steps")
            .unwrap()
            .clone()
    }

    #[tokio::test]
    async fn opens_in_initial_state() {
        let page = PageSession::open(None);
        let snap = page.snapshot().await;
        assert_eq!(snap.selected_slug, None);
        assert_eq!(snap.active_index, 0);
        assert!(!snap.is_visible);
        assert!(snap.steps.is_empty());
        assert!(!page.has_timer());
    }

    #[tokio::test]
    async fn toggle_and_mount_are_broadcast() {
        let page = PageSession::open(None);
        let mut rx = page.subscribe();

        page.toggle("eatoglobal").await;
        assert_eq!(
            rx.recv().await.unwrap().selected_slug.as_deref(),
            Some("eatoglobal")
        );

        page.mount().await;
        assert!(rx.recv().await.unwrap().is_visible);

        let snap = page.toggle("eatoglobal").await;
        assert_eq!(snap.selected_slug, None);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_rotates_the_carousel() {
        let page = PageSession::open(Some(framework_steps()));
        assert!(page.has_timer());

        tokio::time::sleep(Duration::from_millis(4000 * 12 + 100)).await;
        let snap = page.snapshot().await;
        assert_eq!(snap.active_index, 2);
        assert_eq!(snap.active_step.unwrap().title, "Design & Build in Public");
        assert!((snap.progress_percent - 60.0).abs() < 1e-9);
    }

    #[tokio::test(start_paused = true)]
    async fn clicked_step_is_where_the_timer_resumes() {
        let page = PageSession::open(Some(framework_steps()));
        tokio::time::sleep(Duration::from_millis(4100)).await;
        assert_eq!(page.snapshot().await.active_index, 1);

        let snap = page.select(4).await.unwrap();
        assert_eq!(snap.active_index, 4);
        assert!((snap.progress_percent - 100.0).abs() < 1e-9);

        tokio::time::sleep(Duration::from_millis(4000)).await;
        assert_eq!(page.snapshot().await.active_index, 0);
    }

    #[tokio::test]
    async fn select_out_of_range_keeps_state() {
        let page = PageSession::open(Some(framework_steps()));
        assert!(page.select(5).await.is_err());
        assert_eq!(page.snapshot().await.active_index, 0);
    }

    #[tokio::test]
    async fn tab_change_is_broadcast() {
        let page = PageSession::open(None);
        let mut rx = page.subscribe();
        assert_eq!(page.snapshot().await.tab, PageTab::Overview);
        page.set_tab(PageTab::Features).await;
        assert_eq!(rx.recv().await.unwrap().tab, PageTab::Features);
    }

    #[tokio::test(start_paused = true)]
    async fn idle_after_ttl_unless_touched_or_streaming() {
        let ttl = Duration::from_secs(60);
        let page = PageSession::open(None);
        assert!(!page.is_idle(ttl));

        tokio::time::sleep(Duration::from_secs(45)).await;
        page.touch();
        tokio::time::sleep(Duration::from_secs(45)).await;
        assert!(!page.is_idle(ttl));

        let rx = page.subscribe();
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(!page.is_idle(ttl));
        drop(rx);
        assert!(page.is_idle(ttl));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_session_stops_ticks() {
        let page = PageSession::open(Some(framework_steps()));
        let mut rx = page.subscribe();
        tokio::time::sleep(Duration::from_millis(4100)).await;
        assert_eq!(rx.recv().await.unwrap().active_index, 1);

        drop(page);
        tokio::time::sleep(Duration::from_millis(40_000)).await;
        // the sender lives in the aborted task and the session, both gone
        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Closed)
        ));
    }
}
