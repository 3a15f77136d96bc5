use crate::error::AppError;
use crate::pages::PageSession;
use crate::ticker::Ticker;
use eato_core::Site;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

type PageMap = Arc<Mutex<HashMap<String, Arc<PageSession>>>>;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    pub site: Arc<Site>,
    /// Mounted page instances by id. Removing an entry unmounts the page.
    pub pages: PageMap,
    page_ttl: Duration,
    max_pages: usize,
    // Sweeps idle pages; stops when the last clone of the state is dropped.
    _reaper: Option<Arc<Ticker>>,
}

impl AppState {
    pub fn new(root: PathBuf, site: Arc<Site>) -> Self {
        let server = &site.config().server;
        let page_ttl = server.page_ttl();
        let max_pages = server.max_pages;
        let pages: PageMap = Arc::new(Mutex::new(HashMap::new()));

        // Guard: only spawn if inside a Tokio runtime (skipped in sync unit tests).
        let reaper = tokio::runtime::Handle::try_current().is_ok().then(|| {
            let pages = Arc::clone(&pages);
            let sweep_every = (page_ttl / 2).max(Duration::from_secs(1));
            Arc::new(Ticker::spawn(sweep_every, move || {
                let pages = Arc::clone(&pages);
                async move {
                    let evicted = evict_idle(&pages, page_ttl).await;
                    if evicted > 0 {
                        tracing::info!(evicted, "unmounted idle pages");
                    }
                }
            }))
        });

        Self {
            root,
            site,
            pages,
            page_ttl,
            max_pages,
            _reaper: reaper,
        }
    }

    /// Look up a page and mark it as seen.
    pub async fn page(&self, id: &str) -> Result<Arc<PageSession>, AppError> {
        let page = self
            .pages
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("no page instance '{id}'")))?;
        page.touch();
        Ok(page)
    }

    /// Register a freshly opened page. When the registry is full, idle pages
    /// are evicted first; if it is still full the page is refused.
    pub async fn insert_page(&self, page: Arc<PageSession>) -> Result<(), AppError> {
        let mut pages = self.pages.lock().await;
        if pages.len() >= self.max_pages {
            let ttl = self.page_ttl;
            pages.retain(|_, p| !p.is_idle(ttl));
        }
        if pages.len() >= self.max_pages {
            return Err(AppError::unavailable(format!(
                "too many open pages (limit {})",
                self.max_pages
            )));
        }
        pages.insert(page.id().to_string(), page);
        Ok(())
    }

    /// Unmount pages idle for longer than the configured TTL. Returns how many went.
    pub async fn evict_idle(&self) -> usize {
        evict_idle(&self.pages, self.page_ttl).await
    }

    /// Unmount every page instance. Returns how many were open.
    pub async fn close_all(&self) -> usize {
        let drained: Vec<_> = self.pages.lock().await.drain().collect();
        drained.len()
    }
}

async fn evict_idle(pages: &PageMap, ttl: Duration) -> usize {
    let mut pages = pages.lock().await;
    let before = pages.len();
    pages.retain(|_, p| !p.is_idle(ttl));
    before - pages.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(
            PathBuf::from("/tmp/test"),
            Arc::new(Site::builtin().unwrap()),
        )
    }

    #[test]
    fn new_state_stores_root() {
        let app = state();
        assert_eq!(app.root, PathBuf::from("/tmp/test"));
        assert!(app._reaper.is_none());
    }

    #[tokio::test]
    async fn unknown_page_is_not_found() {
        assert!(state().page("nope").await.is_err());
    }

    #[tokio::test]
    async fn close_all_empties_registry() {
        let app = state();
        let page = Arc::new(PageSession::open(None));
        let id = page.id().to_string();
        app.insert_page(page).await.unwrap();
        assert_eq!(app.close_all().await, 1);
        assert!(app.page(&id).await.is_err());
    }

    #[tokio::test]
    async fn full_registry_refuses_new_pages() {
        let mut config = eato_core::content::config();
        config.server.max_pages = 2;
        let site = Site::builtin().unwrap().with_config(config);
        let app = AppState::new(PathBuf::from("/tmp/test"), Arc::new(site));
        for _ in 0..2 {
            app.insert_page(Arc::new(PageSession::open(None)))
                .await
                .unwrap();
        }
        let err = app
            .insert_page(Arc::new(PageSession::open(None)))
            .await
            .unwrap_err();
        assert!(err.0.to_string().contains("limit 2"));
        assert_eq!(app.pages.lock().await.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn evict_idle_spares_recently_seen_pages() {
        let app = state();
        let stale = Arc::new(PageSession::open(None));
        let fresh = Arc::new(PageSession::open(None));
        let (stale_id, fresh_id) = (stale.id().to_string(), fresh.id().to_string());
        app.insert_page(stale).await.unwrap();
        app.insert_page(fresh).await.unwrap();

        tokio::time::sleep(Duration::from_secs(200)).await;
        app.page(&fresh_id).await.unwrap();
        tokio::time::sleep(Duration::from_secs(200)).await;

        // the background sweep may already have taken it
        app.evict_idle().await;
        assert_eq!(app.pages.lock().await.len(), 1);
        assert!(app.page(&stale_id).await.is_err());
        assert!(app.page(&fresh_id).await.is_ok());
    }
}
