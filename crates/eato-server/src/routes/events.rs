use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::IntoResponse;
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/pages/{id}/events — SSE stream of `snapshot` events.
///
/// The current snapshot is sent first, then one per tick, toggle or mount.
/// The stream ends when the page is closed.
pub async fn page_events(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let page = app.page(&id).await?;
    let rx = page.subscribe();
    let initial = Event::default()
        .event("snapshot")
        .json_data(page.snapshot().await)?;

    let updates = BroadcastStream::new(rx).filter_map(|msg| {
        msg.ok()
            .and_then(|snap| Event::default().event("snapshot").json_data(snap).ok())
            .map(Ok::<Event, Infallible>)
    });
    let stream = tokio_stream::once(Ok::<Event, Infallible>(initial)).chain(updates);
    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
