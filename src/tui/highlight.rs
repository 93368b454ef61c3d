//! Cosmetic highlight expiry.
//!
//! After a move the UI emphasizes the affected squares for a short time.
//! The timer lives entirely in the view layer and never touches the engine.

use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};
use tracing::trace;

/// Generation of a highlight that should fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightExpired(pub u64);

/// Spawns a fire-and-forget task that reports `generation` after `after`.
///
/// A closed receiver is ignored; stale generations are filtered by the app.
pub fn schedule_expiry(tx: mpsc::UnboundedSender<HighlightExpired>, generation: u64, after: Duration) {
    tokio::spawn(async move {
        sleep(after).await;
        trace!(generation, "Highlight expired");
        let _ = tx.send(HighlightExpired(generation));
    });
}
