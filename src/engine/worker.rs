use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::http::{RequestIssuer, RequestOutcome};
use crate::shutdown::{ShutdownReceiver, deadline_fired};

/// Spawns one worker. It returns how many outcomes it published.
///
/// The deadline is only checked between attempts: an attempt already in
/// flight when it fires still completes and is published.
pub(super) fn spawn_worker<I>(
    worker_id: usize,
    issuer: Arc<I>,
    mut shutdown_rx: ShutdownReceiver,
    outcome_tx: mpsc::Sender<RequestOutcome>,
) -> JoinHandle<u64>
where
    I: RequestIssuer + ?Sized + 'static,
{
    tokio::spawn(async move {
        let mut published: u64 = 0;
        while !deadline_fired(&mut shutdown_rx) {
            let outcome = issuer.issue().await;
            if outcome_tx.send(outcome).await.is_err() {
                warn!(worker_id, "Aggregator closed before worker finished.");
                break;
            }
            published = published.saturating_add(1);
        }
        debug!(worker_id, published, "Worker stopped.");
        published
    })
}
