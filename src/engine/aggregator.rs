use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::http::RequestOutcome;

use super::result::StatusTally;

/// Spawns the sole consumer of the outcome channel. It finishes once every
/// sender is gone and the buffer is empty.
pub(super) fn spawn_aggregator(
    mut outcome_rx: mpsc::Receiver<RequestOutcome>,
) -> JoinHandle<StatusTally> {
    tokio::spawn(async move {
        let mut tally = StatusTally::default();
        while let Some(outcome) = outcome_rx.recv().await {
            tally.record(outcome);
        }
        tally
    })
}
