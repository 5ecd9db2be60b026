//! Run deadline: a single broadcast signal, fired once and never reset.
use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tokio::time::Instant;

pub type ShutdownSender = broadcast::Sender<()>;
pub type ShutdownReceiver = broadcast::Receiver<()>;

/// Creates the shutdown channel. Receivers only see a signal sent after they
/// subscribed, so every worker must subscribe before [`arm_deadline`].
#[must_use]
pub fn shutdown_channel() -> ShutdownSender {
    let (shutdown_tx, _) = broadcast::channel(1);
    shutdown_tx
}

/// Spawns the timer that fires `shutdown_tx` once `deadline` is reached.
#[must_use]
pub fn arm_deadline(shutdown_tx: &ShutdownSender, deadline: Instant) -> JoinHandle<()> {
    let shutdown_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep_until(deadline).await;
        drop(shutdown_tx.send(()));
    })
}

/// Non-blocking check used between attempts. A closed or lagged channel also
/// counts as fired.
pub fn deadline_fired(shutdown_rx: &mut ShutdownReceiver) -> bool {
    !matches!(shutdown_rx.try_recv(), Err(TryRecvError::Empty))
}
