use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::error::{AppError, AppResult, ValidationError};
use crate::http::{HttpIssuer, RequestIssuer};
use crate::shutdown::{arm_deadline, shutdown_channel};

use super::aggregator::spawn_aggregator;
use super::config::RunConfig;
use super::result::RunResult;
use super::worker::spawn_worker;

/// Buffer between workers and the aggregator. A full buffer parks publishing
/// workers until the aggregator catches up.
pub const OUTCOME_CHANNEL_CAPACITY: usize = 1024;

/// Runs a load test against the configured target over HTTP.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built. Request failures
/// during the run never surface here; they are counted in the result.
pub async fn run_load_test(config: &RunConfig) -> AppResult<RunResult> {
    let issuer = HttpIssuer::from_config(config)?;
    run_with_issuer(config, Arc::new(issuer)).await
}

/// Runs a load test with any request issuer.
///
/// # Errors
///
/// Returns an error when the deadline cannot be represented or the aggregator
/// task dies.
pub async fn run_with_issuer<I>(config: &RunConfig, issuer: Arc<I>) -> AppResult<RunResult>
where
    I: RequestIssuer + ?Sized + 'static,
{
    run_with_capacity(config, issuer, OUTCOME_CHANNEL_CAPACITY).await
}

pub(super) async fn run_with_capacity<I>(
    config: &RunConfig,
    issuer: Arc<I>,
    capacity: usize,
) -> AppResult<RunResult>
where
    I: RequestIssuer + ?Sized + 'static,
{
    let start = Instant::now();
    let deadline = start
        .checked_add(config.duration())
        .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;

    info!(
        url = %config.url(),
        method = %config.method(),
        concurrency = config.concurrency(),
        duration = ?config.duration(),
        "Starting load run."
    );

    let shutdown_tx = shutdown_channel();
    let (outcome_tx, outcome_rx) = mpsc::channel(capacity.max(1));
    let aggregator = spawn_aggregator(outcome_rx);

    let mut workers = Vec::with_capacity(config.concurrency());
    for worker_id in 0..config.concurrency() {
        workers.push(spawn_worker(
            worker_id,
            Arc::clone(&issuer),
            shutdown_tx.subscribe(),
            outcome_tx.clone(),
        ));
    }
    let timer = arm_deadline(&shutdown_tx, deadline);

    let mut published: u64 = 0;
    for handle in workers {
        match handle.await {
            Ok(count) => published = published.saturating_add(count),
            Err(err) => error!("Worker task failed: {}", err),
        }
    }
    timer.abort();

    drop(outcome_tx);
    let tally = aggregator.await?;
    let elapsed = start.elapsed();

    if tally.total_requests() != published {
        warn!(
            published,
            aggregated = tally.total_requests(),
            "Aggregated outcome count differs from published count."
        );
    }

    let result = tally.finish(elapsed);
    info!(
        total_requests = result.total_requests(),
        failed_requests = result.failed_requests(),
        elapsed = ?result.elapsed(),
        "Load run complete."
    );
    Ok(result)
}
