//! Load-generation engine: worker pool, run deadline, and outcome aggregation.
//!
//! A run fans out `concurrency` workers that loop "check deadline, issue one
//! request, publish the outcome" until the shared deadline fires. Outcomes flow
//! through one bounded channel into a single aggregator task, which is the only
//! writer of the counters. Teardown is strictly ordered: every worker is
//! joined, the channel is closed, and the aggregator is drained before the
//! [`RunResult`] is returned.
mod aggregator;
mod config;
mod result;
mod runner;
mod worker;


pub use config::RunConfig;
pub use result::RunResult;
pub use runner::{OUTCOME_CHANNEL_CAPACITY, run_load_test, run_with_issuer};
