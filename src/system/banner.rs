use gnat::engine::RunConfig;

use super::summary_output::format_duration;

pub(crate) fn banner_line(config: &RunConfig) -> String {
    format!(
        "Sending {} requests to {} for {} with {} worker{}",
        config.method(),
        config.url(),
        format_duration(config.duration()),
        config.concurrency(),
        if config.concurrency() == 1 { "" } else { "s" }
    )
}

pub(crate) fn print_run_banner(config: &RunConfig) {
    println!("{}", banner_line(config));
}
