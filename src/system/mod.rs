pub(crate) mod banner;
pub(crate) mod logger;
pub(crate) mod summary_output;

pub(crate) use banner::print_run_banner;
pub(crate) use summary_output::print_summary;
