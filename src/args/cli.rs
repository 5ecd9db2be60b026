use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_usize};
use super::types::{HttpMethod, OutputFormat, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Minimal async HTTP load generator - hammer one endpoint from a worker pool and get a status-code breakdown."
)]
pub struct GnatArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (sets log level to debug unless overridden by GNAT_LOG/RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run gnat load generator
    Run(RunArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    /// Url to send requests to
    #[arg(long, short)]
    pub url: Option<String>,

    /// How long to send requests (supports ms/s/m/h, e.g. 10s, 1m, 1m30s)
    #[arg(long, short, default_value = "5s", value_parser = parse_duration_arg)]
    pub duration: Duration,

    /// Number of concurrent workers
    #[arg(long, short, default_value = "1", value_parser = parse_positive_usize)]
    pub concurrency: PositiveUsize,

    /// HTTP method to use (GET or POST)
    #[arg(long, short, default_value = "get", ignore_case = true)]
    pub method: HttpMethod,

    /// Raw JSON body for POST requests
    #[arg(long)]
    pub body: Option<String>,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "30s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Connect timeout (supports ms/s/m/h)
    #[arg(long = "connect-timeout", default_value = "10s", value_parser = parse_duration_arg)]
    pub connect_timeout: Duration,

    /// Report format
    #[arg(long = "output-format", value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Path to config file (TOML/JSON). Defaults to ./gnat.toml or ./gnat.json if present.
    #[arg(long)]
    pub config: Option<String>,
}
