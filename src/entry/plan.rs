use clap::ArgMatches;

use gnat::args::{Command, GnatArgs, HttpMethod, OutputFormat, RunArgs};
use gnat::engine::{RunConfig, run_load_test};
use gnat::error::{AppError, AppResult, ValidationError};

use crate::system::{print_run_banner, print_summary};

#[derive(Debug)]
pub(super) struct RunPlan {
    config: RunConfig,
    output_format: OutputFormat,
}

pub(super) fn build_plan(args: GnatArgs, matches: &ArgMatches) -> AppResult<RunPlan> {
    match args.command {
        Command::Run(mut run_args) => {
            let run_matches = matches.subcommand_matches("run").unwrap_or(matches);
            if let Some(config) = gnat::config::load_config(run_args.config.as_deref())? {
                gnat::config::apply_config(&mut run_args, run_matches, &config)?;
            }
            build_run_plan(run_args)
        }
    }
}

fn build_run_plan(args: RunArgs) -> AppResult<RunPlan> {
    let Some(url) = args.url.as_deref() else {
        tracing::error!("Missing URL (set --url or provide in config).");
        return Err(AppError::validation(ValidationError::MissingUrl));
    };

    if args.method == HttpMethod::Get && args.body.is_some() {
        tracing::warn!("--body is ignored for GET requests.");
    }

    let config = RunConfig::new(
        url,
        args.duration,
        args.concurrency.get(),
        args.method,
        args.body.map(String::into_bytes),
    )
    .and_then(|config| config.with_timeouts(args.request_timeout, args.connect_timeout))
    .map_err(|err| {
        tracing::error!("Invalid run configuration: {}", err);
        AppError::validation(err)
    })?;

    Ok(RunPlan {
        config,
        output_format: args.output_format,
    })
}

pub(super) async fn execute_plan(plan: &RunPlan) -> AppResult<()> {
    if plan.output_format == OutputFormat::Text {
        print_run_banner(&plan.config);
    }
    let result = run_load_test(&plan.config).await?;
    print_summary(&plan.config, &result, plan.output_format)
}
