mod plan;

use std::ffi::OsString;
use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use gnat::args::GnatArgs;
use gnat::config::DEFAULT_CONFIG_FILES;
use gnat::error::AppResult;
use plan::{build_plan, execute_plan};

pub(crate) fn run() -> AppResult<()> {
    let (args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let plan = build_plan(args, &matches)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute_plan(&plan))
}

fn parse_args() -> AppResult<Option<(GnatArgs, ArgMatches)>> {
    let mut cmd = GnatArgs::command();
    let mut raw_args: Vec<OsString> = std::env::args_os().collect();

    if is_bare_invocation(&raw_args) {
        if !has_default_config() {
            cmd.print_help()?;
            println!();
            return Ok(None);
        }
        // A config file in the working directory stands in for `gnat run`.
        raw_args.truncate(1);
        if raw_args.is_empty() {
            raw_args.push(OsString::from("gnat"));
        }
        raw_args.push(OsString::from("run"));
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = GnatArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn is_bare_invocation(raw_args: &[OsString]) -> bool {
    matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--")
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}
