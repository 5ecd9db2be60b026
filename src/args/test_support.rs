use clap::Parser;

use crate::error::{AppError, AppResult};

use super::{Command, GnatArgs, RunArgs};

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<GnatArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    GnatArgs::try_parse_from(args).map_err(AppError::from)
}

pub(crate) fn parse_run_args<I, T>(args: I) -> AppResult<RunArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let Command::Run(run) = parse_test_args(args)?.command;
    Ok(run)
}
