use std::time::Duration;

use super::types::PositiveUsize;
use crate::error::{AppError, AppResult, ValidationError};

pub(super) fn parse_positive_usize(s: &str) -> AppResult<PositiveUsize> {
    s.parse::<PositiveUsize>().map_err(AppError::from)
}

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

pub(crate) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    parse_duration(s).map_err(AppError::from)
}

/// Parses `5s`, `250ms`, `2m`, `1h` and compound forms such as `1m30s`.
/// A bare number is read as seconds.
pub(crate) fn parse_duration(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let mut total = Duration::ZERO;
    let mut rest = value;
    while !rest.is_empty() {
        let digits_len = rest.chars().take_while(|ch| ch.is_ascii_digit()).count();
        if digits_len == 0 {
            return Err(ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            });
        }
        let (num_part, tail) = rest.split_at(digits_len);
        let number: u64 =
            num_part
                .parse()
                .map_err(|err| ValidationError::InvalidDurationNumber {
                    value: value.to_owned(),
                    source: err,
                })?;

        let unit_len = tail
            .chars()
            .take_while(|ch| ch.is_ascii_alphabetic())
            .count();
        let (unit, remaining) = tail.split_at(unit_len);
        let unit = if unit.is_empty() {
            if num_part.len() != value.len() {
                return Err(ValidationError::InvalidDurationFormat {
                    value: value.to_owned(),
                });
            }
            "s"
        } else {
            unit
        };

        let part = unit_duration(number, unit)?;
        total = total
            .checked_add(part)
            .ok_or(ValidationError::DurationOverflow)?;
        rest = remaining;
    }

    if total.is_zero() {
        return Err(ValidationError::DurationZero);
    }

    Ok(total)
}

fn unit_duration(number: u64, unit: &str) -> Result<Duration, ValidationError> {
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => {
            let secs = number
                .checked_mul(60)
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        "h" => {
            let secs = number
                .checked_mul(60)
                .and_then(|seconds| seconds.checked_mul(60))
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        _ => {
            return Err(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            });
        }
    };
    Ok(duration)
}
