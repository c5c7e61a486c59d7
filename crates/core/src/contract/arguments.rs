use crate::errors::{Result, ValidationError};

/// Checks that `args` has between `min` and `max` entries.
pub(crate) fn expect_arity(function: &str, args: &[&str], min: usize, max: usize) -> Result<()> {
    if args.len() < min || args.len() > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{} to {}", min, max)
        };
        return Err(ValidationError::ArgumentCount {
            function: function.to_string(),
            expected,
            actual: args.len(),
        }
        .into());
    }
    Ok(())
}

pub(crate) fn parse_u32(value: &str, field: &str) -> Result<u32> {
    value.trim().parse::<u32>().map_err(|e| {
        ValidationError::InvalidInput(format!("invalid {} '{}': {}", field, value, e)).into()
    })
}

pub(crate) fn parse_bool(value: &str, field: &str) -> Result<bool> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ValidationError::InvalidInput(format!(
            "invalid {} '{}': expected true or false",
            field, other
        ))
        .into()),
    }
}

/// Trailing optional arguments: missing or empty means absent.
pub(crate) fn optional_arg(args: &[&str], index: usize) -> Option<String> {
    args.get(index)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
