use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};

/// Parses a decimal-as-string argument.
///
/// Accepts plain and scientific notation. The scale of the input is kept, so
/// `"0.0"` stays `"0.0"` when written back out.
pub fn parse_decimal(value: &str, field: &str) -> Result<Decimal> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|err| Decimal::from_scientific(trimmed).map_err(|_| err))
        .map_err(|source| {
            ValidationError::DecimalParse {
                field: field.to_string(),
                value: value.to_string(),
                source,
            }
            .into()
        })
}

/// Rejects blank identifiers and names.
pub fn require_non_empty(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::InvalidInput(format!("{} cannot be empty", field)).into());
    }
    Ok(())
}
