use rust_decimal::Decimal;

/// Status of an action that has been submitted but not yet settled.
pub const TX_STATUS_SUBMITTED: &str = "submitted";

/// High water mark date of an account that has never set one.
pub const HIGH_WATER_MARK_UNSET_DATE: &str = "None";

/// Zero with one decimal place, serialized as `"0.0"`.
pub const ZERO_BALANCE: Decimal = Decimal::from_parts(0, 0, 0, false, 1);
