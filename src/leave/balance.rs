use chrono::NaiveDate;

use super::error::LeaveError;

/// Inclusive day count: `ceil(hours(to - from) / 24) + 1`.
pub fn number_of_days(from: NaiveDate, to: NaiveDate) -> i64 {
    let hours = (to - from).num_hours();
    (hours as f64 / 24.0).ceil() as i64 + 1
}

/// Balance left after granting `requested` days on top of `taken`.
///
/// `taken` counts every earlier application of the type, declined ones included.
pub fn remaining_balance(allowed: i64, taken: i64, requested: i64) -> Result<i64, LeaveError> {
    let balance = allowed - (taken + requested);
    if balance < 0 {
        Err(LeaveError::InsufficientBalance)
    } else {
        Ok(balance)
    }
}
