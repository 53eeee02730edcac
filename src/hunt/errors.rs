use thiserror::Error;

/// Errors raised while preparing a game from bad tuning values.
///
/// Nothing that happens *inside* a game is an error; failed purchases, missing
/// tools and the like are ordinary outcomes.
#[derive(Debug, Error)]
pub enum HuntError {
    /// A probability or price multiplier outside `0.0..=1.0`.
    #[error("{field} must be between 0.0 and 1.0, got {value}")]
    InvalidRate { field: String, value: f64 },

    /// A gold amount that must not be negative.
    #[error("{field} must not be negative, got {value}")]
    InvalidGold { field: String, value: i32 },
}

/// Check that `value` is a usable rate, naming `field` in the error.
pub fn check_rate(field: &str, value: f64) -> Result<f64, HuntError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(HuntError::InvalidRate {
            field: field.to_string(),
            value,
        })
    }
}

/// Check that a gold setting is not negative.
pub fn check_gold(field: &str, value: i32) -> Result<i32, HuntError> {
    if value >= 0 {
        Ok(value)
    } else {
        Err(HuntError::InvalidGold {
            field: field.to_string(),
            value,
        })
    }
}
