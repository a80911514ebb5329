//! Error types

use thiserror::Error;

/// Result type for filterbank operations
pub type Result<T> = std::result::Result<T, CochleaError>;

/// Errors raised while configuring filters or building a filterbank
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CochleaError {
    /// A construction or `set` argument is outside its valid domain
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl CochleaError {
    pub(crate) fn invalid(name: &'static str, value: impl Into<f64>, reason: &'static str) -> Self {
        CochleaError::InvalidParameter {
            name,
            value: value.into(),
            reason,
        }
    }

    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            CochleaError::InvalidParameter { name, .. } => name,
        }
    }
}

/// Reject NaN, infinities and values `<= 0`.
pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CochleaError::invalid(name, value, "must be finite and > 0"))
    }
}

/// Reject NaN, infinities and values `< 0`.
pub(crate) fn require_non_negative(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CochleaError::invalid(name, value, "must be finite and >= 0"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_checks() {
        assert!(require_positive("x", 1.0).is_ok());
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", f32::NAN).is_err());
        assert!(require_non_negative("x", 0.0).is_ok());
        assert!(require_non_negative("x", -1e-6).is_err());
        assert!(require_non_negative("x", f32::INFINITY).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = CochleaError::invalid("max_hz", 10.0f32, "must exceed min_hz");
        assert_eq!(err.parameter(), "max_hz");
        assert_eq!(
            err.to_string(),
            "Invalid parameter `max_hz` = 10: must exceed min_hz"
        );
    }
}
