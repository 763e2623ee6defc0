use thiserror::Error;

use super::Property;

/// Errors that can occur when configuring a mass-spring-damper.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("{property} must be positive, got {value}")]
    NonPositive { property: Property, value: f64 },

    #[error("{property} must be non-negative, got {value}")]
    Negative { property: Property, value: f64 },

    #[error("{property} must be finite, got {value}")]
    NonFinite { property: Property, value: f64 },

    #[error("state vector has length {found}, expected [t, x, v]")]
    StateLength { found: usize },

    #[error("free-motion tolerance must be finite and non-negative, got {value}")]
    InvalidTolerance { value: f64 },
}

pub(crate) fn ensure_finite(property: Property, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { property, value })
    }
}

pub(crate) fn ensure_positive(property: Property, value: f64) -> Result<f64, Error> {
    let value = ensure_finite(property, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(Error::NonPositive { property, value })
    }
}

pub(crate) fn ensure_non_negative(property: Property, value: f64) -> Result<f64, Error> {
    let value = ensure_finite(property, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::Negative { property, value })
    }
}
