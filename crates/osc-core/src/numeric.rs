use crate::{OscError, OscResult};

pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> OscResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(OscError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> OscResult<Real> {
    if ensure_finite(v, what)? > 0.0 {
        Ok(v)
    } else {
        Err(OscError::InvalidArg { what })
    }
}
