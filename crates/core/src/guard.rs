//! Guard clauses: fail-fast validation at the top of constructors and
//! operations.
//!
//! Every check is pure and deterministic; the only effect is the returned
//! error. The optional `name` travels into the error so callers can report
//! which argument was at fault.

use crate::error::{DomainError, DomainResult};

/// Guard against an absent value.
pub fn null<T: ?Sized>(value: Option<&T>, name: Option<&str>) -> DomainResult<()> {
    match value {
        Some(_) => Ok(()),
        None => Err(DomainError::null_argument(name)),
    }
}

/// Guard against an absent, empty, or all-whitespace string.
///
/// The null check runs first, so `None` yields `NullArgument` rather than
/// `InvalidArgument`.
pub fn empty_string(value: Option<&str>, name: Option<&str>) -> DomainResult<()> {
    null(value, name)?;
    let value = value.unwrap_or_default();
    if value.trim().is_empty() {
        return Err(DomainError::invalid_argument(name, "required input was empty"));
    }
    Ok(())
}

/// Guard against a value outside the inclusive `[min, max]` range.
///
/// Generic over `PartialOrd`, so signed and unsigned integers share one
/// contract: both bounds are valid values.
pub fn out_of_range<T: PartialOrd>(value: T, min: T, max: T, name: Option<&str>) -> DomainResult<()> {
    if value < min || value > max {
        return Err(DomainError::out_of_range(name));
    }
    Ok(())
}
