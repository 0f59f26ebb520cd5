//! Errors for the validating constructors on [`Angle`](crate::Angle).
//!
//! The plain constructors and operators never fail: non-finite values flow
//! through as NaN. Only the `try_*`/`checked_*` family reports these.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AngleError>;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AngleError {
    /// Infinite or NaN input, or a conversion that overflowed
    #[error("non-finite angle value: {value}")]
    NonFinite { value: f64 },

    #[error("angle divided by zero")]
    DivisionByZero,
}
