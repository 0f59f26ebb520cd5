use std::{
    f64::consts::{FRAC_PI_2, PI},
    fmt,
    ops::{Add, Div, Mul, Sub},
};

use approx::AbsDiffEq;

use crate::error::{AngleError, Result};
use crate::normalize::normalize_radians;
use crate::operand::AngleOperand;

/// Two angles closer than this (in radians) compare equal.
pub const ANGLE_EQUALITY_TOLERANCE: f64 = 1e-9;

pub const HALF_TURN: Angle = Angle { rad: PI };
pub const QUARTER_TURN: Angle = Angle { rad: FRAC_PI_2 };

/// A direction, always held in radians within `[0, 2π)`.
///
/// Every constructor, setter and operator wraps its result back into range.
/// Equality is approximate, see [`ANGLE_EQUALITY_TOLERANCE`].
#[derive(Default, Copy, Clone)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub fn from_radians(rad: f64) -> Self {
        Angle {
            rad: normalize_radians(rad),
        }
    }
    pub fn from_degrees(deg: f64) -> Self {
        Self::from_radians(deg * PI / 180.0)
    }

    /// Like [`Angle::from_radians`], but rejects infinities and NaN.
    pub fn try_from_radians(rad: f64) -> Result<Self> {
        if !rad.is_finite() {
            log::debug!("rejecting non-finite angle: {} rad", rad);
            return Err(AngleError::NonFinite { value: rad });
        }
        Ok(Self::from_radians(rad))
    }
    pub fn try_from_degrees(deg: f64) -> Result<Self> {
        if !deg.is_finite() {
            log::debug!("rejecting non-finite angle: {}°", deg);
            return Err(AngleError::NonFinite { value: deg });
        }
        Self::try_from_radians(deg * PI / 180.0)
    }

    pub fn set_radians(&mut self, rad: f64) {
        self.rad = normalize_radians(rad);
    }
    pub fn set_degrees(&mut self, deg: f64) {
        self.set_radians(deg * PI / 180.0);
    }

    pub fn radians(&self) -> f64 {
        self.rad
    }
    pub fn degrees(&self) -> f64 {
        self.rad * 180.0 / PI
    }
    pub fn to_f64(&self) -> f64 {
        self.radians()
    }
    /// Truncates the radian value toward zero. Not degrees, not rounded.
    pub fn to_int(&self) -> i64 {
        self.rad as i64
    }

    /// Division that refuses a zero divisor or a non-finite result.
    pub fn checked_div(&self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            log::debug!("rejecting division of {:?} by zero", self);
            return Err(AngleError::DivisionByZero);
        }
        Self::try_from_radians(self.rad / divisor)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} rad ({:.6}°)", self.rad, self.degrees())
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle(rad={:.6})", self.rad)
    }
}

impl AbsDiffEq for Angle {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        ANGLE_EQUALITY_TOLERANCE
    }
    // Strict, so that a difference of exactly epsilon is unequal.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        (self.rad - other.rad).abs() < epsilon
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, Self::default_epsilon())
    }
}

impl<T: Into<AngleOperand>> Add<T> for Angle {
    type Output = Self;

    fn add(self, rhs: T) -> Self::Output {
        Self::from_radians(self.rad + rhs.into().radians())
    }
}

impl<T: Into<AngleOperand>> Sub<T> for Angle {
    type Output = Self;

    fn sub(self, rhs: T) -> Self::Output {
        Self::from_radians(self.rad - rhs.into().radians())
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_radians(self.rad * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::from_radians(self.rad / rhs)
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.to_f64()
    }
}

impl From<euclid::Angle<f64>> for Angle {
    fn from(value: euclid::Angle<f64>) -> Self {
        Self::from_radians(value.radians)
    }
}

impl From<Angle> for euclid::Angle<f64> {
    fn from(value: Angle) -> Self {
        euclid::Angle::radians(value.rad)
    }
}
