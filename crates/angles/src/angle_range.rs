use std::fmt;
use std::ops::{Add, Sub};

use itertools::Itertools;

use crate::angle::Angle;
use crate::normalize::normalize_radians;
use crate::operand::AngleOperand;

/// Directed arc from `start` to `end`, going the way angles increase.
///
/// `start` may be numerically larger than `end`, in which case the arc
/// crosses zero. Each endpoint can be open or closed independently.
#[derive(Copy, Clone, PartialEq)]
pub struct AngleRange {
    start: Angle,
    end: Angle,
    include_start: bool,
    include_end: bool,
}

impl AngleRange {
    pub fn new(
        start: impl Into<AngleOperand>,
        end: impl Into<AngleOperand>,
        include_start: bool,
        include_end: bool,
    ) -> Self {
        AngleRange {
            start: start.into().to_angle(),
            end: end.into().to_angle(),
            include_start,
            include_end,
        }
    }

    pub fn start(&self) -> Angle {
        self.start
    }
    pub fn end(&self) -> Angle {
        self.end
    }
    pub fn include_start(&self) -> bool {
        self.include_start
    }
    pub fn include_end(&self) -> bool {
        self.include_end
    }

    /// Arc length in radians, always in `[0, 2π)`.
    pub fn length(&self) -> f64 {
        normalize_radians(self.end.radians() - self.start.radians())
    }

    pub fn is_wrapping(&self) -> bool {
        self.start.radians() >= self.end.radians()
    }

    /// Membership test.
    ///
    /// Only non-wrapping ranges bound-check the angle. A wrapping range
    /// (`start >= end`) accepts anything that is not an excluded endpoint,
    /// so `[π, 0]` contains `π/2`. Use [`AngleRange::contains_angle_wrapping`]
    /// for the geometric answer.
    pub fn contains_angle(&self, angle: Angle) -> bool {
        let s = self.start.radians();
        let e = self.end.radians();
        let x = normalize_radians(angle.radians());

        if s < e && (x < s || x > e) {
            return false;
        }
        self.endpoint_admits(x)
    }

    /// Membership on the actual arc, wrapping through zero when
    /// `start >= end`. Equal endpoints mean the full circle.
    pub fn contains_angle_wrapping(&self, angle: Angle) -> bool {
        let s = self.start.radians();
        let e = self.end.radians();
        let x = normalize_radians(angle.radians());

        let on_arc = if s < e {
            s <= x && x <= e
        } else {
            x >= s || x <= e
        };
        on_arc && self.endpoint_admits(x)
    }

    // Exact comparison, unlike Angle's tolerant ==.
    #[allow(clippy::float_cmp)]
    fn endpoint_admits(&self, x: f64) -> bool {
        if x == self.start.radians() && !self.include_start {
            return false;
        }
        if x == self.end.radians() && !self.include_end {
            return false;
        }
        true
    }

    /// True when both endpoints of `other` pass [`AngleRange::contains_angle`].
    /// The interior of `other` is not checked.
    pub fn contains_range(&self, other: AngleRange) -> bool {
        self.contains_angle(other.start) && self.contains_angle(other.end)
    }

    fn shifted(&self, start: Angle, end: Angle) -> Self {
        AngleRange::new(start, end, self.include_start, self.include_end)
    }
}

impl fmt::Display for AngleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.include_start { "[" } else { "(" };
        let close = if self.include_end { "]" } else { ")" };
        write!(f, "{}{}, {}{}", open, self.start, self.end, close)
    }
}

impl fmt::Debug for AngleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AngleRange({:?}, {:?}, incStart={}, incEnd={})",
            self.start, self.end, self.include_start, self.include_end
        )
    }
}

// Shifts return a list so a future split at zero can hand back two pieces.
impl Add<Angle> for AngleRange {
    type Output = Vec<AngleRange>;

    fn add(self, rhs: Angle) -> Self::Output {
        vec![self.shifted(self.start + rhs, self.end + rhs)]
    }
}

impl Sub<Angle> for AngleRange {
    type Output = Vec<AngleRange>;

    fn sub(self, rhs: Angle) -> Self::Output {
        vec![self.shifted(self.start - rhs, self.end - rhs)]
    }
}

/// `[a b c]`, each range in its display form.
pub fn format_range_list(ranges: &[AngleRange]) -> String {
    format!("[{}]", ranges.iter().join(" "))
}
