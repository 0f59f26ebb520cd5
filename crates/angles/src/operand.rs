use crate::angle::Angle;

/// Right-hand side of angle arithmetic: either another angle or plain radians.
#[derive(Debug, Copy, Clone, PartialEq, derive_more::From)]
pub enum AngleOperand {
    Angle(Angle),
    Radians(f64),
}

impl AngleOperand {
    /// Raw radians, without normalizing a bare number.
    pub fn radians(&self) -> f64 {
        match self {
            AngleOperand::Angle(angle) => angle.radians(),
            AngleOperand::Radians(rad) => *rad,
        }
    }
    pub fn to_angle(self) -> Angle {
        match self {
            AngleOperand::Angle(angle) => angle,
            AngleOperand::Radians(rad) => Angle::from_radians(rad),
        }
    }
}

impl From<i32> for AngleOperand {
    fn from(value: i32) -> Self {
        AngleOperand::Radians(value as f64)
    }
}

impl From<i64> for AngleOperand {
    fn from(value: i64) -> Self {
        AngleOperand::Radians(value as f64)
    }
}

impl From<euclid::Angle<f64>> for AngleOperand {
    fn from(value: euclid::Angle<f64>) -> Self {
        AngleOperand::Angle(value.into())
    }
}
