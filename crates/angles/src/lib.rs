mod normalize;
pub use normalize::normalize_radians;

mod angle;
pub use angle::{Angle, ANGLE_EQUALITY_TOLERANCE, HALF_TURN, QUARTER_TURN};

mod operand;
pub use operand::AngleOperand;

mod angle_range;
pub use angle_range::{format_range_list, AngleRange};

mod error;
pub use error::{AngleError, Result};
