use num::traits::{Float, FloatConst};

/// Wraps a radian value into `[0, 2π)`.
///
/// Non-finite input comes back as NaN.
pub fn normalize_radians<T: Float + FloatConst>(x: T) -> T {
    let full_turn = T::TAU();
    let mut t = x % full_turn;
    if t < T::zero() {
        t = t + full_turn;
    }
    // A tiny negative remainder rounds up to exactly one full turn.
    if t >= full_turn {
        T::zero()
    } else {
        t
    }
}
