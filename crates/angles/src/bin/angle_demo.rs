use std::f64::consts::PI;

use angles::{format_range_list, Angle, AngleRange};

#[allow(clippy::approx_constant)]
fn main() {
    println!("ANGLE");

    let a = Angle::from_radians(3.0 * PI);
    let b = Angle::from_degrees(180.0);

    println!("a: {}", a);
    println!("b: {}", b);
    println!("a == PI? {}", a == Angle::from_radians(PI));

    println!("a + 1: {}", a + 1.0);
    println!("b - 90°: {}", b - Angle::from_degrees(90.0));
    println!("b * 2: {}", b * 2.0);
    println!("b / 2: {}", b / 2.0);

    println!("ANGLE RANGE");

    let r = AngleRange::new(0, PI, true, false);
    println!("r: {}", r);
    println!("len(r): {}", r.length());
    println!("contains 1 rad? {}", r.contains_angle(Angle::from_radians(1.0)));
    println!("contains 3 rad? {}", r.contains_angle(Angle::from_radians(3.0)));

    let r2 = AngleRange::new(Angle::from_degrees(30.0), Angle::from_degrees(150.0), true, true);
    println!("r2 inside r? {}", r.contains_range(r2));

    println!("r + 45°: {}", format_range_list(&(r + Angle::from_degrees(45.0))));

    let x = Angle::from_radians(3.141592);
    println!("{}", format_range_list(&(r - x)));
}
