use std::ops::{Add, AddAssign, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::spacial::{Point, Size};

/// An angle in hundredths of a degree, counter-clockwise positive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle(i32);

impl Angle {
    pub const ZERO: Angle = Angle(0);
    pub const DEG_45: Angle = Angle(4500);
    pub const DEG_90: Angle = Angle(9000);
    pub const DEG_180: Angle = Angle(18000);
    pub const DEG_270: Angle = Angle(27000);
    pub const DEG_360: Angle = Angle(36000);

    /// Units per full turn.
    pub const FULL_TURN: i32 = 36000;

    pub const fn from_hundredths(value: i32) -> Self {
        Self(value)
    }

    pub const fn from_degrees(degrees: i32) -> Self {
        Self(degrees * 100)
    }

    pub fn from_degrees_f64(degrees: f64) -> Self {
        Self((degrees * 100.0).round() as i32)
    }

    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees_f64(radians.to_degrees())
    }

    pub const fn hundredths(self) -> i32 {
        self.0
    }

    pub fn degrees(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn to_radians(self) -> f64 {
        self.degrees().to_radians()
    }

    /// The equivalent angle in `[0°, 360°)`.
    pub fn normalized(self) -> Self {
        Self(self.0.rem_euclid(Self::FULL_TURN))
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `true` for exact multiples of 90°.
    pub fn is_orthogonal(self) -> bool {
        self.0 % Self::DEG_90.0 == 0
    }

    /// `true` for 90° and 270°, i.e. rotations that exchange width and height.
    pub fn is_vertical(self) -> bool {
        let normalized = self.normalized();
        normalized == Self::DEG_90 || normalized == Self::DEG_270
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Self::Output {
        Angle(self.0 + rhs.0)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        self.0 += rhs.0;
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Self::Output {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}

/// A fixed-point fraction in `[0, 1]`, stored in thousandths.
///
/// Used as the corner rounding factor of rectangles and pads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ratio(i32);

impl Ratio {
    pub const SCALE: i32 = 1000;

    pub const ZERO: Ratio = Ratio(0);
    pub const HALF: Ratio = Ratio(500);
    pub const ONE: Ratio = Ratio(1000);

    pub fn new(thousandths: i32) -> Result<Self, GeometryError> {
        match (0..=Self::SCALE).contains(&thousandths) {
            true => Ok(Self(thousandths)),
            false => Err(GeometryError::RatioOutOfRange(thousandths)),
        }
    }

    pub const fn thousandths(self) -> i32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `min(width, height) * ratio / 2`, never more than half the smaller side.
    pub fn corner_radius(self, size: Size) -> i32 {
        (size.min_dimension() as i64 * self.0 as i64 / (2 * Self::SCALE as i64)) as i32
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoardSide {
    Top,
    Bottom,
    /// Inner layers, or geometry that does not depend on the side.
    #[default]
    Unknown,
}

impl BoardSide {
    /// The side seen after flipping the board over.
    pub fn flipped(self) -> Self {
        match self {
            BoardSide::Top => BoardSide::Bottom,
            BoardSide::Bottom => BoardSide::Top,
            BoardSide::Unknown => BoardSide::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Negative signed area
    Clockwise,
    /// Positive signed area
    CounterClockwise,
}

impl Winding {
    pub fn from_points(points: &[Point]) -> Self {
        match signed_area_x2(points) > 0 {
            true => Winding::CounterClockwise,
            false => Winding::Clockwise,
        }
    }
}

/// Twice the shoelace signed area; positive for counter-clockwise outlines.
pub fn signed_area_x2(points: &[Point]) -> i128 {
    let mut sum: i128 = 0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        sum += points[i].x as i128 * points[j].y as i128 - points[j].x as i128 * points[i].y as i128;
    }
    sum
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Angle::from_degrees(0), true, false)]
    #[case(Angle::from_degrees(90), true, true)]
    #[case(Angle::from_degrees(180), true, false)]
    #[case(Angle::from_degrees(270), true, true)]
    #[case(Angle::from_degrees(-90), true, true)]
    #[case(Angle::from_degrees(450), true, true)]
    #[case(Angle::from_degrees(45), false, false)]
    #[case(Angle::from_hundredths(9001), false, false)]
    fn test_angle_classification(#[case] angle: Angle, #[case] orthogonal: bool, #[case] vertical: bool) {
        assert_eq!(angle.is_orthogonal(), orthogonal);
        assert_eq!(angle.is_vertical(), vertical);
    }

    #[test]
    fn test_angle_arithmetic() {
        let a = Angle::from_degrees(30);
        let b = Angle::from_degrees(350);

        assert_eq!((a + b).normalized(), Angle::from_degrees(20));
        assert_eq!(-a, Angle::from_degrees(-30));
        assert_eq!((-a).normalized(), Angle::from_degrees(330));
        assert!((Angle::DEG_180.to_radians() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[rstest]
    #[case(-1)]
    #[case(1001)]
    fn test_ratio_out_of_range(#[case] value: i32) {
        assert_eq!(Ratio::new(value), Err(GeometryError::RatioOutOfRange(value)));
    }

    #[rstest]
    #[case(Ratio::ZERO, Size::new(10, 6), 0)]
    #[case(Ratio::ONE, Size::new(10, 6), 3)]
    #[case(Ratio::HALF, Size::new(1000, 600), 150)]
    fn test_corner_radius(#[case] ratio: Ratio, #[case] size: Size, #[case] expected: i32) {
        assert_eq!(ratio.corner_radius(size), expected);
    }

    #[test]
    fn test_winding() {
        let ccw = [Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)];
        let cw = [Point::new(0, 0), Point::new(10, 10), Point::new(10, 0)];

        assert_eq!(Winding::from_points(&ccw), Winding::CounterClockwise);
        assert_eq!(Winding::from_points(&cw), Winding::Clockwise);
        assert_eq!(signed_area_x2(&ccw), 100);
    }
}
