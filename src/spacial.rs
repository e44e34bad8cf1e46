use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of internal integer units per millimetre (1 unit = 1nm).
///
/// Every consumer (renderers, CAM exporters, connectivity) must scale with this same constant.
pub const UNITS_PER_MM: i32 = 1_000_000;

/// A location in board space, in fixed-point integer units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
        }
    }

    pub fn from_mm(x: f64, y: f64) -> Self {
        Self::new(mm_to_units(x), mm_to_units(y))
    }

    pub fn to_mm(self) -> (f64, f64) {
        (units_to_mm(self.x), units_to_mm(self.y))
    }

    /// Rounds a floating point location to the nearest unit.
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self::new(x.round() as i32, y.round() as i32)
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        dx.hypot(dy)
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<Size> for Point {
    type Output = Point;

    fn add(self, rhs: Size) -> Self::Output {
        Point::new(self.x + rhs.width, self.y + rhs.height)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Self::Output {
        Point::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// A width/height pair, in fixed-point integer units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size::new(0, 0);

    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
        }
    }

    pub const fn square(side: i32) -> Self {
        Self::new(side, side)
    }

    pub fn from_mm(width: f64, height: f64) -> Self {
        Self::new(mm_to_units(width), mm_to_units(height))
    }

    pub fn min_dimension(self) -> i32 {
        self.width.min(self.height)
    }

    pub fn max_dimension(self) -> i32 {
        self.width.max(self.height)
    }

    /// The size with width and height exchanged, used for 90° and 270° rotations.
    pub fn swapped(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Grows both dimensions by `amount` on every side.
    pub fn inflated(self, amount: i32) -> Self {
        Self::new(self.width + amount * 2, self.height + amount * 2)
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Self::Output {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Self::Output {
        Size::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl Mul<i32> for Size {
    type Output = Size;

    fn mul(self, rhs: i32) -> Self::Output {
        Size::new(self.width * rhs, self.height * rhs)
    }
}

pub fn mm_to_units(value: f64) -> i32 {
    (value * UNITS_PER_MM as f64).round() as i32
}

pub fn units_to_mm(value: i32) -> f64 {
    value as f64 / UNITS_PER_MM as f64
}

pub trait ToPoint2 {
    fn to_point2(self) -> nalgebra::Point2<f64>;
}

impl ToPoint2 for Point {
    fn to_point2(self) -> nalgebra::Point2<f64> {
        nalgebra::Point2::new(self.x as f64, self.y as f64)
    }
}

pub trait ToPoint {
    fn to_point(self) -> Point;
}

impl ToPoint for nalgebra::Point2<f64> {
    fn to_point(self) -> Point {
        Point::from_f64(self.x, self.y)
    }
}

pub mod deduplicate {
    use super::Point;

    pub trait Dedup {
        /// Removes adjacent duplicate points, including a closing point equal to the first.
        fn dedup_adjacent(self) -> Self;
    }

    impl Dedup for Vec<Point> {
        fn dedup_adjacent(mut self) -> Self {
            self.dedup();
            while self.len() > 1 && self.first() == self.last() {
                self.pop();
            }

            self
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_empty_vec() {
            let points: Vec<Point> = vec![];
            let result = points.dedup_adjacent();
            assert_eq!(result.len(), 0);
        }

        #[test]
        fn test_single_element() {
            let points = vec![Point::new(1, 2)];
            let result = points.dedup_adjacent();
            assert_eq!(result, vec![Point::new(1, 2)]);
        }

        #[test]
        fn test_with_adjacent_duplicates() {
            let points = vec![
                Point::new(0, 0),
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 2),
            ];
            let result = points.dedup_adjacent();
            assert_eq!(result, vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]);
        }

        #[test]
        fn test_closing_point_removed() {
            let points = vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(0, 0),
            ];
            let result = points.dedup_adjacent();
            assert_eq!(result, vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]);
        }

        #[test]
        fn test_all_identical_collapses_to_one() {
            let points = vec![Point::new(3, 3); 4];
            let result = points.dedup_adjacent();
            assert_eq!(result, vec![Point::new(3, 3)]);
        }
    }
}
