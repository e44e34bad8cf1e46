use log::trace;
use nalgebra::Matrix3;

use crate::geometry::mirroring::Mirroring;
use crate::spacial::Point;
use crate::types::{Angle, BoardSide};

/// A 2D affine map in homogeneous coordinates.
///
/// Steps are added in pipeline order: each builder call is applied after the steps already
/// present, so `identity().translate(p).rotate(p, a)` first translates, then rotates about `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformation {
    matrix: Matrix3<f64>,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transformation {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    pub fn from_matrix(matrix: Matrix3<f64>) -> Self {
        Self {
            matrix,
        }
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// The transformation of a part: translate to `position`, rotate about `position`, and
    /// mirror about `position` when the part sits on the bottom side.
    pub fn for_placement(position: Point, rotation: Angle, side: BoardSide) -> Self {
        let transformation = Self::identity()
            .translate(position)
            .rotate(position, rotation)
            .mirror(position, Mirroring::for_side(side));

        trace!(
            "placement transformation. position: {:?}, rotation: {:?}, side: {:?}",
            position,
            rotation,
            side
        );

        transformation
    }

    pub fn translate(self, offset: Point) -> Self {
        #[rustfmt::skip]
        let step = Matrix3::new(
            1.0, 0.0, offset.x as f64,
            0.0, 1.0, offset.y as f64,
            0.0, 0.0, 1.0,
        );
        self.append(step)
    }

    /// Counter-clockwise rotation about `pivot`.
    pub fn rotate(self, pivot: Point, angle: Angle) -> Self {
        if angle.normalized().is_zero() {
            return self;
        }

        let (sin_theta, cos_theta) = sin_cos(angle);
        let (px, py) = (pivot.x as f64, pivot.y as f64);

        // T(pivot) * R * T(-pivot)
        #[rustfmt::skip]
        let step = Matrix3::new(
            cos_theta, -sin_theta, px - cos_theta * px + sin_theta * py,
            sin_theta, cos_theta, py - sin_theta * px - cos_theta * py,
            0.0, 0.0, 1.0,
        );
        self.append(step)
    }

    /// Reflection about the axes through `pivot` selected by `mirroring`.
    pub fn mirror(self, pivot: Point, mirroring: Mirroring) -> Self {
        if mirroring.is_none() {
            return self;
        }

        let [sx, sy] = mirroring.as_f64();
        let (px, py) = (pivot.x as f64, pivot.y as f64);

        #[rustfmt::skip]
        let step = Matrix3::new(
            sx, 0.0, px - sx * px,
            0.0, sy, py - sy * py,
            0.0, 0.0, 1.0,
        );
        self.append(step)
    }

    /// Scaling about the origin.
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        #[rustfmt::skip]
        let step = Matrix3::new(
            sx, 0.0, 0.0,
            0.0, sy, 0.0,
            0.0, 0.0, 1.0,
        );
        self.append(step)
    }

    /// `self` followed by `other`.
    pub fn then(&self, other: &Transformation) -> Self {
        self.append(other.matrix)
    }

    fn append(self, step: Matrix3<f64>) -> Self {
        Self {
            matrix: step * self.matrix,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix3::identity()
    }

    /// `true` when the map reverses orientation (negative determinant).
    pub fn is_mirroring(&self) -> bool {
        let m = &self.matrix;
        m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)] < 0.0
    }

    pub fn apply_to_point(&self, point: Point) -> Point {
        let m = &self.matrix;
        let (x, y) = (point.x as f64, point.y as f64);

        Point::from_f64(
            m[(0, 0)] * x + m[(0, 1)] * y + m[(0, 2)],
            m[(1, 0)] * x + m[(1, 1)] * y + m[(1, 2)],
        )
    }

    /// Transforms all points in place.
    pub fn apply_to_points(&self, points: &mut [Point]) {
        if self.is_identity() {
            return;
        }

        for point in points.iter_mut() {
            *point = self.apply_to_point(*point);
        }
    }
}

/// `(sin, cos)` of an angle, exact for multiples of 90°.
pub(crate) fn sin_cos(angle: Angle) -> (f64, f64) {
    match angle.normalized() {
        Angle::ZERO => (0.0, 1.0),
        Angle::DEG_90 => (1.0, 0.0),
        Angle::DEG_180 => (0.0, -1.0),
        Angle::DEG_270 => (-1.0, 0.0),
        other => other.to_radians().sin_cos(),
    }
}
