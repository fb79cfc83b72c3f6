use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, Mul, MulAssign, Neg, Sub,
    SubAssign,
};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A point on the continuous cartesian plane. x is right, y is up. This is
/// the unit that every grid converts cells to and from.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linearly interpolate between this point and another. `t = 0` gives
    /// `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Euclidean distance between two points
    pub fn distance_to(self, other: Self) -> f64 {
        (other - self).to_vector().norm()
    }

    pub(crate) fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for (f64, f64) {
    fn from(point: Point2) -> Self {
        (point.x, point.y)
    }
}

impl From<nalgebra::Point2<f64>> for Point2 {
    fn from(point: nalgebra::Point2<f64>) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<Point2> for nalgebra::Point2<f64> {
    fn from(point: Point2) -> Self {
        nalgebra::Point2::new(point.x, point.y)
    }
}

impl From<Vector2<f64>> for Point2 {
    fn from(vector: Vector2<f64>) -> Self {
        Self::new(vector.x, vector.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_point_arithmetic() {
        let p = Point2::new(1.0, 2.0) + Point2::new(0.5, -1.0);
        assert_eq!(p, Point2::new(1.5, 1.0));
        assert_eq!(p * 2.0, Point2::new(3.0, 2.0));
        assert_eq!(-p, Point2::new(-1.5, -1.0));
        assert_eq!(p.to_string(), "(1.5, 1)");
    }

    #[test]
    fn test_lerp() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, -2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.25), Point2::new(1.0, -0.5));
        assert_approx_eq!(a.distance_to(Point2::new(3.0, 4.0)), 5.0);
    }
}
