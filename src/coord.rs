//! This module contains [`Coord`], a point in 3D space. Every color space in this crate has exactly
//! three channels, so both raw channel values and normalized points are carried around as a `Coord`.

use std::ops::Sub;

/// A point in 3D space. The axes are named `x`, `y`, and `z`, but nothing distinguishes them: any
/// [`Color`](crate::color::Color) that converts to a `Coord` puts its first channel on `x`, its
/// second on `y` and its third on `z`.
///
/// # Example
/// ```
/// # use colorspaces::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// assert_eq!(diff, Coord{x: -6., y: 6., z: 4.});
/// assert_eq!(<[f64; 3]>::from(diff), [-6., 6., 4.]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl From<[f64; 3]> for Coord {
    fn from(c: [f64; 3]) -> Coord {
        Coord {
            x: c[0],
            y: c[1],
            z: c[2],
        }
    }
}

impl From<Coord> for [f64; 3] {
    fn from(c: Coord) -> [f64; 3] {
        [c.x, c.y, c.z]
    }
}

impl Coord {
    /// The Euclidean distance between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis.
    ///
    /// Note that this is not a perceptual distance in any of the spaces in this crate. In HSI, for
    /// example, a hue of 0 and a hue of 2π are the same color but are as far apart as two hues can
    /// be.
    /// # Example
    /// ```
    /// # use colorspaces::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        let d = *self - *other;
        (d.x.powi(2) + d.y.powi(2) + d.z.powi(2)).sqrt()
    }
}
