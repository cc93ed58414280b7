//! Finite right circular cylinder, its surface generators, and line intersection.

use crate::errors::ValidationError;
use crate::float_types::{Real, TAU};
use crate::quadratic::Quadratic;
use crate::vector::{cross, dot, generate_orthogonal, normalize, scale};
use nalgebra::{Point3, Vector3};
use std::fmt;

/// A finite right circular cylinder.
///
/// `origin` is a point on the axis at one end, the cylinder extends `length`
/// along `axis` from there. `{axis, n0, n1}` is a right-handed orthonormal frame
/// computed once at construction and used to parameterize the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    origin: Point3<Real>,
    axis: Vector3<Real>,
    radius: Real,
    length: Real,
    n0: Vector3<Real>,
    n1: Vector3<Real>,
    color: String,
}

/// A line on a cylinder's surface, parallel to its axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorLine {
    pub point: Point3<Real>,
    pub direction: Vector3<Real>,
}

impl GeneratorLine {
    /// The point at parameter `t`: `point + t·direction`.
    pub fn point_at(&self, t: Real) -> Point3<Real> {
        self.point + scale(&self.direction, t)
    }
}

impl Cylinder {
    /// Creates a cylinder from a pose and dimensions.
    ///
    /// # Parameters
    ///
    /// - `origin`: a point on the axis at the start of the cylinder
    /// - `axis`: centerline direction, need not be normalized
    /// - `radius`: must be positive
    /// - `length`: must be positive, only bounds the template
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the axis is zero or non-finite, the origin is
    /// non-finite, or either dimension is not positive.
    ///
    /// # Example
    /// ```
    /// # use saddlecut::cylinder::Cylinder;
    /// # use nalgebra::{Point3, Vector3};
    /// let tube = Cylinder::new(Point3::new(0.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 2.0), 1.4375, 20.0)?;
    /// assert_eq!(tube.axis(), &Vector3::z());
    /// # Ok::<(), saddlecut::errors::ValidationError>(())
    /// ```
    pub fn new(
        origin: Point3<Real>,
        axis: Vector3<Real>,
        radius: Real,
        length: Real,
    ) -> Result<Self, ValidationError> {
        if !origin.coords.iter().all(|c| c.is_finite()) {
            return Err(ValidationError::InvalidCoordinate(origin.coords));
        }
        // Rescale by the largest component so squaring cannot overflow or underflow.
        let largest = axis.amax();
        if !axis.iter().all(|c| c.is_finite()) || largest == 0.0 {
            return Err(ValidationError::DegenerateAxis(axis));
        }
        let unit = normalize(&(axis / largest));
        if !unit.iter().all(|c| c.is_finite()) {
            return Err(ValidationError::DegenerateAxis(axis));
        }
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(ValidationError::NonPositiveRadius(radius));
        }
        if !(length > 0.0) || !length.is_finite() {
            return Err(ValidationError::NonPositiveLength(length));
        }

        let axis = unit;
        let n0 = normalize(&generate_orthogonal(&axis));
        let n1 = normalize(&cross(&axis, &n0));

        Ok(Self {
            origin,
            axis,
            radius,
            length,
            n0,
            n1,
            color: String::from("gold"),
        })
    }

    /// Sets the color tag used when rendering this cylinder as a 3D model.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub const fn origin(&self) -> &Point3<Real> {
        &self.origin
    }

    /// Unit direction of the centerline.
    pub const fn axis(&self) -> &Vector3<Real> {
        &self.axis
    }

    pub const fn radius(&self) -> Real {
        self.radius
    }

    pub const fn length(&self) -> Real {
        self.length
    }

    /// The frame `(axis, n0, n1)`.
    pub const fn frame(&self) -> (&Vector3<Real>, &Vector3<Real>, &Vector3<Real>) {
        (&self.axis, &self.n0, &self.n1)
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Length of the base circle, which is the width of the unrolled surface.
    pub fn circumference(&self) -> Real {
        TAU * self.radius
    }

    /// **Surface sampling**
    ///
    /// Steps around the base circle at `θ = 2π·i/n_divisions` and returns one line
    /// per step, starting at `origin + r·cos(θ)·n0 + r·sin(θ)·n1` and running along
    /// the axis. Lines are ordered by increasing `i`; that order becomes the x order
    /// of the template.
    pub fn sample_generator_lines(&self, n_divisions: usize) -> Vec<GeneratorLine> {
        (0..n_divisions)
            .map(|i| {
                let theta = TAU * (i as Real) / (n_divisions as Real);
                let (sin, cos) = theta.sin_cos();
                GeneratorLine {
                    point: self.origin
                        + scale(&self.n0, self.radius * cos)
                        + scale(&self.n1, self.radius * sin),
                    direction: self.axis,
                }
            })
            .collect()
    }

    /// Coefficients `(a, b, c)` of the radial-distance quadratic for `line`.
    ///
    /// The line is re-expressed in this cylinder's frame; the component along the
    /// axis is ignored, so the cylinder is treated as an infinite tube.
    pub fn line_coefficients(&self, line: &GeneratorLine) -> (Real, Real, Real) {
        let u = line.point - self.origin;
        let (u0, u1) = (dot(&u, &self.n0), dot(&u, &self.n1));
        let (v0, v1) = (dot(&line.direction, &self.n0), dot(&line.direction, &self.n1));

        let a = v0 * v0 + v1 * v1;
        let b = 2.0 * (u0 * v0 + u1 * v1);
        let c = u0 * u0 + u1 * u1 - self.radius * self.radius;
        (a, b, c)
    }

    /// Line parameters where `line` crosses this cylinder's (infinite) surface.
    pub fn intersect_line(&self, line: &GeneratorLine) -> Quadratic {
        let (a, b, c) = self.line_coefficients(line);
        Quadratic::solve(a, b, c)
    }

    /// Same as [`Cylinder::intersect_line`] with near-zero coefficients snapped to zero.
    pub fn intersect_line_with_tolerance(&self, line: &GeneratorLine, tolerance: Real) -> Quadratic {
        let (a, b, c) = self.line_coefficients(line);
        Quadratic::solve_with_tolerance(a, b, c, tolerance)
    }

    /// Rotation angles in degrees handed to the 3D model sink.
    ///
    /// `(atan2(a.y, a.z), atan2(a.x, a.z), atan2(a.x, a.y))` of the unit axis.
    pub fn rotation_degrees(&self) -> Vector3<Real> {
        let a = &self.axis;
        Vector3::new(
            a.y.atan2(a.z).to_degrees(),
            a.x.atan2(a.z).to_degrees(),
            a.x.atan2(a.y).to_degrees(),
        )
    }
}

impl fmt::Display for Cylinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (o, a) = (&self.origin, &self.axis);
        write!(
            f,
            "o = ({:.6},{:.6},{:.6}) a = ({:.6},{:.6},{:.6}) r = {:.6} l = {:.6}",
            o.x, o.y, o.z, a.x, a.y, a.z, self.radius, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn assert_orthonormal(cyl: &Cylinder) {
        let (axis, n0, n1) = cyl.frame();
        assert_relative_eq!(axis.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n0.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n1.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(axis.dot(n0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(axis.dot(n1), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(n0.dot(n1), 0.0, epsilon = 1e-12);
        // right-handed: axis × n0 = n1
        assert_relative_eq!(axis.cross(n0), *n1, epsilon = 1e-12);
    }

    #[test]
    fn test_frame_is_orthonormal_for_every_orthogonal_branch() {
        let axes = [
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 5.0, 0.0),
            Vector3::new(-3.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 2.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-2.0, 5.0, 0.5),
            Vector3::new(0.0, -1.0, 1.0),
        ];
        for axis in axes {
            let cyl = Cylinder::new(Point3::origin(), axis, 1.0, 1.0).unwrap();
            assert_orthonormal(&cyl);
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        let o = Point3::origin();
        assert_eq!(
            Cylinder::new(o, Vector3::zeros(), 1.0, 1.0),
            Err(ValidationError::DegenerateAxis(Vector3::zeros()))
        );
        assert!(matches!(
            Cylinder::new(o, Vector3::new(Real::NAN, 0.0, 1.0), 1.0, 1.0),
            Err(ValidationError::DegenerateAxis(_))
        ));
        assert_eq!(
            Cylinder::new(o, Vector3::z(), 0.0, 1.0),
            Err(ValidationError::NonPositiveRadius(0.0))
        );
        assert_eq!(
            Cylinder::new(o, Vector3::z(), 1.0, -2.0),
            Err(ValidationError::NonPositiveLength(-2.0))
        );
        assert!(matches!(
            Cylinder::new(Point3::new(Real::INFINITY, 0.0, 0.0), Vector3::z(), 1.0, 1.0),
            Err(ValidationError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_accepts_extreme_axis_magnitudes() {
        let o = Point3::origin();
        let huge = Real::MAX / 4.0;
        let tiny = Real::MIN_POSITIVE * 8.0;
        let subnormal = Real::MIN_POSITIVE / 1024.0;
        for magnitude in [huge, tiny, subnormal] {
            let cyl = Cylinder::new(o, Vector3::new(magnitude, 0.0, 0.0), 1.0, 1.0).unwrap();
            assert_eq!(cyl.axis(), &Vector3::x());
            assert_orthonormal(&cyl);
        }

        let skewed = Cylinder::new(o, Vector3::new(huge, -huge, 0.0), 1.0, 1.0).unwrap();
        let expected = Vector3::new(1.0, -1.0, 0.0).normalize();
        assert_relative_eq!(*skewed.axis(), expected, epsilon = 1e-12);
        assert_orthonormal(&skewed);
    }

    #[test]
    fn test_generator_lines_lie_on_surface() {
        let cyl = Cylinder::new(Point3::new(1.0, -2.0, 3.0), Vector3::new(1.0, 2.0, 3.0), 2.5, 4.0).unwrap();
        let lines = cyl.sample_generator_lines(12);
        assert_eq!(lines.len(), 12);
        for line in &lines {
            assert_eq!(line.direction, *cyl.axis());
            let radial = line.point - cyl.origin();
            assert_abs_diff_eq!(radial.dot(cyl.axis()), 0.0, epsilon = 1e-12);
            assert_relative_eq!(radial.norm(), 2.5, epsilon = 1e-12);
        }
        // first generator sits on n0
        let (_, n0, _) = cyl.frame();
        assert_relative_eq!(lines[0].point, cyl.origin() + n0 * 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_point_at_follows_axis() {
        let cyl = Cylinder::new(Point3::origin(), Vector3::new(0.0, 0.0, 4.0), 1.0, 10.0).unwrap();
        let line = cyl.sample_generator_lines(4)[1];
        assert_relative_eq!(line.point_at(3.0), Point3::new(0.0, 1.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_perpendicular_line_crosses_twice() {
        let tube = Cylinder::new(Point3::origin(), Vector3::z(), 5.0, 1.0).unwrap();
        let line = GeneratorLine {
            point: Point3::new(-10.0, 0.0, 0.0),
            direction: Vector3::x(),
        };
        let (lo, hi) = tube.intersect_line(&line).ordered_roots().unwrap();
        assert_relative_eq!(lo, 5.0, epsilon = 1e-12);
        assert_relative_eq!(hi, 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_intersection_uses_cylinder_relative_coordinates() {
        // Same geometry as above, everything shifted by (7, -3, 2)
        let shift = Vector3::new(7.0, -3.0, 2.0);
        let tube = Cylinder::new(Point3::origin() + shift, Vector3::z(), 5.0, 1.0).unwrap();
        let line = GeneratorLine {
            point: Point3::new(-10.0, 0.0, 0.0) + shift,
            direction: Vector3::x(),
        };
        let (lo, hi) = tube.intersect_line(&line).ordered_roots().unwrap();
        assert_relative_eq!(lo, 5.0, epsilon = 1e-12);
        assert_relative_eq!(hi, 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_line_misses_and_parallel_cases() {
        let tube = Cylinder::new(Point3::origin(), Vector3::z(), 1.0, 1.0).unwrap();
        let miss = GeneratorLine {
            point: Point3::new(-10.0, 3.0, 0.0),
            direction: Vector3::x(),
        };
        assert_eq!(tube.intersect_line(&miss), Quadratic::NoRealRoots);

        let parallel_outside = GeneratorLine {
            point: Point3::new(3.0, 0.0, 0.0),
            direction: Vector3::z(),
        };
        assert_eq!(tube.intersect_line(&parallel_outside), Quadratic::NoSolution);
    }

    #[test]
    fn test_own_generator_lies_on_surface() {
        // The first generator of an axis-aligned cylinder has exact coordinates
        // (r, 0) in its own frame, so every coefficient vanishes.
        for axis in [Vector3::x(), Vector3::y(), Vector3::z()] {
            let cyl = Cylinder::new(Point3::origin(), axis, 1.5, 5.0).unwrap();
            let line = cyl.sample_generator_lines(8)[0];
            assert_eq!(cyl.intersect_line(&line), Quadratic::AllReals);
        }
    }

    #[test]
    fn test_own_generator_with_tolerance_on_skewed_axis() {
        // With a skewed axis the exact solver sees rounding noise; the tolerant
        // one recovers the "line lies on the surface" answer.
        let cyl = Cylinder::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.0), 1.5, 5.0).unwrap();
        for line in cyl.sample_generator_lines(8) {
            assert_eq!(cyl.intersect_line_with_tolerance(&line, 1e-9), Quadratic::AllReals);
        }
    }

    #[test]
    fn test_rotation_degrees() {
        let cyl = Cylinder::new(Point3::origin(), Vector3::new(0.0, -1.0, 1.0), 1.0, 1.0).unwrap();
        let rot = cyl.rotation_degrees();
        assert_relative_eq!(rot.x, -45.0, epsilon = 1e-9);
        assert_relative_eq!(rot.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(rot.z, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_display() {
        let cyl = Cylinder::new(Point3::new(0.0, 0.0, -10.0), Vector3::z(), 1.4375, 20.0).unwrap();
        assert_eq!(
            cyl.to_string(),
            "o = (0.000000,0.000000,-10.000000) a = (0.000000,0.000000,1.000000) r = 1.437500 l = 20.000000"
        );
    }
}
