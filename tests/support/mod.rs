//! Test support library
//! Shared cylinders and template helpers for the integration tests.

#![allow(dead_code)]

use saddlecut::{
    Cylinder, Intersection, IntersectionConfig, Template, float_types::Real,
    template::{TemplateSegment, is_vertical},
};
use nalgebra::{Point3, Vector3};

/// Radius of a 2-7/8" OD pipe.
pub const PIPE_RADIUS: Real = 2.875 / 2.0;

/// Vertical pipe centered on the z axis, from z = -10 to z = 10.
pub fn upright_pipe() -> Cylinder {
    Cylinder::new(Point3::new(0.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 1.0), PIPE_RADIUS, 20.0).unwrap()
}

/// Pipe coming in at 45 degrees from +y and crossing the upright pipe.
pub fn angled_pipe() -> Cylinder {
    Cylinder::new(Point3::new(0.0, 10.0, -10.0), Vector3::new(0.0, -1.0, 1.0), PIPE_RADIUS, 20.0).unwrap()
}

/// Develop the template of `unrolled` cut by `cut`.
pub fn develop(cut: &Cylinder, unrolled: &Cylinder, divisions: usize) -> Template {
    let run = Intersection::new(cut, unrolled, IntersectionConfig::with_divisions(divisions)).unwrap();
    Template::from_intersection(&run)
}

/// Vertical segments grouped by x, in order of first appearance.
pub fn columns(segments: &[TemplateSegment]) -> Vec<(Real, Vec<TemplateSegment>)> {
    let mut columns: Vec<(Real, Vec<TemplateSegment>)> = Vec::new();
    for segment in segments.iter().filter(|s| is_vertical(s)) {
        match columns.iter_mut().find(|(x, _)| *x == segment.start.x) {
            Some((_, group)) => group.push(*segment),
            None => columns.push((segment.start.x, vec![*segment])),
        }
    }
    columns
}
