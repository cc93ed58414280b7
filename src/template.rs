//! The developed (unrolled) surface of a cylinder as flat 2D line segments.
//!
//! x is arc length around the unrolled cylinder, y is distance along its axis.

use crate::float_types::Real;
use crate::intersect::Intersection;
use geo::{BoundingRect, Line, LineString, MultiLineString, Rect, coord};

/// A 2D segment `(x0, y0)-(x1, y1)` in template space.
pub type TemplateSegment = Line<Real>;

/// Flat cutting template for the unrolled cylinder of an [`Intersection`].
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    segments: Vec<TemplateSegment>,
    circumference: Real,
    length: Real,
    divisions: usize,
}

impl Template {
    /// **Developing the surface**
    ///
    /// Generator `i` maps to `x_i = i · circumference / divisions`, where the
    /// circumference is `2π · radius` of the unrolled cylinder. The first segment is
    /// always the baseline `(0, 0)-(circumference, 0)`; after it, each generator
    /// contributes one vertical segment per open interval of its cut, in generator
    /// order.
    pub fn from_intersection(intersection: &Intersection<'_>) -> Self {
        let unrolled = intersection.unrolled();
        let circumference = unrolled.circumference();
        let length = unrolled.length();
        let divisions = intersection.config().divisions;

        let mut segments = vec![Line::new(
            coord! { x: 0.0, y: 0.0 },
            coord! { x: circumference, y: 0.0 },
        )];

        for generator in intersection.generators() {
            let x = column_x(generator.index, circumference, divisions);
            segments.extend(
                generator
                    .policy
                    .open_intervals(length)
                    .into_iter()
                    .map(|(y0, y1)| Line::new(coord! { x: x, y: y0 }, coord! { x: x, y: y1 })),
            );
        }

        tracing::info!(
            segments = segments.len(),
            circumference,
            length,
            "developed template"
        );

        Self {
            segments,
            circumference,
            length,
            divisions,
        }
    }

    /// Every segment, baseline first.
    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }

    /// The reference edge of the unrolled surface.
    pub fn baseline(&self) -> &TemplateSegment {
        &self.segments[0]
    }

    /// The generator segments, without the baseline.
    pub fn cut_segments(&self) -> &[TemplateSegment] {
        &self.segments[1..]
    }

    pub const fn circumference(&self) -> Real {
        self.circumference
    }

    pub const fn length(&self) -> Real {
        self.length
    }

    pub const fn divisions(&self) -> usize {
        self.divisions
    }

    /// Template x-coordinate of generator `index`.
    pub fn column_x(&self, index: usize) -> Real {
        column_x(index, self.circumference, self.divisions)
    }

    /// Extent of everything drawn.
    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        let lines: Vec<LineString<Real>> = self
            .segments
            .iter()
            .map(|segment| LineString::new(vec![segment.start, segment.end]))
            .collect();
        MultiLineString::new(lines).bounding_rect()
    }
}

fn column_x(index: usize, circumference: Real, divisions: usize) -> Real {
    (index as Real) * circumference / (divisions as Real)
}

/// `true` for a generator column: both ends share the same x.
pub fn is_vertical(segment: &TemplateSegment) -> bool {
    segment.start.x == segment.end.x
}
