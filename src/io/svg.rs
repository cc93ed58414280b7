use super::IoError;
use crate::float_types::Real;
use crate::template::Template;
use std::path::Path;

use svg::Document;
use svg::node::element::{Group, Line};

/// Blank border around the drawing, in template units.
const MARGIN: Real = 1.0;

impl Template {
    /// Build an SVG document of the template.
    ///
    /// SVG's y axis points down, so y is flipped to keep the baseline at the bottom
    /// of the page like a sheet wrapped around the pipe from below.
    pub fn to_svg_document(&self) -> Document {
        let width = self.circumference() + 2.0 * MARGIN;
        let height = self.length() + 2.0 * MARGIN;
        let flip = |y: Real| self.length() + MARGIN - y;

        let group = self.segments().iter().fold(
            Group::new()
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", 0.05),
            |group, segment| {
                group.add(
                    Line::new()
                        .set("x1", segment.start.x + MARGIN)
                        .set("y1", flip(segment.start.y))
                        .set("x2", segment.end.x + MARGIN)
                        .set("y2", flip(segment.end.y)),
                )
            },
        );

        Document::new()
            .set("viewBox", (0.0, 0.0, width, height))
            .set("width", width)
            .set("height", height)
            .add(group)
    }

    /// The SVG document as a string.
    pub fn to_svg(&self) -> String {
        self.to_svg_document().to_string()
    }

    /// Write the SVG document to `path`.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let path = path.as_ref();
        svg::save(path, &self.to_svg_document())?;
        tracing::info!(path = %path.display(), segments = self.segments().len(), "wrote SVG template");
        Ok(())
    }
}
