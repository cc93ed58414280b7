use super::IoError;
use crate::template::{Template, TemplateSegment};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use dxf::Drawing;
use dxf::entities::{Entity, EntityType, Line};

#[allow(clippy::unnecessary_cast)]
fn to_dxf_line(segment: &TemplateSegment) -> Entity {
    let line = Line::new(
        dxf::Point::new(segment.start.x as f64, segment.start.y as f64, 0.0),
        dxf::Point::new(segment.end.x as f64, segment.end.y as f64, 0.0),
    );
    Entity::new(EntityType::Line(line))
}

impl Template {
    /// Build a DXF drawing with one LINE entity per template segment, baseline first.
    pub fn to_dxf_drawing(&self) -> Drawing {
        let mut drawing = Drawing::new();
        for segment in self.segments() {
            drawing.add_entity(to_dxf_line(segment));
        }
        drawing
    }

    /// Export the template to DXF.
    ///
    /// # Returns
    /// A `Result` containing the DXF file as a byte vector or an error if exporting fails.
    pub fn to_dxf(&self) -> Result<Vec<u8>, IoError> {
        let mut buffer = Vec::new();
        self.to_dxf_drawing().save(&mut buffer)?;
        Ok(buffer)
    }

    /// Write the DXF drawing to `path`.
    pub fn write_dxf(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_dxf_drawing().save(&mut writer)?;
        writer.flush()?;
        tracing::info!(path = %path.display(), segments = self.segments().len(), "wrote DXF template");
        Ok(())
    }
}
