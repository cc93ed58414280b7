use super::IoError;
use crate::cylinder::Cylinder;
use std::path::Path;

impl Cylinder {
    /// OpenSCAD snippet for this cylinder: translate to the origin, rotate by
    /// [`Cylinder::rotation_degrees`], color, then a `cylinder` primitive.
    ///
    /// ```rust
    /// # use saddlecut::cylinder::Cylinder;
    /// # use nalgebra::{Point3, Vector3};
    /// let tube = Cylinder::new(Point3::origin(), Vector3::z(), 1.0, 5.0)?.with_color("red");
    /// assert!(tube.to_scad().contains("cylinder(h = 5.000000, r = 1.000000, $fn = 100);"));
    /// # Ok::<(), saddlecut::errors::ValidationError>(())
    /// ```
    pub fn to_scad(&self) -> String {
        let o = self.origin();
        let r = self.rotation_degrees();
        let mut out = String::new();
        out.push_str(&format!("translate([{:.6}, {:.6}, {:.6}])\n", o.x, o.y, o.z));
        out.push_str(&format!("rotate([{:.6}, {:.6}, {:.6}])\n", r.x, r.y, r.z));
        out.push_str(&format!("color(\"{}\")\n", self.color()));
        out.push_str(&format!(
            "cylinder(h = {:.6}, r = {:.6}, $fn = 100);\n",
            self.length(),
            self.radius()
        ));
        out
    }
}

/// Concatenate the OpenSCAD snippets of several cylinders into one script.
pub fn to_scad(cylinders: &[&Cylinder]) -> String {
    cylinders.iter().map(|cylinder| cylinder.to_scad()).collect()
}

/// Write [`to_scad`] output to `path`.
pub fn write_scad(path: impl AsRef<Path>, cylinders: &[&Cylinder]) -> Result<(), IoError> {
    let path = path.as_ref();
    std::fs::write(path, to_scad(cylinders))?;
    tracing::info!(path = %path.display(), cylinders = cylinders.len(), "wrote OpenSCAD model");
    Ok(())
}
