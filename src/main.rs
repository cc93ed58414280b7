// main.rs
//
// Builds the template for a 2-7/8" pipe meeting another at 45 degrees:
// prints both cylinders, writes an OpenSCAD model to check their poses and the
// flat cutting template as DXF (and SVG when enabled).

use nalgebra::{Point3, Vector3};
use saddlecut::{Cylinder, Intersection, IntersectionConfig, Template, io::scad};
use std::error::Error;
use tracing::Level;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let radius = 2.875 / 2.0;
    let cut = Cylinder::new(Point3::new(0.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 1.0), radius, 20.0)?
        .with_color("red");
    let unrolled = Cylinder::new(Point3::new(0.0, 10.0, -10.0), Vector3::new(0.0, -1.0, 1.0), radius, 20.0)?
        .with_color("blue");

    println!("{cut}");
    println!("{unrolled}");

    scad::write_scad("test.scad", &[&cut, &unrolled])?;

    let run = Intersection::new(&cut, &unrolled, IntersectionConfig::default())?;
    let template = Template::from_intersection(&run);

    #[cfg(feature = "dxf-io")]
    template.write_dxf("test.dxf")?;

    #[cfg(feature = "svg-io")]
    template.write_svg("test.svg")?;

    Ok(())
}
