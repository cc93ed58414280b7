//! Intersection of two finite cylinders, developed into a flat **cutting template**
//! that wraps around one of them, e.g. to mark a pipe for a saddle or miter cut.
//!
//! Cylinder B (the *unrolled* one) is sampled into generator lines, each line is
//! intersected analytically with cylinder A (the one being *cut* into), and the
//! surviving intervals are laid out flat with x = arc length and y = distance along
//! B's axis.
//!
//! ```rust
//! # use saddlecut::{Cylinder, Intersection, IntersectionConfig, Template};
//! # use nalgebra::{Point3, Vector3};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let a = Cylinder::new(Point3::new(0.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 1.0), 1.4375, 20.0)?;
//! let b = Cylinder::new(Point3::new(0.0, 10.0, -10.0), Vector3::new(0.0, -1.0, 1.0), 1.4375, 20.0)?;
//! let run = Intersection::new(&a, &b, IntersectionConfig::default())?;
//! let template = Template::from_intersection(&run);
//! assert_eq!(template.segments().len(), 1 + 2 * 32);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): `.dxf` template export
//! - **svg-io**: `.svg` template export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to intersect generators in parallel

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod cylinder;
pub mod errors;
pub mod float_types;
pub mod intersect;
pub mod io;
pub mod quadratic;
pub mod template;
pub mod vector;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use cylinder::{Cylinder, GeneratorLine};
pub use intersect::{CutPolicy, GeneratorCut, Intersection, IntersectionConfig};
pub use quadratic::Quadratic;
pub use template::{Template, TemplateSegment};
