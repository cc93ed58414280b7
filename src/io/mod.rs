//! Output sinks: an OpenSCAD script for checking the cylinder poses in 3D and
//! vector drawings (DXF, SVG) of the flat template.

pub mod scad;

#[cfg(feature = "svg-io")]
pub mod svg;

#[cfg(feature = "dxf-io")]
pub mod dxf;

/// Generic I/O and format‑conversion errors.
///
/// Drawing formats are behind cargo feature‑flags.
/// When a feature is disabled the corresponding variant does not exist.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    #[cfg(feature = "dxf-io")]
    /// Error bubbled up from the `dxf` crate while writing.
    Dxf(::dxf::DxfError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),

            #[cfg(feature = "dxf-io")]
            Dxf(error) => write!(f, "DXF writing error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

#[cfg(feature = "dxf-io")]
impl From<::dxf::DxfError> for IoError {
    fn from(value: ::dxf::DxfError) -> Self {
        Self::Dxf(value)
    }
}
