//! Validation errors

use crate::float_types::Real;
use nalgebra::Vector3;

/// All the possible construction issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (DegenerateAxis) The axis vector has zero length or a NaN/infinite component
    #[error("(DegenerateAxis) The axis vector cannot be normalized: {0}")]
    DegenerateAxis(Vector3<Real>),
    /// (NonPositiveRadius) A cylinder radius must be strictly positive
    #[error("(NonPositiveRadius) The radius must be positive, got {0}")]
    NonPositiveRadius(Real),
    /// (NonPositiveLength) A cylinder length must be strictly positive
    #[error("(NonPositiveLength) The length must be positive, got {0}")]
    NonPositiveLength(Real),
    /// (InvalidCoordinate) The coordinate has a NaN or infinite
    #[error("(InvalidCoordinate) The coordinate ({0}) has a NaN or infinite")]
    InvalidCoordinate(Vector3<Real>),
    /// (ZeroDivisions) The circumference must be split into at least one generator
    #[error("(ZeroDivisions) At least one division is required")]
    ZeroDivisions,
}
