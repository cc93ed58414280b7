//! Small vector helpers over `nalgebra::Vector3<Real>`.
//!
//! `dot`, `cross` and `scale` are thin wrappers kept so the frame
//! construction in [`crate::cylinder`] reads the same as the math it implements.

use crate::float_types::Real;
use nalgebra::Vector3;

#[inline]
pub fn dot(u: &Vector3<Real>, v: &Vector3<Real>) -> Real {
    u.dot(v)
}

#[inline]
pub fn cross(u: &Vector3<Real>, v: &Vector3<Real>) -> Vector3<Real> {
    u.cross(v)
}

#[inline]
pub fn scale(v: &Vector3<Real>, k: Real) -> Vector3<Real> {
    v * k
}

/// Returns `v / |v|`.
///
/// `v` must not be the zero vector. Every call site in this crate passes an
/// axis that was validated at construction or a vector built to be non-zero.
#[inline]
pub fn normalize(v: &Vector3<Real>) -> Vector3<Real> {
    debug_assert!(v.norm_squared() > 0.0, "normalize called on a zero vector");
    scale(v, 1.0 / dot(v, v).sqrt())
}

/// Returns *some* vector orthogonal to `v`, deterministically.
///
/// If any coordinate of `v` is exactly zero, the matching basis vector is
/// returned (x first, then y, then z). Otherwise the result is `(0, v.z, -v.y)`,
/// which is orthogonal but **not** unit length, so callers normalize it.
pub fn generate_orthogonal(v: &Vector3<Real>) -> Vector3<Real> {
    if v.x == 0.0 {
        return Vector3::x();
    }
    if v.y == 0.0 {
        return Vector3::y();
    }
    if v.z == 0.0 {
        return Vector3::z();
    }
    Vector3::new(0.0, v.z, -v.y)
}
