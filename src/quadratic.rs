//! Real roots of `a·t² + b·t + c = 0`, degenerate cases included.
//!
//! Comparisons against zero in [`Quadratic::solve`] are **exact**. Coefficients
//! that come out of trigonometric sampling can land a hair away from a
//! degenerate boundary, in which case a tangency shows up as [`Quadratic::TwoRoots`]
//! with two nearly equal roots instead of [`Quadratic::OneRoot`]. For cutting
//! templates the visual difference is negligible. Callers that need the
//! degenerate classification can use [`Quadratic::solve_with_tolerance`].

use crate::float_types::Real;

/// Solution set of a quadratic (or degenerate linear/constant) equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quadratic {
    /// Every `t` satisfies the equation (`a = b = c = 0`).
    AllReals,
    /// No `t` satisfies it (`a = b = 0`, `c ≠ 0`).
    NoSolution,
    /// Exactly one root: a linear equation or a repeated root.
    OneRoot(Real),
    /// Two distinct real roots, in no particular order.
    TwoRoots(Real, Real),
    /// Negative discriminant.
    NoRealRoots,
}

impl Quadratic {
    /// Solve `a·t² + b·t + c = 0` with exact zero comparisons.
    pub fn solve(a: Real, b: Real, c: Real) -> Self {
        Self::classify(a, b, c, |x| x == 0.0)
    }

    /// Solve with every zero test replaced by `|x| <= tolerance`.
    ///
    /// The branch order is the same as [`Quadratic::solve`]; only the notion of
    /// "zero" changes. `tolerance` is absolute, so it should be chosen relative to
    /// the magnitude of the coefficients.
    pub fn solve_with_tolerance(a: Real, b: Real, c: Real, tolerance: Real) -> Self {
        let tolerance = tolerance.abs();
        Self::classify(a, b, c, |x| x.abs() <= tolerance)
    }

    fn classify(a: Real, b: Real, c: Real, is_zero: impl Fn(Real) -> bool) -> Self {
        if is_zero(a) {
            return match (is_zero(b), is_zero(c)) {
                (true, true) => Quadratic::AllReals,
                (true, false) => Quadratic::NoSolution,
                (false, true) => Quadratic::OneRoot(0.0),
                (false, false) => Quadratic::OneRoot(-c / b),
            };
        }

        let d = b * b - 4.0 * a * c;
        if is_zero(d) {
            return Quadratic::OneRoot(-b / (2.0 * a));
        }
        if d < 0.0 {
            return Quadratic::NoRealRoots;
        }

        let d = d.sqrt();
        Quadratic::TwoRoots((-b + d) / (2.0 * a), (-b - d) / (2.0 * a))
    }

    /// The roots, if any, as `(low, high)`.
    ///
    /// A single root is returned as `(t, t)`.
    pub fn ordered_roots(&self) -> Option<(Real, Real)> {
        match *self {
            Quadratic::OneRoot(t) => Some((t, t)),
            Quadratic::TwoRoots(t1, t2) => Some((t1.min(t2), t1.max(t2))),
            Quadratic::AllReals | Quadratic::NoSolution | Quadratic::NoRealRoots => None,
        }
    }

    /// Short lowercase name, used in logs and summaries.
    pub const fn kind(&self) -> &'static str {
        match self {
            Quadratic::AllReals => "all-reals",
            Quadratic::NoSolution => "no-solution",
            Quadratic::OneRoot(_) => "one-root",
            Quadratic::TwoRoots(..) => "two-roots",
            Quadratic::NoRealRoots => "no-real-roots",
        }
    }
}
