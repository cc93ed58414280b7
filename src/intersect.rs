//! Samples the unrolled cylinder into generators and classifies each one
//! against the cylinder being cut into.
//!
//! Geometric degeneracies (tangency, parallel axes, coincident surfaces) are
//! data here, not errors: every generator gets a [`CutPolicy`].

use crate::cylinder::{Cylinder, GeneratorLine};
use crate::errors::ValidationError;
use crate::float_types::{Real, tolerance};
use crate::quadratic::Quadratic;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Resolution and solver settings for one intersection run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionConfig {
    /// Number of generator lines sampled around the unrolled cylinder.
    pub divisions: usize,
    /// `None` solves with exact zero comparisons, `Some(eps)` snaps near-zero
    /// coefficients and discriminants to zero.
    pub tolerance: Option<Real>,
}

impl Default for IntersectionConfig {
    fn default() -> Self {
        Self {
            divisions: 32,
            tolerance: None,
        }
    }
}

impl IntersectionConfig {
    pub const fn with_divisions(divisions: usize) -> Self {
        Self {
            divisions,
            tolerance: None,
        }
    }

    pub const fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
}

/// What the template shows along one generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutPolicy {
    /// No line is drawn on this generator.
    Unmarked,
    /// The whole generator, `0..length`, is drawn.
    Full,
    /// The other cylinder occludes `(low, high)`; the generator is drawn on
    /// `[0, low]` and `[high, length]`.
    Split { low: Real, high: Real },
}

impl CutPolicy {
    /// Maps a solver result onto a cut.
    pub fn from_quadratic(result: &Quadratic) -> Self {
        match *result {
            Quadratic::AllReals => CutPolicy::Unmarked,
            Quadratic::NoSolution | Quadratic::NoRealRoots => CutPolicy::Full,
            // a tangential touch does not open a visible gap
            Quadratic::OneRoot(_) => CutPolicy::Full,
            Quadratic::TwoRoots(t1, t2) => CutPolicy::Split {
                low: t1.min(t2),
                high: t1.max(t2),
            },
        }
    }

    /// Drawn intervals along the generator, clipped to `[0, length]`.
    ///
    /// Intervals that are empty after clipping are dropped.
    pub fn open_intervals(&self, length: Real) -> Vec<(Real, Real)> {
        let clip = |lo: Real, hi: Real| {
            let (lo, hi) = (lo.clamp(0.0, length), hi.clamp(0.0, length));
            (hi > lo).then_some((lo, hi))
        };
        match *self {
            CutPolicy::Unmarked => Vec::new(),
            CutPolicy::Full => vec![(0.0, length)],
            CutPolicy::Split { low, high } => [clip(0.0, low), clip(high, length)]
                .into_iter()
                .flatten()
                .collect(),
        }
    }
}

/// Classification of one generator, tagged with its sampling index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorCut {
    /// Position around the unrolled cylinder, `0..divisions`.
    pub index: usize,
    pub result: Quadratic,
    pub policy: CutPolicy,
}

/// Number of generators per solver outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub all_reals: usize,
    pub no_solution: usize,
    pub one_root: usize,
    pub two_roots: usize,
    pub no_real_roots: usize,
}

/// One run of the intersection pipeline.
///
/// The roles are not symmetric: `cut` is the tube being punctured, `unrolled`
/// is the tube whose surface becomes the template.
#[derive(Debug, Clone)]
pub struct Intersection<'a> {
    cut: &'a Cylinder,
    unrolled: &'a Cylinder,
    config: IntersectionConfig,
    generators: Vec<GeneratorCut>,
}

impl<'a> Intersection<'a> {
    /// Samples `unrolled` and intersects every generator with `cut`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::ZeroDivisions`] when `config.divisions` is zero.
    pub fn new(
        cut: &'a Cylinder,
        unrolled: &'a Cylinder,
        config: IntersectionConfig,
    ) -> Result<Self, ValidationError> {
        if config.divisions == 0 {
            return Err(ValidationError::ZeroDivisions);
        }

        let lines = unrolled.sample_generator_lines(config.divisions);

        let classify = |(index, line): (usize, &GeneratorLine)| {
            let result = match config.tolerance {
                Some(eps) => cut.intersect_line_with_tolerance(line, eps),
                None => cut.intersect_line(line),
            };
            let policy = CutPolicy::from_quadratic(&result);
            tracing::debug!(index, kind = result.kind(), ?policy, "classified generator");
            GeneratorCut {
                index,
                result,
                policy,
            }
        };

        #[cfg(not(feature = "parallel"))]
        let generators: Vec<GeneratorCut> = lines.iter().enumerate().map(classify).collect();

        // collect() on an indexed parallel iterator keeps index order
        #[cfg(feature = "parallel")]
        let generators: Vec<GeneratorCut> = lines.par_iter().enumerate().map(classify).collect();

        let intersection = Self {
            cut,
            unrolled,
            config,
            generators,
        };
        intersection.warn_near_tangent();

        let summary = intersection.summary();
        tracing::info!(
            divisions = config.divisions,
            all_reals = summary.all_reals,
            no_solution = summary.no_solution,
            one_root = summary.one_root,
            two_roots = summary.two_roots,
            no_real_roots = summary.no_real_roots,
            "intersected generators"
        );

        Ok(intersection)
    }

    pub const fn cut(&self) -> &Cylinder {
        self.cut
    }

    pub const fn unrolled(&self) -> &Cylinder {
        self.unrolled
    }

    pub const fn config(&self) -> &IntersectionConfig {
        &self.config
    }

    /// Per-generator results, in sampling order.
    pub fn generators(&self) -> &[GeneratorCut] {
        &self.generators
    }

    pub fn summary(&self) -> Summary {
        self.generators
            .iter()
            .fold(Summary::default(), |mut summary, generator| {
                match generator.result {
                    Quadratic::AllReals => summary.all_reals += 1,
                    Quadratic::NoSolution => summary.no_solution += 1,
                    Quadratic::OneRoot(_) => summary.one_root += 1,
                    Quadratic::TwoRoots(..) => summary.two_roots += 1,
                    Quadratic::NoRealRoots => summary.no_real_roots += 1,
                }
                summary
            })
    }

    /// Generators whose exact solve split a tangency into two nearly equal roots.
    ///
    /// Always empty when a solver tolerance is configured.
    pub fn near_tangent(&self) -> Vec<&GeneratorCut> {
        if self.config.tolerance.is_some() {
            return Vec::new();
        }
        let eps = tolerance();
        self.generators
            .iter()
            .filter(|generator| {
                matches!(generator.result, Quadratic::TwoRoots(t1, t2) if (t1 - t2).abs() < eps)
            })
            .collect()
    }

    fn warn_near_tangent(&self) {
        for generator in self.near_tangent() {
            if let Quadratic::TwoRoots(t1, t2) = generator.result {
                tracing::warn!(
                    index = generator.index,
                    t1,
                    t2,
                    "two nearly equal roots, generator is close to tangent"
                );
            }
        }
    }
}
