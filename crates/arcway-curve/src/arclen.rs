//! Piecewise-linear cumulative arc-length tables.

use arcway_math::Point3;

/// Cumulative chord lengths sampled uniformly over a parameter range.
///
/// The table stores one cumulative entry per sample step (entry 0 is always
/// zero) and the total length through the final sample separately. Lookup
/// accuracy improves with the resolution at linear build cost.
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    cumulative: Vec<f64>,
    total: f64,
    step: f64,
}

impl ArcLengthTable {
    /// Sample `point_at` at `resolution + 1` uniform parameters across
    /// `[0, domain_end]` and accumulate chord distances.
    ///
    /// A resolution below 2 is raised to 2.
    pub fn build(
        resolution: u32,
        domain_end: f64,
        mut point_at: impl FnMut(f64) -> Point3,
    ) -> Self {
        let steps = resolution.max(2) as usize;
        let step = domain_end / steps as f64;
        let mut cumulative = vec![0.0; steps];
        let mut total = 0.0;
        let mut previous = point_at(0.0);

        for i in 1..=steps {
            let current = point_at(i as f64 * step);
            let distance = previous.distance(current);
            if i == steps {
                total = cumulative[i - 1] + distance;
            } else {
                cumulative[i] = cumulative[i - 1] + distance;
            }
            previous = current;
        }

        Self {
            cumulative,
            total,
            step,
        }
    }

    /// Total length through the final sample.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Parameter distance between consecutive samples.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Cumulative length entries, one per sample step.
    pub fn entries(&self) -> &[f64] {
        &self.cumulative
    }

    /// Map a travel `distance` back to the parameter that reaches it.
    ///
    /// Distances at or below zero map to the domain start; distances at or
    /// beyond the total map to the domain end. In between, the result
    /// interpolates linearly inside the sample step the distance falls in.
    pub fn param_at_length(&self, distance: f64) -> f64 {
        let Some(index) = self.cumulative.iter().rposition(|&len| len < distance) else {
            return 0.0;
        };

        let lower = self.cumulative[index];
        let upper = if index == self.cumulative.len() - 1 {
            self.total
        } else {
            self.cumulative[index + 1]
        };

        (index as f64 + inverse_lerp(lower, upper, distance)) * self.step
    }
}

/// Fraction of the way `value` sits between `a` and `b`, clamped to `[0, 1]`.
/// A degenerate span maps to zero.
fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if b > a {
        ((value - a) / (b - a)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
