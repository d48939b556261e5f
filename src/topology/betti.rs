//! Betti Numbers: Topological Invariants
//!
//! The k-th Betti number βₖ counts the number of k-dimensional
//! "holes" in a topological space:
//!
//! - β₀: Number of connected components
//! - β₁: Number of 1-dimensional loops/cycles
//!
//! β₀ is computed exactly by union-find over the 1-skeleton. β₁ is an
//! Euler-characteristic estimate (β₁ = E - V + β₀ - F), a lower bound
//! when triangles do not fill all cycles. Both are derived from the
//! actual complex at each filtration scale.

use super::VietorisRips;

/// Betti numbers at a specific filtration radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BettiNumbers {
    /// Connected components (exact)
    pub beta_0: usize,
    /// Loops (Euler-characteristic estimate)
    pub beta_1: usize,
    /// Filtration radius
    pub radius: f64,
}

impl BettiNumbers {
    pub fn new(beta_0: usize, beta_1: usize, radius: f64) -> Self {
        Self { beta_0, beta_1, radius }
    }

    /// Compute Betti numbers at a given filtration step
    pub fn at_step(vr: &VietorisRips, step: usize) -> Self {
        let radius = vr.radius_at(step);
        let beta_0 = vr.count_components_at(step);
        let beta_1 = vr.estimate_cycles_at(step);

        Self::new(beta_0, beta_1, radius)
    }

    /// Total topological complexity
    pub fn total(&self) -> usize {
        self.beta_0 + self.beta_1
    }

    /// Euler characteristic χ = β₀ - β₁
    pub fn euler_characteristic(&self) -> i64 {
        self.beta_0 as i64 - self.beta_1 as i64
    }
}

/// Betti curve: sequence of Betti numbers across the filtration
#[derive(Debug, Clone)]
pub struct BettiCurve {
    pub values: Vec<BettiNumbers>,
}

impl BettiCurve {
    /// Compute the full Betti curve over the radius schedule
    pub fn compute(vr: &VietorisRips) -> Self {
        let values: Vec<BettiNumbers> = (0..=vr.n_steps())
            .map(|step| BettiNumbers::at_step(vr, step))
            .collect();

        Self { values }
    }

    /// Get β₀ curve as (radius, count) pairs
    pub fn beta_0_curve(&self) -> Vec<(f64, usize)> {
        self.values.iter().map(|b| (b.radius, b.beta_0)).collect()
    }

    /// Get β₁ curve as (radius, count) pairs
    pub fn beta_1_curve(&self) -> Vec<(f64, usize)> {
        self.values.iter().map(|b| (b.radius, b.beta_1)).collect()
    }

    /// Integrated β₁ (trapezoidal area under the curve)
    pub fn integrated_beta_1(&self) -> f64 {
        if self.values.len() < 2 {
            return 0.0;
        }

        let mut integral = 0.0;
        for i in 1..self.values.len() {
            let dr = self.values[i].radius - self.values[i - 1].radius;
            let avg = (self.values[i].beta_1 + self.values[i - 1].beta_1) as f64 / 2.0;
            integral += dr * avg;
        }
        integral
    }
}
