//! Force contributors for the n-body engine
//!
//! Defines the [`Force`] trait and direct all-pairs Newtonian gravity.
//! Contributions are summed into a single net force vector per body.

use crate::simulation::error::SimError;
use crate::simulation::states::{NVec3, System};

/// Collection of force terms
/// Each term implements [`Force`] and their contributions are summed
/// into a single net force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add a force term
    pub fn with(mut self, term: impl Force + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    ///
    /// Reads `sys` only; a failing term leaves `sys` untouched and the
    /// contents of `out` unspecified.
    pub fn accumulate_forces(&self, t: f64, sys: &System, out: &mut [NVec3]) -> Result<(), SimError> {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec3::zeros();
        }
        // Iterate over all force contributors
        for term in &self.terms {
            term.force(t, sys, out)?;
        }
        Ok(())
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ForceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForceSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

/// Trait for force sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Force {
    fn force(&self, t: f64, sys: &System, out: &mut [NVec3]) -> Result<(), SimError>;
}

/// Direct all-pairs Newtonian gravity, no softening
///
/// Exact O(N^2) summation. There is no cutoff and no approximation; with
/// N <= ~10 bodies nothing fancier pays off. Coincident bodies make the
/// pair force undefined and fail the whole evaluation.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Force for NewtonianGravity {
    fn force(&self, _t: f64, sys: &System, out: &mut [NVec3]) -> Result<(), SimError> {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return Ok(());
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            // bi: body i (left side of the pair)
            let bi = &sys.bodies[i];
            let xi = bi.x;      // position of body i
            let mi = bi.m;      // mass of body i

            for j in (i + 1)..n {
                // bj: body j (right side of the pair)
                let bj = &sys.bodies[j];
                let xj = bj.x;  // position of body j
                let mj = bj.m;  // mass of body j

                // r is the displacement vector from i to j
                // If r points from i to j, then i feels a pull along +r,
                // j feels a pull along -r
                let r = xj - xi;

                // Squared separation distance |r|^2
                let d2 = r.dot(&r);

                // Zero separation makes the force undefined. Fail here
                // rather than let a NaN/Inf corrupt every later step
                if d2 == 0.0 {
                    return Err(SimError::DegenerateSeparation { i, j });
                }

                // 1 / |r|
                let inv_d = d2.sqrt().recip();

                // 1 / |r|^3
                // (Newton's law written against the displacement vector:
                //   F = G m_i m_j r / |r|^3
                // i.e. magnitude G m_i m_j / |r|^2 along the unit vector r / |r|)
                let inv_d3 = inv_d * inv_d * inv_d;

                // Combine G, the masses, and the distance factor:
                // coef = G * m_i * m_j / |r|^3
                let coef = self.G * mi * mj * inv_d3;

                // -------------------------
                // Apply Newton's law:
                // F_i +=  G * m_i * m_j * r / |r|^3
                // F_j += -G * m_i * m_j * r / |r|^3
                // (equal and opposite)
                // -------------------------

                // Force on body i due to body j:
                // direction: along +r (toward j)
                out[i] += coef * r;

                // Force on body j due to body i:
                // direction: along -r (toward i)
                out[j] -= coef * r;
            }
        }

        Ok(())
    }
}
