//! Fixed-step time integrator for the n-body system
//!
//! Provides the semi-implicit Euler scheme driven by a [`ForceSet`] and
//! [`Parameters`]: velocities are kicked from forces at the old positions,
//! then positions drift with the already-updated velocities.

use super::error::SimError;
use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{NVec3, System};

/// Advance the system by one step using semi-implicit Euler
/// Updates velocities, then positions, then `sys.t` in-place based on
/// `params.dt`.
///
/// The step is atomic: forces are evaluated before any state is touched,
/// so on error (degenerate separation) the system is exactly as it was.
pub fn euler_semi_implicit(sys: &mut System, forces: &ForceSet, params: &Parameters) -> Result<(), SimError> {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return Ok(());
    }

    let dt = params.dt; // time step dt

    // Allocate a vector of net forces, one per body, initialized to zero
    // f[i] will hold the force on body i at the current time t = sys.t
    let mut f = vec![NVec3::zeros(); n];

    // Ask the force set to accumulate forces at time t_n into f,
    // based on the current system state sys. This is the only fallible
    // part of the step, and it runs before any mutation
    forces.accumulate_forces(sys.t, &*sys, &mut f)?;

    // Kick: v_n+1 = v_n + dt * a_n, with a_n = f_n / m from the old positions
    for (b, fi) in sys.bodies.iter_mut().zip(f.iter()) {
        b.v += (*fi / b.m) * dt;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1
    // Uses the just-updated velocity; that ordering is what makes this
    // semi-implicit rather than explicit Euler
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    // Increment the system time by one full step
    sys.t += dt;

    Ok(())
}
