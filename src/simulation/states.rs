//! Core state types for the solar-system simulation.
//!
//! Defines the body/system structs:
//! - `Body` holds one point mass (position, velocity, mass)
//! - `System` holds the ordered list of bodies and the elapsed time `t`
//!
//! A `System` is built once from initial conditions and then mutated in
//! place, one integration step at a time.

use nalgebra::Vector3;

use super::error::SimError;

pub type NVec3 = Vector3<f64>;

/// Seconds in a day, for the elapsed-time counter shown by the viewer
pub const SECONDS_PER_DAY: f64 = 60.0 * 60.0 * 24.0;
/// Seconds in a (365-day) year
pub const SECONDS_PER_YEAR: f64 = SECONDS_PER_DAY * 365.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // position (m)
    pub v: NVec3, // velocity (m/s)
    pub m: f64, // mass (kg), fixed for the whole run
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies, identity = index
    pub t: f64, // elapsed simulated time (s)
}

impl System {
    /// Build a system at t = 0 from initial conditions
    ///
    /// Fails with [`SimError::InvalidConfiguration`] if fewer than two
    /// bodies are supplied or any mass is not strictly positive. Gravity
    /// needs at least one pair, and a non-positive mass makes the
    /// force-to-acceleration division meaningless.
    pub fn new(bodies: Vec<Body>) -> Result<Self, SimError> {
        if bodies.len() < 2 {
            return Err(SimError::InvalidConfiguration(format!(
                "need at least 2 bodies, got {}",
                bodies.len()
            )));
        }
        for (i, b) in bodies.iter().enumerate() {
            if !(b.m > 0.0) {
                return Err(SimError::InvalidConfiguration(format!(
                    "body {} has non-positive mass {}",
                    i, b.m
                )));
            }
        }
        Ok(Self { bodies, t: 0.0 })
    }

    /// Elapsed simulated time in days
    pub fn elapsed_days(&self) -> f64 {
        self.t / SECONDS_PER_DAY
    }

    /// Elapsed simulated time in years, as shown by the time counter
    pub fn elapsed_years(&self) -> f64 {
        self.t / SECONDS_PER_YEAR
    }
}
