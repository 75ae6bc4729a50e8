//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state and display metadata for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   t_end: 31536000.0       # total simulated time (s), here one year
//!   dt: 86400.0             # fixed step size (s), here one day
//!   G: 6.6743e-11           # gravitational constant (m^3 kg^-1 s^-2)
//!
//! bodies:
//!   - name: "Sun"
//!     x: [ 0.0, 0.0, 0.0 ]  # position (m)
//!     v: [ 0.0, 0.0, 0.0 ]  # velocity (m/s)
//!     m: 1.989e30           # mass (kg)
//!     radius: 8.0           # marker radius (px)
//!     color: [ 1.0, 0.84, 0.0 ]
//!   - name: "Earth"
//!     x: [ 1.47e11, 0.0, 0.0 ]
//!     v: [ 0.0, 3.0e4, 0.0 ]
//!     m: 5.972e24
//!     radius: 3.0
//!     color: [ 0.0, 0.0, 1.0 ]
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation; name, radius, and color only ever reach the viewer.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // total simulated duration (s)
    pub dt: f64,    // time step size (s)
    pub G: f64,     // gravitational constant
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String,     // label shown by the viewer
    pub x: [f64; 3],      // initial position vector in meters
    pub v: [f64; 3],      // initial velocity vector in meters per second
    pub m: f64,           // mass of the body in kilograms
    pub radius: f32,      // marker radius in pixels, display only
    pub color: [f32; 3],  // marker RGB color in 0..1, display only
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // list of bodies that define the initial state of the system
}
