//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`ForceSet`)
//! - per-body display metadata for the viewer
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::error::SimError;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Presentation metadata for one body, owned by the viewer side
/// The physics never reads any of this
#[derive(Debug, Clone)]
pub struct BodyDisplay {
    pub name: String, // legend label
    pub color: [f32; 3], // RGB in 0..1
    pub radius: f32, // marker radius in pixels
}

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the parameters, current system state, the set of active
/// force laws, and per-body display metadata
///
/// In Bevy terms, this is inserted as a `Resource` and then read by systems
/// responsible for integration and visualization
#[derive(Debug, Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
    pub display: Vec<BodyDisplay>,
}

impl Scenario {
    /// Map a deserialized config into the runtime bundle
    ///
    /// All construction-time validation happens here: step size, body
    /// count, and masses are checked before a single step can run.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        if !(p_cfg.dt > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "time step must be positive, got {}",
                p_cfg.dt
            )));
        }
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            dt: p_cfg.dt,
            G: p_cfg.G,
        };

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body {
            x: NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
            v: NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
            m: bc.m,
        }).collect();

        // Initial system state: bodies at t = 0, validated
        let system = System::new(bodies)?;

        // Viewer metadata, parallel to the body list
        let display: Vec<BodyDisplay> = cfg.bodies.into_iter().map(|bc| BodyDisplay {
            name: bc.name,
            color: bc.color,
            radius: bc.radius,
        }).collect();

        // Forces: construct a ForceSet and register Newtonian gravity
        let forces = ForceSet::new().with(NewtonianGravity {
            G: parameters.G,
        });

        Ok(Self {
            parameters,
            system,
            forces,
            display,
        })
    }
}
