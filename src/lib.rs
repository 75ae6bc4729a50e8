pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::forces::{Force, ForceSet, NewtonianGravity};
pub use simulation::integrator::euler_semi_implicit;
pub use simulation::params::Parameters;
pub use simulation::scenario::{BodyDisplay, Scenario};
pub use simulation::error::SimError;

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::solsim_vis2d::run_2d;
