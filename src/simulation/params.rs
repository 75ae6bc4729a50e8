//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size and end time,
//! - the gravitational constant `G`

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // total simulated duration (s)
    pub dt: f64, // step size (s), fixed across the run
    pub G: f64, // gravitational constant (m^3 kg^-1 s^-2)
}

impl Parameters {
    /// Number of full steps in a run, truncating `t_end / dt`
    pub fn frame_count(&self) -> u64 {
        (self.t_end / self.dt) as u64
    }
}
