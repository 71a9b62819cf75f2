//! Physical state, Euler integrator, and simulation driver.
//!
//! A run is strictly sequential: each trajectory row depends on the previous
//! row and on the diode context carried between steps, so no step can be
//! reordered or parallelized within one run. Independent runs (parameter
//! sweeps) share nothing mutable and may execute concurrently.

mod driver;
mod integrator;
mod state;

pub use driver::{time_axis, Simulation, SimulationConfig};
pub use integrator::Integrator;
pub use state::{PhysicalState, SimContext};
