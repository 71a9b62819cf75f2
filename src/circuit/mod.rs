//! Drive circuit parameters and derivative equations.
//!
//! The coil is driven from a capacitor bank through a switching element. The
//! [`CircuitModel`] evaluates the instantaneous dI/dt and dV/dt of the RLC
//! loop under the configured [`SwitchingMethod`], including the flyback-diode
//! conduction rules of each topology.

mod model;
mod params;

pub use model::{CircuitModel, Derivatives};
pub use params::{CircuitParams, SwitchingMethod};
