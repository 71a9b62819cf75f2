//! # Coilgun Core
//!
//! An electromechanical simulator for capacitor-driven coilguns.
//!
//! This library provides:
//! - A loader for coil descriptor/data files (inductance and force as
//!   functions of projectile position and drive current)
//! - Piecewise table interpolation with sign handling and edge saturation
//! - Switch-topology-dependent circuit equations (SCR drive with flyback
//!   diode, plus a legacy resistor-diode model)
//! - A fixed-step Euler integrator over the 5-element physical state
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`coil`] - Coil data table, descriptor, file loading, and interpolation
//! - [`circuit`] - Drive circuit parameters and derivative equations
//! - [`sim`] - Physical state, Euler integrator, and simulation driver
//! - [`report`] - Trajectory summaries (peak current/voltage, muzzle energy)
//!
//! ## Usage
//!
//! ```no_run
//! use coilgun_core::circuit::{CircuitParams, SwitchingMethod};
//! use coilgun_core::coil::load_coil;
//! use coilgun_core::sim::{time_axis, PhysicalState, Simulation, SimulationConfig};
//!
//! # fn main() -> coilgun_core::Result<()> {
//! let (table, descriptor) = load_coil("Data/0.9_C20x170T-P8.0x25")?;
//!
//! let params = CircuitParams {
//!     capacitance: 680e-6,
//!     esr: 0.34,
//!     fdiode_voltage: 0.7,
//!     fdiode_resistance: 4.7,
//!     diode_enabled: true,
//!     method: SwitchingMethod::Scr,
//! };
//!
//! let config = SimulationConfig::new(table, descriptor, params)?;
//! let sim = Simulation::new(config);
//!
//! let time = time_axis(5e-3, 1e-6);
//! let initial = PhysicalState::new(0.0, 440.0, 0.0, 20.0, 0.0);
//! let trajectory = sim.simulate(initial, time.len(), 1e-6)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Simulation Method
//!
//! The simulator advances the state vector (coil current, capacitor voltage,
//! projectile velocity, projectile distance, cumulative work) with explicit
//! Euler steps of a constant size dt:
//!
//! 1. Interpolate inductance L and force F from the coil table at the present
//!    (current, distance) pair
//! 2. Evaluate dI/dt and dV/dt from the RLC equations of the selected
//!    switching topology
//! 3. Integrate current, voltage, velocity, displacement, and work
//!
//! Once the coil current goes negative the state freezes for the remainder of
//! the run (end of the useful stroke; reverse-current physics is not modeled).

pub mod circuit;
pub mod coil;
pub mod error;
pub mod report;
pub mod sim;

// Re-export main types for convenience
pub use coil::{CoilDescriptor, CoilTable};
pub use error::{CoilgunError, Result};
pub use report::TrajectorySummary;
pub use sim::{PhysicalState, Simulation, SimulationConfig};

/// Fixed forward drop of the SCR-policy flyback diode (volts).
pub const SCR_DIODE_DROP: f64 = 0.7;

/// Table inductance is stored in microhenries; multiply by this for henries.
pub const MICROHENRY: f64 = 1e-6;

/// Resistivity of copper at room temperature (ohm-meters).
pub const COPPER_RESISTIVITY: f64 = 1.68e-8;

/// Default Euler step size in seconds.
pub const DEFAULT_STEP_TIME: f64 = 1e-6;

/// Default total simulated time in seconds.
pub const DEFAULT_SIM_TIME: f64 = 5e-3;
