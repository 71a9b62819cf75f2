//! Circuit derivative equations.
//!
//! The RLC loop equation is
//!
//! ```text
//! Vc(t) - i(t) * (R + ESR) - L * di/dt = 0
//! ```
//!
//! where Vc is the capacitor voltage, i the coil current, R the coil
//! resistance, ESR the capacitor bank's series resistance, and L the
//! position-dependent coil inductance. The capacitor side obeys
//! `i = C * dv/dt`. Each switching topology adds its own flyback-diode
//! conduction rule on top.

use crate::error::{CoilgunError, Result};
use crate::sim::SimContext;
use crate::SCR_DIODE_DROP;

use super::params::{CircuitParams, SwitchingMethod};

/// Instantaneous derivatives of the electrical state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivatives {
    /// Rate of change of coil current (A/s).
    pub di_dt: f64,
    /// Rate of change of capacitor voltage (V/s).
    pub dv_dt: f64,
}

/// Evaluates dI/dt and dV/dt under a configured switching topology.
#[derive(Debug, Clone)]
pub struct CircuitModel {
    params: CircuitParams,
    /// Measured DC resistance of the coil winding (ohms).
    coil_resistance: f64,
}

impl CircuitModel {
    /// Create a model for the given parameters and coil resistance.
    pub fn new(params: CircuitParams, coil_resistance: f64) -> Self {
        Self {
            params,
            coil_resistance,
        }
    }

    /// The configured parameters.
    pub fn params(&self) -> &CircuitParams {
        &self.params
    }

    /// Compute the electrical derivatives at the present operating point.
    ///
    /// `inductance` is in henries. `ctx` carries the previous step's dI/dt
    /// sign, which the legacy resistor model's conduction test needs; the SCR
    /// model ignores it.
    pub fn derivatives(
        &self,
        voltage: f64,
        current: f64,
        inductance: f64,
        ctx: &SimContext,
    ) -> Result<Derivatives> {
        let di_dt = match self.params.method {
            SwitchingMethod::Scr => self.di_dt_scr(voltage, current, inductance),
            SwitchingMethod::LegacyResistor => {
                self.di_dt_legacy(voltage, current, inductance, ctx)
            }
            method => {
                return Err(CoilgunError::UnimplementedMethod {
                    method: method.to_string(),
                })
            }
        };

        Ok(Derivatives {
            di_dt,
            dv_dt: self.dv_dt(voltage, current),
        })
    }

    /// SCR topology: once the SCR commutates off, the flyback diode clamps
    /// the coil. It conducts when the coil current has reversed or the
    /// capacitor has swung below the fixed 0.7 V drop, and then carries the
    /// full inductor current.
    fn di_dt_scr(&self, voltage: f64, current: f64, inductance: f64) -> f64 {
        let conducting =
            self.params.diode_enabled && (current < 0.0 || voltage < -SCR_DIODE_DROP);

        let (v_eff, flyback_current) = if conducting {
            (voltage - SCR_DIODE_DROP, current)
        } else {
            (voltage, 0.0)
        };

        (v_eff - current * (self.coil_resistance + self.params.esr) - flyback_current) / inductance
    }

    /// Legacy model: the flyback path is resistive and conducts whenever the
    /// previous step's dI/dt was negative.
    fn di_dt_legacy(&self, voltage: f64, current: f64, inductance: f64, ctx: &SimContext) -> f64 {
        let mut flyback_current = 0.0;
        if self.params.diode_enabled && ctx.neg_di_dt {
            flyback_current =
                (voltage - current * self.coil_resistance) / self.params.fdiode_resistance;
        }

        (voltage - current * (self.coil_resistance + self.params.esr) - flyback_current)
            / inductance
    }

    /// Capacitor voltage rate. Held at zero once the capacitor has swung
    /// below the *configured* diode voltage (a separate threshold from the
    /// SCR conduction test).
    fn dv_dt(&self, voltage: f64, current: f64) -> f64 {
        if self.params.diode_enabled && voltage < -self.params.fdiode_voltage {
            return 0.0;
        }

        -current / self.params.capacitance
    }
}
