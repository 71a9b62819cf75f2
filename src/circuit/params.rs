//! Circuit configuration: capacitor bank, flyback diode, switching method.

use std::fmt;

use crate::error::{CoilgunError, Result};

/// The switching topology driving the coil.
///
/// Selected once per simulation run. Only [`Scr`](SwitchingMethod::Scr) and
/// [`LegacyResistor`](SwitchingMethod::LegacyResistor) have circuit models;
/// selecting either FET variant is a configuration error caught before any
/// stepping starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SwitchingMethod {
    /// SCR drive with a fixed-drop flyback diode.
    #[default]
    Scr,
    /// Older model: the flyback path is a resistor in series with the diode,
    /// conducting whenever the previous step's dI/dt was negative.
    LegacyResistor,
    /// FET/IGBT switching. Not implemented.
    Fet,
    /// FET/IGBT half-bridge with energy recovery. Not implemented.
    HalfBridgeFet,
}

impl SwitchingMethod {
    /// Whether a circuit model exists for this method.
    pub fn is_implemented(&self) -> bool {
        matches!(self, Self::Scr | Self::LegacyResistor)
    }
}

impl fmt::Display for SwitchingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scr => write!(f, "scr"),
            Self::LegacyResistor => write!(f, "legacy-resistor"),
            Self::Fet => write!(f, "fet"),
            Self::HalfBridgeFet => write!(f, "half-bridge-fet"),
        }
    }
}

/// Parameters of the drive circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitParams {
    /// Capacitor bank capacitance (farads, > 0).
    pub capacitance: f64,
    /// Equivalent series resistance of the capacitor bank (ohms, >= 0).
    pub esr: f64,
    /// Configured forward voltage of the flyback diode (volts). Used by the
    /// capacitor-hold rule; the SCR conduction test uses a fixed 0.7 V drop.
    pub fdiode_voltage: f64,
    /// Series resistance of the flyback path (ohms). Used by the legacy
    /// resistor model only.
    pub fdiode_resistance: f64,
    /// Whether a flyback diode is fitted at all.
    pub diode_enabled: bool,
    /// Switching topology.
    pub method: SwitchingMethod,
}

impl CircuitParams {
    /// Check the parameters for values that would corrupt the simulation.
    pub fn validate(&self) -> Result<()> {
        if !(self.capacitance > 0.0) {
            return Err(CoilgunError::invalid_parameter(
                "capacitance",
                format!("must be positive, got {}", self.capacitance),
            ));
        }

        if self.esr < 0.0 {
            return Err(CoilgunError::invalid_parameter(
                "esr",
                format!("must be non-negative, got {}", self.esr),
            ));
        }

        if !self.method.is_implemented() {
            return Err(CoilgunError::UnimplementedMethod {
                method: self.method.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CircuitParams {
        CircuitParams {
            capacitance: 680e-6,
            esr: 0.34,
            fdiode_voltage: 0.7,
            fdiode_resistance: 4.7,
            diode_enabled: true,
            method: SwitchingMethod::Scr,
        }
    }

    #[test]
    fn test_valid_params() {
        assert!(params().validate().is_ok());
    }

    #[test]
    fn test_rejects_nonpositive_capacitance() {
        let mut p = params();
        p.capacitance = 0.0;
        assert!(matches!(
            p.validate().unwrap_err(),
            CoilgunError::InvalidParameter { .. }
        ));

        p.capacitance = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_esr() {
        let mut p = params();
        p.esr = -0.1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_rejects_unimplemented_methods() {
        for method in [SwitchingMethod::Fet, SwitchingMethod::HalfBridgeFet] {
            let mut p = params();
            p.method = method;
            assert!(matches!(
                p.validate().unwrap_err(),
                CoilgunError::UnimplementedMethod { .. }
            ));
        }
    }
}
