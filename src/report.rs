//! Trajectory summaries.
//!
//! Extracts the derived quantities of interest from a completed run: peak
//! coil current and capacitor voltage (both extremes), final projectile
//! velocity, and muzzle energy (the cumulative work at the last row).

use std::fmt;

use crate::sim::PhysicalState;

/// Derived quantities of one completed trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySummary {
    /// Lowest coil current seen (A).
    pub peak_current_min: f64,
    /// Highest coil current seen (A).
    pub peak_current_max: f64,
    /// Lowest capacitor voltage seen (V).
    pub peak_voltage_min: f64,
    /// Highest capacitor voltage seen (V).
    pub peak_voltage_max: f64,
    /// Projectile velocity at the last row (m/s).
    pub final_velocity: f64,
    /// Cumulative work at the last row (J).
    pub muzzle_energy: f64,
}

impl TrajectorySummary {
    /// Summarize a trajectory. Returns `None` for an empty trajectory.
    pub fn from_trajectory(trajectory: &[PhysicalState]) -> Option<Self> {
        let last = trajectory.last()?;

        let mut summary = Self {
            peak_current_min: f64::INFINITY,
            peak_current_max: f64::NEG_INFINITY,
            peak_voltage_min: f64::INFINITY,
            peak_voltage_max: f64::NEG_INFINITY,
            final_velocity: last.velocity,
            muzzle_energy: last.work,
        };

        for state in trajectory {
            summary.peak_current_min = summary.peak_current_min.min(state.current);
            summary.peak_current_max = summary.peak_current_max.max(state.current);
            summary.peak_voltage_min = summary.peak_voltage_min.min(state.voltage);
            summary.peak_voltage_max = summary.peak_voltage_max.max(state.voltage);
        }

        Some(summary)
    }
}

impl fmt::Display for TrajectorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Peak Current: {:.2}/{:.2} A",
            self.peak_current_min, self.peak_current_max
        )?;
        writeln!(
            f,
            "Peak Voltage: {:.2}/{:.2} V",
            self.peak_voltage_min, self.peak_voltage_max
        )?;
        writeln!(f, "Final Velocity: {:.2} m/s", self.final_velocity)?;
        write!(f, "Muzzle energy: {:.2} J", self.muzzle_energy)
    }
}
