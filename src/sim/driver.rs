//! Simulation driver: owns the run configuration and produces trajectories.

use crate::circuit::{CircuitModel, CircuitParams};
use crate::coil::{validate_descriptor, CoilDescriptor, CoilTable};
use crate::error::{CoilgunError, Result};

use super::integrator::Integrator;
use super::state::{PhysicalState, SimContext};

/// Immutable inputs of one simulation run.
///
/// Constructed once per run; every validation a run can fail on happens here,
/// before any stepping starts.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub table: CoilTable,
    pub descriptor: CoilDescriptor,
    pub params: CircuitParams,
}

impl SimulationConfig {
    /// Build and validate a run configuration.
    ///
    /// Fails on: an unimplemented switching method, non-positive capacitance,
    /// negative ESR, non-positive projectile mass, an empty data table, or
    /// breakpoints that are not strictly ascending.
    pub fn new(
        table: CoilTable,
        descriptor: CoilDescriptor,
        params: CircuitParams,
    ) -> Result<Self> {
        params.validate()?;
        validate_descriptor(&descriptor)?;

        if table.is_empty() {
            return Err(CoilgunError::invalid_parameter(
                "table",
                "coil data table has no rows",
            ));
        }

        if !(descriptor.projectile_mass_kg() > 0.0) {
            return Err(CoilgunError::invalid_parameter(
                "projectile mass",
                format!("must be positive, got {} g", descriptor.projectile.mass),
            ));
        }

        Ok(Self {
            table,
            descriptor,
            params,
        })
    }
}

/// The simulation driver.
///
/// Holds a validated [`SimulationConfig`] and the circuit model derived from
/// it; [`simulate`](Simulation::simulate) may be called any number of times
/// (different initial conditions, same coil and circuit) and is deterministic.
pub struct Simulation {
    config: SimulationConfig,
    model: CircuitModel,
}

impl Simulation {
    /// Create a driver from a validated configuration.
    pub fn new(config: SimulationConfig) -> Self {
        let model = CircuitModel::new(config.params.clone(), config.descriptor.coil.resistance);
        Self { config, model }
    }

    /// The run configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the full time grid: `steps` trajectory rows with row 0 equal to
    /// `initial`, each subsequent row one Euler step of `step_time` seconds
    /// after the previous.
    ///
    /// `step_time` must match the spacing of the caller's time grid; that
    /// consistency is the caller's contract and is not checked here.
    pub fn simulate(
        &self,
        initial: PhysicalState,
        steps: usize,
        step_time: f64,
    ) -> Result<Vec<PhysicalState>> {
        let mut trajectory = Vec::with_capacity(steps);
        if steps == 0 {
            return Ok(trajectory);
        }

        trajectory.push(initial);

        let integrator = Integrator::new(
            &self.config.table,
            &self.config.descriptor,
            &self.model,
            self.config.descriptor.projectile_mass_kg(),
        );

        let mut ctx = SimContext::default();
        for i in 1..steps {
            let (state, next_ctx) = integrator.step(i, trajectory[i - 1], ctx, step_time)?;
            trajectory.push(state);
            ctx = next_ctx;
        }

        Ok(trajectory)
    }
}

/// Build a uniformly spaced time axis `[0, sim_time)` with `step_time`
/// spacing.
pub fn time_axis(sim_time: f64, step_time: f64) -> Vec<f64> {
    let steps = (sim_time / step_time).ceil() as usize;
    (0..steps).map(|i| i as f64 * step_time).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::SwitchingMethod;
    use crate::coil::{CoilData, CoilRow, ProjectileData};
    use approx::assert_relative_eq;

    fn descriptor() -> CoilDescriptor {
        CoilDescriptor {
            currents: vec![5.0, 10.0],
            coil: CoilData {
                resistance: 0.5,
                wire_diameter: 0.9,
                wire_length: 12.0,
                length: 20.0,
                turns: 170.0,
            },
            projectile: ProjectileData {
                mass: 10.0,
                diameter: 8.0,
                length: 25.0,
            },
        }
    }

    fn table() -> CoilTable {
        CoilTable::new(vec![
            CoilRow::new(0.0, 500.0, vec![10.0, 30.0]),
            CoilRow::new(1.0, 450.0, vec![15.0, 35.0]),
            CoilRow::new(2.0, 400.0, vec![20.0, 40.0]),
        ])
    }

    fn params(method: SwitchingMethod) -> CircuitParams {
        CircuitParams {
            capacitance: 680e-6,
            esr: 0.34,
            fdiode_voltage: 0.7,
            fdiode_resistance: 4.7,
            diode_enabled: true,
            method,
        }
    }

    #[test]
    fn test_trajectory_shape() {
        let config =
            SimulationConfig::new(table(), descriptor(), params(SwitchingMethod::Scr)).unwrap();
        let sim = Simulation::new(config);

        let initial = PhysicalState::new(0.0, 440.0, 0.0, 2.0, 0.0);
        let trajectory = sim.simulate(initial, 100, 1e-6).unwrap();

        assert_eq!(trajectory.len(), 100);
        assert_eq!(trajectory[0], initial);

        // The capacitor discharges into the coil: current rises from zero and
        // voltage drops.
        assert!(trajectory[99].current > 0.0);
        assert!(trajectory[99].voltage < 440.0);
    }

    #[test]
    fn test_determinism() {
        let config =
            SimulationConfig::new(table(), descriptor(), params(SwitchingMethod::Scr)).unwrap();
        let sim = Simulation::new(config);

        let initial = PhysicalState::new(0.0, 440.0, 0.0, 2.0, 0.0);
        let a = sim.simulate(initial, 500, 1e-6).unwrap();
        let b = sim.simulate(initial, 500, 1e-6).unwrap();

        // Bit-identical, not merely close.
        assert_eq!(a, b);
    }

    #[test]
    fn test_freeze_invariant() {
        let config =
            SimulationConfig::new(table(), descriptor(), params(SwitchingMethod::Scr)).unwrap();
        let sim = Simulation::new(config);

        // Seed with a negative current: the freeze rule holds every
        // subsequent row at the initial state.
        let initial = PhysicalState::new(-0.5, 100.0, 3.0, 1.0, 0.5);
        let trajectory = sim.simulate(initial, 50, 1e-6).unwrap();

        for state in &trajectory {
            assert_eq!(*state, initial);
        }
    }

    #[test]
    fn test_legacy_method_diverges_from_scr() {
        let initial = PhysicalState::new(0.0, 440.0, 0.0, 2.0, 0.0);

        let scr = Simulation::new(
            SimulationConfig::new(table(), descriptor(), params(SwitchingMethod::Scr)).unwrap(),
        );
        let legacy = Simulation::new(
            SimulationConfig::new(table(), descriptor(), params(SwitchingMethod::LegacyResistor))
                .unwrap(),
        );

        // Long enough for the current to peak and dI/dt to go negative, which
        // is where the two diode policies part ways.
        let a = scr.simulate(initial, 5000, 1e-6).unwrap();
        let b = legacy.simulate(initial, 5000, 1e-6).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_unimplemented_method_fails_before_stepping() {
        let err = SimulationConfig::new(table(), descriptor(), params(SwitchingMethod::Fet))
            .unwrap_err();
        assert!(matches!(err, CoilgunError::UnimplementedMethod { .. }));
    }

    #[test]
    fn test_zero_mass_rejected() {
        let mut desc = descriptor();
        desc.projectile.mass = 0.0;
        let err = SimulationConfig::new(table(), desc, params(SwitchingMethod::Scr)).unwrap_err();
        assert!(matches!(err, CoilgunError::InvalidParameter { .. }));
    }

    #[test]
    fn test_time_axis() {
        let time = time_axis(5e-3, 1e-6);
        assert_eq!(time.len(), 5000);
        assert_relative_eq!(time[0], 0.0);
        assert_relative_eq!(time[1], 1e-6);
        assert_relative_eq!(time[4999], 4.999e-3);
    }
}
