//! One explicit Euler step of the coupled electromechanical system.

use crate::circuit::CircuitModel;
use crate::coil::{CoilDescriptor, CoilTable};
use crate::error::Result;
use crate::MICROHENRY;

use super::state::{PhysicalState, SimContext};

/// Advances the physical state one fixed time step at a time.
///
/// Borrows the run's immutable table, descriptor, and circuit model; all
/// mutable state flows through [`step`](Integrator::step) arguments and
/// return values.
pub struct Integrator<'a> {
    table: &'a CoilTable,
    descriptor: &'a CoilDescriptor,
    model: &'a CircuitModel,
    /// Projectile mass (kg).
    mass_kg: f64,
}

impl<'a> Integrator<'a> {
    /// Create an integrator over a run's immutable inputs.
    pub fn new(
        table: &'a CoilTable,
        descriptor: &'a CoilDescriptor,
        model: &'a CircuitModel,
        mass_kg: f64,
    ) -> Self {
        Self {
            table,
            descriptor,
            model,
            mass_kg,
        }
    }

    /// Advance `previous` by one Euler step of size `dt`.
    ///
    /// Once the coil current has gone negative (on any step after the first)
    /// the state is terminal and is returned unchanged: the useful stroke is
    /// over and reverse-current physics is not modeled.
    pub fn step(
        &self,
        step_index: usize,
        previous: PhysicalState,
        ctx: SimContext,
        dt: f64,
    ) -> Result<(PhysicalState, SimContext)> {
        if previous.current < 0.0 && step_index != 0 {
            return Ok((previous, ctx));
        }

        let row = self
            .table
            .lookup(self.descriptor, previous.current, previous.distance);
        let inductance = row.inductance_uh * MICROHENRY;
        let force = row.force;

        let derivs = self
            .model
            .derivatives(previous.voltage, previous.current, inductance, &ctx)?;

        let ctx = SimContext {
            neg_di_dt: derivs.di_dt < 0.0,
        };

        let current = previous.current + dt * derivs.di_dt;
        let voltage = previous.voltage + dt * derivs.dv_dt;

        let acceleration = force / self.mass_kg;
        let velocity = previous.velocity + acceleration * dt;

        // Displacement along the bore during this step (mm).
        let displacement = velocity * dt * 1000.0;

        let work = previous.work + (displacement / 1000.0) * force;
        let distance = previous.distance - displacement;

        Ok((
            PhysicalState {
                current,
                voltage,
                velocity,
                distance,
                work,
            },
            ctx,
        ))
    }
}
