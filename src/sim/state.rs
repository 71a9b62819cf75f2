//! The simulated physical state and the step-to-step context.

/// The full physical state at one instant, in fixed field order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhysicalState {
    /// Coil current (A).
    pub current: f64,
    /// Capacitor voltage (V).
    pub voltage: f64,
    /// Projectile velocity (m/s).
    pub velocity: f64,
    /// Projectile distance from the coil center (mm, signed; positive means
    /// the projectile is ahead of the coil).
    pub distance: f64,
    /// Cumulative work done on the projectile (J).
    pub work: f64,
}

impl PhysicalState {
    /// Create a state from its five fields, in order.
    pub fn new(current: f64, voltage: f64, velocity: f64, distance: f64, work: f64) -> Self {
        Self {
            current,
            voltage,
            velocity,
            distance,
            work,
        }
    }
}

/// Context threaded from one integration step to the next.
///
/// The legacy resistor diode model conducts when the *previous* step's dI/dt
/// was negative; that sign is the only cross-step coupling outside the state
/// vector itself, and it is carried here explicitly rather than in any shared
/// mutable place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimContext {
    /// Whether the previous step's dI/dt was negative.
    pub neg_di_dt: bool,
}
