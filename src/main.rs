//! Coilgun - capacitor-driven coilgun simulator
//!
//! Simulates the discharge of a capacitor bank through a drive coil and
//! reports peak current/voltage, final projectile velocity, and muzzle
//! energy.
//!
//! # Usage
//!
//! ```bash
//! coilgun Data/0.9_C20x170T-P8.0x25 --voltage 440 --distance 20
//! ```
//!
//! Passing several coil base paths sweeps them with identical circuit
//! parameters and reports the best final velocity.

use std::path::{Path, PathBuf};

use clap::Parser;
use coilgun_core::{
    circuit::{CircuitParams, SwitchingMethod},
    coil::load_coil,
    error::{CoilgunError, Result},
    report::TrajectorySummary,
    sim::{time_axis, PhysicalState, Simulation, SimulationConfig},
    DEFAULT_SIM_TIME, DEFAULT_STEP_TIME,
};

/// Capacitor-driven coilgun simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Coil base path(s); `<base>.json` and `<base>.csv` must exist.
    /// More than one path runs a sweep.
    #[arg(value_name = "COIL", required = true)]
    coils: Vec<PathBuf>,

    /// Capacitor bank capacitance in farads
    #[arg(short = 'c', long, default_value_t = 680e-6)]
    capacitance: f64,

    /// Capacitor bank ESR in ohms
    #[arg(long, default_value_t = 0.34)]
    esr: f64,

    /// Initial capacitor voltage in volts
    #[arg(short = 'v', long, default_value_t = 440.0)]
    voltage: f64,

    /// Initial projectile distance from the coil center in millimeters
    #[arg(short = 'd', long, default_value_t = 20.0)]
    distance: f64,

    /// Initial projectile velocity in m/s
    #[arg(long, default_value_t = 0.0)]
    velocity: f64,

    /// Flyback diode forward voltage in volts
    #[arg(long, default_value_t = 0.7)]
    fdiode_voltage: f64,

    /// Flyback diode series resistance in ohms (legacy model)
    #[arg(long, default_value_t = 4.7)]
    fdiode_resistance: f64,

    /// Simulate without a flyback diode
    #[arg(long)]
    no_diode: bool,

    /// Switching topology
    #[arg(short = 'm', long, value_enum, default_value_t = SwitchingMethod::Scr)]
    method: SwitchingMethod,

    /// Euler step size in seconds
    #[arg(long, default_value_t = DEFAULT_STEP_TIME)]
    step_time: f64,

    /// Total simulated time in seconds
    #[arg(long, default_value_t = DEFAULT_SIM_TIME)]
    sim_time: f64,
}

impl Args {
    fn circuit_params(&self) -> CircuitParams {
        CircuitParams {
            capacitance: self.capacitance,
            esr: self.esr,
            fdiode_voltage: self.fdiode_voltage,
            fdiode_resistance: self.fdiode_resistance,
            diode_enabled: !self.no_diode,
            method: self.method,
        }
    }
}

/// Run one coil and return its summary.
fn run_coil(coil: &Path, args: &Args) -> Result<TrajectorySummary> {
    let (table, descriptor) = load_coil(coil)?;

    let config = SimulationConfig::new(table, descriptor, args.circuit_params())?;
    let sim = Simulation::new(config);

    let time = time_axis(args.sim_time, args.step_time);
    let initial = PhysicalState::new(0.0, args.voltage, args.velocity, args.distance, 0.0);
    let trajectory = sim.simulate(initial, time.len(), args.step_time)?;

    TrajectorySummary::from_trajectory(&trajectory).ok_or_else(|| {
        CoilgunError::invalid_parameter("sim-time", "produces an empty time grid")
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.coils.len() == 1 {
        let summary = run_coil(&args.coils[0], &args)?;
        println!("{summary}");
        return Ok(());
    }

    // Sweep: identical circuit parameters across every coil, best final
    // velocity wins.
    let mut best: Option<(&PathBuf, TrajectorySummary)> = None;

    for coil in &args.coils {
        let summary = run_coil(coil, &args)?;
        println!("{}:", coil.display());
        println!("{summary}");
        println!();

        let better = match &best {
            Some((_, current_best)) => summary.final_velocity > current_best.final_velocity,
            None => true,
        };
        if better {
            best = Some((coil, summary));
        }
    }

    if let Some((coil, summary)) = best {
        println!(
            "Best coil: {} ({:.2} m/s, {:.2} J)",
            coil.display(),
            summary.final_velocity,
            summary.muzzle_energy
        );
    }

    Ok(())
}
