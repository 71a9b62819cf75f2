//! Coil data table, descriptor, loading, and interpolation.
//!
//! A coil is described by two files sharing a base path:
//! - `<base>.json` - the [`CoilDescriptor`]: current breakpoints, coil winding
//!   geometry and resistance, projectile mass
//! - `<base>.csv` - the [`CoilTable`]: one row per integer millimeter of
//!   projectile distance, holding inductance and one force sample per current
//!   breakpoint
//!
//! [`CoilTable::lookup`] turns the sparse table into continuous inductance and
//! force estimates at an arbitrary (current, distance) pair.

mod interp;
mod loader;
mod types;

pub use interp::Interpolated;
pub use loader::{load_coil, parse_coil_data};
pub(crate) use loader::validate_descriptor;
pub use types::{CoilData, CoilDescriptor, CoilRow, CoilTable, ProjectileData};
