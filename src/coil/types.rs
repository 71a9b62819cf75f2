//! Core types for coil data representation.

use serde::Deserialize;

use crate::COPPER_RESISTIVITY;

/// One row of the coil data table: a single integer distance sample.
#[derive(Debug, Clone, PartialEq)]
pub struct CoilRow {
    /// Distance of the sample from the coil center (mm).
    pub distance: f64,
    /// Coil inductance at this distance (microhenries).
    pub inductance_uh: f64,
    /// Force on the projectile (newtons), one sample per current breakpoint.
    pub forces: Vec<f64>,
}

impl CoilRow {
    /// Create a new row.
    pub fn new(distance: f64, inductance_uh: f64, forces: Vec<f64>) -> Self {
        Self {
            distance,
            inductance_uh,
            forces,
        }
    }
}

/// The coil data table: rows indexed 0..N-1 by integer distance sample,
/// contiguous with no gaps, so a distance magnitude can be bracketed by
/// `floor`/`ceil` row indices.
#[derive(Debug, Clone, PartialEq)]
pub struct CoilTable {
    pub rows: Vec<CoilRow>,
}

impl CoilTable {
    /// Create a table from its rows.
    pub fn new(rows: Vec<CoilRow>) -> Self {
        Self { rows }
    }

    /// Number of distance samples.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at the largest tabulated distance (used for saturated
    /// extrapolation beyond the table edge).
    ///
    /// # Panics
    ///
    /// Panics if the table is empty; the loader rejects empty tables.
    pub fn last_row(&self) -> &CoilRow {
        &self.rows[self.rows.len() - 1]
    }
}

/// Winding geometry and electrical data of the coil.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoilData {
    /// Measured DC resistance of the winding (ohms).
    #[serde(rename = "Resistance")]
    pub resistance: f64,
    /// Wire diameter (mm).
    #[serde(rename = "WireDiameter", default)]
    pub wire_diameter: f64,
    /// Total wire length (m).
    #[serde(rename = "WireLength", default)]
    pub wire_length: f64,
    /// Coil length (mm).
    #[serde(rename = "Length", default)]
    pub length: f64,
    /// Number of turns.
    #[serde(rename = "Turns", default)]
    pub turns: f64,
}

/// Projectile data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectileData {
    /// Projectile mass (grams).
    #[serde(rename = "Mass")]
    pub mass: f64,
    /// Projectile diameter (mm).
    #[serde(rename = "Diameter", default)]
    pub diameter: f64,
    /// Projectile length (mm).
    #[serde(rename = "Length", default)]
    pub length: f64,
}

/// Coil metadata loaded from the descriptor JSON file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoilDescriptor {
    /// Current breakpoints (amperes), strictly ascending, at which the table
    /// holds force samples.
    #[serde(rename = "Currents")]
    pub currents: Vec<f64>,
    /// Coil winding data.
    #[serde(rename = "CoilData")]
    pub coil: CoilData,
    /// Projectile data.
    #[serde(rename = "ProjectileData")]
    pub projectile: ProjectileData,
}

impl CoilDescriptor {
    /// Projectile mass converted from grams to kilograms.
    pub fn projectile_mass_kg(&self) -> f64 {
        self.projectile.mass / 1000.0
    }

    /// Estimate the winding resistance from the wire geometry.
    ///
    /// Informational only; the simulation uses the measured
    /// [`CoilData::resistance`].
    pub fn wire_resistance_estimate(&self) -> f64 {
        let radius_m = (self.coil.wire_diameter * 0.5) / 1000.0;
        COPPER_RESISTIVITY * self.coil.wire_length / (std::f64::consts::PI * radius_m * radius_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
                mass: 8.5,
                diameter: 8.0,
                length: 25.0,
            },
        }
    }

    #[test]
    fn test_mass_conversion() {
        assert_relative_eq!(descriptor().projectile_mass_kg(), 0.0085);
    }

    #[test]
    fn test_wire_resistance_estimate() {
        // rho * l / (pi * r^2) with r = 0.45mm
        let expected = 1.68e-8 * 12.0 / (std::f64::consts::PI * 0.45e-3 * 0.45e-3);
        assert_relative_eq!(descriptor().wire_resistance_estimate(), expected);
    }

    #[test]
    fn test_last_row() {
        let table = CoilTable::new(vec![
            CoilRow::new(0.0, 500.0, vec![0.0]),
            CoilRow::new(1.0, 400.0, vec![10.0]),
        ]);
        assert_relative_eq!(table.last_row().inductance_uh, 400.0);
    }
}
