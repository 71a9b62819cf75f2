//! Coil table interpolation.
//!
//! Turns the sparse (distance, current) force/inductance table into continuous
//! estimates. Distance is bracketed by the floor/ceil row indices of its
//! magnitude; current is bracketed by a pair of breakpoint scans. Beyond the
//! last tabulated distance the lookup saturates: the last row's inductance is
//! returned and force is held at zero rather than extrapolated.
//!
//! The breakpoint scans are kept exactly as the reference data tools compute
//! them, including their behavior when the current lands exactly on a
//! breakpoint (see [`CoilTable::lookup`]).

use super::types::{CoilDescriptor, CoilTable};

/// Result of a table lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolated {
    /// Signed distance (mm); carries the sign of the query.
    pub distance: f64,
    /// Interpolated inductance (microhenries); never signed.
    pub inductance_uh: f64,
    /// Interpolated force (newtons); signed.
    pub force: f64,
}

/// Linear interpolation between `a` and `b` with fraction `f`.
fn lerp(a: f64, b: f64, f: f64) -> f64 {
    a + f * (b - a)
}

impl CoilTable {
    /// Estimate inductance and force at an arbitrary (current, distance) pair.
    ///
    /// A negative distance or current flips the force sign (the projectile is
    /// decelerated past the coil center); magnitudes are used for all table
    /// indexing. Out-of-range distances saturate to the last row's inductance
    /// with zero force.
    ///
    /// Below the first current breakpoint, force ramps linearly from zero at
    /// zero current up to the first breakpoint's tabulated value. Between
    /// breakpoints, the lower bracket is the *last* breakpoint below the
    /// current and the upper bracket is the *first* breakpoint above it; the
    /// resulting current fraction also drives the inductance interpolation
    /// between the two distance rows.
    ///
    /// Known quirk, kept deliberately: a current exactly equal to a breakpoint
    /// satisfies neither strict scan, so the corresponding bracket stays at
    /// index 0. With a single breakpoint this makes the current fraction 0/0
    /// (NaN); with several it yields an asymmetric bracket pair. Callers that
    /// care should keep queries strictly between breakpoints.
    pub fn lookup(&self, descriptor: &CoilDescriptor, current: f64, distance: f64) -> Interpolated {
        // Sign selects acceleration vs. deceleration of the projectile.
        let sign = if distance < 0.0 || current < 0.0 {
            -1.0
        } else {
            1.0
        };

        let distance = distance.abs();
        let current = current.abs();

        let lower_index = distance.floor() as usize;
        let upper_index = distance.ceil() as usize;

        if lower_index >= self.rows.len() || upper_index >= self.rows.len() {
            return Interpolated {
                distance: distance * sign,
                inductance_uh: self.last_row().inductance_uh,
                // Force is not extrapolated beyond the table edge.
                force: 0.0,
            };
        }

        // Ceil-anchored fraction in [-1, 0]; zero exactly on a row.
        let distance_weight = distance - distance.ceil();

        let currents = &descriptor.currents;
        let row_a = &self.rows[lower_index];
        let row_b = &self.rows[upper_index];

        if current < currents[0] {
            // Below the first breakpoint the force ramps from zero and the
            // inductance is current-independent.
            let t = (current / currents[0]).max(0.0);

            let inductance = lerp(row_a.inductance_uh, row_b.inductance_uh, distance_weight);
            let force = lerp(0.0, row_b.forces[0], t) * sign;

            return Interpolated {
                distance: distance * sign,
                inductance_uh: inductance,
                force,
            };
        }

        // Last breakpoint strictly below the current.
        let mut lower_id = 0;
        for (i, &breakpoint) in currents.iter().enumerate() {
            if breakpoint < current {
                lower_id = i;
            }
        }

        // First breakpoint strictly above the current.
        let mut upper_id = 0;
        for (i, &breakpoint) in currents.iter().enumerate() {
            if breakpoint > current {
                upper_id = i;
                break;
            }
        }

        let current_weight =
            (current - currents[lower_id]) / (currents[upper_id] - currents[lower_id]);

        let a = row_a.forces[lower_id];
        let b = row_b.forces[upper_id];

        Interpolated {
            distance: distance * sign,
            // Inductance is not signed; the current fraction drives the
            // distance-row interpolation here.
            inductance_uh: lerp(row_a.inductance_uh, row_b.inductance_uh, current_weight),
            force: lerp(a * sign, b * sign, current_weight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coil::types::{CoilData, CoilRow, ProjectileData};
    use approx::assert_relative_eq;

    fn descriptor(currents: Vec<f64>) -> CoilDescriptor {
        CoilDescriptor {
            currents,
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
            CoilRow::new(0.0, 500.0, vec![4.0, 10.0, 30.0]),
            CoilRow::new(1.0, 400.0, vec![6.0, 20.0, 40.0]),
            CoilRow::new(2.0, 300.0, vec![8.0, 25.0, 45.0]),
        ])
    }

    #[test]
    fn test_exact_node_returns_stored_values() {
        let desc = descriptor(vec![5.0, 10.0, 20.0]);
        let t = table();

        // On row 1 with a current strictly between breakpoints 0 and 1:
        // the bracket is (0, 1), fraction (7.5-5)/(10-5) = 0.5, and both rows
        // collapse to row 1.
        let r = t.lookup(&desc, 7.5, 1.0);
        assert_relative_eq!(r.distance, 1.0);
        assert_relative_eq!(r.inductance_uh, 400.0);
        assert_relative_eq!(r.force, lerp(6.0, 20.0, 0.5));

        // Exactly on the first breakpoint at an exact row: the fraction is 0,
        // so the stored breakpoint-0 force comes back unchanged.
        let r = t.lookup(&desc, 5.0, 1.0);
        assert_relative_eq!(r.inductance_uh, 400.0);
        assert_relative_eq!(r.force, 6.0);
    }

    #[test]
    fn test_sign_symmetry() {
        let desc = descriptor(vec![5.0, 10.0, 20.0]);
        let t = table();

        let pos = t.lookup(&desc, 7.0, 1.5);
        let neg = t.lookup(&desc, -7.0, -1.5);

        assert_relative_eq!(neg.distance, -pos.distance);
        assert_relative_eq!(neg.inductance_uh, pos.inductance_uh);
        assert_relative_eq!(neg.force, -pos.force);

        // Either negative input alone flips the sign.
        let neg_d = t.lookup(&desc, 7.0, -1.5);
        assert_relative_eq!(neg_d.force, -pos.force);
    }

    #[test]
    fn test_saturation_beyond_table_edge() {
        let desc = descriptor(vec![5.0, 10.0, 20.0]);
        let t = table();

        let r = t.lookup(&desc, 7.0, 6.25);
        assert_relative_eq!(r.distance, 6.25);
        assert_relative_eq!(r.inductance_uh, 300.0);
        assert_relative_eq!(r.force, 0.0);

        // The ceil index can run off the end even when the floor is in range.
        let r = t.lookup(&desc, 7.0, 2.5);
        assert_relative_eq!(r.inductance_uh, 300.0);
        assert_relative_eq!(r.force, 0.0);
    }

    #[test]
    fn test_force_ramp_below_first_breakpoint() {
        let desc = descriptor(vec![5.0, 10.0, 20.0]);
        let t = table();

        // At half the first breakpoint on an exact row, force is half the
        // breakpoint-0 sample of that row.
        let r = t.lookup(&desc, 2.5, 1.0);
        assert_relative_eq!(r.force, 3.0);
        assert_relative_eq!(r.inductance_uh, 400.0);

        let r = t.lookup(&desc, 0.0, 1.0);
        assert_relative_eq!(r.force, 0.0);
    }

    #[test]
    fn test_fractional_distance_uses_ceil_anchored_weight() {
        let desc = descriptor(vec![5.0, 10.0, 20.0]);
        let t = table();

        // distance 0.5 gives weight 0.5 - 1.0 = -0.5 against rows 0 and 1.
        let r = t.lookup(&desc, 2.5, 0.5);
        assert_relative_eq!(r.inductance_uh, lerp(500.0, 400.0, -0.5));
        assert_relative_eq!(r.inductance_uh, 550.0);
    }

    #[test]
    fn test_breakpoint_equality_uses_default_scan_indices() {
        // A current exactly on a middle breakpoint satisfies neither strict
        // scan at that index: the bracket becomes (0, 2) instead of an exact
        // hit. Pinned so the behavior cannot drift silently.
        let desc = descriptor(vec![5.0, 10.0, 20.0]);
        let t = table();

        let r = t.lookup(&desc, 10.0, 1.0);
        let weight = (10.0 - 5.0) / (20.0 - 5.0);
        assert_relative_eq!(r.force, lerp(6.0, 40.0, weight));
        assert_relative_eq!(r.inductance_uh, 400.0);
    }

    #[test]
    fn test_current_above_last_breakpoint_wraps_to_first() {
        // Above every breakpoint the upper scan never fires and keeps index 0,
        // producing a negative fraction denominator. Pinned, not guarded.
        let desc = descriptor(vec![5.0, 10.0, 20.0]);
        let t = table();

        let r = t.lookup(&desc, 25.0, 1.0);
        let weight = (25.0 - 20.0) / (5.0 - 20.0);
        assert_relative_eq!(r.force, lerp(40.0, 6.0, weight));
        assert_relative_eq!(r.inductance_uh, 400.0);
    }

    #[test]
    fn test_single_breakpoint_equality_is_nan() {
        let desc = descriptor(vec![5.0]);
        let t = CoilTable::new(vec![
            CoilRow::new(0.0, 500.0, vec![10.0]),
            CoilRow::new(1.0, 400.0, vec![20.0]),
        ]);

        let r = t.lookup(&desc, 5.0, 1.0);
        assert!(r.force.is_nan());
        assert!(r.inductance_uh.is_nan());
    }
}
