//! Coil file loading.
//!
//! A coil is stored as a pair of files sharing a base path:
//! - `<base>.json` - descriptor (current breakpoints, winding data, projectile)
//! - `<base>.csv`  - data table, one header line followed by one row per
//!   integer distance sample: `distance, inductance_uH, force_0, ..., force_K-1`

use std::fs;
use std::path::Path;

use crate::error::{CoilgunError, Result};

use super::types::{CoilDescriptor, CoilRow, CoilTable};

/// Load a coil table and descriptor from `<base>.json` + `<base>.csv`.
pub fn load_coil(base_path: impl AsRef<Path>) -> Result<(CoilTable, CoilDescriptor)> {
    let base = base_path.as_ref();

    let desc_path = base.with_extension("json");
    let data_path = base.with_extension("csv");

    let desc_text = fs::read_to_string(&desc_path)
        .map_err(|e| CoilgunError::file_read(desc_path.display().to_string(), e))?;
    let descriptor: CoilDescriptor =
        serde_json::from_str(&desc_text).map_err(|source| CoilgunError::DescriptorParse {
            path: desc_path.display().to_string(),
            source,
        })?;

    validate_descriptor(&descriptor)?;

    let data_text = fs::read_to_string(&data_path)
        .map_err(|e| CoilgunError::file_read(data_path.display().to_string(), e))?;
    let table = parse_coil_data(
        &data_text,
        descriptor.currents.len(),
        &data_path.display().to_string(),
    )?;

    Ok((table, descriptor))
}

/// Parse the CSV data table text.
///
/// The first line is a header and is skipped. Each remaining non-empty line
/// must hold `2 + breakpoints` comma-separated numbers.
pub fn parse_coil_data(text: &str, breakpoints: usize, path: &str) -> Result<CoilTable> {
    let mut rows = Vec::new();

    for (line_no, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        let expected = 2 + breakpoints;
        if fields.len() != expected {
            return Err(CoilgunError::ColumnCount {
                line: line_no + 1,
                expected,
                found: fields.len(),
            });
        }

        let mut values = Vec::with_capacity(expected);
        for field in &fields {
            let value: f64 = field.parse().map_err(|_| {
                CoilgunError::data_parse(path, line_no + 1, format!("not a number: '{field}'"))
            })?;
            values.push(value);
        }

        rows.push(CoilRow::new(
            values[0],
            values[1],
            values[2..].to_vec(),
        ));
    }

    if rows.is_empty() {
        return Err(CoilgunError::EmptyTable {
            path: path.to_string(),
        });
    }

    Ok(CoilTable::new(rows))
}

/// Validate descriptor invariants the interpolator relies on.
pub(crate) fn validate_descriptor(descriptor: &CoilDescriptor) -> Result<()> {
    if descriptor.currents.is_empty() {
        return Err(CoilgunError::NoBreakpoints);
    }

    for (i, window) in descriptor.currents.windows(2).enumerate() {
        if window[1] <= window[0] {
            return Err(CoilgunError::NonAscendingBreakpoints {
                index: i + 1,
                value: window[1],
            });
        }
    }

    Ok(())
}
