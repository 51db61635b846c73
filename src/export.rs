//! CSV export of the visible set.
//!
//! Format:
//! - Header: `Layer,Seed,Value,Bridge_Radius_m`
//! - One row per visible node, in node order
//! - Bridge radius in full-precision scientific notation
//!
//! The target file is overwritten.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{OctaveError, Result};
use crate::visibility::{ExportRow, VisibleSet};

pub const CSV_HEADER: &str = "Layer,Seed,Value,Bridge_Radius_m";

/// Write rows as CSV to any writer.
pub fn write_rows<W: Write>(out: &mut W, rows: &[ExportRow]) -> std::io::Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;
    for row in rows {
        writeln!(
            out,
            "{},{},{},{:e}",
            row.layer, row.seed, row.value, row.bridge_radius_m
        )?;
    }
    Ok(())
}

/// Write rows to `path`. Errors are bubbled up from the filesystem.
pub fn write_csv(path: &Path, rows: &[ExportRow]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| OctaveError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_rows(&mut out, rows)
        .and_then(|_| out.flush())
        .map_err(|e| OctaveError::io(path, e))
}

/// What happened when an export was requested.
#[derive(Debug)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    Failed { path: PathBuf, error: OctaveError },
}

impl ExportOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, ExportOutcome::Written { .. })
    }
}

/// Export trigger: writes the set and logs the result. Never fails.
pub fn export_visible(path: &Path, set: &VisibleSet) -> ExportOutcome {
    match write_csv(path, &set.rows) {
        Ok(()) => {
            log::info!(
                "Visible nodes saved to '{}' ({} nodes)",
                path.display(),
                set.rows.len()
            );
            ExportOutcome::Written {
                path: path.to_path_buf(),
                rows: set.rows.len(),
            }
        }
        Err(error) => {
            log::error!("Error saving file: {}", error);
            ExportOutcome::Failed {
                path: path.to_path_buf(),
                error,
            }
        }
    }
}
