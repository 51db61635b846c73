//! Text formatting for the bridge-radius readout.
//!
//! The data layer always keeps the full visible set; only the on-screen
//! listing is capped.

use crate::visibility::ExportRow;

/// Lines shown before the listing collapses into a "more" line.
pub const MAX_LISTED_ROWS: usize = 10;

/// `n=3, seed=7, val=34 → R=1.57e-10 m`
pub fn format_row(row: &ExportRow) -> String {
    format!(
        "n={}, seed={}, val={} \u{2192} R={:.2e} m",
        row.layer, row.seed, row.value, row.bridge_radius_m
    )
}

/// Up to `max` formatted rows, plus a trailing count of the rest.
pub fn bridge_lines(rows: &[ExportRow], max: usize) -> Vec<String> {
    let mut lines: Vec<String> = rows.iter().take(max).map(format_row).collect();
    if rows.len() > max {
        lines.push(format!("... and {} more nodes", rows.len() - max));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<ExportRow> {
        (0..n)
            .map(|i| ExportRow {
                layer: i,
                seed: 1,
                value: 1,
                bridge_radius_m: 6.533132698371994e-11,
            })
            .collect()
    }

    #[test]
    fn row_text() {
        let r = ExportRow {
            layer: 0,
            seed: 1,
            value: 1,
            bridge_radius_m: 6.533132698371994e-11,
        };
        assert_eq!(format_row(&r), "n=0, seed=1, val=1 \u{2192} R=6.53e-11 m");
    }

    #[test]
    fn short_listing_is_complete() {
        assert_eq!(bridge_lines(&rows(3), MAX_LISTED_ROWS).len(), 3);
        assert!(bridge_lines(&[], MAX_LISTED_ROWS).is_empty());
    }

    #[test]
    fn long_listing_is_capped() {
        let lines = bridge_lines(&rows(25), MAX_LISTED_ROWS);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[10], "... and 15 more nodes");
    }
}
