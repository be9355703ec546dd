// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Build and repair the seam cost table.
//!
//! The cost table is the dynamic-programming core of the carver: cell
//! `(x, y)` holds the minimum total energy of any connected
//! top-to-bottom path ending at that pixel, where a path may move at
//! most one column sideways per row.  The table is built in full
//! exactly once per carve; after each seam removal only the wedge of
//! cells whose optimum could have changed is recomputed, which is what
//! makes removing many seams cheap.

use crate::cq;
use crate::gridmap::GridMap;
use itertools::iproduct;

// The recurrence for a single cell, read against the row above.  The
// first row carries the raw field energy; edge columns drop the
// out-of-range neighbor, and a single-column field degenerates to the
// cell directly above.
fn cost_cell(field: &GridMap<f32>, costs: &GridMap<f32>, x: u32, y: u32) -> f32 {
    if y == 0 {
        return field[(x, y)];
    }

    let mw = field.width() - 1;
    let lo = cq!(x == 0, 0, x - 1);
    let hi = cq!(x >= mw, mw, x + 1);

    let mut best = costs[(lo, y - 1)];
    for px in lo + 1..=hi {
        let c = costs[(px, y - 1)];
        if c < best {
            best = c;
        }
    }
    field[(x, y)] + best
}

/// Compute the full cost table for a scalar field.  O(height × width),
/// at most three neighbor reads per cell.
pub fn build_cost_table(field: &GridMap<f32>) -> GridMap<f32> {
    let mut costs = GridMap::new(field.width(), field.height());
    for (y, x) in iproduct!(0..field.height(), 0..field.width()) {
        let cell = cost_cell(field, &costs, x, y);
        costs[(x, y)] = cell;
    }
    costs
}

/// Repair a cost table in place after a seam removal.
///
/// `field` and `costs` have both already had the seam spliced out;
/// `seam` still carries the removed columns in their pre-removal
/// numbering.  Removing one column can only perturb optima inside a
/// wedge that starts at the seam's row-0 exit and widens by one column
/// per side per row, so only that window is recomputed.  The repaired
/// table is bit-for-bit the table a full rebuild would produce.
pub fn repair_cost_table(field: &GridMap<f32>, costs: &mut GridMap<f32>, seam: &[u32]) {
    let width = field.width();
    let mut begin;
    let mut end;

    // Seed the window from the seam's exit column in row 0.  A seam
    // leaving through a border column invalidates only the single
    // surviving column next to it; an interior exit invalidates the
    // two columns that were adjacent to the removed one.  (`seam[0]`
    // equal to the new width means the old last column was removed.)
    if seam[0] == 0 {
        begin = 0;
        end = 0;
    } else if seam[0] == width {
        begin = width - 1;
        end = width - 1;
    } else {
        begin = seam[0] - 1;
        end = seam[0];
    }

    for y in 1..field.height() {
        for x in begin..=end {
            let cell = cost_cell(field, costs, x, y);
            costs[(x, y)] = cell;
        }

        if begin > 0 {
            begin -= 1;
        }
        if end < width - 1 {
            end += 1;
        }
    }
}
