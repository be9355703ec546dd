// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Locate the minimum-cost vertical seam in a cost table.
//!
//! A seam is one column index per row, adjacent rows differing by at
//! most one.  Locating is a single scan of the bottom row for the
//! cheapest end point followed by a walk back up the table, at each
//! row picking the cheapest of the up-to-three predecessor cells.
//!
//! Both the end-point scan and the backtrack resolve ties leftward:
//! strict `<` comparisons walking left to right keep the first minimum
//! seen.  The choice is arbitrary, but it is fixed, and the test suite
//! depends on it staying fixed.

use crate::cq;
use crate::gridmap::GridMap;

// Linear scan of the bottom row for the leftmost minimum.
fn find_end_point(costs: &GridMap<f32>) -> u32 {
    let bottom = costs.height() - 1;
    let mut min_col = 0;
    for x in 1..costs.width() {
        if costs[(x, bottom)] < costs[(min_col, bottom)] {
            min_col = x;
        }
    }
    min_col
}

// Given the seam's column in row `y`, pick its column in row `y - 1`:
// the cheapest of the clipped `x-1, x, x+1` candidates, left first.
fn previous_column(costs: &GridMap<f32>, x: u32, y: u32) -> u32 {
    let mw = costs.width() - 1;
    let lo = cq!(x == 0, 0, x - 1);
    let hi = cq!(x >= mw, mw, x + 1);

    let mut best = lo;
    for px in lo + 1..=hi {
        if costs[(px, y - 1)] < costs[(best, y - 1)] {
            best = px;
        }
    }
    best
}

/// Find the end-to-end minimum-cost vertical seam of a cost table.
/// The returned vector has one column per row, top to bottom, and the
/// path it traces achieves the bottom-row minimum of the table.
pub fn find_seam(costs: &GridMap<f32>) -> Vec<u32> {
    let bottom = costs.height() - 1;
    let mut seam = vec![0u32; costs.height() as usize];

    let mut col = find_end_point(costs);
    seam[bottom as usize] = col;

    for y in (1..=bottom).rev() {
        col = previous_column(costs, col, y);
        seam[(y - 1) as usize] = col;
    }
    seam
}
