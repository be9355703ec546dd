//! Content-aware image narrowing by seam carving.
//!
//! Removes N minimum-energy vertical seams from an image, one at a
//! time, so that width shrinks by N while the visually important
//! content survives.  The cost table that ranks candidate seams is
//! built once and then incrementally repaired after every removal
//! rather than rebuilt, which is where the speed comes from.
//!
//! Horizontal narrowing is a caller-side reduction: rotate the image
//! 90°, carve vertically, rotate back.  The engine only ever removes
//! vertical seams.

pub mod ternary;

pub mod gridmap;
pub use gridmap::GridMap;

pub mod energy;
pub use energy::calculate_energy;

pub mod costs;
pub use costs::{build_cost_table, repair_cost_table};

pub mod seamfinder;
pub use seamfinder::find_seam;

pub mod seamcarver;
pub use seamcarver::{CarveError, SeamCarver};
