// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the gradient-magnitude energy of an image.
//!
//! The carving engine itself never looks at pixels; it consumes a
//! scalar field of non-negative energies, one per pixel.  This module
//! is the gradient step that produces that field: the squared luma
//! difference across the horizontal neighbor pair plus the squared
//! luma difference across the vertical pair.  Any other deterministic
//! non-negative convention would do just as well.

use crate::cq;
use crate::gridmap::GridMap;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;
use num_traits::NumCast;

// (Pixel, Pixel) -> Energy
fn energy_of_pair<P, S>(p1: &P, p2: &P) -> f32
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    #[inline]
    fn lumachannel<S, P>(p: &P) -> i32
    where
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let c = p.to_luma().channels().to_owned();
        NumCast::from(c[0]).unwrap()
    }

    let css = lumachannel(p1) - lumachannel(p2);
    (css * css) as f32
}

/// Compute the energy of every pixel in an image.  Pixels on a border
/// reuse the center pixel in place of the missing neighbor, which
/// keeps border energies low rather than inventing a hard edge there.
pub fn calculate_energy<I, P, S>(image: &I) -> GridMap<f32>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let (mw, mh) = (width - 1, height - 1);

    let mut field = GridMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let center = image.get_pixel(x, y);
        let (left, right, up, down) = (
            cq!(x == 0, center, image.get_pixel(x - 1, y)),
            cq!(x >= mw, center, image.get_pixel(x + 1, y)),
            cq!(y == 0, center, image.get_pixel(x, y - 1)),
            cq!(y >= mh, center, image.get_pixel(x, y + 1)),
        );
        field[(x, y)] = energy_of_pair(&left, &right) + energy_of_pair(&up, &down);
    }
    field
}
