// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - the carve orchestrator.
//!
//! Drives the whole narrowing loop: build the energy field and the
//! cost table once, then for each requested seam locate it, splice it
//! out of the image, splice it out of the field and the table, and
//! repair the table before the next round.  The field, the table and
//! the image stay the same shape as each other at the top of every
//! iteration.

use crate::costs::{build_cost_table, repair_cost_table};
use crate::energy::calculate_energy;
use crate::seamfinder::find_seam;
use failure::Fail;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use log::debug;

/// The two argument conditions a carve refuses up front.  Everything
/// past this check is straight-line arithmetic that cannot fail.
#[derive(Debug, Fail)]
pub enum CarveError {
    /// The input image has no columns or no rows to carve.
    #[fail(display = "the image must be at least one pixel wide and one pixel tall")]
    EmptyImage,
    /// More seams requested than the image has columns.
    #[fail(
        display = "cannot remove {} seams from an image only {} columns wide",
        seams, width
    )]
    TooManySeams { seams: u32, width: u32 },
}

// Pixel-mode seam removal: row by row, copy the pixels left of the
// seam and then the pixels right of it, each pixel moved whole.
fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        for x in 0..cut {
            imgbuf.put_pixel(x, y, image.get_pixel(x, y));
        }
        for x in cut + 1..width {
            imgbuf.put_pixel(x - 1, y, image.get_pixel(x, y));
        }
    }
    imgbuf
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I> {
    image: &'a I,
}

impl<'a, I> SeamCarver<'a, I> {
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        SeamCarver { image }
    }
}

impl<'a, I, P, S> SeamCarver<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Remove `seams` minimum-energy vertical seams, returning an
    /// image exactly that many columns narrower and the same height.
    ///
    /// Asking for zero seams returns a copy of the input unchanged.
    /// There are no partial results: on an argument error nothing is
    /// computed, and the whole loop is deterministic once it starts.
    pub fn carve(&self, seams: u32) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyImage);
        }
        if seams >= width {
            return Err(CarveError::TooManySeams { seams, width });
        }

        // Working copy of the input; replaced, never widened or
        // narrowed in place.
        let mut scratch = ImageBuffer::new(width, height);
        self.image.pixels().for_each(|p| scratch[(p.0, p.1)] = p.2);
        if seams == 0 {
            return Ok(scratch);
        }

        // The first seam comes straight off the freshly built table.
        let mut field = calculate_energy(self.image);
        let mut costs = build_cost_table(&field);
        let mut seam = find_seam(&costs);
        scratch = remove_vertical_seam(&scratch, &seam);
        debug!("seam 1 of {} removed, top column {}", seams, seam[0]);

        // Every later seam narrows the field and the table first, then
        // repairs the table's invalidated wedge instead of rebuilding.
        for n in 1..seams {
            field = field.remove_seam(&seam);
            costs = costs.remove_seam(&seam);
            repair_cost_table(&field, &mut costs, &seam);
            seam = find_seam(&costs);
            scratch = remove_vertical_seam(&scratch, &seam);
            debug!("seam {} of {} removed, top column {}", n + 1, seams, seam[0]);
        }
        Ok(scratch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, Rgb};

    const IMAGE_DATA: [u8; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

    fn test_image() -> ImageBuffer<Luma<u8>, Vec<u8>> {
        ImageBuffer::from_raw(5, 4, IMAGE_DATA.to_vec()).unwrap()
    }

    #[test]
    fn zero_seams_returns_the_input_unchanged() {
        let img = test_image();
        let carved = SeamCarver::new(&img).carve(0).unwrap();
        assert_eq!(carved.into_raw(), IMAGE_DATA.to_vec());
    }

    #[test]
    fn each_seam_narrows_by_exactly_one_column() {
        let img = test_image();
        for n in 0..5u32 {
            let carved = SeamCarver::new(&img).carve(n).unwrap();
            assert_eq!(carved.dimensions(), (5 - n, 4));
        }
    }

    #[test]
    fn carving_to_the_limit_leaves_one_column() {
        let img = test_image();
        let carved = SeamCarver::new(&img).carve(4).unwrap();
        assert_eq!(carved.dimensions(), (1, 4));
    }

    #[test]
    fn refuses_to_remove_every_column() {
        let img = test_image();
        match SeamCarver::new(&img).carve(5) {
            Err(CarveError::TooManySeams { seams: 5, width: 5 }) => (),
            other => panic!("expected TooManySeams, got {:?}", other.map(|i| i.dimensions())),
        }
    }

    #[test]
    fn refuses_a_degenerate_image() {
        let img: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::new(0, 4);
        match SeamCarver::new(&img).carve(0) {
            Err(CarveError::EmptyImage) => (),
            other => panic!("expected EmptyImage, got {:?}", other.map(|i| i.dimensions())),
        }
    }

    #[test]
    fn pixel_removal_moves_whole_pixels() {
        let mut img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(2, 2);
        img.put_pixel(0, 0, Rgb([1, 2, 3]));
        img.put_pixel(1, 0, Rgb([4, 5, 6]));
        img.put_pixel(0, 1, Rgb([7, 8, 9]));
        img.put_pixel(1, 1, Rgb([10, 11, 12]));

        let narrowed = remove_vertical_seam(&img, &[0, 1]);
        assert_eq!(narrowed.dimensions(), (1, 2));
        assert_eq!(narrowed.get_pixel(0, 0), &Rgb([4, 5, 6]));
        assert_eq!(narrowed.get_pixel(0, 1), &Rgb([7, 8, 9]));
    }
}
