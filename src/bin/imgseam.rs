use clap::{App, Arg};
use failure::Error;
use image::DynamicImage;
use imgseam::cq;
use imgseam::SeamCarver;
use std::path::Path;
use std::time::Instant;

fn main() -> Result<(), Error> {
    env_logger::init();

    let matches = App::new("imgseam")
        .version("0.1.0")
        .about("Content-aware image narrowing by seam carving")
        .arg(
            Arg::with_name("image")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("seams")
                .help("How many seams to remove")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("horizontal")
                .long("horizontal")
                .help("Remove horizontal seams (shrink height) instead of vertical ones"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("Where to write the carved image (default: out_<IMAGE>)"),
        )
        .get_matches();

    let path = matches.value_of("image").unwrap();
    let seams: u32 = matches.value_of("seams").unwrap().parse()?;
    let horizontal = matches.is_present("horizontal");

    let input = image::open(path)?;

    // A horizontal seam is a vertical seam of the rotated image; the
    // engine only ever carves vertically.
    let start = Instant::now();
    let working = cq!(horizontal, input.rotate270(), input);
    let carved = DynamicImage::ImageRgba8(SeamCarver::new(&working).carve(seams)?);
    let carved = cq!(horizontal, carved.rotate90(), carved);
    println!("Calculated in {}ms", start.elapsed().as_millis());

    let outpath = match matches.value_of("output") {
        Some(output) => output.to_string(),
        None => {
            let name = Path::new(path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string());
            format!("out_{}", name)
        }
    };
    carved.save(&outpath)?;
    Ok(())
}
