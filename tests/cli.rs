//! End-to-end runs of the `imgseam` binary.

use assert_cmd::prelude::*;
use image::GenericImageView;
use predicates::prelude::*;
use std::process::Command;

fn gradient_png(path: &std::path::Path, width: u32, height: u32) {
    let image = image::ImageBuffer::from_fn(width, height, |x, y| {
        image::Rgb([(x * 20) as u8, (y * 25) as u8, ((x + y) * 10) as u8])
    });
    image.save(path).unwrap();
}

#[test]
fn carves_a_png_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gradient.png");
    gradient_png(&input, 12, 8);

    let output = dir.path().join("narrow.png");
    Command::cargo_bin("imgseam")
        .unwrap()
        .arg(&input)
        .arg("3")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculated in"));

    let carved = image::open(&output).unwrap();
    assert_eq!(carved.dimensions(), (9, 8));
}

#[test]
fn horizontal_flag_shrinks_height_instead() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gradient.png");
    gradient_png(&input, 12, 8);

    let output = dir.path().join("short.png");
    Command::cargo_bin("imgseam")
        .unwrap()
        .arg(&input)
        .arg("2")
        .arg("--horizontal")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let carved = image::open(&output).unwrap();
    assert_eq!(carved.dimensions(), (12, 6));
}

#[test]
fn refuses_more_seams_than_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gradient.png");
    gradient_png(&input, 12, 8);

    let output = dir.path().join("never.png");
    Command::cargo_bin("imgseam")
        .unwrap()
        .arg(&input)
        .arg("99")
        .arg("--output")
        .arg(&output)
        .assert()
        .failure();

    // Nothing may be written on an argument error.
    assert!(!output.exists());
}

#[test]
fn requires_arguments() {
    Command::cargo_bin("imgseam").unwrap().assert().failure();
}
