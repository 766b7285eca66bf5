#![allow(dead_code)]

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};

/// Pixel at `(x, y)` encodes its own coordinates, so crops can be checked
/// by reading a pixel back.
pub fn coordinate_pixel(x: u32, y: u32) -> Rgb<u8> {
    Rgb([(x % 256) as u8, (y % 256) as u8, 0])
}

pub fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    let img = RgbImage::from_fn(width, height, coordinate_pixel);
    img.save(path).expect("write png file");
}

pub fn write_labels(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, content).expect("write label file");
}

/// Parses `<class> <cx> <cy> <w> <h>` lines into tuples for comparisons.
pub fn read_rows(path: &Path) -> Vec<(String, [f64; 4])> {
    fs::read_to_string(path)
        .expect("read label file")
        .lines()
        .map(|line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(tokens.len(), 5, "unexpected label line '{line}'");
            let mut values = [0.0; 4];
            for (value, raw) in values.iter_mut().zip(&tokens[1..]) {
                *value = raw.parse().expect("numeric token");
            }
            (tokens[0].to_string(), values)
        })
        .collect()
}

pub fn assert_close(actual: [f64; 4], expected: [f64; 4], eps: f64) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() < eps, "{actual:?} != {expected:?}");
    }
}
