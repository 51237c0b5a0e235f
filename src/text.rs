//! A small stroke font for node names and edge weights.
//!
//! Glyphs are polylines on a 4×6 grid (origin top-left, Y down) and are
//! rendered by stroking, like every other path in the crate.

use crate::geometry::{Float, Point};

use alloc::vec::Vec;

pub type Stroke = &'static [(i8, i8)];
pub type Glyph = &'static [Stroke];

pub const GLYPH_WIDTH: i8 = 4;
pub const GLYPH_HEIGHT: i8 = 6;
/// Horizontal distance between two glyph origins, in grid units.
pub const ADVANCE: i8 = 6;
/// Grid units per font size unit: a glyph is 6/8 of the font size tall.
const UNITS_PER_EM: Float = 8.0;

const BOX: Glyph = &[&[(0, 0), (4, 0), (4, 6), (0, 6), (0, 0)]];
const FIVE: Glyph = &[&[(4, 0), (0, 0), (0, 3), (4, 3), (4, 6), (0, 6)]];

pub fn glyph_strokes(ch: char) -> Glyph {
    match ch.to_ascii_uppercase() {
        ' ' => &[],
        '0' => &[&[(0, 0), (4, 0), (4, 6), (0, 6), (0, 0)], &[(0, 6), (4, 0)]],
        '1' => &[&[(1, 1), (2, 0), (2, 6)], &[(1, 6), (3, 6)]],
        '2' => &[&[(0, 0), (4, 0), (4, 3), (0, 3), (0, 6), (4, 6)]],
        '3' => &[&[(0, 0), (4, 0), (4, 6), (0, 6)], &[(1, 3), (4, 3)]],
        '4' => &[&[(0, 0), (0, 3), (4, 3)], &[(4, 0), (4, 6)]],
        '5' | 'S' => FIVE,
        '6' => &[&[(4, 0), (0, 0), (0, 6), (4, 6), (4, 3), (0, 3)]],
        '7' => &[&[(0, 0), (4, 0), (2, 6)]],
        '8' => &[&[(0, 0), (4, 0), (4, 6), (0, 6), (0, 0)], &[(0, 3), (4, 3)]],
        '9' => &[&[(4, 3), (0, 3), (0, 0), (4, 0), (4, 6), (0, 6)]],
        'A' => &[&[(0, 6), (2, 0), (4, 6)], &[(1, 3), (3, 3)]],
        'B' => &[
            &[(0, 0), (0, 6), (3, 6), (4, 5), (4, 4), (3, 3), (0, 3)],
            &[(0, 0), (3, 0), (4, 1), (4, 2), (3, 3)],
        ],
        'C' => &[&[(4, 0), (0, 0), (0, 6), (4, 6)]],
        'D' => &[&[(0, 0), (0, 6), (2, 6), (4, 4), (4, 2), (2, 0), (0, 0)]],
        'E' => &[&[(4, 0), (0, 0), (0, 6), (4, 6)], &[(0, 3), (3, 3)]],
        'F' => &[&[(4, 0), (0, 0), (0, 6)], &[(0, 3), (3, 3)]],
        'G' => &[&[(4, 0), (0, 0), (0, 6), (4, 6), (4, 3), (2, 3)]],
        'H' => &[&[(0, 0), (0, 6)], &[(4, 0), (4, 6)], &[(0, 3), (4, 3)]],
        'I' => &[&[(1, 0), (3, 0)], &[(2, 0), (2, 6)], &[(1, 6), (3, 6)]],
        'J' => &[&[(4, 0), (4, 6), (0, 6), (0, 4)]],
        'K' => &[&[(0, 0), (0, 6)], &[(4, 0), (0, 3), (4, 6)]],
        'L' => &[&[(0, 0), (0, 6), (4, 6)]],
        'M' => &[&[(0, 6), (0, 0), (2, 3), (4, 0), (4, 6)]],
        'N' => &[&[(0, 6), (0, 0), (4, 6), (4, 0)]],
        'O' => BOX,
        'P' => &[&[(0, 6), (0, 0), (4, 0), (4, 3), (0, 3)]],
        'Q' => &[&[(0, 0), (4, 0), (4, 6), (0, 6), (0, 0)], &[(2, 4), (4, 6)]],
        'R' => &[&[(0, 6), (0, 0), (4, 0), (4, 3), (0, 3), (4, 6)]],
        'T' => &[&[(0, 0), (4, 0)], &[(2, 0), (2, 6)]],
        'U' => &[&[(0, 0), (0, 6), (4, 6), (4, 0)]],
        'V' => &[&[(0, 0), (2, 6), (4, 0)]],
        'W' => &[&[(0, 0), (1, 6), (2, 3), (3, 6), (4, 0)]],
        'X' => &[&[(0, 0), (4, 6)], &[(4, 0), (0, 6)]],
        'Y' => &[&[(0, 0), (2, 3), (4, 0)], &[(2, 3), (2, 6)]],
        'Z' => &[&[(0, 0), (4, 0), (0, 6), (4, 6)]],
        '-' => &[&[(1, 3), (3, 3)]],
        '+' => &[&[(2, 1), (2, 5)], &[(0, 3), (4, 3)]],
        '_' => &[&[(0, 6), (4, 6)]],
        '.' => &[&[(2, 5), (2, 6)]],
        ':' => &[&[(2, 1), (2, 2)], &[(2, 4), (2, 5)]],
        _ => BOX,
    }
}

fn unit(font_size: Float) -> Float {
    font_size / UNITS_PER_EM
}

/// Width and height of `content` set at `font_size`.
pub fn text_size(content: &str, font_size: Float) -> (Float, Float) {
    let glyphs = content.chars().count() as Float;
    let unit = unit(font_size);
    let width = match glyphs == 0.0 {
        true => 0.0,
        false => (glyphs * ADVANCE as Float - (ADVANCE - GLYPH_WIDTH) as Float) * unit,
    };
    (width, GLYPH_HEIGHT as Float * unit)
}

/// Stroke width that keeps glyphs legible at `font_size`.
pub fn stroke_width(font_size: Float) -> Float {
    (font_size / 10.0).max(1.0)
}

/// Lays `content` out from the top-left `origin`, one polyline per glyph
/// stroke.
pub fn layout(content: &str, origin: Point, font_size: Float) -> Vec<Vec<Point>> {
    let unit = unit(font_size);
    let mut polylines = Vec::new();
    for (i, ch) in content.chars().enumerate() {
        let pen = origin + Point::new((i as i32 * ADVANCE as i32) as Float * unit, 0.0);
        for stroke in glyph_strokes(ch) {
            let polyline = stroke
                .iter()
                .map(|&(x, y)| pen + Point::new(x as Float, y as Float) * unit)
                .collect();
            polylines.push(polyline);
        }
    }
    polylines
}
