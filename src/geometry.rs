//! Cubic Bézier arcs between two points.
//!
//! Graph edges are drawn as a single cubic curve: [`arc_path`] bends the
//! straight line between two node centers, and [`truncate_arc`] pulls both
//! ends back along their tangents so the stroke (and its arrowhead) stops
//! at the node's rim instead of its center.
//!
//! # Coordinate System
//!
//! X increases rightward and Y increases downward, like the rasterizer.
//! The perpendicular used to bend an arc is `perp(dx, dy) = (dy, -dx)`:
//! with a positive bend, an arc from left to right bulges upward on screen.

use crate::error::{Error, Result, SegmentEnd};

use wizdraw::push_cubic_bezier_segments;

use vek::bezier::CubicBezier2;

use alloc::vec::Vec;
use core::ops::Index;

pub type Float = f32;
pub type Point = vek::vec::Vec2<Float>;
pub const P_ZERO: Point = Point::new(0.0, 0.0);

/// Maximum distance between a flattened polyline and its curve, in pixels.
pub const FLATTENING_TOLERANCE: Float = 0.4;

/// Start anchor, start control, end control, end anchor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BezierPath {
    pub points: [Point; 4],
}

impl BezierPath {
    pub const fn new(points: [Point; 4]) -> Self {
        Self { points }
    }

    /// A straight segment, with both control points on the anchors.
    pub const fn line(start: Point, end: Point) -> Self {
        Self::new([start, start, end, end])
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[3]
    }

    /// The largest truncation [`truncate_arc`] accepts before one of the
    /// anchors crosses over its control point.
    pub fn max_truncation(&self) -> Float {
        let [a, b, c, d] = self.points;
        length(b - a).min(length(c - d))
    }

    pub fn point_at(&self, t: Float) -> Point {
        let [p0, p1, p2, p3] = self.points;
        let u = 1.0 - t;
        p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
    }

    /// First derivative of the curve; not normalized.
    pub fn tangent_at(&self, t: Float) -> Point {
        let [p0, p1, p2, p3] = self.points;
        let u = 1.0 - t;
        (p1 - p0) * (3.0 * u * u) + (p2 - p1) * (6.0 * u * t) + (p3 - p2) * (3.0 * t * t)
    }

    pub fn to_cubic(&self) -> CubicBezier2<Float> {
        let [start, ctrl0, ctrl1, end] = self.points;
        CubicBezier2 {
            start,
            ctrl0,
            ctrl1,
            end,
        }
    }

    pub fn map(&self, f: impl Fn(Point) -> Point) -> Self {
        Self::new(self.points.map(f))
    }
}

impl From<[Point; 4]> for BezierPath {
    fn from(points: [Point; 4]) -> Self {
        Self::new(points)
    }
}

impl Index<usize> for BezierPath {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

/// Shape of an arc between two points.
///
/// `bend` is the perpendicular offset of the curve's control point, as a
/// fraction of the distance between the endpoints; `0` is a straight line
/// and the sign picks the side. `angularity` scales how far the control
/// points sit from their anchors: `0` is a straight line, `1` keeps them
/// on the shared control point, and larger values sharpen the curve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcParameters {
    pub bend: Float,
    pub angularity: Float,
}

impl ArcParameters {
    pub const fn new(bend: Float, angularity: Float) -> Self {
        Self { bend, angularity }
    }

    pub fn path(&self, pos_a: Point, pos_b: Point) -> BezierPath {
        arc_path(pos_a, pos_b, self.bend, self.angularity)
    }
}

impl Default for ArcParameters {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

fn perpendicular(v: Point) -> Point {
    Point::new(v.y, -v.x)
}

/// Euclidean length without squaring, so it neither overflows nor
/// underflows for finite coordinates.
fn length(v: Point) -> Float {
    v.x.hypot(v.y)
}

fn direction(from: Point, to: Point) -> Option<Point> {
    let v = to - from;
    let length = length(v);
    match length == 0.0 {
        true => None,
        false => Some(v / length),
    }
}

fn lerp(a: Point, b: Point, t: Float) -> Point {
    a + (b - a) * t
}

/// Builds the cubic arc from `pos_a` to `pos_b`.
///
/// Both interior control points start on `midpoint + bend * perp(b - a)`
/// and are then slid toward their anchors by `distance * (1 - angularity)`,
/// where `distance` is the control-to-anchor length. The anchors stay put.
///
/// Since the control point is equidistant from both anchors, the slide is
/// the interpolation `anchor + (ctrl - anchor) * angularity`; this keeps
/// `angularity == 0` exactly on the anchors and needs no normalization,
/// so coincident endpoints simply collapse to `[a, a, a, a]`.
pub fn arc_path(pos_a: Point, pos_b: Point, bend: Float, angularity: Float) -> BezierPath {
    let middle = (pos_a + pos_b) / 2.0;
    let ctrl = middle + perpendicular(pos_b - pos_a) * bend;
    BezierPath::new([
        pos_a,
        lerp(pos_a, ctrl, angularity),
        lerp(pos_b, ctrl, angularity),
        pos_b,
    ])
}

/// Moves each anchor of `path` toward its adjacent control point by
/// `truncation`; the control points are left untouched.
///
/// A truncation larger than [`BezierPath::max_truncation`] carries the
/// anchor past its control point and reverses that end of the curve.
/// Callers that want to stay on the curve should clamp to it.
pub fn truncate_arc(path: BezierPath, truncation: Float) -> Result<BezierPath> {
    let [a, b, c, d] = path.points;
    let start = direction(a, b).ok_or(Error::DegenerateSegment(SegmentEnd::Start))?;
    let end = direction(d, c).ok_or(Error::DegenerateSegment(SegmentEnd::End))?;
    Ok(BezierPath::new([a + start * truncation, b, c, d + end * truncation]))
}

/// Splits a curve at `t` using de Casteljau's construction.
pub fn split(path: BezierPath, t: Float) -> (BezierPath, BezierPath) {
    let [p0, p1, p2, p3] = path.points;
    let p01 = lerp(p0, p1, t);
    let p12 = lerp(p1, p2, t);
    let p23 = lerp(p2, p3, t);
    let p012 = lerp(p01, p12, t);
    let p123 = lerp(p12, p23, t);
    let mid = lerp(p012, p123, t);
    (
        BezierPath::new([p0, p01, p012, mid]),
        BezierPath::new([mid, p123, p23, p3]),
    )
}

/// The part of `path` between parameters `start` and `end`, both clamped
/// to `[0, 1]`.
pub fn partial_path(path: BezierPath, start: Float, end: Float) -> BezierPath {
    let end = end.clamp(0.0, 1.0);
    let start = start.clamp(0.0, end);
    if end == 0.0 {
        return BezierPath::new([path.start(); 4]);
    }
    let (head, _) = split(path, end);
    let (_, tail) = split(head, start / end);
    tail
}

/// Flattens `path` into a polyline that starts on its start anchor and
/// ends on its end anchor, without repeated points.
pub fn flatten(path: &BezierPath, tolerance: Float) -> Vec<Point> {
    let mut segments = Vec::new();
    push_cubic_bezier_segments::<8>(&path.to_cubic(), tolerance, &mut segments);

    let mut flat = Vec::with_capacity(segments.len() + 2);
    flat.push(path.start());
    for point in segments.into_iter().chain(Some(path.end())) {
        if flat.last() != Some(&point) {
            flat.push(point);
        }
    }
    flat
}
