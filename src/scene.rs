//! Immutable scene values.
//!
//! A [`Scene`] is an ordered list of shapes plus the bounds it occupies.
//! Combinators consume a scene and return a new one; shapes are drawn in
//! list order, so later shapes cover earlier ones.

use crate::geometry::{partial_path, BezierPath, Float, Point};
use crate::text;

use rgb::RGBA8;

use alloc::{string::String, vec, vec::Vec};

pub mod colors {
    use rgb::RGBA8;

    pub const TRANSPARENT: RGBA8 = RGBA8::new(0, 0, 0, 0);
    pub const BLACK: RGBA8 = RGBA8::new(0, 0, 0, 255);
    pub const WHITE: RGBA8 = RGBA8::new(255, 255, 255, 255);
    pub const RED: RGBA8 = RGBA8::new(255, 0, 0, 255);
    pub const GREEN: RGBA8 = RGBA8::new(0, 255, 0, 255);
    pub const BLUE: RGBA8 = RGBA8::new(0, 0, 255, 255);
    pub const CYAN: RGBA8 = RGBA8::new(0, 255, 255, 255);
    pub const MAGENTA: RGBA8 = RGBA8::new(255, 0, 255, 255);
    pub const YELLOW: RGBA8 = RGBA8::new(255, 255, 0, 255);
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub left: Float,
    pub top: Float,
    pub right: Float,
    pub bottom: Float,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleLeft,
    Center,
    MiddleRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl Bounds {
    pub const fn new(left: Float, top: Float, right: Float, bottom: Float) -> Self {
        Self { left, top, right, bottom }
    }

    pub const fn from_size(width: Float, height: Float) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn centered(center: Point, width: Float, height: Float) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            center.x + width / 2.0,
            center.y + height / 2.0,
        )
    }

    pub fn width(&self) -> Float {
        self.right - self.left
    }

    pub fn height(&self) -> Float {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn center(&self) -> Point {
        self.corner(Corner::Center)
    }

    pub fn corner(&self, corner: Corner) -> Point {
        use Corner::*;

        let mid_x = (self.left + self.right) / 2.0;
        let mid_y = (self.top + self.bottom) / 2.0;
        let (x, y) = match corner {
            TopLeft => (self.left, self.top),
            TopMiddle => (mid_x, self.top),
            TopRight => (self.right, self.top),
            MiddleLeft => (self.left, mid_y),
            Center => (mid_x, mid_y),
            MiddleRight => (self.right, mid_y),
            BottomLeft => (self.left, self.bottom),
            BottomMiddle => (mid_x, self.bottom),
            BottomRight => (self.right, self.bottom),
        };
        Point::new(x, y)
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Smallest bounds containing every point.
    pub fn around(points: impl IntoIterator<Item = Point>) -> Option<Bounds> {
        points.into_iter().fold(None, |acc: Option<Bounds>, p| {
            let point = Bounds::new(p.x, p.y, p.x, p.y);
            Some(match acc {
                Some(b) => b.union(&point),
                None => point,
            })
        })
    }

    pub fn translated(&self, offset: Point) -> Bounds {
        Bounds::new(
            self.left + offset.x,
            self.top + offset.y,
            self.right + offset.x,
            self.bottom + offset.y,
        )
    }

    /// Applies `p * scale + offset` to both corners, keeping the result
    /// well ordered for negative scales.
    pub fn transformed(&self, scale: Point, offset: Point) -> Bounds {
        let a = self.top_left() * scale + offset;
        let b = Point::new(self.right, self.bottom) * scale + offset;
        Bounds::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    pub fn inflated(&self, left: Float, top: Float, right: Float, bottom: Float) -> Bounds {
        Bounds::new(self.left - left, self.top - top, self.right + right, self.bottom + bottom)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathStyle {
    pub color: RGBA8,
    pub thickness: Float,
}

impl PathStyle {
    pub const fn new(color: RGBA8, thickness: Float) -> Self {
        Self { color, thickness }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::new(colors::BLACK, 1.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontStyle {
    pub size: Float,
    pub color: RGBA8,
}

impl FontStyle {
    pub const fn new(size: Float, color: RGBA8) -> Self {
        Self { size, color }
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::new(12.0, colors::BLACK)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub bounds: Bounds,
    pub fill: Option<RGBA8>,
    pub border: Option<PathStyle>,
}

impl Rectangle {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            fill: None,
            border: Some(PathStyle::default()),
        }
    }

    pub fn with_fill(self, fill: RGBA8) -> Self {
        Self { fill: Some(fill), ..self }
    }

    pub fn with_border(self, border: PathStyle) -> Self {
        Self { border: Some(border), ..self }
    }

    pub fn without_border(self) -> Self {
        Self { border: None, ..self }
    }
}

/// An ellipse inscribed in `bounds`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ellipse {
    pub bounds: Bounds,
    pub fill: Option<RGBA8>,
    pub border: Option<PathStyle>,
}

impl Ellipse {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            fill: None,
            border: Some(PathStyle::default()),
        }
    }

    pub fn circle(center: Point, radius: Float) -> Self {
        Self::new(Bounds::centered(center, 2.0 * radius, 2.0 * radius))
    }

    pub fn with_fill(self, fill: RGBA8) -> Self {
        Self { fill: Some(fill), ..self }
    }

    pub fn with_border(self, border: PathStyle) -> Self {
        Self { border: Some(border), ..self }
    }

    pub fn without_border(self) -> Self {
        Self { border: None, ..self }
    }
}

/// A single line of text; `origin` is its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub origin: Point,
    pub content: String,
    pub font: FontStyle,
}

impl Text {
    pub fn new(content: impl Into<String>, font: FontStyle) -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            content: content.into(),
            font,
        }
    }

    /// Offsets the text by half its size so it is centered on `center`.
    pub fn centered_on(self, center: Point) -> Self {
        let (w, h) = self.size();
        Self {
            origin: center - Point::new(w / 2.0, h / 2.0),
            ..self
        }
    }

    pub fn size(&self) -> (Float, Float) {
        text::text_size(&self.content, self.font.size)
    }

    pub fn bounds(&self) -> Bounds {
        let (w, h) = self.size();
        let half_stroke = text::stroke_width(self.font.size) / 2.0;
        Bounds::new(self.origin.x, self.origin.y, self.origin.x + w, self.origin.y + h)
            .inflated(half_stroke, half_stroke, half_stroke, half_stroke)
    }
}

/// A stroked cubic curve, optionally ending in an arrowhead.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CurvePath {
    pub path: BezierPath,
    pub style: PathStyle,
    pub arrowhead: bool,
    /// Fraction of the curve that is drawn, from its start.
    pub partial_end: Float,
}

impl CurvePath {
    pub fn new(path: BezierPath, style: PathStyle) -> Self {
        Self {
            path,
            style,
            arrowhead: false,
            partial_end: 1.0,
        }
    }

    /// A straight arrow from `start` to `end`.
    pub fn arrow(start: Point, end: Point, style: PathStyle) -> Self {
        Self::new(BezierPath::line(start, end), style).with_arrowhead(true)
    }

    pub fn with_arrowhead(self, arrowhead: bool) -> Self {
        Self { arrowhead, ..self }
    }

    pub fn with_partial_end(self, partial_end: Float) -> Self {
        Self { partial_end, ..self }
    }

    /// The part of the curve that is actually drawn.
    pub fn visible_path(&self) -> BezierPath {
        partial_path(self.path, 0.0, self.partial_end)
    }

    pub fn arrowhead_length(&self) -> Float {
        (4.0 * self.style.thickness).max(6.0)
    }

    /// Tip and the two base corners of the arrowhead, or `None` when the
    /// curve has no arrowhead or no direction at its end.
    pub fn arrowhead_triangle(&self) -> Option<[Point; 3]> {
        if !self.arrowhead {
            return None;
        }
        let visible = self.visible_path();
        let tip = visible.end();
        let mut tangent = visible.tangent_at(1.0);
        if tangent.magnitude() == 0.0 {
            tangent = tip - visible.start();
        }
        let length = tangent.magnitude();
        if length == 0.0 {
            return None;
        }
        let dir = tangent / length;
        let normal = Point::new(-dir.y, dir.x);
        let base = tip - dir * self.arrowhead_length();
        let half_width = self.arrowhead_length() / 2.0;
        Some([tip, base + normal * half_width, base - normal * half_width])
    }

    pub fn bounds(&self) -> Bounds {
        let hull = Bounds::around(self.path.points).unwrap_or(Bounds::from_size(0.0, 0.0));
        let margin = match self.arrowhead {
            true => self.arrowhead_length(),
            false => self.style.thickness / 2.0,
        };
        hull.inflated(margin, margin, margin, margin)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Text(Text),
    Curve(CurvePath),
}

impl Shape {
    pub fn bounds(&self) -> Bounds {
        let outline = |bounds: Bounds, border: Option<PathStyle>| match border {
            Some(style) => {
                let m = style.thickness / 2.0;
                bounds.inflated(m, m, m, m)
            }
            None => bounds,
        };
        match self {
            Shape::Rectangle(r) => outline(r.bounds, r.border),
            Shape::Ellipse(e) => outline(e.bounds, e.border),
            Shape::Text(t) => t.bounds(),
            Shape::Curve(c) => c.bounds(),
        }
    }

    /// Maps every coordinate through `p * scale + offset`. Stroke widths
    /// and font sizes follow the mean of the absolute scale factors.
    pub fn transformed(&self, scale: Point, offset: Point) -> Shape {
        let factor = (scale.x.abs() + scale.y.abs()) / 2.0;
        let style = |s: PathStyle| PathStyle::new(s.color, s.thickness * factor);
        match self {
            Shape::Rectangle(r) => Shape::Rectangle(Rectangle {
                bounds: r.bounds.transformed(scale, offset),
                fill: r.fill,
                border: r.border.map(style),
            }),
            Shape::Ellipse(e) => Shape::Ellipse(Ellipse {
                bounds: e.bounds.transformed(scale, offset),
                fill: e.fill,
                border: e.border.map(style),
            }),
            Shape::Text(t) => Shape::Text(Text {
                origin: t.origin * scale + offset,
                content: t.content.clone(),
                font: FontStyle::new(t.font.size * factor, t.font.color),
            }),
            Shape::Curve(c) => Shape::Curve(CurvePath {
                path: c.path.map(|p| p * scale + offset),
                style: style(c.style),
                ..*c
            }),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Ellipse> for Shape {
    fn from(e: Ellipse) -> Self {
        Shape::Ellipse(e)
    }
}

impl From<Text> for Shape {
    fn from(t: Text) -> Self {
        Shape::Text(t)
    }
}

impl From<CurvePath> for Shape {
    fn from(c: CurvePath) -> Self {
        Shape::Curve(c)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
    bounds: Bounds,
}

impl Scene {
    pub fn new(shape: impl Into<Shape>) -> Self {
        let shape = shape.into();
        Self {
            bounds: shape.bounds(),
            shapes: vec![shape],
        }
    }

    pub fn empty() -> Self {
        Self {
            shapes: Vec::new(),
            bounds: Bounds::from_size(0.0, 0.0),
        }
    }

    /// Draws `scenes` on top of each other, first to last.
    pub fn compose(scenes: impl IntoIterator<Item = Scene>) -> Self {
        let mut shapes = Vec::new();
        let mut bounds: Option<Bounds> = None;
        for scene in scenes {
            bounds = Some(match bounds {
                Some(b) => b.union(&scene.bounds),
                None => scene.bounds,
            });
            shapes.extend(scene.shapes);
        }
        Self {
            shapes,
            bounds: bounds.unwrap_or(Bounds::from_size(0.0, 0.0)),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Fills the current bounds with `color` behind every shape.
    pub fn background(self, color: RGBA8) -> Self {
        let fill = Shape::Rectangle(Rectangle::new(self.bounds).with_fill(color).without_border());
        let mut shapes = Vec::with_capacity(self.shapes.len() + 1);
        shapes.push(fill);
        shapes.extend(self.shapes);
        Self { shapes, ..self }
    }

    pub fn pad(self, padding: Float) -> Self {
        self.pad_sides(padding, padding, padding, padding)
    }

    pub fn pad_left(self, padding: Float) -> Self {
        self.pad_sides(padding, 0.0, 0.0, 0.0)
    }

    pub fn pad_top(self, padding: Float) -> Self {
        self.pad_sides(0.0, padding, 0.0, 0.0)
    }

    pub fn pad_right(self, padding: Float) -> Self {
        self.pad_sides(0.0, 0.0, padding, 0.0)
    }

    pub fn pad_bottom(self, padding: Float) -> Self {
        self.pad_sides(0.0, 0.0, 0.0, padding)
    }

    pub fn pad_sides(self, left: Float, top: Float, right: Float, bottom: Float) -> Self {
        Self {
            bounds: self.bounds.inflated(left, top, right, bottom),
            ..self
        }
    }

    fn transformed(self, scale: Point, offset: Point) -> Self {
        Self {
            shapes: self.shapes.iter().map(|s| s.transformed(scale, offset)).collect(),
            bounds: self.bounds.transformed(scale, offset),
        }
    }

    /// Scales about the origin.
    pub fn scale(self, sx: Float, sy: Float) -> Self {
        self.transformed(Point::new(sx, sy), Point::new(0.0, 0.0))
    }

    pub fn translate(self, dx: Float, dy: Float) -> Self {
        let offset = Point::new(dx, dy);
        Self {
            shapes: self.shapes.iter().map(|s| s.transformed(Point::new(1.0, 1.0), offset)).collect(),
            bounds: self.bounds.translated(offset),
        }
    }

    /// Places `other` over this scene, centered on it.
    pub fn next_to(self, other: Scene) -> Self {
        let offset = self.bounds.center() - other.bounds.center();
        let other = other.translate(offset.x, offset.y);
        Self::compose([self, other])
    }
}

impl From<Shape> for Scene {
    fn from(shape: Shape) -> Self {
        Self::new(shape)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Scenes laid out one after the other; remembers where each child ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    scene: Scene,
    children: Vec<Bounds>,
}

impl Arrangement {
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }

    /// Bounds of the `index`-th child within the arrangement.
    pub fn child_bounds(&self, index: usize) -> Option<Bounds> {
        self.children.get(index).copied()
    }
}

/// Lays `scenes` out along `direction` starting at the origin, separated
/// by `gap` and centered on the cross axis.
pub fn arrange(scenes: impl IntoIterator<Item = Scene>, direction: Direction, gap: Float) -> Arrangement {
    let scenes: Vec<Scene> = scenes.into_iter().collect();
    let cross = |b: &Bounds| match direction {
        Direction::Horizontal => b.height(),
        Direction::Vertical => b.width(),
    };
    let cross_extent = scenes.iter().map(|s| cross(&s.bounds)).fold(0.0, Float::max);

    let mut cursor = 0.0;
    let mut children = Vec::with_capacity(scenes.len());
    let mut placed = Vec::with_capacity(scenes.len());
    for scene in scenes {
        let b = scene.bounds;
        let centering = (cross_extent - cross(&b)) / 2.0;
        let (dx, dy, advance) = match direction {
            Direction::Horizontal => (cursor - b.left, centering - b.top, b.width()),
            Direction::Vertical => (centering - b.left, cursor - b.top, b.height()),
        };
        let scene = scene.translate(dx, dy);
        children.push(scene.bounds);
        placed.push(scene);
        cursor += advance + gap;
    }

    Arrangement {
        scene: Scene::compose(placed),
        children,
    }
}
