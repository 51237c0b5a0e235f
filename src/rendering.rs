use crate::error::{Error, Result};
use crate::geometry::{flatten, BezierPath, Float, Point, FLATTENING_TOLERANCE};
use crate::scene::{Bounds, CurvePath, PathStyle, Scene, Shape, Text};
use crate::text;

use wizdraw::stroke;
use wizdraw::fill;

use vek::vec::Vec2;

use rgb::{ComponentBytes, RGBA8};

use png::BitDepth::Eight;
use png::ColorType::Rgba;
use png::Encoder;

use alloc::{vec, vec::Vec};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Control point offset approximating a quarter circle with a cubic curve.
const KAPPA: Float = 0.552_284_8;

/// An RGBA8 raster, row-major with no padding between rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<RGBA8>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![RGBA8::new(0, 0, 0, 0); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[RGBA8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<RGBA8> {
        match x < self.width && y < self.height {
            true => Some(self.pixels[y * self.width + x]),
            false => None,
        }
    }

    pub fn encode_png<W: Write>(&self, writer: W) -> Result<()> {
        let mut encoder = Encoder::new(writer, self.width as u32, self.height as u32);
        encoder.set_color(Rgba);
        encoder.set_depth(Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.pixels.as_bytes())?;
        writer.finish()?;
        Ok(())
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.encode_png(BufWriter::new(file))?;
        log::info!("wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Rasterizes scenes shape by shape, using one coverage mask per shape.
pub struct Renderer {
    mask: Vec<u8>,
    mask_size: Vec2<usize>,
    alpha_blend: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            mask: Vec::new(),
            mask_size: Vec2::new(0, 0),
            alpha_blend: true,
        }
    }

    /// When disabled, each shape replaces the pixels it covers instead of
    /// being blended over them.
    pub fn with_alpha_blend(self, alpha_blend: bool) -> Self {
        Self { alpha_blend, ..self }
    }

    /// Renders `scene` into a canvas covering its bounds; the top-left
    /// corner of the bounds lands on pixel (0, 0).
    ///
    /// `SSAA` is the supersampling factor per axis and `SSAA_SQ` its square.
    pub fn render<const SSAA: usize, const SSAA_SQ: usize>(&mut self, scene: &Scene) -> Result<Canvas> {
        let bounds = scene.bounds();
        if bounds.is_empty() {
            return Err(Error::EmptyScene);
        }

        let w = bounds.width().ceil() as usize;
        let h = bounds.height().ceil() as usize;
        let mut canvas = Canvas::new(w, h);
        self.mask.clear();
        self.mask.resize(w * h, 0);
        self.mask_size = Vec2::new(w, h);

        log::debug!("rendering {} shapes into {}x{}", scene.shapes().len(), w, h);

        let offset = -bounds.top_left();
        for shape in scene.shapes() {
            let shape = shape.transformed(Point::new(1.0, 1.0), offset);
            self.draw::<SSAA, SSAA_SQ>(&mut canvas, &shape);
        }

        Ok(canvas)
    }

    fn draw<const SSAA: usize, const SSAA_SQ: usize>(&mut self, canvas: &mut Canvas, shape: &Shape) {
        match shape {
            Shape::Rectangle(r) => {
                let outline = rectangle_outline(&r.bounds);
                self.draw_outline::<SSAA, SSAA_SQ>(canvas, &outline, r.fill, r.border);
            }
            Shape::Ellipse(e) => {
                let outline = ellipse_outline(&e.bounds);
                self.draw_outline::<SSAA, SSAA_SQ>(canvas, &outline, e.fill, e.border);
            }
            Shape::Text(t) => self.draw_text::<SSAA>(canvas, t),
            Shape::Curve(c) => self.draw_curve::<SSAA, SSAA_SQ>(canvas, c),
        }
    }

    fn draw_outline<const SSAA: usize, const SSAA_SQ: usize>(
        &mut self,
        canvas: &mut Canvas,
        outline: &[Point],
        fill_color: Option<RGBA8>,
        border: Option<PathStyle>,
    ) {
        if let Some(color) = fill_color {
            self.fill_polygon::<SSAA, SSAA_SQ>(canvas, outline, color);
        }
        if let Some(border) = border {
            let mut closed = outline.to_vec();
            if let Some(first) = outline.first() {
                closed.push(*first);
            }
            self.stroke_polyline::<SSAA>(canvas, &closed, border);
        }
    }

    fn draw_text<const SSAA: usize>(&mut self, canvas: &mut Canvas, t: &Text) {
        let style = PathStyle::new(t.font.color, text::stroke_width(t.font.size));
        for polyline in text::layout(&t.content, t.origin, t.font.size) {
            self.stroke_polyline::<SSAA>(canvas, &polyline, style);
        }
    }

    fn draw_curve<const SSAA: usize, const SSAA_SQ: usize>(&mut self, canvas: &mut Canvas, c: &CurvePath) {
        let mut shaft = flatten(&c.visible_path(), FLATTENING_TOLERANCE);

        if let Some(triangle) = c.arrowhead_triangle() {
            // the shaft stops at the arrowhead's base so the stroke does
            // not poke out around its tip
            let [tip, left, right] = triangle;
            let base = (left + right) / 2.0;
            let length = c.arrowhead_length();
            while shaft.last().map_or(false, |p| p.distance(tip) < length) {
                shaft.pop();
            }
            if !shaft.is_empty() {
                shaft.push(base);
            }
            self.stroke_polyline::<SSAA>(canvas, &shaft, c.style);
            self.fill_polygon::<SSAA, SSAA_SQ>(canvas, &triangle, c.style.color);
        } else {
            self.stroke_polyline::<SSAA>(canvas, &shaft, c.style);
        }
    }

    fn fill_polygon<const SSAA: usize, const SSAA_SQ: usize>(
        &mut self,
        canvas: &mut Canvas,
        polygon: &[Point],
        color: RGBA8,
    ) {
        if polygon.len() < 3 {
            return;
        }
        let mut closed = polygon.to_vec();
        closed.push(polygon[0]);

        self.mask.fill(0);
        fill::<SSAA, SSAA_SQ>(&closed, &mut self.mask, self.mask_size);
        self.composite(canvas, color);
    }

    fn stroke_polyline<const SSAA: usize>(&mut self, canvas: &mut Canvas, polyline: &[Point], style: PathStyle) {
        if polyline.len() < 2 || style.thickness <= 0.0 {
            return;
        }

        self.mask.fill(0);
        stroke::<SSAA>(polyline, &mut self.mask, self.mask_size, style.thickness);
        self.composite(canvas, style.color);
    }

    fn composite(&self, canvas: &mut Canvas, color: RGBA8) {
        for (dst, q) in canvas.pixels.iter_mut().zip(self.mask.iter()) {
            if *q != 0 {
                blend_pixel(dst, color, *q, self.alpha_blend);
            }
        }
    }
}

fn rectangle_outline(b: &Bounds) -> Vec<Point> {
    vec![
        Point::new(b.left, b.top),
        Point::new(b.right, b.top),
        Point::new(b.right, b.bottom),
        Point::new(b.left, b.bottom),
    ]
}

/// Flattens the ellipse inscribed in `b` from four cubic quarter arcs.
fn ellipse_outline(b: &Bounds) -> Vec<Point> {
    let c = b.center();
    let rx = b.width() / 2.0;
    let ry = b.height() / 2.0;
    let (kx, ky) = (KAPPA * rx, KAPPA * ry);

    let quarters = [
        [(rx, 0.0), (rx, ky), (kx, ry), (0.0, ry)],
        [(0.0, ry), (-kx, ry), (-rx, ky), (-rx, 0.0)],
        [(-rx, 0.0), (-rx, -ky), (-kx, -ry), (0.0, -ry)],
        [(0.0, -ry), (kx, -ry), (rx, -ky), (rx, 0.0)],
    ];

    let mut outline = Vec::new();
    for quarter in quarters {
        let path = BezierPath::new(quarter.map(|(x, y)| c + Point::new(x, y)));
        for point in flatten(&path, FLATTENING_TOLERANCE) {
            if outline.last() != Some(&point) {
                outline.push(point);
            }
        }
    }
    // the last quarter ends where the first began
    if outline.len() > 1 && outline.first() == outline.last() {
        outline.pop();
    }
    outline
}

#[inline(always)]
pub fn blend_pixel(dst_pixel: &mut RGBA8, src_pixel: RGBA8, mask_alpha: u8, alpha_blend_dst: bool) {
    if src_pixel.a == 255 && mask_alpha == 255 {
        *dst_pixel = src_pixel;
    } else {
        let src_alpha = ((src_pixel.a as u32) * (mask_alpha as u32)) / 255;
        let u8_max = u8::MAX as u32;
        let dst_alpha = u8_max - src_alpha;

        let for_each = |src: u8, dst: &mut u8| {
            let src_scaled = (src as u32) * src_alpha;
            let dst_scaled = match alpha_blend_dst {
                true => (*dst as u32) * dst_alpha,
                false => 0,
            };
            *dst = ((src_scaled + dst_scaled) / u8_max) as u8;
        };

        for_each(src_pixel.r, &mut dst_pixel.r);
        for_each(src_pixel.g, &mut dst_pixel.g);
        for_each(src_pixel.b, &mut dst_pixel.b);
        for_each(src_pixel.a, &mut dst_pixel.a);
    }
}
