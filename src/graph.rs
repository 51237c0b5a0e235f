//! Drawing `petgraph` graphs as circles joined by curved arrows.
//!
//! Parallel edges between the same pair of nodes fan out: the k-th edge
//! between a pair is bent by `0.15 * (k - 1)`, so the first one is
//! straight. Directed graphs count each direction separately, undirected
//! graphs count both together. Every edge is pulled back by the node
//! radius at both ends so arrows meet circles at their rim.

use crate::config::{GraphFile, GraphStyle};
use crate::error::{Error, Result};
use crate::geometry::{arc_path, truncate_arc, BezierPath, Float, Point, P_ZERO};
use crate::scene::{colors, CurvePath, Ellipse, FontStyle, PathStyle, Scene, Text};

use petgraph::graph::{Graph, IndexType, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, EdgeType, Undirected};

use rgb::RGBA8;

use alloc::{string::String, string::ToString, vec::Vec};
use core::fmt::Display;
use std::collections::HashMap;

/// Bend added for each further edge between the same pair of nodes.
pub const PARALLEL_EDGE_BEND: Float = 0.15;

/// A labelled circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub radius: Float,
    pub center: Point,
    pub text: Option<String>,
    pub fill_color: RGBA8,
    pub border_color: RGBA8,
    pub font: FontStyle,
}

impl Node {
    pub fn new(radius: Float) -> Self {
        Self {
            radius,
            center: P_ZERO,
            text: None,
            fill_color: colors::WHITE,
            border_color: colors::BLACK,
            font: FontStyle::default(),
        }
    }

    pub fn with_center(self, center: Point) -> Self {
        Self { center, ..self }
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..self
        }
    }

    pub fn with_fill_color(self, fill_color: RGBA8) -> Self {
        Self { fill_color, ..self }
    }

    pub fn with_border_color(self, border_color: RGBA8) -> Self {
        Self { border_color, ..self }
    }

    pub fn with_font(self, font: FontStyle) -> Self {
        Self { font, ..self }
    }

    pub fn scene(&self) -> Scene {
        let ball = Ellipse::circle(self.center, self.radius)
            .with_fill(self.fill_color)
            .with_border(PathStyle::new(self.border_color, 1.0));
        let ball = Scene::new(ball);

        match &self.text {
            Some(text) => ball.next_to(Scene::new(Text::new(text.as_str(), self.font))),
            None => ball,
        }
    }
}

/// Bend of the `n_edges`-th edge between one pair of nodes.
pub fn edge_curvature(n_edges: usize) -> Float {
    PARALLEL_EDGE_BEND * n_edges.saturating_sub(1) as Float
}

/// The arc from `start` to `end`, pulled back by `radius` at both ends.
///
/// The truncation is clamped to the curve's end segments so a short edge
/// between large nodes never turns back on itself.
pub fn edge_path(start: Point, end: Point, n_edges: usize, angularity: Float, radius: Float) -> Result<BezierPath> {
    let path = arc_path(start, end, edge_curvature(n_edges), angularity);
    truncate_arc(path, radius.min(path.max_truncation()))
}

/// A weight label centered on the second-to-last point of `path`.
pub fn weight_label(path: &BezierPath, weight: &impl Display, font: FontStyle) -> Text {
    Text::new(weight.to_string(), font).centered_on(path[2])
}

pub fn draw_graph<N, E, Ty, Ix>(graph: &Graph<N, E, Ty, Ix>, style: &GraphStyle) -> Result<Scene>
where
    N: Display,
    E: Display,
    Ty: EdgeType,
    Ix: IndexType,
{
    let positions = style.layout.positions(graph, style.layout_scale());
    let center = |node: NodeIndex<Ix>| {
        positions
            .get(&node)
            .map(|p| *p * style.spread)
            .ok_or(Error::MissingPosition(node.index()))
    };
    let font = FontStyle::new(style.font_size, style.font_color);
    let edge_style = PathStyle::new(style.edge_color, style.edge_thickness);

    let mut parts = Vec::with_capacity(graph.node_count() + 2 * graph.edge_count());
    for node in graph.node_indices() {
        let node = Node::new(style.radius)
            .with_center(center(node)?)
            .with_text(graph[node].to_string())
            .with_fill_color(style.fill_color)
            .with_border_color(style.border_color)
            .with_font(font);
        parts.push(node.scene());
    }

    let mut labels = Vec::new();
    let mut parallel: HashMap<(usize, usize), usize> = HashMap::new();
    for edge in graph.edge_references() {
        let (source, target) = (edge.source(), edge.target());
        if source == target {
            log::warn!("skipping self-loop on node {}", source.index());
            continue;
        }

        let (s, t) = (source.index(), target.index());
        let key = match graph.is_directed() {
            true => (s, t),
            false => (s.min(t), s.max(t)),
        };
        let count = parallel.entry(key).or_insert(0);
        *count += 1;

        let path = edge_path(center(source)?, center(target)?, *count, style.angularity, style.radius)?;
        let arrow = CurvePath::new(path, edge_style).with_arrowhead(graph.is_directed());
        parts.push(Scene::new(arrow));

        if style.show_weights {
            labels.push(Scene::new(weight_label(&path, edge.weight(), font)));
        }
    }
    parts.extend(labels);

    log::debug!(
        "drew {} nodes and {} edges with {:?} layout",
        graph.node_count(),
        graph.edge_count(),
        style.layout
    );

    let scene = Scene::compose(parts).pad(style.padding);
    Ok(match style.background {
        Some(color) => scene.background(color),
        None => scene,
    })
}

/// Builds a graph from a file description; node weights are the names.
pub fn graph_from_file<Ty: EdgeType>(file: &GraphFile) -> Graph<String, i64, Ty> {
    let mut graph = Graph::default();
    let mut index = HashMap::new();
    for name in file.node_names() {
        index.insert(name, graph.add_node(name.to_string()));
    }
    for (from, to, weight) in &file.edges {
        if let (Some(a), Some(b)) = (index.get(from.as_str()), index.get(to.as_str())) {
            graph.add_edge(*a, *b, *weight);
        }
    }
    graph
}

pub fn draw_graph_file(file: &GraphFile) -> Result<Scene> {
    match file.directed {
        true => draw_graph(&graph_from_file::<Directed>(file), &file.style),
        false => draw_graph(&graph_from_file::<Undirected>(file), &file.style),
    }
}
