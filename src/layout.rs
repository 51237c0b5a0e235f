//! Node placement strategies.
//!
//! Every strategy has the same shape, `(graph, scale) -> positions`, and
//! is selected through the closed [`Layout`] enum rather than by name.
//! Positions are centered on the origin.

use crate::geometry::{Float, Point, P_ZERO};

use petgraph::graph::{Graph, IndexType, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::EdgeType;

use serde::{Deserialize, Serialize};

use alloc::{vec, vec::Vec};
use core::f32::consts::TAU;
use std::collections::HashMap;

pub type Positions<Ix> = HashMap<NodeIndex<Ix>, Point>;

/// Extra attraction between nodes joined by an edge.
pub const ARF_ATTRACTION: Float = 1.1;
const ARF_TOLERANCE: Float = 1e-6;
const ARF_STEP: Float = 1e-3;
const ARF_MAX_ITERATIONS: usize = 1000;

const SPRING_ITERATIONS: usize = 50;
const SPRING_THRESHOLD: Float = 1e-4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Layout {
    /// Evenly spaced on a circle of radius `scale`.
    Circular,
    /// Attractive and repulsive forces; `scale` sets the preferred spacing.
    #[default]
    Arf,
    /// Fruchterman-Reingold, rescaled so the farthest coordinate is `scale`.
    Spring,
}

impl Layout {
    pub fn positions<N, E, Ty: EdgeType, Ix: IndexType>(
        &self,
        graph: &Graph<N, E, Ty, Ix>,
        scale: Float,
    ) -> Positions<Ix> {
        let points = match self {
            Layout::Circular => circle(graph.node_count(), scale),
            Layout::Arf => arf(graph, scale),
            Layout::Spring => spring(graph, scale),
        };
        graph.node_indices().zip(points).collect()
    }
}

pub fn circular_layout<N, E, Ty: EdgeType, Ix: IndexType>(
    graph: &Graph<N, E, Ty, Ix>,
    scale: Float,
) -> Positions<Ix> {
    Layout::Circular.positions(graph, scale)
}

pub fn arf_layout<N, E, Ty: EdgeType, Ix: IndexType>(graph: &Graph<N, E, Ty, Ix>, scale: Float) -> Positions<Ix> {
    Layout::Arf.positions(graph, scale)
}

pub fn spring_layout<N, E, Ty: EdgeType, Ix: IndexType>(
    graph: &Graph<N, E, Ty, Ix>,
    scale: Float,
) -> Positions<Ix> {
    Layout::Spring.positions(graph, scale)
}

fn circle(n: usize, radius: Float) -> Vec<Point> {
    if n == 1 {
        return vec![P_ZERO];
    }
    (0..n)
        .map(|i| {
            let (sin, cos) = (TAU * i as Float / n as Float).sin_cos();
            Point::new(cos, sin) * radius
        })
        .collect()
}

/// Symmetric adjacency matrix, row-major, ignoring self-loops.
fn adjacency<N, E, Ty: EdgeType, Ix: IndexType>(graph: &Graph<N, E, Ty, Ix>) -> Vec<bool> {
    let n = graph.node_count();
    let mut adjacent = vec![false; n * n];
    for edge in graph.edge_references() {
        let (i, j) = (edge.source().index(), edge.target().index());
        if i != j {
            adjacent[i * n + j] = true;
            adjacent[j * n + i] = true;
        }
    }
    adjacent
}

fn arf<N, E, Ty: EdgeType, Ix: IndexType>(graph: &Graph<N, E, Ty, Ix>, scale: Float) -> Vec<Point> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let adjacent = adjacency(graph);
    let rho = scale * (n as Float).sqrt();
    // a small deterministic seed; repulsion spreads it out to `rho`
    let mut p = circle(n, 1.0);

    let mut iterations = 0;
    let mut residual;
    loop {
        let change: Vec<Point> = (0..n)
            .map(|i| {
                let mut force = P_ZERO;
                for j in (0..n).filter(|j| *j != i) {
                    let diff = p[j] - p[i];
                    let k = match adjacent[j * n + i] {
                        true => ARF_ATTRACTION,
                        false => 1.0,
                    };
                    force += diff * k;
                    let distance = diff.magnitude();
                    if distance > 0.0 {
                        force -= diff * (rho / distance);
                    }
                }
                force
            })
            .collect();

        residual = 0.0;
        for (point, force) in p.iter_mut().zip(change.iter()) {
            *point += *force * ARF_STEP;
            residual += force.magnitude();
        }

        if residual <= ARF_TOLERANCE || iterations >= ARF_MAX_ITERATIONS {
            break;
        }
        iterations += 1;
    }

    log::debug!("arf layout: {} iterations, residual force {}", iterations, residual);
    p
}

fn spring<N, E, Ty: EdgeType, Ix: IndexType>(graph: &Graph<N, E, Ty, Ix>, scale: Float) -> Vec<Point> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let adjacent = adjacency(graph);
    let k = (1.0 / n as Float).sqrt();
    let mut p = circle(n, 1.0);

    let mut temperature = 0.1 * extent(&p);
    let cooling = temperature / (SPRING_ITERATIONS as Float + 1.0);

    for iteration in 0..SPRING_ITERATIONS {
        let mut moved = 0.0;
        let displacement: Vec<Point> = (0..n)
            .map(|i| {
                let mut d = P_ZERO;
                for j in (0..n).filter(|j| *j != i) {
                    let delta = p[i] - p[j];
                    let distance = delta.magnitude().max(0.01);
                    let attraction = match adjacent[i * n + j] {
                        true => distance / k,
                        false => 0.0,
                    };
                    d += delta * (k * k / (distance * distance) - attraction);
                }
                d
            })
            .collect();

        for (point, d) in p.iter_mut().zip(displacement) {
            let length = d.magnitude().max(0.01);
            let step = d * (temperature / length);
            *point += step;
            moved += step.magnitude();
        }

        temperature -= cooling;
        if moved / (n as Float) < SPRING_THRESHOLD {
            log::debug!("spring layout converged after {} iterations", iteration + 1);
            break;
        }
    }

    rescale(p, scale)
}

/// Largest span of the points along either axis.
fn extent(points: &[Point]) -> Float {
    let (mut min, mut max) = (Point::broadcast(Float::INFINITY), Point::broadcast(Float::NEG_INFINITY));
    for p in points {
        min = Point::new(min.x.min(p.x), min.y.min(p.y));
        max = Point::new(max.x.max(p.x), max.y.max(p.y));
    }
    (max.x - min.x).max(max.y - min.y)
}

/// Centers the points on their mean and scales them so the largest
/// coordinate magnitude is `scale`.
fn rescale(points: Vec<Point>, scale: Float) -> Vec<Point> {
    let n = points.len() as Float;
    let mean = points.iter().fold(P_ZERO, |acc, p| acc + *p) / n;
    let centered: Vec<Point> = points.into_iter().map(|p| p - mean).collect();
    let limit = centered.iter().fold(0.0, |acc: Float, p| acc.max(p.x.abs()).max(p.y.abs()));
    match limit > 0.0 {
        true => centered.into_iter().map(|p| p * (scale / limit)).collect(),
        false => centered,
    }
}
