//! RON configuration for graph drawings.
//!
//! A [`GraphFile`] describes a whole drawing:
//!
//! ```ron
//! (
//!     directed: true,
//!     edges: [("1", "3", 3), ("3", "4", 4), ("1", "2", 4), ("2", "1", 2)],
//!     style: (layout: Circular, layout_scale: Some(200.0), spread: 1.0),
//! )
//! ```
//!
//! Every field is optional; missing ones take the defaults below.

use crate::error::{Error, Result};
use crate::geometry::Float;
use crate::layout::Layout;
use crate::scene::colors;

use rgb::RGBA8;

use serde::{Deserialize, Serialize};

use alloc::{string::String, vec::Vec};
use std::fs::read_to_string;
use std::path::Path;

/// How [`draw_graph`](crate::graph::draw_graph) lays out and paints a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphStyle {
    /// Node radius; also how far edges are pulled back from node centers.
    pub radius: Float,
    pub fill_color: RGBA8,
    pub border_color: RGBA8,
    pub edge_color: RGBA8,
    pub edge_thickness: Float,
    pub font_size: Float,
    pub font_color: RGBA8,
    /// See [`ArcParameters`](crate::geometry::ArcParameters).
    pub angularity: Float,
    pub layout: Layout,
    /// Passed to the layout; defaults to `radius`.
    pub layout_scale: Option<Float>,
    /// Multiplies layout positions to get node centers.
    pub spread: Float,
    pub show_weights: bool,
    pub padding: Float,
    pub background: Option<RGBA8>,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            radius: 32.0,
            fill_color: colors::WHITE,
            border_color: colors::BLACK,
            edge_color: colors::BLACK,
            edge_thickness: 1.0,
            font_size: 16.0,
            font_color: colors::BLACK,
            angularity: 1.0,
            layout: Layout::Arf,
            layout_scale: None,
            spread: 2.0,
            show_weights: true,
            padding: 10.0,
            background: None,
        }
    }
}

impl GraphStyle {
    pub fn layout_scale(&self) -> Float {
        self.layout_scale.unwrap_or(self.radius)
    }
}

/// A graph and its style, as read from a RON file. Nodes named only in
/// `edges` are added in order of first appearance after `nodes`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphFile {
    pub directed: bool,
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String, i64)>,
    pub style: GraphStyle,
}

impl GraphFile {
    pub fn deserialize_ron(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }

    pub fn serialize_ron(&self) -> Result<String> {
        let pretty = ron::ser::PrettyConfig::default();
        ron::ser::to_string_pretty(self, pretty).map_err(|e| Error::Config(e.to_string()))
    }

    /// Node names in insertion order, explicit nodes first.
    pub fn node_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let endpoints = self.edges.iter().flat_map(|(a, b, _)| [a.as_str(), b.as_str()]);
        for name in self.nodes.iter().map(String::as_str).chain(endpoints) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

/// Read a graph description from a RON file.
pub fn read_graph_file(path: impl AsRef<Path>) -> Result<GraphFile> {
    let content = read_to_string(path.as_ref())?;
    GraphFile::deserialize_ron(&content)
}
