extern crate alloc;

pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod rendering;
pub mod scene;
pub mod text;

#[cfg(test)]
mod tests;

#[doc(inline)]
pub use {
    config::GraphFile,
    config::GraphStyle,
    config::read_graph_file,
    error::Error,
    error::Result,
    geometry::BezierPath,
    geometry::Point,
    geometry::arc_path,
    geometry::truncate_arc,
    graph::Node,
    graph::draw_graph,
    layout::Layout,
    rendering::Renderer,
    scene::Scene,
};
