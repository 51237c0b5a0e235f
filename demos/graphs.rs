use floe::geometry::{arc_path, Point};
use floe::layout::Layout;
use floe::scene::{colors, CurvePath, PathStyle};
use floe::{draw_graph, GraphStyle, Node, Renderer, Scene};
use petgraph::graph::DiGraph;
use rgb::RGBA8;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::collections::HashMap;
use std::env::args;
use std::fs::create_dir_all;
use std::path::PathBuf;

fn curve(bend: f32, angularity: f32, color: RGBA8) -> Scene {
    let path = arc_path(Point::new(0.0, 0.0), Point::new(100.0, 0.0), bend, angularity);
    Scene::new(CurvePath::new(path, PathStyle::new(color, 1.0)))
}

fn main() -> floe::Result<()> {
    if let Err(e) = TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("failed to set up logging: {}", e);
    }
    let dir = PathBuf::from(args().nth(1).unwrap_or_else(|| "target/demos".into()));
    create_dir_all(&dir)?;
    let mut renderer = Renderer::new();

    // the same pair of points under different bends and angularities
    let arcs = Scene::compose([
        Node::new(20.0).with_center(Point::new(0.0, 0.0)).scene(),
        Node::new(20.0).with_center(Point::new(100.0, 0.0)).scene(),
        curve(0.5, 0.5, colors::BLACK),
        curve(1.0, 0.5, colors::RED),
        curve(1.0, 1.0, colors::BLUE),
        curve(1.0, 2.0, colors::CYAN),
        curve(0.5, 3.0, colors::MAGENTA),
    ])
    .pad(20.0)
    .background(colors::WHITE);
    renderer.render::<4, 16>(&arcs)?.save_png(dir.join("graphs_arcs.png"))?;

    let mut g = DiGraph::new();
    let mut nodes = HashMap::new();
    let edges = [
        (1, 3, 3),
        (3, 4, 4),
        (2, 5, 2),
        (1, 2, 4),
        (2, 1, 2),
        (1, 4, 1),
        (2, 3, 1),
        (5, 6, 1),
        (1, 5, 1),
        (6, 4, 1),
        (6, 3, 1),
        (2, 4, 1),
        (7, 5, 1),
        (8, 9, 1),
    ];
    for (a, b, weight) in edges {
        let a = *nodes.entry(a).or_insert_with(|| g.add_node(a));
        let b = *nodes.entry(b).or_insert_with(|| g.add_node(b));
        g.add_edge(a, b, weight);
    }

    let style = GraphStyle {
        layout: Layout::Circular,
        layout_scale: Some(200.0),
        spread: 1.0,
        background: Some(colors::WHITE),
        ..GraphStyle::default()
    };
    let network = draw_graph(&g, &style)?;
    renderer.render::<4, 16>(&network)?.save_png(dir.join("graphs_network.png"))
}
