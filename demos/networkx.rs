use floe::scene::colors;
use floe::{draw_graph, GraphStyle, Node, Renderer};
use petgraph::graph::UnGraph;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env::args;
use std::fs::create_dir_all;
use std::path::PathBuf;

fn main() -> floe::Result<()> {
    if let Err(e) = TermLogger::init(LevelFilter::Debug, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("failed to set up logging: {}", e);
    }
    let dir = PathBuf::from(args().nth(1).unwrap_or_else(|| "target/demos".into()));
    create_dir_all(&dir)?;
    let mut renderer = Renderer::new();

    let node = Node::new(32.0).with_text("foo").scene().pad(4.0).background(colors::WHITE);
    renderer.render::<4, 16>(&node)?.save_png(dir.join("networkx_node.png"))?;

    let mut g = UnGraph::new_undirected();
    let a = g.add_node("A");
    let b = g.add_node("B");
    let c = g.add_node("C");
    let d = g.add_node("D");
    g.add_edge(a, b, 4);
    g.add_edge(b, d, 2);
    g.add_edge(a, c, 3);
    g.add_edge(c, d, 4);

    let style = GraphStyle {
        background: Some(colors::WHITE),
        ..GraphStyle::default()
    };
    let graph = draw_graph(&g, &style)?;
    renderer.render::<4, 16>(&graph)?.save_png(dir.join("networkx_graph.png"))
}
