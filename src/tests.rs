use crate::*;
use crate::config::GraphFile;
use crate::error::SegmentEnd;
use crate::geometry::{Float, P_ZERO};
use crate::graph::{draw_graph_file, edge_curvature, edge_path, weight_label};
use crate::scene::{arrange, colors, Bounds, Corner, CurvePath, Direction, Ellipse, FontStyle, Rectangle, Shape, Text};
use crate::text::{glyph_strokes, text_size};

use petgraph::graph::{DiGraph, UnGraph};

use rgb::RGBA8;

use std::io::Write;

fn close(a: Point, b: Point) -> bool {
    (a - b).magnitude() < 1e-3
}

fn curves(scene: &Scene) -> Vec<CurvePath> {
    scene
        .shapes()
        .iter()
        .filter_map(|s| match s {
            Shape::Curve(c) => Some(*c),
            _ => None,
        })
        .collect()
}

fn texts(scene: &Scene) -> Vec<Text> {
    scene
        .shapes()
        .iter()
        .filter_map(|s| match s {
            Shape::Text(t) => Some(t.clone()),
            _ => None,
        })
        .collect()
}

fn circular_style() -> GraphStyle {
    GraphStyle {
        layout: Layout::Circular,
        layout_scale: Some(100.0),
        spread: 1.0,
        radius: 20.0,
        ..GraphStyle::default()
    }
}

#[test]
fn bounds_corners() {
    let b = Bounds::new(10.0, 20.0, 50.0, 40.0);
    assert_eq!(b.width(), 40.0);
    assert_eq!(b.height(), 20.0);
    assert_eq!(b.center(), Point::new(30.0, 30.0));
    assert_eq!(b.corner(Corner::MiddleRight), Point::new(50.0, 30.0));
    assert_eq!(b.corner(Corner::MiddleLeft), Point::new(10.0, 30.0));
    assert_eq!(b.corner(Corner::BottomLeft), Point::new(10.0, 40.0));
    assert_eq!(
        b.union(&Bounds::from_size(5.0, 5.0)),
        Bounds::new(0.0, 0.0, 50.0, 40.0)
    );
    assert!(Bounds::from_size(0.0, 10.0).is_empty());
    assert_eq!(b.translated(Point::new(-10.0, 5.0)), Bounds::new(0.0, 25.0, 40.0, 45.0));
}

#[test]
fn scene_combinators() {
    let square = Rectangle::new(Bounds::from_size(64.0, 64.0)).without_border();
    let scene = Scene::new(square).pad(8.0);
    assert_eq!(scene.bounds(), Bounds::new(-8.0, -8.0, 72.0, 72.0));

    let scene = scene.pad_right(20.0).background(colors::BLACK);
    assert_eq!(scene.bounds(), Bounds::new(-8.0, -8.0, 92.0, 72.0));
    match &scene.shapes()[0] {
        Shape::Rectangle(r) => {
            assert_eq!(r.bounds, scene.bounds());
            assert_eq!(r.fill, Some(colors::BLACK));
        }
        other => panic!("background should come first, got {:?}", other),
    }

    let scaled = Scene::new(square).scale(10.0, 10.0);
    assert_eq!(scaled.bounds(), Bounds::from_size(640.0, 640.0));

    let moved = Scene::new(square).translate(5.0, -5.0);
    assert_eq!(moved.bounds(), Bounds::new(5.0, -5.0, 69.0, 59.0));

    // padding travels with the scene
    let moved = Scene::new(square).pad(8.0).translate(1.0, 1.0);
    assert_eq!(moved.bounds(), Bounds::new(-7.0, -7.0, 73.0, 73.0));
}

#[test]
fn next_to_centers_the_other_scene() {
    let ball = Scene::new(Ellipse::circle(Point::new(100.0, 50.0), 30.0));
    let label = Scene::new(Text::new("AB", FontStyle::default()));
    let combined = ball.next_to(label);
    let t = &texts(&combined)[0];
    assert!(close(t.bounds().center(), Point::new(100.0, 50.0)));
}

#[test]
fn arrange_places_children_side_by_side() {
    let box_ = Scene::new(Rectangle::new(Bounds::from_size(64.0, 64.0)).without_border());
    let ball = Scene::new(Ellipse::new(Bounds::from_size(32.0, 32.0)).without_border());

    let arrangement = arrange([box_.clone(), ball.clone()], Direction::Horizontal, 10.0);
    assert_eq!(arrangement.child_bounds(0), Some(Bounds::new(0.0, 0.0, 64.0, 64.0)));
    assert_eq!(arrangement.child_bounds(1), Some(Bounds::new(74.0, 16.0, 106.0, 48.0)));
    assert_eq!(arrangement.child_bounds(2), None);
    assert_eq!(arrangement.scene().bounds(), Bounds::new(0.0, 0.0, 106.0, 64.0));

    let arrangement = arrange([box_, ball], Direction::Vertical, 0.0);
    assert_eq!(arrangement.child_bounds(1), Some(Bounds::new(16.0, 64.0, 48.0, 96.0)));
}

#[test]
fn text_measurement() {
    assert_eq!(text_size("12", 16.0), (20.0, 12.0));
    assert_eq!(text_size("", 16.0), (0.0, 12.0));
    assert_eq!(glyph_strokes('a'), glyph_strokes('A'));
    assert!(glyph_strokes(' ').is_empty());
    // unknown characters still draw something
    assert!(!glyph_strokes('%').is_empty());
}

#[test]
fn node_scene() {
    let node = Node::new(32.0).with_center(Point::new(10.0, 10.0)).with_text("foo");
    let scene = node.scene();
    match &scene.shapes()[0] {
        Shape::Ellipse(e) => {
            assert_eq!(e.bounds, Bounds::new(-22.0, -22.0, 42.0, 42.0));
            assert_eq!(e.fill, Some(colors::WHITE));
        }
        other => panic!("expected the ball first, got {:?}", other),
    }
    assert_eq!(texts(&scene)[0].content, "foo");
    assert_eq!(Node::new(5.0).scene().shapes().len(), 1);
}

#[test]
fn parallel_edges_fan_out() {
    assert_eq!(edge_curvature(1), 0.0);
    assert!((edge_curvature(2) - 0.15).abs() < 1e-6);
    assert!((edge_curvature(3) - 0.30).abs() < 1e-6);
}

#[test]
fn edges_stop_at_the_node_rim() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(100.0, 0.0);
    let path = edge_path(a, b, 1, 1.0, 20.0).unwrap();
    assert!(close(path.start(), Point::new(20.0, 0.0)));
    assert!(close(path.end(), Point::new(80.0, 0.0)));

    // nodes this close would reverse the edge; the truncation is clamped
    let near = Point::new(30.0, 0.0);
    let path = edge_path(a, near, 1, 1.0, 20.0).unwrap();
    assert!(close(path.start(), Point::new(15.0, 0.0)));
    assert!(close(path.end(), Point::new(15.0, 0.0)));
}

#[test]
fn label_centered_on_second_to_last_point() {
    let path = edge_path(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 2, 1.0, 10.0).unwrap();
    let label = weight_label(&path, &42, FontStyle::default());
    assert_eq!(label.content, "42");
    assert!(close(label.bounds().center(), path[2]));
}

#[test]
fn directed_graph_counts_each_direction() {
    let mut g = DiGraph::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    g.add_edge(a, b, 1);
    g.add_edge(a, b, 2);
    g.add_edge(b, a, 3);

    let scene = draw_graph(&g, &circular_style()).unwrap();
    let edges = curves(&scene);
    assert_eq!(edges.len(), 3);
    assert!(edges.iter().all(|c| c.arrowhead));

    // a sits at (100, 0) and b at (-100, 0)
    assert!(edges[0].path[1].y.abs() < 1e-3);
    assert!(edges[1].path[1].y.abs() > 1.0);
    assert!(edges[2].path[1].y.abs() < 1e-3);
    assert!(close(edges[0].path.start(), Point::new(80.0, 0.0)));
    assert!(close(edges[2].path.start(), Point::new(-80.0, 0.0)));

    let labels: Vec<String> = texts(&scene).into_iter().map(|t| t.content).collect();
    assert_eq!(labels, ["a", "b", "1", "2", "3"]);
}

#[test]
fn undirected_graph_counts_both_directions() {
    let mut g = UnGraph::new_undirected();
    let a = g.add_node(1);
    let b = g.add_node(2);
    g.add_edge(a, b, 4);
    g.add_edge(b, a, 2);

    let scene = draw_graph(&g, &circular_style()).unwrap();
    let edges = curves(&scene);
    assert_eq!(edges.len(), 2);
    assert!(edges.iter().all(|c| !c.arrowhead));
    assert!(edges[0].path[1].y.abs() < 1e-3);
    assert!(edges[1].path[1].y.abs() > 1.0);
}

#[test]
fn self_loops_are_skipped() {
    let mut g = DiGraph::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    g.add_edge(a, a, 1);
    g.add_edge(a, b, 1);
    let scene = draw_graph(&g, &circular_style()).unwrap();
    assert_eq!(curves(&scene).len(), 1);
}

#[test]
fn degenerate_edges_propagate() {
    let mut g = DiGraph::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    g.add_edge(a, b, 1);
    let style = GraphStyle {
        angularity: 0.0,
        ..circular_style()
    };
    match draw_graph(&g, &style) {
        Err(Error::DegenerateSegment(SegmentEnd::Start)) => {}
        other => panic!("unexpected {:?}", other.map(|s| s.bounds())),
    }
}

#[test]
fn hidden_weights_and_background() {
    let mut g = DiGraph::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    g.add_edge(a, b, 7);
    let style = GraphStyle {
        show_weights: false,
        background: Some(colors::YELLOW),
        ..circular_style()
    };
    let scene = draw_graph(&g, &style).unwrap();
    assert_eq!(texts(&scene).len(), 2);
    match &scene.shapes()[0] {
        Shape::Rectangle(r) => assert_eq!(r.fill, Some(colors::YELLOW)),
        other => panic!("expected a background, got {:?}", other),
    }
}

#[test]
fn render_filled_rectangle() {
    let scene = Scene::new(
        Rectangle::new(Bounds::from_size(20.0, 10.0))
            .with_fill(colors::RED)
            .without_border(),
    );
    let canvas = Renderer::new().render::<4, 16>(&scene).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (20, 10));
    assert_eq!(canvas.pixels().len(), 200);

    let center = canvas.pixel(10, 5).unwrap();
    assert!(center.r > 200 && center.g < 50 && center.b < 50 && center.a > 200);
    assert_eq!(canvas.pixel(20, 5), None);
}

#[test]
fn render_with_and_without_alpha_blending() {
    let bounds = Bounds::from_size(20.0, 10.0);
    let red = Scene::new(Rectangle::new(bounds).with_fill(colors::RED).without_border());
    let veil = Scene::new(
        Rectangle::new(bounds)
            .with_fill(RGBA8::new(0, 0, 255, 128))
            .without_border(),
    );
    let scene = Scene::compose([red, veil]);

    let blended = Renderer::new().render::<4, 16>(&scene).unwrap();
    let p = blended.pixel(10, 5).unwrap();
    assert!(p.r > 100 && p.b > 100 && p.a > 150);

    // the second rectangle replaces the first one
    let replaced = Renderer::new()
        .with_alpha_blend(false)
        .render::<4, 16>(&scene)
        .unwrap();
    let p = replaced.pixel(10, 5).unwrap();
    assert!(p.r < 10 && p.b > 100 && p.a < 100);
}

#[test]
fn render_translates_to_bounds() {
    let scene = Scene::new(Ellipse::circle(Point::new(-100.0, -100.0), 10.0).without_border())
        .pad(5.0)
        .background(colors::BLUE);
    let canvas = Renderer::new().render::<4, 16>(&scene).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (30, 30));
    let corner = canvas.pixel(1, 1).unwrap();
    assert!(corner.b > 200 && corner.r < 50);
}

#[test]
fn render_empty_scene_fails() {
    match Renderer::new().render::<4, 16>(&Scene::empty()) {
        Err(Error::EmptyScene) => {}
        other => panic!("unexpected {:?}", other.map(|c| c.width())),
    }
}

#[test]
fn render_graph_to_png() {
    let mut g = DiGraph::new();
    let a = g.add_node("A");
    let b = g.add_node("B");
    let c = g.add_node("C");
    g.add_edge(a, b, 4);
    g.add_edge(b, c, 2);
    g.add_edge(c, a, 3);

    let scene = draw_graph(&g, &GraphStyle::default()).unwrap();
    let canvas = Renderer::new().render::<4, 16>(&scene).unwrap();

    let file = tempfile::NamedTempFile::new().unwrap();
    canvas.save_png(file.path()).unwrap();

    let decoder = png::Decoder::new(std::fs::File::open(file.path()).unwrap());
    let reader = decoder.read_info().unwrap();
    assert_eq!(reader.info().width as usize, canvas.width());
    assert_eq!(reader.info().height as usize, canvas.height());
}

#[test]
fn graph_file_defaults() {
    let file = GraphFile::deserialize_ron(r#"(directed: true, edges: [("a", "b", 3)])"#).unwrap();
    assert!(file.directed);
    assert_eq!(file.style, GraphStyle::default());
    assert_eq!(file.style.layout, Layout::Arf);
    assert_eq!(file.style.layout_scale(), 32.0);
    assert_eq!(file.node_names(), ["a", "b"]);
}

#[test]
fn graph_file_overrides() {
    let txt = r#"(
        nodes: ["z"],
        edges: [("a", "b", 3), ("b", "z", 1)],
        style: (
            radius: 20.0,
            layout: Circular,
            layout_scale: Some(200.0),
            edge_color: (r: 255, g: 0, b: 0, a: 255),
        ),
    )"#;
    let file = GraphFile::deserialize_ron(txt).unwrap();
    assert!(!file.directed);
    assert_eq!(file.style.radius, 20.0);
    assert_eq!(file.style.layout, Layout::Circular);
    assert_eq!(file.style.layout_scale(), 200.0);
    assert_eq!(file.style.edge_color, colors::RED);
    assert_eq!(file.node_names(), ["z", "a", "b"]);

    let scene = draw_graph_file(&file).unwrap();
    assert_eq!(curves(&scene).len(), 2);

    let again = GraphFile::deserialize_ron(&file.serialize_ron().unwrap()).unwrap();
    assert_eq!(again, file);
}

#[test]
fn graph_file_errors() {
    match GraphFile::deserialize_ron("(directed: maybe)") {
        Err(Error::Config(_)) => {}
        other => panic!("unexpected {:?}", other),
    }

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "(edges: [(\"x\", \"y\", 1)])").unwrap();
    let read = read_graph_file(file.path()).unwrap();
    assert_eq!(read.edges.len(), 1);

    match read_graph_file("/nonexistent/graph.ron") {
        Err(Error::Io(_)) => {}
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn arc_parameters_default_to_a_straight_line() {
    let params = geometry::ArcParameters::default();
    let path = params.path(P_ZERO, Point::new(10.0, 0.0));
    assert!(path.points.iter().all(|p| p.y.abs() < 1e-6));
    let _: Float = path.max_truncation();
}
