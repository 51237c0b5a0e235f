use floe::geometry::Point;
use floe::scene::{arrange, colors, Bounds, Corner, CurvePath, Direction, Ellipse, PathStyle, Rectangle};
use floe::{Error, Renderer, Scene};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env::args;
use std::fs::create_dir_all;
use std::path::PathBuf;

const FPS: usize = 50;
const DURATION: f32 = 1.0;

fn main() -> floe::Result<()> {
    if let Err(e) = TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("failed to set up logging: {}", e);
    }
    let dir = PathBuf::from(args().nth(1).unwrap_or_else(|| "target/demos/arrow".into()));
    create_dir_all(&dir)?;

    let size = 64.0;
    let square = Rectangle::new(Bounds::from_size(size, size))
        .with_fill(colors::CYAN)
        .without_border();
    let ball = Ellipse::new(Bounds::from_size(size, size))
        .with_fill(colors::YELLOW)
        .without_border();
    let ball = Scene::new(ball).background(colors::BLACK);

    let arrangement = arrange([Scene::new(square).pad_right(200.0), ball], Direction::Horizontal, 0.0);
    let padded = arrangement.child_bounds(0).ok_or(Error::EmptyScene)?;
    let ball_bounds = arrangement.child_bounds(1).ok_or(Error::EmptyScene)?;
    // the square's right edge, not the padding's
    let start = Point::new(padded.left + size, padded.center().y);
    let end = ball_bounds.corner(Corner::MiddleLeft);

    let style = PathStyle::new(colors::WHITE, 5.0);
    let frames = (FPS as f32 * DURATION) as usize;
    let mut renderer = Renderer::new();
    for frame in 0..frames {
        let t = frame as f32 / (frames - 1) as f32;
        let arrow = CurvePath::arrow(start, end, style).with_partial_end(0.3 + 0.7 * t);

        let scene = Scene::compose([arrangement.scene().clone(), Scene::new(arrow)])
            .background(colors::BLACK)
            .scale(2.0, 2.0);

        let canvas = renderer.render::<4, 16>(&scene)?;
        canvas.save_png(dir.join(format!("arrow_{:03}.png", frame)))?;
    }

    Ok(())
}
