use floe::scene::{arrange, colors, Bounds, Direction, Ellipse, Rectangle};
use floe::{Renderer, Scene};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env::args;
use std::fs::create_dir_all;
use std::path::PathBuf;

fn main() -> floe::Result<()> {
    if let Err(e) = TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("failed to set up logging: {}", e);
    }
    let dir = PathBuf::from(args().nth(1).unwrap_or_else(|| "target/demos".into()));
    create_dir_all(&dir)?;

    // no borders and no gap: the ball touches the box
    let square = Rectangle::new(Bounds::from_size(64.0, 64.0))
        .with_fill(colors::CYAN)
        .without_border();
    let ball = Ellipse::new(Bounds::from_size(64.0, 64.0))
        .with_fill(colors::YELLOW)
        .without_border();
    let ball = Scene::new(ball).background(colors::BLACK);

    let boxball = arrange([Scene::new(square), ball], Direction::Horizontal, 0.0)
        .into_scene()
        .scale(10.0, 10.0);

    let canvas = Renderer::new().render::<4, 16>(&boxball)?;
    canvas.save_png(dir.join("boxball_tight.png"))
}
