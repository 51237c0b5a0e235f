use floe::geometry::{Float, Point, P_ZERO};
use floe::scene::{colors, Ellipse};
use floe::{Renderer, Scene};
use rgb::RGBA8;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env::args;
use std::fs::create_dir_all;
use std::path::PathBuf;

/// A borderless disc on a black square.
struct Ball {
    radius: Float,
    center: Point,
    fill_color: RGBA8,
}

impl Ball {
    fn new(radius: Float) -> Self {
        Self {
            radius,
            center: P_ZERO,
            fill_color: colors::RED,
        }
    }

    fn scene(&self) -> Scene {
        let disc = Ellipse::circle(self.center, self.radius)
            .with_fill(self.fill_color)
            .without_border();
        Scene::new(disc).background(colors::BLACK)
    }
}

fn main() -> floe::Result<()> {
    if let Err(e) = TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("failed to set up logging: {}", e);
    }
    let dir = PathBuf::from(args().nth(1).unwrap_or_else(|| "target/demos".into()));
    create_dir_all(&dir)?;

    let canvas = Renderer::new().render::<6, 36>(&Ball::new(64.0).scene())?;
    canvas.save_png(dir.join("customball.png"))
}
