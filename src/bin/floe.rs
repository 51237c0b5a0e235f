use clap::Parser;
use floe::graph::draw_graph_file;
use floe::{read_graph_file, Renderer};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[clap(author, version, about = "Render a RON graph description to PNG", long_about = None)]
struct Args {
    /// Graph description file
    #[clap(value_parser)]
    graph: PathBuf,
    /// Output image; defaults to the input name with a .png extension
    #[clap(short, long)]
    output: Option<PathBuf>,
    /// Supersampling factor per axis (1, 2, 4 or 6)
    #[clap(long, default_value = "4", value_parser = parse_ssaa)]
    ssaa: Ssaa,
    /// Log debug information
    #[clap(short, long)]
    verbose: bool,
}

/// Supported supersampling factors; each maps to one `render` instantiation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Ssaa {
    X1,
    X2,
    X4,
    X6,
}

fn parse_ssaa(arg: &str) -> Result<Ssaa, String> {
    match arg.trim() {
        "1" => Ok(Ssaa::X1),
        "2" => Ok(Ssaa::X2),
        "4" => Ok(Ssaa::X4),
        "6" => Ok(Ssaa::X6),
        other => Err(format!("unsupported supersampling factor {:?}, expected 1, 2, 4 or 6", other)),
    }
}

fn run(args: &Args) -> floe::Result<()> {
    let file = read_graph_file(&args.graph)?;
    let scene = draw_graph_file(&file)?;

    let mut renderer = Renderer::new();
    let canvas = match args.ssaa {
        Ssaa::X1 => renderer.render::<1, 1>(&scene)?,
        Ssaa::X2 => renderer.render::<2, 4>(&scene)?,
        Ssaa::X4 => renderer.render::<4, 16>(&scene)?,
        Ssaa::X6 => renderer.render::<6, 36>(&scene)?,
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.graph.with_extension("png"));
    canvas.save_png(output)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("failed to set up logging: {}", e);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
