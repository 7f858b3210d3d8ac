use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use color_waves::config::{FlowSpeed, GradientKind, WaveConfig};
use color_waves::wave::style::{root_properties, FLOW_KEYFRAMES};
use color_waves::WaveEngine;

/// Extract dominant colors from an image and print the CSS wave gradient.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Image source: file path, http(s) url or base64 data url
    source: String,

    /// Number of wave colors in the palette
    #[arg(short = 'n', long)]
    colors: Option<usize>,

    /// Gradient kind: linear, radial or conic
    #[arg(short, long)]
    gradient: Option<String>,

    /// Linear gradient direction, e.g. "to top" or "45deg"
    #[arg(short, long)]
    direction: Option<String>,

    /// Flow speed: slow, medium or fast
    #[arg(short, long)]
    speed: Option<String>,

    /// Optional TOML config; flags above override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also print the CSS custom properties and shared keyframes
    #[arg(long)]
    css_vars: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match args.config.as_deref() {
        Some(path) => WaveConfig::load_from(path)?,
        None => WaveConfig::default(),
    };
    if let Some(n) = args.colors {
        config.color_count = n;
    }
    if let Some(g) = args.gradient.as_deref() {
        config.gradient = GradientKind::from_str_or_linear(g);
    }
    if let Some(d) = args.direction {
        config.direction = d;
    }
    if let Some(s) = args.speed.as_deref() {
        config.flow_speed = FlowSpeed::from_str_or_medium(s);
    }

    let mut engine = WaveEngine::new(config);
    let waves = engine.create_waves(&args.source);

    println!("colors:    {}", waves.colors.join(", "));
    println!("css:       {}", waves.css);
    println!("mood:      {}", waves.mood);
    println!("intensity: {}", waves.intensity);
    println!("harmony:   {:.2}", waves.harmony);
    println!("flowing:   {}", waves.is_flowing);
    if let Some(err) = &waves.error {
        println!("error:     {err}");
    }

    if args.css_vars {
        println!();
        for (name, value) in root_properties(&waves) {
            println!("{name}: {value};");
        }
        println!("{FLOW_KEYFRAMES}");
    }

    Ok(())
}
