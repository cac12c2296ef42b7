//! Entity Cloud CLI
//!
//! Usage:
//!   entity-cloud [OPTIONS] [FILE]
//!
//! Options:
//!   -s, --stylesheet <FILE>  Stylesheet file for category colors (TOML format)
//!       --seed <N>           Seed for font sizes and placement
//!       --width <PX>         Canvas width
//!       --height <PX>        Canvas height
//!       --padding <PX>       Gap between words
//!       --spiral <KIND>      archimedean or rectangular
//!       --drop-overflow      Leave out words that do not fit the canvas
//!       --pointer <PTR>      JSON pointer to the entities object
//!       --html               Emit the container HTML fragment
//!   -d, --debug              Log every word placement to stderr
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use entity_cloud::layout::{OverflowPolicy, Spiral};
use entity_cloud::{
    CategorizedEntities, CloudConfig, CloudTarget, InputError, RenderConfig, WordCloudRenderer,
};

#[derive(Clone, Copy, ValueEnum)]
enum SpiralArg {
    Archimedean,
    Rectangular,
}

impl From<SpiralArg> for Spiral {
    fn from(arg: SpiralArg) -> Self {
        match arg {
            SpiralArg::Archimedean => Spiral::Archimedean,
            SpiralArg::Rectangular => Spiral::Rectangular,
        }
    }
}

#[derive(Parser)]
#[command(name = "entity-cloud")]
#[command(about = "Render categorized entities as an SVG word cloud")]
struct Cli {
    /// Input JSON file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Stylesheet file for category colors (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Seed for font sizes and placement
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 600.0)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 400.0)]
    height: f64,

    /// Minimum gap between words
    #[arg(long, default_value_t = 5.0)]
    padding: f64,

    /// Spiral used to search for free space
    #[arg(long, value_enum, default_value_t = SpiralArg::Archimedean)]
    spiral: SpiralArg,

    /// Leave out words that do not fit instead of placing them past the edge
    #[arg(long)]
    drop_overflow: bool,

    /// JSON pointer to the entities object (e.g. /entities)
    #[arg(long)]
    pointer: Option<String>,

    /// Emit the container HTML fragment instead of a standalone SVG
    #[arg(long)]
    html: bool,

    /// Log every word placement to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let overflow = if cli.drop_overflow {
        OverflowPolicy::Drop
    } else {
        OverflowPolicy::Extend
    };
    let mut config = RenderConfig::new()
        .with_cloud(
            CloudConfig::new()
                .with_size(cli.width, cli.height)
                .with_padding(cli.padding)
                .with_spiral(cli.spiral.into())
                .with_overflow(overflow),
        )
        .with_seed(cli.seed);

    if let Some(path) = &cli.stylesheet {
        config = match config.load_stylesheet(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };
    }

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let parsed = match &cli.pointer {
        Some(pointer) => CategorizedEntities::from_json_pointer(&source, pointer),
        None => CategorizedEntities::from_json(&source),
    };
    let entities = match parsed {
        Ok(entities) => entities,
        Err(e) => {
            report_input_error(&e, &source, &filename);
            std::process::exit(1);
        }
    };

    let renderer = WordCloudRenderer::new(config);
    let mut target = CloudTarget::new();
    if let Err(e) = renderer.render(&mut target, &entities) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let svg_config = &renderer.config().svg;
    if cli.html {
        println!("{}", target.to_html(svg_config));
    } else if target.is_visible() {
        if let Some(svg) = target.svg(svg_config) {
            println!("{}", svg);
        }
    } else if let Some(message) = target.message() {
        println!("{}", message);
    }
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn report_input_error(error: &InputError, source: &str, filename: &str) {
    eprint!("{}", error.format(source, filename));
}

fn print_intro() {
    println!(
        r#"Entity Cloud - word clouds for categorized entities

USAGE:
    entity-cloud [OPTIONS] [FILE]
    echo '<json>' | entity-cloud

INPUT:
    A JSON object mapping category names to lists of strings:
    {{"PERSON": ["Alice", "Bob"], "ORG": ["Acme Corp"], "DATE": []}}

OPTIONS:
    -s, --stylesheet   Category colors (TOML file)
    --seed <N>         Seed for font sizes and placement (default 0)
    --width/--height   Canvas size (default 600x400)
    --padding <PX>     Gap between words (default 5)
    --spiral <KIND>    archimedean (default) or rectangular
    --drop-overflow    Leave out words that do not fit
    --pointer <PTR>    Read entities from a nested field, e.g. /entities
    --html             Emit the container HTML fragment
    -d, --debug        Log word placement to stderr
    -h, --help         Print help

QUICK START:
    echo '{{"PERSON": ["Alice", "Bob"]}}' | entity-cloud > cloud.svg"#
    );
}
