//! bendish - arrange a layout document and print the result.
//!
//! ```text
//! bendish panel.json --width 1280 --height 720
//! bendish panel.json --draw --config theme.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use bendish::{Area, Arranger, DrawList, LayoutConfig, LayoutDocument, Rect, Size};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bendish", version, about = "Arrange a layout document and print resolved rectangles")]
struct Args {
    /// Layout document (JSON).
    layout: PathBuf,

    /// Area width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Area height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Layout configuration (JSON). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the draw list instead of the resolved rectangles.
    #[arg(long)]
    draw: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

/// One line of the rectangle report.
#[derive(Debug, Serialize)]
struct NodeReport<'a> {
    id: &'a str,
    depth: usize,
    rect: Rect,
    #[serde(skip_serializing_if = "is_zero")]
    overflow: Size,
}

fn is_zero(size: &Size) -> bool {
    *size == Size::ZERO
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "bendish=debug" } else { "bendish=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = match &args.config {
        Some(path) => LayoutConfig::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => LayoutConfig::default(),
    };

    let text = std::fs::read_to_string(&args.layout)
        .with_context(|| format!("Failed to read '{}'", args.layout.display()))?;
    let document = LayoutDocument::from_json_str(&text)
        .with_context(|| format!("Failed to parse '{}'", args.layout.display()))?;

    let mut area = Area::new();
    let labels = document.build(&mut area).context("Invalid layout document")?;

    let root = Rect::new(0.0, 0.0, args.width, args.height);
    let arranger = Arranger::new(config);
    let arrangement = arranger.arrange(&area, root).context("Arrangement failed")?;
    tracing::info!(nodes = arrangement.len(), "arranged {}", args.layout.display());

    let json = if args.draw {
        let list = DrawList::build(&arrangement, &arranger.config().theme, None)?;
        serde_json::to_string_pretty(&list)?
    } else {
        let report: Vec<NodeReport> = arrangement
            .iter()
            .map(|node| NodeReport {
                id: labels.get(&node.handle).map(String::as_str).unwrap_or("?"),
                depth: node.depth,
                rect: node.rect,
                overflow: node.overflow(),
            })
            .collect();
        serde_json::to_string_pretty(&report)?
    };

    println!("{json}");
    Ok(())
}
