//! Estimates heating-cable length for the region outlined by the first path
//! of an SVG file.
//!
//! ```text
//! cable-infill floor.svg                      # radii from config/defaults (2, 4)
//! cable-infill floor.svg -r 1.5,3 --json
//! cable-infill floor.svg -c infill.toml --inset-side right
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use cable_infill::{InfillConfig, InfillEstimate, InsetSide, SvgDocument};

#[derive(Parser, Debug)]
#[command(name = "cable-infill")]
#[command(about = "Estimate serpentine cable length for a region outlined in an SVG")]
#[command(version)]
struct Cli {
    /// SVG file whose first path outlines the region
    svg: PathBuf,

    /// Spacing radii to evaluate (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    radius: Vec<f64>,

    /// Step between offset lines as a multiple of the radius
    #[arg(short = 'm', long)]
    spacing_multiplier: Option<f64>,

    /// Side of each boundary edge the cable is laid on
    #[arg(long, value_enum)]
    inset_side: Option<SideArg>,

    /// TOML config file (radii, spacing_multiplier, inset_side)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    Left,
    Right,
}

impl From<SideArg> for InsetSide {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Left => Self::Left,
            SideArg::Right => Self::Right,
        }
    }
}

impl Cli {
    /// Config file (or defaults) with command-line values applied on top.
    fn resolve_config(&self) -> Result<InfillConfig> {
        let mut config = match &self.config {
            Some(path) => InfillConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => InfillConfig::default(),
        };
        if !self.radius.is_empty() {
            config.radii.clone_from(&self.radius);
        }
        if let Some(m) = self.spacing_multiplier {
            config.spacing_multiplier = m;
        }
        if let Some(side) = self.inset_side {
            config.inset_side = side.into();
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this crate.
    // Override with RUST_LOG (e.g. RUST_LOG=cable_infill=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("cable_infill=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let document = SvgDocument::load(&cli.svg)?;
    let path_data = document
        .first_path_data()
        .with_context(|| format!("reading boundary from {}", cli.svg.display()))?;

    let result = InfillEstimate::from_config(path_data, &config)
        .execute()
        .with_context(|| format!("estimating cable length for {}", cli.svg.display()))?;
    info!(radii = result.len(), "estimate complete");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for entry in &result {
            println!("radius {}: {:.3}", entry.radius, entry.length);
        }
    }

    Ok(())
}
