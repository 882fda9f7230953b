use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::palette::DEFAULT_CATALOG_PATH;

#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputMode {
    /// Print each record as it is generated, one per line
    #[default]
    Stream,
    /// Collect all records into a single JSON array
    Document,
    /// Collect all records under `{"stars": {"brightness_scale", "data"}}`
    /// for the sky renderer
    Sky,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "starpal",
    version,
    about = "Synthetic star records and GIMP palettes from material catalogs"
)]
pub struct Opts {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate random star records
    Stars(StarsArgs),
    /// Convert a JSON material catalog into a GIMP palette
    Palette(PaletteArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct StarsArgs {
    /// Number of stars to generate
    #[arg(short = 'n', long = "count", default_value_t = 100)]
    pub count: usize,

    /// Print records one at a time, or collect them into one document
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = OutputMode::Stream)]
    pub mode: OutputMode,

    /// Seed for reproducible output. If omitted, seeded from the OS.
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Pretty-print the collected output. Only valid with `document` or `sky`.
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Brightness scale written alongside the records in `sky` mode
    #[arg(long = "brightness-scale", default_value_t = 1.0)]
    pub brightness_scale: f64,

    /// Write to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct PaletteArgs {
    /// Path to the material catalog
    #[arg(default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,

    /// Write to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}
