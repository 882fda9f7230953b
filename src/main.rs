mod cli;
mod color;
mod palette;
mod stars;

#[cfg(test)]
mod color_test;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Command, Opts, OutputMode, PaletteArgs, StarsArgs};
use palette::{ColorCatalog, build_palette, render};
use stars::{generate_stars, stream_stars, write_document, write_sky_document};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the generated data
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let opts = Opts::parse();
    match opts.command {
        Command::Stars(args) => run_stars(&args),
        Command::Palette(args) => run_palette(&args),
    }
}

fn run_stars(args: &StarsArgs) -> Result<()> {
    if args.pretty && args.mode == OutputMode::Stream {
        bail!("--pretty only applies to `document` and `sky` modes");
    }

    let mut rng = match args.seed {
        Some(seed) => ChaChaRng::seed_from_u64(seed),
        None => ChaChaRng::from_rng(&mut rand::rng()),
    };
    debug!(count = args.count, seed = ?args.seed, "generating stars");

    let written = match args.mode {
        OutputMode::Stream => {
            let sink = open_sink(args.output.as_deref())?;
            stream_stars(args.count, &mut rng, sink)
        }
        OutputMode::Document => {
            let records = generate_stars(args.count, &mut rng).context("generate stars")?;
            write_document(&records, args.pretty, open_sink(args.output.as_deref())?)
        }
        OutputMode::Sky => {
            let records = generate_stars(args.count, &mut rng).context("generate stars")?;
            let sink = open_sink(args.output.as_deref())?;
            write_sky_document(&records, args.brightness_scale, args.pretty, sink)
        }
    };
    written.context("write stars")
}

fn run_palette(args: &PaletteArgs) -> Result<()> {
    let catalog = ColorCatalog::load(&args.catalog).context("load color catalog")?;
    let lines = build_palette(&catalog).context("build palette")?;
    debug!(lines = lines.len(), "built palette");

    // Only open the sink once the whole palette rendered
    let text = render(&lines);
    let mut sink = open_sink(args.output.as_deref())?;
    sink.write_all(text.as_bytes()).context("write palette")?;
    sink.flush().context("flush palette")?;
    Ok(())
}

fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
