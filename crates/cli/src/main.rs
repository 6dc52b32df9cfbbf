//! geobuffer CLI - buffer point sites and report overlapping pairs

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use geobuffer_algorithms::vector::{
    BufferGenerator, BufferParams, OverlapDetector, OverlapPair, PlanarGeometry,
};
use geobuffer_core::io::{read_sites, ExportFormat};
use geobuffer_core::vector::reference_sites;
use geobuffer_core::{Algorithm, Buffer, LabeledPoint, Site};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "geobuffer")]
#[command(author, version, about = "Buffer point sites and report overlapping pairs", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Buffer sites, write the buffers to a file and report overlaps
    Analyze {
        #[command(flatten)]
        buffer: BufferArgs,
        /// Output file
        #[arg(short, long, default_value = "buffers.geojson")]
        output: PathBuf,
        /// Output layout: lines (one geometry per line), collection
        #[arg(short, long, default_value = "lines")]
        format: String,
    },
    /// Report overlapping sites without writing any file
    Overlaps {
        #[command(flatten)]
        buffer: BufferArgs,
    },
    /// List the input sites
    Sites {
        /// JSON file with [{"name", "lon", "lat"}, ...] (default: reference hospitals)
        #[arg(long)]
        sites: Option<PathBuf>,
    },
}

#[derive(Args)]
struct BufferArgs {
    /// JSON file with [{"name", "lon", "lat"}, ...] (default: reference hospitals)
    #[arg(long)]
    sites: Option<PathBuf>,
    /// Buffer radius, in the same units as the site coordinates
    #[arg(short, long, default_value = "5000")]
    radius: f64,
    /// Number of segments approximating each buffer circle
    #[arg(short, long, default_value = "32")]
    segments: usize,
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn load_sites(path: Option<&Path>) -> Result<Vec<Site>> {
    match path {
        Some(path) => read_sites(path)
            .with_context(|| format!("Failed to read sites from {}", path.display())),
        None => Ok(reference_sites()),
    }
}

fn build_buffers(args: &BufferArgs, provider: &PlanarGeometry) -> Result<Vec<Buffer>> {
    let sites = load_sites(args.sites.as_deref())?;
    info!("Sites: {}", sites.len());

    let points = sites
        .iter()
        .map(|site| site.to_labeled(provider))
        .collect::<geobuffer_core::Result<Vec<LabeledPoint>>>()
        .context("Invalid site coordinates")?;

    BufferGenerator::new(*provider)
        .execute(points, BufferParams { distance: args.radius })
        .context("Failed to buffer sites")
}

fn detect(buffers: Vec<Buffer>, provider: &PlanarGeometry) -> Result<Vec<OverlapPair>> {
    OverlapDetector::new(*provider)
        .execute_default(buffers)
        .context("Overlap detection failed")
}

const REPORT_HEADER: &str = "Sites in overlapping areas:";

fn write_overlaps<W: Write>(out: &mut W, pairs: &[OverlapPair]) -> std::io::Result<()> {
    writeln!(out, "{}", REPORT_HEADER)?;
    for pair in pairs {
        writeln!(out, "{}", pair)?;
    }
    Ok(())
}

fn print_overlaps(pairs: &[OverlapPair]) -> Result<()> {
    write_overlaps(&mut std::io::stdout().lock(), pairs).context("Failed to print report")
}

fn done(elapsed: std::time::Duration) {
    println!("  Processing time: {:.2?}", elapsed);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            buffer,
            output,
            format,
        } => {
            let format: ExportFormat = format.parse().context("Invalid output format")?;
            let provider = PlanarGeometry::new(buffer.segments);
            let start = Instant::now();

            let buffers = build_buffers(&buffer, &provider)?;

            let pb = spinner("Writing output...");
            let written = format
                .exporter(&output)
                .export(&buffers)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            pb.finish_and_clear();
            info!("Wrote {} buffers ({})", written, format);
            println!("Buffers have been saved to {}", output.display());

            let pairs = detect(buffers, &provider)?;
            print_overlaps(&pairs)?;
            done(start.elapsed());
        }

        Commands::Overlaps { buffer } => {
            let provider = PlanarGeometry::new(buffer.segments);
            let start = Instant::now();

            let buffers = build_buffers(&buffer, &provider)?;
            let pairs = detect(buffers, &provider)?;
            print_overlaps(&pairs)?;
            done(start.elapsed());
        }

        Commands::Sites { sites } => {
            for site in load_sites(sites.as_deref())? {
                println!("{}: ({:.6}, {:.6})", site.name, site.lon, site.lat);
            }
        }
    }

    Ok(())
}
