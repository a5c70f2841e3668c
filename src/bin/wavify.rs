use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use wavify::{Bounds, HeadlessHost, Stage, WaveBatch, WaveConfig};

#[derive(Parser, Debug)]
#[command(name = "wavify", version)]
struct Cli {
    /// Log lifecycle events to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a wave batch and write one frame as SVG or PNG.
    Frame(FrameArgs),
    /// Print the sampled points and path data of one wave at a given phase.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input wave batch JSON (`{ "container": ..., "waves": [...] }`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Virtual time to simulate before capturing, in milliseconds.
    #[arg(long, default_value_t = 1000.0)]
    time_ms: f64,

    /// Host frame rate used while simulating.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Container width.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Container height.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Output path; `.png` rasterizes, anything else writes SVG.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Optional wave config JSON; defaults apply to missing fields.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Phase factor fed to the sampler.
    #[arg(long, default_value_t = 0.0)]
    phase: f64,

    /// Container width.
    #[arg(long, default_value_t = 300.0)]
    width: f64,

    /// Container height.
    #[arg(long, default_value_t = 150.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let batch = WaveBatch::from_path(&args.in_path)?;
    let bounds = Bounds::new(args.width, args.height)?;

    let host = HeadlessHost::new().with_container(batch.container.clone(), bounds);
    let mut stage = Stage::new(host);
    stage.spawn_batch(&batch)?;
    stage.run_for(args.time_ms, args.fps)?;

    let svg = wavify::snapshot_svg(stage.host(), &batch.container)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    if is_png(&args.out) {
        let frame = wavify::rasterize(&svg)?;
        wavify::write_png(&frame, &args.out)?;
    } else {
        std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let config: WaveConfig = match &args.in_path {
        Some(path) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("read wave config '{}'", path.display()))?;
            serde_json::from_str(&s).with_context(|| format!("parse '{}'", path.display()))?
        }
        None => WaveConfig::default(),
    };
    config.validate()?;

    let bounds = Bounds::new(args.width, args.height)?;
    let points = wavify::sample_points(args.phase, &config, bounds.width)?;
    let path = wavify::build_path(&points, bounds)?;

    let out = serde_json::json!({
        "phase": args.phase,
        "bounds": bounds,
        "points": points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
        "path": path.to_svg(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}
