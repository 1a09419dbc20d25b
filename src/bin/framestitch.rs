use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use framestitch::{FrameBatch, MAX_IMAGES, MIN_IMAGES, StitchOptions, decode_image, frame_rgba8, stitch};

#[derive(Parser, Debug)]
#[command(name = "framestitch", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stitch image files side by side into a PNG.
    Stitch(StitchArgs),
    /// Run a JSON job manifest.
    Job(JobArgs),
}

#[derive(Parser, Debug)]
struct StitchArgs {
    /// Input image files, left to right (2-10).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Keep original sizes instead of matching the first image's height.
    #[arg(long, default_value_t = false)]
    no_match_size: bool,
}

#[derive(Parser, Debug)]
struct JobArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(serde::Deserialize, Debug)]
struct JobSpec {
    inputs: Vec<PathBuf>,
    out: PathBuf,
    #[serde(default)]
    options: StitchOptions,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Stitch(args) => cmd_stitch(args),
        Command::Job(args) => cmd_job(args),
    }
}

fn cmd_stitch(args: StitchArgs) -> anyhow::Result<()> {
    let options = StitchOptions {
        match_image_size: !args.no_match_size,
    };
    run_job(&args.inputs, &args.out, options)
}

fn cmd_job(args: JobArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read job '{}'", args.in_path.display()))?;
    let spec: JobSpec = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse job '{}'", args.in_path.display()))?;
    run_job(&spec.inputs, &spec.out, spec.options)
}

fn run_job(inputs: &[PathBuf], out: &Path, options: StitchOptions) -> anyhow::Result<()> {
    anyhow::ensure!(
        (MIN_IMAGES..=MAX_IMAGES).contains(&inputs.len()),
        "expected between {MIN_IMAGES} and {MAX_IMAGES} inputs, got {}",
        inputs.len()
    );

    let mut images = Vec::with_capacity(inputs.len());
    for path in inputs {
        let bytes =
            std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
        images.push(decode_image(&bytes)?);
    }
    let refs: Vec<&FrameBatch> = images.iter().collect();

    let stitched = stitch(&refs, options)?;
    let rgba = frame_rgba8(&stitched, 0)?;

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        out,
        &rgba,
        stitched.width() as u32,
        stitched.height() as u32,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
