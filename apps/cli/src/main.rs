//! Reads an OFF polyhedron, runs it through the PSLG split + ear-attack
//! triangulation core, and writes the result as binary STL.
//!
//! This binary is the process-level entry point, argument handling, and
//! diagnostic text the core specification deliberately leaves unspecified
//! everything interesting happens in `triangulate-geometry` and
//! `triangulate-io`.

mod config;
mod error;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;

use config::Config;
use error::{CliError, Result};

#[derive(Parser, Debug)]
#[command(
    name = "triangulate",
    about = "Triangulates an OFF polyhedron's faces and writes binary STL"
)]
struct Args {
    /// Path to the input OFF file.
    input: PathBuf,

    /// Path to the output binary STL file.
    output: PathBuf,

    /// Tolerance for geometric predicates (overrides TRIANGULATE_EPSILON).
    #[arg(long)]
    epsilon: Option<f32>,

    /// Alignment granularity for dynamic arrays (overrides TRIANGULATE_BUCKET_BITS).
    #[arg(long)]
    bucket_bits: Option<u32>,

    /// Log verbosity (overrides RUST_LOG): error, warn, info, debug, trace.
    #[arg(long)]
    log_level: Option<String>,

    /// Triangulate faces on a rayon thread pool instead of sequentially.
    #[arg(long)]
    parallel: bool,

    /// Also write the packed GPU vertex buffer (interleaved position/normal/color) here.
    #[arg(long)]
    gpu_buffer: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::from_env();
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    if let Some(epsilon) = args.epsilon {
        config.geometry.epsilon = epsilon;
    }
    if let Some(bucket_bits) = args.bucket_bits {
        config.geometry.bucket_bits = bucket_bits;
    }

    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.clone())
        .init();

    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        epsilon = config.geometry.epsilon,
        bucket_bits = config.geometry.bucket_bits,
        parallel = args.parallel,
        "starting triangulate"
    );

    let input_file = File::open(&args.input).map_err(|source| CliError::OpenFile {
        path: args.input.display().to_string(),
        source,
    })?;
    let polyhedron = triangulate_io::off::read_off(input_file)?;

    let triangulation = if args.parallel {
        polyhedron.triangulate_parallel(config.geometry)?
    } else {
        polyhedron.triangulate(config.geometry)?
    };

    let output_file = File::create(&args.output).map_err(|source| CliError::CreateFile {
        path: args.output.display().to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(output_file);
    triangulate_io::stl::write_stl(&mut writer, &triangulation)?;

    if let Some(gpu_path) = &args.gpu_buffer {
        let bytes = triangulate_io::gpu_buffer::pack_bytes(&triangulation);
        std::fs::write(gpu_path, &bytes).map_err(|source| CliError::CreateFile {
            path: gpu_path.display().to_string(),
            source,
        })?;
    }

    tracing::info!(triangles = triangulation.len(), "done");
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
