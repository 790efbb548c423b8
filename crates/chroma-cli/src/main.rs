//! chroma - convert pixel values between RGB and YCbCr
//!
//! Thin front end over `chroma-core` for checking single conversions.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "chroma")]
#[command(author, version, about = "Convert pixel values between RGB and YCbCr")]
#[command(long_about = "
Converts a single pixel value between the RGB and YCbCr color spaces
using the same typed conversion rules as the chroma-core library.

Examples:
  chroma convert 100 150 200                        # RGB -> YCbCr, 8-bit
  chroma convert --from ycbcr --to rgb 142 158 100
  chroma convert -d f32 --clamp 1.5 0.2 -0.1        # clamp input first
  chroma -vv convert -d u16 1000 2000 3000          # debug logging
  chroma info                                       # spaces and storage ranges

Logging goes to stderr. RUST_LOG overrides the -v level.
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one pixel value between color spaces
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// List color spaces and channel storage ranges
    #[command(visible_alias = "i")]
    Info,
}

/// Channel storage type selectable on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Depth {
    U8,
    U16,
    F16,
    F32,
    F64,
}

#[derive(Args)]
struct ConvertArgs {
    /// Source color space: rgb, ycbcr
    #[arg(short, long, default_value = "rgb")]
    from: String,

    /// Target color space: rgb, ycbcr
    #[arg(short, long, default_value = "ycbcr")]
    to: String,

    /// Channel storage type: u8, u16, f16, f32, f64
    #[arg(short, long, value_enum, default_value = "u8")]
    depth: Depth,

    /// Clamp input channels to the storage range before converting
    #[arg(long)]
    clamp: bool,

    /// Three channel values in source order (R G B or Y Cb Cr)
    #[arg(required = true, num_args = 3, allow_negative_numbers = true)]
    values: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Info => commands::info::run(cli.verbose),
    }
}
