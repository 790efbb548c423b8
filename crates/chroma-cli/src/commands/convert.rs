//! Pixel conversion command.
//!
//! Parses three channel values in the requested storage type, wraps them in
//! an `AnyPixel` tagged with `--from`, and converts to `--to`.

use crate::{ConvertArgs, Depth};
use anyhow::{Context, Result};
use chroma_core::f16;
use chroma_core::{AnyPixel, ChannelValue, ColorSpaceId};
use std::fmt::Display;
use std::str::FromStr;
use tracing::{debug, info, trace};

/// Runs the convert command.
pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    trace!(depth = ?args.depth, values = ?args.values, "convert::run");

    let from = super::parse_space(&args.from, "from")?;
    let to = super::parse_space(&args.to, "to")?;

    let (input, output) = match args.depth {
        Depth::U8 => convert_as::<u8>(&args.values, from, to, args.clamp)?,
        Depth::U16 => convert_as::<u16>(&args.values, from, to, args.clamp)?,
        Depth::F16 => convert_as::<f16>(&args.values, from, to, args.clamp)?,
        Depth::F32 => convert_as::<f32>(&args.values, from, to, args.clamp)?,
        Depth::F64 => convert_as::<f64>(&args.values, from, to, args.clamp)?,
    };

    if verbose > 0 {
        println!("{} -> {}", input, output);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Converts `values` as storage type `T`, returning the input and output lines.
fn convert_as<T>(
    values: &[String],
    from: ColorSpaceId,
    to: ColorSpaceId,
    clamp: bool,
) -> Result<(String, String)>
where
    T: ChannelValue + FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let parsed = values
        .iter()
        .map(|v| {
            v.trim()
                .parse::<T>()
                .with_context(|| format!("Invalid channel value '{}'", v))
        })
        .collect::<Result<Vec<T>>>()?;

    let mut pixel = AnyPixel::try_from_slice(from, &parsed)?;
    if clamp {
        pixel = pixel.clamped();
        debug!(%pixel, "Clamped input");
    }

    let converted = pixel.convert_to(to);
    info!(%from, %to, input = %pixel, output = %converted, "Converted pixel");

    Ok((pixel.to_string(), converted.to_string()))
}
