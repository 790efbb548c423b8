//! Info command: supported color spaces and storage ranges.

use anyhow::Result;
use chroma_core::f16;
use chroma_core::{ChannelValue, ColorSpaceId, NumericKind};
use std::fmt::Display;
use tracing::trace;

/// Runs the info command.
pub fn run(verbose: u8) -> Result<()> {
    trace!("info::run");

    println!("Color spaces:");
    for space in ColorSpaceId::ALL {
        println!("  {:<6} {}", space, space.channel_names().join(", "));
    }

    println!();
    println!("Storage:");
    println!("  {}", describe::<u8>("u8"));
    println!("  {}", describe::<u16>("u16"));
    println!("  {}", describe::<f16>("f16"));
    println!("  {}", describe::<f32>("f32"));
    println!("  {}", describe::<f64>("f64"));

    if verbose > 0 {
        println!();
        println!("Integer results truncate toward zero before clamping.");
        println!("Chroma bias is 128 for every storage type.");
    }

    Ok(())
}

/// One line describing the clamp policy of storage type `T`.
fn describe<T: ChannelValue + Display>(name: &str) -> String {
    let kind = match T::KIND {
        NumericKind::Integral => "integral",
        NumericKind::Floating => "floating",
        NumericKind::Opaque => "opaque",
    };
    let range = match T::bounds() {
        Some((low, high)) => format!("[{}, {}]", low, high),
        None => "unbounded".to_string(),
    };
    format!("{:<4} {:<9} {:<12} bias {}", name, kind, range, T::CHROMA_BIAS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let line = describe::<u8>("u8");
        assert!(line.contains("integral"));
        assert!(line.contains("[0, 255]"));

        let line = describe::<f32>("f32");
        assert!(line.contains("floating"));
        assert!(line.contains("[0, 1]"));
    }
}
