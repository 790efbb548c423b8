//! CLI command implementations

pub mod convert;
pub mod info;

use anyhow::{Context, Result};
use chroma_core::ColorSpaceId;

/// Parse a color space flag value.
pub fn parse_space(value: &str, flag: &str) -> Result<ColorSpaceId> {
    value
        .parse()
        .with_context(|| format!("Invalid --{} value '{}'", flag, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space() {
        assert_eq!(parse_space("RGB", "from").unwrap(), ColorSpaceId::Rgb);
        assert_eq!(parse_space("ycc", "to").unwrap(), ColorSpaceId::YCbCr);

        let err = parse_space("lab", "to").unwrap_err();
        assert!(err.to_string().contains("--to"));
    }
}
