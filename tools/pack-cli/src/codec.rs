//! Single-attribute encode/decode commands

use anyhow::{Context, Result};
use clap::Args;
use nether_pack::{AttributeFormat, float_to_half_bits, half_bits_to_float};

/// Arguments for the encode command
#[derive(Args)]
pub struct EncodeArgs {
    /// Attribute format (see `nether-pack formats`)
    pub format: AttributeFormat,

    /// f32 components, in attribute order
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<f32>,
}

/// Arguments for the decode command
#[derive(Args)]
pub struct DecodeArgs {
    /// Attribute format (see `nether-pack formats`)
    pub format: AttributeFormat,

    /// Packed bytes as hex, little-endian (e.g. `0180ff7f`)
    pub hex: String,
}

/// Arguments for the half command
#[derive(Args)]
pub struct HalfArgs {
    /// f32 values to narrow to binary16
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<f32>,
}

pub fn print_formats() {
    println!("{:<18} {:>10} {:>6}", "format", "components", "bytes");
    for format in AttributeFormat::ALL {
        println!(
            "{:<18} {:>10} {:>6}",
            format.name(),
            format.components(),
            format.byte_size()
        );
    }
}

/// Pack `values` with `format` and return the bytes as hex
pub fn encode_hex(format: AttributeFormat, values: &[f32]) -> Result<String> {
    let mut bytes = Vec::with_capacity(format.byte_size());
    format
        .encode(values, &mut bytes)
        .with_context(|| format!("Failed to encode {} values as {}", values.len(), format))?;
    Ok(hex::encode(bytes))
}

/// Parse hex bytes and unpack them with `format`
pub fn decode_hex(format: AttributeFormat, text: &str) -> Result<Vec<f32>> {
    let cleaned: String = text
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();
    let bytes = hex::decode(&cleaned).with_context(|| format!("Invalid hex input: {text}"))?;
    let values = format
        .decode(&bytes)
        .with_context(|| format!("Failed to decode {} bytes as {}", bytes.len(), format))?;
    Ok(values)
}

/// One `(value, bits, widened)` row per input
pub fn half_rows(values: &[f32]) -> Vec<(f32, u16, f32)> {
    values
        .iter()
        .map(|&value| {
            let bits = float_to_half_bits(value);
            (value, bits, half_bits_to_float(bits))
        })
        .collect()
}

/// Execute the encode command
pub fn encode(args: EncodeArgs) -> Result<()> {
    let hex = encode_hex(args.format, &args.values)?;
    tracing::debug!(format = %args.format, bytes = hex.len() / 2, "encoded attribute");
    println!("{hex}");
    Ok(())
}

/// Execute the decode command
pub fn decode(args: DecodeArgs) -> Result<()> {
    let values = decode_hex(args.format, &args.hex)?;
    let text: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    println!("{}", text.join(" "));
    Ok(())
}

/// Execute the half command
pub fn half(args: HalfArgs) {
    for (value, bits, widened) in half_rows(&args.values) {
        println!("{value:>14} -> 0x{bits:04X} ({widened})");
    }
}
