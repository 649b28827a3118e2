//! Prints the two GF(2⁸) tables found on pages 191–193 of “W. H. Bussey,
//! Tables of Galois fields of order less than 1,000. Bulletin of the
//! American Mathematical Society, 16(4):188–206, 1910”.

use anyhow::{Context, Result};
use clap::Parser;
use gf256::{Field, Irreducible, Num};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gf256", about = "Print the non-zero elements of GF(2⁸) in CSV form")]
struct Cli {
    /// Irreducible polynomial bitmask (decimal or 0x-prefixed hex).
    #[arg(long, default_value = "0x11d", value_parser = parse_bitmask)]
    polynomial: u16,

    /// Multiplicative generator (decimal or 0x-prefixed hex).
    #[arg(long, default_value = "0x2", value_parser = parse_generator)]
    generator: u8,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let field = Field::new(Irreducible::new(cli.polynomial), Num::new(cli.generator))
        .with_context(|| {
            format!(
                "cannot construct GF(2⁸) from polynomial {:#x} and generator {:#x}",
                cli.polynomial, cli.generator
            )
        })?;
    print_tables(&field);
    Ok(())
}

/// Print the 255 non-zero elements, once ordered by exponent and once
/// ordered by bit-pattern string (shorter patterns first).
fn print_tables(field: &Field) {
    let by_exponent: Vec<(i64, String)> =
        (0..256).map(|i| (i, field.exp(i).to_string())).collect();

    let mut by_bit_pattern = by_exponent.clone();
    by_bit_pattern.sort_by_key(|(_, pattern)| (pattern.len(), pattern.clone()));

    // The exponents 0 and 255 both map to the unit; row 0 is skipped in
    // both orderings so each non-zero element appears exactly once.
    println!("λ,αβγδεζηθ,λ,αβγδεζηθ");
    for i in 1..256 {
        println!(
            "{},{},{},{}",
            by_exponent[i].0, by_exponent[i].1, by_bit_pattern[i].0, by_bit_pattern[i].1
        );
    }
}

fn parse_bitmask(s: &str) -> Result<u16, String> {
    parse_int(s).map_err(|err| format!("invalid polynomial bitmask '{}': {}", s, err))
}

fn parse_generator(s: &str) -> Result<u8, String> {
    let value = parse_int(s).map_err(|err| format!("invalid generator '{}': {}", s, err))?;
    u8::try_from(value).map_err(|_| format!("generator '{}' does not fit in 8 bits", s))
}

/// Parse a decimal or 0x-prefixed hexadecimal integer.
fn parse_int(s: &str) -> Result<u16, std::num::ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    }
}
