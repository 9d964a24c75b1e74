use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::analyze::{render, OutputFormat};
use canary_scanners::OutputParser;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Saved 2LS output, or `-` for stdin
    #[arg(value_name = "OUTPUT")]
    pub input: PathBuf,

    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long)]
    pub raw: bool,
}

pub fn execute(args: ParseArgs) -> Result<()> {
    let raw = read_input(&args.input)?;
    let result = OutputParser::new().parse(&raw);
    println!("{}", render(&result, args.format, args.raw)?);
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(input).with_context(|| format!("Failed to read file: {:?}", input))
}
