use anyhow::{bail, Result};
use clap::Args;
use colored::*;

use canary_scanners::catalog::{self, ExampleProgram};

#[derive(Args, Debug)]
pub struct ExamplesArgs {
    /// Show a single example
    pub key: Option<String>,

    /// Print only the C source (pipe into a file for `canary analyze`)
    #[arg(long, requires = "key")]
    pub code: bool,
}

pub fn execute(args: ExamplesArgs) -> Result<()> {
    let Some(key) = args.key else {
        println!("{}", "📚 Example programs".bright_cyan().bold());
        println!("{}", "═".repeat(50).bright_cyan());
        for example in catalog::all() {
            println!(
                "  {:<18} {}",
                example.key.bright_green(),
                example.description
            );
        }
        return Ok(());
    };

    let Some(example) = catalog::find(&key) else {
        bail!(
            "Unknown example '{}'. Available: {}",
            key,
            catalog::all()
                .iter()
                .map(|e| e.key)
                .collect::<Vec<_>>()
                .join(", ")
        );
    };

    if args.code {
        print!("{}", example.code);
    } else {
        print_example(example);
    }
    Ok(())
}

fn print_example(example: &ExampleProgram) {
    println!("{}", example.name.bright_cyan().bold());
    println!("{}", example.description);
    println!("{}", "─".repeat(50).bright_cyan());
    print!("{}", example.code);
}
