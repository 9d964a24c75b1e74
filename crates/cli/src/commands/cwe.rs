use anyhow::Result;
use colored::*;

use canary_scanners::core::CWE_TABLE;

pub fn execute() -> Result<()> {
    println!("{}", "🏷️  CWE mapping".bright_cyan().bold());
    println!("{}", "═".repeat(50).bright_cyan());

    for entry in CWE_TABLE.iter() {
        println!(
            "{:<18} {}",
            entry.category.key().bright_green(),
            entry.label().yellow().bold()
        );
        println!("{:<18} {}", "", entry.description);
        println!("{:<18} {}", "", entry.reference_url().dimmed());
    }
    Ok(())
}
