//! Runs 2LS on a local C file
//!
//! Same pipeline as `POST /api/analyze`: the file is staged in a temporary
//! location, the tool runs under the configured timeout, and its output is
//! scraped into bug records.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use std::path::PathBuf;
use std::time::Instant;

use canary_scanners::core::{ReportFormat, ReportGenerator};
use canary_scanners::{AnalysisOptions, AnalysisResult, Analyzer, CanaryConfig, TwoLsAnalyzer};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub checks: CheckFlags,

    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// 2LS binary to run instead of the configured one
    #[arg(long)]
    pub analyzer: Option<PathBuf>,

    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub timeout: Option<u64>,

    /// Also print the raw tool output
    #[arg(long)]
    pub raw: bool,

    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct CheckFlags {
    #[arg(long)]
    pub bounds_check: bool,
    #[arg(long)]
    pub pointer_check: bool,
    #[arg(long)]
    pub memory_leak_check: bool,
    #[arg(long)]
    pub div_by_zero_check: bool,
    #[arg(long)]
    pub signed_overflow_check: bool,
    #[arg(long)]
    pub unsigned_overflow_check: bool,
    #[arg(long)]
    pub intervals: bool,
    #[arg(long)]
    pub k_induction: bool,
    #[arg(long)]
    pub termination: bool,
    #[arg(long)]
    pub heap: bool,
}

impl CheckFlags {
    pub fn options(&self) -> AnalysisOptions {
        AnalysisOptions {
            bounds_check: self.bounds_check,
            pointer_check: self.pointer_check,
            memory_leak_check: self.memory_leak_check,
            div_by_zero_check: self.div_by_zero_check,
            signed_overflow_check: self.signed_overflow_check,
            unsigned_overflow_check: self.unsigned_overflow_check,
            intervals: self.intervals,
            k_induction: self.k_induction,
            termination: self.termination,
            heap: self.heap,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let start = Instant::now();

    let code = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read file: {:?}", args.input))?;

    let mut config = match &args.config {
        Some(path) => CanaryConfig::from_file(path)?,
        None => CanaryConfig::default(),
    }
    .apply_env()?;
    if let Some(binary) = &args.analyzer {
        config.analyzer.binary = binary.clone();
    }
    if let Some(timeout) = args.timeout {
        config.analyzer.timeout_seconds = timeout;
    }

    let options = args.checks.options();
    let analyzer = TwoLsAnalyzer::new(config.analyzer);

    if args.format == OutputFormat::Text {
        println!("{}", "🔍 Running 2LS...".bright_blue());
        println!("📁 Analyzing: {}", args.input.display());
        let flags = options.flags();
        if !flags.is_empty() {
            println!("⚙️  Flags: {}", flags.join(" "));
        }
    }

    let result = analyzer
        .analyze(&code, &options)
        .await
        .context("Error analyzing code")?;

    let output = render(&result, args.format, args.raw)?;

    if let Some(path) = &args.output {
        std::fs::write(path, output)
            .with_context(|| format!("Failed to write report: {:?}", path))?;
    } else {
        println!("{}", output);
    }

    if args.format == OutputFormat::Text {
        println!("⏱️  Time: {:.2}s", start.elapsed().as_secs_f64());
    }

    Ok(())
}

pub fn render(result: &AnalysisResult, format: OutputFormat, raw: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result, raw)),
        OutputFormat::Json => ReportGenerator::generate(result, ReportFormat::Json),
        OutputFormat::Markdown => ReportGenerator::generate(result, ReportFormat::Markdown),
    }
}

fn render_text(result: &AnalysisResult, raw: bool) -> String {
    let mut out = String::new();

    if !result.verification_failed {
        out.push_str(&format!("\n{}\n", "✅ No bugs reported".green().bold()));
    } else if result.bugs.is_empty() {
        out.push_str(&format!(
            "\n{}\n",
            "⚠️  Verification failed, but no diagnostics were recognized".yellow()
        ));
    } else {
        out.push_str(&format!(
            "\n{}\n",
            format!("🐛 {} bug(s) found", result.bugs.len()).bright_red().bold()
        ));

        for (i, bug) in result.bugs.iter().enumerate() {
            out.push_str(&format!("\n{}. {}", i + 1, bug.bug_type.bright_red().bold()));
            if let Some(cwe) = &bug.cwe_id {
                out.push_str(&format!(" {}", format!("[CWE-{}]", cwe).yellow()));
            }
            out.push('\n');
            out.push_str(&format!("   📍 {}\n", bug.source_location.cyan()));
            out.push_str(&format!("   {}\n", bug.description));
            if let Some(desc) = &bug.cwe_description {
                out.push_str(&format!("   {}\n", desc.dimmed()));
            }
            if bug.has_trace() {
                out.push_str("   Trace:\n");
                for line in bug.trace.lines() {
                    out.push_str(&format!("     {}\n", line));
                }
            }
        }
    }

    if raw {
        out.push_str(&format!("\n{}\n", "─── 2LS output ───".dimmed()));
        out.push_str(&result.raw_output);
        if !result.raw_output.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}
