#![cfg(unix)]

use anyhow::Result;
use canary_scanners::config::AnalyzerSettings;
use canary_scanners::{AnalysisOptions, Analyzer, AnalyzerError, TwoLsAnalyzer};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Runs the stub through `/bin/sh` so the script itself is never exec'd
/// while another test thread might still hold it open for writing.
fn stub_analyzer(dir: &Path, body: &str, timeout_seconds: u64) -> Result<TwoLsAnalyzer> {
    let script = dir.join("fake-2ls.sh");
    std::fs::write(&script, body)?;

    Ok(TwoLsAnalyzer::new(AnalyzerSettings {
        binary: PathBuf::from("/bin/sh"),
        timeout_seconds,
        extra_args: vec![script.display().to_string()],
        ..AnalyzerSettings::default()
    }))
}

const ECHO_STUB: &str = r#"
for last; do :; done
echo "ARGS: $@"
echo "SOURCE: $last"
cat "$last"
echo
echo "VERIFICATION FAILED"
echo "[main.c:7] pointer_dereference.1: NULL pointer dereference detected"
echo "diagnostics on stderr" 1>&2
exit 10
"#;

#[tokio::test]
async fn test_flags_and_source_reach_the_tool() -> Result<()> {
    let dir = TempDir::new()?;
    let analyzer = stub_analyzer(dir.path(), ECHO_STUB, 10)?;
    let options = AnalysisOptions::default()
        .with("pointer_check")
        .with("memory_leak_check")
        .with("heap");

    let code = "int main(){int*p=0;*p=1;return 0;}";
    let output = analyzer.run(code, &options).await?;

    let args_line = output
        .lines()
        .find(|l| l.starts_with("ARGS: "))
        .expect("stub printed its arguments");
    assert!(args_line.starts_with("ARGS: --pointer-check --memory-leak-check --heap /"));
    assert!(args_line.ends_with(".c"));

    assert!(output.contains(code), "source file content was passed through");
    assert!(output.contains("diagnostics on stderr"));

    let source = output
        .lines()
        .find_map(|l| l.strip_prefix("SOURCE: "))
        .expect("stub printed the source path");
    assert!(!Path::new(source).exists(), "temporary source was removed");

    let result = analyzer.analyze(code, &options).await?;
    assert_eq!(result.bugs.len(), 1);
    assert_eq!(result.bugs[0].bug_type, "Pointer Dereference");
    Ok(())
}

#[tokio::test]
async fn test_rejected_exit_status() -> Result<()> {
    let dir = TempDir::new()?;
    let analyzer = stub_analyzer(dir.path(), "echo 'PARSING ERROR'\nexit 6\n", 10)?;

    let err = analyzer
        .run("int main(", &AnalysisOptions::default())
        .await
        .unwrap_err();
    match err {
        AnalyzerError::ExitStatus { code, output } => {
            assert_eq!(code, Some(6));
            assert!(output.contains("PARSING ERROR"));
        }
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_timeout_reports_failure() -> Result<()> {
    let dir = TempDir::new()?;
    let analyzer = stub_analyzer(dir.path(), "sleep 5\necho late\n", 1)?;

    let started = std::time::Instant::now();
    let err = analyzer
        .run("int main(){for(;;);}", &AnalysisOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AnalyzerError::Timeout(1)), "{err}");
    assert!(started.elapsed() < std::time::Duration::from_secs(4));
    Ok(())
}
