use crate::analyzer::{AnalysisOptions, Analyzer, AnalyzerError};
use crate::config::AnalyzerSettings;
use async_trait::async_trait;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs the 2LS binary on a temporary copy of the submitted source.
pub struct TwoLsAnalyzer {
    settings: AnalyzerSettings,
}

impl TwoLsAnalyzer {
    pub fn new(settings: AnalyzerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    /// Full argv after the binary: extra args, option flags, then the
    /// source path as its own argument. No shell is involved.
    pub fn command_args(&self, options: &AnalysisOptions, source: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = self
            .settings
            .extra_args
            .iter()
            .map(OsString::from)
            .collect();
        args.extend(options.flags().into_iter().map(OsString::from));
        args.push(source.as_os_str().to_os_string());
        args
    }

    fn accepts(&self, code: Option<i32>) -> bool {
        if self.settings.accepted_exit_codes.is_empty() {
            return true;
        }
        code.map_or(false, |code| self.settings.accepted_exit_codes.contains(&code))
    }
}

#[async_trait]
impl Analyzer for TwoLsAnalyzer {
    fn name(&self) -> &str {
        "2ls"
    }

    async fn run(&self, code: &str, options: &AnalysisOptions) -> Result<String, AnalyzerError> {
        let mut file = tempfile::Builder::new()
            .prefix("canary-")
            .suffix(".c")
            .tempfile()
            .map_err(AnalyzerError::TempFile)?;
        file.write_all(code.as_bytes())
            .and_then(|_| file.flush())
            .map_err(AnalyzerError::TempFile)?;
        // Close our handle; the path is removed when `source` drops.
        let source = file.into_temp_path();

        let binary = &self.settings.binary;
        let args = self.command_args(options, &source);
        debug!("running {} {:?}", binary.display(), args);

        let mut command = Command::new(binary);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.settings.timeout(), command.output()).await {
            Ok(result) => result.map_err(|source| AnalyzerError::Spawn {
                binary: binary.display().to_string(),
                source,
            })?,
            Err(_) => {
                warn!(
                    "{} did not finish within {}s, killed",
                    binary.display(),
                    self.settings.timeout_seconds
                );
                return Err(AnalyzerError::Timeout(self.settings.timeout_seconds));
            }
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        let code = output.status.code();
        if !self.accepts(code) {
            warn!("{} exited with {:?}", binary.display(), code);
            return Err(AnalyzerError::ExitStatus { code, output: text });
        }

        debug!("{} exited with {:?}, {} bytes of output", binary.display(), code, text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_command_args_order() {
        let settings = AnalyzerSettings {
            extra_args: vec!["--unwind".to_string(), "3".to_string()],
            ..AnalyzerSettings::default()
        };
        let analyzer = TwoLsAnalyzer::new(settings);
        let options = AnalysisOptions::default()
            .with("heap")
            .with("bounds_check");

        let args = analyzer.command_args(&options, Path::new("/tmp/prog with space.c"));
        let expected: Vec<OsString> = [
            "--unwind",
            "3",
            "--bounds-check",
            "--heap",
            "/tmp/prog with space.c",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }

    #[test]
    fn test_exit_code_acceptance() {
        let analyzer = TwoLsAnalyzer::new(AnalyzerSettings::default());
        assert!(analyzer.accepts(Some(0)));
        assert!(analyzer.accepts(Some(10)));
        assert!(!analyzer.accepts(Some(6)));
        assert!(!analyzer.accepts(None));

        let permissive = TwoLsAnalyzer::new(AnalyzerSettings {
            accepted_exit_codes: Vec::new(),
            ..AnalyzerSettings::default()
        });
        assert!(permissive.accepts(Some(6)));
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let analyzer = TwoLsAnalyzer::new(AnalyzerSettings {
            binary: PathBuf::from("/nonexistent/canary/2ls"),
            ..AnalyzerSettings::default()
        });

        let err = analyzer
            .run("int main(){return 0;}", &AnalysisOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::Spawn { .. }), "{err}");
    }
}
