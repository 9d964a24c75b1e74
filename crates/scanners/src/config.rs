use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanaryConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub analyzer: AnalyzerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Built front-end bundle. Unset means API only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerSettings {
    #[serde(default = "default_binary")]
    pub binary: PathBuf,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// 2LS exits 10 when a property fails and 5 when the result is
    /// inconclusive; both still carry a usable report.
    #[serde(default = "default_accepted_exit_codes")]
    pub accepted_exit_codes: Vec<i32>,

    /// Passed before the option flags on every run.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}
fn default_max_body_bytes() -> usize {
    1024 * 1024
}
fn default_binary() -> PathBuf {
    PathBuf::from("2ls")
}
fn default_timeout_seconds() -> u64 {
    30
}
fn default_accepted_exit_codes() -> Vec<i32> {
    vec![0, 5, 10]
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            static_dir: None,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            timeout_seconds: default_timeout_seconds(),
            accepted_exit_codes: default_accepted_exit_codes(),
            extra_args: Vec::new(),
        }
    }
}

impl AnalyzerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl CanaryConfig {
    /// Reads YAML or JSON, picked by file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_file(path),
            _ => Self::from_yaml_file(path),
        }
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML config in {}", path.display()))?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON config in {}", path.display()))?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        Self::default().apply_env()
    }

    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Overrides: `CANARY_BIND`, then `PORT` (port only), `CANARY_ANALYZER`,
    /// `CANARY_TIMEOUT`, `CANARY_STATIC_DIR`.
    pub fn apply_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(bind) = lookup("CANARY_BIND") {
            self.server.bind = bind;
        }

        if let Some(port) = lookup("PORT") {
            let port: u16 = port
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {}", port))?;
            let host = self
                .server
                .bind
                .rsplit_once(':')
                .map(|(host, _)| host.to_string())
                .unwrap_or_else(|| self.server.bind.clone());
            self.server.bind = format!("{}:{}", host, port);
        }

        if let Some(binary) = lookup("CANARY_ANALYZER") {
            self.analyzer.binary = PathBuf::from(binary);
        }

        if let Some(timeout) = lookup("CANARY_TIMEOUT") {
            self.analyzer.timeout_seconds = timeout
                .trim()
                .parse()
                .with_context(|| format!("CANARY_TIMEOUT is not a number of seconds: {}", timeout))?;
        }

        if let Some(dir) = lookup("CANARY_STATIC_DIR") {
            self.server.static_dir = Some(PathBuf::from(dir));
        }

        Ok(self)
    }

    pub fn save_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

pub const EXAMPLE_CONFIG: &str = r#"
# Canary configuration

server:
  bind: 127.0.0.1:3000
  # static_dir: ./dist     # serve the built front end from here
  max_body_bytes: 1048576

analyzer:
  binary: /opt/2ls/src/2ls/2ls
  timeout_seconds: 30
  accepted_exit_codes: [0, 5, 10]
  extra_args: []
"#;
