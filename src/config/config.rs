use anyhow::{Context, Result};
use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppCfg {
    #[serde(default)]
    pub input: InputCfg,
    #[serde(default)]
    pub output: OutputCfg,
    #[serde(default)]
    pub logging: LoggingCfg,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputCfg {
    /// Prediction document (backend JSON) to resolve.
    #[serde(default = "default_input_path")]
    pub path: String,
}

impl Default for InputCfg {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}
fn default_input_path() -> String {
    "prediction.json".into()
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputCfg {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputCfg {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}
fn default_pretty() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingCfg {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingCfg {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}
fn default_filter() -> String {
    "info".into()
}

impl AppCfg {
    pub fn load(path: &str) -> Result<Self> {
        Self::build(Config::builder().add_source(File::with_name(path)))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Self::build(Config::builder().add_source(File::from_str(yaml, FileFormat::Yaml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let cfg = builder
            .add_source(config::Environment::default().separator("__"))
            .build()
            .context("building config")?;

        let app: AppCfg = cfg.try_deserialize().context("deserializing config")?;
        app.validate()?;
        Ok(app)
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.input.path.trim().is_empty(), "input.path missing");
        anyhow::ensure!(
            !self.logging.filter.trim().is_empty(),
            "logging.filter must not be empty"
        );
        Ok(())
    }
}
