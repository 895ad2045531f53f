use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Host to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Simulated network latency for demo flows, in milliseconds
    #[arg(long, env = "SIMULATED_LATENCY_MS")]
    pub simulated_latency_ms: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Knobs that fake the behaviours the original product stubbed out.
#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    /// Delay applied to login, registration, and enrollment requests to
    /// imitate network latency. Zero disables it (used by tests).
    pub simulated_latency_ms: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder();

        // Defaults
        builder = builder
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("demo.simulated_latency_ms", 800)?;

        // Config file: explicit path first, then ./config.yaml as fallback.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else if std::path::Path::new("config.yaml").exists() {
            builder = builder.add_source(File::with_name("config.yaml"));
        }

        // Environment variables prefixed with EDU_, e.g. EDU_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("EDU")
                .separator("__")
                .try_parsing(true),
        );

        // Manual override kept alongside the generic source so a bad value is
        // ignored instead of failing deserialization.
        if let Ok(val) = env::var("EDU_DEMO__SIMULATED_LATENCY_MS")
            && let Ok(ms) = val.parse::<u64>()
        {
            builder = builder.set_override("demo.simulated_latency_ms", ms)?;
        }

        // CLI overrides win over everything.
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(ms) = cli.simulated_latency_ms {
            builder = builder.set_override("demo.simulated_latency_ms", ms)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
