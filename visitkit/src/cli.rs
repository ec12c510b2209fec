use clap::{Parser, ValueEnum};
use vk_core::Result;
use vk_visitors::Operation;

use visitkit::{sample_collections, Collection, SessionConfig};

/// visitkit: apply the sum, product, and XOR visitors to element collections
#[derive(Parser, Debug)]
#[command(name = "visitkit")]
#[command(
    about = "Apply sum, product, and XOR-checksum visitors to element collections",
    long_about = None
)]
pub struct Cli {
    /// Collection of `;`-separated element literals: `4.5`, `[1, 2]`, `"text\x02"`.
    /// Repeat for several collections; without any, the sample collections run.
    #[arg(short, long = "collection", value_name = "ELEMENTS")]
    pub collections: Vec<String>,

    /// Operation to apply (sum, product, xor). Repeat to select several; defaults to all.
    #[arg(short, long = "operation", value_name = "OP")]
    pub operations: Vec<Operation>,

    /// Decimals printed for sum and product results
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

/// Verbosity of the stderr log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl Cli {
    /// Parse CLI arguments from the environment
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Collections named on the command line, or the samples if none were.
    pub fn collections(&self) -> Result<Vec<Collection>> {
        if self.collections.is_empty() {
            return Ok(sample_collections());
        }
        self.collections
            .iter()
            .enumerate()
            .map(|(i, literals)| Collection::parse(format!("collection {}", i + 1), literals))
            .collect()
    }

    /// Session configuration from the selected operations and precision.
    pub fn session_config(&self) -> Result<SessionConfig> {
        if self.operations.is_empty() {
            return Ok(SessionConfig {
                precision: self.precision,
                ..SessionConfig::default()
            });
        }
        SessionConfig::new(self.operations.clone(), self.precision)
    }
}
