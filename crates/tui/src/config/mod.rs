use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/cashbook.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Journal file; entries are kept in memory only when unset.
    pub journal_path: Option<String>,
    pub currency_symbol: String,
    pub timezone: String,
    /// Log file; logging is disabled when empty.
    pub log_file: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            journal_path: None,
            currency_symbol: "₹".to_string(),
            timezone: "Asia/Kolkata".to_string(),
            log_file: "cashbook.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "cashbook", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Journal file (JSON lines) used to keep entries between runs.
    #[arg(long)]
    journal: Option<String>,
    /// Currency symbol shown in front of amounts.
    #[arg(long)]
    currency_symbol: Option<String>,
    /// Timezone used for timestamps (IANA name).
    #[arg(long)]
    timezone: Option<String>,
    /// Log file path (empty disables logging).
    #[arg(long)]
    log_file: Option<String>,
    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("CASHBOOK"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(journal) = args.journal {
        settings.journal_path = Some(journal);
    }
    if let Some(symbol) = args.currency_symbol {
        settings.currency_symbol = symbol;
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}
