//! Runtime configuration resolved from flags, environment and `.env`.

use crate::cli::opts::Cli;
use sheetcards_core::CoreError;
use sheetcards_google::AccessToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct GoogleSettings {
    pub token: AccessToken,
    pub spreadsheet_id: String,
    pub worksheet: String,
}

impl GoogleSettings {
    pub fn from_cli(cli: &Cli) -> Result<Self, CoreError> {
        Ok(Self {
            token: access_token(cli)?,
            spreadsheet_id: required(cli.spreadsheet_id.as_deref(), "SHEETCARDS_SPREADSHEET_ID")?,
            worksheet: required(Some(cli.worksheet.as_str()), "SHEETCARDS_WORKSHEET")?,
        })
    }
}

pub fn access_token(cli: &Cli) -> Result<AccessToken, CoreError> {
    required(cli.access_token.as_deref(), "GOOGLE_ACCESS_TOKEN").map(AccessToken::new)
}

/// Blank counts as missing.
pub fn required(value: Option<&str>, name: &'static str) -> Result<String, CoreError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(CoreError::ConfigurationMissing(name))
}

pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
