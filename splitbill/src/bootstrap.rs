use splitbill_domain::{ParseRoundingModeError, RoundingMode, SettlementContext};
use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

const EXPORT_PATH_VAR: &str = "SPLITBILL_EXPORT_PATH";
const ROUNDING_VAR: &str = "SPLITBILL_ROUNDING";
const DEFAULT_EXPORT_PATH: &str = "split_bill_summary.png";

/// Application configuration read from the environment (and `.env`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub export_path: PathBuf,
    pub rounding_mode: RoundingMode,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ParseRoundingModeError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ParseRoundingModeError> {
        let export_path = lookup(EXPORT_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH));
        let rounding_mode = match lookup(ROUNDING_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => RoundingMode::default(),
        };

        Ok(Self {
            export_path,
            rounding_mode,
        })
    }

    pub fn settlement_context(&self) -> SettlementContext {
        SettlementContext::cents_default().with_rounding_mode(self.rounding_mode)
    }
}

/// Initialize logging and tracing. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
