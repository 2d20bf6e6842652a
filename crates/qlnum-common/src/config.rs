//! Process-wide numeric settings.
//!
//! The only tunable is the default scale used by decimal division. It is
//! resolved once (explicit [`NumericConfig::install`], or lazily from the
//! environment on first use of [`NumericConfig::global`]) and never changes
//! afterwards, so readers never race a writer.

use std::sync::OnceLock;

pub use bigdecimal::RoundingMode;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

pub const DEFAULT_SCALE: i64 = 8;

/// Decimal division always rounds half away from zero.
pub const ROUNDING_MODE: RoundingMode = RoundingMode::HalfUp;

pub const DEFAULT_SCALE_ENV: &str = "QLNUM_DEFAULT_SCALE";

static GLOBAL: OnceLock<NumericConfig> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NumericConfig {
    pub default_scale: i64,
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self {
            default_scale: DEFAULT_SCALE,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    numeric: NumericConfig,
}

impl NumericConfig {
    pub fn with_default_scale(default_scale: i64) -> Result<Self> {
        Self { default_scale }.validated()
    }

    pub fn rounding_mode(&self) -> RoundingMode {
        ROUNDING_MODE
    }

    /// Parses the `[numeric]` table of a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(source)
            .map_err(|e| Error::config(format!("invalid numeric configuration: {}", e)))?;
        file.numeric.validated()
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(DEFAULT_SCALE_ENV) {
            Some(raw) => {
                let default_scale = raw.trim().parse::<i64>().map_err(|_| {
                    Error::config(format!("{} must be an integer, got {:?}", DEFAULT_SCALE_ENV, raw))
                })?;
                Self::with_default_scale(default_scale)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn load() -> Result<Self> {
        let config = Self::from_env()?;
        info!(default_scale = config.default_scale, "resolved numeric configuration");
        Ok(config)
    }

    /// Installs the process-wide configuration. Fails if one is already in place.
    pub fn install(self) -> Result<()> {
        let config = self.validated()?;
        match GLOBAL.set(config) {
            Ok(()) => {
                debug!(default_scale = config.default_scale, "installed numeric configuration");
                Ok(())
            }
            Err(_) => {
                warn!("numeric configuration already installed; ignoring new value");
                Err(Error::config("numeric configuration already installed"))
            }
        }
    }

    pub fn global() -> &'static NumericConfig {
        GLOBAL.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!(error = %e, "falling back to default numeric configuration");
                Self::default()
            })
        })
    }

    fn validated(self) -> Result<Self> {
        if self.default_scale < 0 {
            return Err(Error::config(format!(
                "default_scale must be non-negative, got {}",
                self.default_scale
            )));
        }
        Ok(self)
    }
}
