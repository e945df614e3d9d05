use eyre::{Result, WrapErr};
use std::{env, sync::LazyLock};
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://qr.atito.com.br/qrcode";
pub const DEFAULT_VALIDATION_BASE: &str = "https://qr.atito.com.br/qrvalidation";

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::from_env().expect("invalid QRRG_* configuration"));

#[derive(Debug, Clone)]
pub struct Config {
    /// Where `list_users.php` lives.
    pub api_base: Url,
    /// Serves registration photos and the QR validation viewer.
    pub validation_base: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            api_base: url_var(&lookup, "QRRG_API_BASE", DEFAULT_API_BASE)?,
            validation_base: url_var(&lookup, "QRRG_VALIDATION_BASE", DEFAULT_VALIDATION_BASE)?,
        })
    }
}

fn url_var(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: &str) -> Result<Url> {
    let value = lookup(name)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string());

    Url::parse(value.trim()).wrap_err_with(|| format!("{name} is not a valid URL: {value:?}"))
}
