use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, DEFAULT_FOLD_WIDTH, DEFAULT_VERSION, ENV_PREFIX};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub vcard: VCardSettings,
}

/// Document-level settings consulted by every property when it renders.
#[derive(Debug, Clone, Deserialize)]
pub struct VCardSettings {
    /// Target vCard version, `"3.0"` or `"4.0"`.
    pub version: String,
    /// Line-fold width in characters. `0` disables folding.
    pub fold_width: usize,
}

impl Default for VCardSettings {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            fold_width: DEFAULT_FOLD_WIDTH,
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables, and an optional
    /// `vcardigan.toml`. Environment variables use the `VCARDIGAN_` prefix and a
    /// double underscore between sections, e.g. `VCARDIGAN_VCARD__FOLD_WIDTH=50`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let settings = Self::defaults()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            // Env overrides the file
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        tracing::debug!(
            version = %settings.vcard.version,
            fold_width = settings.vcard.fold_width,
            "Loaded vCard settings"
        );

        Ok(settings)
    }

    /// ## Summary
    /// Parses settings from a TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not deserialize.
    pub fn from_toml(toml: &str) -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("vcard.version", DEFAULT_VERSION)?
            .set_default("vcard.fold_width", u64::try_from(DEFAULT_FOLD_WIDTH)?)?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
