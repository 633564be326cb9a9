/// vCard version written when no configuration overrides it.
pub const DEFAULT_VERSION: &str = "4.0";

/// RFC 6350 §3.2 recommends folding at 75 octets; we count display characters.
pub const DEFAULT_FOLD_WIDTH: usize = 75;

/// Prefix for environment variables read by [`crate::config::load_config`].
pub const ENV_PREFIX: &str = "VCARDIGAN";

/// Optional configuration file, resolved relative to the working directory.
pub const CONFIG_FILE: &str = "vcardigan.toml";
