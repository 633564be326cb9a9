//! Document context consulted by properties at render time.

use std::fmt;
use std::str::FromStr;

use vcardigan_core::config::VCardSettings;
use vcardigan_core::constants::DEFAULT_FOLD_WIDTH;
use vcardigan_core::error::CoreError;

use crate::error::RfcResult;
use crate::rfc::vcard::parse::{ParseError, ParseErrorKind};

/// vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VCardVersion {
    /// vCard 3.0 (RFC 2426).
    V3,
    /// vCard 4.0 (RFC 6350).
    #[default]
    V4,
}

impl VCardVersion {
    /// Returns the VERSION property value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }
}

impl FromStr for VCardVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3.0" => Ok(Self::V3),
            "4.0" => Ok(Self::V4),
            other => Err(ParseError::new(
                ParseErrorKind::UnsupportedVersion,
                format!("unsupported vCard version: {other}"),
            )),
        }
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The owning vCard as seen by its properties.
///
/// Properties only ever read from the document; nothing in this crate
/// mutates it.
pub trait VCardDocument: fmt::Debug {
    /// Target version; selects how the preferred parameter is written.
    fn version(&self) -> VCardVersion;

    /// Line-fold width in characters. `0` disables folding.
    fn fold_width(&self) -> usize;
}

/// Plain document context holding a version and a fold width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSettings {
    version: VCardVersion,
    fold_width: usize,
}

impl DocumentSettings {
    /// Creates a document context.
    ///
    /// ## Errors
    /// Returns an error if `fold_width` is `1`: a continuation line needs a
    /// column for the leading space plus at least one column of content.
    pub fn new(version: VCardVersion, fold_width: usize) -> RfcResult<Self> {
        if fold_width == 1 {
            return Err(CoreError::InvalidConfiguration(
                "fold width must be 0 (disabled) or at least 2".to_string(),
            )
            .into());
        }

        Ok(Self {
            version,
            fold_width,
        })
    }

    /// Creates a document context that never folds.
    #[must_use]
    pub const fn unfolded(version: VCardVersion) -> Self {
        Self {
            version,
            fold_width: 0,
        }
    }

    /// Builds a document context from loaded configuration.
    ///
    /// ## Errors
    /// Returns an error if the configured version is not `3.0` or `4.0`, or
    /// the fold width is invalid.
    pub fn from_settings(settings: &VCardSettings) -> RfcResult<Self> {
        let version = settings.version.parse::<VCardVersion>()?;
        Self::new(version, settings.fold_width)
    }
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            version: VCardVersion::default(),
            fold_width: DEFAULT_FOLD_WIDTH,
        }
    }
}

impl VCardDocument for DocumentSettings {
    fn version(&self) -> VCardVersion {
        self.version
    }

    fn fold_width(&self) -> usize {
        self.fold_width
    }
}
