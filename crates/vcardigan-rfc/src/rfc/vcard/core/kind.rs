//! Property kinds selected by name at construction time.

use crate::error::{RfcError, RfcResult};

/// Lower-cased property names this crate gives special treatment.
pub mod names {
    pub const N: &str = "n";
    pub const ADR: &str = "adr";
    pub const ORG: &str = "org";
}

/// Whether `c` may appear in a property name or group.
///
/// Shared by construction and parsing so every name `create` accepts can be
/// read back from its own rendering.
#[must_use]
pub const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Closed set of property kinds.
///
/// Each kind carries its own construction-time validation; names without a
/// specialised kind get [`PropertyKind::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropertyKind {
    /// Any property without kind-specific behaviour.
    #[default]
    Default,
    /// Structured name (N): family;given;additional;prefixes;suffixes.
    Name,
    /// Delivery address (ADR): seven positional components.
    Address,
    /// Organization (ORG): name followed by units.
    Organization,
}

const KINDS: &[(&str, PropertyKind)] = &[
    (names::N, PropertyKind::Name),
    (names::ADR, PropertyKind::Address),
    (names::ORG, PropertyKind::Organization),
];

impl PropertyKind {
    /// Selects the kind for a lower-cased property name.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        KINDS
            .iter()
            .find(|(kind_name, _)| *kind_name == name)
            .map_or(Self::Default, |(_, kind)| *kind)
    }

    /// Maximum number of positional values, if the kind limits it.
    #[must_use]
    pub const fn max_components(self) -> Option<usize> {
        match self {
            Self::Name => Some(5),
            Self::Address => Some(7),
            Self::Default | Self::Organization => None,
        }
    }

    /// Whether each positional value is a comma-separated list (N and ADR).
    ///
    /// ORG components are single text values.
    #[must_use]
    pub const fn has_list_components(self) -> bool {
        matches!(self, Self::Name | Self::Address)
    }

    /// Runs the kind's validation over freshly ingested values.
    ///
    /// ## Errors
    /// Returns a validation error if the value count exceeds the kind's limit.
    pub fn validate(self, name: &str, values: &[String]) -> RfcResult<()> {
        if let Some(max) = self.max_components()
            && values.len() > max
        {
            return Err(RfcError::ValidationError(format!(
                "{} takes at most {max} components, got {}",
                name.to_ascii_uppercase(),
                values.len()
            )));
        }

        Ok(())
    }
}
