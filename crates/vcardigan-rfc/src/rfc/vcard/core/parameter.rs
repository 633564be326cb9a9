//! vCard parameter types.

/// Canonical key for the preferred parameter, whether it arrived as
/// `TYPE=pref` (3.0) or `PREF=n` (4.0).
pub const PREFERRED: &str = "preferred";

/// Preference rank of a property among its siblings.
///
/// Decided once when the parameter is ingested; rendering only asks for
/// [`Preference::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preference {
    /// Explicitly not preferred (`false` or `0`). Never rendered.
    #[default]
    Absent,
    /// Preferred without an explicit rank; behaves as rank 1.
    Unranked,
    /// Preferred with an explicit rank (1 is most preferred).
    Ranked(u32),
}

impl Preference {
    /// Interprets a raw parameter value.
    ///
    /// A positive integer becomes a rank, `false` or `0` mean absent, and
    /// anything else (including `pref` itself or `true`) is unranked.
    #[must_use]
    pub fn from_input(value: &str) -> Self {
        let value = value.trim();
        match value.parse::<u32>() {
            Ok(rank) if rank > 0 => Self::Ranked(rank),
            _ if value == "0" || value.eq_ignore_ascii_case("false") => Self::Absent,
            _ => Self::Unranked,
        }
    }

    /// Returns the effective rank, or `None` when absent.
    #[must_use]
    pub const fn rank(self) -> Option<u32> {
        match self {
            Self::Absent => None,
            Self::Unranked => Some(1),
            Self::Ranked(rank) => Some(rank),
        }
    }

    /// Whether this marks the property as preferred at all.
    #[must_use]
    pub const fn is_preferred(self) -> bool {
        self.rank().is_some()
    }

    /// Combines a repeated preferred parameter with an earlier one.
    ///
    /// Absent yields to any rank; of two ranks the lower number wins.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self.rank(), other.rank()) {
            (None, _) => other,
            (_, None) => self,
            (Some(a), Some(b)) if b < a => other,
            _ => self,
        }
    }

    /// Equality up to the 3.0/4.0 spellings: `Unranked` equals `Ranked(1)`.
    #[must_use]
    pub fn is_equivalent(self, other: Self) -> bool {
        self.rank() == other.rank()
    }
}

/// A vCard parameter.
///
/// Named parameters always hold a list of values (empty, one, or many), so a
/// repeated name simply appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VCardParameter {
    /// The canonical preferred parameter.
    Preferred(Preference),
    /// Any other parameter. The name is lower-cased.
    Named { name: String, values: Vec<String> },
}

impl VCardParameter {
    /// Creates a named parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Named {
            name: name.into().to_ascii_lowercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a named parameter with multiple values.
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self::Named {
            name: name.into().to_ascii_lowercase(),
            values,
        }
    }

    /// Returns the lower-cased parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Preferred(_) => PREFERRED,
            Self::Named { name, .. } => name,
        }
    }

    /// Returns the values of a named parameter; empty for the preferred one.
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::Preferred(_) => &[],
            Self::Named { values, .. } => values,
        }
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values().first().map(String::as_str)
    }

    /// Returns the preference if this is the preferred parameter.
    #[must_use]
    pub const fn preference(&self) -> Option<Preference> {
        match self {
            Self::Preferred(preference) => Some(*preference),
            Self::Named { .. } => None,
        }
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values().iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    /// Whether two parameters carry the same meaning.
    ///
    /// Preferred parameters compare by effective rank; named ones literally.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Preferred(a), Self::Preferred(b)) => a.is_equivalent(*b),
            _ => self == other,
        }
    }
}

/// Maps a parameter key to its canonical lower-cased form.
///
/// Both `pref` and `preferred` collapse to [`PREFERRED`].
#[must_use]
pub fn canonical_name(name: &str) -> String {
    let name = name.trim().to_ascii_lowercase();
    if name == "pref" {
        PREFERRED.to_string()
    } else {
        name
    }
}

/// TYPE values with special meaning.
pub mod types {
    /// `TYPE=pref`, the 3.0 spelling of the preferred parameter.
    pub const PREF: &str = "pref";
}
