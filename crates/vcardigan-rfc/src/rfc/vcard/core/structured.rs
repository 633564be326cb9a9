//! Structured vCard types (RFC 6350).
//!
//! These types are typed views over the positional values of N, ADR, and ORG.
//! Each N and ADR position is a list, split on unescaped commas when the
//! property was built.

/// Structured name (N property, RFC 6350 §6.2.2).
///
/// All components are optional per RFC 6350.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family names (surnames).
    pub family: Vec<String>,
    /// Given names (first names).
    pub given: Vec<String>,
    /// Additional names (middle names).
    pub additional: Vec<String>,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    pub prefixes: Vec<String>,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    pub suffixes: Vec<String>,
}

impl StructuredName {
    /// Creates an empty structured name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a structured name with family and given names.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: vec![family.into()],
            given: vec![given.into()],
            ..Self::default()
        }
    }

    /// Builds a structured name from the per-position lists of an N property.
    #[must_use]
    pub fn from_components(lists: &[Vec<String>]) -> Self {
        Self {
            family: component(lists, 0),
            given: component(lists, 1),
            additional: component(lists, 2),
            prefixes: component(lists, 3),
            suffixes: component(lists, 4),
        }
    }

    /// Returns whether the name is empty (all components are empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.family.is_empty()
            && self.given.is_empty()
            && self.additional.is_empty()
            && self.prefixes.is_empty()
            && self.suffixes.is_empty()
    }

    /// Formats as a display name (given + family).
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if !self.given.is_empty() {
            parts.push(self.given.join(" "));
        }
        if !self.family.is_empty() {
            parts.push(self.family.join(" "));
        }
        parts.join(" ")
    }
}

/// Address (ADR property, RFC 6350 §6.3.1).
///
/// All components are optional per RFC 6350.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Post office box.
    pub po_box: Vec<String>,
    /// Extended address (e.g., apartment or suite number).
    pub extended: Vec<String>,
    /// Street address.
    pub street: Vec<String>,
    /// Locality (city).
    pub locality: Vec<String>,
    /// Region (state or province).
    pub region: Vec<String>,
    /// Postal code.
    pub postal_code: Vec<String>,
    /// Country name.
    pub country: Vec<String>,
}

impl Address {
    /// Builds an address from the per-position lists of an ADR property.
    #[must_use]
    pub fn from_components(lists: &[Vec<String>]) -> Self {
        Self {
            po_box: component(lists, 0),
            extended: component(lists, 1),
            street: component(lists, 2),
            locality: component(lists, 3),
            region: component(lists, 4),
            postal_code: component(lists, 5),
            country: component(lists, 6),
        }
    }

    /// Returns whether the address is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.po_box.is_empty()
            && self.extended.is_empty()
            && self.street.is_empty()
            && self.locality.is_empty()
            && self.region.is_empty()
            && self.postal_code.is_empty()
            && self.country.is_empty()
    }

    /// Formats as a single-line address.
    #[must_use]
    pub fn one_line(&self) -> String {
        let parts: Vec<&String> = [
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .flat_map(|v| v.iter())
        .collect();
        parts
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Organization (ORG property, RFC 6350 §6.6.4).
///
/// First value is the organizational name, subsequent values are
/// organizational units in order of decreasing specificity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    /// Organization name.
    pub name: String,
    /// Organizational units (department, division, etc.).
    pub units: Vec<String>,
}

impl Organization {
    /// Creates an organization with name and units.
    #[must_use]
    pub fn with_units(name: impl Into<String>, units: Vec<String>) -> Self {
        Self {
            name: name.into(),
            units,
        }
    }

    /// Builds an organization from the raw positional values of an ORG property.
    #[must_use]
    pub fn from_values(values: &[String]) -> Self {
        Self {
            name: values.first().cloned().unwrap_or_default(),
            units: values.iter().skip(1).cloned().collect(),
        }
    }

    /// Returns whether the organization is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.units.is_empty()
    }
}

/// Returns the list at `index`; missing or blank yields no items.
fn component(lists: &[Vec<String>], index: usize) -> Vec<String> {
    match lists.get(index) {
        Some(list) if !list.iter().all(String::is_empty) => list.clone(),
        _ => Vec::new(),
    }
}
