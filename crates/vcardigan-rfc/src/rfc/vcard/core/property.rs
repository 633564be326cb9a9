//! vCard property model.

use std::fmt;

use super::document::VCardDocument;
use super::kind::{PropertyKind, is_name_char};
use super::parameter::{PREFERRED, Preference, VCardParameter, canonical_name, types};
use super::structured::{Address, Organization, StructuredName};
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::build::{escape_text, render_property};
use crate::rfc::vcard::parse::{parse_property, split_unescaped, unescape_text};

/// Opening marker of a vendor labeled value (`_$!<Home>!$_`).
const LABEL_OPEN: &str = "_$!<";
/// Closing marker of a vendor labeled value.
const LABEL_CLOSE: &str = ">!$_";

/// Input for [`VCardProperty::create`].
///
/// Values are given in wire-ish form and are unescaped exactly once during
/// construction. Parameters are `(name, value)` pairs; a repeated name
/// accumulates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyRequest {
    /// Positional values in order.
    pub values: Vec<String>,
    /// Parameters in order of appearance.
    pub params: Vec<(String, String)>,
}

impl PropertyRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Appends several positional values.
    #[must_use]
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }
}

/// One content line of a vCard.
///
/// Values are stored unescaped; the wire form is produced on demand by
/// [`VCardProperty::value`] and [`VCardProperty::render`]. For N and ADR each
/// value is also kept as its comma-separated list, so an escaped `\,` inside
/// a component stays distinct from the list separator. The property borrows
/// its owning document to read the version and fold width.
#[derive(Debug, Clone)]
pub struct VCardProperty<'doc> {
    document: &'doc dyn VCardDocument,
    kind: PropertyKind,
    group: Option<String>,
    name: String,
    params: Vec<VCardParameter>,
    values: Vec<String>,
    /// Per-value components for list kinds; empty otherwise.
    lists: Vec<Vec<String>>,
}

impl<'doc> VCardProperty<'doc> {
    /// Builds a property from a name (optionally `group.name`) and a request.
    ///
    /// Each value has any vendor label wrapper stripped and is then
    /// unescaped. N and ADR values are first split on unescaped commas into
    /// their components. Parameters are normalized: `TYPE=pref` and `PREF=n`
    /// both become the canonical preferred parameter.
    ///
    /// ## Errors
    /// Returns a validation error if the name or group is empty or holds a
    /// character outside `A-Z a-z 0-9 - _`, if the name still contains a `.`
    /// after the group is split off, or if the property kind rejects the
    /// values.
    pub fn create(
        document: &'doc dyn VCardDocument,
        name: &str,
        request: PropertyRequest,
    ) -> RfcResult<Self> {
        let (group, name) = split_name(name)?;
        let kind = PropertyKind::classify(&name);

        let mut values = Vec::with_capacity(request.values.len());
        let mut lists = Vec::new();
        for value in request.values {
            let value = strip_label(&value);
            if kind.has_list_components() {
                let list = split_unescaped(value, ',')
                    .into_iter()
                    .map(|piece| unescape_text(piece).into_owned())
                    .collect::<Vec<_>>();
                values.push(list.join(","));
                lists.push(list);
            } else {
                values.push(unescape_text(value).into_owned());
            }
        }
        kind.validate(&name, &values)?;

        let mut property = Self {
            document,
            kind,
            group,
            name,
            params: Vec::with_capacity(request.params.len()),
            values,
            lists,
        };

        for (param, value) in request.params {
            property.add_param(&param, &value);
        }

        tracing::trace!(
            name = %property.name,
            group = ?property.group,
            kind = ?property.kind,
            values = property.values.len(),
            params = property.params.len(),
            "Created property"
        );

        Ok(property)
    }

    /// Parses one content line (folded or not) into a property.
    ///
    /// ## Errors
    /// Returns a parse error if the line has no `:` separator or an invalid
    /// name, or any error [`VCardProperty::create`] would return.
    pub fn parse(document: &'doc dyn VCardDocument, line: &str) -> RfcResult<Self> {
        parse_property(document, line)
    }

    /// Returns the owning document context.
    #[must_use]
    pub fn document(&self) -> &'doc dyn VCardDocument {
        self.document
    }

    /// Returns the kind selected from the name.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Returns the lower-cased property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lower-cased group, if any.
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Sets or clears the group.
    pub fn set_group(&mut self, group: Option<&str>) {
        self.group = group.map(str::to_ascii_lowercase);
    }

    /// Returns the parameters in insertion order.
    #[must_use]
    pub fn params(&self) -> &[VCardParameter] {
        &self.params
    }

    /// Returns the raw (unescaped) values in order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns the escaped wire form of the value at `index`.
    ///
    /// N and ADR components are escaped one by one and joined with `,`.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<String> {
        if let Some(list) = self.lists.get(index) {
            return Some(
                list.iter()
                    .map(|piece| escape_text(piece))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }
        self.values.get(index).map(|value| escape_text(value))
    }

    /// Looks up a parameter by name, case-insensitively.
    ///
    /// `pref` and `preferred` both find the preferred parameter, which reads
    /// as unset while its preference is [`Preference::Absent`].
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&VCardParameter> {
        let name = canonical_name(name);
        if name.is_empty() {
            return None;
        }

        self.params
            .iter()
            .find(|param| param.name() == name)
            .filter(|param| param.preference() != Some(Preference::Absent))
    }

    /// Returns the preference, [`Preference::Absent`] when not set.
    #[must_use]
    pub fn preference(&self) -> Preference {
        self.params
            .iter()
            .find_map(VCardParameter::preference)
            .unwrap_or_default()
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.param("type").is_some_and(|p| p.has_value(type_value))
    }

    /// Adds a parameter, applying the same normalization as construction.
    ///
    /// A `TYPE` value holding a comma list (`home,pref`) is added item by
    /// item, as the parser does. Other values are kept whole.
    pub fn add_param(&mut self, name: &str, value: &str) {
        let name = canonical_name(name);

        if name == "type" && value.contains(',') {
            for item in value.split(',') {
                self.add_param(&name, item);
            }
            return;
        }

        let is_pref_type = name == "type" && value.trim().eq_ignore_ascii_case(types::PREF);
        if name == PREFERRED || is_pref_type {
            let preference = if is_pref_type {
                Preference::Unranked
            } else {
                Preference::from_input(value)
            };
            self.merge_preference(preference);
            return;
        }

        if let Some(VCardParameter::Named { values, .. }) =
            self.params.iter_mut().find(|param| param.name() == name)
        {
            values.push(value.to_string());
        } else {
            self.params.push(VCardParameter::Named {
                name,
                values: vec![value.to_string()],
            });
        }
    }

    /// Removes a parameter by name. Returns whether anything was removed.
    pub fn remove_param(&mut self, name: &str) -> bool {
        let name = canonical_name(name);
        let before = self.params.len();
        self.params.retain(|param| param.name() != name);
        self.params.len() != before
    }

    /// Renders the folded wire form, without a trailing line terminator.
    #[must_use]
    pub fn render(&self) -> String {
        render_property(self)
    }

    /// Typed view of an N property.
    #[must_use]
    pub fn structured_name(&self) -> Option<StructuredName> {
        (self.kind == PropertyKind::Name).then(|| StructuredName::from_components(&self.lists))
    }

    /// Typed view of an ADR property.
    #[must_use]
    pub fn address(&self) -> Option<Address> {
        (self.kind == PropertyKind::Address).then(|| Address::from_components(&self.lists))
    }

    /// Typed view of an ORG property.
    #[must_use]
    pub fn organization(&self) -> Option<Organization> {
        (self.kind == PropertyKind::Organization).then(|| Organization::from_values(&self.values))
    }

    /// Compares name, group, values, and parameters, treating the 3.0 and
    /// 4.0 spellings of the preferred parameter as equal.
    #[must_use]
    pub fn is_equivalent(&self, other: &VCardProperty<'_>) -> bool {
        let named = named_params(&self.params).collect::<Vec<_>>();
        let other_named = named_params(&other.params).collect::<Vec<_>>();

        self.name == other.name
            && self.group == other.group
            && self.values == other.values
            && self.lists == other.lists
            && self.preference().is_equivalent(other.preference())
            && named.len() == other_named.len()
            && named
                .iter()
                .zip(&other_named)
                .all(|(a, b)| a.is_equivalent(b))
    }

    fn merge_preference(&mut self, preference: Preference) {
        if let Some(VCardParameter::Preferred(existing)) = self
            .params
            .iter_mut()
            .find(|param| matches!(param, VCardParameter::Preferred(_)))
        {
            *existing = existing.merge(preference);
        } else {
            self.params.push(VCardParameter::Preferred(preference));
        }
    }
}

impl PartialEq for VCardProperty<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.group == other.group
            && self.params == other.params
            && self.values == other.values
            && self.lists == other.lists
    }
}

impl fmt::Display for VCardProperty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn named_params(params: &[VCardParameter]) -> impl Iterator<Item = &VCardParameter> {
    params
        .iter()
        .filter(|param| matches!(param, VCardParameter::Named { .. }))
}

/// Splits `group.name` on the first dot and lower-cases both parts.
fn split_name(name: &str) -> RfcResult<(Option<String>, String)> {
    let name = name.trim();
    if let Some(c) = name.chars().find(|&c| c != '.' && !is_name_char(c)) {
        return Err(RfcError::ValidationError(format!(
            "invalid character {c:?} in property name: {name}"
        )));
    }

    let (group, name) = match name.split_once('.') {
        Some((group, rest)) => {
            if group.is_empty() {
                return Err(RfcError::ValidationError(format!(
                    "empty group in property name: {name}"
                )));
            }
            (Some(group.to_ascii_lowercase()), rest)
        }
        None => (None, name),
    };

    if name.is_empty() {
        return Err(RfcError::ValidationError(
            "property name must not be empty".to_string(),
        ));
    }
    if name.contains('.') {
        return Err(RfcError::ValidationError(format!(
            "property name contains more than one group separator: {name}"
        )));
    }

    Ok((group, name.to_ascii_lowercase()))
}

/// Returns the label inside a vendor `_$!<Label>!$_` wrapper, or the value.
fn strip_label(value: &str) -> &str {
    value
        .find(LABEL_OPEN)
        .and_then(|start| {
            let rest = &value[start + LABEL_OPEN.len()..];
            rest.find(LABEL_CLOSE).map(|end| &rest[..end])
        })
        .unwrap_or(value)
}
