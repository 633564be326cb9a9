//! vCard property serialization.

use super::escape::escape_param_value;
use super::fold::fold_line;
use crate::rfc::vcard::core::{Preference, VCardParameter, VCardProperty, VCardVersion};

/// Renders a property to its folded wire form.
///
/// `[group.]NAME[;PARAM=VALUE[,VALUE]]*:VALUE[;VALUE]*`, with no trailing
/// line terminator; the caller appends the record separator.
#[must_use]
pub fn render_property(prop: &VCardProperty<'_>) -> String {
    let document = prop.document();
    let mut line = String::new();

    // Group prefix
    if let Some(group) = prop.group() {
        line.push_str(group);
        line.push('.');
    }

    line.push_str(&prop.name().to_ascii_uppercase());

    for param in prop.params() {
        render_parameter(param, document.version(), &mut line);
    }

    line.push(':');

    for i in 0..prop.values().len() {
        if i > 0 {
            line.push(';');
        }
        if let Some(value) = prop.value(i) {
            line.push_str(&value);
        }
    }

    tracing::trace!(name = %prop.name(), len = line.len(), "Rendered property");

    fold_line(&line, document.fold_width())
}

fn render_parameter(param: &VCardParameter, version: VCardVersion, output: &mut String) {
    match param {
        VCardParameter::Preferred(preference) => render_preference(*preference, version, output),
        VCardParameter::Named { name, values } => {
            if values.iter().all(String::is_empty) {
                return;
            }

            output.push(';');
            output.push_str(&name.to_ascii_uppercase());
            output.push('=');

            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }

                let (escaped, needs_quotes) = escape_param_value(value);

                if needs_quotes {
                    output.push('"');
                    output.push_str(&escaped);
                    output.push('"');
                } else {
                    output.push_str(&escaped);
                }
            }
        }
    }
}

fn render_preference(preference: Preference, version: VCardVersion, output: &mut String) {
    let Some(rank) = preference.rank() else {
        return;
    };

    match version {
        VCardVersion::V3 => output.push_str(";TYPE=pref"),
        VCardVersion::V4 => {
            output.push_str(";PREF=");
            output.push_str(&rank.to_string());
        }
    }
}
