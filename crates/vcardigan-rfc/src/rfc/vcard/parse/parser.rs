//! vCard property parser.

use super::lexer::{parse_content_line, unfold};
use super::values::split_structured;
use crate::error::RfcResult;
use crate::rfc::vcard::core::{PropertyRequest, VCardDocument, VCardProperty};

/// Parses one content line into a property owned by `document`.
///
/// The line is unfolded and trimmed, split at the first `:` outside quotes,
/// and the value block is split on unescaped semicolons. Each segment is
/// handed to [`VCardProperty::create`] still escaped, which unescapes it
/// exactly once.
///
/// ## Errors
/// Returns an error if the line is malformed or construction rejects it.
#[tracing::instrument(skip(document, line), fields(line_len = line.len()))]
pub fn parse_property<'doc>(
    document: &'doc dyn VCardDocument,
    line: &str,
) -> RfcResult<VCardProperty<'doc>> {
    let unfolded = unfold(line);
    let content = parse_content_line(unfolded.trim())?;

    let request = PropertyRequest {
        values: split_structured(&content.value)
            .into_iter()
            .map(String::from)
            .collect(),
        params: content.params,
    };

    tracing::trace!(
        name = %content.name,
        values = request.values.len(),
        params = request.params.len(),
        "Split content line"
    );

    VCardProperty::create(document, &content.name, request)
}
