//! vCard property implementation (RFC 2426 / RFC 6350).
//!
//! This module models a single vCard content line and maps it to and from
//! its exact wire form.
//!
//! ## Overview
//!
//! A [`VCardProperty`] holds a lower-cased name, an optional group, ordered
//! parameters, and ordered raw values. It borrows a [`VCardDocument`] to learn
//! the target version (3.0 or 4.0) and the line-fold width.
//!
//! ## Usage
//!
//! ```rust
//! use vcardigan_rfc::rfc::vcard::{DocumentSettings, PropertyRequest, VCardProperty, VCardVersion};
//!
//! let doc = DocumentSettings::unfolded(VCardVersion::V3);
//! let prop = VCardProperty::create(
//!     &doc,
//!     "email",
//!     PropertyRequest::new().value("joe@strummer.com").param("pref", "1"),
//! )
//! .unwrap();
//! assert_eq!(prop.render(), "EMAIL;TYPE=pref:joe@strummer.com");
//!
//! let parsed = VCardProperty::parse(&doc, &prop.render()).unwrap();
//! assert!(parsed.is_equivalent(&prop));
//! ```
//!
//! ## Round-Trip Fidelity
//!
//! Values and parameters keep insertion order, so rendering a parsed line
//! reproduces it. The preferred parameter is the one exception: `TYPE=pref`
//! and `PREF=n` are the same parameter and are written in the spelling of the
//! document's version.
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCardProperty`, `VCardParameter`, `PropertyKind`, etc.)
//! - [`parse`] - Parsing functions, unescaping, and error types
//! - [`build`] - Rendering, escaping, and line folding

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{escape_text, fold_line, render_property};
pub use self::core::{
    Address, DocumentSettings, Organization, Preference, PropertyKind, PropertyRequest,
    StructuredName, VCardDocument, VCardParameter, VCardProperty, VCardVersion,
};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse_property, unescape_text};
