//! vCard property parsing (RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use vcardigan_rfc::rfc::vcard::{DocumentSettings, VCardProperty};
//!
//! let doc = DocumentSettings::default();
//! let prop = VCardProperty::parse(&doc, "item1.EMAIL;TYPE=uri:joe@strummer.com").unwrap();
//!
//! assert_eq!(prop.group(), Some("item1"));
//! assert_eq!(prop.name(), "email");
//! ```
//!
//! ## Features
//!
//! - Handles line unfolding
//! - Parses property groups (item1.TEL)
//! - Splits values on unescaped semicolons, then unescapes each segment
//! - Quoted parameter values and RFC 6868 caret encoding

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, parse_content_line, unfold};
pub use parser::parse_property;
pub use values::{split_structured, split_unescaped, unescape_text};
