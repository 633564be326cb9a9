//! vCard property rendering.
//!
//! ## Usage
//!
//! ```rust
//! use vcardigan_rfc::rfc::vcard::{DocumentSettings, PropertyRequest, VCardProperty};
//!
//! let doc = DocumentSettings::default();
//! let prop = VCardProperty::create(
//!     &doc,
//!     "item1.email",
//!     PropertyRequest::new().value("joe@strummer.com").param("type", "uri"),
//! )
//! .unwrap();
//!
//! assert_eq!(prop.render(), "item1.EMAIL;TYPE=uri:joe@strummer.com");
//! ```
//!
//! ## Features
//!
//! - Line folding at a per-document width (character based)
//! - Text escaping per RFC 6350
//! - RFC 6868 caret encoding for parameters
//! - Version-dependent preferred parameter (`TYPE=pref` / `PREF=n`)

mod escape;
mod fold;
mod render;

pub use escape::{escape_param_value, escape_text};
pub use fold::{FOLD_MARKER, fold_line};
pub use render::render_property;
