//! Core vCard property types.

mod document;
mod kind;
mod parameter;
mod property;
mod structured;

pub use document::{DocumentSettings, VCardDocument, VCardVersion};
pub use kind::{PropertyKind, is_name_char, names};
pub use parameter::{PREFERRED, Preference, VCardParameter, canonical_name, types};
pub use property::{PropertyRequest, VCardProperty};
pub use structured::{Address, Organization, StructuredName};
