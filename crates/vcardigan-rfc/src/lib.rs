//! vCard property model and wire codec (RFC 2426 / RFC 6350).

pub mod error;
pub mod rfc;
