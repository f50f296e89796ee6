//! Backends that consume a loaded [`Grammar`](crate::grammar::Grammar).

pub mod json;
