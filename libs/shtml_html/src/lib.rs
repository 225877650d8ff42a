//! Metadata about HTML elements, attributes, htmx attributes and CSS
//! properties: the tables the `shtml` templating crate generates its
//! constructors from, plus a lookup database for names only known at
//! runtime.

pub mod tables;
pub mod types;
pub mod env;
pub mod meta;
