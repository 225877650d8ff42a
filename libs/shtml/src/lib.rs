//! String-building HTML templating.
//!
//! A page is described as nested, statically typed components:
//!
//! ```ignore
//! use shtml::prelude::*;
//!
//! let page = html(
//!     head(title(text("greeting"))),
//!     body((h1((attr::class("big"), text("hi"))), p(placeholder("name")))));
//! let doc = page.render_with(&Fields::from([("name", "Bob")]));
//! ```
//!
//! Every component writes into the one buffer of the document being
//! rendered; block elements close themselves when their scope ends,
//! attributes edit the tag opened last, and `<<key>>` placeholders are
//! substituted once the whole tree is written. `css::Builder` and
//! `js::Builder` splice `<style>`/`<script>` blocks into the finished
//! document.
//!
//! Nothing is escaped: text and attribute values are written verbatim.
//! Escaping user input is up to the caller.

pub mod warn;
pub mod error;
pub mod myfrom;
pub mod tag;
pub mod component;
pub mod attr;
pub mod hx;
pub mod elements;
pub mod placeholder;
pub mod document;
pub mod css;
pub mod js;
pub mod prelude;

pub use error::{Result, ShtmlError, ShtmlErrorKind};
