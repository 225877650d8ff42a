//! Everything needed to write templates. Attributes, htmx attributes
//! and CSS properties stay behind their module names (`attr::class`,
//! `hx::post`, `css::color`) since many of them share names with
//! elements.

pub use crate::component::{comment, text, BodyContent, Component, HeadContent};
pub use crate::document::{html, part, Document, Inject};
pub use crate::elements::*;
pub use crate::placeholder::{placeholder, Fields};
pub use crate::{attr, css, hx, js};
