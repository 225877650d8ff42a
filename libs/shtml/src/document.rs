//! Document and fragment roots.
//!
//! Rendering is one pass: the tree is written into a fresh buffer,
//! then placeholders are substituted. CSS and JS builders can be
//! injected into the resulting `Document` afterwards; each injection
//! adds another block.

use std::fmt::{self, Display};

use shtml_html::meta as metadb;

use crate::component::{BodyContent, Component};
use crate::elements::{Body, Head};
use crate::placeholder::{substitute, Fields};
use crate::tag::{AttrMap, BlockTag};
use crate::trace;

/// Something that splices itself into a finished document.
pub trait Inject {
    fn inject(&self, dest: &mut String);
}

/// The head argument of `html`: `head(..)` or `()` for none.
pub trait HeadPart {
    fn render_head(&self, out: &mut String);
}

impl HeadPart for () {
    fn render_head(&self, _out: &mut String) {}
}

impl<C: Component> HeadPart for Head<C> {
    fn render_head(&self, out: &mut String) {
        self.render(out)
    }
}

/// The body argument of `html`: `body(..)` or `()` for none.
pub trait BodyPart {
    fn render_body(&self, out: &mut String);
}

impl BodyPart for () {
    fn render_body(&self, _out: &mut String) {}
}

impl<C: Component> BodyPart for Body<C> {
    fn render_body(&self, out: &mut String) {
        self.render(out)
    }
}

#[derive(Debug, Clone)]
pub struct Html<H, B> {
    head: H,
    body: B,
}

pub fn html<H: HeadPart, B: BodyPart>(head: H, body: B) -> Html<H, B> {
    Html { head, body }
}

impl<H: HeadPart, B: BodyPart> Html<H, B> {
    pub fn render(&self) -> Document {
        self.render_with(&Fields::new())
    }

    pub fn render_with(&self, fields: &Fields) -> Document {
        let mut content = String::new();
        {
            let mut tag = BlockTag::open(metadb::HTML.tag_name, &mut content, "", &AttrMap::new());
            self.head.render_head(tag.buffer());
            self.body.render_body(tag.buffer());
        }
        substitute(&mut content, fields);
        Document { content }
    }
}

const DOCTYPE: &str = "<!DOCTYPE html>\n";

/// A rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    content: String,
}

impl Document {
    /// Splice in a CSS or JS builder's block.
    pub fn inject<I: Inject + ?Sized>(mut self, injectable: &I) -> Self {
        injectable.inject(&mut self.content);
        self
    }

    pub fn with_doctype(mut self) -> Self {
        trace!("prepending doctype");
        self.content.insert_str(0, DOCTYPE);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

impl From<Document> for String {
    fn from(doc: Document) -> String {
        doc.content
    }
}

/// A fragment: children without the `<html>` wrapper, e.g. for htmx
/// responses or for pieces that become placeholder values elsewhere.
#[derive(Debug, Clone)]
pub struct Part<C>(C);

pub fn part<C: BodyContent>(children: C) -> Part<C> {
    Part(children)
}

impl<C: Component> Part<C> {
    pub fn render(&self) -> String {
        self.render_with(&Fields::new())
    }

    pub fn render_with(&self, fields: &Fields) -> String {
        let mut out = String::new();
        self.0.render(&mut out);
        substitute(&mut out, fields);
        out
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::text;
    use crate::elements::{body, h1, head, p, title};
    use crate::placeholder::placeholder;

    #[test]
    fn t_html() {
        let doc = html(head(()), body(h1(text("hi")))).render();
        assert_eq!(doc.as_str(), "<html><head></head><body><h1>hi</h1></body></html>");
    }

    #[test]
    fn t_absent_parts() {
        assert_eq!(html((), ()).render().as_str(), "<html></html>");
        assert_eq!(html(head(title(text("t"))), ()).render().as_str(),
                   "<html><head><title>t</title></head></html>");
    }

    #[test]
    fn t_render_with() {
        let page = html((), body((p(placeholder("name")), p(placeholder("name")))));
        let doc = page.render_with(&Fields::from([("name", "Bob")]));
        assert_eq!(doc.as_str(),
                   "<html><body><p>Bob</p><p><<name>></p></body></html>");
        // the template is reusable
        let doc = page.render_with(&Fields::from([("name", "Eve")]));
        assert!(doc.as_str().contains("<p>Eve</p>"));
    }

    #[test]
    fn t_document() {
        let doc = html((), body(())).render().with_doctype();
        assert_eq!(doc.to_string(), "<!DOCTYPE html>\n<html><body></body></html>");
        let s: String = doc.into();
        assert!(s.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn t_part() {
        let piece = part((h1(placeholder("title")), p(text("x"))));
        assert_eq!(piece.render_with(&Fields::new().set("title", "T")),
                   "<h1>T</h1><p>x</p>");
        assert_eq!(piece.render(), "<h1><<title>></h1><p>x</p>");
    }
}
