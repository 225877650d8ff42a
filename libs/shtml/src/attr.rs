//! Attribute injectors.
//!
//! An attribute is a child component that, instead of writing content,
//! inserts ` name="value"` before the last `>` in the buffer, i.e. into
//! the most recently opened tag. It therefore has to come before any
//! child that opens a tag of its own:
//!
//! ```ignore
//! div((attr::class("box"), p(text("hi"))))   // <div class="box"><p>hi</p></div>
//! div((p(text("hi")), attr::class("box")))   // <div><p>hi</p class="box"></div>
//! ```
//!
//! There is no escaping and no collision detection; using the same
//! attribute twice writes it twice.

use kstring::KString;
use shtml_html::meta::METADB;

use crate::component::{BodyContent, Component, HeadContent};
use crate::error::{Result, ShtmlErrorKind};
use crate::myfrom::{ks, MyFrom};
use crate::{trace, warn};

/// Insert ` name="value"` before the last `>` of `out`, or append it
/// if there is none.
pub fn inject_attribute(out: &mut String, name: &str, value: &str) {
    let decl = format!(" {name}=\"{value}\"");
    if let Some(pos) = out.rfind('>') {
        trace!("inject attribute {name:?} at {pos}");
        out.insert_str(pos, &decl);
    } else {
        warn!("attribute {name:?} used outside of any tag, appending it");
        out.push_str(&decl);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    name: KString,
    value: KString,
}

impl Attr {
    /// No check is made whether `name` is an attribute.
    pub fn new<N, V>(name: N, value: V) -> Attr
        where KString: MyFrom<N> + MyFrom<V>
    {
        Attr { name: ks(name), value: ks(value) }
    }

    /// Like `new`, but `name` has to be a known attribute (or have a
    /// `data-` or `hx-` prefix).
    pub fn checked<N, V>(name: N, value: V) -> Result<Attr>
        where KString: MyFrom<N> + MyFrom<V>
    {
        let name = ks(name);
        if !METADB.is_known_attribute(&name) {
            return Err(ShtmlErrorKind::UnknownAttribute(name).into());
        }
        Ok(Attr { name, value: ks(value) })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Component for Attr {
    fn render(&self, out: &mut String) {
        inject_attribute(out, &self.name, &self.value)
    }
}
impl HeadContent for Attr {}
impl BodyContent for Attr {}

macro_rules! define_attribute_fns {
    ($( $f:ident $name:literal $family:ident $applies_to:literal; )*) => {
        $(
            #[doc = concat!("`", $name, "` (", $applies_to, ")")]
            pub fn $f(value: &'static str) -> Attr {
                Attr::new($name, value)
            }
        )*
    }
}

shtml_html::with_attributes!(define_attribute_fns);

/// `data-<key>="value"`
pub fn data_attr(key: &str, value: &'static str) -> Attr {
    Attr::new(format!("data-{key}"), value)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{div, input, p};
    use crate::component::text;

    fn render(c: impl Component) -> String {
        let mut out = String::new();
        c.render(&mut out);
        out
    }

    #[test]
    fn t_inject_attribute() {
        let mut out = String::from("<p><a>");
        inject_attribute(&mut out, "href", "/x");
        assert_eq!(out, "<p><a href=\"/x\">");
    }

    #[test]
    fn t_no_open_tag() {
        let mut out = String::from("plain");
        inject_attribute(&mut out, "id", "a");
        assert_eq!(out, "plain id=\"a\"");
    }

    #[test]
    fn t_decorates_the_enclosing_tag() {
        assert_eq!(render(div((id("main"), class("box"), p(text("hi"))))),
                   "<div id=\"main\" class=\"box\"><p>hi</p></div>");
        assert_eq!(render(input((r#type("checkbox"), disabled("true")))),
                   "<input type=\"checkbox\" disabled=\"true\">");
    }

    #[test]
    fn t_nth_child() {
        // After a closed child the last `>` belongs to that child.
        let out = render(div((text("a"), p(text("b")), class("c"))));
        assert_eq!(out, "<div>a<p>b</p class=\"c\"></div>");

        let out = render(div((text("x"), class("c"), p(text("b")))));
        let open_end = out.find('>').unwrap();
        let pos = out.find("class=\"c\"").unwrap();
        assert!(pos < open_end);
        assert_eq!(out, "<div class=\"c\">x<p>b</p></div>");
    }

    #[test]
    fn t_no_collision_detection() {
        assert_eq!(render(p((class("a"), class("b")))),
                   "<p class=\"a\" class=\"b\"></p>");
    }

    #[test]
    fn t_checked() {
        assert_eq!(Attr::checked("href", "/").unwrap().name(), "href");
        assert!(Attr::checked("data-x", "1").is_ok());
        assert!(Attr::checked("hx-on-click", "go()").is_ok());
        let e = Attr::checked("hreff", "/").unwrap_err();
        assert_eq!(e.to_string(), "unknown attribute \"hreff\"");
    }

    #[test]
    fn t_data_attr() {
        assert_eq!(render(div(data_attr("user-id", "7"))),
                   "<div data-user-id=\"7\"></div>");
    }

    #[test]
    fn t_raw_names() {
        assert_eq!(r#for("f").name(), "for");
        assert_eq!(accept_charset("utf-8").name(), "accept-charset");
        assert_eq!(http_equiv("refresh").name(), "http-equiv");
    }
}
