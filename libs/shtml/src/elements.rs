//! One constructor per HTML element, generated from the
//! `shtml_html` element table, plus `head`, `body` and `meta`.

use std::marker::PhantomData;

use kstring::KString;
use shtml_html::meta::{self as metadb, METADB};
use shtml_html::types::{ElementMeta, TagKind};

use crate::component::{AnySlot, BodyContent, BodySlot, Component, HeadContent, HeadSlot};
use crate::error::{Result, ShtmlErrorKind};
use crate::tag::{att, attr_map, AttrMap, BlockTag, InlineTag};

/// An element with its children; `S` is the slot marker saying where
/// it may be used.
#[derive(Debug, Clone)]
pub struct Element<C, S = BodySlot> {
    meta: &'static ElementMeta,
    children: C,
    slot: PhantomData<S>,
}

impl<C, S> Element<C, S> {
    pub fn new(meta: &'static ElementMeta, children: C) -> Self {
        Element { meta, children, slot: PhantomData }
    }

    pub fn meta(&self) -> &'static ElementMeta {
        self.meta
    }
}

impl<C: BodyContent> Element<C, BodySlot> {
    /// For tags only known at runtime. Fails for unknown tags and for
    /// the ones that can't go into a body.
    pub fn by_name(tag_name: &str, children: C) -> Result<Self> {
        let meta = METADB.element(tag_name)
            .filter(|meta| meta.slot.allows_body())
            .ok_or_else(|| ShtmlErrorKind::UnknownElement(KString::from_ref(tag_name)))?;
        Ok(Element::new(meta, children))
    }
}

impl<C: Component, S> Component for Element<C, S> {
    fn render(&self, out: &mut String) {
        let no_params = AttrMap::new();
        match self.meta.kind {
            TagKind::Block => {
                let mut tag = BlockTag::open(self.meta.tag_name, out, "", &no_params);
                self.children.render(tag.buffer());
            }
            TagKind::Inline => {
                let mut tag = InlineTag::open(self.meta.tag_name, out, "", &no_params);
                self.children.render(tag.buffer());
            }
        }
    }
}

impl<C: Component> BodyContent for Element<C, BodySlot> {}
impl<C: Component> BodyContent for Element<C, AnySlot> {}
impl<C: Component> HeadContent for Element<C, AnySlot> {}
impl<C: Component> HeadContent for Element<C, HeadSlot> {}

macro_rules! slot_marker {
    (Body) => { BodySlot };
    (Head) => { HeadSlot };
    (Any) => { AnySlot };
}

macro_rules! define_element_fns {
    ($( $f:ident $konst:ident $tag:literal $kind:ident $slot:ident
        $category:ident $description:literal; )*) => {
        $(
            #[doc = concat!("`<", $tag, ">`: ", $description)]
            pub fn $f<C: BodyContent>(children: C) -> Element<C, slot_marker!($slot)> {
                Element::new(&metadb::$konst, children)
            }
        )*
    }
}

shtml_html::with_elements!(define_element_fns);


/// `<head>`, only valid as the first argument of `html`.
#[derive(Debug, Clone)]
pub struct Head<C>(C);

pub fn head<C: HeadContent>(children: C) -> Head<C> {
    Head(children)
}

impl<C: Component> Component for Head<C> {
    fn render(&self, out: &mut String) {
        let mut tag = BlockTag::open(metadb::HEAD.tag_name, out, "", &AttrMap::new());
        self.0.render(tag.buffer());
    }
}

/// `<body>`, only valid as the second argument of `html`.
#[derive(Debug, Clone)]
pub struct Body<C>(C);

pub fn body<C: BodyContent>(children: C) -> Body<C> {
    Body(children)
}

impl<C: Component> Component for Body<C> {
    fn render(&self, out: &mut String) {
        let mut tag = BlockTag::open(metadb::BODY.tag_name, out, "", &AttrMap::new());
        self.0.render(tag.buffer());
    }
}

/// The attribute a `<meta>` tag carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaType {
    Charset,
    Author,
    Viewport,
    HttpEquiv,
    Content,
    Name,
}

impl MetaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MetaType::Charset => "charset",
            MetaType::Author => "author",
            MetaType::Viewport => "viewport",
            MetaType::HttpEquiv => "http-equiv",
            MetaType::Content => "content",
            MetaType::Name => "name",
        }
    }
}

/// `<meta type="value">`, head only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meta {
    ty: MetaType,
    value: &'static str,
}

pub fn meta(ty: MetaType, value: &'static str) -> Meta {
    Meta { ty, value }
}

impl Component for Meta {
    fn render(&self, out: &mut String) {
        let params = attr_map([att(self.ty.as_str(), self.value)]);
        InlineTag::open(metadb::META.tag_name, out, "", &params);
    }
}
impl HeadContent for Meta {}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::text;

    fn render(c: impl Component) -> String {
        let mut out = String::new();
        c.render(&mut out);
        out
    }

    #[test]
    fn t_block_and_inline() {
        assert_eq!(render(p((text("a"), br(()), text("b")))), "<p>a<br>b</p>");
        assert_eq!(render(table(tr((td(text("1")), td(text("2")))))),
                   "<table><tr><td>1</td><td>2</td></tr></table>");
    }

    #[test]
    fn t_tree_structure() {
        let out = render(div((
            section((h4(text("t")), ul([li(text("x")), li(text("y"))]))),
            footer(small(text("f"))),
        )));
        assert_eq!(out, "<div><section><h4>t</h4><ul><li>x</li><li>y</li></ul>\
                         </section><footer><small>f</small></footer></div>");
        for tag in ["div", "section", "h4", "ul", "li", "footer", "small"] {
            assert_eq!(out.matches(&format!("<{tag}>")).count(),
                       out.matches(&format!("</{tag}>")).count(),
                       "{tag}");
        }
    }

    #[test]
    fn t_by_name() {
        let e = Element::by_name("article", text("x")).unwrap();
        assert_eq!(render(e), "<article>x</article>");
        assert!(Element::by_name("blink", ()).is_err());
        assert!(Element::by_name("head", ()).is_err());
        assert!(Element::by_name("meta", ()).is_err());
    }

    #[test]
    fn t_head_elements() {
        let out = render(head((
            meta(MetaType::Charset, "UTF-8"),
            meta(MetaType::Author, "someone"),
            title(text("t")),
            style(text("p{}")),
            link(()),
        )));
        assert_eq!(out, "<head><meta charset=\"UTF-8\"><meta author=\"someone\">\
                         <title>t</title><style>p{}</style><link></head>");
    }

    #[test]
    fn t_body() {
        assert_eq!(render(body(h1(text("hi")))), "<body><h1>hi</h1></body>");
    }
}
