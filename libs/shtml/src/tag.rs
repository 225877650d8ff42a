//! The two primitives every element is written with.
//!
//! A `BlockTag` writes its open tag when created and its close tag
//! when dropped, so the nesting of the output follows the nesting of
//! scopes. Nothing here adds whitespace.

use std::collections::BTreeMap;

use kstring::KString;

use crate::{myfrom::{ks, MyFrom}, trace};

/// Attributes written into an open tag, in key order.
pub type AttrMap = BTreeMap<KString, KString>;

pub fn att<T, U>(key: T, val: U) -> Option<(KString, KString)>
    where KString: MyFrom<T> + MyFrom<U>
{
    Some((ks(key), ks(val)))
}

pub fn opt_att<T, U>(key: T, val: Option<U>) -> Option<(KString, KString)>
    where KString: MyFrom<T> + MyFrom<U>
{
    val.map(|v| (ks(key), ks(v)))
}

pub fn attr_map<const N: usize>(atts: [Option<(KString, KString)>; N]) -> AttrMap {
    atts.into_iter().flatten().collect()
}

fn write_open_tag(out: &mut String, tag: &str, inject: &str, params: &AttrMap) {
    out.push('<');
    out.push_str(tag);
    for (key, val) in params {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(val);
        out.push('"');
    }
    if !inject.is_empty() {
        out.push(' ');
        out.push_str(inject);
    }
    out.push('>');
}

/// An open element, closed when this goes out of scope.
pub struct BlockTag<'b> {
    out: &'b mut String,
    tag: &'b str,
}

impl<'b> BlockTag<'b> {
    /// Writes `<tag k="v" ... inject>`; `inject` is raw attribute
    /// text (may be empty).
    pub fn open(tag: &'b str, out: &'b mut String, inject: &str, params: &AttrMap) -> Self {
        trace!("open <{tag}>");
        write_open_tag(out, tag, inject, params);
        BlockTag { out, tag }
    }

    /// The buffer, for writing the element's children.
    pub fn buffer(&mut self) -> &mut String {
        self.out
    }
}

impl<'b> Drop for BlockTag<'b> {
    fn drop(&mut self) {
        self.out.push_str("</");
        self.out.push_str(self.tag);
        self.out.push('>');
    }
}

/// Like `BlockTag`, but never closed.
pub struct InlineTag<'b> {
    out: &'b mut String,
}

impl<'b> InlineTag<'b> {
    pub fn open(tag: &str, out: &'b mut String, inject: &str, params: &AttrMap) -> Self {
        trace!("open <{tag}> (inline)");
        write_open_tag(out, tag, inject, params);
        InlineTag { out }
    }

    pub fn buffer(&mut self) -> &mut String {
        self.out
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_block_tag() {
        let mut out = String::new();
        {
            let mut t = BlockTag::open("div", &mut out, "", &AttrMap::new());
            t.buffer().push_str("hi");
        }
        assert_eq!(out, "<div>hi</div>");
    }

    #[test]
    fn t_nesting() {
        let mut out = String::new();
        {
            let mut outer = BlockTag::open("ul", &mut out, "", &AttrMap::new());
            for _ in 0..2 {
                let mut inner = BlockTag::open("li", outer.buffer(), "", &AttrMap::new());
                inner.buffer().push('x');
            }
        }
        assert_eq!(out, "<ul><li>x</li><li>x</li></ul>");
    }

    #[test]
    fn t_params_and_inject() {
        let mut out = String::new();
        let params = attr_map([
            att("name", "q"),
            opt_att::<&str, &str>("value", None),
            att("class", "search"),
        ]);
        {
            let _t = BlockTag::open("form", &mut out, "novalidate=\"\"", &params);
        }
        assert_eq!(out, "<form class=\"search\" name=\"q\" novalidate=\"\"></form>");
    }

    #[test]
    fn t_inline_tag() {
        let mut out = String::new();
        {
            let params = attr_map([att("charset", "UTF-8")]);
            let _t = InlineTag::open("meta", &mut out, "", &params);
        }
        assert_eq!(out, "<meta charset=\"UTF-8\">");
    }
}
