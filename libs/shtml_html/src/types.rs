use serde::Serialize;

/// Whether an element is written with a closing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TagKind {
    /// `<tag ...>children</tag>`
    Block,
    /// `<tag ...>`, never closed (void elements)
    Inline,
}

/// Where in a document an element may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    Head,
    Body,
    /// Both in `<head>` and in `<body>` (`title`, `style`, `script`, ...)
    Any,
    /// `html`, `head` and `body` themselves
    Root,
}

impl Slot {
    pub fn allows_head(self) -> bool {
        match self {
            Slot::Head | Slot::Any => true,
            Slot::Body | Slot::Root => false,
        }
    }

    pub fn allows_body(self) -> bool {
        match self {
            Slot::Body | Slot::Any => true,
            Slot::Head | Slot::Root => false,
        }
    }
}

/// Grouping used in the element table, for documentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    BasicHtml,
    Formatting,
    Forms,
    Frames,
    Images,
    AudioVideo,
    Links,
    Lists,
    Tables,
    Styles,
    MetaInfo,
    Programming,
}

#[derive(Debug, Serialize)]
pub struct ElementMeta {
    pub tag_name: &'static str,
    pub kind: TagKind,
    pub slot: Slot,
    pub category: Category,
    pub description: &'static str,
}

impl ElementMeta {
    pub fn has_closing_tag(&self) -> bool {
        self.kind == TagKind::Block
    }
}

impl PartialEq for ElementMeta {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.tag_name == other.tag_name
    }
}

impl Eq for ElementMeta {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AttributeFamily {
    Standard,
    /// `on*` event handler attributes
    Event,
    /// `hx-*` attributes understood by htmx
    Htmx,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AttributeMeta {
    pub name: &'static str,
    pub family: AttributeFamily,
    /// Which elements the attribute is meant for. Not enforced.
    pub applies_to: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CssPropertyMeta {
    pub name: &'static str,
}
