//! The metadata statics derived from the tables, and `METADB` for
//! looking names up at runtime.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use kstring::KString;
use lazy_static::lazy_static;
use serde::Serialize;

use crate::env::get_env_bool;
use crate::types::{AttributeFamily, AttributeMeta, Category, CssPropertyMeta,
                   ElementMeta, Slot, TagKind};

macro_rules! define_element_metas {
    ($( $f:ident $konst:ident $tag:literal $kind:ident $slot:ident
        $category:ident $description:literal; )*) => {
        $(
            pub static $konst: ElementMeta = ElementMeta {
                tag_name: $tag,
                kind: TagKind::$kind,
                slot: Slot::$slot,
                category: Category::$category,
                description: $description,
            };
        )*

        /// The elements that have a generated constructor, in table
        /// order.
        pub static ELEMENTS: &[&ElementMeta] = &[ $( &$konst ),* ];
    }
}

crate::with_elements!(define_element_metas);

pub static HTML: ElementMeta = ElementMeta {
    tag_name: "html",
    kind: TagKind::Block,
    slot: Slot::Root,
    category: Category::BasicHtml,
    description: "Defines an HTML document",
};

pub static HEAD: ElementMeta = ElementMeta {
    tag_name: "head",
    kind: TagKind::Block,
    slot: Slot::Root,
    category: Category::MetaInfo,
    description: "Contains metadata/information for the document",
};

pub static BODY: ElementMeta = ElementMeta {
    tag_name: "body",
    kind: TagKind::Block,
    slot: Slot::Root,
    category: Category::BasicHtml,
    description: "Defines the document's body",
};

pub static META: ElementMeta = ElementMeta {
    tag_name: "meta",
    kind: TagKind::Inline,
    slot: Slot::Head,
    category: Category::MetaInfo,
    description: "Defines metadata about an HTML document",
};

macro_rules! define_attribute_metas {
    ($( $f:ident $name:literal $family:ident $applies_to:literal; )*) => {
        pub static ATTRIBUTES: &[AttributeMeta] = &[
            $(
                AttributeMeta {
                    name: $name,
                    family: AttributeFamily::$family,
                    applies_to: $applies_to,
                },
            )*
        ];
    }
}

crate::with_attributes!(define_attribute_metas);

macro_rules! define_hx_attribute_metas {
    ($( $f:ident $name:literal; )*) => {
        pub static HX_ATTRIBUTES: &[AttributeMeta] = &[
            $(
                AttributeMeta {
                    name: $name,
                    family: AttributeFamily::Htmx,
                    applies_to: "global",
                },
            )*
        ];
    }
}

crate::with_hx_attributes!(define_hx_attribute_metas);

macro_rules! define_css_property_metas {
    ($( $f:ident $name:literal; )*) => {
        pub static CSS_PROPERTIES: &[CssPropertyMeta] = &[
            $( CssPropertyMeta { name: $name }, )*
        ];
    }
}

crate::with_css_properties!(define_css_property_metas);


#[derive(Debug)]
pub struct MetaDb {
    elements: HashMap<KString, &'static ElementMeta>,
    attributes: HashMap<KString, &'static AttributeMeta>,
    css_properties: HashMap<KString, &'static CssPropertyMeta>,
}

fn insert_unique<V>(
    map: &mut HashMap<KString, V>, key: &'static str, val: V, what: &str
) -> Result<()> {
    if map.insert(KString::from_static(key), val).is_some() {
        bail!("duplicate {what} {key:?} in the tables")
    }
    Ok(())
}

#[derive(Serialize)]
struct MetaDbSnapshot<'t> {
    elements: Vec<&'t ElementMeta>,
    attributes: Vec<&'t AttributeMeta>,
    css_properties: Vec<&'t str>,
}

impl MetaDb {
    /// Index the static tables, failing on duplicate names.
    pub fn build() -> Result<MetaDb> {
        let debug = get_env_bool("SHTML_META_DEBUG")?;

        let mut elements = HashMap::new();
        for meta in ELEMENTS.iter().copied().chain([&HTML, &HEAD, &BODY, &META]) {
            insert_unique(&mut elements, meta.tag_name, meta, "element")?;
        }
        let mut attributes = HashMap::new();
        for meta in ATTRIBUTES.iter().chain(HX_ATTRIBUTES) {
            insert_unique(&mut attributes, meta.name, meta, "attribute")?;
        }
        let mut css_properties = HashMap::new();
        for meta in CSS_PROPERTIES {
            insert_unique(&mut css_properties, meta.name, meta, "css property")?;
        }

        if debug {
            eprintln!("meta db: {} elements, {} attributes, {} css properties",
                      elements.len(), attributes.len(), css_properties.len());
        }
        Ok(MetaDb { elements, attributes, css_properties })
    }

    /// Tag names are matched case-insensitively.
    pub fn element(&self, tag_name: &str) -> Option<&'static ElementMeta> {
        match self.elements.get(tag_name) {
            Some(meta) => Some(*meta),
            None => self.elements.get(tag_name.to_ascii_lowercase().as_str()).copied()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&'static AttributeMeta> {
        self.attributes.get(name).copied()
    }

    /// Also true for any `data-*` and `hx-*` name (custom data and
    /// htmx attributes like `hx-on-click` are open-ended).
    pub fn is_known_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
            || name.starts_with("data-")
            || name.starts_with("hx-")
    }

    pub fn css_property(&self, name: &str) -> Option<&'static CssPropertyMeta> {
        self.css_properties.get(name).copied()
    }

    /// Also true for custom properties (`--*`).
    pub fn is_known_css_property(&self, name: &str) -> bool {
        self.css_properties.contains_key(name)
            || (name.starts_with("--") && name.len() > 2)
    }

    /// Elements sorted by tag name.
    pub fn elements(&self) -> Vec<&'static ElementMeta> {
        let mut v: Vec<_> = self.elements.values().copied().collect();
        v.sort_by_key(|m| m.tag_name);
        v
    }

    /// The whole database as pretty-printed JSON, sorted by name.
    pub fn to_json(&self) -> Result<String> {
        let mut attributes: Vec<_> = self.attributes.values().copied().collect();
        attributes.sort_by_key(|m| m.name);
        let mut css_properties: Vec<_> = self.css_properties.keys()
            .map(|k| k.as_str()).collect();
        css_properties.sort();
        let snapshot = MetaDbSnapshot {
            elements: self.elements(),
            attributes,
            css_properties,
        };
        serde_json::to_string_pretty(&snapshot)
            .context("serializing the meta db to JSON")
    }
}

lazy_static!{
    pub static ref METADB: MetaDb = MetaDb::build().unwrap();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_build() {
        let db = MetaDb::build().unwrap();
        assert_eq!(db.elements().len(), ELEMENTS.len() + 4);
        assert_eq!(db.css_property("z-index").unwrap().name, "z-index");
        assert_eq!(CSS_PROPERTIES.len(), 346);
    }

    #[test]
    fn t_element_lookup() {
        let div = METADB.element("div").unwrap();
        assert_eq!(div, &DIV);
        assert!(div.has_closing_tag());
        assert_eq!(METADB.element("DIV"), Some(&DIV));
        assert!(!METADB.element("input").unwrap().has_closing_tag());
        assert_eq!(METADB.element("meta").unwrap().slot, Slot::Head);
        assert_eq!(METADB.element("blink"), None);
    }

    #[test]
    fn t_void_elements_are_inline() {
        for tag in ["link", "col", "embed", "param", "base", "area", "img",
                    "input", "br", "hr", "wbr", "source", "track", "meta"] {
            assert_eq!(METADB.element(tag).unwrap().kind, TagKind::Inline,
                       "{tag}");
        }
    }

    #[test]
    fn t_attributes() {
        assert_eq!(METADB.attribute("for").unwrap().family,
                   AttributeFamily::Standard);
        assert_eq!(METADB.attribute("onclick").unwrap().family,
                   AttributeFamily::Event);
        assert_eq!(METADB.attribute("hx-post").unwrap().family,
                   AttributeFamily::Htmx);
        assert!(METADB.is_known_attribute("data-user-id"));
        assert!(METADB.is_known_attribute("hx-on-click"));
        assert!(!METADB.is_known_attribute("frobnicate"));
    }

    #[test]
    fn t_css_properties() {
        assert!(METADB.is_known_css_property("font-size"));
        assert!(METADB.is_known_css_property("--accent"));
        assert!(!METADB.is_known_css_property("--"));
        assert!(!METADB.is_known_css_property("font_size"));
    }

    #[test]
    fn t_to_json() {
        let json = METADB.to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["elements"][0]["tag_name"], "a");
        assert_eq!(v["css_properties"][0], "accent-color");
        assert!(v["attributes"].as_array().unwrap().iter().any(
            |a| a["name"] == "hx-target" && a["family"] == "Htmx"));
    }
}
