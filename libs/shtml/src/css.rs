//! Building a stylesheet from selectors and declarations, and splicing
//! it into a document as a `<style>` block.
//!
//! ```ignore
//! let mut css = css::Builder::new();
//! css.select("h1").set(css::color("red"))?.set(css::font_size("10px"))?;
//! assert_eq!(css.build(), "h1{color:red;font-size:10px;}");
//! ```

use std::sync::Mutex;
use std::fmt::{self, Display};

use kstring::KString;
use shtml_html::meta::METADB;

use crate::document::Inject;
use crate::error::{Result, ShtmlErrorKind};
use crate::myfrom::{ks, MyFrom};
use crate::trace;

/// `property:value;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    property: KString,
    value: KString,
}

impl Declaration {
    /// No check is made whether `property` exists.
    pub fn new<V>(property: &'static str, value: V) -> Self
        where KString: MyFrom<V>
    {
        Declaration { property: KString::from_static(property), value: ks(value) }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{};", self.property, self.value)
    }
}

/// A declaration for a property name only known at runtime; custom
/// properties (`--name`) are accepted too.
pub fn declaration<N, V>(property: N, value: V) -> Result<Declaration>
    where KString: MyFrom<N> + MyFrom<V>
{
    let property = ks(property);
    if !METADB.is_known_css_property(&property) {
        return Err(ShtmlErrorKind::UnknownCssProperty(property).into());
    }
    Ok(Declaration { property, value: ks(value) })
}

/// Wrap `s` in double quotes, for values like `content`.
pub fn qs(s: &str) -> String {
    format!("\"{s}\"")
}

macro_rules! define_css_property_fns {
    ($( $f:ident $name:literal; )*) => {
        $(
            #[doc = concat!("`", $name, ":value;`")]
            pub fn $f<V>(value: V) -> Declaration
                where KString: MyFrom<V>
            {
                Declaration::new($name, value)
            }
        )*
    }
}

shtml_html::with_css_properties!(define_css_property_fns);


/// The last `build` result, `None` after a change.
#[derive(Debug, Default)]
struct BuildCache(Mutex<Option<String>>);

impl BuildCache {
    fn invalidate(&mut self) {
        *self.0.get_mut().expect("never poisoned") = None;
    }

    fn get_or_build(&self, build: impl FnOnce() -> String) -> String {
        let mut cache = self.0.lock().expect("never poisoned");
        cache.get_or_insert_with(build).clone()
    }
}

impl Clone for BuildCache {
    fn clone(&self) -> Self {
        BuildCache(Mutex::new(self.0.lock().expect("never poisoned").clone()))
    }
}

/// Selectors with their declarations, in the order the selectors were
/// first chosen. The result of `build` is cached until the next change.
#[derive(Debug, Default, Clone)]
pub struct Builder {
    prelude: String,
    rules: Vec<(KString, String)>,
    cursor: Option<usize>,
    cache: BuildCache,
}

impl Builder {
    pub fn new() -> Self {
        Builder::default()
    }

    /// Start from an existing stylesheet; it comes first in every
    /// `build` output.
    pub fn from_css(css: &str) -> Self {
        Builder {
            prelude: css.to_string(),
            ..Builder::default()
        }
    }

    /// Make `selector` the target of the following `set` calls,
    /// adding it if it's new.
    pub fn select<S>(&mut self, selector: S) -> &mut Self
        where KString: MyFrom<S>
    {
        let selector = ks(selector);
        let i = match self.rules.iter().position(|(s, _)| *s == selector) {
            Some(i) => i,
            None => {
                self.rules.push((selector, String::new()));
                self.cache.invalidate();
                self.rules.len() - 1
            }
        };
        self.cursor = Some(i);
        self
    }

    /// Append a declaration to the selected selector.
    pub fn set(&mut self, declaration: Declaration) -> Result<&mut Self> {
        let i = self.cursor.ok_or_else(|| ShtmlErrorKind::Css {
            desc: "No selector specified, use select(<selector>) before set(<css-prop>)".into(),
            hint: "try specifying some selector, eg: select(\"*\")".into(),
        })?;
        use std::fmt::Write;
        let _ = write!(&mut self.rules[i].1, "{declaration}");
        self.cache.invalidate();
        Ok(self)
    }

    /// The selected selector, if any.
    pub fn selected(&self) -> Option<&str> {
        self.cursor.map(|i| self.rules[i].0.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.prelude.is_empty() && self.rules.is_empty()
    }

    /// The prelude followed by `selector{declarations}` for every
    /// selector, without whitespace.
    pub fn build(&self) -> String {
        self.cache.get_or_build(|| {
            trace!("rebuilding stylesheet");
            let mut css = self.prelude.clone();
            for (selector, declarations) in &self.rules {
                css.push_str(selector);
                css.push('{');
                css.push_str(declarations);
                css.push('}');
            }
            css
        })
    }
}

impl Inject for Builder {
    /// Inserts the `<style>` block before the first `</head>`, or
    /// appends it if there is none.
    fn inject(&self, dest: &mut String) {
        let block = format!("<style>\n{}\n</style>\n", self.build());
        match dest.find("</head>") {
            Some(pos) => {
                trace!("injecting style block at {pos}");
                dest.insert_str(pos, &block);
            }
            None => {
                trace!("no </head>, appending style block");
                dest.push_str(&block);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_build() {
        let mut css = Builder::new();
        css.select("h1").set(color("red")).unwrap().set(font_size("10px")).unwrap();
        assert_eq!(css.build(), "h1{color:red;font-size:10px;}");
    }

    #[test]
    fn t_build_is_cached() {
        let mut css = Builder::new();
        css.select("p").set(margin("0")).unwrap();
        let a = css.build();
        let b = css.build();
        assert_eq!(a, b);
        css.set(padding("1em")).unwrap();
        assert_eq!(css.build(), "p{margin:0;padding:1em;}");
        css.select("a");
        assert_eq!(css.build(), "p{margin:0;padding:1em;}a{}");
    }

    #[test]
    fn t_insertion_order() {
        let mut css = Builder::new();
        css.select("body").set(margin("0")).unwrap();
        css.select("a").set(color("blue")).unwrap();
        css.select("body").set(padding("0")).unwrap();
        assert_eq!(css.build(), "body{margin:0;padding:0;}a{color:blue;}");
        assert_eq!(css.selected(), Some("body"));
    }

    #[test]
    fn t_set_without_select() {
        let mut css = Builder::new();
        let e = css.set(color("red")).unwrap_err();
        assert!(matches!(e.kind(), ShtmlErrorKind::Css { .. }));
        assert_eq!(e.to_string(),
                   "css-error: No selector specified, use select(<selector>) before \
                    set(<css-prop>). hint: try specifying some selector, eg: select(\"*\")");
    }

    #[test]
    fn t_prelude() {
        let mut css = Builder::from_css("html{color:#222;}");
        assert_eq!(css.build(), "html{color:#222;}");
        css.select("p").set(margin("0")).unwrap();
        assert_eq!(css.build(), "html{color:#222;}p{margin:0;}");
    }

    #[test]
    fn t_inject() {
        let mut css = Builder::new();
        css.select("p").set(color("red")).unwrap();
        let mut doc = String::from("<html><head></head><body></body></html>");
        css.inject(&mut doc);
        assert_eq!(doc, "<html><head><style>\np{color:red;}\n</style>\n</head>\
                         <body></body></html>");
    }

    #[test]
    fn t_inject_twice() {
        let mut css = Builder::new();
        css.select("p").set(color("red")).unwrap();
        let mut doc = String::from("<html><head></head><body></body></html>");
        css.inject(&mut doc);
        css.inject(&mut doc);
        assert_eq!(doc, "<html><head><style>\np{color:red;}\n</style>\n\
                         <style>\np{color:red;}\n</style>\n</head>\
                         <body></body></html>");
    }

    #[test]
    fn t_clone_keeps_rules() {
        let mut css = Builder::new();
        css.select("p").set(color("red")).unwrap();
        let built = css.build();
        let mut copy = css.clone();
        assert_eq!(copy.build(), built);
        copy.set(margin("0")).unwrap();
        assert_eq!(copy.build(), "p{color:red;margin:0;}");
        assert_eq!(css.build(), "p{color:red;}");
    }

    #[test]
    fn t_shareable() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<Builder>();
        let mut css = Builder::new();
        css.select("a").set(color("blue")).unwrap();
        let css = std::sync::Arc::new(css);
        let handles: Vec<_> = (0..4).map(|_| {
            let css = css.clone();
            std::thread::spawn(move || css.build())
        }).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), "a{color:blue;}");
        }
    }

    #[test]
    fn t_inject_without_head() {
        let mut css = Builder::new();
        css.select("p").set(color("red")).unwrap();
        let mut doc = String::from("<p>x</p>");
        css.inject(&mut doc);
        assert_eq!(doc, "<p>x</p><style>\np{color:red;}\n</style>\n");
    }

    #[test]
    fn t_declarations() {
        assert_eq!(content(qs("*")).to_string(), "content:\"*\";");
        assert_eq!(declaration("z-index", "2").unwrap().to_string(), "z-index:2;");
        assert_eq!(declaration("--accent", "#08f").unwrap().property(), "--accent");
        assert_eq!(declaration("colour", "red").unwrap_err().to_string(),
                   "unknown CSS property \"colour\"");
    }
}
