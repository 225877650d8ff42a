//! htmx attributes and the bundled htmx library.

use lazy_static::lazy_static;

use crate::attr::Attr;
use crate::js;

macro_rules! define_hx_fns {
    ($( $f:ident $name:literal; )*) => {
        $(
            #[doc = concat!("`", $name, "`")]
            pub fn $f(value: &'static str) -> Attr {
                Attr::new($name, value)
            }
        )*
    }
}

shtml_html::with_hx_attributes!(define_hx_fns);

/// `hx-on-<event>="<handler>"`
pub fn on(event: &str, handler: &'static str) -> Attr {
    Attr::new(format!("hx-on-{event}"), handler)
}

/// The minified htmx 2.0.1 source.
pub const HTMX_2_0_1: &str = include_str!("../assets/htmx-2.0.1.min.js");

lazy_static!{
    /// A JS builder holding the htmx library, ready to be injected.
    pub static ref HTMX2: js::Builder = js::Builder::from_script(HTMX_2_0_1);
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{text, Component};
    use crate::elements::{button, form};

    #[test]
    fn t_hx_attributes() {
        let mut out = String::new();
        form((post("/login"), target("center"), swap("innerHTML"), ext("json-enc"),
              button(text("go")))).render(&mut out);
        assert_eq!(out, "<form hx-post=\"/login\" hx-target=\"center\" \
                         hx-swap=\"innerHTML\" hx-ext=\"json-enc\">\
                         <button>go</button></form>");
    }

    #[test]
    fn t_on() {
        let a = on("click", "alert(1)");
        assert_eq!(a.name(), "hx-on-click");
        assert_eq!(a.value(), "alert(1)");
    }

    #[test]
    fn t_bundle() {
        assert!(HTMX2.as_str().contains("version:\"2.0.1\""));
    }
}
