//! The site's stylesheet: a light theme for plain, class-less markup.

use shtml::css::{self, Builder};

use anyhow::Result;

pub fn stylesheet() -> Result<Builder> {
    let mut c = Builder::new();
    c.select("html")
        .set(css::font_family("system-ui, -apple-system, \"Segoe UI\", sans-serif"))?
        .set(css::font_size("62.5%"))?;
    c.select("body")
        .set(css::font_size("1.8rem"))?
        .set(css::line_height("1.618"))?
        .set(css::max_width("48em"))?
        .set(css::margin("auto"))?
        .set(css::padding("13px"))?
        .set(css::color("#4a4a4a"))?
        .set(css::background_color("#f9f9f9"))?;
    c.select("h1, h2, h3, h4, h5, h6")
        .set(css::line_height("1.1"))?
        .set(css::margin_top("2.4rem"))?
        .set(css::margin_bottom("1.2rem"))?
        .set(css::font_weight("700"))?;
    c.select("a")
        .set(css::color("#1d7484"))?
        .set(css::text_decoration("none"))?;
    c.select("a:hover")
        .set(css::color("#982c61"))?
        .set(css::border_bottom("2px solid #4a4a4a"))?;
    c.select("hr")
        .set(css::border_style("none"))?
        .set(css::border_top("1px solid #ddd"))?
        .set(css::margin("2.4rem 0"))?;
    c.select("code, pre")
        .set(css::font_size("0.9em"))?
        .set(css::background_color("#f1f1f1"))?;
    c.select("pre")
        .set(css::padding("1em"))?
        .set(css::overflow_x("auto"))?;
    c.select("table")
        .set(css::width("100%"))?
        .set(css::border_collapse("collapse"))?
        .set(css::margin_bottom("2.4rem"))?;
    c.select("td, th")
        .set(css::padding("0.5em"))?
        .set(css::border_bottom("1px solid #f1f1f1"))?
        .set(css::text_align("left"))?;
    c.select("input, textarea, button")
        .set(css::font_size("1.6rem"))?
        .set(css::padding("0.6em"))?
        .set(css::border("1px solid #f1f1f1"))?
        .set(css::border_radius("4px"))?;
    c.select("input[type=submit], button")
        .set(css::color("#f9f9f9"))?
        .set(css::background_color("#4a4a4a"))?
        .set(css::cursor("pointer"))?;
    Ok(c)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_stylesheet() {
        let css = stylesheet().unwrap();
        let s = css.build();
        assert!(s.starts_with("html{font-family:system-ui"));
        assert!(s.contains("a{color:#1d7484;text-decoration:none;}"));
        assert!(!s.contains('\n'));
    }
}
