//! The pages. Each returns the finished HTML text.

use anyhow::Result;
use shtml::prelude::*;

use crate::config::SiteConfig;
use crate::docs::RouteDocs;
use crate::route::RouteRegistry;
use crate::style::stylesheet;

/// What the pages need, built once at startup.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub config: SiteConfig,
    pub docs: RouteDocs,
    pub stylesheet: css::Builder,
}

impl ViewContext {
    pub fn new(config: SiteConfig, registry: &RouteRegistry) -> Result<ViewContext> {
        Ok(ViewContext {
            config,
            docs: RouteDocs::render(registry)?,
            stylesheet: stylesheet()?,
        })
    }

    fn site_fields(&self) -> Fields {
        Fields::new()
            .set("server_name", self.config.server_name.as_str())
            .set("author", self.config.author.as_str())
    }

    fn finish(&self, doc: Document) -> String {
        doc.inject(&self.stylesheet).with_doctype().into_string()
    }
}

const DESCRIPTION: &str =
    "Xbucket is a powerful and flexible bucket management HTTP server that \
     offers advanced support for image compression and manipulation. It is \
     designed to be integrated as a centralized bucket server for diverse \
     systems, where each system has isolated access to a set of files.";

/// The start page, with the API documentation.
pub fn index(ctx: &ViewContext) -> String {
    let doc = html(
        head((
            meta(MetaType::Charset, "UTF-8"),
            meta(MetaType::Viewport, "width=device-width, initial-scale=1.0"),
            meta(MetaType::Author, "<<author>>"),
            title(placeholder("server_name")),
        )),
        body((
            h1(text("xbucket is running")),
            p(text(DESCRIPTION)),
            hr(()),
            h2(text("Api documentation")),
            placeholder("docs"),
            script(text("document.querySelectorAll('input.auth[type=checkbox]')\
                         .forEach(e=>e.checked=true)")),
        )),
    ).render_with(&ctx.site_fields().set("docs", ctx.docs.html()));
    ctx.finish(doc)
}

/// The login form, posting JSON via htmx and replacing the content of
/// the enclosing `<center>` with the response.
pub fn login_form() -> String {
    part(form((
        hx::post("/login"),
        hx::target("center"),
        hx::swap("innerHTML"),
        hx::ext("json-enc"),
        p((label(text("username")),
           input((attr::r#type("text"), attr::name("username"))))),
        p((label(text("password")),
           input((attr::r#type("password"), attr::name("password"))))),
        p(input((attr::r#type("submit"), attr::value("login")))),
    ))).render()
}

pub fn login(ctx: &ViewContext) -> String {
    let mut doc = html(
        head(title(text("login"))),
        body(center((attr::id("content"), h1(text("login")), placeholder("form")))),
    ).render_with(&Fields::new().set("form", login_form()));
    if ctx.config.htmx {
        doc = doc.inject(&*hx::HTMX2);
    }
    ctx.finish(doc)
}

pub fn login_success(ctx: &ViewContext) -> String {
    let doc = html(
        head(title(text("login"))),
        body(center(h1(text("login success")))),
    ).render();
    ctx.finish(doc)
}

/// Fragment replacing the login form after a failed attempt.
pub fn login_fail() -> String {
    part((
        h1(text("login")),
        p((attr::style("color:red"), text("login failed"))),
        placeholder("form"),
    )).render_with(&Fields::new().set("form", login_form()))
}

/// `desc` is inserted as is; escape it if it may contain markup.
pub fn error(ctx: &ViewContext, desc: &str) -> String {
    let doc = html(
        head(title(text("Error"))),
        body((
            h1(text("Error")),
            p(text("An error occurred.")),
            h4(text("description")),
            code(placeholder("desc")),
        )),
    ).render_with(&Fields::new().set("desc", desc));
    ctx.finish(doc)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::default_registry;

    fn ctx(htmx: bool) -> ViewContext {
        let config = SiteConfig { htmx, ..SiteConfig::default() };
        ViewContext::new(config, &default_registry()).unwrap()
    }

    #[test]
    fn t_shared_between_threads() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<ViewContext>();
        let ctx = std::sync::Arc::new(ctx(false));
        let pages: Vec<String> = (0..2).map(|_| {
            let ctx = ctx.clone();
            std::thread::spawn(move || index(&ctx))
        }).map(|h| h.join().unwrap()).collect();
        assert_eq!(pages[0], pages[1]);
    }

    #[test]
    fn t_index() {
        let ctx = ctx(false);
        let s = index(&ctx);
        assert!(s.starts_with("<!DOCTYPE html>\n<html><head><meta charset=\"UTF-8\">"));
        assert!(s.contains("<meta author=\"Rene Muala\">"));
        assert!(s.contains("<title>xbucket server</title>"));
        assert!(s.contains("<h2>Api documentation</h2><section><h4>artifact</h4>"));
        assert!(s.contains("<style>\nhtml{"));
        assert!(s.find("<style>").unwrap() < s.find("</head>").unwrap());
        assert!(s.ends_with("</script></body></html>"));
        assert!(!s.contains("<<"));
    }

    #[test]
    fn t_login_form() {
        let f = login_form();
        assert!(f.starts_with("<form hx-post=\"/login\" hx-target=\"center\" \
                               hx-swap=\"innerHTML\" hx-ext=\"json-enc\"><p>"));
        assert!(f.contains("<input type=\"password\" name=\"password\">"));
        assert!(f.ends_with("<p><input type=\"submit\" value=\"login\"></p></form>"));
    }

    #[test]
    fn t_login() {
        let with = login(&ctx(true));
        assert!(with.contains("<center id=\"content\"><h1>login</h1><form "));
        assert!(with.contains("version:\"2.0.1\""));
        let htmx_at = with.find("<script>").unwrap();
        assert!(htmx_at > with.find("</center>").unwrap());
        assert!(htmx_at < with.rfind("</body>").unwrap());

        let without = login(&ctx(false));
        assert!(!without.contains("<script>"));
    }

    #[test]
    fn t_login_results() {
        assert!(login_success(&ctx(false)).contains("<center><h1>login success</h1></center>"));
        let fail = login_fail();
        assert!(fail.starts_with("<h1>login</h1><p style=\"color:red\">login failed</p><form "));
    }

    #[test]
    fn t_error() {
        let s = error(&ctx(false), "bucket not found");
        assert!(s.contains("<h4>description</h4><code>bucket not found</code>"));
    }
}
