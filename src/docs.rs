//! The API documentation tables on the index page.

use anyhow::{Context, Result};
use serde_json::Value;
use shtml::prelude::*;

use crate::route::{RouteDescr, RouteRegistry};

/// Put each key and each brace on a line of its own, keys indented by
/// a tab.
pub fn beautify_json_sample(json: &str) -> String {
    json.replace("\",", "\",\n")
        .replace('{', "{\n")
        .replace('}', "\n}")
        .replace("\n\"", "\n\t\"")
}

fn sample_json(sample: &Value) -> Result<String> {
    serde_json::to_string(sample).context("serializing route sample")
}

/// A table row showing an input or output sample.
pub fn row_example(label: &str, sample: &str) -> String {
    part(tr(td((
        attr::colspan("6"),
        small(p(placeholder("label"))),
        pre((attr::contenteditable("true"), placeholder("sample"))),
    ))))
        .render_with(&Fields::new()
                     .set("label", label)
                     .set("sample", sample))
}

/// The row for one route, followed by its sample rows.
pub fn route_row(descr: &RouteDescr) -> Result<String> {
    let example = |label: &str, sample: &Option<Value>| -> Result<String> {
        Ok(match sample {
            Some(sample) => row_example(label, &beautify_json_sample(&sample_json(sample)?)),
            None => String::new(),
        })
    };
    Ok(part((
        tr((
            td((attr::title("<<method_description>>"), strong(placeholder("method")))),
            td(a((attr::href("<<route_link>>"), code(placeholder("route"))))),
            td(placeholder("name")),
            td(placeholder("description")),
            td(input((attr::r#type("checkbox"), attr::disabled("true"),
                      attr::class("<<auth>>")))),
        )),
        placeholder("input_example"),
        placeholder("output_example"),
    ))
        .render_with(&Fields::new()
                     .set("method", descr.method.as_str())
                     .set("method_description", descr.method.description())
                     .set("route", descr.route.as_str())
                     .set("route_link", descr.route.as_str())
                     .set("name", descr.name.as_str())
                     .set("description", descr.description.as_str())
                     .set("auth", if descr.auth { "auth" } else { "" })
                     .set("input_example", example("input", &descr.input_sample)?)
                     .set("output_example", example("output", &descr.output_sample)?)))
}

/// A section with a heading and the table of its routes.
pub fn routes_table(section_name: &str, routes: &[RouteDescr]) -> Result<String> {
    let mut rows = String::new();
    for descr in routes {
        rows.push_str(&route_row(descr)?);
    }
    Ok(part(section((
        h4(placeholder("name")),
        table((
            tr((th(text("Method")), th(text("Route")), th(text("Name")),
                th(text("Description")), td(text("Auth")))),
            placeholder("rows"),
        )),
    )))
        .render_with(&Fields::new()
                     .set("name", section_name)
                     .set("rows", rows)))
}

/// The rendered tables for all sections of a registry, kept until
/// `refresh` is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteDocs {
    html: String,
}

impl RouteDocs {
    pub fn render(registry: &RouteRegistry) -> Result<RouteDocs> {
        let mut html = String::new();
        for (name, routes) in registry.sections() {
            html.push_str(&routes_table(name, routes)
                          .with_context(|| format!("rendering docs for {name:?}"))?);
        }
        Ok(RouteDocs { html })
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Render again, e.g. after routes were added to the registry.
    pub fn refresh(&mut self, registry: &RouteRegistry) -> Result<()> {
        *self = RouteDocs::render(registry)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_method::HttpMethod;
    use serde_json::json;

    #[test]
    fn t_beautify_json_sample() {
        assert_eq!(beautify_json_sample("{\"a\":\"x\",\"b\":1}"),
                   "{\n\t\"a\":\"x\",\n\t\"b\":1\n}");
    }

    #[test]
    fn t_row_example() {
        assert_eq!(row_example("input", "{}"),
                   "<tr><td colspan=\"6\"><small><p>input</p></small>\
                    <pre contenteditable=\"true\">{}</pre></td></tr>");
    }

    #[test]
    fn t_route_row() {
        let d = RouteDescr::api("user", "read", "", "Read current user",
                                HttpMethod::GET, true)
            .with_output_sample(json!({"id": 0}));
        let row = route_row(&d).unwrap();
        assert!(row.starts_with("<tr><td title=\"The GET method"));
        assert!(row.contains("<strong>GET</strong>"));
        assert!(row.contains("<a href=\"/api/user\"><code>/api/user</code></a>"));
        assert!(row.contains("<td>Read current user</td>"));
        assert!(row.contains("<input type=\"checkbox\" disabled=\"true\" class=\"auth\">"));
        assert!(row.contains("<p>output</p>"));
        assert!(!row.contains("<p>input</p>"));
        assert!(row.contains("{\n\t\"id\":0\n}"));
        assert!(!row.contains("<<"));
    }

    #[test]
    fn t_routes_table() {
        let d = RouteDescr::api("docs", "routes", "", "Docs", HttpMethod::GET, false);
        let t = routes_table("docs", &[d]).unwrap();
        assert!(t.starts_with("<section><h4>docs</h4><table><tr><th>Method</th>"));
        assert!(t.contains("class=\"\""));
        assert!(t.ends_with("</tr></table></section>"));
    }

    #[test]
    fn t_route_docs() {
        let mut registry = RouteRegistry::new();
        registry.add("docs", RouteDescr::api("docs", "routes", "", "Docs",
                                             HttpMethod::GET, false));
        let mut docs = RouteDocs::render(&registry).unwrap();
        assert_eq!(docs.html().matches("<section>").count(), 1);
        registry.add("auth", RouteDescr::api("auth", "logout", "/logout", "Session logout",
                                             HttpMethod::POST, true));
        docs.refresh(&registry).unwrap();
        assert_eq!(docs.html().matches("<section>").count(), 2);
        assert!(docs.html().find("<h4>auth</h4>").unwrap()
                < docs.html().find("<h4>docs</h4>").unwrap());
    }
}
