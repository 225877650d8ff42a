//! Descriptions of the server's routes, as shown on the index page and
//! returned by the docs API route.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use kstring::KString;
use serde::Serialize;
use serde_json::{json, Value};

use crate::http_method::HttpMethod;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDescr {
    pub name: String,
    pub route: String,
    pub description: String,
    pub method: HttpMethod,
    /// Whether the route requires a logged-in session.
    pub auth: bool,
    #[serde(skip)]
    pub input_sample: Option<Value>,
    #[serde(skip)]
    pub output_sample: Option<Value>,
}

impl RouteDescr {
    pub fn new(
        name: &str, route: &str, description: &str, method: HttpMethod, auth: bool
    ) -> Self {
        RouteDescr {
            name: name.into(),
            route: route.into(),
            description: description.into(),
            method,
            auth,
            input_sample: None,
            output_sample: None,
        }
    }

    /// A route below `/api/<controller>`.
    pub fn api(
        controller: &str,
        name: &str,
        route_suffix: &str,
        description: &str,
        method: HttpMethod,
        auth: bool,
    ) -> Self {
        Self::new(name, &format!("/api/{controller}{route_suffix}"), description, method, auth)
    }

    pub fn with_input_sample(mut self, sample: Value) -> Self {
        self.input_sample = Some(sample);
        self
    }

    pub fn with_output_sample(mut self, sample: Value) -> Self {
        self.output_sample = Some(sample);
        self
    }

    /// The descriptor without the samples.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .with_context(|| format!("serializing route {:?}", self.route))
    }
}

/// Route descriptors by section (controller) name, sections sorted by
/// name, routes in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    sections: BTreeMap<KString, Vec<RouteDescr>>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        RouteRegistry::default()
    }

    pub fn add(&mut self, section: &str, descr: RouteDescr) -> &mut Self {
        self.sections.entry(KString::from_ref(section)).or_default().push(descr);
        self
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &[RouteDescr])> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sections.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// `{"section": [route, ...], ...}`, as served by the docs route.
    pub fn to_json(&self) -> Result<String> {
        let sections: BTreeMap<&str, &[RouteDescr]> = self.sections().collect();
        serde_json::to_string(&sections).context("serializing route registry")
    }
}

fn user_input_sample() -> Value {
    json!({"name": "string", "email": "string", "password": "string"})
}

fn user_output_sample() -> Value {
    json!({"id": 0, "name": "string", "email": "string"})
}

fn bucket_input_sample() -> Value {
    json!({"id": "int?", "super": "int?", "name": "string", "description": "string",
           "user_id": "int?"})
}

fn bucket_output_sample() -> Value {
    json!({"id": 0, "super": 0, "name": "string", "description": "string", "user_id": 0,
           "created_at": "string", "updated_at": "string"})
}

fn artifact_output_sample() -> Value {
    json!({"id": 0, "super": 0, "name": "string", "filename": "string",
           "original_filename": "string", "bucket_id": 0,
           "created_at": "string", "updated_at": "string"})
}

fn auth_input_sample() -> Value {
    json!({"email": "string", "password": "string"})
}

/// The routes of the xbucket server.
pub fn default_registry() -> RouteRegistry {
    use HttpMethod::*;
    let mut r = RouteRegistry::new();

    r.add("view", RouteDescr::new("home", "/", "This page", GET, false));
    r.add("view", RouteDescr::new("login", "/login", "Login form", GET, false));

    r.add("artifact", RouteDescr::api(
        "artifact", "read", "",
        "Read artifact's metadata or download its file (if dl==true). \
         (path: id<int>, bucket_id<int>, dl<bool?>)",
        GET, true).with_output_sample(artifact_output_sample()));
    r.add("artifact", RouteDescr::api(
        "artifact", "create", "",
        "Create artifacts from multipart upload. (path: bucket_id<int>)",
        POST, true).with_output_sample(artifact_output_sample()));
    r.add("artifact", RouteDescr::api(
        "artifact", "remove", "",
        "Remove artifact (path: id<int>, bucket_id<int>)",
        DELETE, true));

    r.add("auth", RouteDescr::api("auth", "login", "/login", "Session login", POST, false)
          .with_input_sample(auth_input_sample())
          .with_output_sample(user_output_sample()));
    r.add("auth", RouteDescr::api("auth", "logout", "/logout", "Session logout", POST, true));

    r.add("bucket", RouteDescr::api(
        "bucket", "read", "", "Read bucket (path: id<int>)", GET, true)
          .with_output_sample(bucket_output_sample()));
    r.add("bucket", RouteDescr::api(
        "bucket", "create", "", "Create a new bucket", POST, true)
          .with_input_sample(bucket_input_sample())
          .with_output_sample(bucket_output_sample()));
    r.add("bucket", RouteDescr::api(
        "bucket", "update", "", "Update a bucket (path: id<int>)", PUT, true)
          .with_input_sample(bucket_input_sample())
          .with_output_sample(bucket_output_sample()));
    r.add("bucket", RouteDescr::api(
        "bucket", "remove", "", "Remove a bucket", DELETE, true));

    r.add("docs", RouteDescr::api("docs", "routes", "", "Docs", GET, false));

    r.add("user", RouteDescr::api("user", "read", "", "Read current user", GET, true)
          .with_output_sample(user_output_sample()));
    r.add("user", RouteDescr::api("user", "create", "", "Create a new user", POST, false)
          .with_input_sample(user_input_sample())
          .with_output_sample(user_output_sample()));
    r.add("user", RouteDescr::api("user", "update", "", "Update current user", PUT, true)
          .with_input_sample(user_input_sample())
          .with_output_sample(user_output_sample()));
    r.add("user", RouteDescr::api("user", "delete", "", "Delete current user", DELETE, true));

    r
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_descr_json() {
        let d = RouteDescr::api("auth", "login", "/login", "Session login",
                                HttpMethod::POST, false)
            .with_input_sample(auth_input_sample());
        assert_eq!(d.route, "/api/auth/login");
        assert_eq!(d.to_json().unwrap(),
                   "{\"name\":\"login\",\"route\":\"/api/auth/login\",\
                    \"description\":\"Session login\",\"method\":\"POST\",\"auth\":false}");
    }

    #[test]
    fn t_default_registry() {
        let r = default_registry();
        let names: Vec<&str> = r.sections().map(|(name, _)| name).collect();
        assert_eq!(names, ["artifact", "auth", "bucket", "docs", "user", "view"]);
        assert_eq!(r.len(), 16);
        let (_, users) = r.sections().find(|(name, _)| *name == "user").unwrap();
        assert_eq!(users.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
                   ["read", "create", "update", "delete"]);
        assert!(!users[1].auth);
    }

    #[test]
    fn t_registry_json() {
        let mut r = RouteRegistry::new();
        r.add("docs", RouteDescr::api("docs", "routes", "", "Docs", HttpMethod::GET, false));
        let v: Value = serde_json::from_str(&r.to_json().unwrap()).unwrap();
        assert_eq!(v["docs"][0]["route"], "/api/docs");
        assert_eq!(v["docs"][0]["method"], "GET");
    }
}
