use std::{fmt::Display, str::FromStr};

use anyhow::{bail, Result};
use serde::Serialize;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HttpMethod {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
    CONNECT,
    OPTIONS,
    TRACE,
    PATCH,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GET => "GET",
            Self::HEAD => "HEAD",
            Self::POST => "POST",
            Self::PUT => "PUT",
            Self::DELETE => "DELETE",
            Self::CONNECT => "CONNECT",
            Self::OPTIONS => "OPTIONS",
            Self::TRACE => "TRACE",
            Self::PATCH => "PATCH",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::GET =>
                "The GET method requests a representation of the specified resource. \
                 Requests using GET should only retrieve data.",
            Self::HEAD =>
                "The HEAD method asks for a response identical to a GET request, \
                 but without the response body.",
            Self::POST =>
                "The POST method submits an entity to the specified resource, often \
                 causing a change in state or side effects on the server.",
            Self::PUT =>
                "The PUT method replaces all current representations of the target \
                 resource with the request payload.",
            Self::DELETE =>
                "The DELETE method deletes the specified resource.",
            Self::CONNECT =>
                "The CONNECT method establishes a tunnel to the server identified by \
                 the target resource.",
            Self::OPTIONS =>
                "The OPTIONS method describes the communication options for the target resource.",
            Self::TRACE =>
                "The TRACE method performs a message loop-back test along the path to \
                 the target resource.",
            Self::PATCH =>
                "The PATCH method applies partial modifications to a resource.",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(Self::GET),
            "HEAD" => Ok(Self::HEAD),
            "POST" => Ok(Self::POST),
            "PUT" => Ok(Self::PUT),
            "DELETE" => Ok(Self::DELETE),
            "CONNECT" => Ok(Self::CONNECT),
            "OPTIONS" => Ok(Self::OPTIONS),
            "TRACE" => Ok(Self::TRACE),
            "PATCH" => Ok(Self::PATCH),
            _ => bail!("invalid http request method {s:?}")
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
