//! Request description handed to the shared HTTP collaborator.

use reqwest::Method;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single query-string value; the Cloud Controller accepts strings and integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Str(String),
    Num(u64),
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        Self::Num(value)
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Num(n) => write!(f, "{}", n),
        }
    }
}

/// Method, path and query parameters of one API call.
///
/// Parameters are kept sorted by name so the rendered query string is stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: Method,
    pub uri: String,
    pub qs: BTreeMap<String, QueryValue>,
}

impl RequestSpec {
    pub fn get(uri: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            uri: uri.into(),
            qs: BTreeMap::new(),
        }
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.qs.insert(name.into(), value.into());
        self
    }

    /// Path followed by the url-encoded query string, if any.
    pub fn path_and_query(&self) -> Result<String, serde_urlencoded::ser::Error> {
        if self.qs.is_empty() {
            return Ok(self.uri.clone());
        }
        let query = serde_urlencoded::to_string(&self.qs)?;
        Ok(format!("{}?{}", self.uri, query))
    }
}
