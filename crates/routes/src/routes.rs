//! Route lookup for a single application.
//!
//! Fetches one page (up to [`RESULTS_PER_PAGE`]) of the routes bound to an
//! app from `/v2/apps/{guid}/routes`, filtered either by host name or by
//! domain. Nothing is retried or cached here; the shared
//! [`GraceRequest`] collaborator owns transport concerns.

use crate::api::GraceRequest;
use crate::error::RouteLookupError;
use crate::request::RequestSpec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Page size requested from the Cloud Controller.
pub const RESULTS_PER_PAGE: u64 = 100;

/// The `resources` field of a routes page, exactly as returned by the API.
/// Normally an array of route records.
pub type RouteResources = Value;

/// Loosely-typed lookup options, as a caller would hand them over in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLookupOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_guid: Option<String>,
}

impl RouteLookupOptions {
    pub fn for_app(app_guid: impl Into<String>) -> Self {
        Self {
            app_guid: Some(app_guid.into()),
            ..Default::default()
        }
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_domain_guid(mut self, domain_guid: impl Into<String>) -> Self {
        self.domain_guid = Some(domain_guid.into());
        self
    }
}

/// Which routes of the app to return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteFilter {
    Host(String),
    DomainGuid(String),
    /// Neither a host name nor a domain was given. The API is still queried
    /// with `domain_guid:undefined`, which matches nothing.
    UnsetDomain,
}

impl fmt::Display for RouteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteFilter::Host(host) => write!(f, "host:{}", host),
            RouteFilter::DomainGuid(guid) => write!(f, "domain_guid:{}", guid),
            RouteFilter::UnsetDomain => f.write_str("domain_guid:undefined"),
        }
    }
}

/// A validated lookup: an app GUID plus exactly one filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub app_guid: String,
    pub filter: RouteFilter,
}

impl RouteQuery {
    pub fn by_host(app_guid: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            app_guid: app_guid.into(),
            filter: RouteFilter::Host(hostname.into()),
        }
    }

    pub fn by_domain(app_guid: impl Into<String>, domain_guid: impl Into<String>) -> Self {
        Self {
            app_guid: app_guid.into(),
            filter: RouteFilter::DomainGuid(domain_guid.into()),
        }
    }

    pub fn path(&self) -> String {
        format!("/v2/apps/{}/routes", self.app_guid)
    }

    pub fn to_request(&self) -> RequestSpec {
        RequestSpec::get(self.path())
            .query("q", self.filter.to_string())
            .query("results-per-page", RESULTS_PER_PAGE)
    }
}

impl TryFrom<&RouteLookupOptions> for RouteQuery {
    type Error = RouteLookupError;

    fn try_from(options: &RouteLookupOptions) -> Result<Self, Self::Error> {
        let app_guid = match options.app_guid.as_deref() {
            Some(guid) if !guid.is_empty() => guid.to_string(),
            _ => {
                return Err(RouteLookupError::MissingAppGuid {
                    options: serde_json::to_string_pretty(options)
                        .unwrap_or_else(|_| format!("{:?}", options)),
                });
            }
        };

        // An empty host name falls through to the domain filter.
        let filter = match (options.hostname.as_deref(), options.domain_guid.as_deref()) {
            (Some(host), _) if !host.is_empty() => RouteFilter::Host(host.to_string()),
            (_, Some(domain)) => RouteFilter::DomainGuid(domain.to_string()),
            (_, None) => RouteFilter::UnsetDomain,
        };

        Ok(Self { app_guid, filter })
    }
}

/// Route lookup bound to an API collaborator.
#[derive(Debug, Clone)]
pub struct RouteLookup<A> {
    api: A,
}

impl<A: GraceRequest> RouteLookup<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn lookup(
        &self,
        options: Option<&RouteLookupOptions>,
    ) -> Result<Option<RouteResources>, RouteLookupError> {
        get_app_routes(&self.api, options).await
    }

    pub async fn fetch(
        &self,
        query: &RouteQuery,
    ) -> Result<Option<RouteResources>, RouteLookupError> {
        fetch_routes(&self.api, query).await
    }
}

/// Validate `options` and fetch the matching routes of the app.
///
/// Absent options behave like empty ones. `Ok(None)` means the API answered
/// with a body that has no `resources` field; an empty list is `Ok(Some(json!([])))`.
pub async fn get_app_routes<A: GraceRequest + ?Sized>(
    api: &A,
    options: Option<&RouteLookupOptions>,
) -> Result<Option<RouteResources>, RouteLookupError> {
    let empty = RouteLookupOptions::default();
    let query = RouteQuery::try_from(options.unwrap_or(&empty))?;
    fetch_routes(api, &query).await
}

/// Fetch the routes for an already validated query.
pub async fn fetch_routes<A: GraceRequest + ?Sized>(
    api: &A,
    query: &RouteQuery,
) -> Result<Option<RouteResources>, RouteLookupError> {
    if query.filter == RouteFilter::UnsetDomain {
        tracing::warn!(
            app_guid = %query.app_guid,
            "No hostname or domainGuid given, querying routes with an undefined domain"
        );
    }

    let body = api.grace_request(query.to_request()).await?;
    match body {
        Some(body) if !is_falsy(&body) => Ok(extract_resources(body)),
        _ => Err(RouteLookupError::NoRoutes),
    }
}

/// Mirrors JSON truthiness: `null`, `false`, `0` and `""` count as no body.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Takes `resources` out of the body as-is; bodies that are not objects have none.
fn extract_resources(body: Value) -> Option<RouteResources> {
    match body {
        Value::Object(mut body) => body.remove("resources"),
        _ => None,
    }
}
