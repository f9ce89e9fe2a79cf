//! Cloud Controller route lookup.
//!
//! [`get_app_routes`] lists the routes bound to an application through the
//! v2 API, filtered by host name or by domain. The HTTP side is abstracted
//! by [`GraceRequest`]; [`CloudControllerClient`] is the reqwest-backed
//! implementation.

pub mod api;
pub mod client;
pub mod error;
pub mod logging;
pub mod request;
pub mod routes;

pub use api::GraceRequest;
pub use client::CloudControllerClient;
pub use error::{ApiError, RouteLookupError};
pub use request::{QueryValue, RequestSpec};
pub use routes::{
    RESULTS_PER_PAGE, RouteFilter, RouteLookup, RouteLookupOptions, RouteQuery, RouteResources,
    fetch_routes, get_app_routes,
};
