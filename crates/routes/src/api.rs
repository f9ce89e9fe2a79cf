use crate::error::ApiError;
use crate::request::RequestSpec;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Authenticated request helper shared by every Cloud Controller accessor.
///
/// Implementations issue exactly one request per call and resolve with the
/// decoded JSON body, or `None` when the response carried no body.
#[async_trait]
pub trait GraceRequest: Send + Sync {
    async fn grace_request(&self, spec: RequestSpec) -> Result<Option<Value>, ApiError>;
}

#[async_trait]
impl<T: GraceRequest + ?Sized> GraceRequest for Arc<T> {
    async fn grace_request(&self, spec: RequestSpec) -> Result<Option<Value>, ApiError> {
        (**self).grace_request(spec).await
    }
}
