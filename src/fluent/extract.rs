use crate::{Error, PathInfo};
use axum::extract::FromRequestParts;
use http::request::Parts;

/// Extracts the [`PathInfo`] inserted by [`PathInfoLayer`](crate::PathInfoLayer).
///
/// Rejects with an internal error (500) when the layer is not installed.
impl<S> FromRequestParts<S> for PathInfo
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<PathInfo>().cloned().ok_or_else(|| {
            Error::internal("PathInfo is missing from the request, is PathInfoLayer installed?")
        })
    }
}
