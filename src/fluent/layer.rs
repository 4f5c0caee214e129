use crate::{Config, LocaleProvider, PathInfo, PathnameConfig, Result, decompose};
use axum::extract::OriginalUri;
use http::{Request, Uri, uri::PathAndQuery};
use std::{
    sync::Arc,
    task::{Context, Poll},
};
use tower::{Layer, Service};

/// Layer that decomposes request paths into a [`PathInfo`] extension.
#[derive(Clone)]
pub struct PathInfoLayer {
    config: Arc<PathnameConfig>,
    locale_provider: Option<Arc<dyn LocaleProvider>>,
    rewrite_uri: bool,
}

impl PathInfoLayer {
    /// Creates a layer for the given pathname configuration.
    ///
    /// Fails with a configuration error when the configuration does not
    /// validate.
    pub fn new(config: PathnameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            locale_provider: None,
            rewrite_uri: false,
        })
    }

    /// Creates a layer from the `[pathname]` section of a [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.pathname.clone())
    }

    /// Detects locales with `provider` instead of the configured locale list.
    pub fn with_locale_provider(mut self, provider: Arc<dyn LocaleProvider>) -> Self {
        self.locale_provider = Some(provider);
        self
    }

    /// Replaces the request path with the decomposed pathname before calling
    /// the inner service. The query string is kept and the untouched URI
    /// stays available through axum's `OriginalUri`.
    pub fn with_uri_rewrite(mut self, enable: bool) -> Self {
        self.rewrite_uri = enable;
        self
    }

    /// The configuration this layer decomposes with.
    pub fn config(&self) -> &PathnameConfig {
        &self.config
    }
}

impl<S> Layer<S> for PathInfoLayer {
    type Service = PathInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        PathInfoService {
            inner,
            config: self.config.clone(),
            locale_provider: self.locale_provider.clone(),
            rewrite_uri: self.rewrite_uri,
        }
    }
}

/// Service that attaches a [`PathInfo`] to each request.
#[derive(Clone)]
pub struct PathInfoService<S> {
    inner: S,
    config: Arc<PathnameConfig>,
    locale_provider: Option<Arc<dyn LocaleProvider>>,
    rewrite_uri: bool,
}

impl<S> PathInfoService<S> {
    fn path_info(&self, path: &str) -> PathInfo {
        let mut options = self.config.decompose_options();
        if let Some(provider) = self.locale_provider.as_deref() {
            options = options.with_locale_provider(provider);
        }
        decompose(path, &options)
    }
}

impl<S, B> Service<Request<B>> for PathInfoService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let info = self.path_info(req.uri().path());

        tracing::debug!(
            path = %req.uri().path(),
            pathname = %info.pathname,
            base_path = ?info.base_path,
            build_id = ?info.build_id,
            locale = ?info.locale,
            trailing_slash = ?info.trailing_slash,
            "Decomposed request path"
        );

        if self.rewrite_uri && info.pathname != req.uri().path() {
            match rewrite_path(req.uri(), &info.pathname) {
                Ok(uri) => {
                    if req.extensions().get::<OriginalUri>().is_none() {
                        let original = OriginalUri(req.uri().clone());
                        req.extensions_mut().insert(original);
                    }
                    *req.uri_mut() = uri;
                }
                Err(err) => tracing::warn!(
                    uri = %req.uri(),
                    pathname = %info.pathname,
                    error = %err,
                    "Could not rewrite request URI, keeping the original"
                ),
            }
        }

        req.extensions_mut().insert(info);
        self.inner.call(req)
    }
}

/// Returns `uri` with its path replaced by `pathname`, keeping scheme,
/// authority and query.
pub(crate) fn rewrite_path(uri: &Uri, pathname: &str) -> Result<Uri> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{pathname}?{query}"),
        None => pathname.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse::<PathAndQuery>()?);
    Ok(Uri::from_parts(parts)?)
}
