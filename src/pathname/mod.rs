//! Decomposition of request paths into a [`PathInfo`].
//!
//! A raw path runs through four stages, in this order:
//!
//! ```text
//! "/site/_next/data/BID/de/blog.json"
//!     → trailing slash   trailing_slash = false (read from the untouched path)
//!     → base path        "/_next/data/BID/de/blog.json", base_path = "/site"
//!     → data route       "/de/blog", build_id = "BID"
//!     → locale           "/blog", locale = "de"
//! ```
//!
//! Every stage is a plain function from `PathInfo` to `PathInfo`. A stage that
//! does not match leaves the value untouched. Decomposition never fails.

mod format;
mod prefix;

pub use format::*;
pub use prefix::*;

use {
    crate::locale::{LocaleDetector, LocaleProvider, LocaleStrategy},
    serde::Serialize,
};

const DATA_ROUTE_PREFIX: &str = "/_next/data/";
const DATA_ROUTE_SUFFIX: &str = ".json";
const DATA_ROUTE_INDEX: &str = "index";

/// The parts of a request path that matter to routing.
///
/// Each optional field is set by exactly one stage and never cleared later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathInfo {
    /// The logical route, without base path, data-route encoding or locale.
    pub pathname: String,

    /// The configured base path, when the path started with it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// The build id, when the path was a data route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_id: Option<String>,

    /// The detected locale, as spelled in the configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Whether the original path ended in `/`. For the root path this is the
    /// configured default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_slash: Option<bool>,
}

impl PathInfo {
    /// Shorthand for [`decompose`].
    pub fn decompose(path: &str, options: &DecomposeOptions<'_>) -> Self {
        decompose(path, options)
    }

    /// Shorthand for [`format_pathname_info`].
    pub fn format(&self, options: &FormatOptions<'_>) -> String {
        format_pathname_info(self, options)
    }
}

/// Borrowed, read-only settings for one decomposition.
///
/// Usually obtained from [`PathnameConfig::decompose_options`](crate::PathnameConfig::decompose_options),
/// but it can be assembled directly:
///
/// ```
/// use axum_pathinfo::{DecomposeOptions, decompose};
///
/// let locales = vec!["en".to_string(), "de".to_string()];
/// let options = DecomposeOptions::new()
///     .with_base_path("/site")
///     .with_locales(&locales)
///     .with_parse_data(true);
///
/// let info = decompose("/site/_next/data/BID/de/blog.json", &options);
/// assert_eq!(info.pathname, "/blog");
/// assert_eq!(info.base_path.as_deref(), Some("/site"));
/// assert_eq!(info.build_id.as_deref(), Some("BID"));
/// assert_eq!(info.locale.as_deref(), Some("de"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct DecomposeOptions<'a> {
    pub base_path: Option<&'a str>,
    pub locales: Option<&'a [String]>,
    pub trailing_slash: Option<bool>,
    pub parse_data: bool,
    /// Replaces table based locale detection when set.
    pub locale_provider: Option<&'a dyn LocaleProvider>,
}

impl<'a> DecomposeOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_path(mut self, base_path: &'a str) -> Self {
        self.base_path = Some(base_path);
        self
    }

    pub fn with_locales(mut self, locales: &'a [String]) -> Self {
        self.locales = Some(locales);
        self
    }

    pub fn with_trailing_slash(mut self, trailing_slash: bool) -> Self {
        self.trailing_slash = Some(trailing_slash);
        self
    }

    pub fn with_parse_data(mut self, parse_data: bool) -> Self {
        self.parse_data = parse_data;
        self
    }

    pub fn with_locale_provider(mut self, provider: &'a dyn LocaleProvider) -> Self {
        self.locale_provider = Some(provider);
        self
    }

    /// The locale detection strategy these options select, if any.
    pub fn locale_strategy(&self) -> Option<LocaleStrategy<'a>> {
        LocaleStrategy::select(self.locale_provider, self.locales)
    }
}

impl std::fmt::Debug for DecomposeOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecomposeOptions")
            .field("base_path", &self.base_path)
            .field("locales", &self.locales)
            .field("trailing_slash", &self.trailing_slash)
            .field("parse_data", &self.parse_data)
            .field("locale_provider", &self.locale_provider.is_some())
            .finish()
    }
}

/// Decomposes `path` into a [`PathInfo`].
///
/// `path` must already be separated from any query string or fragment.
pub fn decompose(path: &str, options: &DecomposeOptions<'_>) -> PathInfo {
    let info = PathInfo {
        pathname: path.to_string(),
        trailing_slash: detect_trailing_slash(path, options.trailing_slash),
        ..PathInfo::default()
    };

    let info = strip_base_path(info, options.base_path);
    let info = decode_data_route(info, options.parse_data);
    let strategy = options.locale_strategy();
    resolve_locale(info, strategy.as_ref().map(|s| s as &dyn LocaleDetector))
}

/// Whether `path` is trailing-slash terminated; the root path uses `default`.
pub(crate) fn detect_trailing_slash(path: &str, default: Option<bool>) -> Option<bool> {
    if path == "/" {
        default
    } else {
        Some(path.ends_with('/'))
    }
}

pub(crate) fn strip_base_path(mut info: PathInfo, base_path: Option<&str>) -> PathInfo {
    let Some(base_path) = base_path.filter(|b| !b.is_empty()) else {
        return info;
    };

    if has_path_prefix(&info.pathname, base_path) {
        info.pathname = remove_path_prefix(&info.pathname, base_path);
        info.base_path = Some(base_path.to_string());
    }
    info
}

/// Decodes `/_next/data/<build id>/<route>.json`.
///
/// The first segment is the build id, even when it is empty. The route
/// `index` stands for the root, and so does a path with nothing after the
/// build id.
pub(crate) fn decode_data_route(mut info: PathInfo, enabled: bool) -> PathInfo {
    if !enabled {
        return info;
    }

    let Some(encoded) = info
        .pathname
        .strip_prefix(DATA_ROUTE_PREFIX)
        .and_then(|p| p.strip_suffix(DATA_ROUTE_SUFFIX))
    else {
        return info;
    };

    let (build_id, route) = match encoded.split_once('/') {
        Some((build_id, route)) => (build_id, Some(route)),
        None => (encoded, None),
    };

    let pathname = match route {
        Some(route) if route.split('/').next() != Some(DATA_ROUTE_INDEX) => format!("/{route}"),
        Some(_) => "/".to_string(),
        None => "/".to_string(),
    };

    info.build_id = Some(build_id.to_string());
    info.pathname = pathname;
    info
}

pub(crate) fn resolve_locale(mut info: PathInfo, detector: Option<&dyn LocaleDetector>) -> PathInfo {
    let Some(detector) = detector else {
        return info;
    };

    let found = detector.detect(&info.pathname);
    if let Some(pathname) = found.pathname.filter(|p| !p.is_empty()) {
        info.pathname = pathname;
    }
    info.locale = found.detected_locale;
    info
}
