//! Locale detection for request paths.
//!
//! Two detection strategies share the [`LocaleDetector`] capability:
//!
//! - [`LocaleTable`] matches the first path segment against a configured list
//!   of locales, ignoring case.
//! - [`ProviderDetector`] delegates to a caller supplied [`LocaleProvider`],
//!   such as the bundled [`I18nProvider`].
//!
//! [`LocaleStrategy`] holds whichever of the two applies, chosen once from
//! the decomposition options.

mod provider;

pub use provider::*;

/// Result of a locale detection.
///
/// Both fields are `None` when no locale was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleMatch {
    /// The canonical spelling of the detected locale.
    pub detected_locale: Option<String>,
    /// The pathname with the locale segment removed.
    pub pathname: Option<String>,
}

/// Detects a locale in a pathname.
pub trait LocaleDetector {
    fn detect(&self, pathname: &str) -> LocaleMatch;
}

/// Matches the first segment of `pathname` against `locales`, ignoring case.
///
/// On a match the locale is returned exactly as it is spelled in `locales`
/// and the segment is removed from the pathname. An empty first segment
/// never matches.
///
/// ```
/// use axum_pathinfo::match_locale_table;
///
/// let locales = vec!["en-US".to_string(), "fr".to_string()];
/// let found = match_locale_table("/EN-us/about", &locales);
/// assert_eq!(found.detected_locale.as_deref(), Some("en-US"));
/// assert_eq!(found.pathname.as_deref(), Some("/about"));
/// ```
pub fn match_locale_table(pathname: &str, locales: &[String]) -> LocaleMatch {
    let mut parts = pathname.splitn(3, '/');
    let head = parts.next().unwrap_or_default();
    let Some(segment) = parts.next().filter(|s| !s.is_empty()) else {
        return LocaleMatch::default();
    };
    let rest = parts.next();

    let segment = segment.to_lowercase();
    let Some(locale) = locales.iter().find(|l| l.to_lowercase() == segment) else {
        return LocaleMatch::default();
    };

    let stripped = match rest {
        Some(rest) => format!("{head}/{rest}"),
        None => head.to_string(),
    };

    LocaleMatch {
        detected_locale: Some(locale.clone()),
        pathname: Some(if stripped.is_empty() {
            "/".to_string()
        } else {
            stripped
        }),
    }
}

/// Table based locale detection over a borrowed locale list.
#[derive(Debug, Clone, Copy)]
pub struct LocaleTable<'a> {
    locales: &'a [String],
}

impl<'a> LocaleTable<'a> {
    pub fn new(locales: &'a [String]) -> Self {
        Self { locales }
    }
}

impl LocaleDetector for LocaleTable<'_> {
    fn detect(&self, pathname: &str) -> LocaleMatch {
        match_locale_table(pathname, self.locales)
    }
}

/// Adapts a [`LocaleProvider`] to [`LocaleDetector`].
///
/// The provider is always asked to skip default locale substitution; filling
/// in the default locale is left to the caller of the decomposition.
#[derive(Clone, Copy)]
pub struct ProviderDetector<'a> {
    provider: &'a dyn LocaleProvider,
}

impl<'a> ProviderDetector<'a> {
    pub fn new(provider: &'a dyn LocaleProvider) -> Self {
        Self { provider }
    }
}

impl LocaleDetector for ProviderDetector<'_> {
    fn detect(&self, pathname: &str) -> LocaleMatch {
        let analysis = self.provider.analyze(
            pathname,
            AnalyzeOptions {
                default_locale: None,
            },
        );
        LocaleMatch {
            detected_locale: analysis.detected_locale,
            pathname: analysis.pathname,
        }
    }
}

/// The locale detection strategy used by one decomposition.
#[derive(Clone, Copy)]
pub enum LocaleStrategy<'a> {
    Provider(ProviderDetector<'a>),
    Table(LocaleTable<'a>),
}

impl<'a> LocaleStrategy<'a> {
    /// Selects the provider when one is given, the table otherwise.
    ///
    /// Returns `None` when neither is available.
    pub fn select(
        provider: Option<&'a dyn LocaleProvider>,
        locales: Option<&'a [String]>,
    ) -> Option<Self> {
        match (provider, locales) {
            (Some(provider), _) => Some(LocaleStrategy::Provider(ProviderDetector::new(provider))),
            (None, Some(locales)) => Some(LocaleStrategy::Table(LocaleTable::new(locales))),
            (None, None) => None,
        }
    }
}

impl LocaleDetector for LocaleStrategy<'_> {
    fn detect(&self, pathname: &str) -> LocaleMatch {
        match self {
            LocaleStrategy::Provider(detector) => detector.detect(pathname),
            LocaleStrategy::Table(detector) => detector.detect(pathname),
        }
    }
}
