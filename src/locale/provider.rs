use crate::I18nConfig;

/// Options passed to [`LocaleProvider::analyze`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzeOptions<'a> {
    /// Locale reported when the pathname carries none.
    pub default_locale: Option<&'a str>,
}

/// Result of [`LocaleProvider::analyze`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleAnalysis {
    pub detected_locale: Option<String>,
    /// The pathname without the locale segment. `None` keeps the original.
    pub pathname: Option<String>,
    /// True when `detected_locale` came from `AnalyzeOptions::default_locale`.
    pub inferred_from_default: bool,
}

/// An alternate locale detection strategy.
///
/// When a provider is configured it replaces table based detection entirely.
/// Implementations must be shareable across request handlers.
pub trait LocaleProvider: Send + Sync {
    fn analyze(&self, pathname: &str, options: AnalyzeOptions<'_>) -> LocaleAnalysis;
}

/// Locale provider backed by a fixed locale list and an optional default.
///
/// ```
/// use axum_pathinfo::{AnalyzeOptions, I18nProvider, LocaleProvider};
///
/// let provider = I18nProvider::new(vec!["en".into(), "nl-NL".into()], Some("en".into()));
///
/// let analysis = provider.analyze("/NL-nl/over-ons", AnalyzeOptions::default());
/// assert_eq!(analysis.detected_locale.as_deref(), Some("nl-NL"));
/// assert_eq!(analysis.pathname.as_deref(), Some("/over-ons"));
/// ```
#[derive(Debug, Clone)]
pub struct I18nProvider {
    locales: Vec<String>,
    lowercase_locales: Vec<String>,
    default_locale: Option<String>,
}

impl I18nProvider {
    pub fn new(locales: Vec<String>, default_locale: Option<String>) -> Self {
        let lowercase_locales = locales.iter().map(|l| l.to_lowercase()).collect();
        Self {
            locales,
            lowercase_locales,
            default_locale,
        }
    }

    /// Creates a provider from the `[pathname.i18n]` configuration section.
    pub fn from_config(config: &I18nConfig) -> Self {
        Self::new(config.locales.clone(), config.default_locale.clone())
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }
}

impl LocaleProvider for I18nProvider {
    fn analyze(&self, pathname: &str, options: AnalyzeOptions<'_>) -> LocaleAnalysis {
        let fallback = LocaleAnalysis {
            detected_locale: options.default_locale.map(str::to_string),
            pathname: Some(pathname.to_string()),
            inferred_from_default: options.default_locale.is_some(),
        };

        // The first part is empty for absolute paths; the second one holds the locale.
        let mut parts = pathname.splitn(3, '/');
        let head = parts.next().unwrap_or_default();
        let Some(segment) = parts.next().filter(|s| !s.is_empty()) else {
            return fallback;
        };

        let lowered = segment.to_lowercase();
        let Some(index) = self.lowercase_locales.iter().position(|l| *l == lowered) else {
            return fallback;
        };

        let locale = &self.locales[index];
        let rest = &pathname[head.len() + 1 + segment.len()..];

        LocaleAnalysis {
            detected_locale: Some(locale.clone()),
            pathname: Some(if rest.is_empty() {
                "/".to_string()
            } else {
                rest.to_string()
            }),
            inferred_from_default: false,
        }
    }
}
