use {
    crate::{DecomposeOptions, Error, Result},
    serde::Deserialize,
    std::collections::HashSet,
};

///
/// Configuration for decomposing request paths.
///
/// ```toml
/// [pathname]
/// base_path = "/docs"
/// trailing_slash = false
/// parse_data = true
///
/// [pathname.i18n]
/// locales = ["en-US", "fr", "nl-NL"]
/// default_locale = "en-US"
/// ```
///
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PathnameConfig {
    /// Path prefix under which the whole site is deployed, such as "/docs".
    /// It is only stripped when it matches whole path segments.
    /// By default there is no base path.
    #[serde(default)]
    pub base_path: Option<String>,

    /// Trailing slash value reported for the root path "/".
    /// Every other path reports whether it actually ends in a slash.
    #[serde(default)]
    pub trailing_slash: Option<bool>,

    /// Whether to decode `/_next/data/<build id>/<route>.json` data routes.
    /// By default `parse_data` is false.
    #[serde(default)]
    pub parse_data: bool,

    /// Locales recognised as the first path segment.
    /// When absent, no locale is detected unless a locale provider is supplied.
    #[serde(default)]
    pub i18n: Option<I18nConfig>,
}

/// Locale settings of the `[pathname.i18n]` section.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct I18nConfig {
    /// Supported locales, spelled the way they should be reported.
    pub locales: Vec<String>,

    /// Locale assumed when a path has none. Never substituted by the
    /// decomposition itself; used by formatting and by locale providers.
    #[serde(default)]
    pub default_locale: Option<String>,
}

impl PathnameConfig {
    /// Borrows this configuration as decomposition options.
    ///
    /// The returned options carry no locale provider; add one with
    /// [`DecomposeOptions::with_locale_provider`].
    pub fn decompose_options(&self) -> DecomposeOptions<'_> {
        DecomposeOptions {
            base_path: self.base_path.as_deref(),
            locales: self.i18n.as_ref().map(|i18n| i18n.locales.as_slice()),
            trailing_slash: self.trailing_slash,
            parse_data: self.parse_data,
            locale_provider: None,
        }
    }

    /// The configured default locale, if any.
    pub fn default_locale(&self) -> Option<&str> {
        self.i18n.as_ref().and_then(|i18n| i18n.default_locale.as_deref())
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(base_path) = self.base_path.as_deref().filter(|b| !b.is_empty()) {
            if !base_path.starts_with('/') {
                return Err(Error::config(format!(
                    "[pathname] base_path has to start with '/', found \"{base_path}\"."
                )));
            }
            if base_path == "/" {
                return Err(Error::config(
                    "[pathname] base_path cannot be \"/\". Remove it to serve from the root.",
                ));
            }
            if base_path.ends_with('/') {
                return Err(Error::config(format!(
                    "[pathname] base_path should not end with '/', found \"{base_path}\"."
                )));
            }
        }

        if let Some(i18n) = &self.i18n {
            i18n.validate()?;
        }

        Ok(())
    }
}

impl I18nConfig {
    pub fn validate(&self) -> Result<()> {
        if self.locales.is_empty() {
            return Err(Error::config(
                "[pathname.i18n] locales must not be empty. Example: locales = [\"en\", \"fr\"]",
            ));
        }

        let mut seen = HashSet::new();
        for locale in &self.locales {
            if locale.trim().is_empty() || locale.contains('/') {
                return Err(Error::config(format!(
                    "[pathname.i18n] locales contains an invalid entry \"{locale}\"."
                )));
            }
            if !seen.insert(locale.to_lowercase()) {
                return Err(Error::config(format!(
                    "[pathname.i18n] locales contains \"{locale}\" more than once (case-insensitive)."
                )));
            }
        }

        if let Some(default_locale) = &self.default_locale
            && !self.locales.contains(default_locale)
        {
            return Err(Error::config(format!(
                "[pathname.i18n] default_locale \"{default_locale}\" should be included in locales."
            )));
        }

        Ok(())
    }
}
