//!
//! Configuration structures for path decomposition and logging.
//!
//! A configuration can be created in many ways:
//! - From an environment-specific TOML file via `Config::from_rust_env` or `Config::from_toml_file`
//! - From a TOML string via `Config::from_toml` or `str::parse`
//! - Constructed programmatically via the builder methods on `Config`
//!
//! In both TOML-based methods, environment variables can be referenced in the TOML
//! using the {{ VAR_NAME }} syntax, and they will be substituted with the corresponding
//! environment variable value. A deployment can therefore set its base path
//! with `base_path = "{{ BASE_PATH }}"`.
//!
//! Configuration is split into logical sections, each represented by their own struct:
//!
//! - `PathnameConfig` for base path, data routes, trailing slash and locales
//! - `LoggingConfig` for logging and tracing settings
//!
mod logging;
mod pathname;

pub use logging::*;
pub use pathname::*;

use {
    crate::{Error, Result, utils::replace_handlebars_with_env},
    serde::Deserialize,
    std::{env, fs, str::FromStr},
};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pathname: PathnameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    ///
    /// Creates a default configuration.
    /// This will attempt to load configuration from the file based on the RUST_ENV
    /// environment variable falling back to a default configuration if the environment
    /// variable is not set or the file cannot be loaded. Configuration files should be
    /// located in the "config/" directory of your project.
    ///
    fn default() -> Self {
        match Self::from_rust_env() {
            Ok(config) => config,
            Err(_) => Config {
                pathname: PathnameConfig::default(),
                logging: LoggingConfig::default(),
            },
        }
    }
}

impl Config {
    ///
    /// Loads the configuration from a file based on the RUST_ENV environment variable.
    ///
    pub fn from_rust_env() -> Result<Config> {
        Self::from_toml_file(env::var("RUST_ENV")?)
    }

    ///
    /// Given an environment name, loads the corresponding configuration file,
    /// substitutes any environment variables, and returns a Config struct.
    /// The configuration file is expected to be located at "config/{env}.toml"
    /// where {env} is the provided environment name (e.g., "dev", "prod").
    ///
    pub fn from_toml_file(env: impl AsRef<str>) -> Result<Config> {
        let path = format!("config/{}.toml", env.as_ref());
        let text = fs::read_to_string(&path)
            .map_err(|err| Error::io(format!("Could not read \"{path}\": {err}")))?;
        Self::from_toml(&text)
    }

    ///
    /// Parses a configuration string in TOML format into a Config struct.
    ///
    pub fn from_toml(toml_str: &str) -> Result<Config> {
        toml_str.parse()
    }

    /// Sets the base path of the PathnameConfig.
    pub fn with_base_path<S: AsRef<str>>(mut self, base_path: S) -> Self {
        self.pathname.base_path = Some(base_path.as_ref().into());
        self
    }

    /// Sets the locales of the PathnameConfig, keeping any default locale.
    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locales = locales.into_iter().map(Into::into).collect();
        match &mut self.pathname.i18n {
            Some(i18n) => i18n.locales = locales,
            None => {
                self.pathname.i18n = Some(I18nConfig {
                    locales,
                    default_locale: None,
                })
            }
        }
        self
    }

    /// Sets the default locale of the PathnameConfig.
    /// Has no effect unless locales were set first.
    pub fn with_default_locale<S: AsRef<str>>(mut self, locale: S) -> Self {
        if let Some(i18n) = &mut self.pathname.i18n {
            i18n.default_locale = Some(locale.as_ref().into());
        }
        self
    }

    /// Sets the trailing slash value reported for the root path.
    pub fn with_trailing_slash(mut self, trailing_slash: bool) -> Self {
        self.pathname.trailing_slash = Some(trailing_slash);
        self
    }

    /// Enables or disables data route decoding.
    pub fn with_parse_data(mut self, enable: bool) -> Self {
        self.pathname.parse_data = enable;
        self
    }

    /// Sets the log format of the LoggingConfig.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.logging.format = format;
        self
    }

    /// Ensures that the configuration is valid.
    /// Every value is optional, but the ones that are present must be
    /// consistent with each other.
    pub fn validate(&self) -> Result<()> {
        self.pathname.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    ///
    /// Sets up the tracing subscriber for logging based on the LoggingConfig.
    ///
    /// NOTE: This should be called early during startup to ensure logging is configured
    ///       before any log messages are emitted.
    ///
    pub fn setup_tracing(&self) {
        use tracing_subscriber::{EnvFilter, prelude::*};
        let env_filter = EnvFilter::from_default_env();
        match self.logging.format {
            LogFormat::Json => {
                let _ = tracing_subscriber::registry()
                    .with(tracing_subscriber::fmt::layer().json())
                    .with(env_filter)
                    .try_init();
            }
            LogFormat::Default => {
                let _ = tracing_subscriber::registry()
                    .with(tracing_subscriber::fmt::layer())
                    .with(env_filter)
                    .try_init();
            }
            LogFormat::Compact => {
                let _ = tracing_subscriber::registry()
                    .with(tracing_subscriber::fmt::layer().compact())
                    .with(env_filter)
                    .try_init();
            }
            LogFormat::Pretty => {
                let _ = tracing_subscriber::registry()
                    .with(tracing_subscriber::fmt::layer().pretty())
                    .with(env_filter)
                    .try_init();
            }
        }
    }
}

///
/// Parses a configuration string with references to environment variables
/// into a Config struct by substituting the environment variables and then
/// parsing the resulting TOML.
///
impl FromStr for Config {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let config_file = replace_handlebars_with_env(s);
        let config = toml::from_str::<Config>(&config_file)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, decompose};

    /// A configuration with every default, independent of RUST_ENV.
    fn blank() -> Config {
        "".parse().expect("empty TOML is a valid configuration")
    }

    #[test]
    fn test_config_from_str_valid() {
        unsafe {
            env::set_var("CONFIG_TEST_BASE_PATH", "/docs");
        }

        let config_str = r#"
[pathname]
base_path = "{{ CONFIG_TEST_BASE_PATH }}"
trailing_slash = true
parse_data = true

[pathname.i18n]
locales = ["en-US", "fr"]
default_locale = "en-US"

[logging]
format = "json"
        "#;

        let config = config_str.parse::<Config>();
        assert!(config.is_ok(), "{config:?}");

        let config = config.unwrap();
        assert_eq!(config.pathname.base_path.as_deref(), Some("/docs"));
        assert_eq!(config.pathname.trailing_slash, Some(true));
        assert!(config.pathname.parse_data);
        assert_eq!(
            config.pathname.i18n,
            Some(I18nConfig {
                locales: vec!["en-US".into(), "fr".into()],
                default_locale: Some("en-US".into()),
            })
        );
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());

        unsafe {
            env::remove_var("CONFIG_TEST_BASE_PATH");
        }
    }

    #[test]
    fn test_config_from_str_invalid_toml() {
        let result = "this is not valid toml".parse::<Config>();
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_config_from_str_wrong_type() {
        let result = "[pathname]\nparse_data = \"yes\"".parse::<Config>();
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_has_no_pathname_rules() {
        let config = blank();
        assert_eq!(config.pathname.base_path, None);
        assert_eq!(config.pathname.trailing_slash, None);
        assert!(!config.pathname.parse_data);
        assert_eq!(config.pathname.i18n, None);
        assert_eq!(config.logging.format, LogFormat::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder_matches_toml_equivalent() {
        let builder_config = blank()
            .with_base_path("/site")
            .with_locales(["en", "de"])
            .with_default_locale("en")
            .with_trailing_slash(false)
            .with_parse_data(true)
            .with_log_format(LogFormat::Compact);

        let toml_config: Config = r#"
[pathname]
base_path = "/site"
trailing_slash = false
parse_data = true

[pathname.i18n]
locales = ["en", "de"]
default_locale = "en"

[logging]
format = "compact"
        "#
        .parse()
        .expect("Failed to parse TOML config");

        assert_eq!(builder_config.pathname.base_path, toml_config.pathname.base_path);
        assert_eq!(
            builder_config.pathname.trailing_slash,
            toml_config.pathname.trailing_slash
        );
        assert_eq!(builder_config.pathname.parse_data, toml_config.pathname.parse_data);
        assert_eq!(builder_config.pathname.i18n, toml_config.pathname.i18n);
        assert_eq!(builder_config.logging.format, toml_config.logging.format);

        let path = "/site/_next/data/BID/de/blog.json";
        assert_eq!(
            decompose(path, &builder_config.pathname.decompose_options()),
            decompose(path, &toml_config.pathname.decompose_options())
        );
    }

    #[test]
    fn test_with_default_locale_requires_locales() {
        let config = blank().with_default_locale("en");
        assert_eq!(config.pathname.i18n, None);

        let config = blank()
            .with_locales(["en"])
            .with_default_locale("en")
            .with_locales(["en", "fr"]);
        assert_eq!(config.pathname.default_locale(), Some("en"));
    }

    #[test]
    fn test_validate_reports_pathname_errors() {
        let config = blank().with_base_path("docs");
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let config = blank().with_locales(["en"]).with_default_locale("fr");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let config = Config::from_toml_file("test").expect("config/test.toml should load");
        assert!(config.validate().is_ok());
        assert!(config.pathname.parse_data);

        let missing = Config::from_toml_file("does-not-exist").unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::Io);
        assert!(missing.to_string().contains("config/does-not-exist.toml"));
    }

    #[test]
    fn test_load_from_rust_env() {
        unsafe {
            env::set_var("RUST_ENV", "test");
        }

        let result = Config::from_rust_env();
        assert!(
            result.is_ok(),
            "Expected configuration file to load successfully"
        );

        unsafe {
            env::remove_var("RUST_ENV");
        }

        let result = Config::from_rust_env();
        assert!(
            result.is_err(),
            "Expected error when RUST_ENV is not set"
        );
    }

    // ========================================================================
    // Property-based tests for config parsing
    // ========================================================================

    mod proptest_config {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Well formed base paths parse and validate
            #[test]
            fn valid_base_path_validates(segments in prop::collection::vec("[a-z0-9_-]{1,8}", 1..4)) {
                let base_path = format!("/{}", segments.join("/"));
                let toml_str = format!("[pathname]\nbase_path = \"{base_path}\"\n");

                let config: std::result::Result<Config, _> = toml_str.parse();
                prop_assert!(config.is_ok(), "Valid base path should parse");

                let config = config.unwrap();
                prop_assert_eq!(config.pathname.base_path.as_deref(), Some(base_path.as_str()));
                prop_assert!(config.validate().is_ok());
            }

            /// Base paths ending in a slash parse but fail validation
            #[test]
            fn trailing_slash_base_path_fails_validation(segment in "[a-z]{1,8}") {
                let toml_str = format!("[pathname]\nbase_path = \"/{segment}/\"\n");

                let config: std::result::Result<Config, _> = toml_str.parse();
                prop_assert!(config.is_ok(), "TOML should parse");
                prop_assert!(config.unwrap().validate().is_err());
            }

            /// Any default locale drawn from the locale list validates
            #[test]
            fn default_locale_from_list_validates(
                locales in prop::collection::hash_set("[a-z]{2}(-[A-Z]{2})?", 1..5),
                pick in any::<prop::sample::Index>()
            ) {
                let locales: Vec<String> = locales.into_iter().collect();
                let mut lowered: Vec<String> = locales.iter().map(|l| l.to_lowercase()).collect();
                lowered.sort();
                lowered.dedup();
                prop_assume!(lowered.len() == locales.len());

                let default_locale = pick.get(&locales).clone();
                let config = blank()
                    .with_locales(locales.clone())
                    .with_default_locale(&default_locale);
                prop_assert!(config.validate().is_ok());
            }
        }
    }
}
