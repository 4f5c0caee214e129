//! # axum-pathinfo
//!
//! Decomposes request paths of a localized, statically exported site into the
//! parts that matter to routing: the base path it is deployed under, the build
//! id of a `/_next/data/<build id>/<route>.json` data route, the locale and
//! whether the path ended in a slash.
//!
//! # Quick Start
//!
//! ```rust
//! use axum_pathinfo::{DecomposeOptions, decompose};
//!
//! let locales = vec!["en-US".to_string(), "de".to_string()];
//! let options = DecomposeOptions::new()
//!     .with_base_path("/site")
//!     .with_locales(&locales)
//!     .with_parse_data(true);
//!
//! let info = decompose("/site/_next/data/BID/de/blog.json", &options);
//! assert_eq!(info.pathname, "/blog");
//! assert_eq!(info.locale.as_deref(), Some("de"));
//! assert_eq!(info.build_id.as_deref(), Some("BID"));
//! ```
//!
//! Decomposition is synchronous, allocation-light and never fails. Paths that
//! match none of the rules come back unchanged.
//!
//! # Configuration
//!
//! Options are usually loaded from TOML with [`Config`]:
//!
//! ```rust
//! use axum_pathinfo::{Config, decompose};
//!
//! let config: Config = r#"
//!     [pathname]
//!     base_path = "/docs"
//!     trailing_slash = true
//!
//!     [pathname.i18n]
//!     locales = ["en", "fr"]
//!     default_locale = "en"
//! "#.parse().unwrap();
//! config.validate().unwrap();
//!
//! let info = decompose("/docs/FR/guide/", &config.pathname.decompose_options());
//! assert_eq!(info.pathname, "/guide/");
//! assert_eq!(info.locale.as_deref(), Some("fr"));
//! assert_eq!(info.trailing_slash, Some(true));
//! ```
//!
//! `Config::default()` loads `config/{RUST_ENV}.toml`, and `{{ VAR }}`
//! placeholders in TOML are replaced with environment variables.
//!
//! # Formatting
//!
//! [`format_pathname_info`] goes the other way and builds the request path
//! for a [`PathInfo`], adding the locale, data-route encoding, base path and
//! trailing slash back.
//!
//! # Middleware
//!
//! [`PathInfoLayer`] runs the decomposition for every request, stores the
//! result as a request extension and optionally rewrites the request URI.
//! Handlers receive it by taking a [`PathInfo`] argument.
//!
//! # Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | `pathname` | [`decompose`], [`format_pathname_info`] and path prefix helpers |
//! | `locale` | Locale tables, [`LocaleProvider`] and [`I18nProvider`] |
//! | `config` | Configuration loading and validation ([`Config`]) |
//! | `fluent` | Tower layer and axum extractor ([`PathInfoLayer`]) |
//! | `error` | Error types and handling ([`Error`]) |
//! | `utils` | Environment substitution for configuration files |
mod config;
mod error;
mod fluent;
mod locale;
mod pathname;
mod utils;

pub use config::*;
pub use error::*;
pub use fluent::*;
pub use locale::*;
pub use pathname::*;
pub use utils::*;

pub type Result<T> = std::result::Result<T, Error>;
