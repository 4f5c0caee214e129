use super::{
    DATA_ROUTE_INDEX, DATA_ROUTE_PREFIX, DATA_ROUTE_SUFFIX, PathInfo, add_path_prefix,
    add_path_suffix, has_path_prefix, remove_trailing_slash,
};

/// Settings for [`format_pathname_info`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions<'a> {
    /// A locale equal to this one is not written into the path, except for data routes.
    pub default_locale: Option<&'a str>,
    /// Always write the locale prefix, even when the path already carries it
    /// or lives under `/api`.
    pub ignore_prefix: bool,
}

/// Prefixes `path` with `/<locale>` unless that would be redundant.
pub fn add_locale(
    path: &str,
    locale: Option<&str>,
    default_locale: Option<&str>,
    ignore_prefix: bool,
) -> String {
    let Some(locale) = locale.filter(|l| !l.is_empty() && Some(*l) != default_locale) else {
        return path.to_string();
    };

    if !ignore_prefix {
        let lower = path.to_lowercase();
        if has_path_prefix(&lower, "/api")
            || has_path_prefix(&lower, &format!("/{}", locale.to_lowercase()))
        {
            return path.to_string();
        }
    }

    add_path_prefix(path, &format!("/{locale}"))
}

/// Builds a request path back out of a [`PathInfo`].
///
/// This is the inverse of [`decompose`](super::decompose): base path, data-route
/// encoding and locale are put back, and the trailing slash policy is applied.
///
/// ```
/// use axum_pathinfo::{FormatOptions, PathInfo, format_pathname_info};
///
/// let info = PathInfo {
///     pathname: "/blog".into(),
///     base_path: Some("/site".into()),
///     build_id: Some("BID".into()),
///     locale: Some("de".into()),
///     trailing_slash: Some(false),
/// };
/// assert_eq!(
///     format_pathname_info(&info, &FormatOptions::default()),
///     "/site/_next/data/BID/de/blog.json"
/// );
/// ```
pub fn format_pathname_info(info: &PathInfo, options: &FormatOptions<'_>) -> String {
    let build_id = info.build_id.as_deref().filter(|b| !b.is_empty());
    let trailing_slash = info.trailing_slash == Some(true);

    let default_locale = match build_id {
        Some(_) => None,
        None => options.default_locale,
    };
    let mut pathname = add_locale(
        &info.pathname,
        info.locale.as_deref(),
        default_locale,
        options.ignore_prefix,
    );

    if build_id.is_some() || !trailing_slash {
        pathname = remove_trailing_slash(&pathname);
    }

    if let Some(build_id) = build_id {
        let data_prefix = format!("{DATA_ROUTE_PREFIX}{build_id}");
        pathname = if pathname == "/" {
            format!("{data_prefix}/{DATA_ROUTE_INDEX}{DATA_ROUTE_SUFFIX}")
        } else {
            add_path_suffix(&add_path_prefix(&pathname, &data_prefix), DATA_ROUTE_SUFFIX)
        };
    }

    if let Some(base_path) = info.base_path.as_deref() {
        pathname = add_path_prefix(&pathname, base_path);
    }

    if build_id.is_none() && trailing_slash {
        if pathname.ends_with('/') {
            pathname
        } else {
            add_path_suffix(&pathname, "/")
        }
    } else {
        remove_trailing_slash(&pathname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecomposeOptions, decompose};
    use proptest::prelude::*;

    fn info(pathname: &str) -> PathInfo {
        PathInfo {
            pathname: pathname.to_string(),
            ..PathInfo::default()
        }
    }

    #[test]
    fn test_add_locale() {
        assert_eq!(add_locale("/about", Some("fr"), None, false), "/fr/about");
        assert_eq!(add_locale("/about", None, None, false), "/about");
        assert_eq!(add_locale("/about", Some("en"), Some("en"), false), "/about");
        assert_eq!(add_locale("/FR/about", Some("fr"), None, false), "/FR/about");
        assert_eq!(add_locale("/api/users", Some("fr"), None, false), "/api/users");
        assert_eq!(add_locale("/api/users", Some("fr"), None, true), "/fr/api/users");
        assert_eq!(add_locale("/", Some("fr"), None, false), "/fr/");
    }

    #[test]
    fn test_format_plain_path() {
        let options = FormatOptions::default();
        assert_eq!(format_pathname_info(&info("/blog/"), &options), "/blog");
        assert_eq!(format_pathname_info(&info("/"), &options), "/");
    }

    #[test]
    fn test_format_trailing_slash() {
        let options = FormatOptions::default();
        let page = PathInfo {
            trailing_slash: Some(true),
            base_path: Some("/docs".into()),
            ..info("/intro")
        };
        assert_eq!(format_pathname_info(&page, &options), "/docs/intro/");

        let root = PathInfo {
            trailing_slash: Some(true),
            ..info("/")
        };
        assert_eq!(format_pathname_info(&root, &options), "/");
    }

    #[test]
    fn test_format_data_route_root() {
        let data = PathInfo {
            build_id: Some("abc123".into()),
            trailing_slash: Some(true),
            ..info("/")
        };
        assert_eq!(
            format_pathname_info(&data, &FormatOptions::default()),
            "/_next/data/abc123/index.json"
        );
    }

    #[test]
    fn test_format_data_route_keeps_default_locale() {
        let data = PathInfo {
            build_id: Some("abc123".into()),
            locale: Some("en".into()),
            ..info("/")
        };
        let options = FormatOptions {
            default_locale: Some("en"),
            ignore_prefix: false,
        };
        assert_eq!(format_pathname_info(&data, &options), "/_next/data/abc123/en.json");

        let page = PathInfo {
            build_id: None,
            ..data.clone()
        };
        assert_eq!(format_pathname_info(&page, &options), "/");
    }

    #[test]
    fn test_format_round_trips_data_routes() {
        let table = vec!["en".to_string(), "de".to_string()];
        let options = DecomposeOptions::new()
            .with_base_path("/site")
            .with_locales(&table)
            .with_parse_data(true);

        for path in [
            "/site/_next/data/BID/de/blog.json",
            "/site/_next/data/BID/index.json",
            "/site/_next/data/BID/de.json",
            "/site/_next/data/BID/blog/post-1.json",
            "/site/de/blog",
            "/site",
        ] {
            let decomposed = decompose(path, &options);
            assert_eq!(
                format_pathname_info(&decomposed, &FormatOptions::default()),
                path,
                "round trip of {path}"
            );
        }
    }

    proptest! {
        /// Paths with a trailing slash keep it when formatted back
        #[test]
        fn trailing_slash_survives_round_trip(route in "(/[a-z]{1,6}){1,3}/") {
            let decomposed = decompose(&route, &DecomposeOptions::default());
            prop_assert_eq!(format_pathname_info(&decomposed, &FormatOptions::default()), route);
        }
    }
}
