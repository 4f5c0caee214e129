//! Localized Site Example
//!
//! Serves a small localized site where every page handler receives the
//! decomposed request path.
//!
//! Run with:
//! ```bash
//! RUST_ENV=dev SITE_BASE_PATH=/site RUST_LOG=axum_pathinfo=debug cargo run --example localized_site
//! ```
//!
//! Then test:
//! ```bash
//! curl http://localhost:3000/site/
//! curl http://localhost:3000/site/de/blog/hello
//! curl http://localhost:3000/site/_next/data/BUILD/nl-NL/blog/hello.json
//! ```

use axum::{
    Json, Router, ServiceExt,
    extract::{Path, Request},
    routing::get,
};
use axum_pathinfo::{Config, FormatOptions, PathInfo, PathInfoLayer, Result};
use serde::Serialize;
use std::sync::Arc;
use tower::Layer;

#[derive(Serialize)]
struct Page {
    title: String,
    locale: String,
    canonical: String,
    #[serde(flatten)]
    info: PathInfo,
}

fn page(title: String, info: PathInfo, default_locale: &str) -> Json<Page> {
    let canonical = info.format(&FormatOptions {
        default_locale: Some(default_locale),
        ignore_prefix: false,
    });
    Json(Page {
        title,
        locale: info.locale.clone().unwrap_or_else(|| default_locale.to_string()),
        canonical,
        info,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::from_rust_env() {
        Ok(config) => config,
        Err(_) => r#"
[pathname]
parse_data = true

[pathname.i18n]
locales = ["en", "de", "nl-NL"]
default_locale = "en"
        "#
        .parse()?,
    };
    config.validate()?;
    config.setup_tracing();

    let default_locale: Arc<str> = config.pathname.default_locale().unwrap_or("en").into();

    let home_locale = default_locale.clone();
    let blog_locale = default_locale.clone();
    let router = Router::new()
        .route(
            "/",
            get(move |info: PathInfo| async move { page("Home".into(), info, &home_locale) }),
        )
        .route(
            "/blog/{slug}",
            get(
                move |Path(slug): Path<String>, info: PathInfo| async move {
                    page(format!("Blog: {slug}"), info, &blog_locale)
                },
            ),
        );

    let app = PathInfoLayer::from_config(&config)?
        .with_uri_rewrite(true)
        .layer(router);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!(addr = "127.0.0.1:3000", "Serving localized site");
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}
