//! Request middleware that decomposes every incoming path.
//!
//! - [`layer`] - `PathInfoLayer` and `PathInfoService`, the tower middleware
//! - [`extract`] - `PathInfo` as an axum extractor
//!
//! The layer inserts a [`PathInfo`](crate::PathInfo) into the request
//! extensions. Handlers take it as an argument:
//!
//! ```rust
//! use axum::{Router, routing::get};
//! use axum_pathinfo::{Config, PathInfo, PathInfoLayer};
//!
//! async fn page(info: PathInfo) -> String {
//!     format!("{} ({:?})", info.pathname, info.locale)
//! }
//!
//! # fn main() -> axum_pathinfo::Result<()> {
//! let config: Config = r#"
//!     [pathname.i18n]
//!     locales = ["en", "fr"]
//! "#.parse()?;
//!
//! let app: Router = Router::new()
//!     .route("/{*path}", get(page))
//!     .layer(PathInfoLayer::from_config(&config)?);
//! # Ok(())
//! # }
//! ```
//!
//! With [`PathInfoLayer::with_uri_rewrite`] the request URI is replaced by
//! the decomposed pathname. Route matching only sees the rewritten path when
//! the layer wraps the whole router with `tower::Layer::layer(router)`;
//! `Router::layer` runs after the route has been chosen.

mod extract;
mod layer;

pub use layer::*;

#[cfg(test)]
mod tests;
