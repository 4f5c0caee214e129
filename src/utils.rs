//!
//! Utility functions shared by the configuration loader.
//!

use {
    regex::{Captures, Regex},
    std::{env, sync::LazyLock},
};

/// Matches `{{ VAR_NAME }}` with optional whitespace around the variable name.
/// Variable names must be uppercase letters, digits, or underscores.
static HANDLEBAR_REGEXP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Z0-9_]+)\s*\}\}").unwrap());

/// Replaces handlebars-style placeholders with environment variable values.
///
/// `{{VAR}}`, `{{ VAR }}` and `{{  VAR  }}` are equivalent. A variable that is
/// not set is replaced with an empty string and a warning is logged.
///
/// This lets a deployment inject its base path without editing the TOML:
///
/// ```
/// use axum_pathinfo::replace_handlebars_with_env;
///
/// let template = r#"base_path = "{{ PATHINFO_DOC_MISSING_VAR }}""#;
/// assert_eq!(replace_handlebars_with_env(template), r#"base_path = """#);
/// ```
pub fn replace_handlebars_with_env(input: &str) -> String {
    HANDLEBAR_REGEXP
        .replace_all(input, |caps: &Captures| {
            let var_name = &caps[1];
            env::var(var_name).unwrap_or_else(|_| {
                tracing::warn!(
                    variable = %var_name,
                    "Environment variable not found, substituting with empty string"
                );
                String::new()
            })
        })
        .to_string()
}
