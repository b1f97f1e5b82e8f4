//! `${VAR}` expansion for string values in `folio.toml`.
//!
//! Two forms are recognized:
//! - `${VAR}` - value of VAR, error when unset
//! - `${VAR:-fallback}` - value of VAR, or `fallback` when unset
//!
//! Bare `$VAR` is left alone so hrefs containing `$` survive untouched.

use crate::ConfigError;

/// Expand `${...}` references in `value`.
///
/// Only braced references are handed to the expander; text between them,
/// including any bare `$`, is copied as is. An unterminated `${` is kept
/// literally. `field` names the config location and is carried into the
/// error.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_reference(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    expanded.push_str(rest);

    Ok(expanded)
}

/// Expand a single `${VAR}` or `${VAR:-fallback}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, |name| -> Result<Option<String>, UnsetVar> {
        std::env::var(name).map(Some).map_err(|_| UnsetVar {
            name: name.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.name),
    })
}

/// Lookup failure for a variable referenced without a fallback.
struct UnsetVar {
    name: String,
}
