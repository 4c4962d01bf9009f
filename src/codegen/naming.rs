//! Identifier derivation from endpoint paths.
//!
//! Paths look like `/transform/role/{name}`: `/`-separated segments, with
//! positional parameters wrapped in braces.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]").expect("NON_IDENT is a valid regex"));

/// Returns the last segment of `path`, braces intact.
///
/// ```
/// use pathgen::codegen::naming::last_field;
///
/// assert_eq!(last_field("/transit/export/{type}/{name}/{version}"), "{version}");
/// assert_eq!(last_field("/unlikely"), "unlikely");
/// ```
pub fn last_field(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Returns the segment before the last one, or `""` when there is none.
///
/// ```
/// use pathgen::codegen::naming::parent_field;
///
/// assert_eq!(parent_field("/transform/role/{name}"), "role");
/// assert_eq!(parent_field("/unlikely"), "");
/// ```
pub fn parent_field(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => last_field(&path[..idx]),
        None => "",
    }
}

/// Returns the first non-empty segment of `path`, the mount the endpoint
/// lives under.
///
/// ```
/// use pathgen::codegen::naming::first_field;
///
/// assert_eq!(first_field("/transit/keys/{name}"), "transit");
/// assert_eq!(first_field(""), "");
/// ```
pub fn first_field(path: &str) -> &str {
    path.split('/').find(|segment| !segment.is_empty()).unwrap_or_default()
}

/// Lowercases `segment` and drops every character that is not an ASCII
/// letter or digit, so `{role_name}` becomes `rolename`.
pub fn clean(segment: &str) -> String {
    NON_IDENT
        .replace_all(&segment.to_lowercase(), "")
        .into_owned()
}
