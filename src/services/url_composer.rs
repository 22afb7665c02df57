//! URL composition from a base URL and an ordered query-parameter list.

use crate::types::url::QueryParameter;

/// Builds the full URL for a base URL and parameter list.
///
/// Parameters whose trimmed name is empty are silently dropped. Names and
/// values are percent-encoded independently (RFC 3986 unreserved set, space
/// becomes `%20`) and joined as `name=value` pairs with `&`, preserving the
/// original order. With no valid parameters the base URL is returned
/// unchanged. A trimmed-empty base URL yields `?` plus the query string;
/// otherwise the query is appended with `&` when the base already contains a
/// `?`, else with `?`. Existing query text in the base is treated as opaque
/// and never parsed, deduplicated, or merged.
pub fn compose_url(base_url: &str, parameters: &[QueryParameter]) -> String {
    let encoded: Vec<String> = parameters
        .iter()
        .filter(|param| !param.name.trim().is_empty())
        .map(|param| {
            format!(
                "{}={}",
                urlencoding::encode(&param.name),
                urlencoding::encode(&param.value)
            )
        })
        .collect();

    if encoded.is_empty() {
        return base_url.to_string();
    }

    let query = encoded.join("&");

    if base_url.trim().is_empty() {
        return format!("?{}", query);
    }

    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base_url, separator, query)
}
