use serde_json::{Map, Value};

pub const ARTWORK_PLACEHOLDER: &str = "{w}x{h}bb";
pub const ARTWORK_SIZE: &str = "640x640bb";

/// Number of leading characters that separate a library song id from the
/// catalog id it was added from (`i.` in `i.1234567`).
const LIBRARY_ID_PREFIX_LEN: usize = 2;

/// Fills the size placeholder of a templated artwork url with a fixed
/// 640x640 rendition. Urls without the placeholder are returned unchanged.
pub fn resolve_artwork_url(template: &str) -> String {
    template.replace(ARTWORK_PLACEHOLDER, ARTWORK_SIZE)
}

/// Strips the library prefix from a library song id.
///
/// Ids shorter than the prefix yield an empty string.
pub fn catalog_id_from_library_id(library_id: &str) -> String {
    library_id
        .chars()
        .skip(LIBRARY_ID_PREFIX_LEN)
        .collect()
}

/// Joins catalog ids into the comma separated list the `ids` query
/// parameter expects.
///
/// # Example
///
/// ```
/// let ids = vec!["1".to_string(), "22".to_string()];
/// assert_eq!(join_ids(&ids), "1,22");
/// ```
pub fn join_ids(ids: &[String]) -> String {
    ids.join(",")
}

/// Converts a snake_case key to camelCase.
///
/// The leading word is lowercased and every following word capitalized.
/// Leading and trailing underscores are kept as is, and keys without an
/// inner underscore are returned untouched, so already camelCased keys pass
/// through.
pub fn snake_to_camel(key: &str) -> String {
    let core = key.trim_matches('_');
    if core.is_empty() || !core.contains('_') {
        return key.to_string();
    }

    let leading = &key[..key.len() - key.trim_start_matches('_').len()];
    let trailing = &key[key.trim_end_matches('_').len()..];

    let mut camel = String::with_capacity(key.len());
    camel.push_str(leading);
    for (idx, part) in core.split('_').filter(|p| !p.is_empty()).enumerate() {
        if idx == 0 {
            camel.push_str(&part.to_lowercase());
            continue;
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            camel.push_str(&chars.as_str().to_lowercase());
        }
    }
    camel.push_str(trailing);
    camel
}

/// Rewrites every object key in `value` from snake_case to camelCase.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (snake_to_camel(&k), normalize_keys(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}
