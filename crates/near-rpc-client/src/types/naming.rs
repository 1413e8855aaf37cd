//! Key naming conventions for the JSON-RPC boundary.
//!
//! NEAR nodes speak `snake_case`; the types in this crate serialize their
//! fields as `camelCase`. [`rename_keys`] rewrites the *structural* object
//! keys of a JSON tree from one convention to the other. Values are never
//! touched, so hashes, public keys and account IDs survive unchanged.
//!
//! Only keys in the source convention's domain are rewritten:
//!
//! - `snake_case → camelCase` applies to keys made of lowercase words joined
//!   by underscores. Keys without underscores pass through unchanged.
//! - `camelCase → snake_case` applies to keys starting with a lowercase
//!   letter. Keys starting with an uppercase letter are variant tags
//!   (`FullAccess`, `FunctionCall`) and pass through unchanged.
//!
//! Within those domains the two conversions are inverses of each other.

use serde_json::{Map, Value};

/// Target naming convention for object keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCase {
    /// `lower_words_joined`, the wire convention.
    Snake,
    /// `lowerWordsJoined`, the in-memory convention.
    Camel,
}

impl KeyCase {
    /// Convert a single key to this convention.
    pub fn apply(self, key: &str) -> String {
        match self {
            KeyCase::Snake => to_snake_case(key),
            KeyCase::Camel => to_camel_case(key),
        }
    }
}

/// Convert a `snake_case` key to `camelCase`.
///
/// ```
/// use near_rpc_client::types::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("block_hash"), "blockHash");
/// assert_eq!(to_camel_case("nonce"), "nonce");
/// ```
pub fn to_camel_case(key: &str) -> String {
    if !key.contains('_') {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len());
    for (i, word) in key.split('_').enumerate() {
        if i == 0 {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Convert a `camelCase` key to `snake_case`.
///
/// ```
/// use near_rpc_client::types::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("argsBase64"), "args_base64");
/// assert_eq!(to_snake_case("FunctionCall"), "FunctionCall");
/// ```
pub fn to_snake_case(key: &str) -> String {
    let starts_lower = key.chars().next().is_some_and(|c| c.is_ascii_lowercase());
    if !starts_lower || !key.chars().any(|c| c.is_ascii_uppercase()) {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Recursively rename every object key in `value` to `case`.
pub fn rename_keys(value: Value, case: KeyCase) -> Value {
    match value {
        Value::Object(map) => {
            let renamed: Map<String, Value> = map
                .into_iter()
                .map(|(k, v)| (case.apply(&k), rename_keys(v, case)))
                .collect();
            Value::Object(renamed)
        }
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| rename_keys(v, case)).collect())
        }
        other => other,
    }
}
