//! Structural trial decoding for values with more than one wire shape.
//!
//! Some RPC values arrive in several shapes with no common discriminant
//! field: an access key permission is either the bare string `"FullAccess"`
//! or an object keyed by `"FunctionCall"`. These are decoded by trying each
//! shape in a fixed priority order and taking the first one that parses.

use serde_json::Value;

/// A single shape attempt: returns `Some` when `value` has this shape.
pub(crate) type ShapeAttempt<T> = fn(&Value) -> Option<T>;

/// Try each shape in order, returning the first successful decode.
pub(crate) fn first_match<T>(value: &Value, attempts: &[ShapeAttempt<T>]) -> Option<T> {
    attempts.iter().find_map(|attempt| attempt(value))
}
