//! Strict decoding shared by every DTO.
//!
//! Top-level and nested objects are both checked against the fields their type
//! declares before serde sees them, so an undeclared key is reported even when
//! a declared sibling fails to decode. Nested fields opt in with
//! `#[serde(deserialize_with = "strict::...")]`, which keeps the name of the
//! nested type in the error instead of the outermost one.

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;
use serde_aux::serde_introspection::serde_introspect;
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::{type_name, ApiObject};

const UNDECLARED: &str = "unknown property `";
const SERDE_UNKNOWN: &str = "unknown field `";

/// Decodes `data` as `T`, reporting undeclared keys before anything else.
pub(crate) fn decode<T: ApiObject>(data: &Value) -> Result<T, serde_json::Error> {
    if let Some(key) = undeclared_key::<T>(data) {
        return Err(serde_json::Error::custom(format!(
            "{}{}` in {}",
            UNDECLARED,
            key,
            T::CLASS
        )));
    }

    T::deserialize(data).map_err(|err| {
        if undeclared(&err.to_string()).is_some() {
            return err;
        }
        nested_schema_failure::<T>(data).unwrap_or(err)
    })
}

/// Splits a strict-mapping failure into the offending key and, when known, the
/// type that does not declare it.
pub(crate) fn undeclared(message: &str) -> Option<(&str, Option<&str>)> {
    if let Some(rest) = message.strip_prefix(UNDECLARED) {
        let (field, class) = rest.split_once("` in ")?;
        return Some((field, Some(class)));
    }

    message
        .strip_prefix(SERDE_UNKNOWN)
        .and_then(|rest| rest.split('`').next())
        .map(|field| (field, None))
}

fn undeclared_key<T: ApiObject>(data: &Value) -> Option<&str> {
    let fields = serde_introspect::<T>();
    if fields.is_empty() {
        return None;
    }

    data.as_object()?
        .keys()
        .map(String::as_str)
        .find(|key| !fields.contains(key))
}

// Containers default every field, so each key can be decoded on its own. This
// finds an undeclared key further down that a type error in a sibling hid.
fn nested_schema_failure<T: ApiObject>(data: &Value) -> Option<serde_json::Error> {
    data.as_object()?.iter().find_map(|(key, value)| {
        let mut single = Map::new();
        single.insert(key.clone(), value.clone());

        match T::deserialize(&Value::Object(single)) {
            Err(err) if undeclared(&err.to_string()).is_some() => Some(err),
            _ => None,
        }
    })
}

fn mismatch<E: serde::de::Error>(expected: &str, class: &str, found: &Value) -> E {
    E::custom(format!(
        "invalid type: {}, expected {} of {}",
        type_name(found),
        expected,
        class
    ))
}

pub fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: ApiObject,
{
    let value = Value::deserialize(deserializer)?;
    decode(&value).map_err(D::Error::custom)
}

/// `null` decodes to `None`.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: ApiObject,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => decode(&value).map(Some).map_err(D::Error::custom),
    }
}

/// `null` decodes to an empty list.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: ApiObject,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .map(decode)
            .collect::<Result<_, _>>()
            .map_err(D::Error::custom),
        other => Err(mismatch("a list", T::CLASS, &other)),
    }
}

pub fn map<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: ApiObject,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(HashMap::new()),
        Value::Object(entries) => entries
            .iter()
            .map(|(key, value)| decode(value).map(|item| (key.clone(), item)))
            .collect::<Result<_, _>>()
            .map_err(D::Error::custom),
        other => Err(mismatch("a map", T::CLASS, &other)),
    }
}
