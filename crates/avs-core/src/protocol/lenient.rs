//! Lenient payload decoding helpers.
//!
//! serde fails a whole struct when one field has the wrong type. Payload
//! structs instead mark every field `#[serde(default, deserialize_with =
//! "lenient::field")]`: a missing field keeps its zero value, and a present
//! but mismatched field is logged and replaced by its zero value while its
//! siblings still decode. Struct-typed fields use `lenient::object`.
//!
//! Everything goes through `serde_json::Value` first. Duplicate keys collapse
//! to their last value there, and only a JSON object is ever handed to a
//! derived struct visitor, which would otherwise also accept an array as a
//! positional struct.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;
use serde_json::Value;

/// Field-level `deserialize_with` target: mismatch => `T::default()`.
pub fn field<'de, D, T>(de: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(de)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "payload field mismatch, using zero value");
        T::default()
    }))
}

/// Like `field`, for struct-typed fields: anything but an object => `T::default()`.
pub fn object<'de, D, T>(de: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(from_object(Value::deserialize(de)?))
}

/// Decode a whole payload. Absent or non-object payloads yield `T::default()`.
pub fn payload<T>(raw: Option<&RawValue>) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = raw else {
        return T::default();
    };
    match serde_json::from_str::<Value>(raw.get()) {
        Ok(value) => from_object(value),
        Err(e) => {
            tracing::debug!(error = %e, "payload is not valid json, using zero values");
            T::default()
        }
    }
}

fn from_object<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    if !value.is_object() {
        tracing::debug!("payload is not an object, using zero values");
        return T::default();
    }
    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "payload shape mismatch, using zero values");
        T::default()
    })
}
