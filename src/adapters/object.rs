use crate::iter::sequence;
use crate::sequence::Sequence;

#[cfg(feature = "serde")]
use crate::error::{Error, Result};
#[cfg(feature = "serde")]
use serde::Serialize;
#[cfg(feature = "serde")]
use serde_json::Value;

pub type KeyValuePair<K, V> = (K, V);

/// A repeatable sequence over the entries of a map, or any other cloneable
/// collection of pairs, in the collection's own iteration order.
pub fn sequence_from_entries<M, K, V>(entries: M) -> Sequence<KeyValuePair<K, V>>
where
    M: IntoIterator<Item = (K, V)> + Clone + 'static,
    M::IntoIter: 'static,
    K: 'static,
    V: 'static,
{
    sequence(entries)
}

/// A repeatable sequence over the fields of a record, as key/value pairs in
/// field order.
///
/// The record is converted once, up front. Anything that does not serialize
/// to a map is rejected with [`Error::NotARecord`].
///
/// # Examples
///
/// ```
/// use gensequence::sequence_from_object;
/// use serde_json::json;
///
/// let fields = sequence_from_object(&json!({ "name": "Bob", "age": 22 })).unwrap();
///
/// assert_eq!(fields.map(|(k, _)| k).to_vec(), vec!["name", "age"]);
/// ```
#[cfg(feature = "serde")]
pub fn sequence_from_object<T>(record: &T) -> Result<Sequence<KeyValuePair<String, Value>>>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(record)? {
        Value::Object(fields) => {
            let entries: Vec<_> = fields.into_iter().collect();
            tracing::trace!(fields = entries.len(), "adapted record");
            Ok(sequence(entries))
        }
        other => Err(Error::NotARecord(kind_of(&other))),
    }
}

#[cfg(feature = "serde")]
pub fn object_to_sequence<T>(record: &T) -> Result<Sequence<KeyValuePair<String, Value>>>
where
    T: Serialize + ?Sized,
{
    sequence_from_object(record)
}

#[cfg(feature = "serde")]
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a record",
    }
}
