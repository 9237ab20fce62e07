use indexmap::IndexMap;

use crate::{EncodeError, Name, Value};

/// Convert JSON data, such as request variables, into a GraphQL value.
///
/// Object keys are kept as unchecked [`Name`]s in their JSON order and are
/// validated when the value is encoded. Integers that do not fit in an `i64`
/// have no GraphQL `Int` representation and are rejected.
///
/// ### Example
/// ```rust
/// use graphql_writer::{Encode, Value};
///
/// let json = serde_json::json!({ "owner": "o", "ids": [1, 2], "draft": null });
/// let value = Value::try_from(json).unwrap();
///
/// assert_eq!(value.encode().unwrap(), r#"{owner: "o" ids: [1 2] draft: null}"#);
/// ```
impl TryFrom<serde_json::Value> for Value {
    type Error = EncodeError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let value = match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Self::Int(int)
                } else if let Some(uint) = number.as_u64() {
                    return Err(EncodeError::UnsupportedValueType(format!(
                        "integer `{uint}` does not fit in a GraphQL Int"
                    )));
                } else if let Some(float) = number.as_f64() {
                    Self::Double(float)
                } else {
                    return Err(EncodeError::UnsupportedValueType(format!(
                        "number `{number}`"
                    )));
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(list) => Self::List(
                list.into_iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>, EncodeError>>()?,
            ),
            serde_json::Value::Object(object) => Self::Map(
                object
                    .into_iter()
                    .map(|(key, value)| Ok((Name::new_unchecked(key), Value::try_from(value)?)))
                    .collect::<Result<IndexMap<_, _>, EncodeError>>()?,
            ),
        };
        Ok(value)
    }
}
