use indexmap::IndexMap;

use crate::{
    encode::delimited,
    string_value::write_string_value,
    Encode, EncodeError, Name, Variable,
};

/// The Value type represents available values you could give as an input.
///
/// *Value*:
///     Variable | IntValue | FloatValue | StringValue | BooleanValue | NullValue | EnumValue | ListValue | ObjectValue
///
/// Both [`Value::Map`] and [`Value::Object`] encode as an object value. `Map`
/// is keyed by name and keeps insertion order; `Object` is a plain list of
/// pairs and keeps duplicates as given.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#sec-Input-Values).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Encode, Value};
///
/// let value = Value::List(vec![
///     1.into(),
///     "foo".into(),
///     Value::List(vec![3.into(), "bar".into()]),
/// ]);
/// assert_eq!(value.encode().unwrap(), r#"[1 "foo" [3 "bar"]]"#);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    /// String value example: `"My string"`
    String(String),
    /// Int value example: `7`
    Int(i64),
    /// Single precision float value example: `25.4`
    Float(f32),
    /// Double precision float value example: `25.4`
    Double(f64),
    /// Boolean value example: `false`
    Boolean(bool),
    /// Null value example: `null`
    Null,
    /// List value example: `[1 2 3]`
    List(Vec<Value>),
    /// Object value keyed by name example: `{first: 1 second: 2}`
    Map(IndexMap<Name, Value>),
    /// Object value as ordered pairs example: `{first: 1 second: 2}`
    Object(ObjectValue),
    /// Variable reference example: `$varName`
    Variable(Variable),
    /// Enum value example: `VARIANT_EXAMPLE`
    Enum(EnumValue),
}

impl Encode for Value {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        match self {
            Value::String(value) => {
                write_string_value(buf, value);
                Ok(())
            }
            Value::Int(value) => {
                buf.push_str(&value.to_string());
                Ok(())
            }
            Value::Float(value) => write_float(buf, *value, value.is_finite()),
            Value::Double(value) => write_float(buf, *value, value.is_finite()),
            Value::Boolean(true) => {
                buf.push_str("true");
                Ok(())
            }
            Value::Boolean(false) => {
                buf.push_str("false");
                Ok(())
            }
            Value::Null => {
                buf.push_str("null");
                Ok(())
            }
            Value::List(list) => {
                delimited(buf, '[', ']', list, |buf, value| value.encode_to(buf))
            }
            Value::Map(map) => delimited(buf, '{', '}', map, |buf, (name, value)| {
                encode_object_field(buf, name, value)
            }),
            Value::Object(object) => object.encode_to(buf),
            Value::Variable(variable) => variable.encode_to(buf),
            Value::Enum(value) => value.encode_to(buf),
        }
    }
}

/// Floats use the shortest representation that round-trips, which always
/// contains a `.` or an exponent and so never reads back as an Int.
fn write_float<F: std::fmt::Debug>(
    buf: &mut String,
    value: F,
    is_finite: bool,
) -> Result<(), EncodeError> {
    if !is_finite {
        return Err(EncodeError::UnsupportedValueType(format!(
            "non-finite float `{value:?}`"
        )));
    }
    buf.push_str(&format!("{value:?}"));
    Ok(())
}

fn encode_object_field(buf: &mut String, name: &Name, value: &Value) -> Result<(), EncodeError> {
    name.encode_to(buf)?;
    buf.push_str(": ");
    value.encode_to(buf)
}

/// The ObjectValue type represents an input object literal as an ordered list
/// of fields.
///
/// *ObjectValue*:
///     { ObjectField* }
///
/// *ObjectField*:
///     Name : Value
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#sec-Input-Object-Values).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Encode, ObjectValue};
///
/// let mut object = ObjectValue::new();
/// object.field("first", 25);
/// object.field("second", "test");
///
/// assert_eq!(object.encode().unwrap(), r#"{first: 25 second: "test"}"#);
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ObjectValue {
    fields: Vec<(Name, Value)>,
}

impl ObjectValue {
    /// Create an empty instance of ObjectValue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field.
    pub fn field(&mut self, name: impl Into<Name>, value: impl Into<Value>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Returns the fields in insertion order.
    pub fn fields(&self) -> &[(Name, Value)] {
        &self.fields
    }
}

impl<N: Into<Name>, V: Into<Value>> FromIterator<(N, V)> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl Encode for ObjectValue {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        delimited(buf, '{', '}', &self.fields, |buf, (name, value)| {
            encode_object_field(buf, name, value)
        })
    }
}

/// The EnumValue type represents an enum literal. It is written unquoted,
/// which tells it apart from a string value.
///
/// *EnumValue*:
///     Name *but not* `true`, `false` or `null`
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#sec-Enum-Value).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Encode, EnumValue};
///
/// assert_eq!(EnumValue::new("CREATED_AT").encode().unwrap(), "CREATED_AT");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EnumValue {
    name: Name,
}

impl EnumValue {
    /// Create a new instance of EnumValue.
    pub fn new(name: impl Into<Name>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the enum value's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Check the name syntax and the reserved words, returning the string to
    /// write on success.
    pub fn validate(&self) -> Result<&str, EncodeError> {
        let value = self.name.validate()?;
        if matches!(value, "true" | "false" | "null") {
            return Err(EncodeError::ReservedEnumValue(value.to_owned()));
        }
        Ok(value)
    }
}

impl Encode for EnumValue {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        buf.push_str(self.validate()?);
        Ok(())
    }
}

macro_rules! to_number_value {
    ($ty: path, $inner_type: path, $value_variant: ident) => {
        impl From<$ty> for Value {
            fn from(val: $ty) -> Self {
                Self::$value_variant(val as $inner_type)
            }
        }
    };
    ($({$ty: path, $inner_type: path, $value_variant: ident}),+) => {
        $(
            to_number_value!($ty, $inner_type, $value_variant);
        )+
    };
}

// Numbers
to_number_value!(
    {i64, i64, Int},
    {i32, i64, Int},
    {i16, i64, Int},
    {i8, i64, Int},
    {u32, i64, Int},
    {u16, i64, Int},
    {u8, i64, Int},
    {f64, f64, Double},
    {f32, f32, Float}
);

impl From<String> for Value {
    fn from(val: String) -> Self {
        Self::String(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Self::String(val.to_string())
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Boolean(val)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(val: Vec<T>) -> Self {
        Self::List(val.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(val: Option<T>) -> Self {
        val.map_or(Self::Null, Into::into)
    }
}

impl From<IndexMap<Name, Value>> for Value {
    fn from(val: IndexMap<Name, Value>) -> Self {
        Self::Map(val)
    }
}

impl From<ObjectValue> for Value {
    fn from(val: ObjectValue) -> Self {
        Self::Object(val)
    }
}

impl From<Variable> for Value {
    fn from(val: Variable) -> Self {
        Self::Variable(val)
    }
}

impl From<EnumValue> for Value {
    fn from(val: EnumValue) -> Self {
        Self::Enum(val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_encodes_scalars() {
        assert_eq!(Value::from("o").encode().unwrap(), r#""o""#);
        assert_eq!(Value::from(-42).encode().unwrap(), "-42");
        assert_eq!(Value::from(true).encode().unwrap(), "true");
        assert_eq!(Value::from(false).encode().unwrap(), "false");
        assert_eq!(Value::Null.encode().unwrap(), "null");
    }

    #[test]
    fn it_encodes_floats_as_float_literals() {
        assert_eq!(Value::from(1.0_f64).encode().unwrap(), "1.0");
        assert_eq!(Value::from(25.4_f64).encode().unwrap(), "25.4");
        assert_eq!(Value::from(0.5_f32).encode().unwrap(), "0.5");
        assert_eq!(Value::from(1e300_f64).encode().unwrap(), "1e300");
    }

    #[test]
    fn it_rejects_non_finite_floats() {
        assert!(matches!(
            Value::from(f64::NAN).encode(),
            Err(EncodeError::UnsupportedValueType(_))
        ));
        assert!(matches!(
            Value::from(f32::INFINITY).encode(),
            Err(EncodeError::UnsupportedValueType(_))
        ));
    }

    #[test]
    fn it_encodes_nested_lists() {
        let value = Value::from(vec![
            Value::from(1),
            Value::from("foo"),
            Value::from(vec![Value::from(3), Value::from("bar")]),
        ]);
        assert_eq!(value.encode().unwrap(), r#"[1 "foo" [3 "bar"]]"#);
        assert_eq!(Value::List(Vec::new()).encode().unwrap(), "[]");
    }

    #[test]
    fn it_encodes_map_in_insertion_order() {
        let mut map = IndexMap::new();
        map.insert(Name::from("zeta"), Value::from(1));
        map.insert(Name::from("alpha"), Value::from(vec![1, 2]));
        let value = Value::from(map);

        assert_eq!(value.encode().unwrap(), "{zeta: 1 alpha: [1 2]}");
        assert_eq!(value.encode().unwrap(), value.encode().unwrap());
    }

    #[test]
    fn it_encodes_object_value() {
        let object: ObjectValue = [("owner", Value::from("o")), ("name", Value::from("n"))]
            .into_iter()
            .collect();
        assert_eq!(
            Value::from(object).encode().unwrap(),
            r#"{owner: "o" name: "n"}"#
        );
        assert_eq!(ObjectValue::new().encode().unwrap(), "{}");
    }

    #[test]
    fn it_encodes_variables_and_enums() {
        assert_eq!(Value::from(Variable::new("id")).encode().unwrap(), "$id");
        assert_eq!(
            Value::from(EnumValue::new("ASC")).encode().unwrap(),
            "ASC"
        );
    }

    #[test]
    fn it_rejects_enum_values_that_read_back_as_other_literals() {
        for word in ["true", "false", "null"] {
            assert_eq!(
                Value::from(EnumValue::new(word)).encode(),
                Err(EncodeError::ReservedEnumValue(word.to_string()))
            );
        }
        assert_eq!(EnumValue::new("TRUE").encode().unwrap(), "TRUE");
        assert_eq!(
            EnumValue::new("not-an-enum").encode(),
            Err(EncodeError::InvalidName("not-an-enum".to_string()))
        );
    }

    #[test]
    fn it_encodes_optional_values() {
        assert_eq!(Value::from(Some(3)).encode().unwrap(), "3");
        assert_eq!(Value::from(None::<i32>).encode().unwrap(), "null");
    }

    #[test]
    fn it_fails_on_invalid_object_keys() {
        let mut object = ObjectValue::new();
        object.field("good", 1);
        object.field("bad key", 2);
        assert_eq!(
            object.encode(),
            Err(EncodeError::InvalidName("bad key".to_string()))
        );
    }
}
