use crate::{encode::delimited, Encode, EncodeError, Name, Value};

/// The `Arguments` type represents the arguments passed to a field or a
/// directive. Insertion order is kept as given.
///
/// *Arguments*:
///     ( Argument+ )
///
/// Empty arguments encode to nothing at all, so a field or directive without
/// arguments has no parentheses.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#sec-Language.Arguments).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Arguments, Encode};
///
/// let arguments = Arguments::from_iter([("owner", "o"), ("name", "n")]);
/// assert_eq!(arguments.encode().unwrap(), r#"(owner: "o" name: "n")"#);
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Arguments {
    arguments: Vec<Argument>,
}

impl Arguments {
    /// Create an empty instance of Arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument.
    pub fn arg(&mut self, arg: Argument) {
        self.arguments.push(arg);
    }

    /// Returns whether there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Iterate over the arguments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter()
    }
}

impl<N: Into<Name>, V: Into<Value>> FromIterator<(N, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            arguments: iter
                .into_iter()
                .map(|(name, value)| Argument::new(name, value))
                .collect(),
        }
    }
}

impl From<Vec<Argument>> for Arguments {
    fn from(arguments: Vec<Argument>) -> Self {
        Self { arguments }
    }
}

impl Encode for Arguments {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        if self.arguments.is_empty() {
            return Ok(());
        }
        delimited(buf, '(', ')', &self.arguments, |buf, arg| arg.encode_to(buf))
    }
}

/// The `Argument` type represents an argument
///
/// *Argument*:
///     Name: Value
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#Argument).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Argument, Encode};
///
/// let argument = Argument::new("argName", "value");
/// assert_eq!(argument.encode().unwrap(), r#"argName: "value""#);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Argument {
    name: Name,
    value: Value,
}

impl Argument {
    /// Create a new instance of Argument.
    pub fn new(name: impl Into<Name>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the argument's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the argument's value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Encode for Argument {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        self.name.encode_to(buf)?;
        buf.push_str(": ");
        self.value.encode_to(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_encodes_argument() {
        let argument = Argument::new("argName", Value::String("value".to_string()));

        assert_eq!(argument.encode().unwrap(), r#"argName: "value""#);
    }

    #[test]
    fn it_escapes_string_arguments() {
        let argument = Argument::new("owner", r"o\hello");

        assert_eq!(argument.encode().unwrap(), r#"owner: "o\\hello""#);
    }

    #[test]
    fn it_keeps_argument_order() {
        let mut arguments = Arguments::new();
        arguments.arg(Argument::new("owner", "o"));
        arguments.arg(Argument::new("name", "n"));
        arguments.arg(Argument::new("first", 10));

        assert_eq!(
            arguments.encode().unwrap(),
            r#"(owner: "o" name: "n" first: 10)"#
        );
    }

    #[test]
    fn it_encodes_empty_arguments_as_nothing() {
        assert_eq!(Arguments::new().encode().unwrap(), "");
    }

    #[test]
    fn it_fails_on_invalid_argument_name() {
        let arguments = Arguments::from_iter([("ok", 1), ("1bad", 2)]);

        assert_eq!(
            arguments.encode(),
            Err(EncodeError::InvalidName("1bad".to_string()))
        );
    }
}
