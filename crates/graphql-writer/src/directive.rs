use crate::{Argument, Arguments, Encode, EncodeError, Name};

/// The `Directive` type represents a Directive, it provides a way to describe alternate runtime execution and type validation behavior in a GraphQL document.
///
/// *Directive*:
///     @ Name Arguments?
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#sec-Language.Directives).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Argument, Directive, Encode, Value};
///
/// let mut directive = Directive::new("myDirective");
/// directive.arg(Argument::new("first", Value::Int(5)));
///
/// assert_eq!(directive.encode().unwrap(), "@myDirective(first: 5)");
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Directive {
    name: Name,
    arguments: Arguments,
}

impl Directive {
    /// Create an instance of Directive
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            arguments: Arguments::new(),
        }
    }

    /// Create an instance of Directive with its arguments
    pub fn with_arguments(name: impl Into<Name>, arguments: Arguments) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Add an argument to the directive
    pub fn arg(&mut self, arg: Argument) {
        self.arguments.arg(arg);
    }
}

impl Encode for Directive {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        buf.push('@');
        self.name.encode_to(buf)?;
        self.arguments.encode_to(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Value, Variable};
    use pretty_assertions::assert_eq;

    #[test]
    fn it_encodes_directive() {
        let mut directive = Directive::new("myDirective");
        directive.arg(Argument::new("first", Value::Int(5)));

        assert_eq!(directive.encode().unwrap(), "@myDirective(first: 5)");
    }

    #[test]
    fn it_encodes_directive_without_arguments() {
        assert_eq!(Directive::new("live").encode().unwrap(), "@live");
    }

    #[test]
    fn it_encodes_directive_with_variable_argument() {
        let directive = Directive::with_arguments(
            "include",
            Arguments::from_iter([("if", Variable::new("withFriends"))]),
        );

        assert_eq!(
            directive.encode().unwrap(),
            "@include(if: $withFriends)"
        );
    }

    #[test]
    fn it_fails_on_invalid_directive_name() {
        assert_eq!(
            Directive::new("my-directive").encode(),
            Err(EncodeError::InvalidName("my-directive".to_string()))
        );
    }
}
