use crate::{Encode, EncodeError, Name, TypeReference, Value};

/// The Variable type represents a reference to an operation variable.
///
/// *Variable*:
///     $ Name
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#Variable).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Encode, Variable};
///
/// assert_eq!(Variable::new("owner").encode().unwrap(), "$owner");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Variable {
    name: Name,
}

impl Variable {
    /// Create an instance of Variable
    pub fn new(name: impl Into<Name>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the variable's name, without the leading `$`.
    pub fn name(&self) -> &Name {
        &self.name
    }
}

impl Encode for Variable {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        buf.push('$');
        self.name.encode_to(buf)
    }
}

/// The VariableDefinition type represents a variable definition
///
/// *VariableDefinition*:
///     Variable : Type DefaultValue?
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#sec-Language.Variables).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Encode, TypeReference, Value, VariableDefinition};
///
/// let mut variable = VariableDefinition::new("first", TypeReference::named("Int"));
/// variable.default_value(Value::Int(25));
///
/// assert_eq!(variable.encode().unwrap(), "$first: Int = 25");
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinition {
    variable: Variable,
    ty: TypeReference,
    default_value: Option<Value>,
}

impl VariableDefinition {
    /// Create an instance of VariableDefinition
    pub fn new(variable: impl Into<Name>, ty: TypeReference) -> Self {
        Self {
            variable: Variable::new(variable),
            ty,
            default_value: None,
        }
    }

    /// Set a default value to the variable
    pub fn default_value(&mut self, default_value: impl Into<Value>) {
        self.default_value = Some(default_value.into());
    }

    /// Returns the defined variable.
    pub fn variable(&self) -> &Variable {
        &self.variable
    }
}

impl Encode for VariableDefinition {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        self.variable.encode_to(buf)?;
        buf.push_str(": ");
        self.ty.encode_to(buf)?;

        if let Some(default_value) = &self.default_value {
            buf.push_str(" = ");
            default_value.encode_to(buf)?;
        }

        Ok(())
    }
}
