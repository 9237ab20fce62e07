use std::fmt;

use crate::{
    encode::{delimited, space_prefixed},
    Directive, Encode, EncodeError, Name, Selection, SelectionSet, VariableDefinition,
};

/// The Operation type represents an operation definition
///
/// *OperationDefinition*:
///     OperationType Name? VariableDefinitions? Directives? SelectionSet
///
/// The operation type keyword is always written, even for an anonymous query.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#sec-Language.Operations).
///
/// ### Example
/// ```rust
/// use graphql_writer::{
///     Argument, Directive, Encode, Field, Operation, OperationType, TypeReference, Value,
///     VariableDefinition,
/// };
///
/// let mut op = Operation::new(
///     OperationType::Query,
///     vec![Field::new("first").into(), Field::new("second").into()],
/// );
/// op.variable_definition(VariableDefinition::new(
///     "variable_def",
///     TypeReference::list(TypeReference::named("Int")),
/// ));
/// let mut directive = Directive::new("testDirective");
/// directive.arg(Argument::new("first", Value::String("one".to_string())));
/// op.directive(directive);
///
/// assert_eq!(
///     op.encode().unwrap(),
///     r#"query($variable_def: [Int]) @testDirective(first: "one") { first second }"#
/// );
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Operation {
    operation_type: OperationType,
    name: Option<Name>,
    variable_definitions: Vec<VariableDefinition>,
    directives: Vec<Directive>,
    selection_set: SelectionSet,
}

impl Operation {
    /// Create a new instance of Operation
    pub fn new(operation_type: OperationType, selections: Vec<Selection>) -> Self {
        Self {
            operation_type,
            name: None,
            variable_definitions: Vec::new(),
            directives: Vec::new(),
            selection_set: SelectionSet::with_selections(selections),
        }
    }

    /// Create a new query operation
    pub fn query(name: Option<Name>, selections: Vec<Selection>) -> Self {
        Self::named(OperationType::Query, name, selections)
    }

    /// Create a new mutation operation
    pub fn mutation(name: Option<Name>, selections: Vec<Selection>) -> Self {
        Self::named(OperationType::Mutation, name, selections)
    }

    /// Create a new subscription operation
    pub fn subscription(name: Option<Name>, selections: Vec<Selection>) -> Self {
        Self::named(OperationType::Subscription, name, selections)
    }

    fn named(operation_type: OperationType, name: Option<Name>, selections: Vec<Selection>) -> Self {
        let mut op = Self::new(operation_type, selections);
        op.name = name;
        op
    }

    /// Set the operation's name.
    pub fn name(&mut self, name: Option<Name>) {
        self.name = name;
    }

    /// Add a variable definition.
    pub fn variable_definition(&mut self, variable_definition: VariableDefinition) {
        self.variable_definitions.push(variable_definition);
    }

    /// Add a directive.
    pub fn directive(&mut self, directive: Directive) {
        self.directives.push(directive);
    }

    /// Add a selection.
    pub fn selection(&mut self, selection: Selection) {
        self.selection_set.selection(selection);
    }

    /// Returns the operation type.
    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }
}

impl Encode for Operation {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        self.operation_type.encode_to(buf)?;
        // An empty name is the same as no name.
        if let Some(name) = self.name.as_ref().filter(|name| !name.as_str().is_empty()) {
            buf.push(' ');
            name.encode_to(buf)?;
        }
        if !self.variable_definitions.is_empty() {
            delimited(buf, '(', ')', &self.variable_definitions, |buf, var_def| {
                var_def.encode_to(buf)
            })?;
        }
        space_prefixed(buf, &self.directives)?;
        buf.push(' ');
        self.selection_set.encode_to(buf)
    }
}

/// The OperationType type represents the kind of operation
///
/// *OperationType*:
///     query | mutation | subscription
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#OperationType).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// Represents a query operation
    Query,
    /// Represents a mutation operation
    Mutation,
    /// Represents a subscription operation
    Subscription,
}

impl OperationType {
    /// Returns the keyword for this operation type.
    pub const fn name(self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

impl Encode for OperationType {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        buf.push_str(self.name());
        Ok(())
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
