use crate::{encode::space_separated, Encode, EncodeError, FragmentDefinition, Operation};

/// The `Document` type represents a GraphQL executable document. A GraphQL
/// Document describes a complete request string operated on by a GraphQL
/// service or client.
///
/// *Document*:
///     ExecutableDefinition+
///
/// Definitions are written in insertion order on a single line, separated by
/// a single space. A document without definitions is rejected with
/// [`EncodeError::EmptyDocument`].
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#sec-Document).
///
/// ### Example
/// ```rust
/// use graphql_writer::{
///     Document, Encode, Field, FragmentDefinition, FragmentSpread, Name, Operation,
/// };
///
/// let mut document = Document::new();
/// document.operation(Operation::query(
///     Name::new("Viewer"),
///     vec![Field::with_selections("viewer", vec![FragmentSpread::new("userFields").into()]).into()],
/// ));
/// document.fragment(FragmentDefinition::new(
///     "userFields",
///     "User",
///     vec![Field::new("login").into()],
/// ));
///
/// assert_eq!(
///     document.encode().unwrap(),
///     "query Viewer { viewer { ... userFields } } fragment userFields on User { login }"
/// );
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Document {
    definitions: Vec<ExecutableDefinition>,
}

impl Document {
    /// Create a new instance of Document
    pub fn new() -> Self {
        Self::default()
    }

    /// Add operation
    pub fn operation(&mut self, operation: Operation) {
        self.definitions
            .push(ExecutableDefinition::Operation(operation));
    }

    /// Add fragment
    pub fn fragment(&mut self, fragment_definition: FragmentDefinition) {
        self.definitions
            .push(ExecutableDefinition::Fragment(fragment_definition));
    }

    /// Add any executable definition
    pub fn definition(&mut self, definition: ExecutableDefinition) {
        self.definitions.push(definition);
    }

    /// Returns the definitions in order.
    pub fn definitions(&self) -> &[ExecutableDefinition] {
        &self.definitions
    }
}

impl FromIterator<ExecutableDefinition> for Document {
    fn from_iter<I: IntoIterator<Item = ExecutableDefinition>>(iter: I) -> Self {
        Self {
            definitions: iter.into_iter().collect(),
        }
    }
}

impl Encode for Document {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        let _span = tracing::trace_span!("encode_document", definitions = self.definitions.len())
            .entered();
        if self.definitions.is_empty() {
            return Err(EncodeError::EmptyDocument);
        }
        space_separated(buf, &self.definitions, |buf, definition| {
            definition.encode_to(buf)
        })
    }
}

/// The ExecutableDefinition type represents a top-level definition of an
/// executable document.
///
/// *ExecutableDefinition*:
///     OperationDefinition | FragmentDefinition
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#ExecutableDefinition).
#[derive(Debug, PartialEq, Clone)]
pub enum ExecutableDefinition {
    /// An operation definition.
    Operation(Operation),
    /// A fragment definition.
    Fragment(FragmentDefinition),
}

impl Encode for ExecutableDefinition {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        match self {
            ExecutableDefinition::Operation(operation) => operation.encode_to(buf),
            ExecutableDefinition::Fragment(fragment) => fragment.encode_to(buf),
        }
    }
}

impl From<Operation> for ExecutableDefinition {
    fn from(operation: Operation) -> Self {
        Self::Operation(operation)
    }
}

impl From<FragmentDefinition> for ExecutableDefinition {
    fn from(fragment: FragmentDefinition) -> Self {
        Self::Fragment(fragment)
    }
}
