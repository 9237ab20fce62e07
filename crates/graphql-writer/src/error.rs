use thiserror::Error;

/// Errors that can occur when encoding a document into GraphQL text.
///
/// Encoding never produces partial output: the first error found aborts the
/// whole encode and is returned to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A [`Name`](crate::Name) or [`FragmentName`](crate::FragmentName) is not
    /// in valid [GraphQL name](https://spec.graphql.org/June2018/#Name) syntax.
    #[error("`{0}` is not a valid GraphQL name")]
    InvalidName(String),
    /// A [`FragmentName`](crate::FragmentName) is the reserved word `on`.
    #[error("`{0}` cannot be used as a fragment name")]
    ReservedFragmentName(String),
    /// An [`EnumValue`](crate::EnumValue) is `true`, `false` or `null`, which
    /// would read back as a boolean or null value.
    #[error("`{0}` cannot be used as an enum value")]
    ReservedEnumValue(String),
    /// A [`Document`](crate::Document) has no definitions.
    #[error("a document must contain at least one definition")]
    EmptyDocument,
    /// A value has no representation in the GraphQL value grammar.
    #[error("unsupported value type: {0}")]
    UnsupportedValueType(String),
}
