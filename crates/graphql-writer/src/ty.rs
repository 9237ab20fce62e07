use crate::{encode::delimited, Encode, EncodeError, Name};

/// Type reference used in a variable definition.
/// Can be a `Named` type, a `List` or a `NonNull` type.
///
/// *Type*:
///     NamedType | ListType | NonNullType
///
/// A non-null type wraps a [`NonNullTypeReference`], which cannot itself be
/// non-null, so `Int!!` cannot be built.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#sec-Type-References).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Encode, TypeReference};
///
/// let ty = TypeReference::non_null_list(TypeReference::non_null_named("String"));
/// assert_eq!(ty.encode().unwrap(), "[String!]!");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TypeReference {
    /// The named type, e.g. `Int`.
    Named(Name),
    /// The list type, e.g. `[Int]`.
    List(Vec<TypeReference>),
    /// The non-null type, e.g. `Int!`.
    NonNull(NonNullTypeReference),
}

impl TypeReference {
    /// Create a new instance of TypeReference::Named.
    pub fn named(name: impl Into<Name>) -> Self {
        Self::Named(name.into())
    }

    /// Create a new instance of TypeReference::List wrapping a single type.
    pub fn list(ty: TypeReference) -> Self {
        Self::List(vec![ty])
    }

    /// Create a new instance of a non-null named type.
    pub fn non_null_named(name: impl Into<Name>) -> Self {
        Self::NonNull(NonNullTypeReference::Named(name.into()))
    }

    /// Create a new instance of a non-null list type wrapping a single type.
    pub fn non_null_list(ty: TypeReference) -> Self {
        Self::NonNull(NonNullTypeReference::List(vec![ty]))
    }
}

impl Encode for TypeReference {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        match self {
            TypeReference::Named(name) => name.encode_to(buf),
            TypeReference::List(types) => encode_list(buf, types),
            TypeReference::NonNull(ty) => ty.encode_to(buf),
        }
    }
}

impl From<NonNullTypeReference> for TypeReference {
    fn from(ty: NonNullTypeReference) -> Self {
        Self::NonNull(ty)
    }
}

/// The inner type of a non-null type reference.
///
/// *NonNullType*:
///     NamedType !
///     ListType !
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum NonNullTypeReference {
    /// The non-null named type, e.g. `Int!`.
    Named(Name),
    /// The non-null list type, e.g. `[Int]!`.
    List(Vec<TypeReference>),
}

impl Encode for NonNullTypeReference {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        match self {
            NonNullTypeReference::Named(name) => name.encode_to(buf)?,
            NonNullTypeReference::List(types) => encode_list(buf, types)?,
        }
        buf.push('!');
        Ok(())
    }
}

fn encode_list(buf: &mut String, types: &[TypeReference]) -> Result<(), EncodeError> {
    delimited(buf, '[', ']', types, |buf, ty| ty.encode_to(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encodes_named_type() {
        assert_eq!(TypeReference::named("String").encode().unwrap(), "String");
    }

    #[test]
    fn encodes_list_type() {
        let list = TypeReference::list(TypeReference::named("String"));

        assert_eq!(list.encode().unwrap(), "[String]");
    }

    #[test]
    fn encodes_non_null_list_type() {
        let non_null = TypeReference::non_null_list(TypeReference::named("String"));

        assert_eq!(non_null.encode().unwrap(), "[String]!");
    }

    #[test]
    fn encodes_non_null_list_non_null_list_type() {
        let inner = TypeReference::non_null_list(TypeReference::named("String"));
        let outer = TypeReference::non_null_list(inner);

        assert_eq!(outer.encode().unwrap(), "[[String]!]!");
    }

    #[test]
    fn encodes_multi_element_list_with_spaces() {
        let list = TypeReference::List(vec![
            TypeReference::named("Int"),
            TypeReference::non_null_named("String"),
        ]);

        assert_eq!(list.encode().unwrap(), "[Int String!]");
    }

    #[test]
    fn fails_on_invalid_named_type() {
        let list = TypeReference::list(TypeReference::named("Not Valid"));

        assert_eq!(
            list.encode(),
            Err(EncodeError::InvalidName("Not Valid".to_string()))
        );
    }
}
