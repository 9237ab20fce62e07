use crate::{
    encode::space_prefixed, Directive, Encode, EncodeError, FragmentName, Name, Selection,
    SelectionSet,
};

/// The FragmentDefinition type represents a fragment definition
///
/// *FragmentDefinition*:
///     fragment FragmentName TypeCondition Directives? SelectionSet
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#FragmentDefinition).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Encode, Field, FragmentDefinition};
///
/// let fragment_def = FragmentDefinition::new(
///     "myFragment",
///     "User",
///     vec![Field::new("myField").into()],
/// );
///
/// assert_eq!(
///     fragment_def.encode().unwrap(),
///     "fragment myFragment on User { myField }"
/// );
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentDefinition {
    name: FragmentName,
    type_condition: Name,
    directives: Vec<Directive>,
    selection_set: SelectionSet,
}

impl FragmentDefinition {
    /// Create an instance of FragmentDefinition.
    pub fn new(
        name: impl Into<FragmentName>,
        type_condition: impl Into<Name>,
        selections: Vec<Selection>,
    ) -> Self {
        Self {
            name: name.into(),
            type_condition: type_condition.into(),
            directives: Vec::new(),
            selection_set: SelectionSet::with_selections(selections),
        }
    }

    /// Add a directive.
    pub fn directive(&mut self, directive: Directive) {
        self.directives.push(directive)
    }

    /// Returns the fragment's name.
    pub fn name(&self) -> &FragmentName {
        &self.name
    }
}

impl Encode for FragmentDefinition {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        buf.push_str("fragment ");
        self.name.encode_to(buf)?;
        buf.push_str(" on ");
        self.type_condition.encode_to(buf)?;
        space_prefixed(buf, &self.directives)?;
        buf.push(' ');
        self.selection_set.encode_to(buf)
    }
}

/// The FragmentSpread type represents a named fragment used in a selection set.
///
/// *FragmentSpread*:
///     ... FragmentName Directives?
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#FragmentSpread).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Encode, FragmentSpread};
///
/// let fragment = FragmentSpread::new("myFragment");
/// assert_eq!(fragment.encode().unwrap(), "... myFragment");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSpread {
    name: FragmentName,
    directives: Vec<Directive>,
}

impl FragmentSpread {
    /// Create a new instance of FragmentSpread
    pub fn new(name: impl Into<FragmentName>) -> Self {
        Self {
            name: name.into(),
            directives: Vec::new(),
        }
    }

    /// Add a directive.
    pub fn directive(&mut self, directive: Directive) {
        self.directives.push(directive)
    }
}

impl Encode for FragmentSpread {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        buf.push_str("... ");
        self.name.encode_to(buf)?;
        space_prefixed(buf, &self.directives)
    }
}

/// The InlineFragment type represents an inline fragment in a selection set that could be used as a field
///
/// *InlineFragment*:
///     ... TypeCondition? Directives? SelectionSet
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#sec-Inline-Fragments).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Encode, Field, InlineFragment};
///
/// let mut inline_fragment = InlineFragment::new(vec![Field::new("message").into()]);
/// inline_fragment.type_condition(Some("Commit".into()));
///
/// assert_eq!(inline_fragment.encode().unwrap(), "... on Commit { message }");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InlineFragment {
    type_condition: Option<Name>,
    directives: Vec<Directive>,
    selection_set: SelectionSet,
}

impl InlineFragment {
    /// Create an instance of InlineFragment without a type condition
    pub fn new(selections: Vec<Selection>) -> Self {
        Self {
            type_condition: None,
            directives: Vec::new(),
            selection_set: SelectionSet::with_selections(selections),
        }
    }

    /// Create an instance of InlineFragment applying to the given type
    pub fn on(type_condition: impl Into<Name>, selections: Vec<Selection>) -> Self {
        let mut inline_fragment = Self::new(selections);
        inline_fragment.type_condition = Some(type_condition.into());
        inline_fragment
    }

    /// Add a directive.
    pub fn directive(&mut self, directive: Directive) {
        self.directives.push(directive)
    }

    /// Set the inline fragment's type condition.
    pub fn type_condition(&mut self, type_condition: Option<Name>) {
        self.type_condition = type_condition;
    }
}

impl Encode for InlineFragment {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        buf.push_str("...");
        if let Some(type_condition) = &self.type_condition {
            buf.push_str(" on ");
            type_condition.encode_to(buf)?;
        }
        space_prefixed(buf, &self.directives)?;
        buf.push(' ');
        self.selection_set.encode_to(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Argument, Field, Value};
    use pretty_assertions::assert_eq;

    #[test]
    fn it_encodes_simple_inline_fragment() {
        let inline_fragment = InlineFragment::on("Commit", vec![Field::new("message").into()]);

        assert_eq!(
            inline_fragment.encode().unwrap(),
            "... on Commit { message }"
        );
    }

    #[test]
    fn it_encodes_untyped_inline_fragment_with_directive() {
        let mut include = Directive::new("include");
        include.arg(Argument::new("if", Value::Boolean(false)));
        let mut inline_fragment = InlineFragment::new(vec![Field::new("name").into()]);
        inline_fragment.directive(include);

        assert_eq!(
            inline_fragment.encode().unwrap(),
            "... @include(if: false) { name }"
        );
        assert_eq!(
            InlineFragment::new(vec![Field::new("name").into()])
                .encode()
                .unwrap(),
            "... { name }"
        );
    }

    #[test]
    fn it_encodes_simple_fragment_spread() {
        let mut fragment = FragmentSpread::new("myFragment");
        assert_eq!(fragment.encode().unwrap(), "... myFragment");

        fragment.directive(Directive::new("defer"));
        assert_eq!(fragment.encode().unwrap(), "... myFragment @defer");
    }

    #[test]
    fn it_encodes_deeper_inline_fragment() {
        let another_nested_field = Field::with_selections(
            "anotherNestedField",
            vec![Field::new("anotherNestedBisField").into()],
        );
        let other_inline_fragment = InlineFragment::new(vec![
            Field::new("nestedField").into(),
            another_nested_field.into(),
        ]);
        let inline_fragment = InlineFragment::on(
            "User",
            vec![
                Field::new("myField").into(),
                FragmentSpread::new("myFragment").into(),
                other_inline_fragment.into(),
            ],
        );

        assert_eq!(
            inline_fragment.encode().unwrap(),
            "... on User { myField ... myFragment ... { nestedField anotherNestedField { anotherNestedBisField } } }"
        );
    }

    #[test]
    fn it_encodes_fragment_definition() {
        let mut fragment_def =
            FragmentDefinition::new("myFragment", "User", vec![Field::new("myField").into()]);
        let mut directive = Directive::new("myDirective");
        directive.arg(Argument::new("first", Value::Int(5)));
        fragment_def.directive(directive);

        assert_eq!(
            fragment_def.encode().unwrap(),
            "fragment myFragment on User @myDirective(first: 5) { myField }"
        );
    }

    #[test]
    fn it_rejects_reserved_fragment_names() {
        let fragment_def = FragmentDefinition::new("on", "User", vec![Field::new("id").into()]);
        assert_eq!(
            fragment_def.encode(),
            Err(EncodeError::ReservedFragmentName("on".to_string()))
        );
        assert_eq!(
            FragmentSpread::new("on").encode(),
            Err(EncodeError::ReservedFragmentName("on".to_string()))
        );
    }
}
