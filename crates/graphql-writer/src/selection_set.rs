use crate::{Encode, EncodeError, Field, FragmentSpread, InlineFragment};

/// The SelectionSet type represents a selection_set type in a fragment spread,
/// an operation or a field
///
/// *SelectionSet*:
///     { Selection+ }
///
/// Selections are separated by a single space and padded from the braces, so
/// an empty selection set encodes as `{ }`.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#sec-Selection-Sets).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Encode, Field, FragmentSpread, Selection, SelectionSet};
///
/// let selections = vec![
///     Selection::Field(Field::aliased("myAlias", "myField")),
///     Selection::FragmentSpread(FragmentSpread::new("myFragment")),
/// ];
/// let selection_set = SelectionSet::with_selections(selections);
///
/// assert_eq!(
///     selection_set.encode().unwrap(),
///     "{ myAlias: myField ... myFragment }"
/// );
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
pub struct SelectionSet {
    selections: Vec<Selection>,
}

impl SelectionSet {
    /// Create an instance of SelectionSet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an instance of SelectionSet given its selections
    pub fn with_selections(selections: Vec<Selection>) -> Self {
        Self { selections }
    }

    /// Add a selection in the SelectionSet
    pub fn selection(&mut self, selection: Selection) {
        self.selections.push(selection);
    }

    /// Returns whether the selection set has no selections.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Returns the selections in order.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }
}

impl From<Vec<Selection>> for SelectionSet {
    fn from(selections: Vec<Selection>) -> Self {
        Self::with_selections(selections)
    }
}

impl Encode for SelectionSet {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        buf.push('{');
        for selection in &self.selections {
            buf.push(' ');
            selection.encode_to(buf)?;
        }
        buf.push_str(" }");
        Ok(())
    }
}

/// The Selection type represents a selection in a selection set
/// *Selection*:
///     Field | FragmentSpread | InlineFragment
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#Selection).
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Represents a field
    Field(Field),
    /// Represents a fragment spread
    FragmentSpread(FragmentSpread),
    /// Represents an inline fragment
    InlineFragment(InlineFragment),
}

impl Encode for Selection {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        match self {
            Selection::Field(field) => field.encode_to(buf),
            Selection::FragmentSpread(fragment_spread) => fragment_spread.encode_to(buf),
            Selection::InlineFragment(inline_fragment) => inline_fragment.encode_to(buf),
        }
    }
}

impl From<Field> for Selection {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<FragmentSpread> for Selection {
    fn from(fragment_spread: FragmentSpread) -> Self {
        Self::FragmentSpread(fragment_spread)
    }
}

impl From<InlineFragment> for Selection {
    fn from(inline_fragment: InlineFragment) -> Self {
        Self::InlineFragment(inline_fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_encodes_selection_set() {
        let selection_set = SelectionSet::with_selections(vec![
            Field::aliased("myAlias", "myField").into(),
            FragmentSpread::new("myFragment").into(),
        ]);

        assert_eq!(
            selection_set.encode().unwrap(),
            "{ myAlias: myField ... myFragment }"
        )
    }

    #[test]
    fn it_encodes_empty_selection_set() {
        assert_eq!(SelectionSet::new().encode().unwrap(), "{ }");
    }

    #[test]
    fn it_encodes_deeper_selection_set() {
        let mut selection_set = SelectionSet::new();
        selection_set.selection(
            Field::with_selections(
                "first",
                vec![Field::with_selections("second", vec![Field::new("third").into()]).into()],
            )
            .into(),
        );
        selection_set.selection(FragmentSpread::new("myFragment").into());

        assert_eq!(
            selection_set.encode().unwrap(),
            "{ first { second { third } } ... myFragment }"
        )
    }

    #[test]
    fn it_fails_on_first_invalid_selection() {
        let selection_set = SelectionSet::with_selections(vec![
            Field::new("ok").into(),
            Field::new("bad name").into(),
            FragmentSpread::new("on").into(),
        ]);

        assert_eq!(
            selection_set.encode(),
            Err(EncodeError::InvalidName("bad name".to_string()))
        );
    }
}
