use crate::{
    encode::space_prefixed, Argument, Arguments, Directive, Encode, EncodeError, Name, Selection,
    SelectionSet,
};

/// The Field type represents a field selected in a selection set.
///
/// *Field*:
///     Alias? Name Arguments? Directives? SelectionSet?
///
/// Every optional segment is left out entirely when empty: a field with no
/// arguments, no directives and no sub-selections encodes as just its name.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#sec-Language.Fields).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Argument, Directive, Encode, Field};
///
/// let mut field = Field::aliased("smallPic", "profilePic");
/// field.arg(Argument::new("size", 64));
/// field.directive(Directive::new("cached"));
/// field.selection(Field::new("url").into());
///
/// assert_eq!(
///     field.encode().unwrap(),
///     "smallPic: profilePic(size: 64) @cached { url }"
/// );
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Field {
    alias: Option<Name>,
    name: Name,
    arguments: Arguments,
    directives: Vec<Directive>,
    selection_set: SelectionSet,
}

impl Field {
    /// Create an instance of Field
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            alias: None,
            name: name.into(),
            arguments: Arguments::new(),
            directives: Vec::new(),
            selection_set: SelectionSet::new(),
        }
    }

    /// Create an instance of Field selected under an alias
    pub fn aliased(alias: impl Into<Name>, name: impl Into<Name>) -> Self {
        let mut field = Self::new(name);
        field.alias = Some(alias.into());
        field
    }

    /// Create an instance of Field with its sub-selections
    pub fn with_selections(name: impl Into<Name>, selections: Vec<Selection>) -> Self {
        let mut field = Self::new(name);
        field.selection_set = SelectionSet::with_selections(selections);
        field
    }

    /// Set the field's alias.
    pub fn alias(&mut self, alias: Option<Name>) {
        self.alias = alias;
    }

    /// Add an argument to the field.
    pub fn arg(&mut self, arg: Argument) {
        self.arguments.arg(arg);
    }

    /// Set all of the field's arguments.
    pub fn arguments(&mut self, arguments: Arguments) {
        self.arguments = arguments;
    }

    /// Add a directive to the field.
    pub fn directive(&mut self, directive: Directive) {
        self.directives.push(directive);
    }

    /// Add a sub-selection to the field.
    pub fn selection(&mut self, selection: Selection) {
        self.selection_set.selection(selection);
    }

    /// Set the field's selection set.
    pub fn selection_set(&mut self, selection_set: SelectionSet) {
        self.selection_set = selection_set;
    }
}

impl Encode for Field {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        if let Some(alias) = &self.alias {
            alias.encode_to(buf)?;
            buf.push_str(": ");
        }
        self.name.encode_to(buf)?;
        self.arguments.encode_to(buf)?;
        space_prefixed(buf, &self.directives)?;

        if !self.selection_set.is_empty() {
            buf.push(' ');
            self.selection_set.encode_to(buf)?;
        }

        Ok(())
    }
}
