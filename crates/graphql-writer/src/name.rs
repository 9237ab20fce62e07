use std::fmt;

use crate::{Encode, EncodeError};

/// A GraphQL identifier.
///
/// *Name*:
///     /[_A-Za-z][_0-9A-Za-z]*/
///
/// A `Name` can be created in two ways. [`Name::new`] checks the syntax up
/// front and returns `None` for invalid input. [`Name::new_unchecked`] (and the
/// `From<&str>` / `From<String>` impls) store the string as-is, which makes it
/// cheap to build documents from arbitrary identifiers. Either way the syntax is
/// checked again when the name is encoded, so an invalid name always surfaces
/// as [`EncodeError::InvalidName`] instead of broken output.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#sec-Names).
///
/// ### Example
/// ```rust
/// use graphql_writer::{Encode, EncodeError, Name};
///
/// assert!(Name::new("a1").is_some());
/// assert!(Name::new("1abc").is_none());
///
/// let unchecked = Name::new_unchecked("!!!");
/// assert_eq!(
///     unchecked.encode(),
///     Err(EncodeError::InvalidName("!!!".to_string()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new `Name`, returning `None` if `value` is not valid name syntax.
    pub fn new(value: &str) -> Option<Self> {
        Self::valid_syntax(value).then(|| Self(value.to_owned()))
    }

    /// Create a new `Name` without checking its syntax.
    ///
    /// The check is deferred until the name is encoded.
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw string this name was created from.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the given string is a valid GraphQL name.
    ///
    /// <https://spec.graphql.org/June2018/#Name>
    pub const fn valid_syntax(value: &str) -> bool {
        let bytes = value.as_bytes();
        let Some(&first) = bytes.first() else {
            return false;
        };
        if !Self::char_is_name_start(first) {
            return false;
        }
        let mut i = 1;
        while i < bytes.len() {
            if !Self::char_is_name_continue(bytes[i]) {
                return false;
            }
            i += 1
        }
        true
    }

    /// Check the name syntax, returning the string to write on success.
    pub fn validate(&self) -> Result<&str, EncodeError> {
        if Self::valid_syntax(&self.0) {
            Ok(&self.0)
        } else {
            Err(EncodeError::InvalidName(self.0.clone()))
        }
    }

    const fn char_is_name_start(byte: u8) -> bool {
        byte.is_ascii_alphabetic() || byte == b'_'
    }

    const fn char_is_name_continue(byte: u8) -> bool {
        byte.is_ascii_alphanumeric() || byte == b'_'
    }
}

impl Encode for Name {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        buf.push_str(self.validate()?);
        Ok(())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self::new_unchecked(value)
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self::new_unchecked(value)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The name of a fragment definition or fragment spread.
///
/// *FragmentName*:
///     Name *but not* `on`
///
/// Follows the same two-phase validation as [`Name`]: the reserved word check
/// is applied both by [`FragmentName::new`] and again at encode time.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/June2018/#FragmentName).
///
/// ### Example
/// ```rust
/// use graphql_writer::FragmentName;
///
/// assert!(FragmentName::new("userFields").is_some());
/// assert!(FragmentName::new("on").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FragmentName(Name);

impl FragmentName {
    const RESERVED: &'static str = "on";

    /// Create a new `FragmentName`, returning `None` if `value` is not valid
    /// name syntax or is the reserved word `on`.
    pub fn new(value: &str) -> Option<Self> {
        if value == Self::RESERVED {
            return None;
        }
        Name::new(value).map(Self)
    }

    /// Create a new `FragmentName` without checking it.
    ///
    /// The check is deferred until the name is encoded.
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(Name::new_unchecked(value))
    }

    /// Returns the raw string this name was created from.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Check the name syntax and the reserved word, returning the string to
    /// write on success.
    pub fn validate(&self) -> Result<&str, EncodeError> {
        let value = self.0.validate()?;
        if value == Self::RESERVED {
            return Err(EncodeError::ReservedFragmentName(value.to_owned()));
        }
        Ok(value)
    }
}

impl Encode for FragmentName {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        buf.push_str(self.validate()?);
        Ok(())
    }
}

impl fmt::Display for FragmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for FragmentName {
    fn from(value: &str) -> Self {
        Self::new_unchecked(value)
    }
}

impl From<String> for FragmentName {
    fn from(value: String) -> Self {
        Self::new_unchecked(value)
    }
}
