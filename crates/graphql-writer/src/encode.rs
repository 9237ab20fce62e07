use crate::EncodeError;

/// Encode a document node as compact, single-line GraphQL text.
///
/// Every node of the document model implements `Encode`. Composite nodes
/// encode their children depth-first, left to right, joining them with a
/// single space. Empty optional segments (arguments, directives, a field's
/// selection set) are left out entirely.
///
/// ### Example
/// ```rust
/// use graphql_writer::{Encode, Field, Operation};
///
/// let op = Operation::query(None, vec![Field::new("f1").into(), Field::new("f2").into()]);
/// assert_eq!(op.encode().unwrap(), "query { f1 f2 }");
/// ```
pub trait Encode {
    /// Append the encoded node to `buf`.
    ///
    /// On error, `buf` may hold a prefix of the output. Use
    /// [`encode`](Encode::encode) to never observe partial output.
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError>;

    /// Encode the node into a new string.
    fn encode(&self) -> Result<String, EncodeError> {
        let mut buf = String::new();
        match self.encode_to(&mut buf) {
            Ok(()) => Ok(buf),
            Err(err) => {
                tracing::debug!(error = %err, "failed to encode GraphQL node");
                Err(err)
            }
        }
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        (**self).encode_to(buf)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode_to(&self, buf: &mut String) -> Result<(), EncodeError> {
        (**self).encode_to(buf)
    }
}

/// Example output: `a b c`
pub(crate) fn space_separated<T>(
    buf: &mut String,
    values: impl IntoIterator<Item = T>,
    encode_one: impl Fn(&mut String, T) -> Result<(), EncodeError>,
) -> Result<(), EncodeError> {
    let mut iter = values.into_iter();
    if let Some(first) = iter.next() {
        encode_one(buf, first)?;
        for value in iter {
            buf.push(' ');
            encode_one(buf, value)?;
        }
    }
    Ok(())
}

/// Example output: `(a b c)`, or `[]` when `values` is empty.
pub(crate) fn delimited<T>(
    buf: &mut String,
    open: char,
    close: char,
    values: impl IntoIterator<Item = T>,
    encode_one: impl Fn(&mut String, T) -> Result<(), EncodeError>,
) -> Result<(), EncodeError> {
    buf.push(open);
    space_separated(buf, values, encode_one)?;
    buf.push(close);
    Ok(())
}

/// Example output: ` @a @b(x: 1)`, with a leading space before each item.
pub(crate) fn space_prefixed<T: Encode>(buf: &mut String, values: &[T]) -> Result<(), EncodeError> {
    for value in values {
        buf.push(' ');
        value.encode_to(buf)?;
    }
    Ok(())
}
